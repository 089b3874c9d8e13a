//! Store configuration

use std::path::PathBuf;

/// File name used when none is configured
pub const DEFAULT_PLAYLIST_FILE: &str = "playlist.dat";

/// Configuration for the playlist store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Playlist file; relative paths resolve against the working directory
    pub path: PathBuf,
}

impl StoreConfig {
    /// Create a configuration pointing at the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build a configuration from user input, expanding a leading `~`
    pub fn from_user_path(raw: &str) -> Self {
        let expanded = shellexpand::tilde(raw);
        Self::new(expanded.as_ref())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYLIST_FILE)
    }
}
