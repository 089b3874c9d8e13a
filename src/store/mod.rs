//! Playlist persistence
//!
//! One title per line in a plain UTF-8 text file. The file only ever grows.

pub mod config;
mod playlist_store;

pub use config::{StoreConfig, DEFAULT_PLAYLIST_FILE};
pub use playlist_store::PlaylistStore;
