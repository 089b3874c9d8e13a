use super::Entry;

/// The ordered list of entries read back from the playlist file
///
/// Order is insertion order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<Entry>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in file order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Titles only, in file order
    pub fn titles(&self) -> Vec<&str> {
        self.iter().map(Entry::title).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display lines, numbered from 1 (`  1. Hey Jude`)
    pub fn numbered_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter()
            .enumerate()
            .map(|(idx, entry)| format!("  {}. {}", idx + 1, entry))
    }
}

impl FromIterator<Entry> for Playlist {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
