use std::fmt;

/// A single song title as stored in the playlist file
///
/// Always trimmed and never empty. Titles cannot span lines: anything
/// after the first line break is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry(String);

impl Entry {
    /// Build an entry from raw user or file input
    ///
    /// Returns `None` when nothing but whitespace is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let first_line = raw.split(['\n', '\r']).next().unwrap_or_default();
        let title = first_line.trim();

        if title.is_empty() {
            None
        } else {
            Some(Self(title.to_string()))
        }
    }

    /// The song title
    pub fn title(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
