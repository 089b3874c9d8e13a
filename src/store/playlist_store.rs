use super::StoreConfig;
use crate::error::StoreError;
use crate::model::{Entry, Playlist};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Append-only, line-oriented playlist file
///
/// Every call opens the file, does its work and closes it again. No
/// state is cached between calls; the file is the only source of truth.
#[derive(Debug, Clone)]
pub struct PlaylistStore {
    config: StoreConfig,
}

impl PlaylistStore {
    /// Create a store backed by the configured file
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Append titles to the end of the file, one per line
    ///
    /// Titles are trimmed and blank ones skipped. Returns how many lines
    /// were written. When nothing is left to write the file is not
    /// touched, so it is not created either.
    pub fn append_entries<I, S>(&self, titles: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<Entry> = titles
            .into_iter()
            .filter_map(|t| Entry::parse(t.as_ref()))
            .collect();

        if entries.is_empty() {
            log::debug!("Nothing to append to {:?}", self.path());
            return Ok(0);
        }

        self.write_lines(&entries).map_err(|source| StoreError::Write {
            path: self.path().to_path_buf(),
            source,
        })?;

        log::debug!("Appended {} entries to {:?}", entries.len(), self.path());
        Ok(entries.len())
    }

    /// Read every entry back in file order
    ///
    /// A missing file is an empty playlist. Blank lines are skipped.
    pub fn load_entries(&self) -> Result<Playlist, StoreError> {
        Ok(self.load_existing()?.unwrap_or_default())
    }

    /// Like [`load_entries`](Self::load_entries), but `None` when the file
    /// does not exist yet
    ///
    /// Any other failure to open or read the file is an error. A bare `\r`
    /// counts as a line break, so both halves of `"A\rB"` are kept.
    pub fn load_existing(&self) -> Result<Option<Playlist>, StoreError> {
        let read_error = |source: io::Error| StoreError::Read {
            path: self.path().to_path_buf(),
            source,
        };

        let file = match File::open(self.path()) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Playlist file {:?} not found", self.path());
                return Ok(None);
            }
            Err(source) => return Err(read_error(source)),
        };

        let lines = BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .map_err(read_error)?;

        let playlist: Playlist = lines
            .iter()
            .flat_map(|line| line.split('\r'))
            .filter_map(Entry::parse)
            .collect();

        log::debug!("Loaded {} entries from {:?}", playlist.len(), self.path());
        Ok(Some(playlist))
    }

    fn write_lines(&self, entries: &[Entry]) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path())?;

        let mut writer = BufWriter::new(file);
        for entry in entries {
            writeln!(writer, "{}", entry)?;
        }
        writer.flush()
    }
}
