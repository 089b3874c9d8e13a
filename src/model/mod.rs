//! Playlist data model
//!
//! Song titles and the ordered playlist they form. Independent of how
//! the playlist is persisted or displayed.

mod entry;
mod playlist;

pub use entry::Entry;
pub use playlist::Playlist;
