//! Family Playlist - keep a running list of favourite songs
//!
//! Song titles are appended to a plain text file, one per line, and can
//! be listed back in the order they were added.

pub mod error;
pub mod menu;
pub mod model;
pub mod store;

pub use error::{InvalidMenuChoice, MenuError, StoreError};
pub use menu::{MenuChoice, MenuLoop};
pub use model::{Entry, Playlist};
pub use store::{PlaylistStore, StoreConfig};
