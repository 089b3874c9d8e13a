//! Error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing the playlist file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read playlist file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write playlist file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Menu input outside of 1, 2 or 3
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid menu choice: {0:?}")]
pub struct InvalidMenuChoice(pub String);

/// Failure that ends the interactive session
#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("console I/O failed")]
    Console(#[from] io::Error),
}
