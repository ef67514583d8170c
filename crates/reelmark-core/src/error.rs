//! Error types for the reelmark core.

use thiserror::Error;

/// Errors that can cross the collaborator seams.
#[derive(Error, Debug)]
pub enum Error {
    /// Document store error.
    #[error("Document error: {0}")]
    Document(String),

    /// External player failed to start or exited abnormally. This is the
    /// only condition surfaced to the user; everything else is a silent
    /// skip.
    #[error("Player error: {0}")]
    Player(String),

    /// File picker error.
    #[error("Picker error: {0}")]
    Picker(String),

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
