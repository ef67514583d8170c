//! Error types for the player crate.

use thiserror::Error;

/// Errors from launching or finishing an mpv session.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The player process could not be started.
    #[error("Failed to launch player: {0}")]
    Launch(String),

    /// The player started but exited abnormally.
    #[error("Player exited abnormally: {0}")]
    Exit(String),

    /// IO error while preparing the helper script.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PlayerError> for reelmark_core::Error {
    fn from(err: PlayerError) -> Self {
        reelmark_core::Error::Player(err.to_string())
    }
}

/// Result type for player operations.
pub type Result<T> = std::result::Result<T, PlayerError>;
