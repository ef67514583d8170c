//! Collaborator traits for the hosting environment.
//!
//! The core never reads documents, spawns players, or shows pickers itself;
//! hosts implement these seams and the controller drives them.

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Captured output of one finished player session.
#[derive(Debug, Clone, Default)]
pub struct PlayerOutput {
    /// Everything the player wrote to stdout, including the helper
    /// script's `[ HH:MM:SS ]` exit line.
    pub stdout: String,
    /// Everything the player wrote to stderr.
    pub stderr: String,
}

/// Access to the document the user is currently editing.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Identity of the active document, used to key reconciliation locks.
    /// `None` when nothing is open.
    fn active_document(&self) -> Option<PathBuf>;

    /// Full text of the active document, `None` when nothing is open.
    async fn read_active(&self) -> Result<Option<String>>;

    /// Replace the full text of the active document.
    async fn write_active(&self, text: &str) -> Result<()>;
}

/// Launches the external media player and waits for it to exit.
#[async_trait]
pub trait PlayerLauncher: Send + Sync {
    /// Play `file_path` from `start_timestamp` and return the captured
    /// output once the player closes. One invocation per activation; the
    /// await on exit is the single blocking point of a session.
    async fn launch(&self, file_path: &str, start_timestamp: &str) -> Result<PlayerOutput>;
}

/// Lets the user choose media files to link.
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Returns the chosen paths, or `None` when the user cancelled.
    async fn choose_files(&self, start_dir: &Path) -> Result<Option<Vec<PathBuf>>>;
}
