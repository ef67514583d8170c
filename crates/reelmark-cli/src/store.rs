//! File-backed implementations of the core collaborator traits.

use async_trait::async_trait;
use reelmark_core::{DocumentStore, Error, FilePicker, Result};
use std::path::{Path, PathBuf};

/// Document store over a single markdown file on disk.
///
/// The CLI's "active document" is whatever file the command named; a file
/// that disappears mid-session reads as no active document, which the
/// controller treats as a silent skip.
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    /// Store over the given markdown file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    fn active_document(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }

    async fn read_active(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Document(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn write_active(&self, text: &str) -> Result<()> {
        tokio::fs::write(&self.path, text).await.map_err(|e| {
            Error::Document(format!("Failed to write {}: {e}", self.path.display()))
        })
    }
}

/// Picker fed from command line arguments instead of a dialog.
///
/// An empty argument list reads as cancellation.
pub struct ArgFilePicker {
    files: Vec<PathBuf>,
}

impl ArgFilePicker {
    /// Picker yielding the given paths.
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }
}

#[async_trait]
impl FilePicker for ArgFilePicker {
    async fn choose_files(&self, _start_dir: &Path) -> Result<Option<Vec<PathBuf>>> {
        if self.files.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.files.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_and_writes_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        tokio::fs::write(&path, "hello").await.unwrap();

        let store = FileDocumentStore::new(path.clone());
        assert_eq!(store.read_active().await.unwrap().as_deref(), Some("hello"));

        store.write_active("updated").await.unwrap();
        assert_eq!(
            tokio::fs::read_to_string(&path).await.unwrap(),
            "updated"
        );
    }

    #[tokio::test]
    async fn missing_file_reads_as_no_active_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDocumentStore::new(dir.path().join("gone.md"));
        assert!(store.read_active().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_arg_picker_is_a_cancellation() {
        let picker = ArgFilePicker::new(Vec::new());
        let chosen = picker.choose_files(Path::new("/")).await.unwrap();
        assert!(chosen.is_none());
    }
}
