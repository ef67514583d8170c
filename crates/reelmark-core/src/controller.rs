//! Playback controller: one click-to-writeback cycle per activation.
//!
//! The controller owns nothing but references to its collaborators and a map
//! of per-document locks. Player launches run concurrently; the
//! read-reconcile-write step serializes on the active document's lock so two
//! sessions over the same document cannot clobber each other's update.

use crate::codec::{format_video_link, LinkControl};
use crate::error::Result;
use crate::reconcile::{reconcile, start_timestamp_from_label};
use crate::traits::{DocumentStore, FilePicker, PlayerLauncher};
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Coordinates the codec, reconciler, and host collaborators.
pub struct PlaybackController {
    documents: Arc<dyn DocumentStore>,
    player: Arc<dyn PlayerLauncher>,
    /// One lock per document identity, created lazily.
    locks: DashMap<PathBuf, Arc<Mutex<()>>>,
    /// Directory the next picker dialog opens in; follows the most
    /// recently chosen file.
    start_dir: Mutex<PathBuf>,
}

impl PlaybackController {
    /// Create a controller over the given collaborators.
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        player: Arc<dyn PlayerLauncher>,
        start_dir: PathBuf,
    ) -> Self {
        Self {
            documents,
            player,
            locks: DashMap::new(),
            start_dir: Mutex::new(start_dir),
        }
    }

    fn document_lock(&self, id: &Path) -> Arc<Mutex<()>> {
        self.locks
            .entry(id.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Directory the next picker invocation starts in.
    pub async fn start_dir(&self) -> PathBuf {
        self.start_dir.lock().await.clone()
    }

    /// Launch the player for `control`, await its exit, and write the
    /// reconciled document back.
    ///
    /// Returns `Ok(true)` when the document was updated and `Ok(false)` on
    /// a silent skip (no active document, token gone, fixed token). Launch
    /// failures propagate; they are the one condition the host shows the
    /// user, and no mutation happens on that path.
    pub async fn open_video(&self, control: &LinkControl) -> Result<bool> {
        let start_timestamp = start_timestamp_from_label(&control.label);
        let output = self
            .player
            .launch(&control.token.file_path, &start_timestamp)
            .await?;

        let Some(doc_id) = self.documents.active_document() else {
            debug!("no active document, skipping timestamp update");
            return Ok(false);
        };

        let lock = self.document_lock(&doc_id);
        let _guard = lock.lock().await;

        let Some(text) = self.documents.read_active().await? else {
            debug!("active document vanished, skipping timestamp update");
            return Ok(false);
        };

        match reconcile(&control.link, &text, &output.stdout, &control.label) {
            Some(updated) => {
                self.documents.write_active(&updated).await?;
                debug!(link = %control.link, "timestamp written back");
                Ok(true)
            }
            None => {
                debug!(link = %control.link, "reconciliation skipped");
                Ok(false)
            }
        }
    }

    /// Run the picker and format one insertable link block per chosen file.
    ///
    /// Remembers the first chosen file's directory as the next start
    /// directory. Cancellation yields an empty list.
    pub async fn pick_and_format(&self, picker: &dyn FilePicker) -> Result<Vec<String>> {
        let start = self.start_dir().await;
        let Some(paths) = picker.choose_files(&start).await? else {
            debug!("picker cancelled");
            return Ok(Vec::new());
        };

        if let Some(dir) = paths.first().and_then(|p| p.parent()) {
            *self.start_dir.lock().await = dir.to_path_buf();
        }

        Ok(paths
            .iter()
            .map(|p| format_video_link(&p.to_string_lossy()))
            .collect())
    }
}
