//! `reel add` - append video link blocks to a document.

use crate::config::CliConfig;
use crate::store::{ArgFilePicker, FileDocumentStore};
use anyhow::{Context, Result};
use reelmark_core::PlaybackController;
use reelmark_player::MpvLauncher;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Format one link block per media file and append them to the document.
///
/// The document's end stands in for the editor cursor. The first file's
/// directory is persisted as the next picker start directory.
pub async fn add_links(
    document: &Path,
    videos: Vec<PathBuf>,
    config: &mut CliConfig,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let store = FileDocumentStore::new(document.to_path_buf());
    let launcher = MpvLauncher::new(config.player.binary.clone());
    let controller =
        PlaybackController::new(Arc::new(store), Arc::new(launcher), config.start_dir());

    let picker = ArgFilePicker::new(videos);
    let blocks = controller.pick_and_format(&picker).await?;
    if blocks.is_empty() {
        info!("nothing chosen, document unchanged");
        return Ok(());
    }

    let mut text = match tokio::fs::read_to_string(document).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", document.display()))
        }
    };
    for block in &blocks {
        text.push_str(block);
    }
    tokio::fs::write(document, &text)
        .await
        .with_context(|| format!("Failed to write {}", document.display()))?;

    let next_start = controller.start_dir().await;
    config.remember_start_dir(next_start, config_path)?;

    println!("Added {} link(s) to {}", blocks.len(), document.display());
    Ok(())
}
