//! `reel open` - play a linked video and write the exit position back.

use crate::config::CliConfig;
use crate::store::FileDocumentStore;
use anyhow::{bail, Context, Result};
use reelmark_core::{link_controls, PlaybackController};
use reelmark_player::MpvLauncher;
use std::path::Path;
use std::sync::Arc;

/// Launch mpv for the indexed link; on exit, reconcile and persist.
pub async fn open_link(document: &Path, index: usize, config: &CliConfig) -> Result<()> {
    let text = tokio::fs::read_to_string(document)
        .await
        .with_context(|| format!("Failed to read {}", document.display()))?;

    let controls = link_controls(&text);
    if controls.is_empty() {
        bail!("No video links in {}", document.display());
    }
    let Some(control) = controls.get(index) else {
        bail!(
            "Link index {index} out of range; {} has {} link(s)",
            document.display(),
            controls.len()
        );
    };

    let store = FileDocumentStore::new(document.to_path_buf());
    let launcher = MpvLauncher::new(config.player.binary.clone())
        .with_extra_args(config.player.extra_args.clone());
    let controller =
        PlaybackController::new(Arc::new(store), Arc::new(launcher), config.start_dir());

    let updated = controller
        .open_video(control)
        .await
        .with_context(|| format!("Failed to play {}", control.token.file_path))?;

    if updated {
        println!("Updated {} in {}", control.label, document.display());
    } else {
        println!("Timestamp unchanged for {}", control.label);
    }
    Ok(())
}
