//! `reel list` - render pass over a document's video links.

use anyhow::{Context, Result};
use reelmark_core::link_controls;
use std::path::Path;

/// Scan the document and print one line per interactive control.
pub async fn list_links(document: &Path, json: bool) -> Result<()> {
    let text = tokio::fs::read_to_string(document)
        .await
        .with_context(|| format!("Failed to read {}", document.display()))?;

    let controls = link_controls(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&controls)?);
        return Ok(());
    }

    if controls.is_empty() {
        println!("No video links in {}", document.display());
        return Ok(());
    }

    for (index, control) in controls.iter().enumerate() {
        let marker = if control.token.fixed { " (fixed)" } else { "" };
        println!("{index:>3}  {}{marker}  {}", control.label, control.token.file_path);
    }
    Ok(())
}
