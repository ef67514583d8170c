//! Integration tests for the file-backed command layer.

use reelmark_cli::commands::{add_links, list_links, open_link};
use reelmark_cli::config::CliConfig;
use reelmark_core::{find_video_links, parse_video_link};
use std::path::PathBuf;

#[tokio::test]
async fn add_appends_one_block_per_video_and_remembers_the_directory() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("notes.md");
    let config_path = dir.path().join("config.toml");
    tokio::fs::write(&doc, "# Watchlist\n").await.unwrap();

    let mut config = CliConfig::default();
    add_links(
        &doc,
        vec![
            PathBuf::from("/movies/new/a.mp4"),
            PathBuf::from("/movies/new/b.mkv"),
        ],
        &mut config,
        Some(config_path.clone()),
    )
    .await
    .unwrap();

    let text = tokio::fs::read_to_string(&doc).await.unwrap();
    assert!(text.starts_with("# Watchlist\n"));

    let links = find_video_links(&text);
    assert_eq!(links.len(), 2);
    assert_eq!(parse_video_link(&links[0]).file_path, "/movies/new/a.mp4");
    assert_eq!(parse_video_link(&links[1]).file_path, "/movies/new/b.mkv");

    let reloaded = CliConfig::load(Some(config_path), None).unwrap();
    assert_eq!(
        reloaded.picker.start_dir,
        Some(PathBuf::from("/movies/new"))
    );
}

#[tokio::test]
async fn add_creates_a_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("fresh.md");
    let config_path = dir.path().join("config.toml");

    let mut config = CliConfig::default();
    add_links(
        &doc,
        vec![PathBuf::from("/movies/c.mov")],
        &mut config,
        Some(config_path),
    )
    .await
    .unwrap();

    let text = tokio::fs::read_to_string(&doc).await.unwrap();
    assert_eq!(find_video_links(&text).len(), 1);
    assert!(text.contains("``` mpv_link "));
}

#[tokio::test]
async fn list_handles_documents_with_and_without_links() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("notes.md");

    tokio::fs::write(&doc, "nothing here").await.unwrap();
    list_links(&doc, false).await.unwrap();

    tokio::fs::write(&doc, "[[1#video:/a.mp4#00:00:01]]")
        .await
        .unwrap();
    list_links(&doc, true).await.unwrap();
}

#[tokio::test]
async fn open_rejects_an_out_of_range_index() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("notes.md");
    tokio::fs::write(&doc, "[[1#video:/a.mp4#00:00:01]]")
        .await
        .unwrap();

    let config = CliConfig::default();
    let err = open_link(&doc, 5, &config).await.unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[tokio::test]
async fn open_surfaces_a_launch_failure_without_touching_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("notes.md");
    let original = "[[1#video:/a.mp4#00:00:01]]";
    tokio::fs::write(&doc, original).await.unwrap();

    let config = CliConfig::load(
        Some(dir.path().join("missing.toml")),
        Some("reelmark-definitely-not-a-player".to_string()),
    )
    .unwrap();

    let result = open_link(&doc, 0, &config).await;
    assert!(result.is_err());
    assert_eq!(tokio::fs::read_to_string(&doc).await.unwrap(), original);
}
