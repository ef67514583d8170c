//! Link codec: bidirectional mapping between document text and video tokens.
//!
//! Tokens are ephemeral values derived from text on every parse; the codec
//! holds no cache across calls. Identity for replacement purposes is the
//! entire raw matched substring, never the id field.

use crate::grammar::{DEFAULT_TIMESTAMP, MPV_CODE_BLOCK_LANG, VIDEO_LINK_REGEX};
use chrono::Utc;
use serde::Serialize;
use std::sync::atomic::{AtomicI64, Ordering};

/// A video bookmark parsed out of document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoToken {
    /// Opaque numeric-string disambiguator, unique per insertion.
    pub id: String,
    /// Path to the referenced media file.
    pub file_path: String,
    /// Playback position in `HH:MM:SS` form.
    pub timestamp: String,
    /// Whether the timestamp is locked against updates.
    pub fixed: bool,
}

impl VideoToken {
    /// The value returned for malformed or absent tokens. Parsing never
    /// errors; callers see this instead.
    pub fn sentinel() -> Self {
        Self {
            id: "0".to_string(),
            file_path: "/".to_string(),
            timestamp: DEFAULT_TIMESTAMP.to_string(),
            fixed: false,
        }
    }
}

/// An interactive control materialized from one token during a render pass.
///
/// The label is the only state the host carries back at reconcile time, so
/// it encodes the start timestamp: `<fileName>/<timestamp>`, with the
/// timestamp wrapped in `#` markers for fixed tokens.
#[derive(Debug, Clone, Serialize)]
pub struct LinkControl {
    /// The raw matched token substring, verbatim.
    pub link: String,
    /// The parsed token.
    pub token: VideoToken,
    /// Display label, `<fileName>/<timestamp>`.
    pub label: String,
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Time-derived id, bumped through an atomic so consecutive calls within
/// one process never collide even inside the same millisecond.
fn next_link_id() -> String {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(0);
    now.max(prev + 1).to_string()
}

/// Parse a raw token string into a [`VideoToken`].
///
/// Returns the sentinel token when the grammar does not match.
pub fn parse_video_link(raw: &str) -> VideoToken {
    match VIDEO_LINK_REGEX.captures(raw) {
        Some(cap) => VideoToken {
            id: cap[1].to_string(),
            file_path: cap[2].to_string(),
            timestamp: cap[3].to_string(),
            fixed: cap.get(4).is_some(),
        },
        None => VideoToken::sentinel(),
    }
}

/// Canonical fixed-token predicate.
///
/// This is the single source of truth shared by the codec and the
/// reconciler; it agrees with `parse_video_link(raw).fixed` for every
/// grammar-accepted token because both read the same marker group.
pub fn is_fixed(raw: &str) -> bool {
    VIDEO_LINK_REGEX
        .captures(raw)
        .is_some_and(|cap| cap.get(4).is_some())
}

/// All raw token substrings in `text`, in document order.
pub fn find_video_links(text: &str) -> Vec<String> {
    VIDEO_LINK_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Format a freshly chosen file path as an insertable fenced link block.
///
/// The path is taken as-is; no existence or shape validation happens here.
pub fn format_video_link(file_path: &str) -> String {
    format!(
        "\n``` {MPV_CODE_BLOCK_LANG} \n[[{id}#video:{file_path}#{DEFAULT_TIMESTAMP}]]\n```",
        id = next_link_id()
    )
}

/// Materialize one control per token found in `text`, in document order.
pub fn link_controls(text: &str) -> Vec<LinkControl> {
    find_video_links(text)
        .into_iter()
        .map(|link| {
            let token = parse_video_link(&link);
            let file_name = token
                .file_path
                .rsplit('/')
                .next()
                .unwrap_or(token.file_path.as_str())
                .to_string();
            let label = if token.fixed {
                format!("{file_name}/#{}#", token.timestamp)
            } else {
                format!("{file_name}/{}", token.timestamp)
            };
            LinkControl { link, token, label }
        })
        .collect()
}
