//! Shared grammar for the video-link wire format.
//!
//! The token shape is a compatibility surface: documents written by other
//! implementations must keep parsing, so the patterns here match the wire
//! format byte for byte. Hours are two digits only; positions past 99 hours
//! overflow silently and are out of scope for this grammar.

use regex::Regex;
use std::sync::LazyLock;

/// Timestamp used when nothing better is known.
pub const DEFAULT_TIMESTAMP: &str = "00:00:00";

/// Fence language tag wrapping inserted video links.
pub const MPV_CODE_BLOCK_LANG: &str = "mpv_link";

/// Wire grammar for a video link token.
///
/// `[[<id>#video:<path>#<HH:MM:SS>]]`, with a trailing `#` before the
/// closing brackets iff the timestamp is fixed. The path segment is lazy so
/// that `#` inside a path cannot be confused with the timestamp delimiter:
/// the timestamp itself must match exactly before the marker is considered.
pub static VIDEO_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(\d+)#video:(.+?)#(\d\d:\d\d:\d\d)(#)?]]").expect("video link regex")
});

/// The single line mpv's helper script prints on unload: `[ HH:MM:SS ]`.
pub static PLAYER_EXIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[ \d\d:\d\d:\d\d ]").expect("player exit regex"));

/// A bare `HH:MM:SS` timestamp.
pub static TIMESTAMP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d\d:\d\d:\d\d").expect("timestamp regex"));

/// First match of `regex` in `text`, or `default` when there is none.
pub fn match_or_default<'a>(text: &'a str, regex: &Regex, default: &'a str) -> &'a str {
    regex.find(text).map(|m| m.as_str()).unwrap_or(default)
}
