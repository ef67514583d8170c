//! Timestamp reconciler: merges a player's exit position back into text.
//!
//! The player is a black box that prints one `[ HH:MM:SS ]` line when it
//! unloads the media; the reconciler reads that terminal fact out of the
//! captured output and splices the new timestamp into the document by exact
//! substring replacement. Nothing outside the matched token is touched.

use crate::codec::is_fixed;
use crate::grammar::{match_or_default, DEFAULT_TIMESTAMP, PLAYER_EXIT_REGEX, TIMESTAMP_REGEX};

/// Extract the exit timestamp from captured player output.
///
/// Takes the first `[ HH:MM:SS ]` bracket and reduces it to the inner
/// timestamp; returns `00:00:00` when the output carries no bracket at all.
pub fn extract_player_timestamp(raw_output: &str) -> String {
    let bracketed = match_or_default(raw_output, &PLAYER_EXIT_REGEX, DEFAULT_TIMESTAMP);
    match_or_default(bracketed, &TIMESTAMP_REGEX, DEFAULT_TIMESTAMP).to_string()
}

/// Recover the start timestamp from a control label.
///
/// Labels look like `<fileName>/<timestamp>`, or `<fileName>/#<timestamp>#`
/// for fixed tokens; the markers are stripped before use.
pub fn start_timestamp_from_label(label: &str) -> String {
    let segment = label.splitn(2, '/').nth(1).unwrap_or(DEFAULT_TIMESTAMP);
    match_or_default(segment.trim_matches('#'), &TIMESTAMP_REGEX, DEFAULT_TIMESTAMP).to_string()
}

/// Decide the updated document text after a player session ends.
///
/// Returns `None` when no mutation should happen: the token is fixed, or it
/// is no longer present in the document (the user edited it away during
/// playback). Both are expected conditions, not errors. On `Some`, only the
/// first occurrence of `original_link` has changed, and only its timestamp
/// segment within that occurrence.
pub fn reconcile(
    original_link: &str,
    document: &str,
    player_output: &str,
    control_label: &str,
) -> Option<String> {
    if is_fixed(original_link) {
        return None;
    }

    let new_timestamp = extract_player_timestamp(player_output);
    let start_timestamp = start_timestamp_from_label(control_label);
    let updated_link = original_link.replacen(&start_timestamp, &new_timestamp, 1);

    if !document.contains(original_link) {
        return None;
    }
    Some(document.replacen(original_link, &updated_link, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bracketed_timestamp() {
        let output = "mpv noise\nmore noise [ 01:02:03 ] trailing";
        assert_eq!(extract_player_timestamp(output), "01:02:03");
    }

    #[test]
    fn extracts_first_of_several() {
        let output = "[ 00:05:00 ] then [ 00:06:00 ]";
        assert_eq!(extract_player_timestamp(output), "00:05:00");
    }

    #[test]
    fn missing_bracket_defaults() {
        assert_eq!(extract_player_timestamp("mpv exited"), "00:00:00");
        // A bare timestamp without the bracket frame does not count.
        assert_eq!(extract_player_timestamp("pos was 01:02:03"), "00:00:00");
    }

    #[test]
    fn label_yields_start_timestamp() {
        assert_eq!(start_timestamp_from_label("a.mp4/00:10:00"), "00:10:00");
        assert_eq!(start_timestamp_from_label("a.mp4/#00:10:00#"), "00:10:00");
    }

    #[test]
    fn label_without_separator_defaults() {
        assert_eq!(start_timestamp_from_label("a.mp4"), "00:00:00");
        assert_eq!(start_timestamp_from_label(""), "00:00:00");
    }

    #[test]
    fn reconcile_replaces_only_the_token() {
        let doc = "a [[1#video:/x#00:00:05]] b";
        let updated = reconcile(
            "[[1#video:/x#00:00:05]]",
            doc,
            "stuff [ 00:01:10 ] stuff",
            "x/00:00:05",
        );
        assert_eq!(updated.as_deref(), Some("a [[1#video:/x#00:01:10]] b"));
    }

    #[test]
    fn reconcile_fixed_token_is_a_no_op() {
        let doc = "pin [[42#video:/movies/a.mp4#00:10:00#]] here";
        let updated = reconcile(
            "[[42#video:/movies/a.mp4#00:10:00#]]",
            doc,
            "[ 09:09:09 ]",
            "a.mp4/#00:10:00#",
        );
        assert!(updated.is_none());
    }

    #[test]
    fn reconcile_skips_when_token_was_edited_away() {
        let doc = "the token is gone";
        let updated = reconcile(
            "[[1#video:/x#00:00:05]]",
            doc,
            "[ 00:01:10 ]",
            "x/00:00:05",
        );
        assert!(updated.is_none());
    }

    #[test]
    fn reconcile_targets_first_duplicate() {
        let doc = "[[1#video:/x#00:00:05]] and [[1#video:/x#00:00:05]]";
        let updated = reconcile(
            "[[1#video:/x#00:00:05]]",
            doc,
            "[ 00:01:10 ]",
            "x/00:00:05",
        );
        assert_eq!(
            updated.as_deref(),
            Some("[[1#video:/x#00:01:10]] and [[1#video:/x#00:00:05]]")
        );
    }

    #[test]
    fn reconcile_without_exit_line_rewinds_to_default() {
        // No bracket in the output means the position reads as 00:00:00.
        let doc = "a [[1#video:/x#00:00:05]] b";
        let updated = reconcile("[[1#video:/x#00:00:05]]", doc, "", "x/00:00:05");
        assert_eq!(updated.as_deref(), Some("a [[1#video:/x#00:00:00]] b"));
    }
}
