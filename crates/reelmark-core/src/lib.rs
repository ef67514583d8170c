//! reelmark core
//!
//! The timestamp link protocol behind reelmark's video bookmarks:
//! - A link codec that round-trips `[[<id>#video:<path>#<HH:MM:SS>]]` tokens
//!   between document text and values
//! - A reconciler that merges a player's exit timestamp back into document
//!   text by exact substring replacement
//! - Collaborator traits for the document store, external player, and file
//!   picker, so hosts can be swapped without touching the protocol
//! - A playback controller that serializes reconciliation per document
//!
//! This crate never spawns processes and never touches the filesystem; all
//! I/O lives behind the traits.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod codec;
pub mod controller;
pub mod error;
pub mod grammar;
pub mod reconcile;
pub mod traits;

// Re-export main types for convenience
pub use codec::{
    find_video_links, format_video_link, is_fixed, link_controls, parse_video_link, LinkControl,
    VideoToken,
};
pub use controller::PlaybackController;
pub use error::{Error, Result};
pub use grammar::{DEFAULT_TIMESTAMP, MPV_CODE_BLOCK_LANG};
pub use reconcile::{extract_player_timestamp, reconcile, start_timestamp_from_label};
pub use traits::{DocumentStore, FilePicker, PlayerLauncher, PlayerOutput};
