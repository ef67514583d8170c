//! mpv collaborator for reelmark.
//!
//! Implements the core's `PlayerLauncher` seam: materializes the Lua helper
//! script that makes mpv print its exit position, spawns mpv asynchronously,
//! and hands the captured output back for reconciliation.

pub mod error;
pub mod mpv;
pub mod script;

pub use error::{PlayerError, Result};
pub use mpv::MpvLauncher;
pub use script::{helper_script_path, LUA_SCRIPT};
