//! The embedded Lua helper script and its temp-file materialization.
//!
//! mpv loads this script at launch; on unload it prints the current play
//! position as a single `[ HH:MM:SS ]` line to stdout and flushes. That one
//! terminal fact is all the reconciler needs, which keeps the player a black
//! box instead of a bidirectional protocol peer.

use crate::error::Result;
use std::path::PathBuf;

/// Hook script handed to mpv via `--script`.
pub const LUA_SCRIPT: &str = r#"
local mp = require 'mp'

local function end_file(data)
    local timestamp = mp.get_property("time-pos")
    if timestamp then
        local hours = math.floor(timestamp / 3600)
        local minutes = math.floor((timestamp % 3600) / 60)
        local seconds = math.floor(timestamp % 60)
        io.write(string.format("[ %02d:%02d:%02d ]\n", hours, minutes, seconds))
    end
    io.flush()
end

mp.add_hook('on_unload', 50, end_file)
"#;

const LUA_SCRIPT_FILE_NAME: &str = "reelmark_capture_timestamp.lua";

/// Write the helper script into the OS temp directory and return its path.
///
/// Rewritten before every launch; the fixed file name makes repeated
/// launches reuse one path instead of leaking temp files.
pub async fn helper_script_path() -> Result<PathBuf> {
    let path = std::env::temp_dir().join(LUA_SCRIPT_FILE_NAME);
    tokio::fs::write(&path, LUA_SCRIPT).await?;
    Ok(path)
}
