//! Asynchronous mpv launcher.

use crate::error::PlayerError;
use crate::script::helper_script_path;
use async_trait::async_trait;
use reelmark_core::{PlayerLauncher, PlayerOutput};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Spawns mpv with the timestamp-capture script and collects its output.
pub struct MpvLauncher {
    binary: String,
    extra_args: Vec<String>,
}

impl MpvLauncher {
    /// Launcher using the given mpv binary name or path.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            extra_args: Vec::new(),
        }
    }

    /// Additional arguments inserted before the file path.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Argument list for one launch: `--start=<ts> --script=<lua> [extra] <file>`.
    fn build_args(&self, file_path: &str, start_timestamp: &str, script: &Path) -> Vec<String> {
        let mut args = vec![
            format!("--start={start_timestamp}"),
            format!("--script={}", script.display()),
        ];
        args.extend(self.extra_args.iter().cloned());
        args.push(file_path.to_string());
        args
    }
}

impl Default for MpvLauncher {
    fn default() -> Self {
        Self::new("mpv")
    }
}

#[async_trait]
impl PlayerLauncher for MpvLauncher {
    async fn launch(&self, file_path: &str, start_timestamp: &str) -> reelmark_core::Result<PlayerOutput> {
        let script = helper_script_path().await?;
        let args = self.build_args(file_path, start_timestamp, &script);
        debug!(binary = %self.binary, ?args, "launching player");

        let output = Command::new(&self.binary)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| PlayerError::Launch(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let detail = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(PlayerError::Exit(detail).into());
        }

        debug!(bytes = stdout.len(), "player exited, output captured");
        Ok(PlayerOutput { stdout, stderr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn args_put_start_and_script_before_the_file() {
        let launcher = MpvLauncher::new("mpv");
        let args = launcher.build_args(
            "/movies/a.mp4",
            "00:10:00",
            &PathBuf::from("/tmp/capture.lua"),
        );
        assert_eq!(
            args,
            vec![
                "--start=00:10:00".to_string(),
                "--script=/tmp/capture.lua".to_string(),
                "/movies/a.mp4".to_string(),
            ]
        );
    }

    #[test]
    fn extra_args_come_before_the_file() {
        let launcher = MpvLauncher::new("mpv")
            .with_extra_args(vec!["--no-terminal-osd".to_string()]);
        let args = launcher.build_args("a.mkv", "00:00:00", &PathBuf::from("s.lua"));
        assert_eq!(args[2], "--no-terminal-osd");
        assert_eq!(args[3], "a.mkv");
    }

    #[tokio::test]
    async fn missing_binary_is_a_launch_error() {
        let launcher = MpvLauncher::new("reelmark-definitely-not-a-player");
        let err = launcher.launch("a.mp4", "00:00:00").await.unwrap_err();
        assert!(matches!(err, reelmark_core::Error::Player(_)));
    }
}
