// Media player launch

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::stream::utils::stream_url;
use crate::stream::{QualityCode, StreamError};

/// Window title passed to the player
pub const PLAYER_TITLE: &str = "Twitch";

/// mpv flag that hands the format selector through to yt-dlp
pub const FORMAT_SELECTOR_FLAG: &str = "ytdl-format";

#[derive(Debug, Clone)]
pub struct MediaPlayer {
    program: PathBuf,
}

impl MediaPlayer {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Player arguments for a channel at a given quality
    pub fn args(&self, quality: &QualityCode, channel: &str) -> Vec<String> {
        vec![
            "--really-quiet".to_string(),
            format!("--title={}", PLAYER_TITLE),
            format!("--{}={}", FORMAT_SELECTOR_FLAG, quality),
            stream_url(channel),
        ]
    }

    /// Start the player and let go of it.
    ///
    /// The child is never waited on; playback outlives this process.
    pub fn launch_detached(&self, quality: &QualityCode, channel: &str) -> Result<(), StreamError> {
        let args = self.args(quality, channel);
        tracing::debug!("launching {} {}", self.program.display(), args.join(" "));

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| StreamError::Launch {
                player: self.program.display().to_string(),
                source,
            })?;

        tracing::info!(pid = child.id(), "player started for {} at {}", channel, quality);
        // Dropping the handle does not wait on or kill the child.
        drop(child);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_args() {
        let player = MediaPlayer::new(PathBuf::from("mpv"));
        let quality = QualityCode::parse("720p60").unwrap();
        assert_eq!(
            player.args(&quality, "somechannel"),
            vec![
                "--really-quiet",
                "--title=Twitch",
                "--ytdl-format=720p60",
                "https://twitch.tv/somechannel",
            ]
        );
    }

    #[test]
    fn test_missing_player_is_launch_error() {
        let player = MediaPlayer::new(PathBuf::from("/nonexistent/mpv"));
        let quality = QualityCode::parse("480p").unwrap();
        let err = player.launch_detached(&quality, "somechannel").unwrap_err();
        assert!(matches!(err, StreamError::Launch { .. }));
        assert!(err.to_string().starts_with("failed to launch /nonexistent/mpv"));
    }
}
