pub mod cli;
pub mod picker;
pub mod player;
pub mod stream;

use std::io;

use cli::Cli;
use player::MediaPlayer;
use stream::{fetch_qualities, ExtractorConfig, StreamError, ToolType};

/// Fetch qualities, let the user pick one, start the player.
pub async fn run(cli: Cli) -> Result<(), StreamError> {
    if cli.channel.is_empty() {
        return Err(StreamError::Usage("a channel name is required".to_string()));
    }

    let config = ExtractorConfig::default()
        .with_mode(cli.mode)
        .with_ytdlp_path(ToolType::YtDlp.resolve(cli.ytdlp))
        .with_verbose(cli.verbose)
        .with_timeout(cli.timeout);

    let qualities = fetch_qualities(&cli.channel, &config).await?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let quality = picker::pick_one(&qualities, &mut stdin.lock(), &mut stdout.lock())?;

    MediaPlayer::new(ToolType::Mpv.resolve(cli.player)).launch_detached(quality, &cli.channel)
}
