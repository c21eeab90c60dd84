use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::stream::ExtractorMode;

#[derive(Parser, Debug)]
#[command(name = "twpick")]
#[command(author, version, about = "Pick a Twitch stream quality and watch it in mpv")]
pub struct Cli {
    /// Twitch channel to watch
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub channel: String,

    /// Print full yt-dlp diagnostics on failure
    #[arg(short, long)]
    pub verbose: bool,

    /// How to ask yt-dlp for formats
    #[arg(long, value_enum, env = "TWPICK_MODE", default_value_t = ExtractorMode::Json)]
    pub mode: ExtractorMode,

    /// yt-dlp binary to use instead of the one on PATH
    #[arg(long = "yt-dlp", env = "TWPICK_YT_DLP", value_name = "PATH")]
    pub ytdlp: Option<PathBuf>,

    /// Player binary to use instead of mpv on PATH
    #[arg(long, env = "TWPICK_PLAYER", value_name = "PATH")]
    pub player: Option<PathBuf>,

    /// Give up on yt-dlp after this many seconds
    #[arg(long, env = "TWPICK_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag_forms() {
        let cli = Cli::try_parse_from(["twpick", "-v", "somechannel"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.channel, "somechannel");

        let cli = Cli::try_parse_from(["twpick", "somechannel", "--verbose"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["twpick", "somechannel"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.mode, ExtractorMode::Json);
    }

    #[test]
    fn test_exactly_one_channel() {
        assert!(Cli::try_parse_from(["twpick"]).is_err());
        assert!(Cli::try_parse_from(["twpick", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["twpick", ""]).is_err());
    }

    #[test]
    fn test_text_mode() {
        let cli = Cli::try_parse_from(["twpick", "--mode", "text", "somechannel"]).unwrap();
        assert_eq!(cli.mode, ExtractorMode::Text);
    }
}
