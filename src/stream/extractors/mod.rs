// Extractors - ask yt-dlp which renditions a live channel offers
//
// Two modes:
// - JSON mode: `yt-dlp -J` metadata (default)
// - Text mode: first column of the `yt-dlp -F` table (legacy)

mod diagnostics;
mod json;
mod table;
mod traits;

pub use diagnostics::{classify_failure, diagnose, FailureCategory, FailureDiagnosis, RawDiagnostics};
pub use json::JsonExtractor;
pub use table::TableExtractor;
pub use traits::{ExtractorConfig, ExtractorMode, InfoExtractor};

/// Extractor for the configured mode
pub fn extractor_for(mode: ExtractorMode) -> Box<dyn InfoExtractor> {
    match mode {
        ExtractorMode::Json => Box::new(JsonExtractor),
        ExtractorMode::Text => Box::new(TableExtractor),
    }
}

/// Fetch the ordered quality list for `channel` using the configured mode
pub async fn fetch_qualities(
    channel: &str,
    config: &ExtractorConfig,
) -> Result<crate::stream::QualityList, crate::stream::StreamError> {
    let extractor = extractor_for(config.mode);
    tracing::debug!(
        "extracting formats for {} with {} ({} mode)",
        channel,
        extractor.name(),
        config.mode
    );
    extractor.extract(channel, config).await
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::stream::StreamError;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Write a fake yt-dlp that runs `body` and return its path
    fn fake_ytdlp(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("yt-dlp");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn config(path: PathBuf, mode: ExtractorMode) -> ExtractorConfig {
        ExtractorConfig::default().with_ytdlp_path(path).with_mode(mode)
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_json_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_ytdlp(
            &dir,
            r#"[ "$1" = "-J" ] || exit 3
[ "$2" = "https://twitch.tv/somechannel" ] || exit 4
echo '{"formats":[{"format_id":"480p"},{"format_id":"audio_only"},{"format_id":"1080p60"}]}'"#,
        );

        let list = fetch_qualities("somechannel", &config(path, ExtractorMode::Json))
            .await
            .unwrap();
        assert_eq!(list.as_strs(), vec!["1080p60", "480p"]);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_text_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_ytdlp(
            &dir,
            r#"[ "$1" = "-F" ] || exit 3
printf 'ID EXT RESOLUTION\naudio_only mp4 audio\n360p30 mp4 640x360\n720p60 mp4 1280x720\n'"#,
        );

        let list = fetch_qualities("somechannel", &config(path, ExtractorMode::Text))
            .await
            .unwrap();
        assert_eq!(list.as_strs(), vec!["720p60", "360p30"]);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_offline_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_ytdlp(&dir, "echo 'ERROR: [twitch:stream] somechannel: The channel is not currently live' >&2\nexit 1");

        let err = fetch_qualities("somechannel", &config(path, ExtractorMode::Json))
            .await
            .unwrap_err();
        assert_eq!(err.category(), Some(FailureCategory::StreamOffline));
        assert!(err.to_string().contains("rerun with -v"));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_ytdlp(&dir, "echo '{invalid'");

        let err = fetch_qualities("somechannel", &config(path, ExtractorMode::Json))
            .await
            .unwrap_err();
        assert!(matches!(err, StreamError::Parse { .. }), "{:?}", err);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_only_audio_is_no_formats() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_ytdlp(&dir, r#"echo '{"formats":[{"format_id":"audio_only"}]}'"#);

        let err = fetch_qualities("somechannel", &config(path, ExtractorMode::Json))
            .await
            .unwrap_err();
        assert!(matches!(err, StreamError::NoFormats { ref channel } if channel == "somechannel"));
        assert_eq!(err.category(), None);
    }

    #[tokio::test]
    async fn test_missing_tool_under_keyword_directories() {
        for path in ["/nonexistent/private/yt-dlp", "/nonexistent/cookies/yt-dlp", "/nonexistent/geo-restricted/yt-dlp"] {
            let cfg = config(PathBuf::from(path), ExtractorMode::Json);
            let err = fetch_qualities("somechannel", &cfg).await.unwrap_err();
            assert_eq!(err.category(), Some(FailureCategory::ToolNotInstalled), "{}", path);
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_null_formats_is_no_formats() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_ytdlp(&dir, r#"echo '{"formats": null}'"#);

        let err = fetch_qualities("somechannel", &config(path, ExtractorMode::Json))
            .await
            .unwrap_err();
        assert!(matches!(err, StreamError::NoFormats { .. }), "{:?}", err);
    }

    #[tokio::test]
    async fn test_missing_tool() {
        let cfg = config(PathBuf::from("/nonexistent/yt-dlp"), ExtractorMode::Json);
        let err = fetch_qualities("somechannel", &cfg).await.unwrap_err();
        assert_eq!(err.category(), Some(FailureCategory::ToolNotInstalled));
    }
}
