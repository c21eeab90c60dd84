// InfoExtractor trait and common types

use async_trait::async_trait;
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

use super::diagnostics::RawDiagnostics;
use crate::stream::errors::StreamError;
use crate::stream::models::QualityList;
use crate::stream::tools::ToolType;
use crate::stream::utils::{run_output, stream_url};

/// Which yt-dlp output format to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExtractorMode {
    /// `yt-dlp -J` metadata
    #[default]
    Json,
    /// `yt-dlp -F` format table
    Text,
}

impl fmt::Display for ExtractorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Configuration for format extraction
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub mode: ExtractorMode,
    /// yt-dlp program to run
    pub ytdlp_path: PathBuf,
    /// Include raw yt-dlp output in error messages
    pub verbose: bool,
    /// Kill yt-dlp after this many seconds. None waits forever.
    pub timeout_seconds: Option<u64>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            mode: ExtractorMode::Json,
            ytdlp_path: PathBuf::from("yt-dlp"),
            verbose: false,
            timeout_seconds: None,
        }
    }
}

impl ExtractorConfig {
    pub fn with_mode(mut self, mode: ExtractorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_ytdlp_path(mut self, path: PathBuf) -> Self {
        self.ytdlp_path = path;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_timeout(mut self, seconds: Option<u64>) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Run yt-dlp with `flag` against the channel's stream URL
    pub(crate) async fn invoke(&self, flag: &str, channel: &str) -> RawDiagnostics {
        let args = vec![flag.to_string(), stream_url(channel)];
        run_output(ToolType::YtDlp, &self.ytdlp_path, &args, self.timeout_seconds).await
    }
}

/// Trait for quality extractors
#[async_trait]
pub trait InfoExtractor: Send + Sync {
    /// Name of the extractor (for logging)
    fn name(&self) -> &'static str;

    /// Fetch the ordered quality list for a channel.
    ///
    /// Never returns an empty list: that case is `StreamError::NoFormats`.
    async fn extract(
        &self,
        channel: &str,
        config: &ExtractorConfig,
    ) -> Result<QualityList, StreamError>;
}

/// Shared post-processing: an empty list is an error of its own.
pub(crate) fn non_empty(list: QualityList, channel: &str) -> Result<QualityList, StreamError> {
    if list.is_empty() {
        return Err(StreamError::NoFormats {
            channel: channel.to_string(),
        });
    }
    Ok(list)
}
