// Error types for fetching and playing a stream

use std::io;

use thiserror::Error;

use super::extractors::{diagnose, FailureCategory, RawDiagnostics};

#[derive(Debug, Error)]
pub enum StreamError {
    /// Bad invocation
    #[error("{0}")]
    Usage(String),

    /// yt-dlp failed; message is already composed for the user
    #[error("{message}")]
    Fetch {
        category: FailureCategory,
        message: String,
    },

    /// yt-dlp succeeded but printed something we could not read
    #[error("{message}")]
    Parse { message: String },

    /// yt-dlp succeeded but listed no video renditions
    #[error("no compatible Twitch quality formats found for '{channel}'")]
    NoFormats { channel: String },

    /// Reading the selection from the terminal failed
    #[error("failed to read selection: {0}")]
    Input(#[source] io::Error),

    #[error("failed to launch {player}: {source}")]
    Launch {
        player: String,
        #[source]
        source: io::Error,
    },
}

impl StreamError {
    /// Classify a failed yt-dlp run and build the user-facing error
    pub fn fetch(channel: &str, diagnostics: &RawDiagnostics, verbose: bool) -> Self {
        let diagnosis = diagnose(diagnostics);

        tracing::warn!(
            channel,
            category = ?diagnosis.category,
            hints = ?diagnosis.matched_hints,
            transient = diagnosis.category.is_transient(),
            "yt-dlp failed"
        );

        Self::Fetch {
            category: diagnosis.category,
            message: compose_fetch_message(channel, diagnosis.category, diagnostics, verbose),
        }
    }

    /// yt-dlp output that is not valid JSON
    pub fn parse(
        channel: &str,
        err: &serde_json::Error,
        diagnostics: &RawDiagnostics,
        verbose: bool,
    ) -> Self {
        let mut message = format!("yt-dlp returned invalid JSON for '{}': {}", channel, err);
        let raw = diagnostics.text();
        if verbose && !raw.is_empty() {
            message.push_str(&format!("\n\nraw output:\n{}", raw));
        }
        Self::Parse { message }
    }

    /// Failure category, for fetch errors only
    pub fn category(&self) -> Option<FailureCategory> {
        match self {
            Self::Fetch { category, .. } => Some(*category),
            _ => None,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Build the message for a failed fetch.
///
/// The base always names the channel and the category. Raw diagnostics are
/// appended only in verbose mode; otherwise a rerun hint is added. With no
/// output at all the process error is appended instead.
pub fn compose_fetch_message(
    channel: &str,
    category: FailureCategory,
    diagnostics: &RawDiagnostics,
    verbose: bool,
) -> String {
    let base = format!(
        "could not fetch formats for '{}': {}",
        channel,
        category.description()
    );
    let output = diagnostics.text();

    if !output.is_empty() {
        if verbose {
            format!("{}\n\nyt-dlp output:\n{}", base, output)
        } else {
            format!("{} (rerun with -v for full yt-dlp output)", base)
        }
    } else if let Some(err) = &diagnostics.process_error {
        format!("{}: {}", base, err)
    } else {
        base
    }
}
