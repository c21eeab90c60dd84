// Failure diagnostics - identifies why yt-dlp could not list formats
//
// Analyzes the captured output and process error to determine:
// - Category of failure (offline, geo, auth, ...)
// - Which hints matched (for logging)
// - Whether trying again later might help

use std::fmt;

use crate::stream::errors::StreamError;

/// Reasons a metadata fetch can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Channel is not broadcasting right now
    StreamOffline,

    /// Stream is blocked in the caller's region
    GeoRestricted,

    /// Login, cookies, age or subscription gate
    AuthRequired,

    /// Private stream, HTTP 403 and similar
    AccessDenied,

    /// Timeouts, DNS, refused connections, 429/5xx
    NetworkOrServerIssue,

    /// yt-dlp binary missing
    ToolNotInstalled,

    UnknownFailure,
}

impl FailureCategory {
    /// Human-readable phrase used in error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::StreamOffline => "stream is offline",
            Self::GeoRestricted => "stream is geo-restricted from your location",
            Self::AuthRequired => "stream requires authentication (cookies/login)",
            Self::AccessDenied => "stream is private or access is denied",
            Self::NetworkOrServerIssue => "network/server issue while contacting Twitch/yt-dlp",
            Self::ToolNotInstalled => "yt-dlp is not installed or not in PATH",
            Self::UnknownFailure => "yt-dlp returned an unknown error",
        }
    }

    /// Check if running again later might succeed without changing anything
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StreamOffline | Self::NetworkOrServerIssue)
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Hint groups in priority order. A message matching several groups is
/// classified by the first one.
const HINT_GROUPS: &[(&[&str], FailureCategory)] = &[
    (
        &[
            "is offline",
            "not currently live",
            "channel is offline",
            "channel is not live",
        ],
        FailureCategory::StreamOffline,
    ),
    (
        &[
            "geo-restricted",
            "geo restricted",
            "not available in your country",
            "unavailable in your country",
            "from your location",
        ],
        FailureCategory::GeoRestricted,
    ),
    (
        &[
            "login required",
            "authentication required",
            "sign in",
            "cookies are needed",
            "cookies",
            "age-restricted",
            "members-only",
            "subscriber-only",
        ],
        FailureCategory::AuthRequired,
    ),
    (
        &["private", "forbidden", "http error 403", "access denied"],
        FailureCategory::AccessDenied,
    ),
    (
        &[
            "timed out",
            "temporary failure in name resolution",
            "network is unreachable",
            "connection refused",
            "unable to download webpage",
            "http error 429",
            "rate limit",
            "http error 5",
        ],
        FailureCategory::NetworkOrServerIssue,
    ),
    (
        &["executable file not found", "no such file or directory"],
        FailureCategory::ToolNotInstalled,
    ),
];

/// Everything captured from a failed yt-dlp run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDiagnostics {
    pub stdout: String,
    pub stderr: String,
    /// Launch failure, non-zero exit status or timeout
    pub process_error: Option<String>,
}

impl RawDiagnostics {
    /// Diagnostic text shown to the user: stderr, or stdout when stderr is empty
    pub fn text(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        }
    }

    pub fn succeeded(&self) -> bool {
        self.process_error.is_none()
    }

    /// Trimmed stdout of a successful run, or a classified fetch error
    pub fn successful_stdout(&self, channel: &str, verbose: bool) -> Result<&str, StreamError> {
        if self.succeeded() {
            Ok(self.stdout.trim())
        } else {
            Err(StreamError::fetch(channel, self, verbose))
        }
    }
}

/// Result of classifying a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDiagnosis {
    pub category: FailureCategory,
    pub matched_hints: Vec<&'static str>,
}

fn search_text(process_error: Option<&str>, output: &str) -> String {
    let lower = output.trim().to_lowercase();
    let err_text = process_error.map(str::to_lowercase).unwrap_or_default();
    format!("{}\n{}", lower, err_text)
}

/// Map a process error and diagnostic text to a failure category
pub fn classify_failure(process_error: Option<&str>, output: &str) -> FailureCategory {
    let combined = search_text(process_error, output);

    HINT_GROUPS
        .iter()
        .find(|(hints, _)| hints.iter().any(|h| combined.contains(h)))
        .map(|(_, category)| *category)
        .unwrap_or(FailureCategory::UnknownFailure)
}

/// Full diagnosis of a failed run
pub fn diagnose(diagnostics: &RawDiagnostics) -> FailureDiagnosis {
    let process_error = diagnostics.process_error.as_deref();
    let output = diagnostics.text();
    let category = classify_failure(process_error, output);

    let combined = search_text(process_error, output);
    let matched_hints = HINT_GROUPS
        .iter()
        .filter(|(_, c)| *c == category)
        .flat_map(|(hints, _)| hints.iter().copied())
        .filter(|h| combined.contains(h))
        .collect();

    FailureDiagnosis {
        category,
        matched_hints,
    }
}
