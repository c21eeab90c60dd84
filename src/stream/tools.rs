use std::path::PathBuf;

/// External programs this tool drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolType {
    YtDlp,
    Mpv,
}

impl ToolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::YtDlp => "yt-dlp",
            ToolType::Mpv => "mpv",
        }
    }

    /// Resolve the program to run.
    ///
    /// An explicit override is used verbatim. Otherwise the binary is looked
    /// up on PATH, falling back to the bare name so a missing tool surfaces
    /// as a launch failure.
    pub fn resolve(&self, explicit: Option<PathBuf>) -> PathBuf {
        if let Some(path) = explicit {
            tracing::debug!("using {} override: {}", self.as_str(), path.display());
            return path;
        }

        match which::which(self.as_str()) {
            Ok(path) => {
                tracing::debug!("found {} at {}", self.as_str(), path.display());
                path
            }
            Err(e) => {
                tracing::debug!("{} not found on PATH: {}", self.as_str(), e);
                PathBuf::from(self.as_str())
            }
        }
    }
}
