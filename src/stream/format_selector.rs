// FormatSelector - turns raw yt-dlp output into an ordered quality list
//
// Handles:
// - JSON metadata (`yt-dlp -J`)
// - Legacy format tables (`yt-dlp -F`)
// - Dropping non-video renditions (audio_only, source, ...)
// - Best-first ordering

use super::models::{QualityCode, QualityCodeSet, QualityList, StreamMetadata};

pub struct FormatSelector;

impl FormatSelector {
    /// Extract quality codes from `yt-dlp -J` output
    pub fn from_json(json: &str) -> Result<QualityList, serde_json::Error> {
        // a bare `null` document carries no formats either
        let metadata: StreamMetadata =
            serde_json::from_str::<Option<StreamMetadata>>(json)?.unwrap_or_default();

        let set: QualityCodeSet = metadata.format_ids().filter_map(QualityCode::parse).collect();

        Ok(QualityList::from_set(set))
    }

    /// Extract quality codes from the first column of a `yt-dlp -F` table
    pub fn from_table(text: &str) -> QualityList {
        let set: QualityCodeSet = text
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .filter_map(QualityCode::parse)
            .collect();

        QualityList::from_set(set)
    }
}
