// Table extractor - reads the first column of `yt-dlp -F`
//
// Kept for yt-dlp builds and wrappers that only print the human-readable
// format table.

use async_trait::async_trait;

use super::traits::{non_empty, ExtractorConfig, InfoExtractor};
use crate::stream::errors::StreamError;
use crate::stream::format_selector::FormatSelector;
use crate::stream::models::QualityList;

pub struct TableExtractor;

#[async_trait]
impl InfoExtractor for TableExtractor {
    fn name(&self) -> &'static str {
        "yt-dlp-table"
    }

    async fn extract(
        &self,
        channel: &str,
        config: &ExtractorConfig,
    ) -> Result<QualityList, StreamError> {
        let diagnostics = config.invoke("-F", channel).await;
        let stdout = diagnostics.successful_stdout(channel, config.verbose)?;

        let list = FormatSelector::from_table(stdout);

        tracing::debug!("[{}] qualities for {}: {:?}", self.name(), channel, list.as_strs());
        non_empty(list, channel)
    }
}
