// JSON extractor - parses `yt-dlp -J` metadata

use async_trait::async_trait;

use super::traits::{non_empty, ExtractorConfig, InfoExtractor};
use crate::stream::errors::StreamError;
use crate::stream::format_selector::FormatSelector;
use crate::stream::models::QualityList;

pub struct JsonExtractor;

#[async_trait]
impl InfoExtractor for JsonExtractor {
    fn name(&self) -> &'static str {
        "yt-dlp-json"
    }

    async fn extract(
        &self,
        channel: &str,
        config: &ExtractorConfig,
    ) -> Result<QualityList, StreamError> {
        let diagnostics = config.invoke("-J", channel).await;
        let stdout = diagnostics.successful_stdout(channel, config.verbose)?;

        let list = FormatSelector::from_json(stdout)
            .map_err(|e| StreamError::parse(channel, &e, &diagnostics, config.verbose))?;

        tracing::debug!("[{}] qualities for {}: {:?}", self.name(), channel, list.as_strs());
        non_empty(list, channel)
    }
}
