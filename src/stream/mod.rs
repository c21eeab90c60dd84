// Stream module - quality discovery for a live Twitch channel

pub mod errors;
pub mod extractors;
pub mod format_selector;
pub mod models;
pub mod tools;
pub mod utils;

pub use errors::StreamError;
pub use extractors::{fetch_qualities, ExtractorConfig, ExtractorMode, FailureCategory};
pub use format_selector::FormatSelector;
pub use models::{QualityCode, QualityCodeSet, QualityList};
pub use tools::ToolType;
