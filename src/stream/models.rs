// Data models for stream quality extraction

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

lazy_static! {
    static ref QUALITY_RE: Regex = Regex::new(r"^([0-9]{3,4})p([0-9]{2})?$").unwrap();
}

/// Check whether `id` names a video rendition like `1080p60` or `480p`.
pub fn is_quality_code(id: &str) -> bool {
    QUALITY_RE.is_match(id)
}

/// Split a quality code into (height, fps). A missing fps suffix is 0.
pub fn decompose(id: &str) -> Option<(u16, u8)> {
    let caps = QUALITY_RE.captures(id)?;
    let height = caps.get(1)?.as_str().parse().ok()?;
    let fps = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    Some((height, fps))
}

/// A stream rendition identifier (e.g. "720p60").
///
/// Only constructible from conforming strings. Ordering ranks by height, then
/// frame rate, then the raw string, so "greater" means "better quality".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualityCode {
    id: String,
    height: u16,
    fps: u8,
}

impl QualityCode {
    pub fn parse(id: &str) -> Option<Self> {
        let (height, fps) = decompose(id)?;
        Some(Self {
            id: id.to_string(),
            height,
            fps,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

}

impl Ord for QualityCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.height
            .cmp(&other.height)
            .then(self.fps.cmp(&other.fps))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for QualityCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QualityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Deduplicated quality codes from one metadata response
pub type QualityCodeSet = BTreeSet<QualityCode>;

/// Quality codes ordered best-first, ready for the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityList(Vec<QualityCode>);

impl QualityList {
    pub fn from_set(set: QualityCodeSet) -> Self {
        Self(set.into_iter().rev().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&QualityCode> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QualityCode> {
        self.0.iter()
    }

    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(QualityCode::as_str).collect()
    }
}

/// One entry of yt-dlp's `formats` array. Everything but the id is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatEntry {
    #[serde(default)]
    pub format_id: Option<String>,
}

/// Subset of `yt-dlp -J` output. A missing or null `formats`, and null
/// entries inside it, mean "nothing to offer".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamMetadata {
    #[serde(default)]
    pub formats: Option<Vec<Option<FormatEntry>>>,
}

impl StreamMetadata {
    /// Every `format_id` present, in yt-dlp's order
    pub fn format_ids(&self) -> impl Iterator<Item = &str> {
        self.formats
            .iter()
            .flatten()
            .flatten()
            .filter_map(|f| f.format_id.as_deref())
    }
}
