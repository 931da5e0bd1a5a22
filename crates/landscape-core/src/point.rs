//! Lecture records as they arrive from the data source.

use crate::error::Result;
use crate::time;
use serde::Deserialize;

/// One `(category, weight)` pair from a record's `landmarkTags` list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LandmarkTag(pub String, pub f64);

/// Duration as sent by the source, either a number or a numeric string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(f64),
    Text(String),
}

impl DurationValue {
    /// Whole seconds, truncated; anything unparsable counts as zero.
    pub fn whole_seconds(&self) -> u64 {
        match self {
            DurationValue::Seconds(s) if s.is_finite() && *s > 0.0 => s.trunc() as u64,
            DurationValue::Seconds(_) => 0,
            DurationValue::Text(s) => time::parse_leading_int(s),
        }
    }
}

impl Default for DurationValue {
    fn default() -> Self {
        DurationValue::Seconds(0.0)
    }
}

/// One lecture.
///
/// `x` and `y` are normalized to \[0, 1\] upstream. `title` is required, so a
/// record without it fails to decode.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<Vec<String>>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub language: String,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    pub published: String,
    #[serde(default)]
    pub duration: DurationValue,
    #[serde(default)]
    pub views: f64,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub landmark_tags: Option<Vec<LandmarkTag>>,
}

/// Payload handed to [`crate::LandscapeGraph::set_data`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LandscapeData {
    #[serde(default)]
    pub points: Option<Vec<Point>>,
}

impl LandscapeData {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points: Some(points),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
