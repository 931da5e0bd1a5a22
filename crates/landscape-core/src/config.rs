//! User-facing configuration, decoded from the options object the page
//! passes in. Every field has a default.

use crate::constants::{
    DATABASE_DATE, DEFAULT_BACKGROUND_COLOR, DEFAULT_POINT_COLOR, DETAIL_BASE_URL, MAX_LANDMARKS,
};
use crate::error::Result;
use crate::viewport::Margin;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub points: String,
    pub background: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINT_COLOR.to_string(),
            background: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandmarkConfig {
    pub enabled: bool,
    pub max_landmarks: usize,
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_landmarks: MAX_LANDMARKS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipConfig {
    pub enabled: bool,
    pub database_date: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            database_date: DATABASE_DATE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandscapeConfig {
    pub margin: Margin,
    pub colors: ColorConfig,
    pub landmarks: LandmarkConfig,
    pub tooltip: TooltipConfig,
    pub detail_base_url: String,
}

impl Default for LandscapeConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            colors: ColorConfig::default(),
            landmarks: LandmarkConfig::default(),
            tooltip: TooltipConfig::default(),
            detail_base_url: DETAIL_BASE_URL.to_string(),
        }
    }
}

impl LandscapeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
