//! Scrollbar style configuration.
//!
//! Every field is optional on input: serde fills missing fields from
//! [`StyleOptions::default`], so a partial JS object or JSON document merges
//! over the defaults field by field.

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

pub const DEFAULT_COLOR: &str = "#6366f1";
pub const DEFAULT_WIDTH: &str = "8px";
pub const DEFAULT_THUMB_RADIUS: &str = "10px";
pub const TRANSPARENT: &str = "transparent";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOptions {
    /// Thumb (knob) base color: hex, `rgb()`, `rgba()` or a named color.
    pub color: String,
    /// Scrollbar thickness, any CSS length.
    pub width: String,
    /// Thumb corner rounding, any CSS length.
    pub thumb_radius: String,
    /// Track (gutter) base color.
    pub track_background: String,
    pub thumb_opacity: f64,
    pub thumb_hover_opacity: f64,
    /// `0` forces the track fully transparent regardless of `track_background`.
    pub track_opacity: f64,
    /// Suppress the scrollbar entirely. All other fields are ignored.
    pub hide_scrollbar: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            width: DEFAULT_WIDTH.to_string(),
            thumb_radius: DEFAULT_THUMB_RADIUS.to_string(),
            track_background: TRANSPARENT.to_string(),
            thumb_opacity: 0.6,
            thumb_hover_opacity: 0.9,
            track_opacity: 0.0,
            hide_scrollbar: false,
        }
    }
}

impl StyleOptions {
    /// Options that only hide the scrollbar.
    pub fn hidden() -> Self {
        Self {
            hide_scrollbar: true,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON object, e.g. `{"color": "#ff0000"}`.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
