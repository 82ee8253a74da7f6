use serde::Deserialize;

use crate::layout::{DESKTOP_PLAYER_HEIGHT_PX, MOBILE_MAX_WIDTH_PX, MOBILE_PLAYER_HEIGHT_PX};
use crate::reveal::{
    ARROW_DELAY_MS, ARROW_TRANSITION_MS, HIDDEN_OFFSET_PX, REVEAL_THRESHOLD, STEP_STAGGER_MS,
    STEP_TRANSITION_MS,
};
use crate::scroll::{HIGHLIGHT_DURATION_MS, SCROLL_MARGIN_PX};

/// Element id of the optional JSON config block embedded by the host page.
pub const CONFIG_ELEMENT_ID: &str = "safespeech-demo-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("intersection threshold must be within 0..=1, got {0}")]
    Threshold(f64),
    #[error("mobile breakpoint must be positive, got {0}")]
    Breakpoint(f64),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    pub threshold: f64,
    pub step_stagger_ms: u32,
    pub arrow_delay_ms: u32,
    pub step_transition_ms: u32,
    pub arrow_transition_ms: u32,
    pub hidden_offset_px: u32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            step_stagger_ms: STEP_STAGGER_MS,
            arrow_delay_ms: ARROW_DELAY_MS,
            step_transition_ms: STEP_TRANSITION_MS,
            arrow_transition_ms: ARROW_TRANSITION_MS,
            hidden_offset_px: HIDDEN_OFFSET_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub mobile_max_width_px: f64,
    pub mobile_player_height_px: u32,
    pub desktop_player_height_px: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_max_width_px: MOBILE_MAX_WIDTH_PX,
            mobile_player_height_px: MOBILE_PLAYER_HEIGHT_PX,
            desktop_player_height_px: DESKTOP_PLAYER_HEIGHT_PX,
        }
    }
}

/// Tunable timing and layout values. Selectors and class names are fixed in
/// [`crate::markup`]; unknown keys are rejected rather than ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub scroll_margin_px: f64,
    pub highlight_duration_ms: u32,
    pub reveal: RevealTiming,
    pub layout: LayoutConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_margin_px: SCROLL_MARGIN_PX,
            highlight_duration_ms: HIGHLIGHT_DURATION_MS,
            reveal: RevealTiming::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parses a partial config; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Threshold(threshold));
        }
        let breakpoint = self.layout.mobile_max_width_px;
        if breakpoint.is_nan() || breakpoint <= 0.0 {
            return Err(ConfigError::Breakpoint(breakpoint));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.scroll_margin_px, 20.0);
        assert_eq!(config.highlight_duration_ms, 1200);
        assert_eq!(config.reveal.step_stagger_ms, 300);
    }

    #[test]
    fn partial_override_keeps_other_fields() {
        let config =
            PageConfig::from_json(r#"{"layout": {"mobile_max_width_px": 600}}"#).unwrap();
        assert_eq!(config.layout.mobile_max_width_px, 600.0);
        assert_eq!(config.layout.mobile_player_height_px, 35);
        assert_eq!(config.reveal.step_stagger_ms, 300);
    }

    #[test]
    fn class_overrides_are_rejected() {
        let err = PageConfig::from_json(r#"{"classes": {"playing": "is-playing"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = PageConfig::from_json(r#"{"selectors": {"audio_player": "audio"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = PageConfig::from_json(r#"{"reveal": {"threshold": 1.5}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Threshold(value) if value == 1.5));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PageConfig::from_json("{layout:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
