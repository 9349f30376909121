//! Tunables shared by the carousel components.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CarouselError;

/// Release distance (px) past which a drag becomes a navigation.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 100.0;

/// Travel (px) past which the click ending a drag is swallowed.
pub const DEFAULT_CLICK_SLOP: f64 = 5.0;

/// Default debounce window and post-mount check delay, in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 100;

/// Carousel configuration.
///
/// Every field has a default, so a partial JSON object deserializes into a
/// complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Delay before the first disabled-state check after mount.
    pub navigation_update_delay_ms: u32,
    /// Debounce window for scroll and resize events.
    pub scroll_debounce_ms: u32,
    /// Release distance that turns a drag into next/previous navigation.
    pub drag_threshold_px: f64,
    /// Drag travel beyond which the trailing click is suppressed.
    pub click_slop_px: f64,
    /// Intersection observer thresholds for each slide.
    pub visibility_thresholds: Vec<f64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            navigation_update_delay_ms: DEFAULT_DELAY_MS,
            scroll_debounce_ms: DEFAULT_DELAY_MS,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD,
            click_slop_px: DEFAULT_CLICK_SLOP,
            visibility_thresholds: vec![0.0, 0.5, 1.0],
        }
    }
}

impl CarouselConfig {
    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms as u64)
    }

    pub fn navigation_update_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_update_delay_ms as u64)
    }

    /// Check the config for values the components can't work with.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !(self.drag_threshold_px.is_finite() && self.drag_threshold_px > 0.0) {
            return Err(CarouselError::InvalidConfig(format!(
                "drag_threshold_px must be positive, got {}",
                self.drag_threshold_px
            )));
        }
        if !(self.click_slop_px.is_finite() && self.click_slop_px >= 0.0) {
            return Err(CarouselError::InvalidConfig(format!(
                "click_slop_px must be non-negative, got {}",
                self.click_slop_px
            )));
        }
        if self.visibility_thresholds.is_empty() {
            return Err(CarouselError::InvalidConfig(
                "visibility_thresholds must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .visibility_thresholds
            .iter()
            .find(|t| !(0.0..=1.0).contains(*t))
        {
            return Err(CarouselError::InvalidConfig(format!(
                "visibility threshold {bad} is outside [0, 1]"
            )));
        }
        Ok(())
    }

    /// Return this config if valid, otherwise log and fall back to defaults.
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!("{e}; using default carousel config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CarouselConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scroll_debounce(), Duration::from_millis(100));
        assert_eq!(config.navigation_update_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{ "drag_threshold_px": 40.0 }"#).unwrap();
        assert_eq!(config.drag_threshold_px, 40.0);
        assert_eq!(config.scroll_debounce_ms, 100);
        assert_eq!(config.visibility_thresholds, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = CarouselConfig {
            drag_threshold_px: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CarouselError::InvalidConfig(_))
        ));

        let config = CarouselConfig {
            visibility_thresholds: vec![0.0, 1.5],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CarouselConfig {
            visibility_thresholds: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_falls_back_to_default() {
        let config = CarouselConfig {
            click_slop_px: -1.0,
            ..Default::default()
        };
        assert_eq!(config.or_default_if_invalid(), CarouselConfig::default());
    }
}
