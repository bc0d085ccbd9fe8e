//! Fast-scroll configuration
//!
//! Every field can be loaded from TOML, and every field can be changed at
//! runtime through the validating setters on
//! [`FastScroller`](crate::FastScroller). Colors are packed `0xAARRGGBB`
//! words.
//!
//! ```toml
//! thumb_width = 10.0
//! thumb_height = 56.0
//! thumb_color_active = 0xFF1E88E5
//! hold_duration_ms = 2000
//! fade_easing = "ease-out"
//! ```

use std::time::Duration;

use fastscroll_animation::{Easing, FadeClock};
use fastscroll_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Appearance and timing of the fast-scroll overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastScrollConfig {
    /// Width of the painted thumb and track in pixels
    pub thumb_width: f32,
    /// Height of the thumb in pixels
    pub thumb_height: f32,
    /// Thumb color when not dragging
    pub thumb_color_idle: u32,
    /// Thumb color while dragging
    pub thumb_color_active: u32,
    /// Track strip color
    pub track_color: u32,
    /// Skip painting the track entirely
    pub track_transparent: bool,
    pub enabled: bool,
    /// Keep the overlay fully opaque regardless of the fade clock
    pub force_visible: bool,
    /// Fully opaque period after the last interaction
    pub hold_duration_ms: u64,
    /// Length of the fade-out ramp
    pub fade_duration_ms: u64,
    /// Minimum number of screens of content before the overlay shows
    pub visibility_length_threshold: f32,
    pub fade_easing: Easing,
}

impl Default for FastScrollConfig {
    fn default() -> Self {
        Self {
            thumb_width: 8.0,
            thumb_height: 48.0,
            thumb_color_idle: 0xDD77_7777,
            thumb_color_active: 0xFF1E_88E5,
            track_color: 0x3977_7777,
            track_transparent: false,
            enabled: true,
            force_visible: false,
            hold_duration_ms: 1500,
            fade_duration_ms: 300,
            visibility_length_threshold: 4.0,
            fade_easing: Easing::Linear,
        }
    }
}

impl FastScrollConfig {
    /// Colors used by the classic item-recycling list
    pub fn item_list() -> Self {
        Self::default()
    }

    /// Colors used by the layout-manager list: standard grey thumb over a
    /// very faint track
    pub fn layout_list() -> Self {
        Self {
            thumb_color_idle: 0xDD66_6666,
            track_color: 0x1100_0000,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field that could corrupt geometry later
    pub fn validate(&self) -> Result<()> {
        validate_dimension("thumb_width", self.thumb_width)?;
        validate_dimension("thumb_height", self.thumb_height)?;
        validate_threshold(self.visibility_length_threshold)?;
        Ok(())
    }

    pub fn hold_duration(&self) -> Duration {
        Duration::from_millis(self.hold_duration_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }

    /// The fade clock described by the timing fields
    pub fn fade_clock(&self) -> FadeClock {
        FadeClock::new(self.hold_duration(), self.fade_duration()).with_easing(self.fade_easing)
    }

    pub fn thumb_color(&self, dragging: bool) -> Color {
        if dragging {
            Color::from_argb(self.thumb_color_active)
        } else {
            Color::from_argb(self.thumb_color_idle)
        }
    }

    pub fn track_color(&self) -> Color {
        Color::from_argb(self.track_color)
    }
}

pub(crate) fn validate_dimension(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { field, value })
    }
}

pub(crate) fn validate_threshold(value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FastScrollConfig::default();
        assert_eq!(config.hold_duration(), Duration::from_millis(1500));
        assert_eq!(config.fade_duration(), Duration::from_millis(300));
        assert_eq!(config.visibility_length_threshold, 4.0);
        assert!(config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layout_list_preset() {
        let config = FastScrollConfig::layout_list();
        assert_eq!(config.thumb_color_idle, 0xDD66_6666);
        assert_eq!(config.track_color, 0x1100_0000);
        assert_eq!(config.thumb_color_active, 0xFF1E_88E5);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = FastScrollConfig::from_toml_str(
            r#"
            thumb_width = 12.0
            hold_duration_ms = 2000
            track_transparent = true
            fade_easing = "ease-out"
            "#,
        )
        .unwrap();

        assert_eq!(config.thumb_width, 12.0);
        assert_eq!(config.thumb_height, 48.0);
        assert_eq!(config.hold_duration(), Duration::from_millis(2000));
        assert!(config.track_transparent);
        assert_eq!(config.fade_easing, Easing::EaseOut);
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let err = FastScrollConfig::from_toml_str("thumb_height = -4.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDimension {
                field: "thumb_height",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = FastScrollConfig::from_toml_str("fade_duration_ms = -300").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = FastScrollConfig {
            visibility_length_threshold: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_thumb_color_follows_drag() {
        let config = FastScrollConfig::default();
        assert_eq!(config.thumb_color(false).to_argb(), 0xDD77_7777);
        assert_eq!(config.thumb_color(true).to_argb(), 0xFF1E_88E5);
    }
}
