//! Visual constants for the stepper.
//!
//! A [`ThemeConfig`] is a plain value: the stepper never mutates it, and
//! handing a new one to [`Model::set_theme`](crate::stepper::Model::set_theme)
//! refreshes every graphic derived from the old one.
//!
//! ```rust
//! use bubbletea_stepper::theme::ThemeConfig;
//! use std::time::Duration;
//!
//! let theme = ThemeConfig::default()
//!     .with_active_color("#7571F9")
//!     .with_indicator_radius(4.0)
//!     .with_stroke_animation_duration(Duration::from_millis(300));
//!
//! assert_eq!(theme.active_color, "#7571F9");
//! assert!(theme.validate().is_ok());
//! ```

use crate::error::StepperError;
use crate::layers::Classification;
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_THEME: Lazy<ThemeConfig> = Lazy::new(|| ThemeConfig {
    font: "Helvetica".to_string(),
    font_size: 12.0,
    inactive_color: "#808080".to_string(),
    active_color: "#FFFFFF".to_string(),
    completed_color: "#00FF00".to_string(),
    indicator_radius: 5.0,
    line_width: 3.0,
    stroke_animation_duration: Duration::from_millis(750),
});

/// Style configuration shared by every graphic the stepper draws.
///
/// Colors are strings in any form lipgloss understands (`"#00ff00"`,
/// ANSI indices such as `"42"`).
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Font family for the labels. Default is Helvetica.
    pub font: String,
    /// Font size for the labels. Default is 12.
    pub font_size: f64,
    /// Color for inactive indicators, labels and the base track. Default is gray.
    pub inactive_color: String,
    /// Color for the active indicator, label and track. Default is white.
    pub active_color: String,
    /// Color for completed indicators, labels and track. Default is green.
    pub completed_color: String,
    /// Radius of each indicator disc. Default is 5.
    pub indicator_radius: f64,
    /// Stroke width of the tracks. Default is 3.
    pub line_width: f64,
    /// Duration of a track stroke animation. Default is 0.75s.
    pub stroke_animation_duration: Duration,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        DEFAULT_THEME.clone()
    }
}

impl ThemeConfig {
    /// Creates a theme with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Sets the inactive color.
    pub fn with_inactive_color(mut self, color: impl Into<String>) -> Self {
        self.inactive_color = color.into();
        self
    }

    /// Sets the active color.
    pub fn with_active_color(mut self, color: impl Into<String>) -> Self {
        self.active_color = color.into();
        self
    }

    /// Sets the completed color.
    pub fn with_completed_color(mut self, color: impl Into<String>) -> Self {
        self.completed_color = color.into();
        self
    }

    /// Sets the indicator disc radius.
    pub fn with_indicator_radius(mut self, radius: f64) -> Self {
        self.indicator_radius = radius;
        self
    }

    /// Sets the track stroke width.
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the stroke animation duration.
    pub fn with_stroke_animation_duration(mut self, duration: Duration) -> Self {
        self.stroke_animation_duration = duration;
        self
    }

    /// Returns the color a node and its label take for `classification`.
    pub fn color_for(&self, classification: Classification) -> &str {
        match classification {
            Classification::Inactive => &self.inactive_color,
            Classification::Active => &self.active_color,
            Classification::Completed => &self.completed_color,
        }
    }

    /// Checks the numeric ranges.
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::InvalidTheme`] when the font size is not
    /// positive, or when the radius or line width is negative or not finite.
    pub fn validate(&self) -> Result<(), StepperError> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(StepperError::InvalidTheme {
                field: "font_size",
                reason: "must be greater than zero",
            });
        }
        if !(self.indicator_radius.is_finite() && self.indicator_radius >= 0.0) {
            return Err(StepperError::InvalidTheme {
                field: "indicator_radius",
                reason: "must not be negative",
            });
        }
        if !(self.line_width.is_finite() && self.line_width >= 0.0) {
            return Err(StepperError::InvalidTheme {
                field: "line_width",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}
