//! Recognizer configuration.

/// Default dead-zone distance in view units.
pub const DEFAULT_ZOOM_THRESHOLD: f64 = 20.0;

/// Errors raised when validating a [`GestureConfig`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The zoom threshold is below zero.
    #[error("zoom threshold must not be negative, got {0}")]
    NegativeZoomThreshold(f64),
    /// The zoom threshold is NaN or infinite.
    #[error("zoom threshold must be finite, got {0}")]
    NonFiniteZoomThreshold(f64),
}

/// Configuration for pan/zoom recognition.
///
/// Changes apply from the next computed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Scale both axes uniformly from the change in finger distance.
    pub keep_aspect_ratio_when_pinching: bool,
    /// Per-axis finger distance at or below which that axis does not zoom.
    ///
    /// Ignored when pinching keeps the aspect ratio.
    pub zoom_threshold: f64,
    /// Keep zooming after fingers cross on an axis.
    ///
    /// When disabled, an axis whose finger distance flips sign relative to
    /// the distance at two-finger touch-down stops scaling.
    pub allow_pinch_past_zero: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            keep_aspect_ratio_when_pinching: false,
            zoom_threshold: DEFAULT_ZOOM_THRESHOLD,
            allow_pinch_past_zero: true,
        }
    }
}

impl GestureConfig {
    /// Settings used by interactive plot views: uniform pinch scaling.
    pub fn plot_view() -> Self {
        Self {
            keep_aspect_ratio_when_pinching: true,
            ..Self::default()
        }
    }

    /// Set whether pinching keeps the aspect ratio.
    pub fn with_keep_aspect_ratio(mut self, keep: bool) -> Self {
        self.keep_aspect_ratio_when_pinching = keep;
        self
    }

    /// Set the per-axis dead-zone distance.
    pub fn with_zoom_threshold(mut self, threshold: f64) -> Self {
        self.zoom_threshold = threshold;
        self
    }

    /// Set whether zooming continues after fingers cross.
    pub fn with_allow_pinch_past_zero(mut self, allow: bool) -> Self {
        self.allow_pinch_past_zero = allow;
        self
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFiniteZoomThreshold`] for NaN or infinite
    /// thresholds and [`ConfigError::NegativeZoomThreshold`] for negative ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zoom_threshold.is_finite() {
            return Err(ConfigError::NonFiniteZoomThreshold(self.zoom_threshold));
        }
        if self.zoom_threshold < 0.0 {
            return Err(ConfigError::NegativeZoomThreshold(self.zoom_threshold));
        }
        Ok(())
    }
}
