// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use tactile_gesture::{PanMode, ScaleMode};
use tactile_transform::MaxScale;

/// Controller configuration.
///
/// The defaults match a typical image viewer: clamped panning with inertia,
/// elastic pinch overshoot, all gestures enabled, scale range 1 to 6.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Minimum committed scale. Must be positive.
    pub min_scale: f64,
    /// Maximum committed scale policy.
    pub max_scale: MaxScale,
    /// Overscroll policy for panning.
    pub pan_mode: PanMode,
    /// Overshoot policy for pinching.
    pub scale_mode: ScaleMode,
    /// Whether releases inside the bounds continue with inertial decay.
    pub decay: bool,
    /// Whether focal point motion drags the content during a pinch.
    pub pan_with_pinch: bool,
    /// Whether pan gestures are recognized at all.
    pub pan_enabled: bool,
    /// Whether pinch gestures are recognized at all.
    pub pinch_enabled: bool,
    /// Whether tap and double-tap gestures are recognized at all.
    pub taps_enabled: bool,
    /// Whether the gesture surface is the container rather than the content.
    /// Affects the pinch and double-tap anchor reference.
    pub extend_gestures: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: MaxScale::Fixed(6.0),
            pan_mode: PanMode::default(),
            scale_mode: ScaleMode::default(),
            decay: true,
            pan_with_pinch: true,
            pan_enabled: true,
            pinch_enabled: true,
            taps_enabled: true,
            extend_gestures: false,
        }
    }
}

impl ZoomConfig {
    /// Validates the scale range.
    ///
    /// A [`MaxScale::FromResolution`] policy cannot be checked against
    /// `min_scale` until layout supplies a content size, so only the fixed
    /// form is validated here; the resolved value is floored at `1.0` and a
    /// `min_scale` above it still clamps rather than errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_scale <= 0.0 {
            return Err(ConfigError::NonPositiveMinScale);
        }
        if let MaxScale::Fixed(max) = self.max_scale
            && max < self.min_scale
        {
            return Err(ConfigError::InvertedScaleRange);
        }
        Ok(())
    }
}

/// A rejected [`ZoomConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_scale` was zero or negative.
    NonPositiveMinScale,
    /// A fixed `max_scale` was below `min_scale`.
    InvertedScaleRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveMinScale => write!(f, "min_scale must be positive"),
            Self::InvertedScaleRange => write!(f, "max_scale must not be below min_scale"),
        }
    }
}

impl core::error::Error for ConfigError {}
