// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use tactile_transform::{PinchParams, clamp_translation, pinch_translation};

use crate::cells::ZoomCells;
use crate::events::PinchEvent;
use crate::modes::ScaleMode;
use crate::signal::{GestureSignal, Signals};

/// Fraction of an out-of-range scale excursion that is actually applied in
/// [`ScaleMode::Bounce`].
const ELASTIC_FACTOR: f64 = 0.5;

/// Pinch engine configuration, derived from the controller's settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchConfig {
    /// Overshoot policy for the scale range.
    pub scale_mode: ScaleMode,
    /// Minimum committed scale.
    pub min_scale: f64,
    /// Maximum committed scale.
    pub max_scale: f64,
    /// Whether focal point motion drags the content along with the pinch.
    pub pan_with_pinch: bool,
    /// Whether the gesture surface is the container rather than the content.
    pub extend_gestures: bool,
}

/// State machine for the pinch gesture.
///
/// The anchor (`origin`) is captured once at gesture start in content-local
/// coordinates, so the content point under the initial focal point stays
/// exactly under it throughout the gesture.
#[derive(Clone, Debug, Default)]
pub struct PinchEngine {
    origin: Vec2,
    delta: Vec2,
    scale_offset: f64,
    offset: Vec2,
    start_focal: Point,
    active: bool,
}

impl PinchEngine {
    /// Creates an idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between `on_start` and `on_end`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handles the start of a pinch gesture.
    ///
    /// Every in-flight animation is cancelled *before* the offsets are
    /// captured; the captured values anchor the whole gesture.
    pub fn on_start(
        &mut self,
        cells: &mut ZoomCells,
        config: &PinchConfig,
        event: &PinchEvent,
        signals: &mut Signals,
    ) {
        cells.cancel_all();

        self.offset = cells.translation();
        self.scale_offset = cells.scale.get();
        self.start_focal = event.focal;
        self.delta = Vec2::ZERO;

        let surface = if config.extend_gestures {
            cells.container
        } else {
            cells.content
        };
        let center = Vec2::new(surface.width / 2.0, surface.height / 2.0);
        self.origin = (event.focal.to_vec2() - center - self.offset) / self.scale_offset;

        self.active = true;
        signals.push(GestureSignal::PinchStart);
    }

    /// Handles a per-frame pinch update.
    pub fn on_update(&mut self, cells: &mut ZoomCells, config: &PinchConfig, event: &PinchEvent) {
        if !self.active {
            return;
        }

        self.delta = if config.pan_with_pinch {
            event.focal - self.start_focal
        } else {
            Vec2::ZERO
        };

        let raw = self.scale_offset * event.scale;
        let to_scale = match config.scale_mode {
            ScaleMode::Clamp => raw.clamp(config.min_scale, config.max_scale),
            ScaleMode::Bounce => {
                if raw > config.max_scale {
                    config.max_scale + (raw - config.max_scale) * ELASTIC_FACTOR
                } else if raw < config.min_scale {
                    config.min_scale - (config.min_scale - raw) * ELASTIC_FACTOR
                } else {
                    raw
                }
            }
        };

        let translation = pinch_translation(&PinchParams {
            origin: self.origin,
            delta: self.delta,
            from_scale: self.scale_offset,
            to_scale,
            offset: self.offset,
        });

        cells.set_translation(translation);
        cells.scale.set(to_scale);
        cells.detector_scale.set(to_scale);
    }

    /// Handles the end of a pinch gesture.
    ///
    /// Returns `true` when a settle animation was started; the owner emits
    /// its gesture-end notification when that animation completes, or
    /// immediately when no settle was needed.
    pub fn on_end(
        &mut self,
        cells: &mut ZoomCells,
        config: &PinchConfig,
        now_ms: f64,
        signals: &mut Signals,
    ) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        signals.push(GestureSignal::PinchEnd);

        let scale = cells.scale.get();
        let clamped = scale.clamp(config.min_scale, config.max_scale);

        if scale != clamped {
            // Spring back from the elastic overshoot. The translation target
            // is recomputed from the captured gesture parameters at the
            // clamped scale, so the spring retraces the pinch trajectory.
            let translation = pinch_translation(&PinchParams {
                origin: self.origin,
                delta: self.delta,
                from_scale: self.scale_offset,
                to_scale: clamped,
                offset: self.offset,
            });
            let to = clamp_translation(translation, cells.bounds_at(clamped));

            cells.scale.animate_to(now_ms, clamped);
            cells.detector_scale.animate_to(now_ms, clamped);
            cells.translate_x.animate_to(now_ms, to.x);
            cells.translate_y.animate_to(now_ms, to.y);
            cells.detector_x.animate_to(now_ms, to.x);
            cells.detector_y.animate_to(now_ms, to.y);
            return true;
        }

        let current = cells.translation();
        let to = clamp_translation(current, cells.bounds_at(scale));
        if to != current {
            cells.translate_x.animate_to(now_ms, to.x);
            cells.translate_y.animate_to(now_ms, to.y);
            cells.detector_x.animate_to(now_ms, to.x);
            cells.detector_y.animate_to(now_ms, to.y);
            return true;
        }
        false
    }
}
