// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;

use kurbo::{Size, Vec2};
use tactile_crop::{CropContext, CropInput, CropPlan, crop_plan};
use tactile_gesture::{
    GestureSignal, PanConfig, PanEngine, PanEvent, PinchConfig, PinchEngine, PinchEvent, Signals,
    TapEvent, ZoomCells,
};
use tactile_motion::Tick;
use tactile_transform::{PinchParams, TransformState, clamp_translation, pinch_translation};

use crate::config::{ConfigError, ZoomConfig};
use crate::events::ZoomEvent;

/// Fraction of the maximum scale at or above which a double tap resets to
/// the minimum instead of zooming in further.
const DOUBLE_TAP_RESET_FRACTION: f64 = 0.8;

/// The zoom controller: owns the transform state, arbitrates gestures, pumps
/// animations, and queues user-facing events.
///
/// All methods take the current time explicitly (milliseconds on any
/// monotonic clock); the controller keeps no clock of its own.
#[derive(Debug)]
pub struct ZoomController {
    config: ZoomConfig,
    cells: ZoomCells,
    pan: PanEngine,
    pinch: PinchEngine,
    queue: VecDeque<ZoomEvent>,
    pinch_settling: bool,
    orientation: CropContext,
    rotation_steps: u8,
    crop_in_flight: bool,
}

impl ZoomController {
    /// Creates a controller, failing fast on an invalid configuration.
    ///
    /// The transform starts at the identity for `min_scale`. Sizes start at
    /// zero; call [`Self::set_container_size`] and
    /// [`Self::set_content_size`] from the embedder's layout pass.
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cells: ZoomCells::new(config.min_scale),
            config,
            pan: PanEngine::new(),
            pinch: PinchEngine::new(),
            queue: VecDeque::new(),
            pinch_settling: false,
            orientation: CropContext::default(),
            rotation_steps: 0,
            crop_in_flight: false,
        })
    }

    /// Updates the viewport size.
    pub fn set_container_size(&mut self, size: Size) {
        self.cells.container = size;
    }

    /// Updates the content's laid-out size at scale 1.
    pub fn set_content_size(&mut self, size: Size) {
        self.cells.content = size;
    }

    /// Immutable snapshot of the current transform.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.cells.state()
    }

    /// The maximum scale, resolved against the current content size.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.config.max_scale.resolve(self.cells.content)
    }

    /// Returns the transform to the identity: translation `(0, 0)` at the
    /// minimum scale.
    pub fn reset(&mut self, now_ms: f64, animate: bool) {
        self.apply(now_ms, Vec2::ZERO, self.config.min_scale, animate);
    }

    /// Applies an externally supplied transform, clamped into the legal
    /// range: scale into `[min_scale, max_scale]`, then translation into the
    /// bounds at that clamped scale.
    pub fn assign_state(&mut self, now_ms: f64, state: TransformState, animate: bool) {
        let scale = state.scale.clamp(self.config.min_scale, self.max_scale());
        let translation = clamp_translation(
            Vec2::new(state.translate_x, state.translate_y),
            self.cells.bounds_at(scale),
        );
        self.apply(now_ms, translation, scale, animate);
    }

    /// Feeds a pan start event.
    pub fn on_pan_start(&mut self, now_ms: f64, event: &PanEvent) {
        if !self.config.pan_enabled || self.pinch.is_active() {
            return;
        }
        // The pan cancels the translation animations. A pinch settle that
        // was animating only those is gone with them; one still animating
        // the scale completes on its own and keeps its obligation.
        if !self.cells.scale.is_animating() {
            self.pinch_settling = false;
        }
        let mut signals = Signals::new();
        self.pan.on_start(&mut self.cells, now_ms, event, &mut signals);
        self.flush(&signals);
    }

    /// Feeds a pan change event.
    pub fn on_pan_change(&mut self, event: &PanEvent) {
        if !self.pan.is_active() || self.pinch.is_active() {
            return;
        }
        let mut signals = Signals::new();
        let config = self.pan_config();
        self.pan
            .on_change(&mut self.cells, &config, event, &mut signals);
        self.flush(&signals);
        self.queue.push_back(ZoomEvent::GestureActive(self.state()));
    }

    /// Feeds a pan end event.
    pub fn on_pan_end(&mut self, now_ms: f64, event: &PanEvent) {
        if !self.pan.is_active() {
            return;
        }
        let mut signals = Signals::new();
        let config = self.pan_config();
        self.pan
            .on_end(&mut self.cells, &config, now_ms, event, &mut signals);
        self.flush(&signals);
    }

    /// Feeds a pinch start event.
    pub fn on_pinch_start(&mut self, event: &PinchEvent) {
        if !self.config.pinch_enabled {
            return;
        }
        // The pinch cancels every cell animation, taking any in-flight pan
        // settle (and its gesture-end obligations) with it.
        self.pan.clear_settle();
        self.pinch_settling = false;
        let mut signals = Signals::new();
        let config = self.pinch_config();
        self.pinch
            .on_start(&mut self.cells, &config, event, &mut signals);
        self.flush(&signals);
    }

    /// Feeds a pinch update event.
    pub fn on_pinch_update(&mut self, event: &PinchEvent) {
        if !self.pinch.is_active() {
            return;
        }
        let config = self.pinch_config();
        self.pinch.on_update(&mut self.cells, &config, event);
        self.queue.push_back(ZoomEvent::GestureActive(self.state()));
    }

    /// Feeds a pinch end event.
    pub fn on_pinch_end(&mut self, now_ms: f64) {
        if !self.pinch.is_active() {
            return;
        }
        let mut signals = Signals::new();
        let config = self.pinch_config();
        let settling = self
            .pinch
            .on_end(&mut self.cells, &config, now_ms, &mut signals);
        self.flush(&signals);
        if settling {
            self.pinch_settling = true;
        } else {
            self.queue.push_back(ZoomEvent::GestureEnd);
        }
    }

    /// Feeds a recognized tap.
    ///
    /// Single taps are forwarded as [`ZoomEvent::Tap`]; a tap count of two
    /// or more triggers the double-tap zoom instead. Taps are ignored while
    /// a pan or pinch is in progress.
    pub fn on_tap(&mut self, now_ms: f64, event: &TapEvent) {
        if !self.config.taps_enabled || self.pan.is_active() || self.pinch.is_active() {
            return;
        }
        if event.tap_count >= 2 {
            self.double_tap(now_ms, event);
        } else {
            self.queue.push_back(ZoomEvent::Tap(*event));
        }
    }

    /// Advances animations to `now_ms`.
    ///
    /// Call once per frame while animations may be running; idle ticks are
    /// free. Queues [`ZoomEvent::GestureActive`] for every frame that moved
    /// the transform and [`ZoomEvent::GestureEnd`] when a settle animation
    /// that owes one completes.
    pub fn tick(&mut self, now_ms: f64) {
        let tx = self.cells.translate_x.tick(now_ms);
        let ty = self.cells.translate_y.tick(now_ms);
        let scale = self.cells.scale.tick(now_ms);
        self.cells.detector_x.tick(now_ms);
        self.cells.detector_y.tick(now_ms);
        self.cells.detector_scale.tick(now_ms);

        if tx != Tick::Idle || ty != Tick::Idle || scale != Tick::Idle {
            self.queue.push_back(ZoomEvent::GestureActive(self.state()));
        }

        if tx == Tick::Done && self.pan.take_end_on_x() {
            self.queue.push_back(ZoomEvent::GestureEnd);
        }
        if ty == Tick::Done && self.pan.take_end_on_y() {
            self.queue.push_back(ZoomEvent::GestureEnd);
        }
        if self.pinch_settling && (scale == Tick::Done || tx == Tick::Done || ty == Tick::Done) {
            self.pinch_settling = false;
            self.queue.push_back(ZoomEvent::GestureEnd);
        }
    }

    /// Takes the oldest queued event, if any.
    pub fn poll_event(&mut self) -> Option<ZoomEvent> {
        self.queue.pop_front()
    }

    /// Drains every queued event in order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ZoomEvent> + '_ {
        self.queue.drain(..)
    }

    /// Computes the crop plan for the currently framed region.
    ///
    /// Returns `None` while a previous plan is outstanding; the request is
    /// dropped, not queued. Call [`Self::finish_crop`] when the external
    /// processor reports completion.
    pub fn crop(&mut self, target_width: Option<f64>) -> Option<CropPlan> {
        if self.crop_in_flight {
            return None;
        }
        self.crop_in_flight = true;
        Some(crop_plan(&CropInput {
            container: self.cells.container,
            content: self.cells.content,
            state: self.state(),
            flip_horizontal: self.orientation.flip_horizontal,
            flip_vertical: self.orientation.flip_vertical,
            rotation_steps: self.rotation_steps,
            target_width,
        }))
    }

    /// Marks the outstanding crop as finished, re-arming [`Self::crop`].
    pub fn finish_crop(&mut self) {
        self.crop_in_flight = false;
    }

    /// Toggles the horizontal flip fed into crop plans.
    pub fn flip_horizontal(&mut self) {
        self.orientation.flip_horizontal = !self.orientation.flip_horizontal;
    }

    /// Toggles the vertical flip fed into crop plans.
    pub fn flip_vertical(&mut self) {
        self.orientation.flip_vertical = !self.orientation.flip_vertical;
    }

    /// Advances the crop rotation by one 90° clockwise step.
    pub fn rotate(&mut self) {
        self.rotation_steps = (self.rotation_steps + 1) % 4;
        self.orientation.rotation_degrees = u16::from(self.rotation_steps) * 90;
    }

    /// Current flip and rotation state as fed into crop plans.
    #[must_use]
    pub fn orientation(&self) -> CropContext {
        self.orientation
    }

    fn pan_config(&self) -> PanConfig {
        PanConfig {
            mode: self.config.pan_mode,
            decay: self.config.decay,
            min_scale: self.config.min_scale,
            max_scale: self.max_scale(),
        }
    }

    fn pinch_config(&self) -> PinchConfig {
        PinchConfig {
            scale_mode: self.config.scale_mode,
            min_scale: self.config.min_scale,
            max_scale: self.max_scale(),
            pan_with_pinch: self.config.pan_with_pinch,
            extend_gestures: self.config.extend_gestures,
        }
    }

    /// The double-tap zoom: reset when already near the maximum scale,
    /// otherwise zoom to the maximum anchored at the tap point.
    fn double_tap(&mut self, now_ms: f64, event: &TapEvent) {
        let scale = self.cells.scale.get();
        let max_scale = self.max_scale();
        if scale >= DOUBLE_TAP_RESET_FRACTION * max_scale {
            self.reset(now_ms, true);
            return;
        }

        let surface = if self.config.extend_gestures {
            self.cells.container
        } else {
            self.cells.content
        };
        let center = Vec2::new(surface.width / 2.0, surface.height / 2.0);
        // Container-space anchor; the clamp below absorbs the approximation.
        let origin = event.position.to_vec2() - center;
        let translation = pinch_translation(&PinchParams {
            origin,
            delta: Vec2::ZERO,
            from_scale: scale,
            to_scale: max_scale,
            offset: self.cells.translation(),
        });
        let translation = clamp_translation(translation, self.cells.bounds_at(max_scale));
        self.apply(now_ms, translation, max_scale, true);
    }

    /// Writes or animates a full transform target on every cell.
    ///
    /// Either form replaces whatever settle animations were in flight, so
    /// the gesture-end obligations they carried are dropped here.
    fn apply(&mut self, now_ms: f64, translation: Vec2, scale: f64, animate: bool) {
        self.pan.clear_settle();
        self.pinch_settling = false;
        if animate {
            self.cells.translate_x.animate_to(now_ms, translation.x);
            self.cells.translate_y.animate_to(now_ms, translation.y);
            self.cells.detector_x.animate_to(now_ms, translation.x);
            self.cells.detector_y.animate_to(now_ms, translation.y);
            self.cells.scale.animate_to(now_ms, scale);
            self.cells.detector_scale.animate_to(now_ms, scale);
        } else {
            self.cells.set_translation(translation);
            self.cells.scale.set(scale);
            self.cells.detector_scale.set(scale);
            self.queue.push_back(ZoomEvent::GestureActive(self.state()));
        }
    }

    fn flush(&mut self, signals: &Signals) {
        for signal in signals {
            self.queue.push_back(match *signal {
                GestureSignal::PanStart => ZoomEvent::PanStart,
                GestureSignal::PanEnd => ZoomEvent::PanEnd,
                GestureSignal::PinchStart => ZoomEvent::PinchStart,
                GestureSignal::PinchEnd => ZoomEvent::PinchEnd,
                GestureSignal::SwipeLeft => ZoomEvent::SwipeLeft,
                GestureSignal::SwipeRight => ZoomEvent::SwipeRight,
                GestureSignal::HorizontalBoundsExceeded(overflow) => {
                    ZoomEvent::HorizontalBoundsExceeded(overflow)
                }
            });
        }
    }
}
