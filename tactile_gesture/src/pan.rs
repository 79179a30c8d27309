// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use tactile_motion::{DECELERATION_RATE, friction, overscroll_fraction};
use tactile_transform::clamp_translation;

use crate::cells::ZoomCells;
use crate::events::PanEvent;
use crate::modes::PanMode;
use crate::signal::{GestureSignal, Signals};

/// Minimum horizontal pointer velocity (px/s) for an edge swipe.
pub const SWIPE_VELOCITY_THRESHOLD: f64 = 500.0;
/// Minimum absolute horizontal travel (px) for an edge swipe.
pub const SWIPE_DISTANCE_THRESHOLD: f64 = 20.0;
/// Maximum gesture duration (ms) for an edge swipe.
pub const SWIPE_MAX_DURATION_MS: f64 = 175.0;

/// Pan engine configuration, derived from the controller's settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanConfig {
    /// Overscroll policy.
    pub mode: PanMode,
    /// Whether releases inside the bounds continue with inertial decay.
    pub decay: bool,
    /// Minimum committed scale.
    pub min_scale: f64,
    /// Maximum committed scale.
    pub max_scale: f64,
}

/// Which settle animations owe a gesture-end notification.
///
/// Mirrors the release logic: an inertial X settle always notifies on
/// completion; a timed settle notifies only when it had to correct an
/// out-of-bounds position, and the Y axis defers to X when X is also
/// correcting.
#[derive(Clone, Copy, Debug, Default)]
struct SettleFlags {
    end_on_x: bool,
    end_on_y: bool,
}

/// State machine for the pan gesture.
///
/// Idle → active on [`PanEngine::on_start`], back to idle on
/// [`PanEngine::on_end`] (possibly via settle animations it starts on the
/// cells). The engine owns only its bookkeeping; all transform state lives
/// in the [`ZoomCells`] passed into each call.
#[derive(Clone, Debug, Default)]
pub struct PanEngine {
    offset: Vec2,
    start_ms: f64,
    start_absolute_x: f64,
    within_x: bool,
    within_y: bool,
    active: bool,
    settle: SettleFlags,
}

impl PanEngine {
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

    /// Handles the start of a pan gesture.
    ///
    /// In-flight translation animations are cancelled *before* the offset is
    /// captured; capturing first would leak a stale animated value into the
    /// whole gesture.
    pub fn on_start(
        &mut self,
        cells: &mut ZoomCells,
        now_ms: f64,
        event: &PanEvent,
        signals: &mut Signals,
    ) {
        cells.cancel_translation();

        self.offset = cells.translation();
        self.start_ms = now_ms;
        self.start_absolute_x = event.absolute.x;
        self.within_x = true;
        self.within_y = true;
        self.settle = SettleFlags::default();
        self.active = true;

        signals.push(GestureSignal::PanStart);
    }

    /// Handles a per-frame pan change.
    pub fn on_change(
        &mut self,
        cells: &mut ZoomCells,
        config: &PanConfig,
        event: &PanEvent,
        signals: &mut Signals,
    ) {
        if !self.active {
            return;
        }

        let to = event.translation + self.offset;
        let to_scale = cells
            .scale
            .get()
            .clamp(config.min_scale, config.max_scale);
        let bounds = cells.bounds_at(to_scale);
        self.within_x = to.x >= -bounds.x && to.x <= bounds.x;
        self.within_y = to.y >= -bounds.y && to.y <= bounds.y;

        // Only the clamped mode reports horizontal overflow, even though the
        // free mode can also exceed bounds.
        if !self.within_x && config.mode == PanMode::Clamp {
            let overflow = -(to.x - to.x.signum() * bounds.x);
            signals.push(GestureSignal::HorizontalBoundsExceeded(overflow));
        }

        match config.mode {
            PanMode::Free => {
                cells.set_translation(to);
            }
            PanMode::Clamp => {
                cells.set_translation(clamp_translation(to, bounds));
            }
            PanMode::Friction => {
                let largest_dim = cells.content.width.max(cells.content.height);
                if self.within_x {
                    cells.translate_x.set(to.x);
                } else {
                    let fraction = overscroll_fraction(to.x, bounds.x, largest_dim);
                    cells.translate_x.add(event.change.x * friction(fraction));
                }
                if self.within_y {
                    cells.translate_y.set(to.y);
                } else {
                    let fraction = overscroll_fraction(to.y, bounds.y, largest_dim);
                    cells.translate_y.add(event.change.y * friction(fraction));
                }
            }
        }
    }

    /// Handles the end of a pan gesture: swipe check, then settle.
    pub fn on_end(
        &mut self,
        cells: &mut ZoomCells,
        config: &PanConfig,
        now_ms: f64,
        event: &PanEvent,
        signals: &mut Signals,
    ) {
        if !self.active {
            return;
        }
        self.active = false;

        if config.mode == PanMode::Clamp && self.swipe(cells, now_ms, event, signals) {
            return;
        }

        signals.push(GestureSignal::PanEnd);

        let to_scale = cells
            .scale
            .get()
            .clamp(config.min_scale, config.max_scale);
        let bounds = cells.bounds_at(to_scale);
        let to = clamp_translation(cells.translation(), bounds);

        if config.decay && self.within_x {
            let current = cells.translate_x.get();
            cells.detector_x.set(current);
            let clamp = Some((-bounds.x, bounds.x));
            cells
                .translate_x
                .decay(now_ms, event.velocity.x, clamp, DECELERATION_RATE);
            cells
                .detector_x
                .decay(now_ms, event.velocity.x, clamp, DECELERATION_RATE);
            self.settle.end_on_x = true;
        } else {
            cells.translate_x.animate_to(now_ms, to.x);
            cells.detector_x.animate_to(now_ms, to.x);
            self.settle.end_on_x = !self.within_x;
        }

        if config.decay && self.within_y {
            let current = cells.translate_y.get();
            cells.detector_y.set(current);
            let clamp = Some((-bounds.y, bounds.y));
            cells
                .translate_y
                .decay(now_ms, event.velocity.y, clamp, DECELERATION_RATE);
            cells
                .detector_y
                .decay(now_ms, event.velocity.y, clamp, DECELERATION_RATE);
            self.settle.end_on_y = false;
        } else {
            cells.translate_y.animate_to(now_ms, to.y);
            cells.detector_y.animate_to(now_ms, to.y);
            self.settle.end_on_y = self.within_x && !self.within_y;
        }
    }

    /// Takes (and clears) the gesture-end obligation for a completed X
    /// settle animation.
    pub fn take_end_on_x(&mut self) -> bool {
        core::mem::take(&mut self.settle.end_on_x)
    }

    /// Takes (and clears) the gesture-end obligation for a completed Y
    /// settle animation.
    pub fn take_end_on_y(&mut self) -> bool {
        core::mem::take(&mut self.settle.end_on_y)
    }

    /// Drops any pending gesture-end obligations.
    ///
    /// Must be called when the settle animations are cancelled or
    /// overwritten by another writer, so a later animation completing on
    /// the same cell does not report a gesture end it does not owe.
    pub fn clear_settle(&mut self) {
        self.settle = SettleFlags::default();
    }

    /// Edge swipe check. Returns `true` when the gesture resolved as a
    /// swipe, in which case no settle animation runs.
    fn swipe(
        &self,
        cells: &ZoomCells,
        now_ms: f64,
        event: &PanEvent,
        signals: &mut Signals,
    ) -> bool {
        let velocity = event.velocity.x.abs();
        let elapsed = now_ms - self.start_ms;
        let travel = (self.start_absolute_x - event.absolute.x).abs();

        let did_swipe = velocity >= SWIPE_VELOCITY_THRESHOLD
            && travel >= SWIPE_DISTANCE_THRESHOLD
            && elapsed < SWIPE_MAX_DURATION_MS;
        if !did_swipe {
            return false;
        }

        let bound_x = cells.bounds_at(cells.scale.get()).x;
        let direction = (event.absolute.x - self.start_absolute_x).signum();

        // A swipe only fires when the content already rests on the edge the
        // swipe is pushing against.
        if direction == -1.0 && cells.translate_x.get() == -bound_x {
            signals.push(GestureSignal::SwipeLeft);
            return true;
        }
        if direction == 1.0 && cells.translate_x.get() == bound_x {
            signals.push(GestureSignal::SwipeRight);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use tactile_motion::Tick;

    use super::{PanConfig, PanEngine};
    use crate::cells::ZoomCells;
    use crate::events::PanEvent;
    use crate::modes::PanMode;
    use crate::signal::{GestureSignal, Signals};

    fn zoomed_cells(scale: f64) -> ZoomCells {
        let mut cells = ZoomCells::new(1.0);
        cells.container = Size::new(300.0, 300.0);
        cells.content = Size::new(300.0, 300.0);
        cells.scale.set(scale);
        cells.detector_scale.set(scale);
        cells
    }

    fn config(mode: PanMode, decay: bool) -> PanConfig {
        PanConfig {
            mode,
            decay,
            min_scale: 1.0,
            max_scale: 6.0,
        }
    }

    fn start_event(absolute_x: f64) -> PanEvent {
        PanEvent {
            absolute: Point::new(absolute_x, 150.0),
            pointer_count: 1,
            ..PanEvent::default()
        }
    }

    fn change_event(translation: Vec2, change: Vec2) -> PanEvent {
        PanEvent {
            translation,
            change,
            pointer_count: 1,
            ..PanEvent::default()
        }
    }

    #[test]
    fn start_cancels_animations_before_capturing_offset() {
        let mut cells = zoomed_cells(3.0);
        cells.translate_x.set(40.0);
        // An in-flight settle toward 0 must not leak into the offset.
        cells.translate_x.animate_to(0.0, 0.0);

        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 10.0, &start_event(100.0), &mut signals);

        assert!(!cells.translate_x.is_animating());
        assert_eq!(signals.as_slice(), &[GestureSignal::PanStart]);

        // A change of zero keeps the pre-animation value.
        let cfg = config(PanMode::Clamp, false);
        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::ZERO, Vec2::ZERO),
            &mut signals,
        );
        assert_eq!(cells.translate_x.get(), 40.0);
    }

    #[test]
    fn free_mode_tracks_unclamped_and_stays_silent() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Free, false);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 0.0, &start_event(100.0), &mut signals);

        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-900.0, 50.0), Vec2::new(-900.0, 50.0)),
            &mut signals,
        );

        // Bounds at scale 3 are ±300; free mode ignores them and never
        // reports horizontal overflow.
        assert_eq!(cells.translate_x.get(), -900.0);
        assert_eq!(cells.detector_x.get(), -900.0);
        assert!(signals.is_empty());
    }

    #[test]
    fn clamp_mode_clamps_each_axis_from_its_own_proposal() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Clamp, false);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 0.0, &start_event(100.0), &mut signals);

        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-900.0, 120.0), Vec2::new(-900.0, 120.0)),
            &mut signals,
        );

        assert_eq!(cells.translate_x.get(), -300.0);
        // Y is inside its own bound and must not inherit X's clamp.
        assert_eq!(cells.translate_y.get(), 120.0);
        assert_eq!(cells.detector_x.get(), -300.0);
        assert_eq!(cells.detector_y.get(), 120.0);
    }

    #[test]
    fn clamp_mode_reports_horizontal_overflow() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Clamp, false);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 0.0, &start_event(100.0), &mut signals);

        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-340.0, 0.0), Vec2::new(-340.0, 0.0)),
            &mut signals,
        );

        // overflow = -(toX - sign(toX)·boundX) = -(-340 + 300) = 40.
        assert_eq!(
            signals.as_slice(),
            &[GestureSignal::HorizontalBoundsExceeded(40.0)]
        );
    }

    #[test]
    fn friction_damps_without_reversing() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Friction, false);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 0.0, &start_event(100.0), &mut signals);

        // First move: to the edge, still in bounds, tracks 1:1.
        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-300.0, 0.0), Vec2::new(-300.0, 0.0)),
            &mut signals,
        );
        assert_eq!(cells.translate_x.get(), -300.0);

        // Second move: past the edge; the applied delta is damped.
        let before = cells.translate_x.get();
        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-340.0, 0.0), Vec2::new(-40.0, 0.0)),
            &mut signals,
        );
        let applied = cells.translate_x.get() - before;
        assert!(applied < 0.0);
        assert!(applied.abs() < 40.0);
        // Friction mode never reports overflow.
        assert!(signals.is_empty());
    }

    #[test]
    fn friction_resistance_grows_with_depth() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Friction, false);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 0.0, &start_event(100.0), &mut signals);

        let mut translation = -300.0;
        let mut prev_applied = f64::MAX;
        for _ in 0..4 {
            let before = cells.translate_x.get();
            translation -= 80.0;
            let mut signals = Signals::new();
            engine.on_change(
                &mut cells,
                &cfg,
                &change_event(Vec2::new(translation, 0.0), Vec2::new(-80.0, 0.0)),
                &mut signals,
            );
            let applied = (cells.translate_x.get() - before).abs();
            assert!(applied < prev_applied);
            prev_applied = applied;
        }
    }

    #[test]
    fn swipe_left_fires_only_from_the_left_edge() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Clamp, true);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 0.0, &start_event(200.0), &mut signals);

        // Drag to the left edge.
        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-400.0, 0.0), Vec2::new(-400.0, 0.0)),
            &mut signals,
        );
        assert_eq!(cells.translate_x.get(), -300.0);

        let end = PanEvent {
            velocity: Vec2::new(-600.0, 0.0),
            absolute: Point::new(150.0, 150.0),
            pointer_count: 1,
            ..PanEvent::default()
        };
        let mut signals = Signals::new();
        engine.on_end(&mut cells, &cfg, 100.0, &end, &mut signals);

        assert_eq!(signals.as_slice(), &[GestureSignal::SwipeLeft]);
        // A swipe terminates without settle animations.
        assert!(!cells.translate_x.is_animating());
        assert!(!engine.is_active());
    }

    #[test]
    fn swipe_requires_every_condition() {
        // Each case breaks exactly one swipe condition; all must settle
        // normally (PanEnd, no swipe).
        struct Case {
            velocity_x: f64,
            end_absolute_x: f64,
            end_ms: f64,
            at_edge: bool,
        }
        let cases = [
            // Too slow.
            Case {
                velocity_x: -400.0,
                end_absolute_x: 150.0,
                end_ms: 100.0,
                at_edge: true,
            },
            // Too short a travel.
            Case {
                velocity_x: -600.0,
                end_absolute_x: 190.0,
                end_ms: 100.0,
                at_edge: true,
            },
            // Too long a duration.
            Case {
                velocity_x: -600.0,
                end_absolute_x: 150.0,
                end_ms: 200.0,
                at_edge: true,
            },
            // Not resting on the edge.
            Case {
                velocity_x: -600.0,
                end_absolute_x: 150.0,
                end_ms: 100.0,
                at_edge: false,
            },
        ];

        for case in cases {
            let mut cells = zoomed_cells(3.0);
            let cfg = config(PanMode::Clamp, false);
            let mut engine = PanEngine::new();
            let mut signals = Signals::new();
            engine.on_start(&mut cells, 0.0, &start_event(200.0), &mut signals);

            let translation = if case.at_edge { -400.0 } else { -100.0 };
            let mut signals = Signals::new();
            engine.on_change(
                &mut cells,
                &cfg,
                &change_event(Vec2::new(translation, 0.0), Vec2::new(translation, 0.0)),
                &mut signals,
            );

            let end = PanEvent {
                velocity: Vec2::new(case.velocity_x, 0.0),
                absolute: Point::new(case.end_absolute_x, 150.0),
                pointer_count: 1,
                ..PanEvent::default()
            };
            let mut signals = Signals::new();
            engine.on_end(&mut cells, &cfg, case.end_ms, &end, &mut signals);
            assert_eq!(signals.as_slice(), &[GestureSignal::PanEnd]);
        }
    }

    #[test]
    fn swipe_never_fires_outside_clamp_mode() {
        for mode in [PanMode::Free, PanMode::Friction] {
            let mut cells = zoomed_cells(3.0);
            let cfg = config(mode, false);
            let mut engine = PanEngine::new();
            let mut signals = Signals::new();
            engine.on_start(&mut cells, 0.0, &start_event(200.0), &mut signals);

            cells.set_translation(Vec2::new(-300.0, 0.0));
            let end = PanEvent {
                velocity: Vec2::new(-600.0, 0.0),
                absolute: Point::new(150.0, 150.0),
                pointer_count: 1,
                ..PanEvent::default()
            };
            let mut signals = Signals::new();
            engine.on_end(&mut cells, &cfg, 100.0, &end, &mut signals);
            assert_eq!(signals.as_slice(), &[GestureSignal::PanEnd]);
        }
    }

    #[test]
    fn release_in_bounds_with_decay_starts_inertial_settle() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Clamp, true);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 0.0, &start_event(200.0), &mut signals);

        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-100.0, 0.0), Vec2::new(-100.0, 0.0)),
            &mut signals,
        );

        let end = PanEvent {
            velocity: Vec2::new(-900.0, 0.0),
            absolute: Point::new(150.0, 150.0),
            pointer_count: 1,
            ..PanEvent::default()
        };
        let mut signals = Signals::new();
        // Long gesture: no swipe, falls through to decay.
        engine.on_end(&mut cells, &cfg, 500.0, &end, &mut signals);
        assert_eq!(signals.as_slice(), &[GestureSignal::PanEnd]);
        assert!(cells.translate_x.is_animating());
        assert!(cells.detector_x.is_animating());

        // Drive the decay to rest; it must stop inside the bounds.
        let mut now = 500.0;
        while cells.translate_x.tick(now) == Tick::Moving {
            now += 16.0;
        }
        assert!(cells.translate_x.get() >= -300.0);
        assert!(engine.take_end_on_x());
        assert!(!engine.take_end_on_x());
    }

    #[test]
    fn release_out_of_bounds_uses_timed_correction() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Friction, true);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 0.0, &start_event(200.0), &mut signals);

        // Overscroll deep past the X bound via friction.
        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-300.0, 0.0), Vec2::new(-300.0, 0.0)),
            &mut signals,
        );
        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-400.0, 0.0), Vec2::new(-100.0, 0.0)),
            &mut signals,
        );
        assert!(cells.translate_x.get() < -300.0);

        let end = PanEvent {
            absolute: Point::new(150.0, 150.0),
            pointer_count: 1,
            ..PanEvent::default()
        };
        let mut signals = Signals::new();
        engine.on_end(&mut cells, &cfg, 500.0, &end, &mut signals);

        // X was out of bounds: timed ease back onto the bound, with a
        // gesture-end owed on completion.
        let mut now = 500.0;
        while cells.translate_x.tick(now) == Tick::Moving {
            now += 16.0;
        }
        assert_eq!(cells.translate_x.get(), -300.0);
        assert!(engine.take_end_on_x());
        // Y never left bounds; its decay owes nothing.
        assert!(!engine.take_end_on_y());
    }

    #[test]
    fn clear_settle_drops_pending_obligations() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Friction, false);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_start(&mut cells, 0.0, &start_event(200.0), &mut signals);

        // Overscroll so the release records a timed-X obligation.
        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-340.0, 0.0), Vec2::new(-340.0, 0.0)),
            &mut signals,
        );
        let mut signals = Signals::new();
        engine.on_end(&mut cells, &cfg, 500.0, &PanEvent::default(), &mut signals);

        // The settle was cancelled by another writer before completing.
        engine.clear_settle();
        assert!(!engine.take_end_on_x());
        assert!(!engine.take_end_on_y());
    }

    #[test]
    fn events_before_start_are_ignored() {
        let mut cells = zoomed_cells(3.0);
        let cfg = config(PanMode::Clamp, false);
        let mut engine = PanEngine::new();
        let mut signals = Signals::new();
        engine.on_change(
            &mut cells,
            &cfg,
            &change_event(Vec2::new(-50.0, 0.0), Vec2::new(-50.0, 0.0)),
            &mut signals,
        );
        engine.on_end(&mut cells, &cfg, 0.0, &PanEvent::default(), &mut signals);
        assert!(signals.is_empty());
        assert_eq!(cells.translate_x.get(), 0.0);
    }
}
