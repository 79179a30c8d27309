// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::easing::Easing;
use crate::math;

/// Default duration of timed animations, in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 300.0;

/// Default inertial deceleration rate, per millisecond.
///
/// Each millisecond the decay velocity is multiplied by this factor.
pub const DECELERATION_RATE: f64 = 0.9955;

/// Velocity magnitude (px/s) below which a decay is considered settled.
const REST_VELOCITY: f64 = 1.0;

/// Result of advancing a [`Cell`] by one [`Cell::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// No animation is active.
    Idle,
    /// An animation advanced and is still running.
    Moving,
    /// An animation reached its end on this tick.
    Done,
}

#[derive(Clone, Debug)]
enum Animation {
    Timed {
        from: f64,
        to: f64,
        start_ms: f64,
        duration_ms: f64,
        easing: Easing,
    },
    Decay {
        /// Current velocity in px/s.
        velocity: f64,
        clamp: Option<(f64, f64)>,
        /// Natural log of the per-millisecond deceleration rate.
        ln_rate: f64,
        last_ms: f64,
    },
}

/// A single-owner animated scalar.
///
/// A cell holds a value plus at most one in-flight animation. Any write
/// ([`set`](Self::set), [`add`](Self::add)) or newly started animation
/// implicitly cancels the previous animation — there is no queueing. The
/// owner drives animations by calling [`tick`](Self::tick) with its clock;
/// the cell never reads time on its own.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    value: f64,
    animation: Option<Animation>,
}

impl Cell {
    /// Creates a cell holding `value`, with no animation.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            animation: None,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Sets the value directly, cancelling any in-flight animation.
    pub fn set(&mut self, value: f64) {
        self.animation = None;
        self.value = value;
    }

    /// Adds to the value directly, cancelling any in-flight animation.
    pub fn add(&mut self, delta: f64) {
        self.animation = None;
        self.value += delta;
    }

    /// Cancels any in-flight animation, keeping the current value.
    pub fn cancel(&mut self) {
        self.animation = None;
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Starts a timed animation to `to` with the default duration and easing.
    ///
    /// Replaces any in-flight animation on this cell.
    pub fn animate_to(&mut self, now_ms: f64, to: f64) {
        self.animate_to_with(now_ms, to, DEFAULT_DURATION_MS, Easing::default());
    }

    /// Starts a timed animation to `to` with an explicit duration and easing.
    ///
    /// Replaces any in-flight animation on this cell. A non-positive
    /// duration completes on the next tick.
    pub fn animate_to_with(&mut self, now_ms: f64, to: f64, duration_ms: f64, easing: Easing) {
        self.animation = Some(Animation::Timed {
            from: self.value,
            to,
            start_ms: now_ms,
            duration_ms,
            easing,
        });
    }

    /// Starts an inertial decay from the current value.
    ///
    /// `velocity` is in px/s and decays by `deceleration` each millisecond.
    /// The value is clamped into `clamp` when provided; reaching a clamp
    /// edge, or the velocity dying below the rest threshold, completes the
    /// decay. Replaces any in-flight animation on this cell.
    pub fn decay(&mut self, now_ms: f64, velocity: f64, clamp: Option<(f64, f64)>, deceleration: f64) {
        // Rates at or above 1 would never terminate.
        let rate = deceleration.clamp(1e-6, 1.0 - 1e-9);
        self.animation = Some(Animation::Decay {
            velocity,
            clamp,
            ln_rate: math::ln(rate),
            last_ms: now_ms,
        });
    }

    /// Advances the in-flight animation, if any, to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        match self.animation {
            None => Tick::Idle,
            Some(Animation::Timed {
                from,
                to,
                start_ms,
                duration_ms,
                easing,
            }) => {
                let t = if duration_ms <= 0.0 {
                    1.0
                } else {
                    ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0)
                };
                self.value = from + (to - from) * easing.eval(t);
                if t >= 1.0 {
                    self.animation = None;
                    Tick::Done
                } else {
                    Tick::Moving
                }
            }
            Some(Animation::Decay {
                velocity,
                clamp,
                ln_rate,
                last_ms,
            }) => {
                let dt = now_ms - last_ms;
                if dt <= 0.0 {
                    return Tick::Moving;
                }
                // Closed-form integration of v(t) = v0 · rate^t over dt
                // milliseconds, with v in px/s.
                let factor = math::exp(ln_rate * dt);
                self.value += velocity / 1_000.0 * (factor - 1.0) / ln_rate;
                let velocity = velocity * factor;

                if let Some((lo, hi)) = clamp {
                    if self.value <= lo {
                        self.value = lo;
                        self.animation = None;
                        return Tick::Done;
                    }
                    if self.value >= hi {
                        self.value = hi;
                        self.animation = None;
                        return Tick::Done;
                    }
                }
                if velocity.abs() < REST_VELOCITY {
                    self.animation = None;
                    return Tick::Done;
                }
                self.animation = Some(Animation::Decay {
                    velocity,
                    clamp,
                    ln_rate,
                    last_ms: now_ms,
                });
                Tick::Moving
            }
        }
    }
}
