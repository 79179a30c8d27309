// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Gesture: pan and pinch state machines over animated transform
//! cells.
//!
//! This crate turns already-decoded gesture events (delivered by a platform
//! recognition layer) into mutations of a shared [`ZoomCells`] block:
//!
//! - [`PanEngine`]: consumes pan start/change/end events, applies the
//!   configured [`PanMode`] overscroll policy (free, hard clamp, or friction
//!   resistance), detects edge swipes, and starts the inertial or timed
//!   settle animations on release.
//! - [`PinchEngine`]: consumes pinch start/update/end events, scales around
//!   the gesture's focal point, optionally pans with the pinch centroid, and
//!   bounces an overshot scale back into range per the [`ScaleMode`].
//!
//! Engines never invoke user callbacks. They append [`GestureSignal`]s to a
//! caller-provided buffer and record which settle animations owe a
//! gesture-end notification; the owning controller converts both into
//! queued events. This keeps each engine a deterministic, synchronously
//! testable state machine.
//!
//! Both engines assume a single cooperative owner: each event handler runs
//! to completion before the next event arrives, and starting an animation on
//! a cell implicitly cancels the previous one.
//!
//! This crate is `no_std`.

#![no_std]

mod cells;
mod events;
mod modes;
mod pan;
mod pinch;
mod signal;

pub use cells::ZoomCells;
pub use events::{PanEvent, PinchEvent, TapEvent};
pub use modes::{PanMode, ScaleMode};
pub use pan::{
    PanConfig, PanEngine, SWIPE_DISTANCE_THRESHOLD, SWIPE_MAX_DURATION_MS,
    SWIPE_VELOCITY_THRESHOLD,
};
pub use pinch::{PinchConfig, PinchEngine};
pub use signal::{GestureSignal, Signals};
