// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// A decoded pan gesture event.
///
/// Produced by the platform gesture recognition layer; all coordinates are
/// in the gesture surface's pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanEvent {
    /// Total translation since the gesture started.
    pub translation: Vec2,
    /// Translation change since the previous event of this gesture.
    pub change: Vec2,
    /// Pointer velocity in px/s.
    pub velocity: Vec2,
    /// Absolute pointer position.
    pub absolute: Point,
    /// Number of pointers currently down.
    pub pointer_count: u32,
}

/// A decoded pinch gesture event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchEvent {
    /// Scale factor relative to the gesture start (`1.0` at start).
    pub scale: f64,
    /// Focal point (pointer centroid) on the gesture surface.
    pub focal: Point,
    /// Number of pointers currently down.
    pub pointer_count: u32,
}

/// A decoded tap event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    /// Tap position on the gesture surface.
    pub position: Point,
    /// Number of consecutive taps (`2` for a double tap).
    pub tap_count: u32,
}
