// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Synchronous outcome of feeding one gesture event to an engine.
///
/// Signals describe what happened during the event, in order. The owning
/// controller translates them into queued user-facing events; engines never
/// call user code directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSignal {
    /// A pan gesture began.
    PanStart,
    /// A pan gesture ended (not emitted when the gesture resolved as a
    /// swipe).
    PanEnd,
    /// A pinch gesture began.
    PinchStart,
    /// A pinch gesture ended.
    PinchEnd,
    /// A leftward edge swipe was recognized.
    SwipeLeft,
    /// A rightward edge swipe was recognized.
    SwipeRight,
    /// A clamped pan tried to cross the horizontal bound; the payload is the
    /// overflow amount, signed toward the restoring direction.
    HorizontalBoundsExceeded(f64),
}

/// Signal buffer filled by one engine call.
///
/// A single event produces at most a few signals, so the buffer lives
/// in-line.
pub type Signals = SmallVec<[GestureSignal; 4]>;
