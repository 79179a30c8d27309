// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tactile_gesture::TapEvent;
use tactile_transform::TransformState;

/// User-facing notification produced by the controller.
///
/// Events are queued in the order they occur and drained by the embedder at
/// its own pace; the controller never calls back into user code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomEvent {
    /// A pan gesture began.
    PanStart,
    /// A pan gesture ended. Not delivered when the gesture resolved as a
    /// swipe.
    PanEnd,
    /// A pinch gesture began.
    PinchStart,
    /// A pinch gesture ended.
    PinchEnd,
    /// A leftward edge swipe was recognized.
    SwipeLeft,
    /// A rightward edge swipe was recognized.
    SwipeRight,
    /// A gesture's settle animation finished (or no settle was needed).
    GestureEnd,
    /// The transform changed; carries the new snapshot. Delivered once per
    /// mutating gesture event and once per animation frame.
    GestureActive(TransformState),
    /// A clamped pan tried to cross the horizontal bound; the payload is the
    /// overflow amount, signed toward the restoring direction.
    HorizontalBoundsExceeded(f64),
    /// A single tap was recognized.
    Tap(TapEvent),
}
