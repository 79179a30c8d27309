// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Policy for pan requests beyond the translation bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanMode {
    /// No clamping; the content may be dragged anywhere.
    Free,
    /// Hard stop at the bounds. This is the only mode in which edge swipes
    /// and horizontal-overflow notifications are produced.
    #[default]
    Clamp,
    /// Out-of-bound movement is damped by the friction curve; within-bound
    /// movement tracks the pointer 1:1.
    Friction,
}

/// Policy for pinch scaling past the configured scale range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Hard stop at the scale limits.
    Clamp,
    /// Bounded elastic overshoot that springs back into range when the
    /// gesture ends.
    #[default]
    Bounce,
}
