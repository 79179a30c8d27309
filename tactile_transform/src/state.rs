// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Immutable snapshot of the current transform.
///
/// This is the public value handed to API consumers and event listeners; the
/// mutable cells behind it are owned by the controller and never exposed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformState {
    /// Horizontal translation in container pixels.
    pub translate_x: f64,
    /// Vertical translation in container pixels.
    pub translate_y: f64,
    /// Uniform scale factor applied to the content.
    pub scale: f64,
}

impl TransformState {
    /// Creates a snapshot from its components.
    #[must_use]
    pub fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale,
        }
    }
}

/// Maximum scale policy: a fixed factor, or one derived from the content's
/// pixel resolution.
///
/// [`MaxScale::FromResolution`] answers "how far can this content be zoomed
/// before it is displayed past its native resolution": the scale at which
/// the laid-out content size reaches the resolution, floored at `1.0`. It is
/// resolved on demand with [`MaxScale::resolve`] rather than cached, so a
/// content size change is picked up automatically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaxScale {
    /// A fixed maximum scale factor.
    Fixed(f64),
    /// Derive the maximum scale from the content's native pixel resolution.
    FromResolution(Size),
}

impl MaxScale {
    /// Resolves the policy against the current laid-out content size.
    ///
    /// For [`MaxScale::FromResolution`], a degenerate (non-positive) content
    /// size resolves to `1.0`.
    #[must_use]
    pub fn resolve(&self, content: Size) -> f64 {
        match *self {
            Self::Fixed(value) => value,
            Self::FromResolution(resolution) => {
                if content.width <= 0.0 || content.height <= 0.0 {
                    return 1.0;
                }
                let sx = resolution.width / content.width;
                let sy = resolution.height / content.height;
                sx.min(sy).max(1.0)
            }
        }
    }
}
