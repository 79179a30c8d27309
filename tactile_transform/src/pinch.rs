// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Inputs for [`pinch_translation`].
///
/// `origin` is the anchor point expressed relative to the content center.
/// When it is captured in content-local coordinates (the focal point with the
/// current translation removed and divided by `from_scale`), the anchor stays
/// exactly fixed on screen across the scale change. Passing a container-space
/// anchor instead (as the double-tap zoom does) is an acceptable
/// approximation as long as the result gets clamped afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchParams {
    /// Anchor point relative to the content center.
    pub origin: Vec2,
    /// Additional pan accumulated during the gesture (centroid movement).
    pub delta: Vec2,
    /// Scale at which `origin` was captured.
    pub from_scale: f64,
    /// Scale being applied now.
    pub to_scale: f64,
    /// Translation at the time `origin` was captured.
    pub offset: Vec2,
}

/// Translation that keeps `origin` visually stationary while scale moves
/// from `from_scale` to `to_scale`.
///
/// The scale change pushes the anchor away from the content center by
/// `origin · (to − from)`; translating by the opposite amount (plus any
/// accumulated pan `delta`) cancels that movement.
#[must_use]
pub fn pinch_translation(params: &PinchParams) -> Vec2 {
    let PinchParams {
        origin,
        delta,
        from_scale,
        to_scale,
        offset,
    } = *params;
    offset + origin * (from_scale - to_scale) + delta
}
