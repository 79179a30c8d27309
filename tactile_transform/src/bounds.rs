// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Maximum absolute translation per axis for `content` scaled by `scale`
/// inside `container`.
///
/// Per axis this is `max(0, content · scale − container) / 2`: once the
/// scaled content is larger than the container, its center may travel half
/// the difference in either direction before an edge would cross into the
/// container. When the scaled content still fits, the bound is zero and the
/// content stays centered.
///
/// The returned components are always `>= 0`, and each is monotone
/// non-decreasing in `scale`. Callers are expected to pass a scale already
/// clamped into their configured range; this function is called on every
/// gesture frame and does not cache anything.
#[must_use]
pub fn translation_bounds(content: Size, container: Size, scale: f64) -> Vec2 {
    let x = ((content.width * scale - container.width) / 2.0).max(0.0);
    let y = ((content.height * scale - container.height) / 2.0).max(0.0);
    Vec2::new(x, y)
}

/// Clamps a proposed translation into `±bounds`, independently per axis.
#[must_use]
pub fn clamp_translation(translation: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(
        translation.x.clamp(-bounds.x, bounds.x),
        translation.y.clamp(-bounds.y, bounds.y),
    )
}
