// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Overscroll distance, as a multiple of the content's largest dimension, at
/// which friction reaches full resistance.
const OVERSCROLL_SPAN: f64 = 1.5;

/// Damping factor applied to pan deltas while an axis is out of bounds.
///
/// `fraction` is the normalized overscroll depth from
/// [`overscroll_fraction`]. The curve is monotone decreasing on `[0, 1]`,
/// starts below `1` and ends at `0`, so a damped delta can shrink
/// displacement but never grow it and never reverse its sign.
#[must_use]
pub fn friction(fraction: f64) -> f64 {
    let inv = 1.0 - fraction.clamp(0.0, 1.0);
    0.8 * inv * inv
}

/// Normalized overscroll depth for a proposed translation.
///
/// `proposed` is the raw translation the gesture asks for, `bound` the
/// maximum in-bounds magnitude on that axis, and `largest_dim` the content's
/// largest dimension. The depth is the distance past the bound divided by
/// `1.5 · largest_dim`, clamped into `[0, 1]`.
#[must_use]
pub fn overscroll_fraction(proposed: f64, bound: f64, largest_dim: f64) -> f64 {
    let span = OVERSCROLL_SPAN * largest_dim;
    if span <= 0.0 {
        return 1.0;
    }
    ((proposed.abs() - bound).abs() / span).clamp(0.0, 1.0)
}
