// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Easing curve for timed animations.
///
/// Curves map a normalized progress `t ∈ [0, 1]` to an eased progress in the
/// same range, with `eval(0) = 0` and `eval(1) = 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Quadratic ease-in-out: gentle start and stop.
    ///
    /// This is the default used by gesture settle animations.
    #[default]
    InOutQuad,
    /// Cubic ease-out: fast start, long tail.
    OutCubic,
}

impl Easing {
    /// Evaluates the curve at progress `t`, clamped into `[0, 1]`.
    #[must_use]
    pub fn eval(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::InOutQuad, Easing::OutCubic] {
            assert_eq!(easing.eval(0.0), 0.0);
            assert_eq!(easing.eval(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::InOutQuad.eval(-3.0), 0.0);
        assert_eq!(Easing::InOutQuad.eval(7.5), 1.0);
    }

    #[test]
    fn curves_are_monotone() {
        for easing in [Easing::Linear, Easing::InOutQuad, Easing::OutCubic] {
            let mut prev = 0.0;
            let mut i = 0;
            while i <= 100 {
                let v = easing.eval(f64::from(i) / 100.0);
                assert!(v >= prev);
                prev = v;
                i += 1;
            }
        }
    }

    #[test]
    fn in_out_quad_is_symmetric() {
        let e = Easing::InOutQuad;
        assert!((e.eval(0.25) + e.eval(0.75) - 1.0).abs() < 1e-12);
        assert_eq!(e.eval(0.5), 0.5);
    }
}
