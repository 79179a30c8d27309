// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Motion: animated scalar cells and the motion math behind them.
//!
//! This crate provides the moving parts of the Tactile gesture engines:
//!
//! - [`Cell`]: a single-owner animated scalar. Writing to a cell implicitly
//!   cancels whatever animation was running on it — there is no animation
//!   queue — and an explicit [`Cell::tick`] pump advances active animations
//!   against a caller-supplied clock.
//! - Timed animations with a small set of [`Easing`] curves.
//! - Inertial [decay](Cell::decay): exponential deceleration continuing
//!   motion after a release, clamped to a range and terminating when the
//!   velocity dies out or a clamp edge is hit.
//! - The overscroll [`friction`] curve damping displacement once a pan moves
//!   out of bounds.
//!
//! There is no global time and no scheduler thread: every time-sensitive
//! call takes `now_ms` explicitly, which keeps the crate deterministic and
//! trivially testable.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_motion::{Cell, Tick};
//!
//! let mut x = Cell::new(0.0);
//! x.animate_to(1_000.0, 100.0);
//!
//! assert_eq!(x.tick(1_150.0), Tick::Moving);
//! assert!(x.get() > 0.0 && x.get() < 100.0);
//!
//! // Past the default duration the cell settles on the target.
//! assert_eq!(x.tick(1_400.0), Tick::Done);
//! assert_eq!(x.get(), 100.0);
//!
//! // A direct write cancels any in-flight animation.
//! x.animate_to(2_000.0, 0.0);
//! x.set(42.0);
//! assert_eq!(x.tick(2_500.0), Tick::Idle);
//! ```
//!
//! This crate is `no_std` (enable the `libm` feature for builds without
//! `std`).

#![no_std]

// Link `std` so the inherent `f64` transcendental methods exist.
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("tactile_motion requires either the `std` or `libm` feature");

mod cell;
mod easing;
mod friction;
mod math;

pub use cell::{Cell, DECELERATION_RATE, DEFAULT_DURATION_MS, Tick};
pub use easing::Easing;
pub use friction::{friction, overscroll_fraction};
