// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Transform: pure math for bounded pan/zoom transforms.
//!
//! This crate provides the small, side-effect-free pieces shared by the
//! Tactile gesture engines:
//! - The translation [bounds function](translation_bounds): how far content
//!   may be panned on each axis at a given scale before an edge would enter
//!   the container.
//! - [Focal-anchored pinch translation](pinch_translation): the translate
//!   correction that keeps the content point under a pinch gesture's focal
//!   point visually fixed while scale changes.
//! - [`TransformState`]: the immutable transform snapshot handed to API
//!   consumers.
//! - [`MaxScale`]: a fixed or content-resolution-derived maximum scale,
//!   resolved on demand.
//!
//! It owns no state: callers (typically `tactile_gesture` engines and the
//! `tactile_zoom` controller) hold the transform cells and call into these
//! functions on every gesture frame, so everything here must stay cheap.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use tactile_transform::{clamp_translation, translation_bounds};
//!
//! // A 300x300 image in a 300x300 container, zoomed to 2x.
//! let bounds = translation_bounds(Size::new(300.0, 300.0), Size::new(300.0, 300.0), 2.0);
//! assert_eq!(bounds, Vec2::new(150.0, 150.0));
//!
//! // A pan request past the edge is pulled back onto it.
//! let settled = clamp_translation(Vec2::new(400.0, -20.0), bounds);
//! assert_eq!(settled, Vec2::new(150.0, -20.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod pinch;
mod state;

pub use bounds::{clamp_translation, translation_bounds};
pub use pinch::{PinchParams, pinch_translation};
pub use state::{MaxScale, TransformState};
