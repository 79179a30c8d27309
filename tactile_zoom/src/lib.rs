// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Zoom: the controller composing the Tactile crates into a complete
//! pan/pinch/double-tap zoom engine.
//!
//! [`ZoomController`] owns the transform state and the gesture engines. An
//! embedder feeds it decoded gesture events and a monotonic clock, and reads
//! back:
//!
//! - the current transform ([`ZoomController::state`]) to render the content
//!   with;
//! - a queue of [`ZoomEvent`]s ([`ZoomController::poll_event`]) carrying the
//!   gesture lifecycle notifications;
//! - crop plans ([`ZoomController::crop`]) describing the framed region for
//!   an external image processor.
//!
//! Animations are driven by calling [`ZoomController::tick`] once per frame
//! with the current time; the controller never blocks and never spawns.
//!
//! Gesture arbitration is fixed: an active pinch suppresses pan and tap
//! events, an active pan suppresses taps, and individual gesture kinds can
//! be disabled wholesale through [`ZoomConfig`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use tactile_zoom::{TransformState, ZoomConfig, ZoomController, ZoomEvent};
//!
//! let mut zoom = ZoomController::new(ZoomConfig::default())?;
//! zoom.set_container_size(Size::new(300.0, 300.0));
//! zoom.set_content_size(Size::new(300.0, 300.0));
//!
//! // An out-of-range external state is clamped, not rejected.
//! zoom.assign_state(0.0, TransformState::new(10_000.0, 0.0, 999.0), false);
//! assert_eq!(zoom.state().scale, 6.0);
//!
//! // The mutation is reported through the event queue.
//! assert!(matches!(zoom.poll_event(), Some(ZoomEvent::GestureActive(_))));
//! # Ok::<(), tactile_zoom::ConfigError>(())
//! ```
//!
//! This crate is `no_std` (it requires `alloc` for the event queue).

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod events;

pub use config::{ConfigError, ZoomConfig};
pub use controller::ZoomController;
pub use events::ZoomEvent;

pub use tactile_crop::{CropAction, CropActions, CropContext, CropPlan};
pub use tactile_gesture::{PanEvent, PanMode, PinchEvent, ScaleMode, TapEvent};
pub use tactile_transform::{MaxScale, TransformState};
