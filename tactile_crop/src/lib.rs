// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Crop: ordered crop-action plans derived from a pan/zoom
//! transform.
//!
//! [`crop_plan`] maps the region currently framed by the viewport, under a
//! given translate/scale transform plus flip and rotation toggles, into an
//! ordered list of [`CropAction`]s for an external image-processing
//! collaborator. The action order is fixed as
//! `[resize?, flip horizontal?, flip vertical?, rotate?, crop]`: each step
//! operates in the coordinate frame produced by the steps before it, and the
//! crop is always present and always last.
//!
//! This crate only plans; it never touches pixels.
//!
//! This crate is `no_std`.

#![no_std]

mod action;
mod plan;

pub use action::{CropAction, CropActions, CropContext, CropPlan};
pub use plan::{CropInput, crop_plan};
