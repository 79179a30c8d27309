// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// One step of a crop plan, in final pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropAction {
    /// Scale the image to the given size.
    Resize {
        /// Target width in pixels.
        width: u32,
        /// Target height in pixels.
        height: u32,
    },
    /// Mirror the image around its vertical axis.
    FlipHorizontal,
    /// Mirror the image around its horizontal axis.
    FlipVertical,
    /// Rotate the image clockwise.
    Rotate {
        /// Clockwise angle, a multiple of 90 below 360.
        degrees: u16,
    },
    /// Extract a rectangle from the image produced by the preceding steps.
    Crop {
        /// Left edge of the rectangle.
        x: u32,
        /// Top edge of the rectangle.
        y: u32,
        /// Rectangle width.
        width: u32,
        /// Rectangle height.
        height: u32,
    },
}

/// Action list of a plan. At most five entries, so it lives in-line.
pub type CropActions = SmallVec<[CropAction; 5]>;

/// Orientation state the plan was computed under.
///
/// Reported even for steps the action list omits: a plan with no rotate
/// action still carries `rotation_degrees: 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CropContext {
    /// Whether the horizontal flip toggle was set.
    pub flip_horizontal: bool,
    /// Whether the vertical flip toggle was set.
    pub flip_vertical: bool,
    /// Clockwise rotation in degrees (0, 90, 180, or 270).
    pub rotation_degrees: u16,
}

/// A complete crop plan: the ordered actions plus their orientation context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropPlan {
    /// Steps to apply, in order. The last entry is always
    /// [`CropAction::Crop`].
    pub actions: CropActions,
    /// Orientation state at planning time.
    pub context: CropContext,
}
