// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use smallvec::SmallVec;
use tactile_transform::{TransformState, translation_bounds};

use crate::action::{CropAction, CropContext, CropPlan};

/// Inputs for [`crop_plan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropInput {
    /// Viewport size; the region it frames becomes the crop.
    pub container: Size,
    /// Content size at scale 1.
    pub content: Size,
    /// Current transform of the content.
    pub state: TransformState,
    /// Horizontal flip toggle.
    pub flip_horizontal: bool,
    /// Vertical flip toggle.
    pub flip_vertical: bool,
    /// Clockwise rotation in 90° steps; taken modulo 4.
    pub rotation_steps: u8,
    /// Optional fixed width for the final crop; the whole plan is scaled so
    /// the crop rectangle comes out this wide. Ignored when non-positive.
    pub target_width: Option<f64>,
}

/// Computes the crop plan for the region currently framed by the viewport.
///
/// The plan starts from the original image and applies, in order: a resize
/// to the rendered size (omitted when it matches the natural size), the flip
/// and rotate steps (omitted when their toggles are unset), and finally the
/// crop. The crop rectangle starts as the viewport's footprint on the
/// rendered content and is remapped through each preceding step, since every
/// step changes the frame the rectangle lives in.
#[must_use]
pub fn crop_plan(input: &CropInput) -> CropPlan {
    let CropInput {
        container,
        content,
        state,
        flip_horizontal,
        flip_vertical,
        rotation_steps,
        target_width,
    } = *input;

    let scale = state.scale;
    let rendered = Size::new(content.width * scale, content.height * scale);
    let bounds = translation_bounds(content, container, scale);

    // Viewport top-left on the rendered content. A centered transform puts
    // it at `bounds`; dragging moves it opposite to the translation. Free
    // panning can push it outside the frame, so it gets clamped back in.
    let mut width = container.width.min(rendered.width).max(0.0);
    let mut height = container.height.min(rendered.height).max(0.0);
    let mut x = (bounds.x - state.translate_x).clamp(0.0, rendered.width - width);
    let mut y = (bounds.y - state.translate_y).clamp(0.0, rendered.height - height);

    let mut frame = rendered;
    if flip_horizontal {
        x = frame.width - width - x;
    }
    if flip_vertical {
        y = frame.height - height - y;
    }

    let steps = rotation_steps % 4;
    for _ in 0..steps {
        // One 90° clockwise turn: the rectangle's left edge comes from its
        // old bottom edge and the frame dimensions swap.
        let turned_x = frame.height - (y + height);
        y = x;
        x = turned_x;
        core::mem::swap(&mut width, &mut height);
        frame = Size::new(frame.height, frame.width);
    }

    let k = match target_width {
        Some(target) if target > 0.0 && width > 0.0 => target / width,
        _ => 1.0,
    };

    let mut actions = SmallVec::new();

    let resize_width = (rendered.width * k).round();
    let resize_height = (rendered.height * k).round();
    if resize_width != content.width.round() || resize_height != content.height.round() {
        actions.push(CropAction::Resize {
            width: to_px(resize_width),
            height: to_px(resize_height),
        });
    }
    if flip_horizontal {
        actions.push(CropAction::FlipHorizontal);
    }
    if flip_vertical {
        actions.push(CropAction::FlipVertical);
    }
    if steps != 0 {
        actions.push(CropAction::Rotate {
            degrees: u16::from(steps) * 90,
        });
    }
    actions.push(CropAction::Crop {
        x: to_px(x * k),
        y: to_px(y * k),
        width: to_px(width * k),
        height: to_px(height * k),
    });

    CropPlan {
        actions,
        context: CropContext {
            flip_horizontal,
            flip_vertical,
            rotation_degrees: u16::from(steps) * 90,
        },
    }
}

/// Convert a pixel measure into an integer coordinate, clamping to the
/// valid range.
#[allow(
    clippy::cast_possible_truncation,
    reason = "the value is clamped to [0, u32::MAX] before casting"
)]
fn to_px(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}
