// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};
use tactile_motion::Cell;
use tactile_transform::{TransformState, translation_bounds};

/// The shared mutable transform state block.
///
/// One instance is owned by the controller and passed by mutable reference
/// into the engines, enforcing the single-writer discipline: every mutation
/// happens inside a gesture or animation callback on the owner's context.
///
/// The detector cells mirror the visible transform for the (possibly larger,
/// invisible) hit-test surface; they follow the same trajectories as the
/// visible cells but carry no completion obligations.
#[derive(Clone, Debug)]
pub struct ZoomCells {
    /// Horizontal translation of the content.
    pub translate_x: Cell,
    /// Vertical translation of the content.
    pub translate_y: Cell,
    /// Horizontal translation of the hit-test surface.
    pub detector_x: Cell,
    /// Vertical translation of the hit-test surface.
    pub detector_y: Cell,
    /// Uniform content scale.
    pub scale: Cell,
    /// Scale of the hit-test surface.
    pub detector_scale: Cell,
    /// Container (viewport) size, updated on layout.
    pub container: Size,
    /// Content size at scale 1, updated on layout.
    pub content: Size,
}

impl ZoomCells {
    /// Creates cells at the identity transform for `min_scale`.
    ///
    /// Sizes start at zero and are expected to be set from the embedder's
    /// layout pass before gestures arrive.
    #[must_use]
    pub fn new(min_scale: f64) -> Self {
        Self {
            translate_x: Cell::new(0.0),
            translate_y: Cell::new(0.0),
            detector_x: Cell::new(0.0),
            detector_y: Cell::new(0.0),
            scale: Cell::new(min_scale),
            detector_scale: Cell::new(min_scale),
            container: Size::ZERO,
            content: Size::ZERO,
        }
    }

    /// Current translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x.get(), self.translate_y.get())
    }

    /// Translation bounds at `scale` for the current sizes.
    #[must_use]
    pub fn bounds_at(&self, scale: f64) -> Vec2 {
        translation_bounds(self.content, self.container, scale)
    }

    /// Immutable snapshot of the visible transform.
    #[must_use]
    pub fn state(&self) -> TransformState {
        TransformState::new(
            self.translate_x.get(),
            self.translate_y.get(),
            self.scale.get(),
        )
    }

    /// Cancels in-flight animations on the translation cells (visible and
    /// detector), keeping their current values.
    pub fn cancel_translation(&mut self) {
        self.translate_x.cancel();
        self.translate_y.cancel();
        self.detector_x.cancel();
        self.detector_y.cancel();
    }

    /// Cancels in-flight animations on every cell.
    pub fn cancel_all(&mut self) {
        self.cancel_translation();
        self.scale.cancel();
        self.detector_scale.cancel();
    }

    /// Writes `translation` to the visible and detector cells, cancelling
    /// any animations on them.
    pub fn set_translation(&mut self, translation: Vec2) {
        self.translate_x.set(translation.x);
        self.translate_y.set(translation.y);
        self.detector_x.set(translation.x);
        self.detector_y.set(translation.y);
    }
}
