use serde::{Deserialize, Serialize};

use crate::bbox::{Axis, BoundingBoxDimensions, BoundingBoxVisibility, CanvasDimensions, clamp_extent};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Snapshot of everything the box engine owns, as stored or sent to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxState {
    pub canvas: CanvasDimensions,
    pub dimensions: BoundingBoxDimensions,
    pub visibility: BoundingBoxVisibility,
    pub locked: bool,
}

/// Constraint engine for the inpainting bounding box.
///
/// Sole writer of [`BoundingBoxDimensions`]. Every operation leaves both axes
/// on a granularity multiple inside the canvas-derived bounds, so callers can
/// feed raw slider and number-input values straight in.
#[derive(Debug, Clone)]
pub struct BoxEngine {
    canvas: CanvasDimensions,
    dimensions: BoundingBoxDimensions,
    visibility: BoundingBoxVisibility,
    locked: bool,
}

impl BoxEngine {
    /// Start with a box covering the whole canvas.
    #[must_use]
    pub fn new(canvas: CanvasDimensions) -> Self {
        Self {
            canvas,
            dimensions: BoundingBoxDimensions::covering(canvas),
            visibility: BoundingBoxVisibility::default(),
            locked: false,
        }
    }

    /// Restore from a stored snapshot. Dimensions are re-clamped against the
    /// snapshot's canvas.
    #[must_use]
    pub fn from_state(state: BoxState) -> Self {
        let mut engine = Self {
            canvas: state.canvas,
            dimensions: state.dimensions,
            visibility: state.visibility,
            locked: state.locked,
        };
        engine.reclamp();
        engine
    }

    // --- Resize ---

    /// Set the box width from a raw control value.
    pub fn resize_width(&mut self, value: f64) -> BoundingBoxDimensions {
        self.resize(Axis::Width, value)
    }

    /// Set the box height from a raw control value.
    pub fn resize_height(&mut self, value: f64) -> BoundingBoxDimensions {
        self.resize(Axis::Height, value)
    }

    /// Truncate, clamp and snap `value` onto `axis`. While locked, both axes
    /// take the same value, clamped so it fits either axis.
    pub fn resize(&mut self, axis: Axis, value: f64) -> BoundingBoxDimensions {
        if self.locked {
            let max = self.canvas.max_extent(axis).min(self.canvas.max_extent(axis.other()));
            let side = clamp_extent(value, max);
            self.dimensions = BoundingBoxDimensions::new(side, side);
        } else {
            let extent = clamp_extent(value, self.canvas.max_extent(axis));
            self.dimensions = self.dimensions.with_extent(axis, extent);
        }
        self.dimensions
    }

    // --- Reset ---

    /// Reset the width to the canvas width.
    pub fn reset_width(&mut self) -> BoundingBoxDimensions {
        self.reset(Axis::Width)
    }

    /// Reset the height to the canvas height.
    pub fn reset_height(&mut self) -> BoundingBoxDimensions {
        self.reset(Axis::Height)
    }

    /// Reset `axis` to the canvas extent. Resetting is explicit, so the lock
    /// does not mirror it onto the other axis.
    pub fn reset(&mut self, axis: Axis) -> BoundingBoxDimensions {
        self.dimensions = self.dimensions.with_extent(axis, self.canvas.max_extent(axis));
        self.dimensions
    }

    // --- Toggles ---

    /// Flip the darken-outside-box fill.
    pub fn toggle_fill(&mut self) -> bool {
        self.visibility.should_show_fill = !self.visibility.should_show_fill;
        self.visibility.should_show_fill
    }

    /// Flip the aspect lock.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }

    /// Show or hide the box overlay.
    pub fn set_show(&mut self, show: bool) {
        self.visibility.should_show = show;
    }

    // --- Canvas ---

    /// Adopt a new canvas extent and pull the box back inside it.
    pub fn set_canvas_dimensions(&mut self, canvas: CanvasDimensions) -> BoundingBoxDimensions {
        self.canvas = canvas;
        self.reclamp();
        self.dimensions
    }

    fn reclamp(&mut self) {
        for axis in [Axis::Width, Axis::Height] {
            let extent = clamp_extent(f64::from(self.dimensions.extent(axis)), self.canvas.max_extent(axis));
            self.dimensions = self.dimensions.with_extent(axis, extent);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn dimensions(&self) -> BoundingBoxDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasDimensions {
        self.canvas
    }

    #[must_use]
    pub fn visibility(&self) -> BoundingBoxVisibility {
        self.visibility
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether `axis` already equals its reset value.
    #[must_use]
    pub fn is_at_canvas_extent(&self, axis: Axis) -> bool {
        self.dimensions.extent(axis) == self.canvas.max_extent(axis)
    }

    #[must_use]
    pub fn state(&self) -> BoxState {
        BoxState {
            canvas: self.canvas,
            dimensions: self.dimensions,
            visibility: self.visibility,
            locked: self.locked,
        }
    }
}
