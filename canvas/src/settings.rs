//! Settings-panel projection of the box engine.
//!
//! DESIGN
//! ======
//! The panel binds sliders, number inputs, reset buttons and checkboxes to a
//! single flat view. `project` derives that view from the engine and stroke
//! history; `ProjectionCache` keeps the previous view when a new one is
//! structurally equal, so hosts can skip re-rendering on no-op updates.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::Serialize;

use crate::bbox::{Axis, BoundingBoxDimensions, BoundingBoxVisibility, CanvasDimensions};
use crate::consts::{GRANULARITY, MIN_EXTENT};
use crate::engine::BoxEngine;
use crate::history::StrokeHistory;

/// Declared range of a slider/number-input pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl ControlBounds {
    /// Bounds for `axis` of a box on `canvas`.
    #[must_use]
    pub fn for_axis(canvas: CanvasDimensions, axis: Axis) -> Self {
        Self {
            min: MIN_EXTENT,
            max: canvas.max_extent(axis),
            step: GRANULARITY,
        }
    }
}

/// Flat view the bounding-box settings panel renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxSettingsView {
    pub canvas: CanvasDimensions,
    pub dimensions: BoundingBoxDimensions,
    pub visibility: BoundingBoxVisibility,
    pub locked: bool,
    pub width_bounds: ControlBounds,
    pub height_bounds: ControlBounds,
    /// Every control except the show switch is inert while the box is hidden.
    pub controls_disabled: bool,
    pub reset_width_disabled: bool,
    pub reset_height_disabled: bool,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

/// Derive the panel view from engine state and the (read-only) stroke history.
#[must_use]
pub fn project<S>(engine: &BoxEngine, history: StrokeHistory<'_, S>) -> BoxSettingsView {
    let canvas = engine.canvas();
    let visibility = engine.visibility();
    let hidden = !visibility.should_show;
    BoxSettingsView {
        canvas,
        dimensions: engine.dimensions(),
        visibility,
        locked: engine.is_locked(),
        width_bounds: ControlBounds::for_axis(canvas, Axis::Width),
        height_bounds: ControlBounds::for_axis(canvas, Axis::Height),
        controls_disabled: hidden,
        reset_width_disabled: hidden || engine.is_at_canvas_extent(Axis::Width),
        reset_height_disabled: hidden || engine.is_at_canvas_extent(Axis::Height),
        undo_depth: history.past().len(),
        redo_depth: history.future().len(),
    }
}

/// Single-slot cache that keeps the previous value while new values compare equal.
#[derive(Debug, Clone)]
pub struct ProjectionCache<T> {
    current: Option<T>,
}

impl<T> Default for ProjectionCache<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: PartialEq> ProjectionCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a freshly computed value. Returns `true` when it differs from the
    /// cached one and replaced it.
    pub fn refresh(&mut self, next: T) -> bool {
        if self.current.as_ref() == Some(&next) {
            return false;
        }
        self.current = Some(next);
        true
    }

    /// The cached value, if any has been offered.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }
}
