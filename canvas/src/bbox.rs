//! Bounding-box geometry: dimension types and the clamp/snap math.
//!
//! Everything here is pure. `CanvasDimensions` is the extent of the editable
//! surface, owned by the drawing subsystem and only read here.
//! `BoundingBoxDimensions` is the user-adjustable sub-rectangle whose axes are
//! always whole multiples of [`GRANULARITY`] inside
//! `[GRANULARITY, floor_to_multiple(canvas_axis, GRANULARITY)]`.

#[cfg(test)]
#[path = "bbox_test.rs"]
mod bbox_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SHOW_BOX, DEFAULT_SHOW_FILL, GRANULARITY, MIN_EXTENT};

/// One of the two box axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }
}

/// Extent of the backing canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasDimensions {
    pub width: u32,
    pub height: u32,
}

impl CanvasDimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Raw canvas extent along `axis`.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Largest box extent allowed along `axis`: the canvas extent floored to
    /// the granularity, never below one granule.
    #[must_use]
    pub fn max_extent(&self, axis: Axis) -> u32 {
        floor_to_multiple(self.extent(axis), GRANULARITY).max(MIN_EXTENT)
    }
}

/// Size of the inpainting bounding box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBoxDimensions {
    pub width: u32,
    pub height: u32,
}

impl BoundingBoxDimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A box covering the whole canvas, snapped to the granularity.
    #[must_use]
    pub fn covering(canvas: CanvasDimensions) -> Self {
        Self {
            width: canvas.max_extent(Axis::Width),
            height: canvas.max_extent(Axis::Height),
        }
    }

    #[must_use]
    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Copy of `self` with `axis` replaced by `value`.
    #[must_use]
    pub fn with_extent(self, axis: Axis, value: u32) -> Self {
        match axis {
            Axis::Width => Self { width: value, ..self },
            Axis::Height => Self { height: value, ..self },
        }
    }

    /// Whether both axes satisfy the snapping and range invariant against `canvas`.
    #[must_use]
    pub fn fits(&self, canvas: CanvasDimensions) -> bool {
        [Axis::Width, Axis::Height].into_iter().all(|axis| {
            let v = self.extent(axis);
            v % GRANULARITY == 0 && (MIN_EXTENT..=canvas.max_extent(axis)).contains(&v)
        })
    }
}

/// Display toggles for the box overlay.
///
/// `should_show_fill` only has a visible effect while `should_show` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBoxVisibility {
    pub should_show: bool,
    pub should_show_fill: bool,
}

impl Default for BoundingBoxVisibility {
    fn default() -> Self {
        Self {
            should_show: DEFAULT_SHOW_BOX,
            should_show_fill: DEFAULT_SHOW_FILL,
        }
    }
}

/// Largest multiple of `multiple` that is `<= value`.
///
/// A zero `multiple` leaves `value` unchanged.
#[must_use]
pub fn floor_to_multiple(value: u32, multiple: u32) -> u32 {
    if multiple == 0 {
        return value;
    }
    value - value % multiple
}

/// Truncate a control value toward zero.
///
/// Negative input and NaN become 0, values past `u32::MAX` saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn truncate(value: f64) -> u32 {
    // `as` saturates at both ends and maps NaN to 0.
    value.trunc() as u32
}

/// Clamp a raw control value into `[MIN_EXTENT, max]` and snap it down to the
/// granularity.
///
/// `max` is expected to be granularity-aligned; it is re-floored anyway so a
/// misaligned caller cannot break the invariant.
#[must_use]
pub fn clamp_extent(value: f64, max: u32) -> u32 {
    let max = floor_to_multiple(max, GRANULARITY).max(MIN_EXTENT);
    floor_to_multiple(truncate(value).clamp(MIN_EXTENT, max), GRANULARITY)
}
