//! Shared numeric constants for the canvas crate.

// ── Bounding box ────────────────────────────────────────────────

/// Snapping step for bounding-box dimensions, in canvas pixels.
///
/// The generation backend tiles its latent space in 64px blocks, so every
/// inpainting box edge must land on a multiple of this value.
pub const GRANULARITY: u32 = 64;

/// Smallest extent a box axis may take. One granule.
pub const MIN_EXTENT: u32 = GRANULARITY;

// ── Defaults ────────────────────────────────────────────────────

/// Whether the inpainting box is drawn when a session starts.
pub const DEFAULT_SHOW_BOX: bool = true;

/// Whether the area outside the box is darkened when a session starts.
pub const DEFAULT_SHOW_FILL: bool = false;
