//! Inpainting bounding-box engine for the image-generation workspace.
//!
//! The inpainting canvas lets the user restrict generation to a sub-rectangle
//! of the image. This crate owns that rectangle: it clamps and snaps every
//! requested size against the backing canvas, tracks the overlay toggles and
//! aspect lock, and projects the state into what the settings panel binds to.
//! The canvas extent and the stroke history belong to the drawing subsystem
//! and are only read here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::BoxEngine`], the sole writer of box dimensions |
//! | [`bbox`] | Dimension types and the clamp/snap math |
//! | [`history`] | Read-only view of past/future mask strokes |
//! | [`settings`] | Settings-panel projection and its equality cache |
//! | [`consts`] | Shared numeric constants (granularity, defaults) |

pub mod bbox;
pub mod consts;
pub mod engine;
pub mod history;
pub mod settings;
