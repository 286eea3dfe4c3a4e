//! Giornata painting system - mask-bounded region painting
//!
//! This crate provides the core types for the region painter:
//! - [`mask::MaskGrid`] - Binary paintability map thresholded from a reference image
//! - [`region::ActiveRegion`] - Flood-filled connected region scoping one stroke
//! - [`canvas::Canvas`] - Mutable RGBA8 paint buffer with dirty-rect tracking
//! - [`brush::Brush`] - Square-footprint brush parameters
//! - [`viewport::ViewRect`] - Screen-space to pixel-space coordinate mapping
//! - [`painter::RegionPainter`] - Complete stroke-session state machine
//! - [`io`] - Loading canvas and mask images from disk

pub mod brush;
pub mod canvas;
pub mod constants;
pub mod error;
pub mod event;
pub mod io;
pub mod mask;
pub mod painter;
pub mod region;
pub mod viewport;

pub use brush::*;
pub use canvas::*;
pub use constants::*;
pub use error::*;
pub use event::*;
pub use mask::*;
pub use painter::*;
pub use region::*;
pub use viewport::*;
