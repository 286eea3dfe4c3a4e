//! Brush parameters for region painting
//!
//! The brush stamps a solid square, not an anti-aliased disc: offsets in
//! `[-size, size)` on both axes. The square footprint is deliberate and must
//! not be "fixed" into a circle.

use glam::IVec2;

use crate::constants::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_SIZE};

/// Brush parameters, immutable while a stroke is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// RGBA color written to every stamped pixel
    pub color: [u8; 4],
    /// Half-width of the square footprint in pixels
    pub size: i32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: DEFAULT_BRUSH_COLOR,
            size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl Brush {
    /// Create a new brush. Size is clamped to at least 1 so the footprint
    /// is never empty.
    pub fn new(color: [u8; 4], size: i32) -> Self {
        Self {
            color,
            size: size.max(1),
        }
    }

    /// Iterate over the footprint offsets around a stamp center.
    ///
    /// Yields every `(i, j)` with `i, j` in `[-size, size)`.
    pub fn offsets(&self) -> impl Iterator<Item = IVec2> {
        let size = self.size;
        (-size..size).flat_map(move |j| (-size..size).map(move |i| IVec2::new(i, j)))
    }
}
