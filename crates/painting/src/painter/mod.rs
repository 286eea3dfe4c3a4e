//! Complete region painter
//!
//! This module ties the pieces together:
//! - Pointer input arrives via `begin_stroke`, `stroke_to`, `end_stroke`
//!   (or [`crate::PointerEvent`] dispatch)
//! - The view rect maps screen points to buffer pixels
//! - Flood fill over the mask scopes each stroke to one connected region
//! - Brush stamps mutate the canvas, clipped to that region
//! - The canvas is encoded to PNG and written back over the source file
//!
//! Single-threaded by construction: everything is owned by one painter and
//! driven from the host's tick/event loop.

mod persist;
mod stroke;

use std::path::{Path, PathBuf};

use crate::brush::Brush;
use crate::canvas::{Canvas, DirtyRect};
use crate::error::PaintError;
use crate::mask::MaskGrid;
use crate::region::ActiveRegion;
use crate::viewport::ViewRect;

/// Stroke-session state machine over a mask-bounded canvas
///
/// Idle when `active_region` is None, Painting while it holds the
/// flood-fill result of the current stroke.
pub struct RegionPainter {
    /// The paint buffer
    pub(crate) canvas: Canvas,
    /// Read-only paintability mask, same dimensions as the canvas
    pub(crate) mask: MaskGrid,
    /// Brush parameters (square footprint)
    pub(crate) brush: Brush,
    /// On-screen rect the canvas is rendered into
    pub(crate) view: ViewRect,
    /// Region of the in-progress stroke (None = idle)
    pub(crate) active_region: Option<ActiveRegion>,
    /// Where `save` writes the encoded canvas (the original image file)
    pub(crate) source_path: PathBuf,
}

impl RegionPainter {
    /// Create a painter over an existing canvas and mask.
    ///
    /// Fails if the mask and canvas dimensions differ: region membership
    /// and pixel writes must agree on one coordinate space.
    pub fn new(
        canvas: Canvas,
        mask: MaskGrid,
        view: ViewRect,
        brush: Brush,
        source_path: impl Into<PathBuf>,
    ) -> Result<Self, PaintError> {
        if mask.width() != canvas.width || mask.height() != canvas.height {
            return Err(PaintError::DimensionMismatch {
                mask_width: mask.width(),
                mask_height: mask.height(),
                canvas_width: canvas.width,
                canvas_height: canvas.height,
            });
        }
        Ok(Self {
            canvas,
            mask,
            brush,
            view,
            active_region: None,
            source_path: source_path.into(),
        })
    }

    /// Get the canvas width
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Get the canvas height
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Get the paint buffer
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Get the current brush
    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// Set the brush. Takes effect on the next stroke tick.
    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    /// Get the view rect
    pub fn view(&self) -> ViewRect {
        self.view
    }

    /// Update the view rect (e.g. after the display surface was resized)
    pub fn set_view(&mut self, view: ViewRect) {
        self.view = view;
    }

    /// Path the canvas is saved to
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Take the modified-pixel bounding box for display refresh
    pub fn take_dirty_rect(&mut self) -> Option<DirtyRect> {
        self.canvas.take_dirty_rect()
    }

    /// Check if any pixel changed since the last `take_dirty_rect`
    pub fn has_dirty_rect(&self) -> bool {
        self.canvas.has_dirty_rect()
    }
}
