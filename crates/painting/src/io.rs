//! Loading the canvas and mask images from disk
//!
//! The painter works on in-memory buffers; these helpers decode the two
//! source files at startup. Any decode or read failure is fatal and
//! propagates to the caller.

use std::path::Path;

use tracing::info;

use crate::canvas::Canvas;
use crate::error::PaintError;
use crate::mask::MaskGrid;

/// Decode an image file into a paint canvas.
pub fn load_canvas(path: impl AsRef<Path>) -> Result<Canvas, PaintError> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgba8();
    let canvas = Canvas::from_image(&image);
    info!(
        "loaded canvas {}x{} from {}",
        canvas.width,
        canvas.height,
        path.display()
    );
    Ok(canvas)
}

/// Decode an image file and threshold it into a paintability mask.
pub fn load_mask(path: impl AsRef<Path>) -> Result<MaskGrid, PaintError> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgba8();
    let mask = MaskGrid::from_image(&image);
    info!(
        "loaded mask {}x{} from {}",
        mask.width(),
        mask.height(),
        path.display()
    );
    Ok(mask)
}
