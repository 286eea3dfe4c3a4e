//! Binary paintability mask thresholded from a reference image

use glam::IVec2;
use image::RgbaImage;

use crate::constants::PAINTABLE_THRESHOLD;

/// Immutable grid of paintable flags, one per mask pixel.
///
/// A pixel is paintable iff each of its R, G and B channels exceeds
/// [`PAINTABLE_THRESHOLD`] on the normalized 0.0-1.0 scale. Alpha is
/// ignored. The grid is built once at startup and never mutated.
pub struct MaskGrid {
    width: u32,
    height: u32,
    /// Paintable flags in row-major order
    cells: Vec<bool>,
}

impl MaskGrid {
    /// Build a mask grid by thresholding an RGBA image.
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let cells = image
            .pixels()
            .map(|p| is_white(p.0))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a mask grid from a predicate over pixel coordinates.
    pub fn from_fn(width: u32, height: u32, mut paintable: impl FnMut(u32, u32) -> bool) -> Self {
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                cells.push(paintable(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Grid width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether a coordinate lies within the grid.
    #[inline]
    pub fn in_bounds(&self, p: IVec2) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Check whether the pixel at `p` is paintable.
    /// Returns false for out-of-bounds coordinates.
    #[inline]
    pub fn is_paintable(&self, p: IVec2) -> bool {
        if !self.in_bounds(p) {
            return false;
        }
        let index = (p.y as usize) * (self.width as usize) + (p.x as usize);
        self.cells[index]
    }
}

/// The paintability predicate: all of R, G, B above the threshold.
#[inline]
fn is_white(rgba: [u8; 4]) -> bool {
    let [r, g, b, _] = rgba;
    (r as f32 / 255.0) > PAINTABLE_THRESHOLD
        && (g as f32 / 255.0) > PAINTABLE_THRESHOLD
        && (b as f32 / 255.0) > PAINTABLE_THRESHOLD
}
