//! Mutable RGBA8 paint buffer with dirty-rect tracking

use image::RgbaImage;
use tracing::debug;

/// Bounding rectangle of pixels modified since the last
/// [`Canvas::take_dirty_rect`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DirtyRect {
    fn single(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            width: 1,
            height: 1,
        }
    }

    /// Smallest rectangle covering both `self` and the pixel at (x, y)
    fn including(self, x: u32, y: u32) -> Self {
        let x_min = self.x.min(x);
        let y_min = self.y.min(y);
        let x_max = (self.x + self.width).max(x + 1);
        let y_max = (self.y + self.height).max(y + 1);
        Self {
            x: x_min,
            y: y_min,
            width: x_max - x_min,
            height: y_max - y_min,
        }
    }
}

/// An RGBA8 CPU buffer the painter draws into
///
/// Pixels are stored in row-major order as `[r, g, b, a]`. The buffer is
/// owned exclusively by one painter and mutated only through bounds-checked
/// accessors; out-of-bounds writes are silent no-ops.
pub struct Canvas {
    /// Buffer dimensions
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 4]>,
    /// Bounding box of writes since the last take, for display refresh
    dirty: Option<DirtyRect>,
}

impl Canvas {
    /// Create a new canvas initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; pixel_count],
            dirty: None,
        }
    }

    /// Create a canvas holding a copy of an RGBA image's pixels
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.pixels().map(|p| p.0).collect(),
            dirty: None,
        }
    }

    /// Copy the buffer back out as an RGBA image (for encoding)
    pub fn to_image(&self) -> RgbaImage {
        let raw: Vec<u8> = self.pixels.iter().flatten().copied().collect();
        RgbaImage::from_raw(self.width, self.height, raw)
            .expect("pixel buffer length matches dimensions")
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
        self.mark_dirty(x, y);
    }

    /// Fill the whole buffer with a solid color
    pub fn clear(&mut self, color: [u8; 4]) {
        self.pixels.fill(color);
        self.dirty = Some(DirtyRect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        });
    }

    /// Extend the dirty rect to cover (x, y)
    #[inline]
    fn mark_dirty(&mut self, x: u32, y: u32) {
        self.dirty = Some(match self.dirty {
            Some(rect) => rect.including(x, y),
            None => DirtyRect::single(x, y),
        });
    }

    /// Get the dirty rect and clear it
    pub fn take_dirty_rect(&mut self) -> Option<DirtyRect> {
        let rect = self.dirty.take();
        if let Some(r) = rect {
            debug!(
                "take_dirty_rect: ({}, {}) {}x{}",
                r.x, r.y, r.width, r.height
            );
        }
        rect
    }

    /// Check if any pixel was written since the last take
    #[inline]
    pub fn has_dirty_rect(&self) -> bool {
        self.dirty.is_some()
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(100, 50);
        assert_eq!(canvas.width, 100);
        assert_eq!(canvas.height, 50);
        assert_eq!(canvas.pixel_count(), 5000);
        assert!(!canvas.has_dirty_rect());
    }

    #[test]
    fn test_get_set_pixel() {
        let mut canvas = Canvas::new(10, 10);
        let color = [255, 128, 64, 255];

        canvas.set_pixel(5, 5, color);
        assert_eq!(canvas.get_pixel(5, 5), Some(color));

        // Out of bounds should return None
        assert_eq!(canvas.get_pixel(100, 100), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_pixel(10, 0, [1, 2, 3, 4]);
        canvas.set_pixel(0, 10, [1, 2, 3, 4]);
        assert!(!canvas.has_dirty_rect());
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(10, 10);
        let white = [255, 255, 255, 255];

        canvas.clear(white);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(canvas.get_pixel(x, y), Some(white));
            }
        }
        assert_eq!(
            canvas.take_dirty_rect(),
            Some(DirtyRect {
                x: 0,
                y: 0,
                width: 10,
                height: 10
            })
        );
    }

    #[test]
    fn test_dirty_rect_union() {
        let mut canvas = Canvas::new(20, 20);
        canvas.set_pixel(3, 4, [1, 1, 1, 1]);
        canvas.set_pixel(10, 2, [1, 1, 1, 1]);

        let rect = canvas.take_dirty_rect().unwrap();
        assert_eq!(rect.x, 3);
        assert_eq!(rect.y, 2);
        assert_eq!(rect.width, 8);
        assert_eq!(rect.height, 3);

        // Taking resets tracking
        assert!(canvas.take_dirty_rect().is_none());
    }

    #[test]
    fn test_image_round_trip() {
        let mut canvas = Canvas::new(4, 3);
        canvas.set_pixel(1, 2, [9, 8, 7, 6]);

        let image = canvas.to_image();
        assert_eq!(image.dimensions(), (4, 3));

        let copy = Canvas::from_image(&image);
        assert_eq!(copy.get_pixel(1, 2), Some([9, 8, 7, 6]));
        assert_eq!(copy.get_pixel(0, 0), Some([0, 0, 0, 0]));
    }
}
