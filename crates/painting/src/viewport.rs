//! Screen-space to pixel-space coordinate mapping

use glam::{IVec2, Vec2};

/// The on-screen rectangle the canvas is rendered into
///
/// Owned by the display surface; the painter only reads its geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    /// Screen-space location of the rect's pivot point
    pub position: Vec2,
    /// Rect size in screen units
    pub size: Vec2,
    /// Normalized pivot, (0.5, 0.5) = centered
    pub pivot: Vec2,
}

impl ViewRect {
    pub fn new(position: Vec2, size: Vec2, pivot: Vec2) -> Self {
        Self {
            position,
            size,
            pivot,
        }
    }

    /// A rect whose screen coordinates coincide with the pixel coordinates
    /// of a `width` x `height` buffer. Handy for hosts that feed pointer
    /// positions already in buffer space.
    pub fn covering(width: u32, height: u32) -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::new(width as f32, height as f32),
            pivot: Vec2::ZERO,
        }
    }

    /// Map a screen-space point to an integer pixel coordinate of a
    /// `buffer_width` x `buffer_height` buffer.
    ///
    /// The point is taken relative to the pivot, normalized by the rect
    /// size, offset by the pivot into a [0,1] fraction, then scaled to the
    /// buffer and rounded. Points outside the rect extrapolate to
    /// coordinates outside the buffer; callers must bounds-check.
    pub fn screen_to_pixel(&self, screen: Vec2, buffer_width: u32, buffer_height: u32) -> IVec2 {
        let local = screen - self.position;
        let fraction = local / self.size + self.pivot;
        IVec2::new(
            (fraction.x * buffer_width as f32).round() as i32,
            (fraction.y * buffer_height as f32).round() as i32,
        )
    }
}
