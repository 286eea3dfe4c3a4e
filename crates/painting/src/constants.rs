/// Channel intensity above which a mask pixel counts as paintable.
/// Normalized 0.0-1.0 scale; all of R, G, B must exceed it.
pub const PAINTABLE_THRESHOLD: f32 = 0.9;

/// Default brush color (opaque red).
pub const DEFAULT_BRUSH_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Default brush half-width in pixels.
pub const DEFAULT_BRUSH_SIZE: i32 = 5;
