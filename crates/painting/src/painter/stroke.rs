//! Stroke handling for the region painter

use glam::Vec2;
use tracing::debug;

use crate::event::PointerEvent;
use crate::region::ActiveRegion;

use super::RegionPainter;

impl RegionPainter {
    /// Begin a stroke at a screen-space pointer position.
    ///
    /// Maps the point to a buffer pixel and samples the mask there. If the
    /// pixel is paintable, flood fill computes the Active Region and the
    /// painter enters the Painting state; otherwise the event is silently
    /// ignored and the painter stays Idle. The region is fixed for the whole
    /// stroke: later ticks never extend it.
    pub fn begin_stroke(&mut self, screen: Vec2) {
        let pixel = self
            .view
            .screen_to_pixel(screen, self.canvas.width, self.canvas.height);

        if !self.mask.is_paintable(pixel) {
            debug!(
                "begin_stroke: ({}, {}) not paintable, ignoring",
                pixel.x, pixel.y
            );
            return;
        }

        let region = ActiveRegion::flood_fill(&self.mask, pixel);
        debug!(
            "begin_stroke: ({}, {}) -> region of {} pixels",
            pixel.x,
            pixel.y,
            region.len()
        );
        self.active_region = Some(region);
    }

    /// Continue the stroke with a new pointer position.
    ///
    /// Stamps the brush's square footprint around the mapped pixel, writing
    /// only pixels that are inside the buffer AND members of the Active
    /// Region. Pixels outside the region are skipped even when they fall
    /// under the brush; that is the mask-clipping contract.
    pub fn stroke_to(&mut self, screen: Vec2) {
        let Some(region) = &self.active_region else {
            debug!("stroke_to: no active stroke, ignoring");
            return;
        };

        let center = self
            .view
            .screen_to_pixel(screen, self.canvas.width, self.canvas.height);

        let mut painted = 0usize;
        for offset in self.brush.offsets() {
            let p = center + offset;
            if p.x < 0
                || p.y < 0
                || p.x >= self.canvas.width as i32
                || p.y >= self.canvas.height as i32
            {
                continue;
            }
            if !region.contains(p) {
                continue;
            }
            self.canvas
                .set_pixel(p.x as u32, p.y as u32, self.brush.color);
            painted += 1;
        }

        debug!(
            "stroke_to: center=({}, {}), {} pixels painted",
            center.x, center.y, painted
        );
    }

    /// End the current stroke, discarding its region. No buffer mutation.
    pub fn end_stroke(&mut self) {
        self.active_region = None;
    }

    /// Cancel the current stroke. Pixels already painted are kept; only the
    /// session state is cleared, same as a normal pointer-up.
    pub fn cancel_stroke(&mut self) {
        self.active_region = None;
    }

    /// Check if a stroke is currently in progress
    pub fn is_painting(&self) -> bool {
        self.active_region.is_some()
    }

    /// Dispatch a host pointer event to the stroke state machine
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.begin_stroke(Vec2::new(x, y)),
            PointerEvent::Move { x, y } => self.stroke_to(Vec2::new(x, y)),
            PointerEvent::Up => self.end_stroke(),
        }
    }
}
