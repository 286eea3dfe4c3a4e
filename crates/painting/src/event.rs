//! Pointer events for host loops
//!
//! Whatever loop owns the tick (a windowing event loop, a replay script, a
//! test) drives the painter by translating its input into these events and
//! feeding them to [`crate::RegionPainter::handle_event`].

use serde::{Deserialize, Serialize};

/// A discrete pointer event with a screen-space position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer pressed: a stroke may start here
    Down { x: f32, y: f32 },
    /// Pointer held or moved while pressed: a paint tick
    Move { x: f32, y: f32 },
    /// Pointer released: the stroke ends
    Up,
}
