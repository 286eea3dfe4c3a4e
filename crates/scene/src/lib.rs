//! Giornata scene helpers
//!
//! Small host-facing state with no engine dependency:
//! - [`view_mode`] - the mutually exclusive 2D/3D view toggle
//! - [`rotate`] - axis-driven object rotation

pub mod rotate;
pub mod view_mode;

pub use rotate::*;
pub use view_mode::*;
