//! Axis-driven object rotation
//!
//! Per-tick controller: the host polls its two input axes and feeds the
//! values in; the controller accumulates orientation at a fixed number of
//! degrees per tick per unit of axis input.

use glam::{EulerRot, Quat};

/// Rotation controller for the 3D preview object
#[derive(Debug, Clone, Copy)]
pub struct RotationController {
    /// Degrees applied per tick per unit of axis input
    pub sensitivity: f32,
    rotation: Quat,
}

impl Default for RotationController {
    fn default() -> Self {
        Self {
            sensitivity: 5.0,
            rotation: Quat::IDENTITY,
        }
    }
}

impl RotationController {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            rotation: Quat::IDENTITY,
        }
    }

    /// Apply one tick of axis input.
    ///
    /// Vertical input pitches around X, horizontal input yaws around Y,
    /// both in the object's local space. Zero input leaves the orientation
    /// untouched.
    pub fn apply_axes(&mut self, horizontal: f32, vertical: f32) {
        if horizontal == 0.0 && vertical == 0.0 {
            return;
        }
        let delta = Quat::from_euler(
            EulerRot::XYZ,
            (self.sensitivity * vertical).to_radians(),
            (self.sensitivity * horizontal).to_radians(),
            0.0,
        );
        self.rotation = self.rotation * delta;
    }

    /// Current accumulated orientation
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Reset to the identity orientation
    pub fn reset(&mut self) {
        self.rotation = Quat::IDENTITY;
    }
}
