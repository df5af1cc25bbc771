//! Camera yaw providers
//!
//! Camera control lives in the host. These providers only report the yaw the
//! controller moves relative to.

use std::cell::Cell;
use std::rc::Rc;

use stride_core::{wrap_degrees, CameraYaw};

/// A camera that never turns
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedCameraYaw(pub f32);

impl CameraYaw for FixedCameraYaw {
    fn yaw_degrees(&self) -> f32 {
        self.0
    }
}

/// Camera yaw shared between the host and a controller.
///
/// The host keeps one handle and turns the camera; the controller reads
/// through its own clone.
#[derive(Debug, Clone, Default)]
pub struct SharedCameraYaw {
    yaw: Rc<Cell<f32>>,
}

impl SharedCameraYaw {
    pub fn new(yaw_degrees: f32) -> Self {
        Self {
            yaw: Rc::new(Cell::new(wrap_degrees(yaw_degrees))),
        }
    }

    /// Point the camera at a yaw (degrees)
    pub fn set(&self, yaw_degrees: f32) {
        self.yaw.set(wrap_degrees(yaw_degrees));
    }

    /// Turn the camera by a yaw offset (degrees)
    pub fn rotate(&self, delta_degrees: f32) {
        self.set(self.yaw.get() + delta_degrees);
    }
}

impl CameraYaw for SharedCameraYaw {
    fn yaw_degrees(&self) -> f32 {
        self.yaw.get()
    }
}
