//! Environment contracts supplied by the host
//!
//! The locomotion controller never reaches for globals. Camera orientation,
//! ground queries, collision-aware movement and animation parameters all come
//! through these traits, handed over when the controller is created.

use glam::Vec3;

use crate::types::LayerMask;

/// Provides the yaw of the active viewpoint
pub trait CameraYaw {
    /// Current world yaw of the camera in degrees
    fn yaw_degrees(&self) -> f32;
}

impl<F> CameraYaw for F
where
    F: Fn() -> f32,
{
    fn yaw_degrees(&self) -> f32 {
        self()
    }
}

/// Spatial overlap query used for the grounded check
pub trait GroundProbe {
    /// Whether any collider in `mask` lies within `radius` of `center`
    fn check_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool;
}

/// Collision-aware mover owning the character's transform
pub trait CharacterMover {
    /// Current world position of the character origin
    fn position(&self) -> Vec3;

    /// Current facing yaw in degrees, in [0, 360)
    fn facing_yaw(&self) -> f32;

    /// Replace the facing yaw (degrees)
    fn set_facing_yaw(&mut self, yaw_degrees: f32);

    /// Resolve `displacement` against world geometry and apply it.
    ///
    /// Returns the motion actually achieved.
    fn move_by(&mut self, displacement: Vec3, delta_time: f32) -> Vec3;

    /// Radius of the character collider, if the mover has one
    fn collider_radius(&self) -> Option<f32> {
        None
    }
}

/// Receives animation parameters
pub trait AnimationSink {
    /// Set a float parameter, damped towards `value` over `damp_time`
    fn set_float(&mut self, name: &str, value: f32, damp_time: f32, delta_time: f32);

    /// Fire a one-shot trigger
    fn set_trigger(&mut self, name: &str);
}

impl<T: GroundProbe + ?Sized> GroundProbe for &T {
    fn check_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        (**self).check_sphere(center, radius, mask)
    }
}

impl<T: CharacterMover + ?Sized> CharacterMover for &mut T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn facing_yaw(&self) -> f32 {
        (**self).facing_yaw()
    }

    fn set_facing_yaw(&mut self, yaw_degrees: f32) {
        (**self).set_facing_yaw(yaw_degrees)
    }

    fn move_by(&mut self, displacement: Vec3, delta_time: f32) -> Vec3 {
        (**self).move_by(displacement, delta_time)
    }

    fn collider_radius(&self) -> Option<f32> {
        (**self).collider_radius()
    }
}

impl<T: AnimationSink + ?Sized> AnimationSink for &mut T {
    fn set_float(&mut self, name: &str, value: f32, damp_time: f32, delta_time: f32) {
        (**self).set_float(name, value, damp_time, delta_time)
    }

    fn set_trigger(&mut self, name: &str) {
        (**self).set_trigger(name)
    }
}
