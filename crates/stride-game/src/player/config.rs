//! Locomotion configuration and constants

use serde::{Deserialize, Serialize};
use stride_core::LayerMask;

use crate::error::ConfigError;

/// Longest accepted turn smoothing time in seconds
pub const MAX_TURN_SMOOTH_TIME: f32 = 0.3;

/// Tolerance when matching the grounded radius to the collider radius
pub const RADIUS_TOLERANCE: f32 = 1e-4;

/// Locomotion configuration, fixed for the lifetime of a controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Walking speed in meters per second
    pub move_speed: f32,
    /// Speed while the run modifier is held
    pub run_speed: f32,
    /// How long the character takes to face its movement direction (0.0 - 0.3)
    pub turn_smooth_time: f32,
    /// Own gravity value, negative is down
    pub gravity: f32,
    /// Apex height of a jump in meters
    pub jump_height: f32,
    /// Radius of the grounded probe; must match the character collider radius
    pub grounded_radius: f32,
    /// Layers counted as ground
    pub ground_layers: LayerMask,
    /// Damping time for the speed animation parameter
    pub speed_damp_time: f32,
    /// Input magnitude below which the character does not turn
    pub dead_zone: f32,
    /// Vertical velocity held while resting on the ground
    pub grounded_velocity: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            run_speed: 6.0,
            turn_smooth_time: 0.2,
            gravity: -9.81,
            jump_height: 2.0,
            grounded_radius: 0.3,
            ground_layers: LayerMask::layer(0),
            speed_damp_time: 0.15,
            dead_zone: 0.1,
            grounded_velocity: -2.0,
        }
    }
}

impl LocomotionConfig {
    /// Get the target speed for the run modifier state
    pub fn target_speed(&self, running: bool) -> f32 {
        if running {
            self.run_speed
        } else {
            self.move_speed
        }
    }

    /// Launch velocity needed to reach `jump_height`: sqrt(h * -2 * g)
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    /// Check every field, returning the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("run_speed", self.run_speed),
            ("turn_smooth_time", self.turn_smooth_time),
            ("gravity", self.gravity),
            ("jump_height", self.jump_height),
            ("grounded_radius", self.grounded_radius),
            ("speed_damp_time", self.speed_damp_time),
            ("dead_zone", self.dead_zone),
            ("grounded_velocity", self.grounded_velocity),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }

        if self.move_speed < 0.0 || self.run_speed < 0.0 {
            let field = if self.move_speed < 0.0 {
                "move_speed"
            } else {
                "run_speed"
            };
            return Err(ConfigError::invalid(field, "must not be negative"));
        }
        if !(0.0..=MAX_TURN_SMOOTH_TIME).contains(&self.turn_smooth_time) {
            return Err(ConfigError::invalid(
                "turn_smooth_time",
                format!("must be within 0.0..={MAX_TURN_SMOOTH_TIME}"),
            ));
        }
        if self.gravity >= 0.0 {
            return Err(ConfigError::invalid("gravity", "must point down (negative)"));
        }
        if self.jump_height < 0.0 {
            return Err(ConfigError::invalid("jump_height", "must not be negative"));
        }
        if self.grounded_radius <= 0.0 {
            return Err(ConfigError::invalid("grounded_radius", "must be positive"));
        }
        if self.speed_damp_time < 0.0 {
            return Err(ConfigError::invalid("speed_damp_time", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.dead_zone) {
            return Err(ConfigError::invalid("dead_zone", "must be within 0.0..=1.0"));
        }
        if self.grounded_velocity > 0.0 {
            return Err(ConfigError::invalid(
                "grounded_velocity",
                "must not be positive",
            ));
        }

        Ok(())
    }

    /// Require the grounded probe to match the character collider
    pub fn check_collider_radius(&self, collider_radius: f32) -> Result<(), ConfigError> {
        if (self.grounded_radius - collider_radius).abs() > RADIUS_TOLERANCE {
            return Err(ConfigError::RadiusMismatch {
                grounded_radius: self.grounded_radius,
                collider_radius,
            });
        }
        Ok(())
    }
}
