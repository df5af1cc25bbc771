//! Per-character locomotion state and the pure per-frame steps

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use stride_core::{smooth_damp_angle, wrap_degrees, yaw_forward};

use super::LocomotionConfig;
use crate::input::FrameInput;

/// Input vectors shorter than this count as no input
const INPUT_EPSILON: f32 = 1e-5;

/// Mutable locomotion state owned by one character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionState {
    /// Vertical velocity in meters per second, positive is up
    pub vertical_velocity: f32,
    /// Spring velocity of the turn smoothing
    pub turn_smooth_velocity: f32,
    /// Last desired yaw in degrees; kept while there is no input
    pub target_facing_angle: f32,
    /// Whether ground was detected under the character on the last check
    pub grounded: bool,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            vertical_velocity: 0.0,
            turn_smooth_velocity: 0.0,
            target_facing_angle: 0.0,
            grounded: true,
        }
    }
}

/// What the move step wants done this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePlan {
    /// Speed the character is heading for, published to animation
    pub target_speed: f32,
    /// New facing yaw, when the input was strong enough to turn
    pub facing: Option<f32>,
    /// Displacement to hand to the mover
    pub displacement: Vec3,
}

/// Normalize raw axes; vectors with no length give zero
pub fn input_direction(horizontal: f32, vertical: f32) -> Vec2 {
    let raw = Vec2::new(horizontal, vertical);
    let length = raw.length();
    if length > INPUT_EPSILON {
        raw / length
    } else {
        Vec2::ZERO
    }
}

impl LocomotionState {
    /// Create a state whose remembered heading is `facing_yaw`
    pub fn facing(facing_yaw: f32) -> Self {
        Self {
            target_facing_angle: wrap_degrees(facing_yaw),
            ..Default::default()
        }
    }

    /// Clamp while resting, launch on a jump edge, then integrate gravity.
    ///
    /// Returns true when a jump started this frame.
    pub fn apply_gravity_and_jump(
        &mut self,
        config: &LocomotionConfig,
        jump_pressed: bool,
        delta_time: f32,
    ) -> bool {
        let mut jumped = false;

        if self.grounded {
            if self.vertical_velocity < 0.0 {
                self.vertical_velocity = config.grounded_velocity;
            }

            if jump_pressed {
                self.vertical_velocity = config.jump_velocity();
                jumped = true;
            }
        }

        self.vertical_velocity += config.gravity * delta_time;
        jumped
    }

    /// Work out speed, facing and displacement for this frame
    pub fn plan_move(
        &mut self,
        config: &LocomotionConfig,
        input: &FrameInput,
        camera_yaw: f32,
        current_facing: f32,
        delta_time: f32,
    ) -> MovePlan {
        let direction = input_direction(input.horizontal, input.vertical);

        let target_speed = if direction == Vec2::ZERO {
            0.0
        } else {
            config.target_speed(input.run)
        };

        let mut facing = None;
        if direction.length() >= config.dead_zone && direction != Vec2::ZERO {
            self.target_facing_angle =
                wrap_degrees(direction.x.atan2(direction.y).to_degrees() + camera_yaw);
            let angle = smooth_damp_angle(
                current_facing,
                self.target_facing_angle,
                &mut self.turn_smooth_velocity,
                config.turn_smooth_time,
                f32::INFINITY,
                delta_time,
            );
            facing = Some(wrap_degrees(angle));
        }

        let move_direction = yaw_forward(self.target_facing_angle).normalize_or_zero();
        let displacement = move_direction * (target_speed * delta_time)
            + Vec3::new(0.0, self.vertical_velocity, 0.0) * delta_time;

        MovePlan {
            target_speed,
            facing,
            displacement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LocomotionConfig {
        LocomotionConfig::default()
    }

    #[test]
    fn test_grounded_descent_clamps_before_gravity() {
        let mut state = LocomotionState {
            vertical_velocity: -7.0,
            grounded: true,
            ..Default::default()
        };
        state.apply_gravity_and_jump(&config(), false, 0.02);
        assert!((state.vertical_velocity - (-2.0 - 9.81 * 0.02)).abs() < 1e-5);
    }

    #[test]
    fn test_jump_sets_launch_velocity() {
        let mut state = LocomotionState::default();
        let jumped = state.apply_gravity_and_jump(&config(), true, 0.0);
        assert!(jumped);
        assert!((state.vertical_velocity - 6.264).abs() < 1e-3);
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut state = LocomotionState {
            vertical_velocity: 1.0,
            grounded: false,
            ..Default::default()
        };
        let jumped = state.apply_gravity_and_jump(&config(), true, 0.02);
        assert!(!jumped);
        assert!((state.vertical_velocity - (1.0 - 0.1962)).abs() < 1e-5);
    }

    #[test]
    fn test_airborne_gravity_accumulates() {
        let mut state = LocomotionState {
            grounded: false,
            ..Default::default()
        };
        let mut previous = state.vertical_velocity;
        for _ in 0..10 {
            state.apply_gravity_and_jump(&config(), false, 0.02);
            let delta = state.vertical_velocity - previous;
            assert!((delta + 0.1962).abs() < 1e-4);
            previous = state.vertical_velocity;
        }
    }

    #[test]
    fn test_rising_while_grounded_is_not_clamped() {
        let mut state = LocomotionState {
            vertical_velocity: 3.0,
            grounded: true,
            ..Default::default()
        };
        state.apply_gravity_and_jump(&config(), false, 0.0);
        assert_eq!(state.vertical_velocity, 3.0);
    }

    #[test]
    fn test_diagonal_input_is_normalized() {
        let axial = input_direction(1.0, 0.0);
        let diagonal = input_direction(1.0, 1.0);
        assert!((axial.length() - 1.0).abs() < 1e-6);
        assert!((diagonal.length() - 1.0).abs() < 1e-6);
        assert_eq!(input_direction(0.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_zero_input_keeps_heading_and_stops() {
        let mut state = LocomotionState::facing(135.0);
        let plan = state.plan_move(&config(), &FrameInput::default(), 30.0, 135.0, 0.02);

        assert_eq!(plan.target_speed, 0.0);
        assert_eq!(plan.facing, None);
        assert_eq!(state.target_facing_angle, 135.0);
        assert_eq!(plan.displacement, Vec3::ZERO);
    }

    #[test]
    fn test_diagonal_speed_matches_axial() {
        let mut a = LocomotionState::default();
        let mut b = LocomotionState::default();
        let axial = a.plan_move(&config(), &FrameInput::from_axes(0.0, 1.0), 0.0, 0.0, 0.1);
        let diagonal = b.plan_move(&config(), &FrameInput::from_axes(1.0, 1.0), 0.0, 0.0, 0.1);

        assert_eq!(axial.target_speed, diagonal.target_speed);
        assert!((axial.displacement.length() - diagonal.displacement.length()).abs() < 1e-5);
    }

    #[test]
    fn test_heading_is_relative_to_camera() {
        let mut state = LocomotionState::default();
        let plan = state.plan_move(&config(), &FrameInput::from_axes(1.0, 0.0), 90.0, 0.0, 0.02);

        // Right stick with the camera at 90 degrees heads for 180
        assert!((state.target_facing_angle - 180.0).abs() < 1e-4);
        assert!(plan.facing.is_some());
        assert!(plan.displacement.z < 0.0);
        assert!(plan.displacement.x.abs() < 1e-5);
        assert!((plan.displacement.length() - 2.0 * 0.02).abs() < 1e-5);
    }

    #[test]
    fn test_run_modifier_selects_run_speed() {
        let mut state = LocomotionState::default();
        let input = FrameInput {
            run: true,
            ..FrameInput::from_axes(0.0, 1.0)
        };
        let plan = state.plan_move(&config(), &input, 0.0, 0.0, 0.1);
        assert_eq!(plan.target_speed, 6.0);
        assert!((plan.displacement.z - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_vertical_velocity_is_part_of_displacement() {
        let mut state = LocomotionState {
            vertical_velocity: -2.0,
            ..Default::default()
        };
        let plan = state.plan_move(&config(), &FrameInput::default(), 0.0, 0.0, 0.5);
        assert_eq!(plan.displacement, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_half_turn_takes_shorter_arc() {
        let mut state = LocomotionState::default();
        let input = FrameInput::from_axes(0.0, -1.0);
        let mut facing = 0.0;
        let mut traversed = 0.0;

        for _ in 0..300 {
            let plan = state.plan_move(&config(), &input, 0.0, facing, 0.01);
            let next = plan.facing.unwrap();
            traversed += stride_core::delta_angle(facing, next).abs();
            facing = next;
        }

        assert!(traversed <= 180.0 + 1e-2);
        assert!(stride_core::delta_angle(facing, 180.0).abs() < 0.1);
    }
}
