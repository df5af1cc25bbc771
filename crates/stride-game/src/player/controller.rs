//! Third-person locomotion controller
//!
//! Every frame runs three steps in order: gravity and jump, the grounded
//! check, then the move. The grounded flag read by the first step is the one
//! recorded on the previous frame.

use glam::Vec3;
use stride_core::{AnimationSink, CameraYaw, CharacterMover, GroundProbe};
use tracing::{debug, info, trace};

use super::{LocomotionConfig, LocomotionState};
use crate::animation::{JUMP_TRIGGER, SPEED_PARAMETER};
use crate::error::LocomotionError;
use crate::input::FrameInput;

/// Collaborators handed to a controller when it starts
pub struct LocomotionDeps<C, G, M, A> {
    /// Yaw of the active viewpoint
    pub camera: C,
    /// Sphere overlap query for the grounded check
    pub probe: G,
    /// Collision-aware mover owning the character transform
    pub mover: M,
    /// Animation parameter sink
    pub animator: A,
}

/// Summary of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Speed published to animation this frame
    pub target_speed: f32,
    /// Displacement requested from the mover
    pub displacement: Vec3,
    /// Whether a jump started this frame
    pub jumped: bool,
    /// Grounded flag after this frame's check
    pub grounded: bool,
    /// Whether the frame carried no time and only the grounded check ran
    pub frozen: bool,
}

/// Player controller driving a character from per-frame input
pub struct LocomotionController<C, G, M, A> {
    config: LocomotionConfig,
    state: LocomotionState,
    camera: C,
    probe: G,
    mover: M,
    animator: A,
}

impl<C, G, M, A> LocomotionController<C, G, M, A>
where
    C: CameraYaw,
    G: GroundProbe,
    M: CharacterMover,
    A: AnimationSink,
{
    /// Validate the configuration and bind the collaborators
    pub fn init(
        config: LocomotionConfig,
        deps: LocomotionDeps<C, G, M, A>,
    ) -> Result<Self, LocomotionError> {
        config.validate()?;

        if let Some(radius) = deps.mover.collider_radius() {
            config.check_collider_radius(radius)?;
        }

        let camera_yaw = deps.camera.yaw_degrees();
        if !camera_yaw.is_finite() {
            return Err(LocomotionError::CameraUnavailable(camera_yaw));
        }

        let state = LocomotionState::facing(deps.mover.facing_yaw());
        info!(
            move_speed = config.move_speed,
            run_speed = config.run_speed,
            position = ?deps.mover.position(),
            "Locomotion controller started"
        );

        Ok(Self {
            config,
            state,
            camera: deps.camera,
            probe: deps.probe,
            mover: deps.mover,
            animator: deps.animator,
        })
    }

    /// Advance one frame
    pub fn tick(&mut self, delta_time: f32, input: &FrameInput) -> FrameReport {
        if delta_time.is_nan() || delta_time <= 0.0 {
            self.grounded_check();
            trace!(grounded = self.state.grounded, "Frozen frame");
            return FrameReport {
                target_speed: 0.0,
                displacement: Vec3::ZERO,
                jumped: false,
                grounded: self.state.grounded,
                frozen: true,
            };
        }

        let jumped = self.gravity_and_jump(input.jump_pressed, delta_time);
        self.grounded_check();
        let (target_speed, displacement) = self.move_character(input, delta_time);

        trace!(
            vertical_velocity = self.state.vertical_velocity,
            target_speed,
            grounded = self.state.grounded,
            "Locomotion tick"
        );

        FrameReport {
            target_speed,
            displacement,
            jumped,
            grounded: self.state.grounded,
            frozen: false,
        }
    }

    fn gravity_and_jump(&mut self, jump_pressed: bool, delta_time: f32) -> bool {
        let jumped = self
            .state
            .apply_gravity_and_jump(&self.config, jump_pressed, delta_time);
        if jumped {
            debug!(velocity = self.state.vertical_velocity, "Jump");
            self.animator.set_trigger(JUMP_TRIGGER);
        }
        jumped
    }

    fn grounded_check(&mut self) {
        let grounded = self.probe.check_sphere(
            self.mover.position(),
            self.config.grounded_radius,
            self.config.ground_layers,
        );
        if grounded != self.state.grounded {
            debug!(grounded, "Ground contact changed");
        }
        self.state.grounded = grounded;
    }

    fn move_character(&mut self, input: &FrameInput, delta_time: f32) -> (f32, Vec3) {
        let plan = self.state.plan_move(
            &self.config,
            input,
            self.camera.yaw_degrees(),
            self.mover.facing_yaw(),
            delta_time,
        );

        if let Some(facing) = plan.facing {
            self.mover.set_facing_yaw(facing);
        }

        // The mover's resolved motion is not fed back into the state
        let _ = self.mover.move_by(plan.displacement, delta_time);

        self.animator.set_float(
            SPEED_PARAMETER,
            plan.target_speed,
            self.config.speed_damp_time,
            delta_time,
        );

        (plan.target_speed, plan.displacement)
    }

    /// Get the configuration
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Get the current locomotion state
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Check if ground was found on the last check
    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    /// Get the character's current position
    pub fn position(&self) -> Vec3 {
        self.mover.position()
    }

    /// Get the character's facing yaw in degrees
    pub fn facing_yaw(&self) -> f32 {
        self.mover.facing_yaw()
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Release the collaborators
    pub fn into_deps(self) -> LocomotionDeps<C, G, M, A> {
        LocomotionDeps {
            camera: self.camera,
            probe: self.probe,
            mover: self.mover,
            animator: self.animator,
        }
    }
}
