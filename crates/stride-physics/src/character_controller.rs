//! Character controller using rapier3d's kinematic character controller

use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;
use stride_core::{wrap_degrees, CharacterMover};
use tracing::{debug, info};

use crate::{layer_group, PhysicsWorld, SharedPhysicsWorld, CHARACTER_LAYER};

/// Character controller configuration
#[derive(Debug, Clone)]
pub struct CharacterControllerConfig {
    /// Capsule height (default: 1.8m)
    pub height: f32,
    /// Capsule radius (default: 0.3m)
    pub radius: f32,
    /// Maximum slope angle in degrees (default: 45)
    pub max_slope_angle: f32,
    /// Step height for climbing stairs (default: 0.25m)
    pub step_height: f32,
    /// Skin width for collision detection (default: 0.02m)
    pub skin_width: f32,
    /// Whether to snap to ground when walking down slopes
    pub snap_to_ground: bool,
    /// Maximum ground snap distance
    pub ground_snap_distance: f32,
}

impl Default for CharacterControllerConfig {
    fn default() -> Self {
        Self {
            height: 1.8,
            radius: 0.3,
            max_slope_angle: 45.0,
            step_height: 0.25,
            skin_width: 0.02,
            snap_to_ground: true,
            ground_snap_distance: 0.2,
        }
    }
}

/// Kinematic capsule that slides along world geometry
pub struct CharacterController {
    /// Configuration
    pub config: CharacterControllerConfig,
    /// Current position of the feet
    pub position: Vec3,
    /// Facing yaw in degrees, [0, 360)
    pub yaw: f32,
    /// Whether the last move ended on the ground
    pub grounded: bool,
    /// The collider handle for this character
    pub collider_handle: Option<ColliderHandle>,
    /// Rapier's kinematic character controller
    controller: KinematicCharacterController,
}

impl CharacterController {
    /// Create a new character controller with default config
    pub fn new() -> Self {
        Self::with_config(CharacterControllerConfig::default())
    }

    /// Create a new character controller with custom config
    pub fn with_config(config: CharacterControllerConfig) -> Self {
        let mut controller = KinematicCharacterController::default();
        controller.max_slope_climb_angle = config.max_slope_angle.to_radians();
        controller.min_slope_slide_angle = config.max_slope_angle.to_radians();
        controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(config.step_height),
            min_width: CharacterLength::Relative(0.5),
            include_dynamic_bodies: true,
        });
        controller.snap_to_ground = if config.snap_to_ground {
            Some(CharacterLength::Absolute(config.ground_snap_distance))
        } else {
            None
        };
        controller.offset = CharacterLength::Absolute(config.skin_width);

        Self {
            config,
            position: Vec3::ZERO,
            yaw: 0.0,
            grounded: false,
            collider_handle: None,
            controller,
        }
    }

    /// Capsule center for a feet position
    fn capsule_center(&self, feet: Vec3) -> Vec3 {
        Vec3::new(feet.x, feet.y + self.config.height / 2.0, feet.z)
    }

    /// Spawn the character capsule in the physics world
    pub fn spawn(&mut self, physics: &mut PhysicsWorld, position: Vec3) -> ColliderHandle {
        self.position = position;

        let half_height = (self.config.height - 2.0 * self.config.radius) / 2.0;
        let center = self.capsule_center(position);
        let collider = ColliderBuilder::capsule_y(half_height.max(0.01), self.config.radius)
            .translation(vector![center.x, center.y, center.z])
            .collision_groups(InteractionGroups::new(layer_group(CHARACTER_LAYER), Group::ALL))
            .friction(0.0) // Smooth sliding against walls
            .restitution(0.0)
            .build();

        let handle = physics.add_static_collider(collider);
        self.collider_handle = Some(handle);
        info!("Spawned character at {:?}", position);
        handle
    }

    /// Move the character with collision detection, returning the achieved motion
    pub fn move_character(
        &mut self,
        physics: &mut PhysicsWorld,
        desired_translation: Vec3,
        dt: f32,
    ) -> Vec3 {
        let Some(collider_handle) = self.collider_handle else {
            return Vec3::ZERO;
        };

        let Some(collider) = physics.collider_set.get(collider_handle) else {
            return Vec3::ZERO;
        };

        let shape = collider.shape();
        let center = self.capsule_center(self.position);
        let current_pos = Isometry::translation(center.x, center.y, center.z);

        let movement = self.controller.move_shape(
            dt,
            &physics.rigid_body_set,
            &physics.collider_set,
            &physics.query_pipeline,
            shape,
            &current_pos,
            vector![desired_translation.x, desired_translation.y, desired_translation.z],
            QueryFilter::default().exclude_collider(collider_handle),
            |_| {},
        );

        if movement.grounded != self.grounded {
            debug!(grounded = movement.grounded, "Character contact changed");
        }
        self.grounded = movement.grounded;

        let achieved = Vec3::new(
            movement.translation.x,
            movement.translation.y,
            movement.translation.z,
        );
        self.position += achieved;
        self.sync_collider(physics);
        achieved
    }

    fn sync_collider(&self, physics: &mut PhysicsWorld) {
        let Some(handle) = self.collider_handle else {
            return;
        };
        let center = self.capsule_center(self.position);
        if let Some(collider) = physics.collider_set.get_mut(handle) {
            collider.set_translation(vector![center.x, center.y, center.z]);
        }
        physics.update_query_pipeline();
    }
}

impl Default for CharacterController {
    fn default() -> Self {
        Self::new()
    }
}

/// A spawned character bound to a shared physics world
pub struct PhysicsCharacter {
    world: SharedPhysicsWorld,
    /// The kinematic capsule
    pub controller: CharacterController,
}

impl PhysicsCharacter {
    /// Spawn a capsule in `world` at `position`
    pub fn spawn(
        world: SharedPhysicsWorld,
        config: CharacterControllerConfig,
        position: Vec3,
    ) -> Self {
        let mut controller = CharacterController::with_config(config);
        controller.spawn(&mut world.borrow_mut(), position);
        Self { world, controller }
    }

    /// The capsule's collider, for excluding it from queries
    pub fn collider_handle(&self) -> Option<ColliderHandle> {
        self.controller.collider_handle
    }
}

impl CharacterMover for PhysicsCharacter {
    fn position(&self) -> Vec3 {
        self.controller.position
    }

    fn facing_yaw(&self) -> f32 {
        self.controller.yaw
    }

    fn set_facing_yaw(&mut self, yaw_degrees: f32) {
        self.controller.yaw = wrap_degrees(yaw_degrees);
    }

    fn move_by(&mut self, displacement: Vec3, delta_time: f32) -> Vec3 {
        self.controller
            .move_character(&mut self.world.borrow_mut(), displacement, delta_time)
    }

    fn collider_radius(&self) -> Option<f32> {
        Some(self.controller.config.radius)
    }
}
