//! Stride Physics - Collision environment using rapier3d
//!
//! Provides layer-tagged static geometry, sphere overlap queries for the
//! grounded check, and a kinematic capsule that resolves requested
//! displacements against world geometry.

mod character_controller;
mod probe;

pub use character_controller::{CharacterController, CharacterControllerConfig, PhysicsCharacter};
pub use probe::PhysicsGroundProbe;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use nalgebra::Unit;
use rapier3d::parry::shape::Ball;
use rapier3d::prelude::*;
use stride_core::LayerMask;

/// Layer used for walkable geometry by default
pub const GROUND_LAYER: LayerMask = LayerMask::layer(0);
/// Layer the character capsule lives on
pub const CHARACTER_LAYER: LayerMask = LayerMask::layer(1);

/// Physics world shared between the ground probe and the character mover
pub type SharedPhysicsWorld = Rc<RefCell<PhysicsWorld>>;

/// Convert a layer mask to rapier collision groups
pub fn layer_group(mask: LayerMask) -> Group {
    Group::from_bits_truncate(mask.bits())
}

/// Collision world holding static geometry and the character capsule.
///
/// Nothing here is simulated: colliders only move when the character
/// controller moves them, so there is no physics step.
pub struct PhysicsWorld {
    /// Rigid body storage (empty, required by rapier queries)
    pub rigid_body_set: RigidBodySet,
    /// Collider storage
    pub collider_set: ColliderSet,
    /// Island bookkeeping, required for collider removal
    island_manager: IslandManager,
    /// Query pipeline for overlap and shape casts
    pub(crate) query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create an empty collision world
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            island_manager: IslandManager::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Wrap the world for sharing between a probe and a mover
    pub fn into_shared(self) -> SharedPhysicsWorld {
        Rc::new(RefCell::new(self))
    }

    /// Refresh the query pipeline after colliders were added or moved
    pub fn update_query_pipeline(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Add a static collider (ground, walls, etc.)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        let handle = self.collider_set.insert(collider);
        self.update_query_pipeline();
        handle
    }

    /// Remove a collider
    pub fn remove_collider(&mut self, handle: ColliderHandle) {
        self.collider_set
            .remove(handle, &mut self.island_manager, &mut self.rigid_body_set, true);
        self.update_query_pipeline();
    }

    /// Get a collider by handle
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Check whether any collider on `mask` overlaps a sphere
    pub fn overlaps_sphere(
        &self,
        center: Vec3,
        radius: f32,
        mask: LayerMask,
        exclude: Option<ColliderHandle>,
    ) -> bool {
        let groups = InteractionGroups::new(Group::ALL, layer_group(mask));
        let mut filter = QueryFilter::default().groups(groups);
        if let Some(handle) = exclude {
            filter = filter.exclude_collider(handle);
        }

        let ball = Ball::new(radius);
        let shape_pos = Isometry::translation(center.x, center.y, center.z);

        self.query_pipeline
            .intersection_with_shape(
                &self.rigid_body_set,
                &self.collider_set,
                &shape_pos,
                &ball,
                filter,
            )
            .is_some()
    }

    /// Create a ground plane collider on a layer
    pub fn create_ground(&mut self, y: f32, layer: LayerMask) -> ColliderHandle {
        let normal = Unit::new_normalize(vector![0.0, 1.0, 0.0]);
        let ground = ColliderBuilder::halfspace(normal)
            .translation(vector![0.0, y, 0.0])
            .collision_groups(InteractionGroups::new(layer_group(layer), Group::ALL))
            .friction(0.7)
            .restitution(0.0)
            .build();
        self.add_static_collider(ground)
    }

    /// Create a static box collider on a layer
    pub fn create_static_box(
        &mut self,
        half_extents: Vec3,
        position: Vec3,
        layer: LayerMask,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .collision_groups(InteractionGroups::new(layer_group(layer), Group::ALL))
            .friction(0.7)
            .build();
        self.add_static_collider(collider)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
