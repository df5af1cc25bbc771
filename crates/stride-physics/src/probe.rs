//! Sphere overlap probe for the grounded check

use glam::Vec3;
use rapier3d::prelude::ColliderHandle;
use stride_core::{GroundProbe, LayerMask};

use crate::{PhysicsWorld, SharedPhysicsWorld};

/// Ground probe backed by a shared physics world
#[derive(Clone)]
pub struct PhysicsGroundProbe {
    world: SharedPhysicsWorld,
    /// Collider ignored by the probe (usually the character's own capsule)
    exclude: Option<ColliderHandle>,
}

impl PhysicsGroundProbe {
    /// Create a probe over `world`
    pub fn new(world: SharedPhysicsWorld) -> Self {
        Self {
            world,
            exclude: None,
        }
    }

    /// Ignore a collider when probing
    pub fn excluding(mut self, handle: Option<ColliderHandle>) -> Self {
        self.exclude = handle;
        self
    }
}

impl GroundProbe for PhysicsGroundProbe {
    fn check_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        self.world
            .borrow()
            .overlaps_sphere(center, radius, mask, self.exclude)
    }
}

impl GroundProbe for PhysicsWorld {
    fn check_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        self.overlaps_sphere(center, radius, mask, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CharacterControllerConfig, PhysicsCharacter, CHARACTER_LAYER, GROUND_LAYER};

    #[test]
    fn test_probe_ignores_own_capsule() {
        let world = PhysicsWorld::new().into_shared();
        let character = PhysicsCharacter::spawn(
            world.clone(),
            CharacterControllerConfig::default(),
            Vec3::new(0.0, 5.0, 0.0),
        );

        let everything = GROUND_LAYER.with(CHARACTER_LAYER);
        let feet = Vec3::new(0.0, 5.0, 0.0);

        let blind = PhysicsGroundProbe::new(world.clone());
        assert!(blind.check_sphere(feet, 0.3, everything));

        let probe = PhysicsGroundProbe::new(world).excluding(character.collider_handle());
        assert!(!probe.check_sphere(feet, 0.3, everything));
    }

    #[test]
    fn test_probe_sees_ground() {
        let mut world = PhysicsWorld::new();
        world.create_ground(0.0, GROUND_LAYER);
        assert!(GroundProbe::check_sphere(&world, Vec3::ZERO, 0.3, GROUND_LAYER));

        let probe = PhysicsGroundProbe::new(world.into_shared());
        assert!(probe.check_sphere(Vec3::new(0.0, 0.2, 0.0), 0.3, GROUND_LAYER));
        assert!(!probe.check_sphere(Vec3::new(0.0, 1.0, 0.0), 0.3, GROUND_LAYER));
    }
}
