//! Core types used throughout Stride

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Forward direction for a yaw in degrees.
///
/// Yaw 0 faces +Z and yaw 90 faces +X, so `atan2(x, z)` of a planar
/// direction gives back the yaw that faces it.
pub fn yaw_forward(yaw_degrees: f32) -> Vec3 {
    Quat::from_rotation_y(yaw_degrees.to_radians()) * Vec3::Z
}

/// Bit mask selecting collision layers (32 layers, one bit each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing a single layer.
    ///
    /// `index` must be below 32. Debug builds panic otherwise; release builds
    /// wrap it modulo 32.
    pub const fn layer(index: u32) -> Self {
        debug_assert!(index < 32, "layer index out of range");
        Self(1 << (index & 31))
    }

    /// Combine two masks
    pub const fn with(self, other: LayerMask) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if any layer is shared between the two masks
    pub const fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Get the raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_forward_axes() {
        let north = yaw_forward(0.0);
        assert!((north - Vec3::Z).length() < 1e-5);

        let east = yaw_forward(90.0);
        assert!((east - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_layer_mask() {
        let ground = LayerMask::layer(3);
        let water = LayerMask::layer(4);
        assert_eq!(ground.bits(), 0b1000);
        assert!(ground.with(water).intersects(water));
        assert!(!ground.intersects(water));
        assert!(LayerMask::ALL.intersects(ground));
        assert!(!LayerMask::NONE.intersects(ground));
    }

    #[test]
    fn test_highest_layer() {
        assert_eq!(LayerMask::layer(31).bits(), 1 << 31);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "layer index out of range")]
    fn test_layer_out_of_range_panics() {
        let _ = LayerMask::layer(33);
    }
}
