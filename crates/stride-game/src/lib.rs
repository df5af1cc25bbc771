//! Stride Game - Third-person locomotion
//!
//! Provides the locomotion controller, its configuration and state, input
//! snapshots, and simple camera and animation collaborators.

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod player;

pub use animation::{AnimatorParameters, JUMP_TRIGGER, SPEED_PARAMETER};
pub use camera::{FixedCameraYaw, SharedCameraYaw};
pub use error::{ConfigError, LocomotionError};
pub use input::{FrameInput, InputAction, InputState};
pub use player::{
    FrameReport, LocomotionConfig, LocomotionController, LocomotionDeps, LocomotionState,
    MovePlan,
};
