//! Player locomotion module
//!
//! Provides camera-relative third-person movement with simplified gravity
//! and jumping, driven through host-supplied collaborators.

mod config;
mod controller;
mod state;

pub use config::{LocomotionConfig, MAX_TURN_SMOOTH_TIME, RADIUS_TOLERANCE};
pub use controller::{FrameReport, LocomotionController, LocomotionDeps};
pub use state::{input_direction, LocomotionState, MovePlan};
