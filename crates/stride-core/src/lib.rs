//! Stride Core - Core types and utilities for the Stride controller
//!
//! This crate provides the foundational types shared by the other crates:
//! - Mathematical primitives (re-exported from glam)
//! - Yaw helpers and collision layer masks
//! - Critically-damped smoothing for scalars and angles
//! - Frame time with pause and time scale
//! - The environment contracts a host supplies to the locomotion controller

pub mod env;
pub mod math;
pub mod time;
pub mod types;

pub use env::{AnimationSink, CameraYaw, CharacterMover, GroundProbe};
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use math::{delta_angle, smooth_damp, smooth_damp_angle, wrap_degrees};
pub use time::{GameTime, TimeConfig};
pub use types::{yaw_forward, LayerMask};
