//! Core simulation types for skyfreight.
//!
//! This crate provides the foundational types used across all simulation systems:
//! - Transform with yaw/pitch/roll orientation
//! - Frame timing and the fixed-step clock
//! - The tagged ground-surface registry

pub mod clock;
pub mod surface;
pub mod transform;

pub use clock::*;
pub use surface::*;
pub use transform::*;

// Re-export commonly used math types
pub use glam::{Quat, Vec2, Vec3};
