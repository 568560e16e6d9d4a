//! Haptic effect types and intensity resolution
//!
//! This crate provides the standardized haptic effect definitions shared by
//! all OpenHaptics crates: the predefined effect table, primitive
//! composition, the fixed attribute profile attached to every platform call,
//! and the intensity-to-effect resolver.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod attributes;
pub mod effects;
pub mod intensity;

pub use attributes::*;
pub use effects::*;
pub use intensity::*;
