//! Shared test utilities for OpenHaptics.
//!
//! This crate provides the test doubles the suite leans on:
//!
//! - [`mock`] - A recording [`Vibrator`](openhaptics_platform::Vibrator)
//!   with configurable capability and primitive support
//! - [`executors`] - Synchronous and manually pumped
//!   [`TaskExecutor`](openhaptics_dispatch::TaskExecutor) implementations
//!   for observing the dispatcher's two-stage gating

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod executors;
pub mod mock;

pub use executors::{InlineExecutor, ManualExecutor};
pub use mock::{RecordedVibration, RecordingVibrator};
