//! Platform vibration port for OpenHaptics
//!
//! This crate defines the contract between the dispatcher and the platform
//! vibration service, abstracted from any specific operating system or
//! device stack, plus two reference implementations: a null backend for
//! hardware-less hosts and a simulator backend that traces requests.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod null;
pub mod simulator;
pub mod vibrator;

pub use null::NullVibrator;
pub use simulator::SimulatorVibrator;
pub use vibrator::Vibrator;

use thiserror::Error;

/// Platform-level vibration failures
///
/// The dispatcher treats every variant as fire-and-forget: failures are
/// logged and dropped, never surfaced to callers.
#[derive(Debug, Clone, Error)]
pub enum VibratorError {
    #[error("vibration hardware unavailable")]
    Unavailable,

    #[error("effect rejected by platform: {0}")]
    Rejected(String),

    #[error("platform I/O failure: {0}")]
    Io(String),
}

impl VibratorError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        VibratorError::Rejected(reason.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        VibratorError::Io(message.into())
    }
}

pub type VibratorResult<T> = Result<T, VibratorError>;
