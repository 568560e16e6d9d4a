//! Simulator backend that traces requests instead of driving hardware

use openhaptics_effects::{VibrationAttributes, VibrationEffect};

use crate::vibrator::Vibrator;
use crate::VibratorResult;

/// A fully capable vibrator that logs each request through `tracing`.
///
/// Intended for development hosts and demos. By default every non-negative
/// primitive id is reported as supported; a restricted set can be
/// configured to mimic less capable hardware.
#[derive(Debug, Clone, Default)]
pub struct SimulatorVibrator {
    supported_primitives: Option<Vec<i32>>,
}

impl SimulatorVibrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts primitive support to the given ids.
    #[must_use]
    pub fn with_supported_primitives(ids: Vec<i32>) -> Self {
        Self {
            supported_primitives: Some(ids),
        }
    }
}

impl Vibrator for SimulatorVibrator {
    fn has_vibrator(&self) -> bool {
        true
    }

    fn vibrate(&self, effect: &VibrationEffect, attrs: &VibrationAttributes) -> VibratorResult<()> {
        tracing::debug!(
            effect = ?effect,
            usage = ?attrs.usage,
            content_type = ?attrs.content_type,
            "simulated vibration"
        );
        Ok(())
    }

    fn all_primitives_supported(&self, ids: &[i32]) -> bool {
        match &self.supported_primitives {
            Some(supported) => ids.iter().all(|id| supported.contains(id)),
            None => ids.iter().all(|id| *id >= 0),
        }
    }
}
