//! Null backend for hosts without vibration hardware

use openhaptics_effects::{VibrationAttributes, VibrationEffect};

use crate::vibrator::Vibrator;
use crate::VibratorResult;

/// A vibrator for devices with no motor.
///
/// Reports no capability, accepts every request as a no-op, and supports
/// no primitives. Useful as the wired-in backend on platforms where the
/// dispatcher should gate everything closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVibrator;

impl NullVibrator {
    pub fn new() -> Self {
        Self
    }
}

impl Vibrator for NullVibrator {
    fn has_vibrator(&self) -> bool {
        false
    }

    fn vibrate(&self, _effect: &VibrationEffect, _attrs: &VibrationAttributes) -> VibratorResult<()> {
        Ok(())
    }

    fn all_primitives_supported(&self, _ids: &[i32]) -> bool {
        false
    }
}
