//! Recording vibrator for dispatcher tests

use openhaptics_effects::{VibrationAttributes, VibrationEffect};
use openhaptics_platform::{Vibrator, VibratorError, VibratorResult};
use parking_lot::Mutex;

/// One observed platform call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedVibration {
    pub effect: VibrationEffect,
    pub attributes: VibrationAttributes,
}

/// A vibrator that records every call instead of driving hardware.
///
/// Capability, primitive support, and failure behavior are configurable.
/// Primitive support can be changed after construction, which lets tests
/// demonstrate that the dispatcher defers the support decision to task
/// execution time.
pub struct RecordingVibrator {
    has_vibrator: bool,
    fail_on_vibrate: bool,
    supported_primitives: Mutex<Vec<i32>>,
    calls: Mutex<Vec<RecordedVibration>>,
    support_queries: Mutex<Vec<Vec<i32>>>,
}

impl RecordingVibrator {
    /// Full capability, no supported primitives, never fails.
    pub fn new() -> Self {
        Self {
            has_vibrator: true,
            fail_on_vibrate: false,
            supported_primitives: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            support_queries: Mutex::new(Vec::new()),
        }
    }

    /// A device with no vibration motor.
    pub fn without_vibrator() -> Self {
        Self {
            has_vibrator: false,
            ..Self::new()
        }
    }

    /// Every `vibrate` call returns an I/O failure (after recording).
    pub fn with_failure() -> Self {
        Self {
            fail_on_vibrate: true,
            ..Self::new()
        }
    }

    /// Declares the given primitive ids supported.
    #[must_use]
    pub fn with_supported_primitives(self, ids: Vec<i32>) -> Self {
        *self.supported_primitives.lock() = ids;
        self
    }

    /// Replaces the supported-primitive set after construction.
    pub fn set_supported_primitives(&self, ids: Vec<i32>) {
        *self.supported_primitives.lock() = ids;
    }

    /// Every recorded call, in issue order.
    pub fn calls(&self) -> Vec<RecordedVibration> {
        self.calls.lock().clone()
    }

    /// Effects only, in issue order.
    pub fn effects(&self) -> Vec<VibrationEffect> {
        self.calls.lock().iter().map(|c| c.effect.clone()).collect()
    }

    pub fn last_call(&self) -> Option<RecordedVibration> {
        self.calls.lock().last().cloned()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }

    /// Every `all_primitives_supported` query, in issue order.
    pub fn support_queries(&self) -> Vec<Vec<i32>> {
        self.support_queries.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
        self.support_queries.lock().clear();
    }
}

impl Default for RecordingVibrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Vibrator for RecordingVibrator {
    fn has_vibrator(&self) -> bool {
        self.has_vibrator
    }

    fn vibrate(&self, effect: &VibrationEffect, attrs: &VibrationAttributes) -> VibratorResult<()> {
        self.calls.lock().push(RecordedVibration {
            effect: effect.clone(),
            attributes: *attrs,
        });
        if self.fail_on_vibrate {
            return Err(VibratorError::io("mock vibrate failure"));
        }
        Ok(())
    }

    fn all_primitives_supported(&self, ids: &[i32]) -> bool {
        self.support_queries.lock().push(ids.to_vec());
        let supported = self.supported_primitives.lock();
        ids.iter().all(|id| supported.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openhaptics_effects::PredefinedEffect;

    #[test]
    fn test_recording_preserves_order() {
        let vibrator = RecordingVibrator::new();
        for effect in PredefinedEffect::ALL {
            let result = vibrator.vibrate(&effect.into(), &VibrationAttributes::SONIFICATION);
            assert!(result.is_ok());
        }

        let effects = vibrator.effects();
        assert_eq!(effects.len(), 4);
        assert_eq!(effects[0], PredefinedEffect::TextureTick.into());
        assert_eq!(effects[3], PredefinedEffect::HeavyClick.into());
    }

    #[test]
    fn test_failure_still_records() {
        let vibrator = RecordingVibrator::with_failure();
        let result = vibrator.vibrate(
            &PredefinedEffect::Click.into(),
            &VibrationAttributes::SONIFICATION,
        );
        assert!(result.is_err());
        assert_eq!(vibrator.total_calls(), 1);
    }

    #[test]
    fn test_support_set_can_change_after_construction() {
        let vibrator = RecordingVibrator::new();
        assert!(!vibrator.all_primitives_supported(&[3]));

        vibrator.set_supported_primitives(vec![3]);
        assert!(vibrator.all_primitives_supported(&[3]));

        assert_eq!(vibrator.support_queries(), vec![vec![3], vec![3]]);
    }
}
