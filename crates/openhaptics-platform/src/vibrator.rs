//! The vibration service contract

use openhaptics_effects::{VibrationAttributes, VibrationEffect};

use crate::VibratorResult;

/// Platform vibration service abstraction
///
/// This trait defines the contract for driving the vibration hardware.
/// Implementations are shared across threads: the dispatcher queries
/// capability on the constructing thread and issues everything else from
/// its background worker.
pub trait Vibrator: Send + Sync {
    /// Whether the device has a vibration motor at all.
    ///
    /// Must be cheap and stable for the life of the handle; the dispatcher
    /// reads it once at construction and caches the answer.
    fn has_vibrator(&self) -> bool;

    /// Issues an effect to the hardware with the given attribute profile.
    ///
    /// Called only from the dispatcher's background worker, so blocking
    /// I/O is acceptable here.
    ///
    /// # Errors
    ///
    /// Returns a [`VibratorError`](crate::VibratorError) when the platform
    /// rejects the effect or the underlying device write fails. The
    /// dispatcher logs and drops such failures.
    fn vibrate(&self, effect: &VibrationEffect, attrs: &VibrationAttributes) -> VibratorResult<()>;

    /// Whether every primitive id in `ids` is supported for composition.
    ///
    /// May be expensive; the dispatcher only ever asks from the background
    /// worker, never on the calling thread.
    fn all_primitives_supported(&self, ids: &[i32]) -> bool;
}
