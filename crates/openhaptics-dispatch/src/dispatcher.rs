//! The haptic dispatcher

use std::fmt;
use std::sync::Arc;

use openhaptics_effects::{VibrationAttributes, VibrationEffect};
use openhaptics_platform::Vibrator;

use crate::executor::{BackgroundExecutor, ExecutorError, TaskExecutor};
use crate::settings::SettingsProvider;

/// Facade over the platform vibration service.
///
/// Owns two flags computed once at construction: whether the device has a
/// vibration motor and whether the user has haptics enabled (non-zero
/// intensity). Every request is gated on both; gated-open requests are
/// enqueued on the executor so the calling thread never blocks on the
/// platform call.
///
/// Both flags are fixed for the dispatcher's lifetime. When the user
/// changes the intensity preference, construct a new dispatcher from the
/// fresh settings.
pub struct HapticDispatcher {
    vibrator: Arc<dyn Vibrator>,
    executor: Arc<dyn TaskExecutor>,
    has_vibrator: bool,
    haptics_enabled: bool,
}

impl HapticDispatcher {
    /// Builds a dispatcher from an explicit executor.
    ///
    /// Queries `vibrator.has_vibrator()` and the provider's intensity
    /// exactly once, here.
    pub fn new(
        vibrator: Arc<dyn Vibrator>,
        executor: Arc<dyn TaskExecutor>,
        settings: &dyn SettingsProvider,
    ) -> Self {
        let has_vibrator = vibrator.has_vibrator();
        let haptics_enabled = settings.vibration_intensity() != 0;
        Self {
            vibrator,
            executor,
            has_vibrator,
            haptics_enabled,
        }
    }

    /// Builds a dispatcher backed by the standard background worker.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError::Spawn`] if the worker thread cannot be
    /// created.
    pub fn with_background_executor(
        vibrator: Arc<dyn Vibrator>,
        settings: &dyn SettingsProvider,
    ) -> Result<Self, ExecutorError> {
        let executor = Arc::new(BackgroundExecutor::new()?);
        Ok(Self::new(vibrator, executor, settings))
    }

    /// Capability flag captured at construction.
    #[must_use]
    pub fn has_vibrator(&self) -> bool {
        self.has_vibrator
    }

    /// Preference flag captured at construction.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.haptics_enabled
    }

    /// Vibrates with the given effect if haptic feedback is available and
    /// enabled; otherwise a silent no-op.
    ///
    /// The platform call is issued from the background worker with the
    /// fixed sonification attribute profile. A platform failure is logged
    /// at debug level and dropped.
    pub fn vibrate(&self, effect: VibrationEffect) {
        if !(self.has_vibrator && self.haptics_enabled) {
            return;
        }
        let vibrator = Arc::clone(&self.vibrator);
        self.executor.execute(Box::new(move || {
            issue(vibrator.as_ref(), &effect);
        }));
    }

    /// Vibrates with a single primitive if supported, or the fallback
    /// effect instead. Gated exactly like [`vibrate`](Self::vibrate).
    ///
    /// Support is decided inside the enqueued task, on the worker: the
    /// capability query may be expensive and is kept off the calling
    /// thread. Negative primitive ids are defined as unsupported and
    /// always take the fallback path.
    pub fn vibrate_primitive(&self, primitive_id: i32, scale: f32, fallback: VibrationEffect) {
        if !(self.has_vibrator && self.haptics_enabled) {
            return;
        }
        let vibrator = Arc::clone(&self.vibrator);
        self.executor.execute(Box::new(move || {
            let effect = if primitive_id >= 0
                && vibrator.all_primitives_supported(&[primitive_id])
            {
                VibrationEffect::start_composition()
                    .add_primitive(primitive_id, scale)
                    .compose()
            } else {
                fallback
            };
            issue(vibrator.as_ref(), &effect);
        }));
    }
}

impl fmt::Debug for HapticDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HapticDispatcher")
            .field("has_vibrator", &self.has_vibrator)
            .field("haptics_enabled", &self.haptics_enabled)
            .finish_non_exhaustive()
    }
}

fn issue(vibrator: &dyn Vibrator, effect: &VibrationEffect) {
    if let Err(err) = vibrator.vibrate(effect, &VibrationAttributes::SONIFICATION) {
        tracing::debug!(error = %err, "vibration request failed");
    }
}
