//! Convenience re-exports for dispatcher consumers

pub use crate::dispatcher::HapticDispatcher;
pub use crate::executor::{BackgroundExecutor, ExecutorError, Task, TaskExecutor};
pub use crate::settings::{HapticSettings, SettingsError, SettingsProvider};

pub use openhaptics_effects::{
    resolve_effect_for_intensity, CompositionBuilder, CompositionPrimitive, PredefinedEffect,
    VibrationAttributes, VibrationEffect, INTENSITY_OFF,
};
pub use openhaptics_platform::{NullVibrator, SimulatorVibrator, Vibrator, VibratorError};
