//! Haptic feedback dispatching for OpenHaptics
//!
//! This crate ties the pieces together: it reads the user's vibration
//! intensity once, caches the device capability flag, and forwards gated
//! vibration requests onto a single background worker so the calling
//! thread never blocks on the platform.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use openhaptics_dispatch::{HapticDispatcher, HapticSettings};
//! use openhaptics_effects::VibrationEffect;
//! use openhaptics_platform::SimulatorVibrator;
//!
//! # fn main() -> Result<(), openhaptics_dispatch::ExecutorError> {
//! let settings = HapticSettings { vibration_intensity: 3 };
//! let dispatcher =
//!     HapticDispatcher::with_background_executor(Arc::new(SimulatorVibrator::new()), &settings)?;
//!
//! dispatcher.vibrate(VibrationEffect::for_intensity(3));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod dispatcher;
pub mod executor;
pub mod prelude;
pub mod settings;

pub use dispatcher::HapticDispatcher;
pub use executor::{BackgroundExecutor, ExecutorError, Task, TaskExecutor};
pub use settings::{HapticSettings, SettingsError, SettingsProvider};
