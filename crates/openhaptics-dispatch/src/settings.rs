//! User-facing haptic configuration

use std::fs;
use std::path::Path;

use openhaptics_effects::{resolve_effect_for_intensity, PredefinedEffect, INTENSITY_OFF};
use serde::{Deserialize, Serialize};

/// Settings loading failures
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings document: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Source of the user's vibration intensity setting.
///
/// The dispatcher reads this exactly once at construction; a changed
/// preference takes effect by constructing a new dispatcher.
pub trait SettingsProvider {
    /// Current intensity setting. 0 disables haptics; 1–4 select the four
    /// predefined effects; any other value is tolerated and resolves to
    /// the default effect.
    fn vibration_intensity(&self) -> i32;
}

/// User haptic configuration document.
///
/// # Examples
///
/// ```
/// use openhaptics_dispatch::HapticSettings;
///
/// let settings = HapticSettings::from_yaml_str("vibration_intensity: 3")?;
/// assert_eq!(settings.vibration_intensity, 3);
/// assert!(settings.is_enabled());
/// # Ok::<(), openhaptics_dispatch::SettingsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HapticSettings {
    /// User intensity step, conventionally 0–4. Out-of-range values are
    /// kept as-is; resolution tolerates them.
    #[serde(default = "default_intensity")]
    pub vibration_intensity: i32,
}

/// Intensity shipped when the user has not chosen one; selects the same
/// effect the resolver falls back to.
const DEFAULT_INTENSITY: i32 = 2;

fn default_intensity() -> i32 {
    DEFAULT_INTENSITY
}

impl Default for HapticSettings {
    fn default() -> Self {
        Self {
            vibration_intensity: DEFAULT_INTENSITY,
        }
    }
}

impl HapticSettings {
    /// Whether haptics are enabled at all (any non-zero intensity).
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.vibration_intensity != INTENSITY_OFF
    }

    /// The predefined effect this intensity selects.
    #[must_use]
    pub fn resolved_effect(&self) -> PredefinedEffect {
        resolve_effect_for_intensity(self.vibration_intensity)
    }

    /// Parses a YAML settings document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] on a malformed document.
    pub fn from_yaml_str(document: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(document)?)
    }

    /// Loads settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be read and
    /// [`SettingsError::Parse`] on a malformed document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let document = fs::read_to_string(path)?;
        Self::from_yaml_str(&document)
    }
}

impl SettingsProvider for HapticSettings {
    fn vibration_intensity(&self) -> i32 {
        self.vibration_intensity
    }
}
