//! Intensity-to-effect resolution

use crate::effects::{PredefinedEffect, VibrationEffect};

/// Intensity value meaning "haptics disabled".
pub const INTENSITY_OFF: i32 = 0;

/// Resolves a user intensity setting to a predefined effect.
///
/// Pure mapping, no side effects. Usable without a dispatcher instance.
///
/// | intensity | result |
/// |---|---|
/// | 1 | `TextureTick` |
/// | 2 | `Tick` |
/// | 3 | `Click` |
/// | 4 | `HeavyClick` |
/// | other | `Tick` |
///
/// Note the intensity-0 quirk: 0 means "haptics disabled", yet it still
/// resolves to `Tick` rather than a "no effect" sentinel. Callers must
/// check the enabled flag separately before acting on the result; the
/// dispatcher does exactly that. This mirrors the behavior of the system
/// this component fronts and is deliberately not "fixed" here.
///
/// # Examples
///
/// ```
/// use openhaptics_effects::{resolve_effect_for_intensity, PredefinedEffect};
///
/// assert_eq!(resolve_effect_for_intensity(4), PredefinedEffect::HeavyClick);
/// assert_eq!(resolve_effect_for_intensity(0), PredefinedEffect::Tick);
/// assert_eq!(resolve_effect_for_intensity(-7), PredefinedEffect::Tick);
/// ```
#[must_use]
pub fn resolve_effect_for_intensity(intensity: i32) -> PredefinedEffect {
    match intensity {
        1 => PredefinedEffect::TextureTick,
        2 => PredefinedEffect::Tick,
        3 => PredefinedEffect::Click,
        4 => PredefinedEffect::HeavyClick,
        _ => PredefinedEffect::Tick,
    }
}

impl VibrationEffect {
    /// Resolves an intensity setting directly to an effect descriptor.
    #[must_use]
    pub fn for_intensity(intensity: i32) -> Self {
        VibrationEffect::Predefined(resolve_effect_for_intensity(intensity))
    }
}
