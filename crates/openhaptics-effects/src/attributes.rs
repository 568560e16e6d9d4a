//! Attribute profile attached to platform vibration calls

use serde::{Deserialize, Serialize};

/// What the vibration is for, from the platform's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AttributeUsage {
    /// Feedback accompanying a UI interaction.
    #[default]
    AssistanceSonification,
    Notification,
    Alarm,
}

/// What kind of signal the vibration accompanies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AttributeContentType {
    #[default]
    Sonification,
    Speech,
    Music,
}

/// Attribute profile for a vibration request
///
/// The dispatcher issues every call with the fixed
/// [`SONIFICATION`](VibrationAttributes::SONIFICATION) profile.
///
/// # Examples
///
/// ```
/// use openhaptics_effects::{AttributeUsage, VibrationAttributes};
///
/// let attrs = VibrationAttributes::SONIFICATION;
/// assert_eq!(attrs.usage, AttributeUsage::AssistanceSonification);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VibrationAttributes {
    pub usage: AttributeUsage,
    pub content_type: AttributeContentType,
}

impl VibrationAttributes {
    /// The fixed profile used for haptic feedback: assistance sonification
    /// usage with sonification content.
    pub const SONIFICATION: VibrationAttributes = VibrationAttributes {
        usage: AttributeUsage::AssistanceSonification,
        content_type: AttributeContentType::Sonification,
    };

    pub fn new(usage: AttributeUsage, content_type: AttributeContentType) -> Self {
        Self {
            usage,
            content_type,
        }
    }
}
