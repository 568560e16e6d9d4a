//! Haptic effect types

use serde::{Deserialize, Serialize};

/// Predefined platform haptic patterns
///
/// Variants are declared in increasing intensity order, so the derived
/// ordering matches perceived strength.
///
/// # Examples
///
/// ```
/// use openhaptics_effects::PredefinedEffect;
///
/// assert!(PredefinedEffect::TextureTick < PredefinedEffect::HeavyClick);
///
/// // Default is Tick, the same effect the intensity resolver falls back to
/// assert_eq!(PredefinedEffect::default(), PredefinedEffect::Tick);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum PredefinedEffect {
    TextureTick,
    #[default]
    Tick,
    Click,
    HeavyClick,
}

impl PredefinedEffect {
    /// All predefined effects, weakest first.
    pub const ALL: [PredefinedEffect; 4] = [
        PredefinedEffect::TextureTick,
        PredefinedEffect::Tick,
        PredefinedEffect::Click,
        PredefinedEffect::HeavyClick,
    ];
}

/// Opaque effect descriptor handed to the platform
///
/// Either one of the four predefined patterns or a composed sequence of
/// primitives built with [`CompositionBuilder`].
///
/// # Examples
///
/// ```
/// use openhaptics_effects::{PredefinedEffect, VibrationEffect};
///
/// let click: VibrationEffect = PredefinedEffect::Click.into();
/// assert_eq!(click, VibrationEffect::Predefined(PredefinedEffect::Click));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VibrationEffect {
    Predefined(PredefinedEffect),
    Composition(CompositionEffect),
}

impl VibrationEffect {
    /// Wraps a predefined pattern.
    pub fn predefined(effect: PredefinedEffect) -> Self {
        VibrationEffect::Predefined(effect)
    }

    /// Begins building a composed effect, mirroring the platform
    /// composition API.
    ///
    /// # Examples
    ///
    /// ```
    /// use openhaptics_effects::VibrationEffect;
    ///
    /// let effect = VibrationEffect::start_composition()
    ///     .add_primitive(3, 0.8)
    ///     .compose();
    ///
    /// match effect {
    ///     VibrationEffect::Composition(c) => assert_eq!(c.primitives.len(), 1),
    ///     VibrationEffect::Predefined(_) => unreachable!(),
    /// }
    /// ```
    pub fn start_composition() -> CompositionBuilder {
        CompositionBuilder::new()
    }
}

impl From<PredefinedEffect> for VibrationEffect {
    fn from(effect: PredefinedEffect) -> Self {
        VibrationEffect::Predefined(effect)
    }
}

/// A single fine-grained vibration component
///
/// A negative id means the primitive is not available on the current
/// platform. The scale is expected in `[0.0, 1.0]` but is passed through
/// unvalidated; the platform owns range handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositionPrimitive {
    pub id: i32,
    pub scale: f32,
}

impl CompositionPrimitive {
    pub fn new(id: i32, scale: f32) -> Self {
        Self { id, scale }
    }

    /// Whether the primitive id denotes an actual platform primitive.
    /// Negative ids are defined as unavailable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.id >= 0
    }
}

/// A composed effect: an ordered sequence of primitives
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompositionEffect {
    pub primitives: Vec<CompositionPrimitive>,
}

impl CompositionEffect {
    /// Ids of every primitive in composition order.
    pub fn primitive_ids(&self) -> Vec<i32> {
        self.primitives.iter().map(|p| p.id).collect()
    }
}

/// Builder for composed effects
///
/// # Examples
///
/// ```
/// use openhaptics_effects::{CompositionBuilder, VibrationEffect};
///
/// let effect = CompositionBuilder::new()
///     .add_primitive(1, 0.5)
///     .add_primitive(7, 1.0)
///     .compose();
///
/// match effect {
///     VibrationEffect::Composition(c) => {
///         assert_eq!(c.primitive_ids(), vec![1, 7]);
///     }
///     VibrationEffect::Predefined(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Default)]
pub struct CompositionBuilder {
    primitives: Vec<CompositionPrimitive>,
}

impl CompositionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive. Order is preserved through [`compose`](Self::compose).
    #[must_use]
    pub fn add_primitive(mut self, id: i32, scale: f32) -> Self {
        self.primitives.push(CompositionPrimitive::new(id, scale));
        self
    }

    pub fn compose(self) -> VibrationEffect {
        VibrationEffect::Composition(CompositionEffect {
            primitives: self.primitives,
        })
    }
}
