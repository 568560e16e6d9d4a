//! Property tests for dispatcher gating.

use std::sync::Arc;

use openhaptics_dispatch::{HapticDispatcher, HapticSettings};
use openhaptics_effects::{PredefinedEffect, VibrationEffect};
use openhaptics_platform::Vibrator;
use openhaptics_test_helpers::{InlineExecutor, RecordingVibrator};
use proptest::prelude::*;

fn dispatcher_over(
    vibrator: &Arc<RecordingVibrator>,
    intensity: i32,
) -> HapticDispatcher {
    HapticDispatcher::new(
        Arc::clone(vibrator) as Arc<dyn Vibrator>,
        Arc::new(InlineExecutor::new()),
        &HapticSettings {
            vibration_intensity: intensity,
        },
    )
}

proptest! {
    #[test]
    fn prop_call_issued_iff_both_flags_open(
        intensity in any::<i32>(),
        has_hardware in any::<bool>(),
    ) {
        let vibrator = Arc::new(if has_hardware {
            RecordingVibrator::new()
        } else {
            RecordingVibrator::without_vibrator()
        });
        let dispatcher = dispatcher_over(&vibrator, intensity);

        dispatcher.vibrate(PredefinedEffect::Tick.into());

        let expected = usize::from(has_hardware && intensity != 0);
        prop_assert_eq!(vibrator.total_calls(), expected);
    }

    #[test]
    fn prop_n_invocations_issue_n_ordered_calls(
        intensities in proptest::collection::vec(1i32..=4, 1..24),
    ) {
        let vibrator = Arc::new(RecordingVibrator::new());
        let dispatcher = dispatcher_over(&vibrator, 2);

        for intensity in &intensities {
            dispatcher.vibrate(VibrationEffect::for_intensity(*intensity));
        }

        let expected: Vec<VibrationEffect> = intensities
            .iter()
            .map(|i| VibrationEffect::for_intensity(*i))
            .collect();
        prop_assert_eq!(vibrator.effects(), expected);
    }

    #[test]
    fn prop_primitive_path_composes_iff_available_and_supported(
        primitive_id in -8i32..=8,
        supported in any::<bool>(),
        scale in 0.0f32..=1.0,
    ) {
        let vibrator = Arc::new(if supported {
            RecordingVibrator::new().with_supported_primitives(vec![primitive_id])
        } else {
            RecordingVibrator::new()
        });
        let dispatcher = dispatcher_over(&vibrator, 3);

        dispatcher.vibrate_primitive(primitive_id, scale, PredefinedEffect::Click.into());

        let effects = vibrator.effects();
        prop_assert_eq!(effects.len(), 1);
        match &effects[0] {
            VibrationEffect::Composition(composition) => {
                prop_assert!(primitive_id >= 0 && supported);
                prop_assert_eq!(composition.primitives.len(), 1);
                prop_assert_eq!(composition.primitives[0].id, primitive_id);
                prop_assert!((composition.primitives[0].scale - scale).abs() < f32::EPSILON);
            }
            VibrationEffect::Predefined(effect) => {
                prop_assert!(primitive_id < 0 || !supported);
                prop_assert_eq!(*effect, PredefinedEffect::Click);
            }
        }
    }
}
