use proptest::prelude::*;

use super::*;

fn any_mode() -> impl Strategy<Value = ThroughputMode> {
    prop_oneof![Just(ThroughputMode::Manual), Just(ThroughputMode::Autoscale)]
}

prop_compose! {
    fn any_config()(
        mode in any_mode(),
        original_mode in any_mode(),
        manual_value in 0u64..2_000_000,
        manual_baseline in 0u64..2_000_000,
        autoscale_value in 0u64..2_000_000,
        autoscale_baseline in 0u64..2_000_000,
        minimum in 0u64..10_000,
        maximum in 0u64..1_500_000,
        is_enabled in any::<bool>(),
        is_emulator in any::<bool>(),
        is_fixed_container in any::<bool>(),
        can_exceed_maximum_value in any::<bool>(),
    ) -> ThroughputConfiguration {
        ThroughputConfiguration {
            mode,
            original_mode,
            manual_value,
            manual_baseline,
            autoscale_value,
            autoscale_baseline,
            minimum,
            maximum,
            is_enabled,
            is_emulator,
            is_fixed_container,
            can_exceed_maximum_value,
        }
    }
}

proptest! {
    #[test]
    fn property_disabled_is_idle(config in any_config()) {
        let config = config.with_enabled(false);
        prop_assert_eq!(evaluate(&config, &AutoscaleSteps::default()), EvaluationResult::IDLE);
    }

    #[test]
    fn property_results_imply_enabled(config in any_config()) {
        let result = evaluate(&config, &AutoscaleSteps::default());
        prop_assert!(!result.is_saveable || config.is_enabled);
        prop_assert!(!result.is_discardable || config.is_enabled);
    }

    #[test]
    fn property_mode_change_is_pending(config in any_config()) {
        let config = ThroughputConfiguration {
            mode: config.original_mode.other(),
            is_enabled: true,
            ..config
        };
        let reject_all = |_: u64| false;
        prop_assert_eq!(evaluate(&config, &reject_all), EvaluationResult::PENDING);
    }

    #[test]
    fn property_saveable_implies_discardable_without_switch(config in any_config()) {
        let config = ThroughputConfiguration { mode: config.original_mode, ..config };
        let result = evaluate(&config, &AutoscaleSteps::default());
        prop_assert!(!result.is_saveable || result.is_discardable);
    }

    #[test]
    fn property_evaluate_is_idempotent(config in any_config()) {
        let steps = AutoscaleSteps::default();
        prop_assert_eq!(evaluate(&config, &steps), evaluate(&config, &steps));
    }

    #[test]
    fn property_manual_below_minimum_never_saveable(config in any_config()) {
        prop_assume!(config.minimum > 0);
        let config = ThroughputConfiguration {
            mode: ThroughputMode::Manual,
            original_mode: ThroughputMode::Manual,
            manual_value: config.minimum - 1,
            ..config
        };
        prop_assert!(!evaluate(&config, &AutoscaleSteps::default()).is_saveable);
    }

    #[test]
    fn property_edit_never_fails(raw in ".*", config in any_config()) {
        let edit = on_field_edit(&config, &raw);
        prop_assert_eq!(edit.target, authoritative_target(&config));
    }

    #[test]
    fn property_non_numeric_edit_is_zero(raw in "[a-zA-Z ]*", config in any_config()) {
        prop_assert_eq!(on_field_edit(&config, &raw).value, ZERO_THROUGHPUT);
    }

    #[test]
    fn property_plan_implies_saveable(config in any_config()) {
        let steps = AutoscaleSteps::default();
        if plan_save(&config, &steps).is_some() {
            prop_assert!(evaluate(&config, &steps).is_saveable);
        }
    }

    #[test]
    fn property_saveable_without_switch_has_plan(config in any_config()) {
        let config = ThroughputConfiguration { mode: config.original_mode, ..config };
        let steps = AutoscaleSteps::default();
        prop_assert_eq!(
            plan_save(&config, &steps).is_some(),
            evaluate(&config, &steps).is_saveable
        );
    }

    #[test]
    fn property_pending_update_is_valid_for_its_mode(
        raw in "[0-9a-z]{0,7}",
        config in any_config(),
    ) {
        let mut config = ThroughputConfiguration {
            mode: config.original_mode.other(),
            is_enabled: true,
            ..config
        };
        config.apply_edit(&raw);
        let steps = AutoscaleSteps::default();

        if let Some(SavePlan::Migrate { from, pending_update: Some(value), .. }) =
            plan_save(&config, &steps)
        {
            prop_assert_eq!(from, config.original_mode);
            match from {
                ThroughputMode::Autoscale => {
                    prop_assert!(steps.is_valid_autoscale_throughput(value));
                }
                ThroughputMode::Manual => {
                    // The same bounds evaluate applies to a manual save.
                    let as_manual_save = ThroughputConfiguration {
                        mode: ThroughputMode::Manual,
                        original_mode: ThroughputMode::Manual,
                        manual_value: value,
                        manual_baseline: value.wrapping_add(1),
                        ..config.clone()
                    };
                    prop_assert!(evaluate(&as_manual_save, &steps).is_saveable);
                }
            }
        }
    }
}
