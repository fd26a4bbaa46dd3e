use serde::{Deserialize, Serialize};

use super::autoscale::AutoscaleValidator;
use super::engine::{evaluate, is_dirty, is_valid_value};
use super::mode::mode_override;
use super::types::{ThroughputConfiguration, ThroughputMode};

/// What has to be persisted for a saveable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SavePlan {
    /// Switch the persisted mode.
    ///
    /// `pending_update` carries an edit made to the still-persisted field
    /// during the switch; it is written before migrating.
    Migrate {
        from: ThroughputMode,
        to: ThroughputMode,
        pending_update: Option<u64>,
    },
    SetManual { throughput: u64 },
    SetAutoscaleMax { max_throughput: u64 },
}

/// Returns what to persist, or `None` when the snapshot is not saveable.
///
/// An edit made during a pending switch is only carried when it is valid
/// for the persisted mode. An invalid one yields `None` rather than a
/// migration that silently drops it.
pub fn plan_save<V>(config: &ThroughputConfiguration, validator: &V) -> Option<SavePlan>
where
    V: AutoscaleValidator + ?Sized,
{
    if !evaluate(config, validator).is_saveable {
        return None;
    }

    if let Some(pending) = mode_override(config) {
        let from = pending.persisted_mode();
        let value = config.value_for(from);
        let pending_update = is_dirty(value, config.baseline_for(from)).then_some(value);
        if let Some(value) = pending_update {
            if !is_valid_value(config, from, value, validator) {
                return None;
            }
        }
        return Some(SavePlan::Migrate {
            from,
            to: pending.target_mode(),
            pending_update,
        });
    }

    Some(match config.mode {
        ThroughputMode::Manual => SavePlan::SetManual {
            throughput: config.manual_value,
        },
        ThroughputMode::Autoscale => SavePlan::SetAutoscaleMax {
            max_throughput: config.autoscale_value,
        },
    })
}

/// Returns the snapshot with every edit reverted.
pub fn discard(config: &ThroughputConfiguration) -> ThroughputConfiguration {
    ThroughputConfiguration {
        mode: config.original_mode,
        manual_value: config.manual_baseline,
        autoscale_value: config.autoscale_baseline,
        ..config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::throughput::autoscale::AutoscaleSteps;
    use crate::throughput::engine::has_mode_changed;
    use crate::throughput::types::EvaluationResult;

    #[test]
    fn test_no_plan_when_not_saveable() {
        let config = ThroughputConfiguration::manual(400, 400, 10_000);
        assert_eq!(plan_save(&config, &AutoscaleSteps::default()), None);

        let config = config.with_manual_value(100);
        assert_eq!(plan_save(&config, &AutoscaleSteps::default()), None);
    }

    #[test]
    fn test_plan_manual_update() {
        let config = ThroughputConfiguration::manual(400, 400, 10_000).with_manual_value(1000);
        assert_eq!(
            plan_save(&config, &AutoscaleSteps::default()),
            Some(SavePlan::SetManual { throughput: 1000 })
        );
    }

    #[test]
    fn test_plan_autoscale_update() {
        let config =
            ThroughputConfiguration::autoscale(4000, 400, 10_000).with_autoscale_value(8000);
        assert_eq!(
            plan_save(&config, &AutoscaleSteps::default()),
            Some(SavePlan::SetAutoscaleMax {
                max_throughput: 8000
            })
        );
    }

    #[test]
    fn test_plan_migration_without_edits() {
        let config =
            ThroughputConfiguration::manual(400, 400, 10_000).with_mode(ThroughputMode::Autoscale);
        assert_eq!(
            plan_save(&config, &AutoscaleSteps::default()),
            Some(SavePlan::Migrate {
                from: ThroughputMode::Manual,
                to: ThroughputMode::Autoscale,
                pending_update: None,
            })
        );
    }

    #[test]
    fn test_plan_migration_carries_redirected_edit() {
        let mut config = ThroughputConfiguration::autoscale(4000, 400, 10_000)
            .with_mode(ThroughputMode::Manual);
        config.apply_edit("9000");

        assert_eq!(
            plan_save(&config, &AutoscaleSteps::default()),
            Some(SavePlan::Migrate {
                from: ThroughputMode::Autoscale,
                to: ThroughputMode::Manual,
                pending_update: Some(9000),
            })
        );
    }

    #[test]
    fn test_no_plan_for_invalid_redirected_edit() {
        let steps = AutoscaleSteps::default();

        let mut config = ThroughputConfiguration::autoscale(4000, 400, 10_000)
            .with_mode(ThroughputMode::Manual);
        config.apply_edit("500");
        assert_eq!(plan_save(&config, &steps), None);

        let mut config =
            ThroughputConfiguration::manual(400, 400, 10_000).with_mode(ThroughputMode::Autoscale);
        config.apply_edit("abc");
        assert_eq!(plan_save(&config, &steps), None);

        let mut config =
            ThroughputConfiguration::manual(400, 400, 10_000).with_mode(ThroughputMode::Autoscale);
        config.apply_edit("399");
        assert_eq!(plan_save(&config, &steps), None);
    }

    #[test]
    fn test_redirected_edit_uses_injected_validator() {
        let mut config = ThroughputConfiguration::autoscale(4000, 400, 10_000)
            .with_mode(ThroughputMode::Manual);
        config.apply_edit("4500");

        assert_eq!(plan_save(&config, &AutoscaleSteps::default()), None);
        assert_eq!(
            plan_save(&config, &|value: u64| value % 500 == 0),
            Some(SavePlan::Migrate {
                from: ThroughputMode::Autoscale,
                to: ThroughputMode::Manual,
                pending_update: Some(4500),
            })
        );
    }

    #[test]
    fn test_discard_reverts_everything() {
        let mut config = ThroughputConfiguration::autoscale(4000, 400, 10_000)
            .with_mode(ThroughputMode::Manual);
        config.apply_edit("9000");

        let reverted = discard(&config);
        assert!(!has_mode_changed(&reverted));
        assert_eq!(reverted.autoscale_value, 4000);
        assert_eq!(
            evaluate(&reverted, &AutoscaleSteps::default()),
            EvaluationResult::IDLE
        );
    }
}
