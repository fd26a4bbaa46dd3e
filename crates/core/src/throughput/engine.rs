//! Save/discard decisions for throughput settings.
//!
//! Every function here is a pure projection of a [`ThroughputConfiguration`]
//! snapshot: the same snapshot always yields the same answer and nothing is
//! remembered between calls.

use super::autoscale::AutoscaleValidator;
use super::types::{EvaluationResult, ThroughputConfiguration, ThroughputMode, ABSOLUTE_CAP};

/// Returns true when the current value differs from the persisted one.
pub fn is_dirty(current: u64, baseline: u64) -> bool {
    current != baseline
}

/// Returns true when the selected mode differs from the persisted mode.
pub fn has_mode_changed(config: &ThroughputConfiguration) -> bool {
    config.mode != config.original_mode
}

/// Returns the mode whose field receives edits.
///
/// While a mode switch is pending the persisted mode's field stays
/// authoritative; the switch itself only happens on save.
pub fn authoritative_target(config: &ThroughputConfiguration) -> ThroughputMode {
    if has_mode_changed(config) {
        config.original_mode
    } else {
        config.mode
    }
}

/// Decides whether save and discard should be offered for a snapshot.
///
/// A pending mode switch is always saveable and discardable. Otherwise only
/// the selected mode's field is compared against its baseline.
pub fn evaluate<V>(config: &ThroughputConfiguration, validator: &V) -> EvaluationResult
where
    V: AutoscaleValidator + ?Sized,
{
    if !config.is_enabled {
        return EvaluationResult::IDLE;
    }

    if has_mode_changed(config) {
        return EvaluationResult::PENDING;
    }

    match config.mode {
        ThroughputMode::Autoscale => {
            let dirty = is_dirty(config.autoscale_value, config.autoscale_baseline);
            EvaluationResult {
                is_saveable: dirty
                    && validator.is_valid_autoscale_throughput(config.autoscale_value),
                is_discardable: dirty,
            }
        }
        ThroughputMode::Manual => {
            let dirty = is_dirty(config.manual_value, config.manual_baseline);
            EvaluationResult {
                is_saveable: dirty && manual_value_in_bounds(config, config.manual_value),
                is_discardable: dirty,
            }
        }
    }
}

/// Returns true when `value` may be persisted as `mode`'s throughput.
pub(crate) fn is_valid_value<V>(
    config: &ThroughputConfiguration,
    mode: ThroughputMode,
    value: u64,
    validator: &V,
) -> bool
where
    V: AutoscaleValidator + ?Sized,
{
    match mode {
        ThroughputMode::Autoscale => validator.is_valid_autoscale_throughput(value),
        ThroughputMode::Manual => manual_value_in_bounds(config, value),
    }
}

/// Checks a manual value against the bounds that apply to this resource.
///
/// The per-resource maximum only binds emulator and fixed containers; elastic
/// containers may go past it up to [`ABSOLUTE_CAP`].
fn manual_value_in_bounds(config: &ThroughputConfiguration, value: u64) -> bool {
    if value == 0 || value < config.minimum {
        return false;
    }
    if value > config.maximum && (config.is_emulator || config.is_fixed_container) {
        return false;
    }
    if value > ABSOLUTE_CAP && !config.can_exceed_maximum_value {
        return false;
    }
    true
}
