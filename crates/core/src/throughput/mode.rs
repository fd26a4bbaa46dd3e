use serde::{Deserialize, Serialize};

use super::acknowledgement::SpendPolicy;
use super::engine::has_mode_changed;
use super::error::ThroughputError;
use super::types::{ThroughputConfiguration, ThroughputMode};

/// A pending switch between throughput modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeOverride {
    /// Persisted as autoscale, manual selected. Autoscale settings still apply.
    AutoscaleToManual,
    /// Persisted as manual, autoscale selected. Manual settings still apply.
    ManualToAutoscale,
}

impl ModeOverride {
    /// Returns the pending switch, or `None` when the mode is unchanged.
    pub fn from_config(config: &ThroughputConfiguration) -> Option<Self> {
        if !has_mode_changed(config) {
            return None;
        }
        Some(match config.original_mode {
            ThroughputMode::Autoscale => ModeOverride::AutoscaleToManual,
            ThroughputMode::Manual => ModeOverride::ManualToAutoscale,
        })
    }

    /// Like [`ModeOverride::from_config`], but treats an unchanged mode as a
    /// caller error.
    pub fn require(config: &ThroughputConfiguration) -> Result<Self, ThroughputError> {
        Self::from_config(config).ok_or(ThroughputError::ModeUnchanged)
    }

    /// Mode that is still persisted while the switch is pending.
    pub fn persisted_mode(self) -> ThroughputMode {
        match self {
            ModeOverride::AutoscaleToManual => ThroughputMode::Autoscale,
            ModeOverride::ManualToAutoscale => ThroughputMode::Manual,
        }
    }

    /// Mode the resource migrates to on save.
    pub fn target_mode(self) -> ThroughputMode {
        self.persisted_mode().other()
    }
}

/// Returns the pending mode switch for a snapshot, if any.
pub fn mode_override(config: &ThroughputConfiguration) -> Option<ModeOverride> {
    ModeOverride::from_config(config)
}

/// What a single throughput input should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    pub read_only: bool,
    /// `None` renders an empty input.
    pub displayed_value: Option<u64>,
}

/// Projection of a snapshot for whatever surface hosts the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub show_mode_choices: bool,
    pub active_input: ThroughputMode,
    pub manual: InputField,
    pub autoscale: InputField,
    pub show_migration_warning: bool,
    pub spend_acknowledgement_visible: bool,
    pub fixed_capacity_note: bool,
}

/// Builds the input projection for a snapshot.
///
/// During a pending switch the newly selected input is read-only: switching
/// from autoscale shows the persisted autoscale max in the manual input, and
/// switching from manual leaves the autoscale input blank.
pub fn input_state<P>(config: &ThroughputConfiguration, spend_policy: &P) -> InputState
where
    P: SpendPolicy + ?Sized,
{
    let pending = mode_override(config);

    let manual = match pending {
        Some(ModeOverride::AutoscaleToManual) => InputField {
            read_only: true,
            displayed_value: Some(config.autoscale_baseline),
        },
        _ => InputField {
            read_only: false,
            displayed_value: Some(config.manual_value),
        },
    };

    let autoscale = match pending {
        Some(ModeOverride::ManualToAutoscale) => InputField {
            read_only: true,
            displayed_value: None,
        },
        _ => InputField {
            read_only: false,
            displayed_value: Some(config.autoscale_value),
        },
    };

    InputState {
        show_mode_choices: !config.is_fixed_container,
        active_input: config.mode,
        manual,
        autoscale,
        show_migration_warning: pending == Some(ModeOverride::ManualToAutoscale),
        spend_acknowledgement_visible: spend_policy.requires_acknowledgement(config),
        fixed_capacity_note: config.is_fixed_container,
    }
}
