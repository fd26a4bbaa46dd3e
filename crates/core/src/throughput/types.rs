use serde::{Deserialize, Serialize};

/// Fixed system-wide ceiling for manual throughput, independent of the
/// per-resource maximum.
pub const ABSOLUTE_CAP: u64 = 1_000_000;

/// How throughput is provisioned for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThroughputMode {
    /// Fixed RU/s set by the user.
    Manual,
    /// RU/s scales between 10% of the max and the max.
    Autoscale,
}

impl ThroughputMode {
    /// Returns the other mode.
    pub fn other(self) -> Self {
        match self {
            ThroughputMode::Manual => ThroughputMode::Autoscale,
            ThroughputMode::Autoscale => ThroughputMode::Manual,
        }
    }

    /// Returns a human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ThroughputMode::Manual => "Manual",
            ThroughputMode::Autoscale => "Autoscale",
        }
    }
}

/// Snapshot of a resource's throughput settings during one edit session.
///
/// The engine never mutates a snapshot on its own. Callers build a new one (or
/// call [`ThroughputConfiguration::apply_edit`]) after every change and
/// re-evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputConfiguration {
    /// Mode currently selected by the user.
    pub mode: ThroughputMode,
    /// Mode as last persisted.
    pub original_mode: ThroughputMode,
    pub manual_value: u64,
    pub manual_baseline: u64,
    pub autoscale_value: u64,
    pub autoscale_baseline: u64,
    /// Lower bound for manual throughput.
    pub minimum: u64,
    /// Advisory upper bound for manual throughput.
    pub maximum: u64,
    pub is_enabled: bool,
    pub is_emulator: bool,
    pub is_fixed_container: bool,
    pub can_exceed_maximum_value: bool,
}

impl ThroughputConfiguration {
    /// Creates a clean manual-mode snapshot where current values equal baselines.
    pub fn manual(value: u64, minimum: u64, maximum: u64) -> Self {
        Self {
            mode: ThroughputMode::Manual,
            original_mode: ThroughputMode::Manual,
            manual_value: value,
            manual_baseline: value,
            autoscale_value: 0,
            autoscale_baseline: 0,
            minimum,
            maximum,
            is_enabled: true,
            is_emulator: false,
            is_fixed_container: false,
            can_exceed_maximum_value: false,
        }
    }

    /// Creates a clean autoscale-mode snapshot where current values equal baselines.
    pub fn autoscale(max_value: u64, minimum: u64, maximum: u64) -> Self {
        Self {
            mode: ThroughputMode::Autoscale,
            original_mode: ThroughputMode::Autoscale,
            autoscale_value: max_value,
            autoscale_baseline: max_value,
            ..Self::manual(0, minimum, maximum)
        }
    }

    /// Selects a mode without touching the persisted one.
    pub fn with_mode(mut self, mode: ThroughputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the current manual value.
    pub fn with_manual_value(mut self, value: u64) -> Self {
        self.manual_value = value;
        self
    }

    /// Sets the current autoscale max value.
    pub fn with_autoscale_value(mut self, value: u64) -> Self {
        self.autoscale_value = value;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    pub fn with_emulator(mut self, emulator: bool) -> Self {
        self.is_emulator = emulator;
        self
    }

    pub fn with_fixed_container(mut self, fixed: bool) -> Self {
        self.is_fixed_container = fixed;
        self
    }

    pub fn with_can_exceed_maximum(mut self, can_exceed: bool) -> Self {
        self.can_exceed_maximum_value = can_exceed;
        self
    }

    /// Current value of the field backing `mode`.
    pub fn value_for(&self, mode: ThroughputMode) -> u64 {
        match mode {
            ThroughputMode::Manual => self.manual_value,
            ThroughputMode::Autoscale => self.autoscale_value,
        }
    }

    /// Persisted value of the field backing `mode`.
    pub fn baseline_for(&self, mode: ThroughputMode) -> u64 {
        match mode {
            ThroughputMode::Manual => self.manual_baseline,
            ThroughputMode::Autoscale => self.autoscale_baseline,
        }
    }

    pub(crate) fn set_value(&mut self, mode: ThroughputMode, value: u64) {
        match mode {
            ThroughputMode::Manual => self.manual_value = value,
            ThroughputMode::Autoscale => self.autoscale_value = value,
        }
    }
}

/// Whether save and discard should be offered for a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub is_saveable: bool,
    pub is_discardable: bool,
}

impl EvaluationResult {
    /// Neither save nor discard.
    pub const IDLE: Self = Self {
        is_saveable: false,
        is_discardable: false,
    };

    /// Both save and discard.
    pub const PENDING: Self = Self {
        is_saveable: true,
        is_discardable: true,
    };
}

/// The field an edit was written to and the value written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEdit {
    pub target: ThroughputMode,
    pub value: u64,
}
