//! Spend acknowledgement and the submit gate built on top of it.
//!
//! Acknowledgement never feeds into [`evaluate`](super::evaluate). It is a
//! second, independent condition that the submit flow checks on its own.

use serde::{Deserialize, Serialize};

use super::engine::authoritative_target;
use super::types::{EvaluationResult, ThroughputConfiguration};

/// Throughput above which the user must acknowledge the spend.
pub const DEFAULT_SPEND_ACK_THRESHOLD: u64 = 100_000;

/// Whether the user has acknowledged the estimated spend.
///
/// Starts unchecked. Only a new edit session resets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendAcknowledgement {
    acknowledged: bool,
}

impl SpendAcknowledgement {
    pub fn new(acknowledged: bool) -> Self {
        Self { acknowledged }
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn set_acknowledged(&mut self, acknowledged: bool) {
        self.acknowledged = acknowledged;
    }

    /// Clears the acknowledgement for a new edit session.
    pub fn reset(&mut self) {
        self.acknowledged = false;
    }
}

/// Decides whether a snapshot needs a spend acknowledgement.
pub trait SpendPolicy {
    fn requires_acknowledgement(&self, config: &ThroughputConfiguration) -> bool;
}

/// Requires acknowledgement when the authoritative value exceeds a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdSpendPolicy {
    pub threshold: u64,
}

impl ThresholdSpendPolicy {
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }
}

impl Default for ThresholdSpendPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SPEND_ACK_THRESHOLD)
    }
}

impl SpendPolicy for ThresholdSpendPolicy {
    fn requires_acknowledgement(&self, config: &ThroughputConfiguration) -> bool {
        config.value_for(authoritative_target(config)) > self.threshold
    }
}

/// Outcome of the submit gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitGate {
    Allowed,
    NotSaveable,
    AcknowledgementRequired,
}

impl SubmitGate {
    pub fn is_allowed(self) -> bool {
        matches!(self, SubmitGate::Allowed)
    }
}

/// Combines an evaluation with the acknowledgement state.
///
/// A missing acknowledgement blocks submission even when the snapshot is
/// saveable.
pub fn submit_gate(
    result: EvaluationResult,
    acknowledgement_required: bool,
    acknowledgement: SpendAcknowledgement,
) -> SubmitGate {
    if !result.is_saveable {
        SubmitGate::NotSaveable
    } else if acknowledgement_required && !acknowledgement.is_acknowledged() {
        SubmitGate::AcknowledgementRequired
    } else {
        SubmitGate::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::throughput::types::ThroughputMode;

    #[test]
    fn test_acknowledgement_lifecycle() {
        let mut ack = SpendAcknowledgement::default();
        assert!(!ack.is_acknowledged());

        ack.set_acknowledged(true);
        assert!(ack.is_acknowledged());

        ack.reset();
        assert!(!ack.is_acknowledged());
    }

    #[test]
    fn test_threshold_policy_uses_authoritative_value() {
        let policy = ThresholdSpendPolicy::new(10_000);

        let config = ThroughputConfiguration::manual(400, 400, 1_000_000).with_manual_value(20_000);
        assert!(policy.requires_acknowledgement(&config));

        // Switching away from autoscale keeps the autoscale value authoritative.
        let config = ThroughputConfiguration::autoscale(4000, 400, 1_000_000)
            .with_mode(ThroughputMode::Manual)
            .with_manual_value(50_000);
        assert!(!policy.requires_acknowledgement(&config));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let policy = ThresholdSpendPolicy::default();
        let config = ThroughputConfiguration::manual(DEFAULT_SPEND_ACK_THRESHOLD, 400, 1_000_000);
        assert!(!policy.requires_acknowledgement(&config));
    }

    #[test]
    fn test_submit_gate() {
        let unchecked = SpendAcknowledgement::default();
        let checked = SpendAcknowledgement::new(true);

        assert_eq!(
            submit_gate(EvaluationResult::IDLE, false, checked),
            SubmitGate::NotSaveable
        );
        assert_eq!(
            submit_gate(EvaluationResult::PENDING, true, unchecked),
            SubmitGate::AcknowledgementRequired
        );
        assert_eq!(
            submit_gate(EvaluationResult::PENDING, true, checked),
            SubmitGate::Allowed
        );
        assert_eq!(
            submit_gate(EvaluationResult::PENDING, false, unchecked),
            SubmitGate::Allowed
        );
    }
}
