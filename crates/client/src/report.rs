//! Everything the engine says about one snapshot, for display.

use dataexplorer_core::throughput::{
    evaluate, input_state, mode_override, plan_save, submit_gate, AutoscaleValidator,
    EvaluationResult, InputState, ModeOverride, SavePlan, SpendAcknowledgement, SpendPolicy,
    SubmitGate, ThroughputConfiguration,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThroughputReport {
    pub configuration: ThroughputConfiguration,
    pub evaluation: EvaluationResult,
    pub mode_override: Option<ModeOverride>,
    pub input: InputState,
    pub gate: SubmitGate,
    pub plan: Option<SavePlan>,
}

impl ThroughputReport {
    pub fn build<V, P>(
        config: &ThroughputConfiguration,
        acknowledgement: SpendAcknowledgement,
        validator: &V,
        policy: &P,
    ) -> Self
    where
        V: AutoscaleValidator + ?Sized,
        P: SpendPolicy + ?Sized,
    {
        let evaluation = evaluate(config, validator);
        let gate = submit_gate(
            evaluation,
            policy.requires_acknowledgement(config),
            acknowledgement,
        );
        Self {
            configuration: config.clone(),
            evaluation,
            mode_override: mode_override(config),
            input: input_state(config, policy),
            gate,
            plan: plan_save(config, validator),
        }
    }
}
