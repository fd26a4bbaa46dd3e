mod acknowledgement;
mod autoscale;
mod edit;
mod engine;
mod error;
mod mode;
mod plan;
mod pricing;
mod types;

pub use acknowledgement::{
    submit_gate, SpendAcknowledgement, SpendPolicy, SubmitGate, ThresholdSpendPolicy,
    DEFAULT_SPEND_ACK_THRESHOLD,
};
pub use autoscale::{
    AutoscaleSteps, AutoscaleValidator, AUTOSCALE_INCREMENT, MIN_AUTOSCALE_THROUGHPUT,
};
pub use edit::{on_field_edit, parse_throughput_input, ZERO_THROUGHPUT};
pub use engine::{authoritative_target, evaluate, has_mode_changed, is_dirty};
pub use error::ThroughputError;
pub use mode::{input_state, mode_override, InputField, InputState, ModeOverride};
pub use plan::{discard, plan_save, SavePlan};
pub use pricing::{
    estimate_for_config, estimate_spend, hourly_price, multi_master_multiplier, region_multiplier,
    Cloud, SpendEstimate, AUTOSCALE_PRICE_MULTIPLIER, HOURS_PER_DAY, HOURS_PER_MONTH,
};
pub use types::{
    EvaluationResult, FieldEdit, ThroughputConfiguration, ThroughputMode, ABSOLUTE_CAP,
};

#[cfg(test)]
mod properties;
