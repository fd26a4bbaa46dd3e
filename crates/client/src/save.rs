//! Saving an edited throughput snapshot.
//!
//! The order is always evaluate, gate, plan, execute. Nothing reaches the
//! store unless the snapshot is saveable and any required spend
//! acknowledgement was given. Failed requests are not retried.

use dataexplorer_core::arm::{
    ApiError, ContainerRef, ThroughputSettingsGetResults, ThroughputSettingsUpdateParameters,
    ThroughputStore,
};
use dataexplorer_core::notification::NotificationSink;
use dataexplorer_core::throughput::{
    evaluate, plan_save, submit_gate, AutoscaleSteps, AutoscaleValidator, SavePlan,
    SpendAcknowledgement, SpendPolicy, SubmitGate, ThresholdSpendPolicy, ThroughputConfiguration,
};
use serde::Serialize;
use tracing::{error, info};

use crate::error::SaveError;

/// What a successful save did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    pub plan: SavePlan,
    pub settings: ThroughputSettingsGetResults,
}

/// Persists throughput edits through a [`ThroughputStore`].
pub struct ThroughputSaver<'a, S: ?Sized, V = AutoscaleSteps, P = ThresholdSpendPolicy> {
    store: &'a S,
    sink: &'a dyn NotificationSink,
    validator: V,
    policy: P,
}

impl<'a, S> ThroughputSaver<'a, S>
where
    S: ThroughputStore + ?Sized,
{
    /// Uses the default autoscale steps and spend threshold.
    pub fn new(store: &'a S, sink: &'a dyn NotificationSink) -> Self {
        Self {
            store,
            sink,
            validator: AutoscaleSteps::default(),
            policy: ThresholdSpendPolicy::default(),
        }
    }
}

impl<'a, S, V, P> ThroughputSaver<'a, S, V, P>
where
    S: ThroughputStore + ?Sized,
    V: AutoscaleValidator,
    P: SpendPolicy,
{
    pub fn with_validator<V2: AutoscaleValidator>(
        self,
        validator: V2,
    ) -> ThroughputSaver<'a, S, V2, P> {
        ThroughputSaver {
            store: self.store,
            sink: self.sink,
            validator,
            policy: self.policy,
        }
    }

    pub fn with_policy<P2: SpendPolicy>(self, policy: P2) -> ThroughputSaver<'a, S, V, P2> {
        ThroughputSaver {
            store: self.store,
            sink: self.sink,
            validator: self.validator,
            policy,
        }
    }

    /// Saves `config` for `container` and returns the persisted settings.
    pub async fn save(
        &self,
        container: &ContainerRef,
        config: &ThroughputConfiguration,
        acknowledgement: SpendAcknowledgement,
    ) -> Result<SaveOutcome, SaveError> {
        let result = evaluate(config, &self.validator);
        let required = self.policy.requires_acknowledgement(config);
        match submit_gate(result, required, acknowledgement) {
            SubmitGate::Allowed => {}
            SubmitGate::NotSaveable => return Err(SaveError::NotSaveable),
            SubmitGate::AcknowledgementRequired => return Err(SaveError::AcknowledgementRequired),
        }
        let plan = plan_save(config, &self.validator).ok_or(SaveError::NotSaveable)?;

        info!(
            database = %container.database,
            container = %container.container,
            ?plan,
            "Saving throughput"
        );

        let settings = self
            .execute(container, plan)
            .await
            .map_err(|e| self.report(container, e))?;

        info!(
            database = %container.database,
            container = %container.container,
            "Throughput saved"
        );
        Ok(SaveOutcome { plan, settings })
    }

    async fn execute(
        &self,
        container: &ContainerRef,
        plan: SavePlan,
    ) -> Result<ThroughputSettingsGetResults, ApiError> {
        match plan {
            SavePlan::SetManual { throughput } => {
                self.store
                    .update_throughput(
                        container,
                        &ThroughputSettingsUpdateParameters::manual(throughput),
                    )
                    .await
            }
            SavePlan::SetAutoscaleMax { max_throughput } => {
                self.store
                    .update_throughput(
                        container,
                        &ThroughputSettingsUpdateParameters::autoscale(max_throughput),
                    )
                    .await
            }
            SavePlan::Migrate {
                from,
                to,
                pending_update,
            } => {
                if let Some(value) = pending_update {
                    self.store
                        .update_throughput(
                            container,
                            &ThroughputSettingsUpdateParameters::for_mode(from, value),
                        )
                        .await?;
                }
                self.store.migrate_throughput(container, to).await
            }
        }
    }

    fn report(&self, container: &ContainerRef, e: ApiError) -> SaveError {
        error!(
            database = %container.database,
            container = %container.container,
            error = %e,
            "Failed to save throughput"
        );
        self.sink.notify_error(&format!(
            "Failed to update throughput for {}/{}: {}",
            container.database, container.container, e
        ));
        SaveError::Api(e)
    }
}
