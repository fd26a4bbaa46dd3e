//! Server-side triggers.

use dataexplorer_core::arm::{
    container_trigger_path, ContainerRef, SqlTriggerCreateUpdateParameters, SqlTriggerGetResults,
};
use dataexplorer_core::notification::NotificationSink;
use reqwest::Method;
use tracing::{error, info};

use super::ArmClient;
use crate::error::Result;

impl ArmClient {
    /// Create or replace a trigger on a container.
    ///
    /// Failures are logged and reported to `sink` before being returned.
    pub async fn create_trigger(
        &self,
        container: &ContainerRef,
        params: &SqlTriggerCreateUpdateParameters,
        sink: &dyn NotificationSink,
    ) -> Result<SqlTriggerGetResults> {
        let trigger_id = params.trigger_id();
        info!(
            database = %container.database,
            container = %container.container,
            "Creating trigger {}",
            trigger_id
        );

        match self.put_trigger(container, params).await {
            Ok(trigger) => {
                info!("Successfully created trigger {}", trigger_id);
                Ok(trigger)
            }
            Err(e) => {
                error!(error = %e, "Error while creating trigger {}", trigger_id);
                sink.notify_error(&format!(
                    "Error while creating trigger {}: {}",
                    trigger_id, e
                ));
                Err(e)
            }
        }
    }

    async fn put_trigger(
        &self,
        container: &ContainerRef,
        params: &SqlTriggerCreateUpdateParameters,
    ) -> Result<SqlTriggerGetResults> {
        let path = container_trigger_path(container, params.trigger_id());
        let response = self.request(Method::PUT, &path)?.json(params).send().await?;
        self.handle_response(&path, response).await
    }
}
