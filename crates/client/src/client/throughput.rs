//! Container throughput settings.

use async_trait::async_trait;
use dataexplorer_core::arm::{
    container_throughput_migration_path, container_throughput_path, ApiError, ContainerRef,
    ThroughputSettingsGetResults, ThroughputSettingsUpdateParameters, ThroughputStore,
};
use dataexplorer_core::throughput::ThroughputMode;
use reqwest::Method;

use super::ArmClient;
use crate::error::Result;

impl ArmClient {
    /// Get the throughput settings of a container.
    pub async fn get_container_throughput(
        &self,
        container: &ContainerRef,
    ) -> Result<ThroughputSettingsGetResults> {
        let path = container_throughput_path(container);
        let response = self.request(Method::GET, &path)?.send().await?;
        self.handle_response(&path, response).await
    }

    /// Replace the throughput of a container within its current mode.
    pub async fn update_container_throughput(
        &self,
        container: &ContainerRef,
        params: &ThroughputSettingsUpdateParameters,
    ) -> Result<ThroughputSettingsGetResults> {
        let path = container_throughput_path(container);
        let response = self.request(Method::PUT, &path)?.json(params).send().await?;
        self.handle_response(&path, response).await
    }

    /// Migrate a manual container to autoscale.
    pub async fn migrate_container_to_autoscale(
        &self,
        container: &ContainerRef,
    ) -> Result<ThroughputSettingsGetResults> {
        self.migrate_container(container, ThroughputMode::Autoscale)
            .await
    }

    /// Migrate an autoscale container to manual throughput.
    pub async fn migrate_container_to_manual(
        &self,
        container: &ContainerRef,
    ) -> Result<ThroughputSettingsGetResults> {
        self.migrate_container(container, ThroughputMode::Manual)
            .await
    }

    async fn migrate_container(
        &self,
        container: &ContainerRef,
        target: ThroughputMode,
    ) -> Result<ThroughputSettingsGetResults> {
        let path = container_throughput_migration_path(container, target);
        let response = self.request(Method::POST, &path)?.send().await?;
        self.handle_response(&path, response).await
    }
}

#[async_trait]
impl ThroughputStore for ArmClient {
    async fn get_throughput(
        &self,
        container: &ContainerRef,
    ) -> std::result::Result<ThroughputSettingsGetResults, ApiError> {
        Ok(self.get_container_throughput(container).await?)
    }

    async fn update_throughput(
        &self,
        container: &ContainerRef,
        params: &ThroughputSettingsUpdateParameters,
    ) -> std::result::Result<ThroughputSettingsGetResults, ApiError> {
        Ok(self.update_container_throughput(container, params).await?)
    }

    async fn migrate_throughput(
        &self,
        container: &ContainerRef,
        target: ThroughputMode,
    ) -> std::result::Result<ThroughputSettingsGetResults, ApiError> {
        Ok(self.migrate_container(container, target).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::client::mock::{container_route, spawn, test_account};

    fn container() -> ContainerRef {
        test_account().container("db", "coll")
    }

    #[tokio::test]
    async fn test_get_container_throughput() {
        let router = Router::new().route(
            &container_route("/throughputSettings/default"),
            get(|| async {
                Json(json!({
                    "name": "default",
                    "properties": {
                        "resource": {
                            "autoscaleSettings": {"maxThroughput": 4000},
                            "minimumThroughput": "400"
                        }
                    }
                }))
            }),
        );
        let client = spawn(router).await;

        let settings = client.get_container_throughput(&container()).await.unwrap();
        assert_eq!(settings.resource().mode(), ThroughputMode::Autoscale);
        assert_eq!(settings.resource().minimum(), Some(400));
    }

    #[tokio::test]
    async fn test_update_container_throughput_sends_resource() {
        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let router = Router::new().route(
            &container_route("/throughputSettings/default"),
            axum::routing::put(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body.clone());
                    Json(body)
                }
            }),
        );
        let client = spawn(router).await;

        let settings = client
            .update_container_throughput(
                &container(),
                &ThroughputSettingsUpdateParameters::manual(800),
            )
            .await
            .unwrap();

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(body["properties"]["resource"]["throughput"], json!(800));
        assert_eq!(settings.resource().throughput, Some(800));
    }

    #[tokio::test]
    async fn test_store_migrates_through_mode_specific_endpoint() {
        let router = Router::new()
            .route(
                &container_route("/throughputSettings/default/migrateToAutoscale"),
                post(|| async {
                    Json(json!({
                        "properties": {"resource": {"autoscaleSettings": {"maxThroughput": 4000}}}
                    }))
                }),
            )
            .route(
                &container_route("/throughputSettings/default/migrateToManualThroughput"),
                post(|| async {
                    Json(json!({"properties": {"resource": {"throughput": 400}}}))
                }),
            );
        let client = spawn(router).await;

        let settings = client
            .migrate_throughput(&container(), ThroughputMode::Autoscale)
            .await
            .unwrap();
        assert_eq!(settings.resource().mode(), ThroughputMode::Autoscale);

        let settings = client
            .migrate_container_to_manual(&container())
            .await
            .unwrap();
        assert_eq!(settings.resource().mode(), ThroughputMode::Manual);
    }

    #[tokio::test]
    async fn test_store_maps_missing_container() {
        let client = spawn(Router::new()).await;

        let error = client.get_throughput(&container()).await.unwrap_err();
        assert!(error.is_not_found());
    }
}
