//! Database account operations.

use async_trait::async_trait;
use dataexplorer_core::arm::{
    account_action_path, account_name_path, account_path, resource_group_accounts_path,
    subscription_accounts_path, AccountAction, AccountApi, AccountRef, ApiError,
    DatabaseAccountCreateUpdateParameters, DatabaseAccountGetResults,
    DatabaseAccountListConnectionStringsResult, DatabaseAccountListKeysResult,
    DatabaseAccountListReadOnlyKeysResult, DatabaseAccountRegenerateKeyParameters,
    DatabaseAccountUpdateParameters, DatabaseAccountsListResult, FailoverPolicies, KeyKind,
    MetricDefinitionsListResult, MetricListResult, RegionForOnlineOffline, UsagesResult,
};
use reqwest::{Method, StatusCode};
use uuid::Uuid;

use super::{error_from_response, ArmClient};
use crate::error::Result;

impl ArmClient {
    /// Get a database account.
    pub async fn get_database_account(
        &self,
        account: &AccountRef,
    ) -> Result<DatabaseAccountGetResults> {
        let path = account_path(account);
        let response = self.request(Method::GET, &path)?.send().await?;
        self.handle_response(&path, response).await
    }

    /// Patch an existing database account.
    pub async fn update_database_account(
        &self,
        account: &AccountRef,
        params: &DatabaseAccountUpdateParameters,
    ) -> Result<DatabaseAccountGetResults> {
        let path = account_path(account);
        let response = self
            .request(Method::PATCH, &path)?
            .json(params)
            .send()
            .await?;
        self.handle_response(&path, response).await
    }

    /// Create or replace a database account.
    pub async fn create_or_update_database_account(
        &self,
        account: &AccountRef,
        params: &DatabaseAccountCreateUpdateParameters,
    ) -> Result<DatabaseAccountGetResults> {
        let path = account_path(account);
        let response = self.request(Method::PUT, &path)?.json(params).send().await?;
        self.handle_response(&path, response).await
    }

    /// Delete a database account.
    pub async fn delete_database_account(&self, account: &AccountRef) -> Result<()> {
        let path = account_path(account);
        let response = self.request(Method::DELETE, &path)?.send().await?;
        self.handle_empty_response(&path, response).await
    }

    /// Change the failover priority of the account's regions.
    pub async fn change_failover_priority(
        &self,
        account: &AccountRef,
        policies: &FailoverPolicies,
    ) -> Result<()> {
        let path = account_action_path(account, AccountAction::FailoverPriorityChange);
        let response = self
            .request(Method::POST, &path)?
            .json(policies)
            .send()
            .await?;
        self.handle_empty_response(&path, response).await
    }

    /// List all database accounts in a subscription.
    pub async fn list_database_accounts(
        &self,
        subscription_id: Uuid,
    ) -> Result<DatabaseAccountsListResult> {
        let path = subscription_accounts_path(subscription_id);
        let response = self.request(Method::GET, &path)?.send().await?;
        self.handle_response(&path, response).await
    }

    /// List database accounts in a resource group.
    pub async fn list_database_accounts_by_resource_group(
        &self,
        subscription_id: Uuid,
        resource_group: &str,
    ) -> Result<DatabaseAccountsListResult> {
        let path = resource_group_accounts_path(subscription_id, resource_group);
        let response = self.request(Method::GET, &path)?.send().await?;
        self.handle_response(&path, response).await
    }

    /// List the access keys of an account.
    pub async fn list_keys(&self, account: &AccountRef) -> Result<DatabaseAccountListKeysResult> {
        self.post_action(account, AccountAction::ListKeys).await
    }

    /// List the connection strings of an account.
    pub async fn list_connection_strings(
        &self,
        account: &AccountRef,
    ) -> Result<DatabaseAccountListConnectionStringsResult> {
        self.post_action(account, AccountAction::ListConnectionStrings)
            .await
    }

    /// Take a region offline.
    pub async fn offline_region(&self, account: &AccountRef, region: &str) -> Result<()> {
        self.region_action(account, AccountAction::OfflineRegion, region)
            .await
    }

    /// Bring a region back online.
    pub async fn online_region(&self, account: &AccountRef, region: &str) -> Result<()> {
        self.region_action(account, AccountAction::OnlineRegion, region)
            .await
    }

    /// Get the read-only keys of an account.
    pub async fn get_read_only_keys(
        &self,
        account: &AccountRef,
    ) -> Result<DatabaseAccountListReadOnlyKeysResult> {
        let path = account_action_path(account, AccountAction::ReadOnlyKeys);
        let response = self.request(Method::GET, &path)?.send().await?;
        self.handle_response(&path, response).await
    }

    /// List the read-only keys of an account.
    pub async fn list_read_only_keys(
        &self,
        account: &AccountRef,
    ) -> Result<DatabaseAccountListReadOnlyKeysResult> {
        self.post_action(account, AccountAction::ReadOnlyKeys).await
    }

    /// Regenerate one of the account keys.
    pub async fn regenerate_key(&self, account: &AccountRef, key_kind: KeyKind) -> Result<()> {
        let path = account_action_path(account, AccountAction::RegenerateKey);
        let response = self
            .request(Method::POST, &path)?
            .json(&DatabaseAccountRegenerateKeyParameters { key_kind })
            .send()
            .await?;
        self.handle_empty_response(&path, response).await
    }

    /// Check whether an account name is already taken.
    pub async fn check_name_exists(&self, account_name: &str) -> Result<bool> {
        let path = account_name_path(account_name);
        let response = self.request(Method::HEAD, &path)?.send().await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(error_from_response(&path, response).await),
        }
    }

    /// List account metrics matching an OData `$filter`.
    pub async fn list_metrics(
        &self,
        account: &AccountRef,
        filter: &str,
    ) -> Result<MetricListResult> {
        let path = account_action_path(account, AccountAction::Metrics);
        let response = self
            .request_with_query(Method::GET, &path, &[("$filter", filter)])?
            .send()
            .await?;
        self.handle_response(&path, response).await
    }

    /// List account usages, optionally filtered.
    pub async fn list_usages(
        &self,
        account: &AccountRef,
        filter: Option<&str>,
    ) -> Result<UsagesResult> {
        let path = account_action_path(account, AccountAction::Usages);
        let query: Vec<(&str, &str)> = filter.map(|f| ("$filter", f)).into_iter().collect();
        let response = self
            .request_with_query(Method::GET, &path, &query)?
            .send()
            .await?;
        self.handle_response(&path, response).await
    }

    /// List the metric definitions of an account.
    pub async fn list_metric_definitions(
        &self,
        account: &AccountRef,
    ) -> Result<MetricDefinitionsListResult> {
        let path = account_action_path(account, AccountAction::MetricDefinitions);
        let response = self.request(Method::GET, &path)?.send().await?;
        self.handle_response(&path, response).await
    }

    async fn post_action<T: serde::de::DeserializeOwned>(
        &self,
        account: &AccountRef,
        action: AccountAction,
    ) -> Result<T> {
        let path = account_action_path(account, action);
        let response = self.request(Method::POST, &path)?.send().await?;
        self.handle_response(&path, response).await
    }

    async fn region_action(
        &self,
        account: &AccountRef,
        action: AccountAction,
        region: &str,
    ) -> Result<()> {
        let path = account_action_path(account, action);
        let response = self
            .request(Method::POST, &path)?
            .json(&RegionForOnlineOffline {
                region: region.to_string(),
            })
            .send()
            .await?;
        self.handle_empty_response(&path, response).await
    }
}

#[async_trait]
impl AccountApi for ArmClient {
    async fn create_account(
        &self,
        account: &AccountRef,
        params: &DatabaseAccountCreateUpdateParameters,
    ) -> std::result::Result<DatabaseAccountGetResults, ApiError> {
        Ok(self
            .create_or_update_database_account(account, params)
            .await?)
    }

    async fn update_account(
        &self,
        account: &AccountRef,
        params: &DatabaseAccountUpdateParameters,
    ) -> std::result::Result<DatabaseAccountGetResults, ApiError> {
        Ok(self.update_database_account(account, params).await?)
    }

    async fn get_account(
        &self,
        account: &AccountRef,
    ) -> std::result::Result<DatabaseAccountGetResults, ApiError> {
        Ok(self.get_database_account(account).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::{get, head, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::client::mock::{account_route, check_api_version, spawn, test_account};
    use crate::error::ClientError;

    fn account_body() -> Value {
        json!({
            "id": account_route(""),
            "name": "acct",
            "location": "West US",
            "kind": "GlobalDocumentDB",
            "properties": {
                "documentEndpoint": "https://acct.documents.azure.com:443/",
                "enableMultipleWriteLocations": true,
                "readLocations": [
                    {"locationName": "West US", "failoverPriority": 0},
                    {"locationName": "East US", "failoverPriority": 1}
                ]
            }
        })
    }

    #[tokio::test]
    async fn test_get_account() {
        let router = Router::new().route(
            &account_route(""),
            get(|query: Query<HashMap<String, String>>| async move {
                check_api_version(query)?;
                Ok::<_, StatusCode>(Json(account_body()))
            }),
        );
        let client = spawn(router).await;

        let account = client.get_database_account(&test_account()).await.unwrap();
        assert_eq!(account.name.as_deref(), Some("acct"));
        assert_eq!(account.region_count(), 2);
        assert!(account.is_multi_master());
    }

    #[tokio::test]
    async fn test_missing_account_is_not_found() {
        let client = spawn(Router::new()).await;

        let error = client
            .get_database_account(&test_account())
            .await
            .unwrap_err();
        match error {
            ClientError::NotFound { resource } => assert_eq!(resource, account_route("")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_message() {
        let router = Router::new().route(
            &account_route(""),
            get(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"error": {"code": "Conflict", "message": "busy"}})),
                )
            }),
        );
        let client = spawn(router).await;

        let error = client
            .get_database_account(&test_account())
            .await
            .unwrap_err();
        match error {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Conflict: busy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_account_api_maps_errors() {
        let client = spawn(Router::new()).await;

        let error = AccountApi::get_account(&client, &test_account())
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_update_sends_patch_body() {
        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let router = Router::new().route(
            &account_route(""),
            axum::routing::patch(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    Json(account_body())
                }
            }),
        );
        let client = spawn(router).await;

        let params = DatabaseAccountUpdateParameters {
            tags: Some(HashMap::from([("env".to_string(), "dev".to_string())])),
            ..Default::default()
        };
        client
            .update_database_account(&test_account(), &params)
            .await
            .unwrap();

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(body, json!({"tags": {"env": "dev"}}));
    }

    #[tokio::test]
    async fn test_check_name_exists() {
        let router = Router::new().route(
            "/providers/Microsoft.DocumentDB/databaseAccountNames/{name}",
            head(|Path(name): Path<String>| async move {
                if name == "taken" {
                    StatusCode::OK
                } else {
                    StatusCode::NOT_FOUND
                }
            }),
        );
        let client = spawn(router).await;

        assert!(client.check_name_exists("taken").await.unwrap());
        assert!(!client.check_name_exists("free").await.unwrap());
    }

    #[tokio::test]
    async fn test_check_name_exists_surfaces_other_statuses() {
        let router = Router::new().route(
            "/providers/Microsoft.DocumentDB/databaseAccountNames/{name}",
            head(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = spawn(router).await;

        let error = client.check_name_exists("any").await.unwrap_err();
        assert!(matches!(error, ClientError::ServerError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_list_keys_posts_action() {
        let router = Router::new().route(
            &account_route("/listKeys"),
            post(|| async {
                Json(json!({
                    "primaryMasterKey": "pk",
                    "secondaryMasterKey": "sk"
                }))
            }),
        );
        let client = spawn(router).await;

        let keys = client.list_keys(&test_account()).await.unwrap();
        assert_eq!(keys.primary_master_key.as_deref(), Some("pk"));
        assert_eq!(keys.primary_readonly_master_key, None);
    }

    #[tokio::test]
    async fn test_read_only_keys_get_and_post() {
        let router = Router::new().route(
            &account_route("/readonlykeys"),
            get(|| async { Json(json!({"primaryReadonlyMasterKey": "from-get"})) })
                .post(|| async { Json(json!({"primaryReadonlyMasterKey": "from-post"})) }),
        );
        let client = spawn(router).await;

        let keys = client.get_read_only_keys(&test_account()).await.unwrap();
        assert_eq!(keys.primary_readonly_master_key.as_deref(), Some("from-get"));

        let keys = client.list_read_only_keys(&test_account()).await.unwrap();
        assert_eq!(keys.primary_readonly_master_key.as_deref(), Some("from-post"));
    }

    #[tokio::test]
    async fn test_offline_region_sends_region() {
        let router = Router::new().route(
            &account_route("/offlineRegion"),
            post(|Json(body): Json<Value>| async move {
                if body == json!({"region": "East US"}) {
                    StatusCode::ACCEPTED
                } else {
                    StatusCode::BAD_REQUEST
                }
            }),
        );
        let client = spawn(router).await;

        client
            .offline_region(&test_account(), "East US")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_metrics_sends_filter() {
        let router = Router::new().route(
            &account_route("/metrics"),
            get(|Query(params): Query<HashMap<String, String>>| async move {
                match params.get("$filter").map(String::as_str) {
                    Some("name.value eq 'Total Requests'") => Ok(Json(json!({
                        "value": [{
                            "unit": "Count",
                            "name": {"value": "Total Requests"},
                            "metricValues": [{"_count": 3.0, "total": 12.0}]
                        }]
                    }))),
                    _ => Err(StatusCode::BAD_REQUEST),
                }
            }),
        );
        let client = spawn(router).await;

        let metrics = client
            .list_metrics(&test_account(), "name.value eq 'Total Requests'")
            .await
            .unwrap();
        assert_eq!(metrics.value.len(), 1);
        assert_eq!(metrics.value[0].metric_values[0].count, Some(3.0));
    }
}
