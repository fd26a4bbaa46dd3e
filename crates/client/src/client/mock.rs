//! In-process control plane for client tests.

use std::collections::HashMap;

use axum::{extract::Query, http::StatusCode, Router};
use dataexplorer_core::arm::AccountRef;
use tokio::net::TcpListener;
use uuid::Uuid;

use super::ArmClient;

pub(crate) const TEST_API_VERSION: &str = "2020-04-01";
pub(crate) const TEST_SUBSCRIPTION: &str = "00000000-0000-0000-0000-000000000001";

pub(crate) fn test_account() -> AccountRef {
    AccountRef::new(
        Uuid::parse_str(TEST_SUBSCRIPTION).expect("valid uuid"),
        "rg",
        "acct",
    )
}

/// Route of the test account, followed by `suffix`.
pub(crate) fn account_route(suffix: &str) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/rg/providers/Microsoft.DocumentDB/databaseAccounts/acct{}",
        TEST_SUBSCRIPTION, suffix
    )
}

/// Route of container `db/coll` in the test account, followed by `suffix`.
pub(crate) fn container_route(suffix: &str) -> String {
    account_route(&format!("/sqlDatabases/db/containers/coll{}", suffix))
}

/// Rejects requests that do not carry the expected `api-version`.
pub(crate) fn check_api_version(
    Query(params): Query<HashMap<String, String>>,
) -> Result<(), StatusCode> {
    match params.get("api-version").map(String::as_str) {
        Some(TEST_API_VERSION) => Ok(()),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

/// Serves `router` on an ephemeral port and returns a client pointed at it.
pub(crate) async fn spawn(router: Router) -> ArmClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    ArmClient::new(&format!("http://{}", addr), TEST_API_VERSION).expect("client")
}
