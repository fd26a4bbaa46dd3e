//! Service notifications.

use dataexplorer_core::arm::ResourcePath;
use dataexplorer_core::notification::Notification;
use tracing::debug;

use super::ArmClient;
use crate::error::Result;

fn notifications_path() -> ResourcePath {
    ResourcePath::new()
        .push("api")
        .push("guest")
        .push("notifications")
}

impl ArmClient {
    /// List the notifications published for the signed-in user.
    ///
    /// This endpoint is not versioned, so no `api-version` is sent.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>> {
        let path = notifications_path();
        let url = self.unversioned_url(path.segments())?;
        debug!(%path, "Fetching notifications");
        let response = self.client.get(url).send().await?;
        self.handle_response(&path, response).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use dataexplorer_core::notification::NotificationKind;
    use serde_json::json;

    use super::*;
    use crate::client::mock::spawn;

    #[tokio::test]
    async fn test_list_notifications_without_api_version() {
        let router = Router::new().route(
            "/api/guest/notifications",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                if params.contains_key("api-version") {
                    return Err(StatusCode::BAD_REQUEST);
                }
                Ok(Json(json!([{
                    "id": "n1",
                    "kind": "Warning",
                    "description": "Maintenance window",
                    "accountName": "acct",
                    "endDateUtc": "2030-01-01T00:00:00Z"
                }])))
            }),
        );
        let client = spawn(router).await;

        let notifications = client.list_notifications().await.unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Warning);
        assert_eq!(notifications[0].account_name.as_deref(), Some("acct"));
    }
}
