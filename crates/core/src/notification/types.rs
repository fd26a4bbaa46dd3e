use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a service notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

/// A notification published by the service for an account or resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub description: String,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default)]
    pub end_date_utc: Option<DateTime<Utc>>,
}

impl Notification {
    /// A notification without an end date never expires.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date_utc.is_none_or(|end| end > now)
    }

    /// Returns true when the notification is scoped to the given collection.
    pub fn applies_to(&self, database: &str, collection: &str) -> bool {
        self.database_name.as_deref() == Some(database)
            && self.collection_name.as_deref() == Some(collection)
    }
}

/// Keeps the notifications that have not expired at `now`.
pub fn filter_active(notifications: &[Notification], now: DateTime<Utc>) -> Vec<&Notification> {
    notifications
        .iter()
        .filter(|notification| notification.is_active_at(now))
        .collect()
}
