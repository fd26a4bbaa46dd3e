//! Resource paths for the control-plane API.
//!
//! Paths are kept as raw segments so the HTTP layer can percent-encode each
//! one. `Display` renders the unencoded path for logs and tests.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::throughput::ThroughputMode;

const PROVIDER: &str = "Microsoft.DocumentDB";

/// A control-plane path as a list of unencoded segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one segment.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Identifies a database account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    pub subscription_id: Uuid,
    pub resource_group: String,
    pub account_name: String,
}

impl AccountRef {
    pub fn new(
        subscription_id: Uuid,
        resource_group: impl Into<String>,
        account_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id,
            resource_group: resource_group.into(),
            account_name: account_name.into(),
        }
    }

    /// Parses an account resource id.
    ///
    /// Segment names are matched case-insensitively; anything after the
    /// account name is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataexplorer_core::arm::AccountRef;
    ///
    /// let id = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg\
    ///           /providers/Microsoft.DocumentDB/databaseAccounts/acct";
    /// let account = AccountRef::from_resource_id(id).unwrap();
    /// assert_eq!(account.resource_group, "rg");
    /// assert_eq!(account.account_name, "acct");
    ///
    /// assert!(AccountRef::from_resource_id("/subscriptions/not-a-guid").is_none());
    /// ```
    pub fn from_resource_id(id: &str) -> Option<Self> {
        let mut parts = id.trim_matches('/').split('/');

        expect_segment(parts.next(), "subscriptions")?;
        let subscription_id = Uuid::parse_str(parts.next()?).ok()?;
        expect_segment(parts.next(), "resourceGroups")?;
        let resource_group = non_empty(parts.next())?;
        expect_segment(parts.next(), "providers")?;
        expect_segment(parts.next(), PROVIDER)?;
        expect_segment(parts.next(), "databaseAccounts")?;
        let account_name = non_empty(parts.next())?;

        Some(Self::new(subscription_id, resource_group, account_name))
    }

    /// Returns a reference to a SQL container inside this account.
    pub fn container(
        &self,
        database: impl Into<String>,
        container: impl Into<String>,
    ) -> ContainerRef {
        ContainerRef {
            account: self.clone(),
            database: database.into(),
            container: container.into(),
        }
    }
}

fn expect_segment(actual: Option<&str>, expected: &str) -> Option<()> {
    actual
        .filter(|segment| segment.eq_ignore_ascii_case(expected))
        .map(|_| ())
}

fn non_empty(segment: Option<&str>) -> Option<&str> {
    segment.filter(|s| !s.is_empty())
}

/// Identifies a SQL container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRef {
    pub account: AccountRef,
    pub database: String,
    pub container: String,
}

/// Identifies a collection inside one region, by resource ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRegionRef {
    pub account: AccountRef,
    pub region: String,
    pub database_rid: String,
    pub collection_rid: String,
}

/// POST/GET actions addressed below an account path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    FailoverPriorityChange,
    ListKeys,
    ListConnectionStrings,
    OfflineRegion,
    OnlineRegion,
    ReadOnlyKeys,
    RegenerateKey,
    Metrics,
    Usages,
    MetricDefinitions,
}

impl AccountAction {
    pub fn segment(self) -> &'static str {
        match self {
            AccountAction::FailoverPriorityChange => "failoverPriorityChange",
            AccountAction::ListKeys => "listKeys",
            AccountAction::ListConnectionStrings => "listConnectionStrings",
            AccountAction::OfflineRegion => "offlineRegion",
            AccountAction::OnlineRegion => "onlineRegion",
            AccountAction::ReadOnlyKeys => "readonlykeys",
            AccountAction::RegenerateKey => "regenerateKey",
            AccountAction::Metrics => "metrics",
            AccountAction::Usages => "usages",
            AccountAction::MetricDefinitions => "metricDefinitions",
        }
    }
}

/// `/subscriptions/{sub}/providers/Microsoft.DocumentDB/databaseAccounts`
pub fn subscription_accounts_path(subscription_id: Uuid) -> ResourcePath {
    ResourcePath::new()
        .push("subscriptions")
        .push(subscription_id.to_string())
        .push("providers")
        .push(PROVIDER)
        .push("databaseAccounts")
}

/// `/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.DocumentDB/databaseAccounts`
pub fn resource_group_accounts_path(subscription_id: Uuid, resource_group: &str) -> ResourcePath {
    ResourcePath::new()
        .push("subscriptions")
        .push(subscription_id.to_string())
        .push("resourceGroups")
        .push(resource_group)
        .push("providers")
        .push(PROVIDER)
        .push("databaseAccounts")
}

/// Path of a single database account.
pub fn account_path(account: &AccountRef) -> ResourcePath {
    resource_group_accounts_path(account.subscription_id, &account.resource_group)
        .push(account.account_name.as_str())
}

/// Path of an action below a database account.
pub fn account_action_path(account: &AccountRef, action: AccountAction) -> ResourcePath {
    account_path(account).push(action.segment())
}

/// `/providers/Microsoft.DocumentDB/databaseAccountNames/{name}`
pub fn account_name_path(account_name: &str) -> ResourcePath {
    ResourcePath::new()
        .push("providers")
        .push(PROVIDER)
        .push("databaseAccountNames")
        .push(account_name)
}

/// Metrics of one collection in one region.
pub fn collection_region_metrics_path(collection: &CollectionRegionRef) -> ResourcePath {
    account_path(&collection.account)
        .push("region")
        .push(collection.region.as_str())
        .push("databases")
        .push(collection.database_rid.as_str())
        .push("collections")
        .push(collection.collection_rid.as_str())
        .push("metrics")
}

fn container_path(container: &ContainerRef) -> ResourcePath {
    account_path(&container.account)
        .push("sqlDatabases")
        .push(container.database.as_str())
        .push("containers")
        .push(container.container.as_str())
}

/// Default throughput settings of a container.
pub fn container_throughput_path(container: &ContainerRef) -> ResourcePath {
    container_path(container)
        .push("throughputSettings")
        .push("default")
}

/// Migration endpoint that switches a container to `target` mode.
pub fn container_throughput_migration_path(
    container: &ContainerRef,
    target: ThroughputMode,
) -> ResourcePath {
    let action = match target {
        ThroughputMode::Autoscale => "migrateToAutoscale",
        ThroughputMode::Manual => "migrateToManualThroughput",
    };
    container_throughput_path(container).push(action)
}

/// Path of a trigger on a container.
pub fn container_trigger_path(container: &ContainerRef, trigger_id: &str) -> ResourcePath {
    container_path(container).push("triggers").push(trigger_id)
}
