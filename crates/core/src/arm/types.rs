//! Control-plane request and response bodies.
//!
//! Field names follow the wire format (camelCase). Only the fields the console
//! reads or writes are modelled; the rest are ignored on deserialization.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A region an account is replicated to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failover_priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_zone_redundant: Option<bool>,
}

impl Location {
    pub fn new(location_name: impl Into<String>, failover_priority: u32) -> Self {
        Self {
            location_name: location_name.into(),
            failover_priority: Some(failover_priority),
            ..Self::default()
        }
    }
}

/// Consistency settings of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyPolicy {
    pub default_consistency_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_staleness_prefix: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_interval_in_seconds: Option<u32>,
}

/// A feature flag enabled on an account (e.g. `EnableServerless`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountProperties {
    #[serde(default)]
    pub provisioning_state: Option<String>,
    #[serde(default)]
    pub document_endpoint: Option<String>,
    #[serde(default)]
    pub database_account_offer_type: Option<String>,
    #[serde(default)]
    pub consistency_policy: Option<ConsistencyPolicy>,
    #[serde(default)]
    pub enable_automatic_failover: Option<bool>,
    #[serde(default)]
    pub enable_multiple_write_locations: Option<bool>,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub write_locations: Vec<Location>,
    #[serde(default)]
    pub read_locations: Vec<Location>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub failover_policies: Vec<FailoverPolicy>,
}

/// A database account as returned by the control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountGetResults {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub properties: DatabaseAccountProperties,
}

impl DatabaseAccountGetResults {
    /// Number of regions the account can be read from (at least one).
    pub fn region_count(&self) -> u32 {
        u32::try_from(self.properties.read_locations.len())
            .unwrap_or(u32::MAX)
            .max(1)
    }

    pub fn is_multi_master(&self) -> bool {
        self.properties
            .enable_multiple_write_locations
            .unwrap_or(false)
    }

    pub fn has_capability(&self, name: &str) -> bool {
        self.properties
            .capabilities
            .iter()
            .any(|capability| capability.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseAccountsListResult {
    #[serde(default)]
    pub value: Vec<DatabaseAccountGetResults>,
}

/// PATCH body for an existing account. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountUpdateParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<DatabaseAccountUpdateProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountUpdateProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency_policy: Option<ConsistencyPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_automatic_failover: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_multiple_write_locations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<Capability>>,
}

/// PUT body for creating or replacing an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountCreateUpdateParameters {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    pub properties: DatabaseAccountCreateUpdateProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountCreateUpdateProperties {
    pub database_account_offer_type: String,
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency_policy: Option<ConsistencyPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_automatic_failover: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_multiple_write_locations: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<Capability>,
}

impl DatabaseAccountCreateUpdateParameters {
    /// A standard-offer account with a single write region.
    pub fn single_region(location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            location: location.clone(),
            kind: None,
            tags: HashMap::new(),
            properties: DatabaseAccountCreateUpdateProperties {
                database_account_offer_type: "Standard".to_string(),
                locations: vec![Location::new(location, 0)],
                consistency_policy: None,
                enable_automatic_failover: None,
                enable_multiple_write_locations: None,
                capabilities: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailoverPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub location_name: String,
    pub failover_priority: u32,
}

/// Body of a failover priority change. Priority 0 is the write region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailoverPolicies {
    pub failover_policies: Vec<FailoverPolicy>,
}

impl FailoverPolicies {
    /// Builds policies from regions listed in priority order.
    pub fn from_priority_order<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let failover_policies = regions
            .into_iter()
            .zip(0u32..)
            .map(|(location_name, failover_priority)| FailoverPolicy {
                id: None,
                location_name: location_name.into(),
                failover_priority,
            })
            .collect();
        Self { failover_policies }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionForOnlineOffline {
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountListKeysResult {
    #[serde(default)]
    pub primary_master_key: Option<String>,
    #[serde(default)]
    pub secondary_master_key: Option<String>,
    #[serde(default)]
    pub primary_readonly_master_key: Option<String>,
    #[serde(default)]
    pub secondary_readonly_master_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountListReadOnlyKeysResult {
    #[serde(default)]
    pub primary_readonly_master_key: Option<String>,
    #[serde(default)]
    pub secondary_readonly_master_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionString {
    pub connection_string: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountListConnectionStringsResult {
    #[serde(default)]
    pub connection_strings: Vec<ConnectionString>,
}

/// Which account key to regenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyKind {
    Primary,
    Secondary,
    PrimaryReadonly,
    SecondaryReadonly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountRegenerateKeyParameters {
    pub key_kind: KeyKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricName {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub localized_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    #[serde(default, rename = "_count")]
    pub count: Option<f64>,
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub maximum: Option<f64>,
    #[serde(default)]
    pub minimum: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_grain: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub name: Option<MetricName>,
    #[serde(default)]
    pub metric_values: Vec<MetricValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricListResult {
    #[serde(default)]
    pub value: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub name: Option<MetricName>,
    #[serde(default)]
    pub quota_period: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub current_value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagesResult {
    #[serde(default)]
    pub value: Vec<Usage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAvailability {
    #[serde(default)]
    pub time_grain: Option<String>,
    #[serde(default)]
    pub retention: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinition {
    #[serde(default)]
    pub metric_availabilities: Vec<MetricAvailability>,
    #[serde(default)]
    pub primary_aggregation_type: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub name: Option<MetricName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinitionsListResult {
    #[serde(default)]
    pub value: Vec<MetricDefinition>,
}
