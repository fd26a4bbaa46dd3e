//! Container throughput settings and triggers on the wire.

use serde::{Deserialize, Serialize};

use crate::throughput::{ThroughputConfiguration, ThroughputMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoscaleSettingsResource {
    pub max_throughput: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_max_throughput: Option<u64>,
}

/// Throughput of a resource. Exactly one of `throughput` and
/// `autoscale_settings` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThroughputSettingsResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscale_settings: Option<AutoscaleSettingsResource>,
    /// Sent by the service as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_throughput: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_replace_pending: Option<String>,
}

impl ThroughputSettingsResource {
    pub fn manual(throughput: u64) -> Self {
        Self {
            throughput: Some(throughput),
            ..Self::default()
        }
    }

    pub fn autoscale(max_throughput: u64) -> Self {
        Self {
            autoscale_settings: Some(AutoscaleSettingsResource {
                max_throughput,
                target_max_throughput: None,
            }),
            ..Self::default()
        }
    }

    /// Persisted mode. Autoscale settings win when both fields are present.
    pub fn mode(&self) -> ThroughputMode {
        if self.autoscale_settings.is_some() {
            ThroughputMode::Autoscale
        } else {
            ThroughputMode::Manual
        }
    }

    /// Minimum throughput reported by the service, if it parses.
    pub fn minimum(&self) -> Option<u64> {
        self.minimum_throughput
            .as_deref()
            .and_then(|value| value.trim().parse().ok())
    }

    /// Whether a previous change is still being applied.
    pub fn is_replace_pending(&self) -> bool {
        self.offer_replace_pending
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputSettingsProperties {
    pub resource: ThroughputSettingsResource,
}

/// Throughput settings as returned by the control plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputSettingsGetResults {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: ThroughputSettingsProperties,
}

impl ThroughputSettingsGetResults {
    pub fn resource(&self) -> &ThroughputSettingsResource {
        &self.properties.resource
    }

    /// Starts an edit session from the persisted settings.
    ///
    /// `fallback_minimum` is used when the service does not report a minimum.
    pub fn to_configuration(&self, fallback_minimum: u64, maximum: u64) -> ThroughputConfiguration {
        let resource = self.resource();
        let minimum = resource.minimum().unwrap_or(fallback_minimum);
        let manual = resource.throughput.unwrap_or(0);
        let autoscale = resource
            .autoscale_settings
            .map(|settings| settings.max_throughput)
            .unwrap_or(0);

        let base = match resource.mode() {
            ThroughputMode::Manual => ThroughputConfiguration::manual(manual, minimum, maximum),
            ThroughputMode::Autoscale => {
                ThroughputConfiguration::autoscale(autoscale, minimum, maximum)
            }
        };
        ThroughputConfiguration {
            manual_value: manual,
            manual_baseline: manual,
            autoscale_value: autoscale,
            autoscale_baseline: autoscale,
            ..base
        }
    }
}

/// PUT body for updating throughput settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputSettingsUpdateParameters {
    pub properties: ThroughputSettingsProperties,
}

impl ThroughputSettingsUpdateParameters {
    pub fn manual(throughput: u64) -> Self {
        Self::from_resource(ThroughputSettingsResource::manual(throughput))
    }

    pub fn autoscale(max_throughput: u64) -> Self {
        Self::from_resource(ThroughputSettingsResource::autoscale(max_throughput))
    }

    /// Sets `value` on the field backing `mode`.
    pub fn for_mode(mode: ThroughputMode, value: u64) -> Self {
        match mode {
            ThroughputMode::Manual => Self::manual(value),
            ThroughputMode::Autoscale => Self::autoscale(value),
        }
    }

    fn from_resource(resource: ThroughputSettingsResource) -> Self {
        Self {
            properties: ThroughputSettingsProperties { resource },
        }
    }
}

/// When a trigger runs relative to the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerType {
    Pre,
    Post,
}

/// Operations a trigger fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerOperation {
    All,
    Create,
    Update,
    Delete,
    Replace,
}

/// A server-side trigger definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlTriggerResource {
    pub id: String,
    pub body: String,
    pub trigger_type: TriggerType,
    pub trigger_operation: TriggerOperation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlTriggerProperties {
    pub resource: SqlTriggerResource,
}

/// PUT body for creating or replacing a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlTriggerCreateUpdateParameters {
    pub properties: SqlTriggerProperties,
}

impl SqlTriggerCreateUpdateParameters {
    pub fn new(resource: SqlTriggerResource) -> Self {
        Self {
            properties: SqlTriggerProperties { resource },
        }
    }

    pub fn trigger_id(&self) -> &str {
        &self.properties.resource.id
    }
}

/// A trigger as returned by the control plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlTriggerGetResults {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub properties: SqlTriggerProperties,
}
