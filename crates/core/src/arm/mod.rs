mod error;
mod paths;
mod settings;
mod traits;
mod types;

pub use error::{ApiError, Result};
pub use paths::{
    account_action_path, account_name_path, account_path, collection_region_metrics_path,
    container_throughput_migration_path, container_throughput_path, container_trigger_path,
    resource_group_accounts_path, subscription_accounts_path, AccountAction, AccountRef,
    CollectionRegionRef, ContainerRef, ResourcePath,
};
pub use settings::{
    AutoscaleSettingsResource, SqlTriggerCreateUpdateParameters, SqlTriggerGetResults,
    SqlTriggerProperties, SqlTriggerResource, ThroughputSettingsGetResults,
    ThroughputSettingsProperties, ThroughputSettingsResource, ThroughputSettingsUpdateParameters,
    TriggerOperation, TriggerType,
};
pub use traits::{AccountApi, ThroughputStore};
pub use types::{
    Capability, ConnectionString, ConsistencyPolicy, DatabaseAccountCreateUpdateParameters,
    DatabaseAccountCreateUpdateProperties, DatabaseAccountGetResults,
    DatabaseAccountListConnectionStringsResult, DatabaseAccountListKeysResult,
    DatabaseAccountListReadOnlyKeysResult, DatabaseAccountProperties,
    DatabaseAccountRegenerateKeyParameters, DatabaseAccountUpdateParameters,
    DatabaseAccountUpdateProperties, DatabaseAccountsListResult, FailoverPolicies, FailoverPolicy,
    KeyKind, Location, Metric, MetricAvailability, MetricDefinition, MetricDefinitionsListResult,
    MetricListResult, MetricName, MetricValue, RegionForOnlineOffline, Usage, UsagesResult,
};
