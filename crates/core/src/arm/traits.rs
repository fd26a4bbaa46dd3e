use async_trait::async_trait;

use crate::throughput::ThroughputMode;

use super::paths::{AccountRef, ContainerRef};
use super::settings::{ThroughputSettingsGetResults, ThroughputSettingsUpdateParameters};
use super::types::{
    DatabaseAccountCreateUpdateParameters, DatabaseAccountGetResults,
    DatabaseAccountUpdateParameters,
};
use super::Result;

/// Create, read and update for database accounts.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Creates or replaces an account.
    async fn create_account(
        &self,
        account: &AccountRef,
        params: &DatabaseAccountCreateUpdateParameters,
    ) -> Result<DatabaseAccountGetResults>;

    /// Patches an existing account.
    async fn update_account(
        &self,
        account: &AccountRef,
        params: &DatabaseAccountUpdateParameters,
    ) -> Result<DatabaseAccountGetResults>;

    /// Gets an account.
    async fn get_account(&self, account: &AccountRef) -> Result<DatabaseAccountGetResults>;
}

/// Persisted throughput settings of containers.
#[async_trait]
pub trait ThroughputStore: Send + Sync {
    /// Gets the current settings.
    async fn get_throughput(
        &self,
        container: &ContainerRef,
    ) -> Result<ThroughputSettingsGetResults>;

    /// Replaces the settings within the current mode.
    async fn update_throughput(
        &self,
        container: &ContainerRef,
        params: &ThroughputSettingsUpdateParameters,
    ) -> Result<ThroughputSettingsGetResults>;

    /// Migrates the container to `target` mode.
    async fn migrate_throughput(
        &self,
        container: &ContainerRef,
        target: ThroughputMode,
    ) -> Result<ThroughputSettingsGetResults>;
}
