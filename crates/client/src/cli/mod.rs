//! CLI command definitions.

pub mod accounts;
pub mod metrics;
pub mod notifications;
pub mod throughput;
pub mod triggers;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dataexplorer_core::arm::{AccountRef, ContainerRef};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::logging::LogFormat;

/// Inspect database accounts and edit container throughput.
#[derive(Debug, Parser)]
#[command(name = "dataexplorer")]
#[command(about = "Inspect database accounts and edit container throughput", long_about = None)]
pub struct Cli {
    /// Control-plane base URL.
    #[arg(long, env = "EXPLORER_ARM_URL")]
    pub arm_url: Option<String>,

    /// `api-version` sent with control-plane requests.
    #[arg(long, env = "EXPLORER_API_VERSION")]
    pub api_version: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Log line format (filter with RUST_LOG).
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Applies command-line overrides on top of the environment configuration.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(arm_url) = &self.arm_url {
            config.arm_url = arm_url.clone();
        }
        if let Some(api_version) = &self.api_version {
            config.api_version = api_version.clone();
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate, estimate and save container throughput.
    Throughput(throughput::ThroughputCommand),
    /// Database account management.
    Accounts(accounts::AccountsCommand),
    /// Per-region collection metrics.
    Metrics(metrics::MetricsCommand),
    /// Server-side triggers.
    Triggers(triggers::TriggersCommand),
    /// Service notifications.
    Notifications(notifications::NotificationsCommand),
}

/// Selects a database account, by resource id or by its parts.
#[derive(Debug, Clone, Args)]
pub struct AccountArgs {
    /// Full account resource id.
    #[arg(long, conflicts_with_all = ["subscription", "resource_group", "account"])]
    pub account_id: Option<String>,

    /// Subscription id.
    #[arg(long)]
    pub subscription: Option<Uuid>,

    /// Resource group name.
    #[arg(long)]
    pub resource_group: Option<String>,

    /// Account name.
    #[arg(long)]
    pub account: Option<String>,
}

impl AccountArgs {
    pub fn resolve(&self) -> Result<AccountRef> {
        if let Some(id) = &self.account_id {
            return AccountRef::from_resource_id(id).ok_or_else(|| {
                ClientError::InvalidInput(format!("not a database account resource id: {}", id))
            });
        }
        match (&self.subscription, &self.resource_group, &self.account) {
            (Some(subscription), Some(resource_group), Some(account)) => {
                Ok(AccountRef::new(*subscription, resource_group, account))
            }
            _ => Err(ClientError::InvalidInput(
                "pass --account-id or all of --subscription, --resource-group and --account"
                    .to_string(),
            )),
        }
    }
}

/// Selects a SQL container.
#[derive(Debug, Clone, Args)]
pub struct ContainerArgs {
    #[command(flatten)]
    pub account: AccountArgs,

    /// Database name.
    #[arg(long)]
    pub database: String,

    /// Container name.
    #[arg(long)]
    pub container: String,
}

impl ContainerArgs {
    pub fn resolve(&self) -> Result<ContainerRef> {
        Ok(self
            .account
            .resolve()?
            .container(&self.database, &self.container))
    }
}
