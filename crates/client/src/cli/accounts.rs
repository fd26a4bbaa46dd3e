//! Database account CLI commands.

use clap::{Parser, Subcommand, ValueEnum};
use dataexplorer_core::arm::KeyKind;
use uuid::Uuid;

use super::AccountArgs;

/// Database account commands.
#[derive(Debug, Parser)]
pub struct AccountsCommand {
    #[command(subcommand)]
    pub action: AccountsAction,
}

/// Available account actions.
#[derive(Debug, Subcommand)]
pub enum AccountsAction {
    /// Get an account.
    Get(AccountArgs),
    /// List accounts in a subscription, or in one resource group.
    List {
        /// Subscription id.
        #[arg(long)]
        subscription: Uuid,
        /// Only list accounts in this resource group.
        #[arg(long)]
        resource_group: Option<String>,
    },
    /// Create or replace a single-region account.
    Create {
        #[command(flatten)]
        account: AccountArgs,
        /// Write region.
        #[arg(long)]
        location: String,
    },
    /// Set tags on an account.
    Tag {
        #[command(flatten)]
        account: AccountArgs,
        /// Tags as key=value.
        #[arg(long = "tag", value_parser = parse_tag, required = true)]
        tags: Vec<(String, String)>,
    },
    /// Delete an account.
    Delete(AccountArgs),
    /// Reorder failover priorities; the first region becomes the write region.
    Failover {
        #[command(flatten)]
        account: AccountArgs,
        /// Regions in priority order.
        #[arg(long = "region", required = true)]
        regions: Vec<String>,
    },
    /// List the access keys.
    Keys(AccountArgs),
    /// List the read-only keys.
    ReadOnlyKeys {
        #[command(flatten)]
        account: AccountArgs,
        /// Read the keys with GET instead of the list action.
        #[arg(long)]
        get: bool,
    },
    /// List the connection strings.
    ConnectionStrings(AccountArgs),
    /// Regenerate a key.
    RegenerateKey {
        #[command(flatten)]
        account: AccountArgs,
        /// Key to regenerate.
        #[arg(long)]
        kind: KeyKindArg,
    },
    /// Take a region offline.
    OfflineRegion {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long)]
        region: String,
    },
    /// Bring a region back online.
    OnlineRegion {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long)]
        region: String,
    },
    /// Check whether an account name is taken.
    CheckName {
        /// Account name.
        name: String,
    },
    /// List account metrics.
    Metrics {
        #[command(flatten)]
        account: AccountArgs,
        /// OData filter, e.g. "name.value eq 'Total Requests'".
        #[arg(long)]
        filter: String,
    },
    /// List account usages.
    Usages {
        #[command(flatten)]
        account: AccountArgs,
        /// Optional OData filter.
        #[arg(long)]
        filter: Option<String>,
    },
    /// List metric definitions.
    MetricDefinitions(AccountArgs),
}

/// Account key kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyKindArg {
    Primary,
    Secondary,
    PrimaryReadonly,
    SecondaryReadonly,
}

impl From<KeyKindArg> for KeyKind {
    fn from(kind: KeyKindArg) -> Self {
        match kind {
            KeyKindArg::Primary => KeyKind::Primary,
            KeyKindArg::Secondary => KeyKind::Secondary,
            KeyKindArg::PrimaryReadonly => KeyKind::PrimaryReadonly,
            KeyKindArg::SecondaryReadonly => KeyKind::SecondaryReadonly,
        }
    }
}

fn parse_tag(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got {:?}", raw)),
    }
}
