//! Collection metrics CLI commands.

use clap::{Parser, Subcommand};

use super::AccountArgs;

/// Collection metrics commands.
#[derive(Debug, Parser)]
pub struct MetricsCommand {
    #[command(subcommand)]
    pub action: MetricsAction,
}

#[derive(Debug, Subcommand)]
pub enum MetricsAction {
    /// Metrics of one collection in one region.
    Collection {
        #[command(flatten)]
        account: AccountArgs,
        /// Region name, e.g. "West US".
        #[arg(long)]
        region: String,
        /// Database resource id.
        #[arg(long)]
        database_rid: String,
        /// Collection resource id.
        #[arg(long)]
        collection_rid: String,
        /// OData filter.
        #[arg(long)]
        filter: String,
    },
}
