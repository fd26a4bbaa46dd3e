//! Trigger CLI commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dataexplorer_core::arm::{TriggerOperation, TriggerType};

use super::ContainerArgs;

/// Trigger commands.
#[derive(Debug, Parser)]
pub struct TriggersCommand {
    #[command(subcommand)]
    pub action: TriggersAction,
}

#[derive(Debug, Subcommand)]
pub enum TriggersAction {
    /// Create or replace a trigger.
    Create {
        #[command(flatten)]
        container: ContainerArgs,
        /// Trigger id.
        #[arg(long)]
        id: String,
        /// File holding the trigger's JavaScript body.
        #[arg(long)]
        body_file: PathBuf,
        /// When the trigger runs.
        #[arg(long, default_value = "pre")]
        trigger_type: TriggerTypeArg,
        /// Operation the trigger fires on.
        #[arg(long, default_value = "all")]
        operation: TriggerOperationArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriggerTypeArg {
    Pre,
    Post,
}

impl From<TriggerTypeArg> for TriggerType {
    fn from(kind: TriggerTypeArg) -> Self {
        match kind {
            TriggerTypeArg::Pre => TriggerType::Pre,
            TriggerTypeArg::Post => TriggerType::Post,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriggerOperationArg {
    All,
    Create,
    Update,
    Delete,
    Replace,
}

impl From<TriggerOperationArg> for TriggerOperation {
    fn from(operation: TriggerOperationArg) -> Self {
        match operation {
            TriggerOperationArg::All => TriggerOperation::All,
            TriggerOperationArg::Create => TriggerOperation::Create,
            TriggerOperationArg::Update => TriggerOperation::Update,
            TriggerOperationArg::Delete => TriggerOperation::Delete,
            TriggerOperationArg::Replace => TriggerOperation::Replace,
        }
    }
}
