//! Notification CLI commands.

use clap::{Parser, Subcommand};

/// Notification commands.
#[derive(Debug, Parser)]
pub struct NotificationsCommand {
    #[command(subcommand)]
    pub action: NotificationsAction,
}

#[derive(Debug, Subcommand)]
pub enum NotificationsAction {
    /// List notifications.
    List {
        /// Hide notifications that have ended.
        #[arg(long)]
        active: bool,
        /// Only show notifications for this database.
        #[arg(long, requires = "collection")]
        database: Option<String>,
        /// Only show notifications for this collection.
        #[arg(long, requires = "database")]
        collection: Option<String>,
    },
}
