//! dataexplorer_client - control-plane client and CLI for dataexplorer.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod save;
pub mod sink;

pub use client::ArmClient;
pub use config::Config;
pub use error::{ClientError, ConfigError, Result, SaveError};
pub use save::{SaveOutcome, ThroughputSaver};
