//! Throughput CLI commands.

use clap::{Args, Parser, Subcommand, ValueEnum};
use dataexplorer_core::throughput::{
    Cloud, SpendAcknowledgement, ThroughputConfiguration, ThroughputMode,
};

use super::ContainerArgs;

/// Throughput commands.
#[derive(Debug, Parser)]
pub struct ThroughputCommand {
    #[command(subcommand)]
    pub action: ThroughputAction,
}

/// Available throughput actions.
#[derive(Debug, Subcommand)]
pub enum ThroughputAction {
    /// Evaluate an edit session without contacting the service.
    Evaluate(SnapshotArgs),
    /// Show what saving the edit session would persist.
    Plan(SnapshotArgs),
    /// Estimate the spend of the edit session.
    Estimate {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Number of regions the account is replicated to.
        #[arg(long, default_value_t = 1)]
        regions: u32,
        /// The account accepts writes in every region.
        #[arg(long)]
        multi_master: bool,
        /// Cloud the account lives in.
        #[arg(long, default_value = "public")]
        cloud: CloudArg,
    },
    /// Show the persisted throughput of a container.
    Show(ContainerArgs),
    /// Edit and save the throughput of a container.
    Save {
        #[command(flatten)]
        container: ContainerArgs,
        /// Mode to switch to.
        #[arg(long)]
        mode: Option<ModeArg>,
        /// New RU/s, as typed into the active input.
        #[arg(long)]
        value: Option<String>,
        /// Acknowledge the spend of a high throughput value.
        #[arg(long)]
        acknowledge_spend: bool,
        /// Upper bound for manual throughput (defaults to EXPLORER_MAXIMUM_THROUGHPUT).
        #[arg(long)]
        maximum: Option<u64>,
        /// Lower bound used when the service does not report one.
        #[arg(long, default_value_t = 400)]
        minimum: u64,
    },
}

/// Throughput mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Manual,
    Autoscale,
}

impl From<ModeArg> for ThroughputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Manual => ThroughputMode::Manual,
            ModeArg::Autoscale => ThroughputMode::Autoscale,
        }
    }
}

/// Cloud used for pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CloudArg {
    Public,
    Mooncake,
}

impl From<CloudArg> for Cloud {
    fn from(cloud: CloudArg) -> Self {
        match cloud {
            CloudArg::Public => Cloud::Public,
            CloudArg::Mooncake => Cloud::Mooncake,
        }
    }
}

/// An edit session described on the command line.
#[derive(Debug, Clone, Args)]
pub struct SnapshotArgs {
    /// Mode as last persisted.
    #[arg(long, default_value = "manual")]
    pub original_mode: ModeArg,

    /// Mode selected for the edit (defaults to the persisted mode).
    #[arg(long)]
    pub mode: Option<ModeArg>,

    /// Persisted manual RU/s.
    #[arg(long, default_value_t = 0)]
    pub manual: u64,

    /// Persisted autoscale max RU/s.
    #[arg(long, default_value_t = 0)]
    pub autoscale: u64,

    /// Raw text typed into the active input.
    #[arg(long, allow_hyphen_values = true)]
    pub edit: Option<String>,

    /// Lower bound for manual throughput.
    #[arg(long, default_value_t = 400)]
    pub minimum: u64,

    /// Upper bound for manual throughput.
    #[arg(long, default_value_t = 10_000)]
    pub maximum: u64,

    /// The throughput inputs are disabled.
    #[arg(long)]
    pub disabled: bool,

    /// Running against the local emulator.
    #[arg(long)]
    pub emulator: bool,

    /// The container has fixed capacity.
    #[arg(long)]
    pub fixed: bool,

    /// Manual throughput may exceed the absolute cap.
    #[arg(long)]
    pub can_exceed_maximum: bool,

    /// The spend acknowledgement is checked.
    #[arg(long)]
    pub acknowledged: bool,
}

impl SnapshotArgs {
    /// Builds the snapshot and applies `--edit`, if any.
    pub fn to_configuration(&self) -> ThroughputConfiguration {
        let original = ThroughputMode::from(self.original_mode);
        let base = match original {
            ThroughputMode::Manual => {
                ThroughputConfiguration::manual(self.manual, self.minimum, self.maximum)
            }
            ThroughputMode::Autoscale => {
                ThroughputConfiguration::autoscale(self.autoscale, self.minimum, self.maximum)
            }
        };
        let mut config = ThroughputConfiguration {
            manual_value: self.manual,
            manual_baseline: self.manual,
            autoscale_value: self.autoscale,
            autoscale_baseline: self.autoscale,
            ..base
        }
        .with_mode(self.mode.map_or(original, ThroughputMode::from))
        .with_enabled(!self.disabled)
        .with_emulator(self.emulator)
        .with_fixed_container(self.fixed)
        .with_can_exceed_maximum(self.can_exceed_maximum);

        if let Some(raw) = &self.edit {
            config.apply_edit(raw);
        }
        config
    }

    pub fn acknowledgement(&self) -> SpendAcknowledgement {
        SpendAcknowledgement::new(self.acknowledged)
    }
}
