//! dataexplorer CLI entry point.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use dataexplorer_client::cli::accounts::AccountsAction;
use dataexplorer_client::cli::metrics::MetricsAction;
use dataexplorer_client::cli::notifications::NotificationsAction;
use dataexplorer_client::cli::throughput::ThroughputAction;
use dataexplorer_client::cli::triggers::TriggersAction;
use dataexplorer_client::cli::{Cli, Commands, OutputFormat};
use dataexplorer_client::logging::init_logging;
use dataexplorer_client::output::{format_output, pretty};
use dataexplorer_client::report::ThroughputReport;
use dataexplorer_client::sink::ConsoleSink;
use dataexplorer_client::{ArmClient, Config, ThroughputSaver};
use dataexplorer_core::arm::{
    CollectionRegionRef, DatabaseAccountCreateUpdateParameters, DatabaseAccountUpdateParameters,
    FailoverPolicies, SqlTriggerCreateUpdateParameters, SqlTriggerResource,
};
use dataexplorer_core::notification::{filter_active, Notification};
use dataexplorer_core::throughput::{
    estimate_for_config, plan_save, AutoscaleSteps, SpendAcknowledgement, ThresholdSpendPolicy,
};
use serde::Serialize;
use tracing::debug;

/// Prints `value` as JSON, or through `pretty` for human output.
fn emit<T: Serialize>(format: OutputFormat, value: &T, pretty: impl FnOnce(&T) -> String) {
    match format {
        OutputFormat::Json => println!("{}", format_output(value, format)),
        OutputFormat::Pretty => println!("{}", pretty(value)),
    }
}

/// Prints a confirmation for commands without a response body.
fn done(cli: &Cli, message: String) {
    if cli.quiet {
        return;
    }
    let body = serde_json::json!({ "ok": true, "message": message });
    emit(cli.format, &body, |_| message.clone());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format).context("failed to initialise logging")?;

    let config = cli.apply_to(Config::from_env()?);
    debug!(arm_url = %config.arm_url, api_version = %config.api_version, "Loaded configuration");

    match &cli.command {
        Commands::Throughput(cmd) => run_throughput(&cli, &config, &cmd.action).await,
        Commands::Accounts(cmd) => run_accounts(&cli, &config, &cmd.action).await,
        Commands::Metrics(cmd) => run_metrics(&cli, &config, &cmd.action).await,
        Commands::Triggers(cmd) => run_triggers(&cli, &config, &cmd.action).await,
        Commands::Notifications(cmd) => run_notifications(&cli, &config, &cmd.action).await,
    }
}

async fn run_throughput(
    cli: &Cli,
    config: &Config,
    action: &ThroughputAction,
) -> anyhow::Result<()> {
    let validator = AutoscaleSteps::default();
    let policy = ThresholdSpendPolicy::new(config.spend_ack_threshold);

    match action {
        ThroughputAction::Evaluate(snapshot) => {
            let report = ThroughputReport::build(
                &snapshot.to_configuration(),
                snapshot.acknowledgement(),
                &validator,
                &policy,
            );
            emit(cli.format, &report, pretty::format_report);
        }
        ThroughputAction::Plan(snapshot) => {
            let plan = plan_save(&snapshot.to_configuration(), &validator);
            emit(cli.format, &plan, |plan| pretty::format_plan(plan.as_ref()));
        }
        ThroughputAction::Estimate {
            snapshot,
            regions,
            multi_master,
            cloud,
        } => {
            let estimate = estimate_for_config(
                &snapshot.to_configuration(),
                (*cloud).into(),
                *regions,
                *multi_master,
            );
            emit(cli.format, &estimate, |estimate| match estimate {
                Some(estimate) => pretty::format_estimate(estimate),
                None => "The emulator is not billed.".to_string(),
            });
        }
        ThroughputAction::Show(container) => {
            let client = ArmClient::from_config(config)?;
            let settings = client
                .get_container_throughput(&container.resolve()?)
                .await?;
            emit(cli.format, &settings, pretty::format_settings);
        }
        ThroughputAction::Save {
            container,
            mode,
            value,
            acknowledge_spend,
            maximum,
            minimum,
        } => {
            let container = container.resolve()?;
            let client = ArmClient::from_config(config)?;
            let settings = client.get_container_throughput(&container).await?;

            let mut snapshot = settings
                .to_configuration(*minimum, maximum.unwrap_or(config.maximum_throughput));
            if let Some(mode) = mode {
                snapshot = snapshot.with_mode((*mode).into());
            }
            if let Some(raw) = value {
                snapshot.apply_edit(raw);
            }

            let sink = ConsoleSink::new(cli.quiet);
            let outcome = ThroughputSaver::new(&client, &sink)
                .with_validator(validator)
                .with_policy(policy)
                .save(
                    &container,
                    &snapshot,
                    SpendAcknowledgement::new(*acknowledge_spend),
                )
                .await?;
            emit(cli.format, &outcome, pretty::format_save_outcome);
        }
    }
    Ok(())
}

async fn run_accounts(cli: &Cli, config: &Config, action: &AccountsAction) -> anyhow::Result<()> {
    let client = ArmClient::from_config(config)?;

    match action {
        AccountsAction::Get(account) => {
            let account = client.get_database_account(&account.resolve()?).await?;
            emit(cli.format, &account, pretty::format_account);
        }
        AccountsAction::List {
            subscription,
            resource_group,
        } => {
            let result = match resource_group {
                Some(group) => {
                    client
                        .list_database_accounts_by_resource_group(*subscription, group)
                        .await?
                }
                None => client.list_database_accounts(*subscription).await?,
            };
            emit(cli.format, &result.value, |accounts| {
                pretty::format_accounts(accounts)
            });
        }
        AccountsAction::Create { account, location } => {
            let params = DatabaseAccountCreateUpdateParameters::single_region(location.as_str());
            let account = client
                .create_or_update_database_account(&account.resolve()?, &params)
                .await?;
            emit(cli.format, &account, pretty::format_account);
        }
        AccountsAction::Tag { account, tags } => {
            let params = DatabaseAccountUpdateParameters {
                tags: Some(tags.iter().cloned().collect()),
                ..Default::default()
            };
            let account = client
                .update_database_account(&account.resolve()?, &params)
                .await?;
            emit(cli.format, &account, pretty::format_account);
        }
        AccountsAction::Delete(account) => {
            let account = account.resolve()?;
            client.delete_database_account(&account).await?;
            done(cli, format!("Deleted account {}", account.account_name));
        }
        AccountsAction::Failover { account, regions } => {
            let policies = FailoverPolicies::from_priority_order(regions.iter().cloned());
            client
                .change_failover_priority(&account.resolve()?, &policies)
                .await?;
            done(cli, format!("Write region is now {}", regions.join(", ")));
        }
        AccountsAction::Keys(account) => {
            let keys = client.list_keys(&account.resolve()?).await?;
            emit(cli.format, &keys, pretty::format_keys);
        }
        AccountsAction::ReadOnlyKeys { account, get } => {
            let account = account.resolve()?;
            let keys = if *get {
                client.get_read_only_keys(&account).await?
            } else {
                client.list_read_only_keys(&account).await?
            };
            emit(cli.format, &keys, pretty::format_read_only_keys);
        }
        AccountsAction::ConnectionStrings(account) => {
            let result = client.list_connection_strings(&account.resolve()?).await?;
            emit(cli.format, &result, pretty::format_connection_strings);
        }
        AccountsAction::RegenerateKey { account, kind } => {
            client
                .regenerate_key(&account.resolve()?, (*kind).into())
                .await?;
            done(cli, format!("Regenerated {:?} key", kind));
        }
        AccountsAction::OfflineRegion { account, region } => {
            client.offline_region(&account.resolve()?, region).await?;
            done(cli, format!("Region {} is offline", region));
        }
        AccountsAction::OnlineRegion { account, region } => {
            client.online_region(&account.resolve()?, region).await?;
            done(cli, format!("Region {} is online", region));
        }
        AccountsAction::CheckName { name } => {
            let exists = client.check_name_exists(name).await?;
            emit(
                cli.format,
                &serde_json::json!({ "name": name, "exists": exists }),
                |_| {
                    if exists {
                        format!("{} is taken", name)
                    } else {
                        format!("{} is available", name)
                    }
                },
            );
        }
        AccountsAction::Metrics { account, filter } => {
            let metrics = client.list_metrics(&account.resolve()?, filter).await?;
            emit(cli.format, &metrics, pretty::format_metrics);
        }
        AccountsAction::Usages { account, filter } => {
            let usages = client
                .list_usages(&account.resolve()?, filter.as_deref())
                .await?;
            emit(cli.format, &usages, pretty::format_usages);
        }
        AccountsAction::MetricDefinitions(account) => {
            let definitions = client.list_metric_definitions(&account.resolve()?).await?;
            emit(cli.format, &definitions, pretty::format_metric_definitions);
        }
    }
    Ok(())
}

async fn run_metrics(cli: &Cli, config: &Config, action: &MetricsAction) -> anyhow::Result<()> {
    let client = ArmClient::from_config(config)?;

    match action {
        MetricsAction::Collection {
            account,
            region,
            database_rid,
            collection_rid,
            filter,
        } => {
            let collection = CollectionRegionRef {
                account: account.resolve()?,
                region: region.clone(),
                database_rid: database_rid.clone(),
                collection_rid: collection_rid.clone(),
            };
            let metrics = client
                .list_collection_region_metrics(&collection, filter)
                .await?;
            emit(cli.format, &metrics, pretty::format_metrics);
        }
    }
    Ok(())
}

async fn run_triggers(cli: &Cli, config: &Config, action: &TriggersAction) -> anyhow::Result<()> {
    let client = ArmClient::from_config(config)?;

    match action {
        TriggersAction::Create {
            container,
            id,
            body_file,
            trigger_type,
            operation,
        } => {
            let body = tokio::fs::read_to_string(body_file)
                .await
                .with_context(|| format!("failed to read {}", body_file.display()))?;
            let params = SqlTriggerCreateUpdateParameters::new(SqlTriggerResource {
                id: id.clone(),
                body,
                trigger_type: (*trigger_type).into(),
                trigger_operation: (*operation).into(),
            });
            let sink = ConsoleSink::new(cli.quiet);
            let trigger = client
                .create_trigger(&container.resolve()?, &params, &sink)
                .await?;
            emit(cli.format, &trigger, pretty::format_trigger);
        }
    }
    Ok(())
}

async fn run_notifications(
    cli: &Cli,
    config: &Config,
    action: &NotificationsAction,
) -> anyhow::Result<()> {
    let client = ArmClient::from_config(config)?;

    match action {
        NotificationsAction::List {
            active,
            database,
            collection,
        } => {
            let all = client.list_notifications().await?;
            let mut shown: Vec<&Notification> = if *active {
                filter_active(&all, Utc::now())
            } else {
                all.iter().collect()
            };
            if let (Some(database), Some(collection)) = (database, collection) {
                shown.retain(|n| n.applies_to(database, collection));
            }
            emit(cli.format, &shown, |shown| pretty::format_notifications(shown));
        }
    }
    Ok(())
}
