//! Pretty output formatting.

use dataexplorer_core::arm::{
    DatabaseAccountGetResults, DatabaseAccountListConnectionStringsResult,
    DatabaseAccountListKeysResult, DatabaseAccountListReadOnlyKeysResult,
    MetricDefinitionsListResult, MetricListResult, SqlTriggerGetResults,
    ThroughputSettingsGetResults, UsagesResult,
};
use dataexplorer_core::notification::Notification;
use dataexplorer_core::throughput::{InputField, SavePlan, SpendEstimate, SubmitGate};

use crate::report::ThroughputReport;
use crate::save::SaveOutcome;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn header(title: &str, count: usize) -> String {
    let mut output = format!("{} ({})\n", title, count);
    output.push_str(&"-".repeat(40));
    output
}

/// Format a save plan for display.
pub fn format_plan(plan: Option<&SavePlan>) -> String {
    match plan {
        None => "Nothing to save.".to_string(),
        Some(SavePlan::SetManual { throughput }) => {
            format!("Set manual throughput to {} RU/s", throughput)
        }
        Some(SavePlan::SetAutoscaleMax { max_throughput }) => {
            format!("Set autoscale max throughput to {} RU/s", max_throughput)
        }
        Some(SavePlan::Migrate {
            from,
            to,
            pending_update,
        }) => {
            let mut output = String::new();
            if let Some(value) = pending_update {
                output.push_str(&format!(
                    "Update {} throughput to {} RU/s, then ",
                    from.label().to_lowercase(),
                    value
                ));
            }
            output.push_str(&format!("Migrate from {} to {}", from.label(), to.label()));
            output
        }
    }
}

fn format_input(name: &str, field: &InputField) -> String {
    let value = field
        .displayed_value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "(blank)".to_string());
    let access = if field.read_only { " [read-only]" } else { "" };
    format!("  {}: {}{}", name, value, access)
}

/// Format a throughput report for display.
pub fn format_report(report: &ThroughputReport) -> String {
    let config = &report.configuration;
    let mut output = format!(
        "Throughput ({} -> {})\n  Saveable: {}\n  Discardable: {}",
        config.original_mode.label(),
        config.mode.label(),
        yes_no(report.evaluation.is_saveable),
        yes_no(report.evaluation.is_discardable),
    );
    output.push('\n');
    output.push_str(&format_input("Manual", &report.input.manual));
    output.push('\n');
    output.push_str(&format_input("Autoscale max", &report.input.autoscale));

    if report.input.show_migration_warning {
        output.push_str(
            "\n  Note: migrating to autoscale sets the max throughput from the current RU/s.",
        );
    }
    if report.input.fixed_capacity_note {
        output.push_str("\n  Note: fixed-capacity containers cannot change mode.");
    }
    match report.gate {
        SubmitGate::Allowed => {}
        SubmitGate::NotSaveable => output.push_str("\n  Submit: blocked (not saveable)"),
        SubmitGate::AcknowledgementRequired => {
            output.push_str("\n  Submit: blocked (acknowledge the estimated spend first)")
        }
    }
    output.push_str(&format!("\n  Plan: {}", format_plan(report.plan.as_ref())));
    output
}

/// Format a spend estimate for display.
pub fn format_estimate(estimate: &SpendEstimate) -> String {
    let sign = estimate.currency_sign;
    format!(
        "{} {} RU/s\n  Hourly: {}{:.5} {}\n  Daily: {}{:.5} {}\n  Monthly: {}{:.5} {}",
        estimate.mode.label(),
        estimate.throughput,
        sign,
        estimate.hourly,
        estimate.currency,
        sign,
        estimate.daily,
        estimate.currency,
        sign,
        estimate.monthly,
        estimate.currency,
    )
}

/// Format persisted throughput settings for display.
pub fn format_settings(settings: &ThroughputSettingsGetResults) -> String {
    let resource = settings.resource();
    let mut output = format!("Mode: {}", resource.mode().label());
    if let Some(throughput) = resource.throughput {
        output.push_str(&format!("\n  Throughput: {} RU/s", throughput));
    }
    if let Some(autoscale) = resource.autoscale_settings {
        output.push_str(&format!(
            "\n  Autoscale max: {} RU/s",
            autoscale.max_throughput
        ));
    }
    if let Some(minimum) = resource.minimum() {
        output.push_str(&format!("\n  Minimum: {} RU/s", minimum));
    }
    if resource.is_replace_pending() {
        output.push_str("\n  A previous change is still being applied.");
    }
    output
}

/// Format a save outcome for display.
pub fn format_save_outcome(outcome: &SaveOutcome) -> String {
    format!(
        "Saved: {}\n{}",
        format_plan(Some(&outcome.plan)),
        format_settings(&outcome.settings)
    )
}

/// Format an account for display.
pub fn format_account(account: &DatabaseAccountGetResults) -> String {
    let properties = &account.properties;
    let mut output = format!(
        "{}\n  Location: {}\n  Endpoint: {}\n  Regions: {}\n  Multi-region writes: {}",
        or_dash(account.name.as_deref()),
        or_dash(account.location.as_deref()),
        or_dash(properties.document_endpoint.as_deref()),
        account.region_count(),
        yes_no(account.is_multi_master()),
    );
    if let Some(state) = &properties.provisioning_state {
        output.push_str(&format!("\n  State: {}", state));
    }
    if let Some(policy) = &properties.consistency_policy {
        output.push_str(&format!(
            "\n  Consistency: {}",
            policy.default_consistency_level
        ));
    }
    for location in &properties.read_locations {
        output.push_str(&format!(
            "\n  - {} (priority {})",
            location.location_name,
            location
                .failover_priority
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string())
        ));
    }
    output
}

/// Format accounts for display.
pub fn format_accounts(accounts: &[DatabaseAccountGetResults]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }
    let mut output = header("ACCOUNTS", accounts.len());
    for account in accounts {
        output.push_str(&format!("\n{}", format_account(account)));
        output.push('\n');
    }
    output
}

/// Format account keys for display.
pub fn format_keys(keys: &DatabaseAccountListKeysResult) -> String {
    format!(
        "Primary: {}\nSecondary: {}\nPrimary read-only: {}\nSecondary read-only: {}",
        or_dash(keys.primary_master_key.as_deref()),
        or_dash(keys.secondary_master_key.as_deref()),
        or_dash(keys.primary_readonly_master_key.as_deref()),
        or_dash(keys.secondary_readonly_master_key.as_deref()),
    )
}

/// Format read-only keys for display.
pub fn format_read_only_keys(keys: &DatabaseAccountListReadOnlyKeysResult) -> String {
    format!(
        "Primary read-only: {}\nSecondary read-only: {}",
        or_dash(keys.primary_readonly_master_key.as_deref()),
        or_dash(keys.secondary_readonly_master_key.as_deref()),
    )
}

/// Format connection strings for display.
pub fn format_connection_strings(result: &DatabaseAccountListConnectionStringsResult) -> String {
    if result.connection_strings.is_empty() {
        return "No connection strings found.".to_string();
    }
    result
        .connection_strings
        .iter()
        .map(|c| format!("{}\n  {}", or_dash(c.description.as_deref()), c.connection_string))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format metrics for display.
pub fn format_metrics(metrics: &MetricListResult) -> String {
    if metrics.value.is_empty() {
        return "No metrics found.".to_string();
    }
    let mut output = header("METRICS", metrics.value.len());
    for metric in &metrics.value {
        let name = metric
            .name
            .as_ref()
            .and_then(|n| n.localized_value.as_deref().or(n.value.as_deref()));
        output.push_str(&format!(
            "\n{} [{}]",
            or_dash(name),
            or_dash(metric.unit.as_deref())
        ));
        for value in &metric.metric_values {
            let timestamp = value
                .timestamp
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string());
            let figure = value
                .total
                .or(value.average)
                .or(value.maximum)
                .or(value.minimum)
                .or(value.count);
            output.push_str(&format!(
                "\n  {}: {}",
                timestamp,
                figure
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "-".to_string())
            ));
        }
    }
    output
}

/// Format usages for display.
pub fn format_usages(usages: &UsagesResult) -> String {
    if usages.value.is_empty() {
        return "No usages found.".to_string();
    }
    let mut output = header("USAGES", usages.value.len());
    for usage in &usages.value {
        let name = usage.name.as_ref().and_then(|n| n.value.as_deref());
        let limit = usage
            .limit
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "\n{}: {} / {} {}",
            or_dash(name),
            usage.current_value.unwrap_or(0),
            limit,
            usage.unit.as_deref().unwrap_or("")
        ));
    }
    output
}

/// Format metric definitions for display.
pub fn format_metric_definitions(definitions: &MetricDefinitionsListResult) -> String {
    if definitions.value.is_empty() {
        return "No metric definitions found.".to_string();
    }
    let mut output = header("METRIC DEFINITIONS", definitions.value.len());
    for definition in &definitions.value {
        let name = definition.name.as_ref().and_then(|n| n.value.as_deref());
        output.push_str(&format!(
            "\n{} [{}] {}",
            or_dash(name),
            or_dash(definition.unit.as_deref()),
            or_dash(definition.primary_aggregation_type.as_deref())
        ));
    }
    output
}

/// Format a trigger for display.
pub fn format_trigger(trigger: &SqlTriggerGetResults) -> String {
    let resource = &trigger.properties.resource;
    format!(
        "{}\n  Type: {:?}\n  Operation: {:?}",
        resource.id, resource.trigger_type, resource.trigger_operation
    )
}

/// Format notifications for display.
pub fn format_notifications(notifications: &[&Notification]) -> String {
    if notifications.is_empty() {
        return "No notifications.".to_string();
    }
    let mut output = header("NOTIFICATIONS", notifications.len());
    for notification in notifications {
        output.push_str(&format!(
            "\n[{:?}] {}",
            notification.kind, notification.description
        ));
        let scope: Vec<&str> = [
            notification.account_name.as_deref(),
            notification.database_name.as_deref(),
            notification.collection_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !scope.is_empty() {
            output.push_str(&format!("\n  Scope: {}", scope.join("/")));
        }
        if let Some(end) = notification.end_date_utc {
            output.push_str(&format!("\n  Until: {}", end.to_rfc3339()));
        }
    }
    output
}
