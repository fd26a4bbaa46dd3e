//! Estimated cost of provisioned throughput.
//!
//! Prices are per RU/s per hour. Autoscale is billed at the max RU/s with a
//! 1.5x rate.

use serde::{Deserialize, Serialize};

use super::mode::{mode_override, ModeOverride};
use super::types::{ThroughputConfiguration, ThroughputMode};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const HOURS_PER_MONTH: f64 = 730.0;
pub const AUTOSCALE_PRICE_MULTIPLIER: f64 = 1.5;

const PUBLIC_PRICE_PER_RU_HOUR: f64 = 0.00008;
const MOONCAKE_PRICE_PER_RU_HOUR: f64 = 0.00051;

/// Cloud the account lives in; decides price and currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cloud {
    #[default]
    Public,
    Mooncake,
}

impl Cloud {
    /// Maps a portal server id (`"default"`, `"mooncake"`, ...) to a cloud.
    pub fn from_server_id(server_id: &str) -> Self {
        if server_id.eq_ignore_ascii_case("mooncake") {
            Cloud::Mooncake
        } else {
            Cloud::Public
        }
    }

    pub fn price_per_ru_hour(self) -> f64 {
        match self {
            Cloud::Public => PUBLIC_PRICE_PER_RU_HOUR,
            Cloud::Mooncake => MOONCAKE_PRICE_PER_RU_HOUR,
        }
    }

    pub fn currency(self) -> &'static str {
        match self {
            Cloud::Public => "USD",
            Cloud::Mooncake => "RMB",
        }
    }

    pub fn currency_sign(self) -> &'static str {
        match self {
            Cloud::Public => "$",
            Cloud::Mooncake => "¥",
        }
    }
}

/// Estimated hourly, daily and monthly cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpendEstimate {
    pub throughput: u64,
    pub mode: ThroughputMode,
    pub currency: &'static str,
    pub currency_sign: &'static str,
    pub hourly: f64,
    pub daily: f64,
    pub monthly: f64,
}

/// Billing multiplier for the number of regions.
pub fn region_multiplier(regions: u32, multi_master: bool) -> u32 {
    match regions {
        0 => 0,
        1 => 1,
        n if multi_master => n + 1,
        n => n,
    }
}

/// Extra multiplier applied to multi-master accounts with several regions.
pub fn multi_master_multiplier(regions: u32, multi_master: bool) -> u32 {
    if multi_master && region_multiplier(regions, multi_master) > 1 {
        2
    } else {
        1
    }
}

/// Hourly price for `throughput` RU/s, rounded to 5 decimals.
pub fn hourly_price(
    throughput: u64,
    mode: ThroughputMode,
    cloud: Cloud,
    regions: u32,
    multi_master: bool,
) -> f64 {
    let mode_multiplier = match mode {
        ThroughputMode::Manual => 1.0,
        ThroughputMode::Autoscale => AUTOSCALE_PRICE_MULTIPLIER,
    };
    let raw = throughput as f64
        * cloud.price_per_ru_hour()
        * mode_multiplier
        * f64::from(region_multiplier(regions, multi_master))
        * f64::from(multi_master_multiplier(regions, multi_master));
    round5(raw)
}

/// Estimates spend for a throughput value.
pub fn estimate_spend(
    throughput: u64,
    mode: ThroughputMode,
    cloud: Cloud,
    regions: u32,
    multi_master: bool,
) -> SpendEstimate {
    let hourly = hourly_price(throughput, mode, cloud, regions, multi_master);
    SpendEstimate {
        throughput,
        mode,
        currency: cloud.currency(),
        currency_sign: cloud.currency_sign(),
        hourly,
        daily: round5(hourly * HOURS_PER_DAY),
        monthly: round5(hourly * HOURS_PER_MONTH),
    }
}

/// Estimates spend for a snapshot in its selected mode.
///
/// When switching from autoscale to manual, the autoscale max is what will be
/// provisioned, so the manual estimate uses it. The emulator is not billed
/// and gets no estimate.
pub fn estimate_for_config(
    config: &ThroughputConfiguration,
    cloud: Cloud,
    regions: u32,
    multi_master: bool,
) -> Option<SpendEstimate> {
    if config.is_emulator {
        return None;
    }
    let throughput = match (config.mode, mode_override(config)) {
        (ThroughputMode::Manual, Some(ModeOverride::AutoscaleToManual)) => config.autoscale_value,
        (mode, _) => config.value_for(mode),
    };
    Some(estimate_spend(
        throughput,
        config.mode,
        cloud,
        regions,
        multi_master,
    ))
}

fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cloud_from_server_id() {
        assert_eq!(Cloud::from_server_id("mooncake"), Cloud::Mooncake);
        assert_eq!(Cloud::from_server_id("default"), Cloud::Public);
        assert_eq!(Cloud::from_server_id(""), Cloud::Public);
    }

    #[test]
    fn test_region_multiplier() {
        assert_eq!(region_multiplier(0, false), 0);
        assert_eq!(region_multiplier(1, true), 1);
        assert_eq!(region_multiplier(3, false), 3);
        assert_eq!(region_multiplier(3, true), 4);
    }

    #[test]
    fn test_multi_master_multiplier() {
        assert_eq!(multi_master_multiplier(1, true), 1);
        assert_eq!(multi_master_multiplier(2, true), 2);
        assert_eq!(multi_master_multiplier(2, false), 1);
    }

    #[test]
    fn test_manual_single_region() {
        let estimate = estimate_spend(1000, ThroughputMode::Manual, Cloud::Public, 1, false);
        assert!(approx(estimate.hourly, 0.08));
        assert!(approx(estimate.daily, 1.92));
        assert!(approx(estimate.monthly, 58.4));
        assert_eq!(estimate.currency, "USD");
    }

    #[test]
    fn test_autoscale_costs_more() {
        let estimate = estimate_spend(1000, ThroughputMode::Autoscale, Cloud::Public, 1, false);
        assert!(approx(estimate.hourly, 0.12));
    }

    #[test]
    fn test_mooncake_multi_master() {
        // 2 regions with multi-master: region multiplier 3, multi-master multiplier 2.
        let estimate = estimate_spend(1000, ThroughputMode::Manual, Cloud::Mooncake, 2, true);
        assert!(approx(estimate.hourly, 3.06));
        assert_eq!(estimate.currency_sign, "¥");
    }

    #[test]
    fn test_estimate_uses_autoscale_value_when_switching_to_manual() {
        let config = ThroughputConfiguration::autoscale(4000, 400, 10_000)
            .with_mode(ThroughputMode::Manual)
            .with_manual_value(400);
        let estimate = estimate_for_config(&config, Cloud::Public, 1, false).unwrap();
        assert_eq!(estimate.throughput, 4000);
        assert_eq!(estimate.mode, ThroughputMode::Manual);
    }

    #[test]
    fn test_no_estimate_for_emulator() {
        let config = ThroughputConfiguration::manual(400, 400, 10_000).with_manual_value(800);
        assert!(estimate_for_config(&config, Cloud::Public, 1, false).is_some());

        let config = config.with_emulator(true);
        assert_eq!(estimate_for_config(&config, Cloud::Public, 1, false), None);
    }
}
