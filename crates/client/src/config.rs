use std::{env, time::Duration};

use dataexplorer_core::throughput::DEFAULT_SPEND_ACK_THRESHOLD;

use crate::error::ConfigError;

pub const DEFAULT_ARM_URL: &str = "https://management.azure.com";
pub const DEFAULT_API_VERSION: &str = "2020-04-01";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_MAXIMUM_THROUGHPUT: u64 = 1_000_000;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Control-plane base URL (default: "https://management.azure.com")
    pub arm_url: String,
    /// `api-version` sent with every control-plane request (default: "2020-04-01")
    pub api_version: String,
    /// RU/s above which a save needs a spend acknowledgement (default: 100,000)
    pub spend_ack_threshold: u64,
    /// Per-request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
    /// Upper bound offered to throughput edits (default: 1,000,000)
    pub maximum_throughput: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EXPLORER_ARM_URL`
    /// - `EXPLORER_API_VERSION`
    /// - `EXPLORER_SPEND_ACK_THRESHOLD`
    /// - `EXPLORER_REQUEST_TIMEOUT_SECONDS`
    /// - `EXPLORER_MAXIMUM_THROUGHPUT`
    ///
    /// Unset variables take their default; set but malformed ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            arm_url: string_var(&lookup, "EXPLORER_ARM_URL", DEFAULT_ARM_URL)?,
            api_version: string_var(&lookup, "EXPLORER_API_VERSION", DEFAULT_API_VERSION)?,
            spend_ack_threshold: number_var(
                &lookup,
                "EXPLORER_SPEND_ACK_THRESHOLD",
                DEFAULT_SPEND_ACK_THRESHOLD,
            )?,
            request_timeout_seconds: number_var(
                &lookup,
                "EXPLORER_REQUEST_TIMEOUT_SECONDS",
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            )?,
            maximum_throughput: number_var(
                &lookup,
                "EXPLORER_MAXIMUM_THROUGHPUT",
                DEFAULT_MAXIMUM_THROUGHPUT,
            )?,
        })
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arm_url: DEFAULT_ARM_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            spend_ack_threshold: DEFAULT_SPEND_ACK_THRESHOLD,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            maximum_throughput: DEFAULT_MAXIMUM_THROUGHPUT,
        }
    }
}

fn string_var<F>(lookup: &F, name: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { name }),
        Some(value) => Ok(value.trim().to_string()),
    }
}

fn number_var<F>(lookup: &F, name: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.arm_url, "https://management.azure.com");
        assert_eq!(config.api_version, "2020-04-01");
        assert_eq!(config.spend_ack_threshold, 100_000);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("EXPLORER_ARM_URL", "http://localhost:8080"),
            ("EXPLORER_API_VERSION", "2021-01-15"),
            ("EXPLORER_SPEND_ACK_THRESHOLD", " 50000 "),
            ("EXPLORER_REQUEST_TIMEOUT_SECONDS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.arm_url, "http://localhost:8080");
        assert_eq!(config.api_version, "2021-01-15");
        assert_eq!(config.spend_ack_threshold, 50_000);
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.maximum_throughput, DEFAULT_MAXIMUM_THROUGHPUT);
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let error =
            Config::from_lookup(lookup_from(&[("EXPLORER_SPEND_ACK_THRESHOLD", "lots")]))
                .unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidNumber {
                name: "EXPLORER_SPEND_ACK_THRESHOLD",
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_empty_url_is_an_error() {
        let error = Config::from_lookup(lookup_from(&[("EXPLORER_ARM_URL", "  ")])).unwrap_err();
        assert_eq!(error, ConfigError::Empty { name: "EXPLORER_ARM_URL" });
    }
}
