use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Runtime settings, read from the environment (and `.env` via `dotenv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_address: SocketAddr,
    // Built-in catalog is used when a path is unset
    pub rooms_csv_path: Option<PathBuf>,
    pub time_slots_csv_path: Option<PathBuf>,
    pub reject_past_dates: bool,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_value = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddress {
                var: "BIND_ADDRESS",
                value: bind_value.clone(),
                source,
            })?;

        let path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        let reject_past_dates = lookup("REJECT_PAST_DATES")
            .map(|val| val.to_lowercase() == "true")
            .unwrap_or(false);

        let is_production = lookup("ENVIRONMENT")
            .map(|val| val.to_lowercase() == "production")
            .unwrap_or(false);

        Ok(Self {
            bind_address,
            rooms_csv_path: path("ROOMS_CSV_PATH"),
            time_slots_csv_path: path("TIME_SLOTS_CSV_PATH"),
            reject_past_dates,
            is_production,
        })
    }

    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_production {
            "info"
        } else {
            "debug"
        }
    }
}
