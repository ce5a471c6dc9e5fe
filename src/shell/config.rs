// Service configuration, read from MEETING_INVOICE_* environment variables.
//
// Every setting has a default, so an empty environment yields a working demo server. A value
// that is present but does not parse stops startup.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::modules::meeting_invoices::adapters::outbound::google_calendar::{
    GOOGLE_CALENDAR_API_BASE, MAX_RESULTS, PRIMARY_CALENDAR,
};
use crate::modules::meeting_invoices::use_cases::generate_invoice::hourly_rate::DEFAULT_HOURLY_RATE;

pub const ENV_PREFIX: &str = "MEETING_INVOICE_";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub calendar_api_base: String,
    pub calendar_id: String,
    pub lookback_days: i64,
    pub max_results: u32,
    pub demo_delay: Duration,
    pub default_hourly_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            calendar_api_base: GOOGLE_CALENDAR_API_BASE.to_string(),
            calendar_id: PRIMARY_CALENDAR.to_string(),
            lookback_days: 30,
            max_results: MAX_RESULTS,
            demo_delay: Duration::from_millis(1500),
            default_hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` receives the full variable name, prefix included.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parse_or(&read, "ADDR", defaults.bind_addr)?,
            calendar_api_base: read("CALENDAR_API_BASE").unwrap_or(defaults.calendar_api_base),
            calendar_id: read("CALENDAR_ID").unwrap_or(defaults.calendar_id),
            lookback_days: parse_or(&read, "LOOKBACK_DAYS", defaults.lookback_days)?,
            max_results: parse_or(&read, "MAX_RESULTS", defaults.max_results)?,
            demo_delay: parse_or(&read, "DEMO_DELAY_MS", 1500u64).map(Duration::from_millis)?,
            default_hourly_rate: parse_or(&read, "DEFAULT_HOURLY_RATE", defaults.default_hourly_rate)?,
        })
    }
}

fn parse_or<T: FromStr>(
    read: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match read(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key: format!("{ENV_PREFIX}{name}"),
            value,
        }),
    }
}
