use crate::retry::RetryPolicy;
use model::Error;
use model::env::{
    DEFAULT_TABLE_NAME, SCAN_BASE_DELAY_MS, SCAN_CONSISTENT_READ, SCAN_MAX_ATTEMPTS,
    SCAN_TABLE_NAME, SCAN_TIMEOUT_MS,
};
use model::request::ScanRequest;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

// Below the default 3s function timeout so a failure response can still be returned
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2500);

/// Settings for the scan function, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub request: ScanRequest,
    pub consistent_read: bool,
    pub timeout: Duration,
    pub retry_policy: RetryPolicy,
}

impl ScanConfig {
    /// Pull settings from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let table_name: String =
            lookup(SCAN_TABLE_NAME).unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        let defaults: RetryPolicy = RetryPolicy::default();

        let timeout_ms: u64 =
            parse_var(&lookup, SCAN_TIMEOUT_MS, DEFAULT_TIMEOUT.as_millis() as u64)?;
        let base_delay_ms: u64 =
            parse_var(&lookup, SCAN_BASE_DELAY_MS, defaults.base_delay.as_millis() as u64)?;
        let max_attempts: u32 = parse_var(&lookup, SCAN_MAX_ATTEMPTS, defaults.max_attempts)?;

        if max_attempts == 0 {
            return Err(format!("{SCAN_MAX_ATTEMPTS} must be at least 1").into());
        }

        Ok(ScanConfig {
            request: ScanRequest::new(table_name)?,
            consistent_read: parse_var(&lookup, SCAN_CONSISTENT_READ, false)?,
            timeout: Duration::from_millis(timeout_ms),
            retry_policy: RetryPolicy {
                max_attempts,
                base_delay: Duration::from_millis(base_delay_ms),
                ..defaults
            },
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, Error>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|err| format!("Invalid {key} value {value:?}: {err}").into()),
    }
}
