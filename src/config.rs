//! Environment-driven configuration.
//!
//! `.env` is loaded by the binary before `Config::from_env` runs, so every key
//! can live there or in the process environment.

use std::time::Duration;

use thiserror::Error;

use crate::api::{ApiError, TransactionsApiClient};
use crate::store::ValidationRules;

pub const API_URL_VAR: &str = "FINTRACK_API_URL";
pub const TIMEOUT_VAR: &str = "FINTRACK_TIMEOUT_SECS";
pub const VALIDATION_VAR: &str = "FINTRACK_VALIDATION";
pub const CURRENCY_VAR: &str = "FINTRACK_CURRENCY";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    /// `None` means requests wait as long as the server takes
    pub request_timeout: Option<Duration>,
    pub validation: ValidationRules,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: TransactionsApiClient::DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            validation: ValidationRules::none(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(url) = get(API_URL_VAR) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    key: API_URL_VAR,
                    value: url,
                    reason: "expected an http:// or https:// URL".to_string(),
                });
            }
            config.api_url = url;
        }

        if let Some(secs) = get(TIMEOUT_VAR) {
            let parsed = secs.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: TIMEOUT_VAR,
                value: secs.clone(),
                reason: e.to_string(),
            })?;
            config.request_timeout = (parsed > 0).then(|| Duration::from_secs(parsed));
        }

        if let Some(mode) = get(VALIDATION_VAR) {
            config.validation = match mode.to_lowercase().as_str() {
                "off" | "none" => ValidationRules::none(),
                "strict" => ValidationRules::strict(),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: VALIDATION_VAR,
                        value: mode,
                        reason: "expected 'off' or 'strict'".to_string(),
                    })
                }
            };
        }

        if let Some(symbol) = get(CURRENCY_VAR) {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }

    pub fn build_client(&self) -> Result<TransactionsApiClient, ApiError> {
        match self.request_timeout {
            Some(timeout) => TransactionsApiClient::with_timeout(self.api_url.clone(), timeout),
            None => Ok(TransactionsApiClient::new(self.api_url.clone())),
        }
    }
}
