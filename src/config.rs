//! Demo configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! - `WRAPKIT_ACCOUNT_NAME`: account holder name (optional, default: `alice`)
//! - `WRAPKIT_PASSWORD`: account password (required)
//! - `WRAPKIT_OPENING_BALANCE`: opening balance (optional, default: 100)
//! - `WRAPKIT_PROMPT`: password prompt text (optional, default: `Enter Password: `)
//!
//! A `.env` file in the working directory is read first when present.

use std::collections::HashMap;
use std::env;

use thiserror::Error;

use crate::account::DEFAULT_OPENING_BALANCE;
use crate::gate::DEFAULT_PROMPT_TEXT;

const ACCOUNT_NAME: &str = "WRAPKIT_ACCOUNT_NAME";
const PASSWORD: &str = "WRAPKIT_PASSWORD";
const OPENING_BALANCE: &str = "WRAPKIT_OPENING_BALANCE";
const PROMPT: &str = "WRAPKIT_PROMPT";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Settings for the demo account session.
#[derive(Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Account holder name.
    pub account_name: String,
    /// Account password.
    pub password: String,
    /// Balance the account opens with.
    pub opening_balance: u64,
    /// Text shown when asking for the password.
    pub prompt_text: String,
}

impl std::fmt::Debug for DemoConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DemoConfig")
            .field("account_name", &self.account_name)
            .field("password", &"<redacted>")
            .field("opening_balance", &self.opening_balance)
            .field("prompt_text", &self.prompt_text)
            .finish()
    }
}

impl DemoConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `WRAPKIT_PASSWORD` is not set.
    /// Returns `ConfigError::InvalidValue` if `WRAPKIT_OPENING_BALANCE` is not
    /// an unsigned integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an explicit key/value map.
    ///
    /// # Errors
    ///
    /// Same as [`DemoConfig::from_env`].
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let account_name = lookup(ACCOUNT_NAME).unwrap_or_else(|| "alice".to_string());
        let password =
            lookup(PASSWORD).ok_or_else(|| ConfigError::MissingEnvVar(PASSWORD.to_string()))?;
        let opening_balance = match lookup(OPENING_BALANCE) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|error: std::num::ParseIntError| ConfigError::InvalidValue {
                    key: OPENING_BALANCE.to_string(),
                    message: error.to_string(),
                })?,
            None => DEFAULT_OPENING_BALANCE,
        };
        let prompt_text = lookup(PROMPT).unwrap_or_else(|| DEFAULT_PROMPT_TEXT.to_string());

        Ok(Self {
            account_name,
            password,
            opening_balance,
            prompt_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[rstest]
    fn defaults_apply_when_only_password_set() {
        let config = DemoConfig::from_map(&values(&[(PASSWORD, "hunter2")])).unwrap();

        assert_eq!(config.account_name, "alice");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.opening_balance, 100);
        assert_eq!(config.prompt_text, "Enter Password: ");
    }

    #[rstest]
    fn all_values_override_defaults() {
        let config = DemoConfig::from_map(&values(&[
            (ACCOUNT_NAME, "bob"),
            (PASSWORD, "pw"),
            (OPENING_BALANCE, "250"),
            (PROMPT, "PIN: "),
        ]))
        .unwrap();

        assert_eq!(config.account_name, "bob");
        assert_eq!(config.opening_balance, 250);
        assert_eq!(config.prompt_text, "PIN: ");
    }

    #[rstest]
    fn missing_password_is_an_error() {
        let error = DemoConfig::from_map(&HashMap::new()).unwrap_err();

        assert_eq!(error, ConfigError::MissingEnvVar(PASSWORD.to_string()));
        assert_eq!(
            error.to_string(),
            "Missing environment variable: WRAPKIT_PASSWORD"
        );
    }

    #[rstest]
    #[case("-5")]
    #[case("lots")]
    fn invalid_balance_is_an_error(#[case] balance: &str) {
        let error =
            DemoConfig::from_map(&values(&[(PASSWORD, "pw"), (OPENING_BALANCE, balance)]))
                .unwrap_err();

        assert!(matches!(error, ConfigError::InvalidValue { key, .. } if key == OPENING_BALANCE));
    }

    #[rstest]
    fn debug_hides_password() {
        let config = DemoConfig::from_map(&values(&[(PASSWORD, "hunter2")])).unwrap();

        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
