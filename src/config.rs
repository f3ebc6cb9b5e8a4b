use std::{env, str::FromStr};

use dotenv::dotenv;
use tracing::Level;

use crate::error::{CheckoutApiError, Result};

pub const RESOURCE_CHECKOUT: &str = "checkout";

pub const RESPONSE_CODE_ORDER_NOT_PLACED: &str = "1102";
pub const RESPONSE_CODE_USER_IS_NOT_SPECIFIED: &str = "1105";
pub const RESPONSE_DETAILS_USER_IS_NOT_SPECIFIED: &str = "User is not specified.";

/// Glossary key used when the checkout engine fails without naming a reason.
pub const GLOSSARY_KEY_ORDER_NOT_PLACED: &str = "checkout.order.not_placed";

const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Clone)]
pub struct CheckoutApiConfig {
    pub default_locale: String,
    pub log_level: Level,
    pub log_path: Option<String>,
}

impl Default for CheckoutApiConfig {
    fn default() -> Self {
        CheckoutApiConfig {
            default_locale: String::from(DEFAULT_LOCALE),
            log_level: Level::DEBUG,
            log_path: None,
        }
    }
}

impl CheckoutApiConfig {
    /// Reads `CHECKOUT_DEFAULT_LOCALE`, `LOG_LEVEL` and `LOG_PATH`, loading a
    /// `.env` file first when one exists.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CheckoutApiConfig::default();

        let default_locale = match lookup("CHECKOUT_DEFAULT_LOCALE") {
            Some(locale) if !locale.trim().is_empty() => locale,
            _ => defaults.default_locale,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) if !level.trim().is_empty() => Level::from_str(level.trim()).map_err(|_| {
                CheckoutApiError::Configuration(format!("Invalid LOG_LEVEL: {}", level))
            })?,
            _ => defaults.log_level,
        };

        let log_path = lookup("LOG_PATH").filter(|path| !path.trim().is_empty());

        Ok(CheckoutApiConfig {
            default_locale: default_locale,
            log_level: log_level,
            log_path: log_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = CheckoutApiConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.default_locale, "en_US");
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn variables_override_defaults() {
        let config = CheckoutApiConfig::from_lookup(lookup_from(&[
            ("CHECKOUT_DEFAULT_LOCALE", "de_DE"),
            ("LOG_LEVEL", "warn"),
            ("LOG_PATH", "/tmp/checkout.log"),
        ]))
        .unwrap();

        assert_eq!(config.default_locale, "de_DE");
        assert_eq!(config.log_level, Level::WARN);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/checkout.log"));
    }

    #[test]
    fn blank_variables_are_treated_as_unset() {
        let config = CheckoutApiConfig::from_lookup(lookup_from(&[
            ("CHECKOUT_DEFAULT_LOCALE", " "),
            ("LOG_LEVEL", "  "),
            ("LOG_PATH", ""),
        ]))
        .unwrap();

        assert_eq!(config.default_locale, "en_US");
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn invalid_log_level_is_a_configuration_error() {
        let result = CheckoutApiConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "loud")]));

        assert!(matches!(result, Err(CheckoutApiError::Configuration(_))));
    }
}
