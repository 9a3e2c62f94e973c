#![forbid(unsafe_code)]

//! Navigation configuration.
//!
//! Values come from defaults overridden by environment variables. Lookup is
//! injectable so tests never touch the process environment.
//!
//! | Variable                | Meaning                                  | Default  |
//! |-------------------------|------------------------------------------|----------|
//! | `TVNAV_ROWS`            | Rows shown over the item list (≥ 1)      | `3`      |
//! | `TVNAV_SCROLL_ANCHOR`   | `center` or `nearest`                    | `center` |
//! | `TVNAV_LOG_TRANSITIONS` | Log every focus change at `info`         | `false`  |

use std::fmt;

use tvnav_core::GridModel;

use crate::scroll::ScrollAnchor;

const ENV_ROWS: &str = "TVNAV_ROWS";
const ENV_SCROLL_ANCHOR: &str = "TVNAV_SCROLL_ANCHOR";
const ENV_LOG_TRANSITIONS: &str = "TVNAV_LOG_TRANSITIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavConfig {
    /// Rows of tiles, all backed by the same item list.
    pub rows: usize,
    pub scroll_anchor: ScrollAnchor,
    /// Emit an `info` event per focus change (otherwise `debug`).
    pub log_transitions: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            rows: GridModel::DEFAULT_ROWS,
            scroll_anchor: ScrollAnchor::Center,
            log_transitions: false,
        }
    }
}

impl NavConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ROWS) {
            config.rows = match value.trim().parse::<usize>() {
                Ok(rows) if rows > 0 => rows,
                _ => return Err(ConfigError::invalid(ENV_ROWS, value, "a positive integer")),
            };
        }
        if let Some(value) = lookup(ENV_SCROLL_ANCHOR) {
            config.scroll_anchor = ScrollAnchor::parse(&value)
                .ok_or_else(|| ConfigError::invalid(ENV_SCROLL_ANCHOR, value, "center|nearest"))?;
        }
        if let Some(value) = lookup(ENV_LOG_TRANSITIONS) {
            config.log_transitions = parse_bool(&value)
                .ok_or_else(|| ConfigError::invalid(ENV_LOG_TRANSITIONS, value, "a boolean"))?;
        }

        Ok(config)
    }

    /// Grid for a dashboard whose rows all show the same `items`.
    #[must_use]
    pub fn grid_for(&self, items: usize) -> GridModel {
        GridModel::uniform(self.rows, items)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration value could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: String, expected: &'static str) -> Self {
        Self::InvalidValue {
            key,
            value,
            expected,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "{key}={value:?} is invalid (expected {expected})"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = NavConfig::from_env_with(env(&[])).unwrap();
        assert_eq!(config, NavConfig::default());
        assert_eq!(config.rows, 3);
        assert_eq!(config.scroll_anchor, ScrollAnchor::Center);
        assert!(!config.log_transitions);
    }

    #[test]
    fn overrides_apply() {
        let config = NavConfig::from_env_with(env(&[
            ("TVNAV_ROWS", "5"),
            ("TVNAV_SCROLL_ANCHOR", "nearest"),
            ("TVNAV_LOG_TRANSITIONS", "on"),
        ]))
        .unwrap();
        assert_eq!(config.rows, 5);
        assert_eq!(config.scroll_anchor, ScrollAnchor::Nearest);
        assert!(config.log_transitions);
    }

    #[test]
    fn zero_rows_rejected() {
        let err = NavConfig::from_env_with(env(&[("TVNAV_ROWS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "TVNAV_ROWS", .. }));
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn bad_values_name_their_key() {
        let err = NavConfig::from_env_with(env(&[("TVNAV_SCROLL_ANCHOR", "top")])).unwrap_err();
        assert!(err.to_string().starts_with("TVNAV_SCROLL_ANCHOR=\"top\""));
        let err = NavConfig::from_env_with(env(&[("TVNAV_LOG_TRANSITIONS", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "TVNAV_LOG_TRANSITIONS", .. }));
    }

    #[test]
    fn grid_for_uses_rows() {
        let config = NavConfig {
            rows: 2,
            ..NavConfig::default()
        };
        assert_eq!(config.grid_for(4), GridModel::uniform(2, 4));
    }
}
