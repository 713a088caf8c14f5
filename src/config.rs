//! Settings for the demo program.
//!
//! Recipes and step delays are fixed. Only the starting stock and the
//! list of orders to place are configurable.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Starting stock and the orders the demo places, in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub water: u32,
    pub coffee: u32,
    pub milk: u32,
    pub orders: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            water: 100,
            coffee: 100,
            milk: 100,
            orders: vec![
                "coffee".to_string(),
                "cappuccino".to_string(),
                "tea".to_string(),
            ],
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_sample_order_run() {
        let config = DemoConfig::default();
        assert_eq!((config.water, config.coffee, config.milk), (100, 100, 100));
        assert_eq!(config.orders, vec!["coffee", "cappuccino", "tea"]);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = DemoConfig::from_json(r#"{ "milk": 0, "orders": ["cappuccino"] }"#).unwrap();
        assert_eq!(config.water, 100);
        assert_eq!(config.milk, 0);
        assert_eq!(config.orders, vec!["cappuccino"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DemoConfig::from_json("{ water: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DemoConfig::load(Path::new("/nonexistent/barista.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
