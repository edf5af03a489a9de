// File: src/config.rs
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Env var naming the currency metadata JSON file.
pub const CURRENCY_META_ENV: &str = "MINT_CURRENCY_META";
/// Env var naming the engine settings JSON file.
pub const ENGINE_CONFIG_ENV: &str = "MINT_ENGINE_CONFIG";

/// Tunables of the money gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Minimum confidence for a money label to count.
    pub min_label_score: f32,
    /// Label descriptions that mark an image as currency. Matched case-sensitively.
    pub money_labels: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_label_score: 0.5,
            money_labels: vec!["currency".to_string(), "money".to_string()],
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_label_vocabulary() {
        let config = EngineConfig::default();
        assert_eq!(config.min_label_score, 0.5);
        assert_eq!(config.money_labels, vec!["currency", "money"]);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{ "minLabelScore": 0.8 }"#).unwrap();
        assert_eq!(config.min_label_score, 0.8);
        assert_eq!(config.money_labels.len(), 2);
    }
}
