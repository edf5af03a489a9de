// File: src/core/schema.rs
//! Serialized form of the currency metadata table. These types only describe
//! the JSON shape; [`crate::core::registry`] validates and compiles them.

use crate::core::types::{JoinMethod, ScanDirection};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Metadata key holding a currency's serial directive tree.
pub const SERIAL_KEY: &str = "serial";

/// Prefix of the per-denomination (or named) directive keys in a serial tree.
pub const DIRECTIVE_KEY_PREFIX: &str = "serial_";

pub type CurrencyTableConfig = BTreeMap<String, CurrencyConfig>;

/// Metadata for one currency code. An all-default value means "known code,
/// nothing configured".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CurrencyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_marks: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub denominations: BTreeMap<String, DenominationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<SerialConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DenominationConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
    /// Same as `patterns` but compiled for the backtracking engine.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dual_patterns: Vec<String>,
    #[serde(default)]
    pub join_method: JoinMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy: Option<FuzzyConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fuzzy_ignore: Vec<String>,
    /// `"r,g,b"` to weight.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub color_hints: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuzzyConfig {
    pub vocabulary: Vec<String>,
    pub depth: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DirectiveConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Selects the backtracking engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual_pattern: Option<String>,
    #[serde(default)]
    pub direction: ScanDirection,
    #[serde(default)]
    pub capture_group: usize,
    #[serde(default)]
    pub join_method: JoinMethod,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens_to_remove: Vec<String>,
    #[serde(default)]
    pub result_filters: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_filters: Vec<String>,
}

/// A `serial_<name>` entry: either a concrete directive or the name of
/// another entry in the same tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectiveEntryConfig {
    Reference(String),
    Concrete(DirectiveConfig),
}

/// The serial tree: the root holds the default directive's fields inline, and
/// `serial_<name>` keys sit next to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct SerialConfig {
    pub root: DirectiveConfig,
    pub directives: BTreeMap<String, DirectiveEntryConfig>,
}

impl TryFrom<Map<String, Value>> for SerialConfig {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut root = Map::new();
        let mut directives = BTreeMap::new();
        for (key, value) in map {
            if !key.starts_with(DIRECTIVE_KEY_PREFIX) {
                root.insert(key, value);
                continue;
            }
            let entry = match value {
                Value::String(name) => DirectiveEntryConfig::Reference(name),
                Value::Object(_) => DirectiveEntryConfig::Concrete(
                    serde_json::from_value(value).map_err(|e| format!("directive '{}': {}", key, e))?,
                ),
                other => {
                    return Err(format!(
                        "directive '{}' must be an object or a directive name, got {}",
                        key, other
                    ))
                }
            };
            directives.insert(key, entry);
        }
        let root = serde_json::from_value(Value::Object(root))
            .map_err(|e| format!("default serial directive: {}", e))?;
        Ok(SerialConfig { root, directives })
    }
}

impl From<SerialConfig> for Map<String, Value> {
    fn from(config: SerialConfig) -> Self {
        let mut map = match serde_json::to_value(&config.root) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        for (key, entry) in config.directives {
            if let Ok(value) = serde_json::to_value(&entry) {
                map.insert(key, value);
            }
        }
        map
    }
}
