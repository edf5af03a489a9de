#![allow(dead_code)]

use mint_core::config::EngineConfig;
use mint_core::{CurrencyRegistry, CurrencyTable, Label, MintEngine};
use std::sync::Arc;

pub const TEST_CURRENCY_META: &str = r#"{
    "BSD": {
        "language": "en",
        "textMarks": ["bahamas"],
        "denominations": {
            "1": { "joinMethod": "no", "patterns": ["one", "lynden", "pindling"] },
            "5": { "joinMethod": "no", "patterns": ["(?i)five", "(?i)naira", "(?i)central"] },
            "100": { "joinMethod": "no", "patterns": ["(?i)1909", "1987", "(?i)currency"] }
        },
        "serial": {
            "joinMethod": "space_delimited",
            "pattern": "(my_serial)",
            "captureGroup": 1,
            "resultFilters": ["remove-spaces"],
            "serial_50": {
                "pattern": "(my 100 serial)",
                "captureGroup": 1,
                "joinMethod": "space_delimited",
                "resultFilters": ["remove-spaces"]
            },
            "serial_100": "serial_50",
            "serial_5": "serial_10"
        }
    },
    "USD": { "language": "en" },
    "XDR": {}
}"#;

pub fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn test_table() -> CurrencyTable {
    CurrencyTable::from_json(TEST_CURRENCY_META).expect("fixture metadata is valid")
}

pub fn test_engine() -> MintEngine {
    MintEngine::new(Arc::new(CurrencyRegistry::new(test_table())), EngineConfig::default())
}

pub fn builtin_engine() -> MintEngine {
    MintEngine::with_builtin().expect("builtin metadata is valid")
}

pub fn money_labels() -> Vec<Label> {
    vec![Label::new("paper", 0.97), Label::new("currency", 0.81)]
}
