// File: src/core/registry.rs
use crate::core::filters::{MatchFilter, ResultFilter};
use crate::core::matcher::PatternMatcher;
use crate::core::schema::{
    CurrencyConfig, CurrencyTableConfig, DenominationConfig, DirectiveConfig, DirectiveEntryConfig,
    SerialConfig, DIRECTIVE_KEY_PREFIX,
};
use crate::core::types::{ColorHint, JoinMethod, ScanDirection};
use crate::error::{MintError, Result};
use crate::fuzzy::symspell::FuzzyModel;
use parking_lot::RwLock;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

const BUILTIN_CURRENCY_META: &str = include_str!("../../data/currency_meta.json");

/// Recognition rules for one denomination. All `patterns` must match for the
/// denomination to be selected.
#[derive(Debug, Clone)]
pub struct DenominationRule {
    pub denomination: String,
    pub value: u64,
    pub patterns: Vec<PatternMatcher>,
    pub join_method: JoinMethod,
    pub fuzzy: Option<FuzzyModel>,
    pub fuzzy_ignore: Vec<Regex>,
    pub color_hints: Vec<ColorHint>,
}

/// A fully compiled serial directive; this is the executable plan the
/// extractor runs.
#[derive(Debug, Clone)]
pub struct SerialDirective {
    pub name: String,
    pub matcher: PatternMatcher,
    pub capture_group: usize,
    pub join_method: JoinMethod,
    pub tokens_to_remove: Vec<Regex>,
    pub result_filters: Vec<ResultFilter>,
    pub match_filters: Vec<MatchFilter>,
}

#[derive(Debug, Clone)]
pub enum Directive {
    Concrete(Arc<SerialDirective>),
    /// Name of another entry in the same tree.
    Reference(String),
}

#[derive(Debug, Clone)]
pub struct SerialTree {
    pub root: Arc<SerialDirective>,
    pub entries: BTreeMap<String, Directive>,
}

#[derive(Debug, Clone)]
pub struct CurrencyMetadata {
    pub code: String,
    pub language: Option<String>,
    pub text_marks: Vec<Regex>,
    /// Ascending by numeric value; this is the classifier's evaluation order.
    pub denominations: Vec<DenominationRule>,
    pub serial: Option<SerialTree>,
}

impl CurrencyMetadata {
    /// False for codes that are known but carry no recognition rules.
    pub fn is_defined(&self) -> bool {
        self.language.is_some()
            || !self.text_marks.is_empty()
            || !self.denominations.is_empty()
            || self.serial.is_some()
    }

    pub fn denomination(&self, denomination: &str) -> Option<&DenominationRule> {
        self.denominations.iter().find(|d| d.denomination == denomination)
    }

    fn compile(code: &str, config: &CurrencyConfig) -> Result<Self> {
        let text_marks = config
            .text_marks
            .iter()
            .map(|p| compile_regex(p, &format!("{} text marks", code)))
            .collect::<Result<Vec<_>>>()?;

        let mut denominations = config
            .denominations
            .iter()
            .map(|(denom, rule)| DenominationRule::compile(code, denom, rule))
            .collect::<Result<Vec<_>>>()?;
        denominations.sort_by_key(|d| d.value);

        let serial = config
            .serial
            .as_ref()
            .map(|serial| SerialTree::compile(code, serial))
            .transpose()?;

        Ok(Self {
            code: code.to_string(),
            language: config.language.clone(),
            text_marks,
            denominations,
            serial,
        })
    }
}

impl DenominationRule {
    fn compile(code: &str, denomination: &str, config: &DenominationConfig) -> Result<Self> {
        let context = format!("{} denomination {}", code, denomination);
        let value = denomination.parse::<u64>().map_err(|_| {
            MintError::config(format!("{}: denomination key must be numeric", context))
        })?;

        let patterns = match (config.patterns.is_empty(), config.dual_patterns.is_empty()) {
            (false, true) => config
                .patterns
                .iter()
                .map(|p| PatternMatcher::linear(p, &context))
                .collect::<Result<Vec<_>>>()?,
            (true, false) => config
                .dual_patterns
                .iter()
                .map(|p| PatternMatcher::backtracking(p, ScanDirection::LeftToRight, &context))
                .collect::<Result<Vec<_>>>()?,
            (true, true) => {
                return Err(MintError::config(format!("{}: no patterns configured", context)))
            }
            (false, false) => {
                return Err(MintError::config(format!(
                    "{}: set either patterns or dualPatterns, not both",
                    context
                )))
            }
        };

        let fuzzy_ignore = config
            .fuzzy_ignore
            .iter()
            .map(|p| compile_regex(p, &context))
            .collect::<Result<Vec<_>>>()?;

        let color_hints = config
            .color_hints
            .iter()
            .map(|(rgb, weight)| parse_color_hint(rgb, *weight, &context))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            denomination: denomination.to_string(),
            value,
            patterns,
            join_method: config.join_method,
            fuzzy: config
                .fuzzy
                .as_ref()
                .map(|f| FuzzyModel::train(f.vocabulary.as_slice(), f.depth)),
            fuzzy_ignore,
            color_hints,
        })
    }
}

impl SerialDirective {
    fn compile(name: &str, config: &DirectiveConfig) -> Result<Self> {
        let matcher = match (&config.pattern, &config.dual_pattern) {
            (Some(pattern), None) => {
                if config.direction == ScanDirection::RightToLeft {
                    warn!(directive = name, "right-to-left scanning needs dualPattern; ignoring direction");
                }
                PatternMatcher::linear(pattern, name)?
            }
            (None, Some(pattern)) => PatternMatcher::backtracking(pattern, config.direction, name)?,
            _ => {
                return Err(MintError::config(format!(
                    "{}: exactly one of pattern or dualPattern is required",
                    name
                )))
            }
        };

        if config.capture_group >= matcher.captures_len() {
            return Err(MintError::config(format!(
                "{}: capture group {} exceeds the {} groups of '{}'",
                name,
                config.capture_group,
                matcher.captures_len() - 1,
                matcher.as_str()
            )));
        }

        Ok(Self {
            name: name.to_string(),
            matcher,
            capture_group: config.capture_group,
            join_method: config.join_method,
            tokens_to_remove: config
                .tokens_to_remove
                .iter()
                .map(|p| compile_regex(p, name))
                .collect::<Result<Vec<_>>>()?,
            result_filters: config
                .result_filters
                .iter()
                .map(|f| ResultFilter::parse(f))
                .collect::<Result<Vec<_>>>()?,
            match_filters: config
                .match_filters
                .iter()
                .map(|f| MatchFilter::parse(f))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl SerialTree {
    fn compile(code: &str, config: &SerialConfig) -> Result<Self> {
        let root = Arc::new(SerialDirective::compile(&format!("{} serial", code), &config.root)?);
        let mut entries = BTreeMap::new();
        for (key, entry) in &config.directives {
            let directive = match entry {
                DirectiveEntryConfig::Concrete(directive) => Directive::Concrete(Arc::new(
                    SerialDirective::compile(&format!("{} {}", code, key), directive)?,
                )),
                DirectiveEntryConfig::Reference(name) => Directive::Reference(name.clone()),
            };
            entries.insert(key.clone(), directive);
        }
        Ok(Self { root, entries })
    }

    /// Key under which a denomination's own directive lives.
    pub fn key_for(denomination: &str) -> String {
        format!("{}{}", DIRECTIVE_KEY_PREFIX, denomination)
    }
}

fn compile_regex(pattern: &str, context: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| MintError::InvalidPattern {
        context: context.to_string(),
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

fn parse_color_hint(rgb: &str, weight: f64, context: &str) -> Result<ColorHint> {
    let channels = rgb
        .split(',')
        .map(|c| c.trim().parse::<u8>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .ok()
        .filter(|c| c.len() == 3)
        .ok_or_else(|| MintError::config(format!("{}: bad color hint '{}'", context, rgb)))?;
    Ok(ColorHint {
        rgb: [channels[0], channels[1], channels[2]],
        weight,
    })
}

/// An immutable, validated snapshot of every currency's metadata.
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    currencies: BTreeMap<String, Arc<CurrencyMetadata>>,
    source: CurrencyTableConfig,
}

impl CurrencyTable {
    pub fn from_config(source: CurrencyTableConfig) -> Result<Self> {
        let mut currencies = BTreeMap::new();
        for (code, config) in &source {
            let meta = CurrencyMetadata::compile(code, config)?;
            currencies.insert(code.clone(), Arc::new(meta));
        }
        Ok(Self { currencies, source })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(serde_json::from_str(json)?)
    }

    /// The ISO-4217 code list shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CURRENCY_META)
    }

    pub fn get(&self, code: &str) -> Option<&Arc<CurrencyMetadata>> {
        self.currencies.get(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.currencies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// The configuration this table was compiled from.
    pub fn config(&self) -> &CurrencyTableConfig {
        &self.source
    }
}

/// Process-wide currency metadata. Reads hand out a snapshot; `replace_all`
/// publishes a new table in one step so in-flight requests keep the old one.
#[derive(Debug, Default)]
pub struct CurrencyRegistry {
    table: RwLock<Arc<CurrencyTable>>,
}

impl CurrencyRegistry {
    pub fn new(table: CurrencyTable) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
        }
    }

    pub fn builtin() -> Result<Self> {
        CurrencyTable::builtin().map(Self::new)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let table = crate::persistence::load_table(path)?;
        info!(path = %path.display(), currencies = table.len(), "loaded currency metadata");
        Ok(Self::new(table))
    }

    pub fn snapshot(&self) -> Arc<CurrencyTable> {
        self.table.read().clone()
    }

    pub fn replace_all(&self, table: CurrencyTable) {
        let currencies = table.len();
        *self.table.write() = Arc::new(table);
        info!(currencies, "currency metadata replaced");
    }

    pub fn lookup(&self, code: &str) -> Result<Arc<CurrencyMetadata>> {
        self.snapshot()
            .get(code)
            .cloned()
            .ok_or_else(|| MintError::UnknownCurrencyCode(code.to_string()))
    }

    pub fn is_valid_code(&self, code: &str) -> bool {
        self.snapshot().get(code).is_some()
    }

    /// Codes whose metadata is not empty.
    pub fn defined_currencies(&self) -> BTreeSet<String> {
        self.snapshot()
            .currencies
            .values()
            .filter(|meta| meta.is_defined())
            .map(|meta| meta.code.clone())
            .collect()
    }

    pub fn is_valid_denomination(&self, code: &str, denomination: &str) -> Result<bool> {
        Ok(self.lookup(code)?.denomination(denomination).is_some())
    }

    pub fn language(&self, code: &str) -> Result<Option<String>> {
        Ok(self.lookup(code)?.language.clone())
    }

    /// Denomination keys in ascending numeric order.
    pub fn denominations(&self, code: &str) -> Result<Vec<String>> {
        Ok(self
            .lookup(code)?
            .denominations
            .iter()
            .map(|d| d.denomination.clone())
            .collect())
    }

    pub fn text_marks(&self, code: &str) -> Result<Vec<String>> {
        Ok(self
            .lookup(code)?
            .text_marks
            .iter()
            .map(|re| re.as_str().to_string())
            .collect())
    }
}
