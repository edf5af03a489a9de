// File: src/core/filters.rs
use crate::error::{MintError, Result};

/// Post-match transformation applied to an extracted serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFilter {
    RemoveWhitespace,
}

/// Transformation applied to the list of captured groups before a group is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFilter {
    RemoveEmpty,
}

impl ResultFilter {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "remove-whitespace" | "remove-spaces" => Ok(ResultFilter::RemoveWhitespace),
            other => Err(MintError::config(format!("unknown result filter '{}'", other))),
        }
    }

    pub fn apply(self, value: &str) -> String {
        match self {
            ResultFilter::RemoveWhitespace => value.chars().filter(|c| !c.is_whitespace()).collect(),
        }
    }
}

impl MatchFilter {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "remove-empty" => Ok(MatchFilter::RemoveEmpty),
            other => Err(MintError::config(format!("unknown match filter '{}'", other))),
        }
    }

    pub fn apply(self, matches: Vec<String>) -> Vec<String> {
        match self {
            MatchFilter::RemoveEmpty => matches.into_iter().filter(|m| !m.is_empty()).collect(),
        }
    }
}

pub fn apply_result_filters(value: &str, filters: &[ResultFilter]) -> String {
    filters
        .iter()
        .fold(value.to_string(), |acc, filter| filter.apply(&acc))
}

pub fn apply_match_filters(matches: Vec<String>, filters: &[MatchFilter]) -> Vec<String> {
    filters.iter().fold(matches, |acc, filter| filter.apply(acc))
}
