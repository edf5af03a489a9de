// File: src/core/matcher.rs
use crate::core::types::{Engine, ScanDirection};
use crate::error::{MintError, Result};
use tracing::warn;

/// A compiled pattern together with the engine it needs.
///
/// `Literal` uses the linear-time `regex` engine. `Lookaround` and `RightToLeft`
/// use `fancy_regex`, which backtracks and so supports look-around assertions.
#[derive(Debug, Clone)]
pub enum PatternMatcher {
    Literal(regex::Regex),
    Lookaround(fancy_regex::Regex),
    RightToLeft(fancy_regex::Regex),
}

impl PatternMatcher {
    pub fn linear(pattern: &str, context: &str) -> Result<Self> {
        regex::Regex::new(pattern)
            .map(PatternMatcher::Literal)
            .map_err(|e| invalid(context, pattern, e))
    }

    pub fn backtracking(pattern: &str, direction: ScanDirection, context: &str) -> Result<Self> {
        let re = fancy_regex::Regex::new(pattern).map_err(|e| invalid(context, pattern, e))?;
        Ok(match direction {
            ScanDirection::LeftToRight => PatternMatcher::Lookaround(re),
            ScanDirection::RightToLeft => PatternMatcher::RightToLeft(re),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            PatternMatcher::Literal(re) => re.as_str(),
            PatternMatcher::Lookaround(re) => re.as_str(),
            PatternMatcher::RightToLeft(re) => re.as_str(),
        }
    }

    pub fn engine(&self) -> Engine {
        match self {
            PatternMatcher::Literal(_) => Engine::Linear,
            _ => Engine::Backtracking,
        }
    }

    pub fn direction(&self) -> ScanDirection {
        match self {
            PatternMatcher::RightToLeft(_) => ScanDirection::RightToLeft,
            _ => ScanDirection::LeftToRight,
        }
    }

    /// Number of capture groups, counting the implicit whole-match group 0.
    pub fn captures_len(&self) -> usize {
        match self {
            PatternMatcher::Literal(re) => re.captures_len(),
            PatternMatcher::Lookaround(re) => re.captures_len(),
            PatternMatcher::RightToLeft(re) => re.captures_len(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            PatternMatcher::Literal(re) => re.is_match(text),
            PatternMatcher::Lookaround(re) | PatternMatcher::RightToLeft(re) => {
                re.is_match(text).unwrap_or_else(|e| {
                    warn!(pattern = re.as_str(), error = %e, "backtracking match aborted");
                    false
                })
            }
        }
    }

    /// Runs one capture attempt and returns every group, group 0 first.
    /// Groups that did not participate come back as empty strings.
    pub fn capture_groups(&self, text: &str) -> Option<Vec<String>> {
        match self {
            PatternMatcher::Literal(re) => re.captures(text).map(|caps| {
                caps.iter()
                    .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect()
            }),
            PatternMatcher::Lookaround(re) => fancy_groups(re, text),
            PatternMatcher::RightToLeft(re) => rightmost_groups(re, text),
        }
    }
}

/// Tries a match at every char boundary against the whole text, then keeps
/// the rightmost end and, among equal ends, the leftmost start.
fn rightmost_groups(re: &fancy_regex::Regex, text: &str) -> Option<Vec<String>> {
    let mut best: Option<(usize, fancy_regex::Captures)> = None;
    let starts = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len()));
    for start in starts {
        let caps = match re.captures_from_pos(text, start) {
            Ok(Some(caps)) => caps,
            Ok(None) => break,
            Err(e) => {
                warn!(pattern = re.as_str(), error = %e, "backtracking capture aborted");
                return None;
            }
        };
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() != start {
            continue;
        }
        if best.as_ref().map_or(true, |(end, _)| whole.end() > *end) {
            best = Some((whole.end(), caps));
        }
    }
    best.map(|(_, caps)| collect_groups(&caps))
}

fn fancy_groups(re: &fancy_regex::Regex, text: &str) -> Option<Vec<String>> {
    match re.captures(text) {
        Ok(Some(caps)) => Some(collect_groups(&caps)),
        Ok(None) => None,
        Err(e) => {
            warn!(pattern = re.as_str(), error = %e, "backtracking capture aborted");
            None
        }
    }
}

fn collect_groups(caps: &fancy_regex::Captures) -> Vec<String> {
    (0..caps.len())
        .map(|i| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default())
        .collect()
}

fn invalid(context: &str, pattern: &str, err: impl std::fmt::Display) -> MintError {
    MintError::InvalidPattern {
        context: context.to_string(),
        pattern: pattern.to_string(),
        reason: err.to_string(),
    }
}
