// File: src/core/classifier.rs
use crate::core::registry::{CurrencyMetadata, DenominationRule};
use crate::core::tokens;
use std::borrow::Cow;
use tracing::debug;

/// Returns the first denomination (ascending numeric order) whose patterns
/// all match, or an empty string when none does.
pub fn classify(metadata: &CurrencyMetadata, tokens: &[String]) -> String {
    metadata
        .denominations
        .iter()
        .find(|rule| {
            let matched = rule.matches(tokens);
            debug!(currency = %metadata.code, denomination = %rule.denomination, matched, "checked denomination");
            matched
        })
        .map(|rule| rule.denomination.clone())
        .unwrap_or_default()
}

impl DenominationRule {
    /// Appends fuzzy suggestions after each token that is not on the ignore
    /// list. Original tokens are always kept.
    pub fn expand_tokens<'a>(&self, tokens: &'a [String]) -> Cow<'a, [String]> {
        let Some(model) = &self.fuzzy else {
            return Cow::Borrowed(tokens);
        };
        let mut expanded = Vec::with_capacity(tokens.len());
        for token in tokens {
            expanded.push(token.clone());
            if self.fuzzy_ignore.iter().any(|re| re.is_match(token)) {
                continue;
            }
            expanded.extend(model.suggest(token));
        }
        Cow::Owned(expanded)
    }

    /// Joined rules need every pattern to match the joined text; per-token
    /// rules need every pattern to match at least one token.
    pub fn matches(&self, tokens: &[String]) -> bool {
        let tokens = self.expand_tokens(tokens);
        match tokens::join(&tokens, self.join_method) {
            Some(joined) => {
                !joined.is_empty() && self.patterns.iter().all(|p| p.is_match(&joined))
            }
            None => self
                .patterns
                .iter()
                .all(|p| tokens.iter().any(|token| p.is_match(token))),
        }
    }
}
