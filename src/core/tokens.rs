// File: src/core/tokens.rs
use crate::core::types::JoinMethod;

/// Turns raw OCR text annotations into tokens. Newlines count as separators,
/// empty fragments are dropped and source order is kept.
pub fn tokenize<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts
        .iter()
        .flat_map(|text| text.as_ref().split_whitespace())
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Joins tokens per `method`. Returns `None` for [`JoinMethod::None`], where
/// patterns run token by token instead.
pub fn join(tokens: &[String], method: JoinMethod) -> Option<String> {
    method.delimiter().map(|delimiter| tokens.join(delimiter))
}
