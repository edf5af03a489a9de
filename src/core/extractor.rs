// File: src/core/extractor.rs
use crate::core::filters::{apply_match_filters, apply_result_filters};
use crate::core::registry::{SerialDirective, SerialTree};
use crate::core::resolver;
use crate::core::tokens;
use crate::error::Result;
use tracing::{debug, warn};

/// Resolves the directive for `denomination` and runs it over `tokens`.
pub fn extract_serial(tree: &SerialTree, denomination: Option<&str>, tokens: &[String]) -> Result<String> {
    let directive = resolver::resolve(tree, denomination)?;
    Ok(extract(&directive, tokens))
}

/// Runs a resolved directive. An empty string means no serial was found.
pub fn extract(directive: &SerialDirective, tokens: &[String]) -> String {
    match tokens::join(tokens, directive.join_method) {
        None => extract_from_tokens(directive, tokens),
        Some(joined) => extract_from_joined(directive, joined),
    }
}

fn extract_from_tokens(directive: &SerialDirective, tokens: &[String]) -> String {
    let serial = tokens
        .iter()
        .filter(|token| !directive.tokens_to_remove.iter().any(|re| re.is_match(token)))
        .find(|token| directive.matcher.is_match(token))
        .map(String::as_str)
        .unwrap_or_default();
    apply_result_filters(serial, &directive.result_filters)
}

fn extract_from_joined(directive: &SerialDirective, mut joined: String) -> String {
    if joined.is_empty() {
        return String::new();
    }
    for re in &directive.tokens_to_remove {
        joined = re.replace_all(&joined, "").into_owned();
    }
    debug!(directive = %directive.name, joined = %joined, "searching joined tokens");

    let Some(groups) = directive.matcher.capture_groups(&joined) else {
        return String::new();
    };
    let groups = apply_match_filters(groups, &directive.match_filters);
    match groups.get(directive.capture_group) {
        Some(serial) => apply_result_filters(serial, &directive.result_filters),
        None => {
            warn!(
                directive = %directive.name,
                group = directive.capture_group,
                available = groups.len(),
                "capture group missing after match filters"
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::CurrencyTable;
    use crate::error::MintError;

    fn tree(serial: &str) -> SerialTree {
        let json = format!(r#"{{ "BSD": {{ "serial": {} }} }}"#, serial);
        CurrencyTable::from_json(&json)
            .unwrap()
            .get("BSD")
            .unwrap()
            .serial
            .clone()
            .unwrap()
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const ROOT: &str = r#""joinMethod": "space_delimited", "pattern": "(my_serial)", "captureGroup": 1, "resultFilters": ["remove-spaces"]"#;

    #[test]
    fn default_directive_when_no_denomination() {
        let tree = tree(&format!("{{ {} }}", ROOT));
        let serial = extract_serial(&tree, None, &words(&["word", "term", "my_serial"])).unwrap();
        assert_eq!(serial, "my_serial");
    }

    #[test]
    fn denomination_directive_when_denomination_given() {
        let tree = tree(&format!(
            r#"{{ {}, "serial_100": {{ "pattern": "(my_100_serial)", "captureGroup": 1, "joinMethod": "space_delimited", "resultFilters": [] }} }}"#,
            ROOT
        ));
        let tokens = words(&["word", "term", "my_serial", "my_100_serial"]);
        assert_eq!(extract_serial(&tree, Some("100"), &tokens).unwrap(), "my_100_serial");
    }

    #[test]
    fn referenced_directive_with_filters() {
        let tree = tree(&format!(
            r#"{{ {}, "serial_50": {{ "pattern": "(my 100 serial)", "captureGroup": 1, "joinMethod": "space_delimited", "resultFilters": ["remove-spaces"] }}, "serial_100": "serial_50" }}"#,
            ROOT
        ));
        let tokens = words(&["word", "term", "my_serial", "my 100 serial"]);
        assert_eq!(extract_serial(&tree, Some("100"), &tokens).unwrap(), "my100serial");
    }

    #[test]
    fn dangling_reference_yields_error_not_serial() {
        let tree = tree(&format!(r#"{{ {}, "serial_100": "serial_10" }}"#, ROOT));
        let err = extract_serial(&tree, Some("100"), &words(&["my_serial"])).unwrap_err();
        assert!(matches!(err, MintError::DirectiveNotDefined(name) if name == "serial_10"));
    }

    #[test]
    fn no_match_is_an_empty_serial() {
        let tree = tree(&format!("{{ {} }}", ROOT));
        assert_eq!(extract_serial(&tree, None, &words(&["nothing", "here"])).unwrap(), "");
        assert_eq!(extract_serial(&tree, None, &[]).unwrap(), "");
    }

    #[test]
    fn per_token_mode_skips_removed_tokens() {
        let tree = tree(
            r#"{ "joinMethod": "no", "pattern": "^[A-Z]{2}[0-9]{7}$", "captureGroup": 0,
                 "tokensToRemove": ["^AA"], "resultFilters": [] }"#,
        );
        let tokens = words(&["AA1234567", "naira", "BC7654321", "CD1111111"]);
        assert_eq!(extract_serial(&tree, None, &tokens).unwrap(), "BC7654321");
    }

    #[test]
    fn tokens_to_remove_are_scrubbed_from_joined_text() {
        let tree = tree(
            r#"{ "joinMethod": "noDelimiter", "pattern": "([A-Z]{2}[0-9]{6,7})", "captureGroup": 1,
                 "tokensToRemove": ["[[:punct:]]"], "resultFilters": [] }"#,
        );
        let tokens = words(&["FIFTY", "AB-123.4567", "naira"]);
        assert_eq!(extract_serial(&tree, None, &tokens).unwrap(), "AB1234567");
    }

    #[test]
    fn backtracking_right_to_left_with_empty_groups_removed() {
        let tree = tree(
            r#"{ "joinMethod": "noDelimiter",
                 "dualPattern": "(?:(?i:[A-Z])?([A-Z]{2}[0-9]{7})[^0-9])|(?:(?:[A-Z]{2,})?([0-9]{6})(?:[0-9]{2})?)",
                 "direction": "rightToLeft", "captureGroup": 1,
                 "tokensToRemove": ["1987", "1909"], "matchFilters": ["remove-empty"], "resultFilters": [] }"#,
        );
        let tokens = words(&["1909", "HUNDRED", "NAIRA", "1987", "CENTRAL", "AB12345678"]);
        assert_eq!(extract_serial(&tree, None, &tokens).unwrap(), "123456");
    }

    #[test]
    fn extraction_is_idempotent() {
        let tree = tree(&format!("{{ {} }}", ROOT));
        let tokens = words(&["word", "my_serial"]);
        let first = extract_serial(&tree, None, &tokens).unwrap();
        let second = extract_serial(&tree, None, &tokens).unwrap();
        assert_eq!(first, second);
    }
}
