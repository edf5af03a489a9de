// File: src/core/gate.rs
use crate::config::EngineConfig;
use crate::core::registry::CurrencyMetadata;
use crate::core::types::Label;

/// True when at least one money label reaches the configured confidence.
pub fn is_money(labels: &[Label], config: &EngineConfig) -> bool {
    labels.iter().any(|label| {
        label.score >= config.min_label_score
            && config.money_labels.iter().any(|m| *m == label.description)
    })
}

/// True when every text mark matches some token. Currencies without text
/// marks always pass.
pub fn has_text_marks(metadata: &CurrencyMetadata, tokens: &[String]) -> bool {
    metadata
        .text_marks
        .iter()
        .all(|mark| tokens.iter().any(|token| mark.is_match(token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::CurrencyTable;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn money_needs_a_confident_money_label() {
        let config = EngineConfig::default();
        assert!(is_money(&[Label::new("paper", 0.9), Label::new("money", 0.5)], &config));
        assert!(is_money(&[Label::new("currency", 0.7)], &config));
        assert!(!is_money(&[Label::new("money", 0.49)], &config));
        assert!(!is_money(&[Label::new("Money", 0.99)], &config));
        assert!(!is_money(&[], &config));
    }

    #[test]
    fn text_marks_must_all_be_found() {
        let table = CurrencyTable::from_json(
            r#"{ "BSD": { "textMarks": ["bahamas"] }, "USD": { "language": "en" } }"#,
        )
        .unwrap();
        let bsd = table.get("BSD").unwrap();
        assert!(has_text_marks(bsd, &words(&["one", "dollar", "bahamas"])));
        assert!(!has_text_marks(bsd, &words(&["one"])));
        assert!(has_text_marks(table.get("USD").unwrap(), &words(&["anything"])));
    }
}
