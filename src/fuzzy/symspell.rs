// File: src/fuzzy/symspell.rs
use std::collections::{BTreeSet, HashMap, HashSet};

/// Index into the trained vocabulary.
type WordId = usize;

/// Spelling-variant suggester based on the Symmetric Delete (SymSpell) algorithm.
/// Every vocabulary word is indexed under all of its delete variants up to
/// `max_edit_distance`, so a lookup only has to generate the deletes of the query.
///
/// Trained once per denomination; queries never mutate it.
#[derive(Debug, Clone)]
pub struct FuzzyModel {
    /// Maps a delete variant (e.g., "fve") to the words it could have come from.
    deletes: HashMap<String, HashSet<WordId>>,
    vocabulary: Vec<String>,
    max_edit_distance: usize,
}

impl FuzzyModel {
    pub fn train<S: AsRef<str>>(vocabulary: &[S], max_edit_distance: usize) -> Self {
        let mut model = Self {
            deletes: HashMap::new(),
            vocabulary: Vec::new(),
            max_edit_distance,
        };
        for word in vocabulary {
            model.add_word(word.as_ref());
        }
        model
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    fn add_word(&mut self, word: &str) {
        let word = word.to_lowercase();
        if word.is_empty() || self.vocabulary.contains(&word) {
            return;
        }
        let word_id = self.vocabulary.len();
        for edit in self.generate_edits(&word) {
            self.deletes.entry(edit).or_default().insert(word_id);
        }
        self.vocabulary.push(word);
    }

    /// Vocabulary words within `max_edit_distance` of `word`, excluding `word`
    /// itself. Lookup is case-insensitive and suggestions come back lowercase,
    /// sorted for stable output.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        let mut candidates = BTreeSet::new();
        for edit in self.generate_edits(&word) {
            if let Some(word_ids) = self.deletes.get(&edit) {
                for &id in word_ids {
                    let candidate = &self.vocabulary[id];
                    // Shared deletes only bound the distance loosely; "ab" and "ba" share "a".
                    if *candidate != word && edit_distance(candidate, &word) <= self.max_edit_distance {
                        candidates.insert(candidate.clone());
                    }
                }
            }
        }
        candidates.into_iter().collect()
    }

    /// Generates all unique delete variants within `max_edit_distance`,
    /// including the word itself. Deletes operate on chars, not bytes.
    fn generate_edits(&self, word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        edits.insert(word.to_string()); // Distance 0

        let mut current_edits = edits.clone();

        for _ in 0..self.max_edit_distance {
            let mut next_edits = HashSet::new();
            for edit in &current_edits {
                for (i, _) in edit.char_indices() {
                    let mut deleted_variant = edit.clone();
                    deleted_variant.remove(i);
                    next_edits.insert(deleted_variant);
                }
            }
            next_edits.retain(|e| !edits.contains(e));
            if next_edits.is_empty() {
                break;
            }
            edits.extend(next_edits.iter().cloned());
            current_edits = next_edits;
        }

        edits
    }
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}
