use crate::DictionaryOracle;
use game_types::{Rejection, ValidationOutcome};
use std::collections::HashMap;
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Shortest word (in user-perceived characters) the game accepts.
pub const MIN_WORD_LENGTH: usize = 3;

/// Lower-case a raw word and strip surrounding whitespace.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length of a word in extended grapheme clusters, so "café" is 4 whether
/// the accent is precomposed or combining.
pub fn word_length(word: &str) -> usize {
    word.graphemes(true).count()
}

/// Decides whether a candidate may be added to a game.
///
/// Checks run in a fixed order and stop at the first failure:
/// length, equals root word, already used, constructible, real word.
/// The dictionary is only consulted once every local check has passed.
pub struct WordValidator {
    dictionary: Box<dyn DictionaryOracle>,
    language: String,
}

impl WordValidator {
    /// Create a validator that asks `dictionary` about words in `language`
    pub fn new(dictionary: impl DictionaryOracle + 'static, language: impl Into<String>) -> Self {
        Self {
            dictionary: Box::new(dictionary),
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Validate `candidate` against `root_word`, excluding `used_words`.
    ///
    /// Candidate and used words are compared after normalization, so callers
    /// may pass raw input.
    pub fn validate<S: AsRef<str>>(
        &self,
        candidate: &str,
        root_word: &str,
        used_words: &[S],
    ) -> ValidationOutcome {
        let candidate = normalize_word(candidate);
        let root_word = normalize_word(root_word);

        let outcome = if word_length(&candidate) < MIN_WORD_LENGTH {
            Rejection::TooShort.into()
        } else if candidate == root_word {
            Rejection::IsRootWord.into()
        } else if used_words
            .iter()
            .any(|used| normalize_word(used.as_ref()) == candidate)
        {
            Rejection::AlreadyUsed.into()
        } else if !Self::is_constructible(&candidate, &root_word) {
            Rejection::NotConstructible.into()
        } else if !self.dictionary.is_valid_word(&candidate, &self.language) {
            Rejection::NotInDictionary.into()
        } else {
            ValidationOutcome::Accepted
        };

        trace!(candidate = %candidate, root_word = %root_word, ?outcome, "Validated word");
        outcome
    }

    /// Check that every character of `candidate` can be matched to a distinct
    /// occurrence of the same character in `root_word`.
    pub fn is_constructible(candidate: &str, root_word: &str) -> bool {
        let mut available: HashMap<&str, usize> = HashMap::new();
        for letter in root_word.graphemes(true) {
            *available.entry(letter).or_insert(0) += 1;
        }

        candidate
            .graphemes(true)
            .all(|letter| match available.get_mut(letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ => false,
            })
    }
}
