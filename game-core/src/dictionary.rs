use crate::{normalize_word, parse_word_list};
use game_types::WordListError;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{info, warn};

/// Answers whether a word is a real word in a given language.
pub trait DictionaryOracle {
    fn is_valid_word(&self, word: &str, language: &str) -> bool;
}

impl<O: DictionaryOracle + ?Sized> DictionaryOracle for Box<O> {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        (**self).is_valid_word(word, language)
    }
}

impl<O: DictionaryOracle + ?Sized> DictionaryOracle for Rc<O> {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        (**self).is_valid_word(word, language)
    }
}

impl<O: DictionaryOracle + ?Sized> DictionaryOracle for Arc<O> {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        (**self).is_valid_word(word, language)
    }
}

/// Dictionary backed by one word list per language tag (`en_US`, `es_ES`, ...).
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    languages: HashMap<String, HashSet<String>>,
}

impl WordListDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>, word_list: &str) -> Self {
        self.insert_language(language, word_list);
        self
    }

    /// Add words for `language`, merging with any already loaded
    pub fn insert_language(&mut self, language: impl Into<String>, word_list: &str) {
        self.languages
            .entry(language.into())
            .or_default()
            .extend(parse_word_list(word_list));
    }

    /// Load every `<language>.txt` file in `dir`
    pub fn from_directory<P: AsRef<Path>>(dir: P) -> Result<Self, WordListError> {
        let dir = dir.as_ref();
        let io_error = |path: &Path, source: std::io::Error| WordListError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut dictionary = Self::new();
        let entries = std::fs::read_dir(dir).map_err(|e| io_error(dir, e))?;
        for entry in entries {
            let path = entry.map_err(|e| io_error(dir, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
                continue;
            }
            let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let contents = std::fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
            dictionary.insert_language(language, &contents);
            info!(
                "Loaded {} dictionary words for {} from {}",
                dictionary.word_count(language),
                language,
                path.display()
            );
        }

        if dictionary.languages.is_empty() {
            return Err(WordListError::EmptyDirectory {
                path: dir.to_path_buf(),
            });
        }

        Ok(dictionary)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Loaded language tags, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    pub fn word_count(&self, language: &str) -> usize {
        self.languages.get(language).map_or(0, HashSet::len)
    }
}

impl DictionaryOracle for WordListDictionary {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        match self.languages.get(language) {
            Some(words) => words.contains(&normalize_word(word)),
            None => {
                warn!("No dictionary loaded for language {}", language);
                false
            }
        }
    }
}

/// Memoizes another oracle's answers keyed on (word, language).
pub struct CachedDictionary<O> {
    inner: O,
    cache: RefCell<HashMap<(String, String), bool>>,
}

impl<O: DictionaryOracle> CachedDictionary<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O: DictionaryOracle> DictionaryOracle for CachedDictionary<O> {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        let key = (word.to_string(), language.to_string());
        if let Some(&known) = self.cache.borrow().get(&key) {
            return known;
        }

        let answer = self.inner.is_valid_word(word, language);
        self.cache.borrow_mut().insert(key, answer);
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_word_list_dictionary() {
        let dictionary = WordListDictionary::new()
            .with_language("en_US", "silk\nworm\n# comment\nMilk")
            .with_language("es_ES", "seda\ngusano");

        assert!(dictionary.is_valid_word("silk", "en_US"));
        assert!(dictionary.is_valid_word("milk", "en_US"));
        assert!(dictionary.is_valid_word("MILK", "en_US"));
        assert!(!dictionary.is_valid_word("seda", "en_US"));
        assert!(dictionary.is_valid_word("seda", "es_ES"));
        assert!(!dictionary.is_valid_word("# comment", "en_US"));
    }

    #[test]
    fn test_unknown_language() {
        let dictionary = WordListDictionary::new().with_language("en_US", "silk");
        assert!(!dictionary.has_language("fr_FR"));
        assert!(!dictionary.is_valid_word("silk", "fr_FR"));
    }

    #[test]
    fn test_insert_language_merges() {
        let mut dictionary = WordListDictionary::new();
        dictionary.insert_language("en_US", "silk");
        dictionary.insert_language("en_US", "worm\nsilk");
        assert_eq!(dictionary.word_count("en_US"), 2);
        assert_eq!(dictionary.word_count("es_ES"), 0);
    }

    #[test]
    fn test_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en_US.txt"), "silk\nworm\n").unwrap();
        std::fs::write(dir.path().join("es_ES.txt"), "seda\n").unwrap();
        std::fs::write(dir.path().join("README.md"), "not a word list").unwrap();

        let dictionary = WordListDictionary::from_directory(dir.path()).unwrap();
        assert_eq!(dictionary.languages(), vec!["en_US", "es_ES"]);
        assert!(dictionary.is_valid_word("worm", "en_US"));
        assert!(dictionary.is_valid_word("seda", "es_ES"));
    }

    #[test]
    fn test_from_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordListDictionary::from_directory(dir.path());
        assert!(matches!(result, Err(WordListError::EmptyDirectory { .. })));
    }

    #[test]
    fn test_from_missing_directory() {
        let result = WordListDictionary::from_directory("/definitely/not/here");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    struct Counting {
        calls: Cell<usize>,
    }

    impl DictionaryOracle for Counting {
        fn is_valid_word(&self, word: &str, _language: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            word == "silk"
        }
    }

    #[test]
    fn test_cached_dictionary() {
        let cached = CachedDictionary::new(Counting {
            calls: Cell::new(0),
        });

        assert!(cached.is_valid_word("silk", "en_US"));
        assert!(cached.is_valid_word("silk", "en_US"));
        assert!(!cached.is_valid_word("slik", "en_US"));
        assert!(!cached.is_valid_word("slik", "en_US"));
        assert_eq!(cached.inner().calls.get(), 2);
        assert_eq!(cached.cached_entries(), 2);

        // Same word, different language is a separate entry
        assert!(cached.is_valid_word("silk", "en_GB"));
        assert_eq!(cached.inner().calls.get(), 3);
        assert_eq!(cached.cached_entries(), 3);
    }
}
