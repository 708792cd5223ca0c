use crate::normalize_word;
use game_types::WordListError;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use tracing::{debug, info};

/// Supplies the word a new game is played on.
///
/// `None` is an expected answer (empty list, unreadable file); sessions
/// fall back to a built-in word instead of failing.
pub trait RootWordSource {
    fn pick_root_word(&mut self) -> Option<String>;
}

impl<F> RootWordSource for F
where
    F: FnMut() -> Option<String>,
{
    fn pick_root_word(&mut self) -> Option<String> {
        self()
    }
}

/// Parse a newline separated word list, skipping blanks and `#` comments
pub fn parse_word_list(word_list: &str) -> impl Iterator<Item = String> + '_ {
    word_list
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(normalize_word)
}

/// Picks root words uniformly at random from a fixed list.
#[derive(Debug, Clone)]
pub struct WordListRootSource {
    words: Vec<String>,
    rng: ChaCha8Rng,
}

impl WordListRootSource {
    pub fn new(word_list: &str) -> Self {
        Self {
            words: parse_word_list(word_list).collect(),
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// A source with no words; every pick returns `None`
    pub fn empty() -> Self {
        Self::new("")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let source = Self::new(&contents);
        info!("Loaded {} root words from {}", source.len(), path.display());
        Ok(source)
    }

    /// Replace the random generator with a seeded one for a repeatable order
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl RootWordSource for WordListRootSource {
    fn pick_root_word(&mut self) -> Option<String> {
        let picked = self.words.choose(&mut self.rng).cloned();
        debug!(?picked, "Picked root word");
        picked
    }
}
