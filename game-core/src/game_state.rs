use crate::{
    GameEvent, GameEventBus, GameEventHandler, RootWordSource, ScoringEngine, WordValidator,
    normalize_word,
};
use game_types::{SessionId, SessionSnapshot, SubmissionResult, UsedWord, ValidationOutcome};
use std::fmt;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Root word used when the source has nothing to offer. Long enough to
/// hide plenty of smaller words.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// State of one single-player game: the root word, the words accepted so
/// far (most recent first) and the running score.
///
/// A session is only ever mutated through [`GameSession::start_new_game`]
/// and [`GameSession::submit`], and a rejected submission leaves it
/// untouched. Callers driving it from several threads must serialize
/// access themselves.
pub struct GameSession {
    id: SessionId,
    root_word: String,
    used_words: Vec<String>,
    score: u32,
    used_fallback: bool,
    validator: WordValidator,
    root_source: Box<dyn RootWordSource>,
    event_bus: GameEventBus,
}

impl GameSession {
    /// Create a session and start its first game
    pub fn new(root_source: impl RootWordSource + 'static, validator: WordValidator) -> Self {
        Self::with_event_bus(root_source, validator, GameEventBus::new())
    }

    /// Like [`GameSession::new`], with handlers that also see the first game start
    pub fn with_event_bus(
        root_source: impl RootWordSource + 'static,
        validator: WordValidator,
        event_bus: GameEventBus,
    ) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
            used_fallback: false,
            validator,
            root_source: Box::new(root_source),
            event_bus,
        };
        session.start_new_game();
        session
    }

    /// Throw away the current game and begin a fresh one on a new root word.
    pub fn start_new_game(&mut self) {
        let picked = self
            .root_source
            .pick_root_word()
            .map(|word| normalize_word(&word))
            .filter(|word| !word.is_empty());

        let (root_word, used_fallback) = match picked {
            Some(word) => (word, false),
            None => {
                warn!(
                    "No root word available, falling back to '{}'",
                    FALLBACK_ROOT_WORD
                );
                (FALLBACK_ROOT_WORD.to_string(), true)
            }
        };

        self.id = Uuid::new_v4();
        self.root_word = root_word;
        self.used_fallback = used_fallback;
        self.used_words.clear();
        self.score = 0;

        info!(session_id = %self.id, root_word = %self.root_word, "Started new game");
        self.event_bus.publish(GameEvent::GameStarted {
            session_id: self.id,
            root_word: self.root_word.clone(),
            used_fallback,
        });
    }

    /// Try to add `candidate` to the game.
    ///
    /// The candidate is trimmed and lower-cased first. On acceptance it is
    /// placed at the front of the used words and its length added to the
    /// score; on rejection nothing changes.
    pub fn submit(&mut self, candidate: &str) -> SubmissionResult {
        let word = normalize_word(candidate);

        match self
            .validator
            .validate(&word, &self.root_word, &self.used_words)
        {
            ValidationOutcome::Accepted => {
                let points = ScoringEngine::points_for(&word);
                self.used_words.insert(0, word.clone());
                self.score = self.score.saturating_add(points);

                debug!(session_id = %self.id, word = %word, points, score = self.score, "Accepted word");
                self.event_bus.publish(GameEvent::WordAccepted {
                    session_id: self.id,
                    word: word.clone(),
                    points,
                    score: self.score,
                });

                SubmissionResult::Accepted {
                    word,
                    points,
                    score: self.score,
                }
            }
            ValidationOutcome::Rejected(rejection) => {
                debug!(session_id = %self.id, word = %word, ?rejection, "Rejected word");
                self.event_bus.publish(GameEvent::WordRejected {
                    session_id: self.id,
                    word: word.clone(),
                    rejection,
                });

                SubmissionResult::Rejected { word, rejection }
            }
        }
    }

    pub fn add_event_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the current root word is [`FALLBACK_ROOT_WORD`] because the
    /// source came up empty
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub fn language(&self) -> &str {
        self.validator.language()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            root_word: self.root_word.clone(),
            used_words: self
                .used_words
                .iter()
                .map(|word| UsedWord {
                    word: word.clone(),
                    points: ScoringEngine::points_for(word),
                })
                .collect(),
            score: self.score,
            language: self.language().to_string(),
            used_fallback: self.used_fallback,
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("root_word", &self.root_word)
            .field("used_words", &self.used_words)
            .field("score", &self.score)
            .field("used_fallback", &self.used_fallback)
            .field("language", &self.validator.language())
            .finish_non_exhaustive()
    }
}
