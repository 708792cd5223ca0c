#![allow(dead_code)]

use game_core::{
    DictionaryOracle, GameEvent, GameEventBus, GameEventHandler, GameSession, WordValidator,
};
use std::cell::Cell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

pub const TEST_LANGUAGE: &str = "en_US";

/// Words the test dictionary knows about
pub const TEST_WORDS: &[&str] = &[
    "silk", "worm", "milk", "silkworms", "slow", "owl", "rim", "mil", "ilk", "tee", "teer", "tree",
    "pancake", "cake", "pane", "peak", "cape",
];

/// Dictionary that knows a fixed set of words and nothing else
pub struct StaticDictionary {
    words: HashSet<String>,
}

impl StaticDictionary {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(TEST_WORDS)
    }
}

impl DictionaryOracle for StaticDictionary {
    fn is_valid_word(&self, word: &str, _language: &str) -> bool {
        self.words.contains(word)
    }
}

/// Dictionary that accepts everything and counts how often it is asked
#[derive(Clone, Default)]
pub struct CountingDictionary {
    calls: Rc<Cell<usize>>,
}

impl CountingDictionary {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DictionaryOracle for CountingDictionary {
    fn is_valid_word(&self, _word: &str, _language: &str) -> bool {
        self.calls.set(self.calls.get() + 1);
        true
    }
}

/// Root source handing out a fixed sequence of answers, then nothing
pub struct ScriptedRootSource {
    answers: VecDeque<Option<String>>,
}

impl ScriptedRootSource {
    pub fn new(answers: &[Option<&str>]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
        }
    }

    pub fn pick(&mut self) -> Option<String> {
        self.answers.pop_front().flatten()
    }
}

impl game_core::RootWordSource for ScriptedRootSource {
    fn pick_root_word(&mut self) -> Option<String> {
        self.pick()
    }
}

pub fn create_test_validator() -> WordValidator {
    WordValidator::new(StaticDictionary::standard(), TEST_LANGUAGE)
}

/// Creates a session whose every game is played on `root_word`
pub fn create_session_on(root_word: &'static str) -> GameSession {
    GameSession::new(move || Some(root_word.to_string()), create_test_validator())
}

/// Event collector for testing event emissions
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<GameEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Creates a session on `root_word` whose events, including the first
/// game start, land in the returned collector
pub fn create_observed_session(root_word: &'static str) -> (GameSession, EventCollector) {
    let collector = EventCollector::new();
    let mut bus = GameEventBus::new();
    bus.add_handler(Box::new(collector.clone()));

    let session = GameSession::with_event_bus(
        move || Some(root_word.to_string()),
        create_test_validator(),
        bus,
    );
    (session, collector)
}
