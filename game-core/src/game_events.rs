use game_types::{Rejection, SessionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        session_id: SessionId,
        root_word: String,
        used_fallback: bool,
    },
    WordAccepted {
        session_id: SessionId,
        word: String,
        points: u32,
        score: u32,
    },
    WordRejected {
        session_id: SessionId,
        word: String,
        rejection: Rejection,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            GameEvent::GameStarted { session_id, .. }
            | GameEvent::WordAccepted { session_id, .. }
            | GameEvent::WordRejected { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for observing session events
pub trait GameEventHandler {
    fn handle_event(&mut self, event: GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}
