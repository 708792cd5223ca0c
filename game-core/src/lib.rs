pub mod dictionary;
pub mod game_events;
pub mod game_state;
pub mod root_words;
pub mod scoring;
pub mod word_validation;

// Re-export main components
pub use dictionary::*;
pub use game_events::*;
pub use game_state::*;
pub use root_words::*;
pub use scoring::*;
pub use word_validation::*;
