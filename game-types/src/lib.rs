pub mod errors;
pub mod game;

// Re-export all types
pub use errors::*;
pub use game::*;

pub type SessionId = uuid::Uuid;
