use crate::SessionId;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Why a candidate word was turned down.
///
/// Variants are listed in the order the validator checks them; only the
/// first failing check is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Rejection {
    TooShort,         // Fewer than the minimum number of characters
    IsRootWord,       // Same as the word being played
    AlreadyUsed,      // Accepted earlier in this game
    NotConstructible, // Needs letters the root word doesn't have (or has fewer of)
    NotInDictionary,  // Dictionary doesn't know it in the session language
}

impl Rejection {
    pub const ALL: [Rejection; 5] = [
        Rejection::TooShort,
        Rejection::IsRootWord,
        Rejection::AlreadyUsed,
        Rejection::NotConstructible,
        Rejection::NotInDictionary,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(Rejection),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::Rejected(rejection) => Some(*rejection),
        }
    }
}

impl From<Rejection> for ValidationOutcome {
    fn from(rejection: Rejection) -> Self {
        ValidationOutcome::Rejected(rejection)
    }
}

/// Result of a single submission attempt against a session.
///
/// `word` is always the normalized candidate, so a front end can build its
/// own message from the rejection kind and the offending word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SubmissionResult {
    Accepted {
        word: String,
        points: u32,
        score: u32,
    },
    Rejected {
        word: String,
        rejection: Rejection,
    },
}

impl SubmissionResult {
    pub fn word(&self) -> &str {
        match self {
            SubmissionResult::Accepted { word, .. } | SubmissionResult::Rejected { word, .. } => {
                word
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            SubmissionResult::Accepted { .. } => None,
            SubmissionResult::Rejected { rejection, .. } => Some(*rejection),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UsedWord {
    pub word: String,
    pub points: u32,
}

/// Read-only view of a session for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub root_word: String,
    pub used_words: Vec<UsedWord>, // Most recent first
    pub score: u32,
    pub language: String,
    pub used_fallback: bool,
}
