use crate::word_length;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Points for an accepted word: one per user-perceived character
    pub fn points_for(word: &str) -> u32 {
        u32::try_from(word_length(word)).unwrap_or(u32::MAX)
    }

    /// Score a list of accepted words would add up to
    pub fn total<S: AsRef<str>>(words: &[S]) -> u32 {
        words
            .iter()
            .map(|word| Self::points_for(word.as_ref()))
            .fold(0u32, u32::saturating_add)
    }
}
