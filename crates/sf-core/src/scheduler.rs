use sf_model::{Card, CardStats, Interval, ReviewDate};

use crate::error::Result;
use crate::hasher::card_id;

/// Result of a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    /// Next state of `stats` after this outcome, reviewed on `today`.
    pub fn apply(self, stats: &CardStats, today: ReviewDate) -> Result<CardStats> {
        let next = match self {
            Self::Correct => stats.update_correct(today)?,
            Self::Incorrect => stats.update_incorrect(today)?,
        };
        Ok(next)
    }
}

/// State of a card that has never been reviewed: due at the epoch, so it is
/// immediately eligible.
pub fn initial_stats(card: Card) -> CardStats {
    CardStats::new(card_id(&card), card, ReviewDate::EPOCH, Interval::ZERO)
}
