use thiserror::Error;

use crate::date::ReviewDate;

/// Invalid values rejected by the model constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("expected a date string (YYYY-MM-DD): {0:?}")]
    InvalidDate(String),
    #[error("expected a nonnegative integer interval: {0}")]
    NegativeInterval(i64),
    #[error("interval of {0} days does not fit in a review interval")]
    IntervalTooLarge(i64),
    #[error("{date} plus {days} days is outside the supported calendar range")]
    DateOutOfRange { date: ReviewDate, days: u32 },
    #[error("expected a card identity (64 lowercase hex digits): {0:?}")]
    InvalidCardId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
