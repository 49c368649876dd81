//! Per-card scheduling state and its review transitions.
//!
//! A [`CardStats`] is never modified in place. Recording a review produces a
//! new value with the same identity and card and a fresh due date and
//! interval:
//!
//! - correct: the interval doubles, with a floor of one day, so a new card
//!   goes `0 -> 1 -> 2 -> 4 -> ...`
//! - incorrect: the interval resets to the one-day floor, so the card is due
//!   again tomorrow rather than today

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::date::{Interval, ReviewDate};
use crate::error::Result;
use crate::ids::CardId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStats {
    card_id: CardId,
    card: Card,
    due: ReviewDate,
    interval: Interval,
}

impl CardStats {
    pub fn new(card_id: CardId, card: Card, due: ReviewDate, interval: Interval) -> Self {
        Self {
            card_id,
            card,
            due,
            interval,
        }
    }

    /// Build from untyped parts, validating the date string and interval.
    pub fn from_parts(card_id: CardId, card: Card, due: &str, interval: i64) -> Result<Self> {
        let due = ReviewDate::parse(due)?;
        let interval = Interval::try_from(interval)?;
        Ok(Self::new(card_id, card, due, interval))
    }

    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn due(&self) -> ReviewDate {
        self.due
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn is_due(&self, today: ReviewDate) -> bool {
        self.due <= today
    }

    /// Same card with a different schedule.
    #[must_use]
    pub fn with_schedule(&self, due: ReviewDate, interval: Interval) -> Self {
        Self::new(self.card_id.clone(), self.card.clone(), due, interval)
    }

    /// Schedule the next review `new_interval` days after `today`, never
    /// less than one day out.
    pub fn rescheduled(&self, today: ReviewDate, new_interval: Interval) -> Result<Self> {
        let interval = new_interval.max(Interval::ONE_DAY);
        let due = today.add_days(interval.days())?;
        Ok(self.with_schedule(due, interval))
    }

    pub fn update_correct(&self, today: ReviewDate) -> Result<Self> {
        self.rescheduled(today, self.interval.doubled())
    }

    pub fn update_incorrect(&self, today: ReviewDate) -> Result<Self> {
        self.rescheduled(today, Interval::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(interval: u32) -> CardStats {
        CardStats::new(
            CardId::from_digest([7; 32]),
            Card::new("2+2", "4"),
            ReviewDate::EPOCH,
            Interval::from_days(interval),
        )
    }

    fn date(s: &str) -> ReviewDate {
        ReviewDate::parse(s).unwrap()
    }

    #[test]
    fn first_correct_answer_clamps_to_one_day() {
        let next = stats(0).update_correct(date("2024-01-01")).unwrap();
        assert_eq!(next.interval(), Interval::ONE_DAY);
        assert_eq!(next.due(), date("2024-01-02"));
    }

    #[test]
    fn incorrect_is_due_tomorrow() {
        let next = stats(32).update_incorrect(date("2024-01-31")).unwrap();
        assert_eq!(next.interval(), Interval::ONE_DAY);
        assert_eq!(next.due(), date("2024-02-01"));
    }

    #[test]
    fn transitions_keep_identity_and_card() {
        let before = stats(4);
        let next = before.update_correct(date("2024-01-01")).unwrap();
        assert_eq!(next.card_id(), before.card_id());
        assert_eq!(next.card(), before.card());
        assert_eq!(before.interval(), Interval::from_days(4));
    }

    #[test]
    fn from_parts_validates() {
        let id = CardId::from_digest([1; 32]);
        let card = Card::new("q", "a");
        assert!(CardStats::from_parts(id.clone(), card.clone(), "2024-01-01", 3).is_ok());
        assert!(CardStats::from_parts(id.clone(), card.clone(), "01/01/2024", 3).is_err());
        assert!(CardStats::from_parts(id, card, "2024-01-01", -3).is_err());
    }
}
