//! Value types shared by the flashcard crates.

pub mod card;
pub mod date;
pub mod error;
pub mod ids;
pub mod stats;

pub use card::Card;
pub use date::{Interval, ReviewDate};
pub use error::{ModelError, Result};
pub use ids::{CARD_ID_HEX_LEN, CardId};
pub use stats::CardStats;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_canonical_text() {
        let card = Card::new("2+2", "4");
        assert_eq!(card.canonical_text(), "Q: 2+2\nA: 4");
    }

    #[test]
    fn stats_serializes() {
        let stats = CardStats::new(
            CardId::from_digest([0xab; 32]),
            Card::new("front", "back"),
            ReviewDate::EPOCH,
            Interval::ZERO,
        );
        let json = serde_json::to_value(&stats).expect("serialize stats");
        assert_eq!(json["due"], "2000-01-01");
        assert_eq!(json["interval"], 0);
        assert_eq!(json["cardId"], "ab".repeat(32));
        let round: CardStats = serde_json::from_value(json).expect("deserialize stats");
        assert_eq!(round, stats);
    }
}
