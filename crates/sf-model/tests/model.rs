//! Tests for sf-model types.

use sf_model::{Card, CardId, CardStats, Interval, ModelError, ReviewDate};

fn date(s: &str) -> ReviewDate {
    ReviewDate::parse(s).unwrap()
}

#[test]
fn card_id_accepts_lowercase_hex_only() {
    let hex = "0123456789abcdef".repeat(4);
    let id = CardId::from_hex(hex.clone()).unwrap();
    assert_eq!(id.as_str(), hex);
    assert_eq!(id.short(), "01234567");

    assert!(matches!(
        CardId::from_hex(hex.to_uppercase()),
        Err(ModelError::InvalidCardId(_))
    ));
    assert!(CardId::from_hex("abc").is_err());
    assert!(CardId::from_hex(format!("{hex}0")).is_err());
}

#[test]
fn card_id_rejects_malformed_json() {
    let err = serde_json::from_str::<CardId>("\"not-a-digest\"").unwrap_err();
    assert!(err.to_string().contains("card identity"));
}

#[test]
fn review_date_deserializes_strictly() {
    let ok: ReviewDate = serde_json::from_str("\"2024-03-01\"").unwrap();
    assert_eq!(ok, date("2024-03-01"));
    assert!(serde_json::from_str::<ReviewDate>("\"2024-3-1\"").is_err());
}

#[test]
fn review_date_from_ymd() {
    assert_eq!(ReviewDate::from_ymd(2024, 1, 5).unwrap(), date("2024-01-05"));
    assert!(ReviewDate::from_ymd(2024, 13, 1).is_err());
}

#[test]
fn repeated_correct_answers_double() {
    let mut stats = CardStats::new(
        CardId::from_digest([3; 32]),
        Card::new("q", "a"),
        ReviewDate::EPOCH,
        Interval::ZERO,
    );
    let today = date("2024-01-01");
    let mut seen = vec![stats.interval().days()];
    for _ in 0..5 {
        stats = stats.update_correct(today).unwrap();
        seen.push(stats.interval().days());
    }
    assert_eq!(seen, vec![0, 1, 2, 4, 8, 16]);
    assert_eq!(stats.due(), date("2024-01-17"));
}

#[test]
fn incorrect_resets_any_interval() {
    let today = date("2024-06-30");
    for days in [0, 1, 7, 32, 365] {
        let stats = CardStats::new(
            CardId::from_digest([9; 32]),
            Card::new("q", "a"),
            date("2024-06-01"),
            Interval::from_days(days),
        );
        let next = stats.update_incorrect(today).unwrap();
        assert_eq!(next.interval(), Interval::ONE_DAY);
        assert_eq!(next.due(), date("2024-07-01"));
    }
}

#[test]
fn due_check_is_inclusive() {
    let stats = CardStats::new(
        CardId::from_digest([5; 32]),
        Card::new("q", "a"),
        date("2024-01-05"),
        Interval::from_days(4),
    );
    assert!(!stats.is_due(date("2024-01-04")));
    assert!(stats.is_due(date("2024-01-05")));
    assert!(stats.is_due(date("2024-01-06")));
}
