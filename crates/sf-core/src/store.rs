//! In-memory review store.
//!
//! Maps card identity to the card's current [`CardStats`]. Iteration order
//! (for [`Store::all`] and [`Store::due_as_of`]) is ascending identity; it is
//! not sorted by due date.

use std::collections::BTreeMap;

use sf_model::{Card, CardId, CardStats, ReviewDate};
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::hasher::card_id;
use crate::scheduler::initial_stats;
use crate::snapshot::{SnapshotEntry, StateSnapshot};

#[derive(Debug, Clone, Default)]
pub struct Store {
    stats: BTreeMap<CardId, CardStats>,
}

impl Store {
    /// One default entry per distinct card. Cards with identical content
    /// share an identity, so a later duplicate replaces the earlier entry.
    pub fn initialize(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut stats = BTreeMap::new();
        for card in cards {
            let initial = initial_stats(card);
            stats.insert(initial.card_id().clone(), initial);
        }
        Self { stats }
    }

    /// Replace the entry for `stats.card_id()`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IdentityMismatch`] if the identity was not derived
    /// from the card it carries.
    pub fn upsert(&mut self, stats: CardStats) -> Result<()> {
        let expected = card_id(stats.card());
        if stats.card_id() != &expected {
            return Err(CoreError::IdentityMismatch {
                found: stats.card_id().clone(),
                expected,
            });
        }
        debug!(
            card_id = %stats.card_id().short(),
            due = %stats.due(),
            interval = stats.interval().days(),
            "saving card stats"
        );
        self.stats.insert(expected, stats);
        Ok(())
    }

    /// Every entry whose due date is on or before `date`.
    pub fn due_as_of(&self, date: ReviewDate) -> Vec<&CardStats> {
        self.stats.values().filter(|stats| stats.is_due(date)).collect()
    }

    pub fn all(&self) -> Vec<&CardStats> {
        self.stats.values().collect()
    }

    pub fn get(&self, id: &CardId) -> Option<&CardStats> {
        self.stats.get(id)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Schedules of every card, without card text.
    pub fn snapshot(&self) -> StateSnapshot {
        self.stats
            .values()
            .map(|stats| {
                (
                    stats.card_id().clone(),
                    SnapshotEntry {
                        due: stats.due(),
                        interval: stats.interval(),
                    },
                )
            })
            .collect()
    }

    /// Apply saved schedules to the cards this store knows about.
    ///
    /// Entries for identities not in the store (edited or removed cards) are
    /// skipped. Returns the number of entries applied.
    pub fn restore(&mut self, snapshot: &StateSnapshot) -> usize {
        let mut applied = 0;
        for (id, entry) in snapshot.iter() {
            match self.stats.get_mut(id) {
                Some(stats) => {
                    *stats = stats.with_schedule(entry.due, entry.interval);
                    applied += 1;
                }
                None => debug!(card_id = %id.short(), "skipping state for unknown card"),
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use sf_model::Interval;

    use super::*;

    fn date(s: &str) -> ReviewDate {
        ReviewDate::parse(s).unwrap()
    }

    #[test]
    fn initialize_creates_default_entries() {
        let store = Store::initialize([Card::new("a", "1"), Card::new("b", "2")]);
        assert_eq!(store.len(), 2);
        for stats in store.all() {
            assert_eq!(stats.due(), ReviewDate::EPOCH);
            assert_eq!(stats.interval(), Interval::ZERO);
        }
    }

    #[test]
    fn duplicate_cards_collapse() {
        let store = Store::initialize([
            Card::new("a", "1"),
            Card::new("b", "2"),
            Card::new("a", "1"),
        ]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn upsert_rejects_forged_identity() {
        let mut store = Store::initialize([Card::new("a", "1")]);
        let forged = CardStats::new(
            card_id(&Card::new("a", "1")),
            Card::new("b", "2"),
            ReviewDate::EPOCH,
            Interval::ZERO,
        );
        assert!(matches!(
            store.upsert(forged),
            Err(CoreError::IdentityMismatch { .. })
        ));
    }

    #[test]
    fn upsert_replaces_entry() {
        let card = Card::new("a", "1");
        let mut store = Store::initialize([card.clone()]);
        let id = card_id(&card);
        let next = store
            .get(&id)
            .unwrap()
            .update_correct(date("2024-01-01"))
            .unwrap();
        store.upsert(next.clone()).unwrap();
        assert_eq!(store.get(&id), Some(&next));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn all_iterates_by_identity() {
        let store = Store::initialize([
            Card::new("x", "1"),
            Card::new("y", "2"),
            Card::new("z", "3"),
        ]);
        let ids: Vec<&CardId> = store.all().into_iter().map(CardStats::card_id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
