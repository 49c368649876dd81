//! Deterministic daily selection.
//!
//! Each candidate is ranked by `hash(date_key + key)` and the smallest digest
//! wins. The ranking is stable for a given date and set of items and
//! reshuffles from one date to the next, which approximates a fresh random
//! ordering every day without any stored state.

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::hasher::hash;

/// Pick one item for `date_key`.
///
/// Digests compare as hex strings. Ties go to the earliest item.
///
/// # Errors
///
/// Returns [`CoreError::EmptyPick`] when `items` is empty.
pub fn pick<'a, T, K, F>(items: &'a [T], date_key: &str, key_fn: F) -> Result<&'a T>
where
    F: Fn(&T) -> K,
    K: AsRef<str>,
{
    let digests: Vec<String> = items
        .iter()
        .map(|item| hash(&format!("{date_key}{}", key_fn(item).as_ref())))
        .collect();

    let (index, digest) = digests
        .iter()
        .enumerate()
        .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
        .ok_or(CoreError::EmptyPick)?;

    debug!(date_key, index, digest = %digest, candidates = items.len(), "picked item");
    Ok(&items[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_error() {
        let items: [&str; 0] = [];
        assert!(matches!(
            pick(&items, "2024-01-01", |s| *s),
            Err(CoreError::EmptyPick)
        ));
    }

    #[test]
    fn single_item_always_wins() {
        let items = ["only"];
        assert_eq!(*pick(&items, "2024-01-01", |s| *s).unwrap(), "only");
    }

    #[test]
    fn smallest_digest_wins() {
        let items = ["alpha", "beta", "gamma", "delta"];
        let winner = pick(&items, "2024-01-01", |s| *s).unwrap();
        let smallest = items
            .iter()
            .min_by_key(|s| hash(&format!("2024-01-01{s}")))
            .unwrap();
        assert_eq!(winner, smallest);
    }

    #[test]
    fn ties_go_to_first_item() {
        let items = [("a", 1), ("a", 2), ("a", 3)];
        let winner = pick(&items, "2024-01-01", |item| item.0).unwrap();
        assert_eq!(winner.1, 1);
    }
}
