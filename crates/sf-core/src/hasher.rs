//! SHA-256 content fingerprints.

use sf_model::{Card, CardId};
use sha2::{Digest, Sha256};

fn digest(text: &str) -> [u8; 32] {
    Sha256::digest(text.as_bytes()).into()
}

/// Lowercase hex SHA-256 of the UTF-8 bytes of `text`.
pub fn hash(text: &str) -> String {
    CardId::from_digest(digest(text)).to_string()
}

/// Identity of a card, derived from its canonical text.
pub fn card_id(card: &Card) -> CardId {
    CardId::from_digest(digest(&card.canonical_text()))
}
