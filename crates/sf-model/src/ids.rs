use std::fmt;

use crate::error::{ModelError, Result};

/// Length of a rendered SHA-256 digest.
pub const CARD_ID_HEX_LEN: usize = 64;

/// Content-derived identity of a card.
///
/// Always 64 lowercase hex digits. Ordering is lexicographic on the hex form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(String);

impl CardId {
    pub fn from_digest(digest: [u8; 32]) -> Self {
        Self(hex::encode(digest))
    }

    pub fn from_hex(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let well_formed = value.len() == CARD_ID_HEX_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !well_formed {
            return Err(ModelError::InvalidCardId(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading digits for display in tables and logs.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for CardId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for CardId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(s).map_err(serde::de::Error::custom)
    }
}
