//! Core error types.

use std::path::PathBuf;

use sf_model::{CardId, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A stats value whose identity does not match its card.
    #[error("card identity {found} does not match card content (expected {expected})")]
    IdentityMismatch { found: CardId, expected: CardId },

    #[error("cannot pick from an empty set of cards")]
    EmptyPick,

    #[error("no card is due for review")]
    NothingDue,

    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid review state in {path}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("renderer failed")]
    Render(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
