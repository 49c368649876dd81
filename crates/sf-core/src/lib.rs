//! Flashcard review core.
//!
//! Text flows through the crate as follows:
//!
//! 1. [`parser::parse`] splits a document into [`Card`]s and malformed blocks.
//! 2. [`Store::initialize`] gives every card a default schedule, due at
//!    [`ReviewDate::EPOCH`].
//! 3. A [`Session`] asks the store for cards due today, lets
//!    [`picker::pick`] choose one for the day, and shows it through a
//!    [`Renderer`].
//! 4. The answer becomes a new [`CardStats`] which is upserted back into the
//!    store.
//!
//! The core never reads the wall clock or the filesystem on its own; both are
//! injected through [`Clock`] and [`DocumentSource`].

pub mod clock;
pub mod deck;
pub mod error;
pub mod hasher;
pub mod parser;
pub mod picker;
pub mod scheduler;
pub mod session;
pub mod snapshot;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use deck::{Deck, DocumentSource, FileSource, TextSource};
pub use error::{CoreError, Result};
pub use parser::{ParseOutput, parse};
pub use picker::pick;
pub use scheduler::{Outcome, initial_stats};
pub use session::{Renderer, Response, ReviewTurn, Session, SessionSummary};
pub use snapshot::{SnapshotEntry, StateSnapshot};
pub use store::Store;

pub use sf_model::{Card, CardId, CardStats, Interval, ReviewDate};
