//! Loading a card document into a review store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{CoreError, Result};
use crate::parser::parse;
use crate::store::Store;

/// Where the card document comes from.
pub trait DocumentSource {
    fn load_text(&self) -> Result<String>;
}

/// A card document on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn load_text(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| CoreError::Io {
            operation: "read",
            path: self.path.clone(),
            source,
        })
    }
}

/// A card document held in memory.
#[derive(Debug, Clone)]
pub struct TextSource(pub String);

impl DocumentSource for TextSource {
    fn load_text(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// A freshly loaded store plus the blocks that failed to parse.
#[derive(Debug, Clone)]
pub struct Deck {
    pub store: Store,
    pub malformed: Vec<String>,
}

impl Deck {
    /// Read and parse the document, logging malformed blocks instead of
    /// failing on them.
    pub fn load(source: &(impl DocumentSource + ?Sized)) -> Result<Self> {
        let text = source.load_text()?;
        let parsed = parse(&text);
        for block in &parsed.errors {
            error!(block = %block, "malformed card");
        }
        let store = Store::initialize(parsed.cards);
        info!(
            cards = store.len(),
            malformed = parsed.errors.len(),
            "Loaded deck"
        );
        Ok(Self {
            store,
            malformed: parsed.errors,
        })
    }
}
