//! Review state carried between loads.
//!
//! Only schedules are saved, keyed by card identity:
//!
//! ```json
//! { "<identity>": { "due": "2024-01-05", "interval": 4 } }
//! ```
//!
//! Card text is re-read from the document on every load and matched back to
//! its schedule by identity.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sf_model::{CardId, Interval, ReviewDate};
use tracing::info;

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub due: ReviewDate,
    pub interval: Interval,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    entries: BTreeMap<CardId, SnapshotEntry>,
}

impl StateSnapshot {
    pub fn get(&self, id: &CardId) -> Option<&SnapshotEntry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, CardId, SnapshotEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<(CardId, SnapshotEntry)> for StateSnapshot {
    fn from_iter<I: IntoIterator<Item = (CardId, SnapshotEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Read a snapshot file. A missing file is an empty snapshot.
pub fn load(path: &Path) -> Result<StateSnapshot> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            info!("No review state at {}, starting fresh", path.display());
            return Ok(StateSnapshot::default());
        }
        Err(source) => {
            return Err(CoreError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let snapshot: StateSnapshot =
        serde_json::from_str(&text).map_err(|source| CoreError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        "Loaded review state for {} cards from {}",
        snapshot.len(),
        path.display()
    );
    Ok(snapshot)
}

fn io_error(operation: &'static str, path: &Path) -> impl FnOnce(io::Error) -> CoreError {
    let path = path.to_path_buf();
    move |source| CoreError::Io {
        operation,
        path,
        source,
    }
}

/// Write a snapshot file via a temp file and rename.
pub fn save(path: &Path, snapshot: &StateSnapshot) -> Result<()> {
    let json = snapshot.to_json().map_err(|source| CoreError::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = File::create(&temp_path).map_err(io_error("create", &temp_path))?;
    file.write_all(json.as_bytes())
        .map_err(io_error("write", &temp_path))?;
    file.sync_all().map_err(io_error("sync", &temp_path))?;
    fs::rename(&temp_path, path).map_err(io_error("replace", path))?;

    info!("Saved review state to {}", path.display());
    Ok(())
}
