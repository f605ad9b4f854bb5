//! JSON snapshot of stop records.
//!
//! A snapshot is the already-parsed output of a feed loader:
//!
//! ```json
//! {"stops": [{"id": 1, "name": "NB MAIN ST", "trips": [{"id": 3, "arrival_time": "09:15:00"}]}]}
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::Stop;
use crate::registry::StopRegistry;

/// Errors that can occur when loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A batch of stops ready to be added to a [`StopRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub stops: Vec<Stop>,
}

impl Snapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&contents)?;

        info!(path = %path.display(), stops = snapshot.stops.len(), "loaded snapshot");
        Ok(snapshot)
    }

    /// Number of stops in the snapshot.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the snapshot has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Build a registry holding every stop in the snapshot.
    pub fn into_registry(self) -> StopRegistry {
        StopRegistry::from_stops(self.stops)
    }
}
