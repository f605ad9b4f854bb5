//! Stop records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Trip;

/// Numeric identifier of a stop.
///
/// Stop IDs come from the source feed and are assumed unique within a
/// registry.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(pub u32);

impl StopId {
    /// Returns the raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transit stop and the trips that arrive at it.
///
/// The name is the raw display name from the feed; the search key is
/// derived from it by [`NormalizedName::from_raw`](super::NormalizedName::from_raw).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl Stop {
    /// Create a stop with no trips.
    pub fn new(id: StopId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            trips: Vec::new(),
        }
    }

    /// Attach trips to this stop.
    pub fn with_trips(mut self, trips: Vec<Trip>) -> Self {
        self.trips = trips;
        self
    }
}
