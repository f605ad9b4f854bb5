//! Stop registry: the ID → stop map, the name → ID map and the name index.
//!
//! The registry is filled by [`StopRegistry::add_stops`] and only read
//! afterwards. Nothing is ever removed. Callers that need to add stops while
//! other threads read must serialize access themselves; the server loads
//! everything once at startup and then shares the registry behind an `Arc`.

mod search;
mod trips;

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, warn};

use crate::domain::{NormalizedName, Stop, StopId};
use crate::index::NameIndex;

/// In-memory collection of stops, searchable by normalized name.
#[derive(Debug, Clone, Default)]
pub struct StopRegistry {
    /// All stops by ID.
    stops: BTreeMap<StopId, Stop>,

    /// Normalized name → stop ID. On collision the last stop indexed wins.
    names: HashMap<NormalizedName, StopId>,

    /// Tree over every non-empty normalized name.
    index: NameIndex,
}

impl StopRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the given stops.
    pub fn from_stops(stops: impl IntoIterator<Item = Stop>) -> Self {
        let mut registry = Self::new();
        registry.add_stops(stops);
        registry
    }

    /// Add a batch of stops.
    ///
    /// Each stop's name is normalized and added to the name index and the
    /// name → ID map. Stops in a batch are indexed in ascending ID order, so
    /// the resulting tree does not depend on the order the caller collected
    /// them in. A stop whose ID is already present replaces the old record.
    ///
    /// Returns the number of stops in the batch.
    pub fn add_stops(&mut self, batch: impl IntoIterator<Item = Stop>) -> usize {
        let mut batch: Vec<Stop> = batch.into_iter().collect();
        batch.sort_by_key(|stop| stop.id);
        let added = batch.len();

        for stop in batch {
            let name = NormalizedName::from_raw(&stop.name);

            if name.is_empty() {
                warn!(stop = %stop.id, raw = %stop.name, "stop has an empty name, not searchable");
            } else {
                self.index.insert(name.as_str());
            }

            if let Some(previous) = self.names.get(&name)
                && *previous != stop.id
            {
                debug!(
                    name = %name,
                    previous = %previous,
                    stop = %stop.id,
                    "normalized name collision, later stop wins"
                );
            }
            self.names.insert(name, stop.id);

            let id = stop.id;
            if self.stops.insert(id, stop).is_some() {
                debug!(stop = %id, "replaced stop with duplicate ID");
            }
        }

        info!(
            added,
            stops = self.stops.len(),
            names = self.index.len(),
            nodes = self.index.node_count(),
            "indexed stops"
        );

        added
    }

    /// Look up a stop by ID.
    pub fn get(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(&id)
    }

    /// All stops, in ascending ID order.
    pub fn all(&self) -> Vec<&Stop> {
        self.stops.values().collect()
    }

    /// Look up the stop currently mapped to an exact normalized name.
    pub fn by_normalized_name(&self, name: &str) -> Option<&Stop> {
        self.names.get(name).and_then(|id| self.stops.get(id))
    }

    /// The name index over normalized stop names.
    pub fn name_index(&self) -> &NameIndex {
        &self.index
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if there are no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
