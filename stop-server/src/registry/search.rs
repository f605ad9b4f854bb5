//! Free-text stop search.
//!
//! A query is matched against the name index from the root, one character
//! per level. Completions are then collected from the matched node and
//! glued back onto the query minus its last character. Because the matched
//! node's `less`/`greater` siblings are included, the result is every stored
//! name that shares the query's first `len - 1` characters and whose next
//! character is reachable from the matched node at that position. This is
//! a depth-anchored neighbor search, not a substring search.
//!
//! Each reconstructed candidate is checked against the name → ID map before
//! a stop is returned.

use std::collections::HashMap;

use tracing::debug;

use super::StopRegistry;
use crate::domain::{NormalizedName, Stop, StopId};
use crate::index::NameIndex;

impl StopRegistry {
    /// Find stops for a free-text query.
    ///
    /// Queries are compared against normalized names exactly: no case
    /// folding and no trimming. An empty query, or one with no path in the
    /// name index, yields no stops.
    pub fn search(&self, query: &str) -> Vec<&Stop> {
        let stops: Vec<&Stop> = matching_ids(&self.index, &self.names, query)
            .into_iter()
            .filter_map(|id| self.stops.get(&id))
            .collect();

        debug!(query, matches = stops.len(), "stop search");
        stops
    }
}

/// Reconstruct candidate names for `query` and map them to stop IDs.
fn matching_ids(
    index: &NameIndex,
    names: &HashMap<NormalizedName, StopId>,
    query: &str,
) -> Vec<StopId> {
    if query.is_empty() {
        return Vec::new();
    }

    let Some(matched) = index.match_path(query) else {
        return Vec::new();
    };

    // Everything but the last character; the matched node supplies that one
    let prefix = match query.char_indices().next_back() {
        Some((last, _)) => &query[..last],
        None => "",
    };

    index
        .enumerate_from(matched)
        .into_iter()
        .filter_map(|suffix| {
            let mut candidate = String::with_capacity(prefix.len() + suffix.len());
            candidate.push_str(prefix);
            candidate.push_str(&suffix);
            names.get(candidate.as_str()).copied()
        })
        .collect()
}
