//! Transit stop name index and lookup server.
//!
//! Stops are indexed by a normalized form of their name in a ternary search
//! tree, which backs a prefix-anchored free-text search. Stops can also be
//! looked up by ID, and trips listed by exact arrival time.

pub mod config;
pub mod domain;
pub mod index;
pub mod registry;
pub mod snapshot;
pub mod web;
