//! Domain types for the stop index.
//!
//! Stops and trips are plain records produced by a feed loader. The only
//! derived value is the [`NormalizedName`], which is the key everything in
//! the index is looked up by.

mod name;
mod stop;
mod time;
mod trip;

pub use name::{NAME_KEYWORDS, NormalizedName, is_keyword};
pub use stop::{Stop, StopId};
pub use time::{TimeError, parse_arrival_time};
pub use trip::{Trip, TripId};
