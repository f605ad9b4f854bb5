//! Trip records.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Numeric identifier of a trip.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub u32);

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled arrival of a trip at a stop.
///
/// Trips are owned by the [`Stop`](super::Stop) they arrive at. The same
/// trip ID appears once per stop it calls at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub arrival_time: NaiveTime,
}

impl Trip {
    /// Create a new trip arrival.
    pub fn new(id: TripId, arrival_time: NaiveTime) -> Self {
        Self { id, arrival_time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_time_as_string() {
        let trip = Trip::new(TripId(5), NaiveTime::from_hms_opt(9, 20, 0).unwrap());
        let json = serde_json::to_string(&trip).unwrap();
        assert_eq!(json, r#"{"id":5,"arrival_time":"09:20:00"}"#);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", TripId(42)), "TripId(42)");
    }
}
