//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{NormalizedName, Stop, Trip};

/// Request to search stops by name.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Query matched against normalized stop names
    pub q: Option<String>,
}

/// Request to list trips by arrival time.
#[derive(Debug, Deserialize)]
pub struct TripsRequest {
    /// Arrival time in HH:MM or HH:MM:SS format
    pub arrival: String,
}

/// A stop in responses.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Stop ID
    pub id: u32,

    /// Raw display name
    pub name: String,

    /// Name used for searching
    pub normalized_name: String,

    /// Trips arriving at this stop
    pub trips: Vec<TripResult>,
}

impl StopResult {
    /// Convert a domain stop to a response.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.get(),
            name: stop.name.clone(),
            normalized_name: NormalizedName::from_raw(&stop.name).into_string(),
            trips: stop.trips.iter().map(TripResult::from_trip).collect(),
        }
    }
}

/// A trip arrival in responses.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Trip ID
    pub id: u32,

    /// Arrival time (HH:MM:SS)
    pub arrival_time: String,
}

impl TripResult {
    /// Convert a domain trip to a response.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            id: trip.id.0,
            arrival_time: trip.arrival_time.format("%H:%M:%S").to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StopId, TripId};
    use chrono::NaiveTime;

    #[test]
    fn stop_result_from_stop() {
        let stop = Stop::new(StopId(12), "SB FLAGSTOP OAK AVE").with_trips(vec![Trip::new(
            TripId(4),
            NaiveTime::from_hms_opt(7, 5, 0).unwrap(),
        )]);

        let result = StopResult::from_stop(&stop);
        assert_eq!(result.id, 12);
        assert_eq!(result.name, "SB FLAGSTOP OAK AVE");
        assert_eq!(result.normalized_name, "OAK AVE SB FLAGSTOP");
        assert_eq!(result.trips.len(), 1);
        assert_eq!(result.trips[0].id, 4);
        assert_eq!(result.trips[0].arrival_time, "07:05:00");
    }

    #[test]
    fn stop_result_serializes() {
        let stop = Stop::new(StopId(1), "ELM ST");
        let json = serde_json::to_value(StopResult::from_stop(&stop)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "ELM ST",
                "normalized_name": "ELM ST",
                "trips": []
            })
        );
    }
}
