//! Trip lookup by arrival time.

use chrono::NaiveTime;

use super::StopRegistry;
use crate::domain::Trip;

impl StopRegistry {
    /// All trips, across every stop, arriving exactly at `time`.
    ///
    /// Results are sorted by trip ID. Trips with equal IDs keep stop order.
    pub fn trips_with_arrival_time(&self, time: NaiveTime) -> Vec<&Trip> {
        let mut trips: Vec<&Trip> = self
            .stops
            .values()
            .flat_map(|stop| stop.trips.iter())
            .filter(|trip| trip.arrival_time == time)
            .collect();

        trips.sort_by_key(|trip| trip.id);
        trips
    }
}
