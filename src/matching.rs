// Criteria-based filtering of the flight and hotel inventories.
//
// An empty allowed-code set is a wildcard ("no restriction"), not "no
// matches". The orchestrator is responsible for never passing through an
// empty set that came from a failed resolution.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{AirportCode, Flight, Hotel};

// A flight matches when its origin and destination are allowed (or the
// corresponding set is empty) and it departs on exactly the requested date.
pub fn matching_flights(
    flights: &[Flight],
    allowed_origins: &HashSet<AirportCode>,
    allowed_destinations: &HashSet<AirportCode>,
    departure_date: NaiveDate,
) -> Vec<Flight> {
    flights
        .iter()
        .filter(|flight| {
            (allowed_origins.is_empty() || allowed_origins.contains(&flight.from))
                && (allowed_destinations.is_empty()
                    || allowed_destinations.contains(&flight.to))
                && flight.departure_date == departure_date
        })
        .cloned()
        .collect()
}

// A hotel matches when it serves at least one allowed destination (or the
// set is empty), guests arrive on exactly the requested date, and the stay
// length equals the requested duration exactly.
pub fn matching_hotels(
    hotels: &[Hotel],
    allowed_destinations: &HashSet<AirportCode>,
    arrival_date: NaiveDate,
    duration: u32,
) -> Vec<Hotel> {
    hotels
        .iter()
        .filter(|hotel| {
            (allowed_destinations.is_empty()
                || hotel
                    .local_airports
                    .iter()
                    .any(|code| allowed_destinations.contains(code)))
                && hotel.arrival_date == arrival_date
                && hotel.nights == duration
        })
        .cloned()
        .collect()
}
