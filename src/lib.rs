// Holiday search: matches customer criteria against flight and hotel
// inventories and ranks every viable flight+hotel pairing by total cost.

pub mod data;
pub mod matching;
pub mod models;
pub mod offers;
pub mod resolver;
pub mod search;

// Re-export key types for convenience
pub use data::{AirportStore, DataError, FlightStore, HotelStore, JsonStore};
pub use matching::{matching_flights, matching_hotels};
pub use models::{
    Airport, AirportCode, Flight, HolidayOffer, Hotel, ModelError, SearchCriteria,
};
pub use offers::build_offers;
pub use resolver::resolve_airport_codes;
pub use search::HolidaySearch;
