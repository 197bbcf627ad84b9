// End-to-end holiday search over read-only inventory snapshots.

use tracing::debug;

use crate::matching::{matching_flights, matching_hotels};
use crate::models::{Airport, Flight, Hotel, HolidayOffer, SearchCriteria};
use crate::offers::build_offers;
use crate::resolver::resolve_airport_codes;

// Sequences resolution, matching, and offer building for one search
// request. Holds no matching logic itself; each stage short-circuits to
// an empty result, never an error — "nothing found" is a valid outcome
// of every stage.
pub struct HolidaySearch {
    airports: Vec<Airport>,
    flights: Vec<Flight>,
    hotels: Vec<Hotel>,
}

impl HolidaySearch {
    // Takes ownership of inventory snapshots already validated at
    // construction. The snapshots are never mutated, so one instance can
    // serve any number of independent searches.
    pub fn new(airports: Vec<Airport>, flights: Vec<Flight>, hotels: Vec<Hotel>) -> Self {
        Self {
            airports,
            flights,
            hotels,
        }
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<HolidayOffer> {
        // Stage 1: resolve both endpoints. An unresolvable location means
        // zero valid codes; that must terminate the search here rather
        // than reach the matchers, where an empty set would act as a
        // wildcard.
        let origins = resolve_airport_codes(criteria.departing_from.as_deref(), &self.airports);
        let destinations =
            resolve_airport_codes(criteria.traveling_to.as_deref(), &self.airports);
        debug!(
            origins = origins.len(),
            destinations = destinations.len(),
            "resolved airport codes"
        );
        if origins.is_empty() || destinations.is_empty() {
            return Vec::new();
        }

        // Stage 2: flights on the requested route and date
        let flights = matching_flights(
            &self.flights,
            &origins,
            &destinations,
            criteria.departure_date,
        );
        debug!(matched = flights.len(), "filtered flights");
        if flights.is_empty() {
            return Vec::new();
        }

        // Stage 3: hotels at the destination for the exact stay
        let hotels = matching_hotels(
            &self.hotels,
            &destinations,
            criteria.departure_date,
            criteria.duration,
        );
        debug!(matched = hotels.len(), "filtered hotels");
        if hotels.is_empty() {
            return Vec::new();
        }

        // Stages 4-5: cross-join, rank, return
        let offers = build_offers(&flights, &hotels);
        debug!(offers = offers.len(), "built ranked offers");
        offers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn airports() -> Vec<Airport> {
        vec![
            Airport::new(1, "MAN", "Manchester Airport", "Manchester").unwrap(),
            Airport::new(2, "LGW", "London Gatwick Airport", "London").unwrap(),
            Airport::new(3, "LTN", "London Luton Airport", "London").unwrap(),
            Airport::new(4, "AGP", "Malaga-Costa del Sol Airport", "Malaga").unwrap(),
            Airport::new(5, "PMI", "Palma de Mallorca Airport", "Mallorca").unwrap(),
        ]
    }

    #[test]
    fn test_manchester_to_malaga_finds_the_single_pairing() {
        let flights = vec![
            Flight::new(2, "Oceanic Airlines", "MAN", "AGP", 245.0, date(2023, 7, 1)).unwrap(),
        ];
        let hotels = vec![
            Hotel::new(9, "Nh Malaga", date(2023, 7, 1), 83.0, &["AGP"], 7).unwrap(),
        ];
        let engine = HolidaySearch::new(airports(), flights, hotels);

        let criteria =
            SearchCriteria::new(Some("Manchester"), Some("Malaga"), date(2023, 7, 1), 7)
                .unwrap();
        let offers = engine.search(&criteria);

        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].total_price(), 826.0);
        assert_eq!(offers[0].flight().id, 2);
        assert_eq!(offers[0].hotel().id, 9);
    }

    #[test]
    fn test_unresolvable_destination_short_circuits_before_matching() {
        // The flight and hotel below would match ANY search if the empty
        // resolver result leaked through as a wildcard set. The search
        // must instead stop at resolution.
        let flights = vec![
            Flight::new(1, "Oceanic Airlines", "MAN", "AGP", 245.0, date(2023, 7, 1)).unwrap(),
        ];
        let hotels = vec![
            Hotel::new(1, "Nh Malaga", date(2023, 7, 1), 83.0, &["AGP"], 7).unwrap(),
        ];
        let engine = HolidaySearch::new(airports(), flights, hotels);

        let criteria =
            SearchCriteria::new(Some("Manchester"), Some("Atlantis"), date(2023, 7, 1), 7)
                .unwrap();
        assert!(engine.search(&criteria).is_empty());
    }

    #[test]
    fn test_unresolvable_origin_short_circuits_too() {
        let flights = vec![
            Flight::new(1, "Oceanic Airlines", "MAN", "AGP", 245.0, date(2023, 7, 1)).unwrap(),
        ];
        let hotels = vec![
            Hotel::new(1, "Nh Malaga", date(2023, 7, 1), 83.0, &["AGP"], 7).unwrap(),
        ];
        let engine = HolidaySearch::new(airports(), flights, hotels);

        let criteria =
            SearchCriteria::new(Some("Nowhere"), Some("Malaga"), date(2023, 7, 1), 7).unwrap();
        assert!(engine.search(&criteria).is_empty());
    }

    #[test]
    fn test_any_origin_searches_every_departure_airport() {
        let flights = vec![
            Flight::new(3, "First Class Air", "MAN", "PMI", 170.0, date(2023, 6, 15)).unwrap(),
            Flight::new(4, "Fresh Airways", "BOH", "PMI", 130.0, date(2023, 6, 15)).unwrap(),
            Flight::new(5, "First Class Air", "LTN", "PMI", 180.0, date(2023, 6, 15)).unwrap(),
        ];
        let hotels = vec![
            Hotel::new(5, "Sol Palmanova", date(2023, 6, 15), 60.0, &["PMI"], 10).unwrap(),
        ];
        let mut directory = airports();
        directory.push(Airport::new(6, "BOH", "Bournemouth Airport", "Bournemouth").unwrap());
        let engine = HolidaySearch::new(directory, flights, hotels);

        let criteria =
            SearchCriteria::new(None, Some("Mallorca"), date(2023, 6, 15), 10).unwrap();
        let offers = engine.search(&criteria);

        assert_eq!(offers.len(), 3);
        // Cheapest first: Bournemouth departure at 130 + 600.
        assert_eq!(offers[0].flight().id, 4);
        assert_eq!(offers[0].total_price(), 730.0);
    }

    #[test]
    fn test_same_priced_flights_keep_their_inventory_order() {
        let flights = vec![
            Flight::new(7, "Trans American Airlines", "LGW", "TFS", 125.0, date(2022, 11, 10))
                .unwrap(),
            Flight::new(8, "Fresh Airways", "LGW", "TFS", 125.0, date(2022, 11, 10)).unwrap(),
        ];
        let hotels = vec![
            Hotel::new(2, "Laguna Park 2", date(2022, 11, 10), 50.0, &["TFS"], 7).unwrap(),
        ];
        let mut directory = airports();
        directory.push(Airport::new(7, "TFS", "Tenerife South Airport", "Tenerife").unwrap());
        let engine = HolidaySearch::new(directory, flights, hotels);

        let criteria =
            SearchCriteria::new(Some("London"), Some("Tenerife"), date(2022, 11, 10), 7)
                .unwrap();
        let offers = engine.search(&criteria);

        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].flight().id, 7);
        assert_eq!(offers[1].flight().id, 8);
    }

    #[test]
    fn test_no_flights_on_the_date_means_no_offers() {
        let flights = vec![
            Flight::new(2, "Oceanic Airlines", "MAN", "AGP", 245.0, date(2023, 7, 1)).unwrap(),
        ];
        let hotels = vec![
            Hotel::new(9, "Nh Malaga", date(2023, 7, 1), 83.0, &["AGP"], 7).unwrap(),
        ];
        let engine = HolidaySearch::new(airports(), flights, hotels);

        let criteria =
            SearchCriteria::new(Some("Manchester"), Some("Malaga"), date(2023, 7, 2), 7)
                .unwrap();
        assert!(engine.search(&criteria).is_empty());
    }

    #[test]
    fn test_no_hotel_for_the_duration_means_no_offers() {
        let flights = vec![
            Flight::new(2, "Oceanic Airlines", "MAN", "AGP", 245.0, date(2023, 7, 1)).unwrap(),
        ];
        let hotels = vec![
            Hotel::new(9, "Nh Malaga", date(2023, 7, 1), 83.0, &["AGP"], 7).unwrap(),
        ];
        let engine = HolidaySearch::new(airports(), flights, hotels);

        let criteria =
            SearchCriteria::new(Some("Manchester"), Some("Malaga"), date(2023, 7, 1), 14)
                .unwrap();
        assert!(engine.search(&criteria).is_empty());
    }

    fn engine_over_sample_data() -> HolidaySearch {
        use crate::data::{AirportStore, FlightStore, HotelStore};

        HolidaySearch::new(
            AirportStore::default().all_airports().unwrap(),
            FlightStore::default().all_flights().unwrap(),
            HotelStore::default().all_hotels().unwrap(),
        )
    }

    #[test]
    fn test_e2e_manchester_to_malaga_over_sample_data() {
        let engine = engine_over_sample_data();
        let criteria =
            SearchCriteria::new(Some("Manchester"), Some("Malaga"), date(2023, 7, 1), 7)
                .unwrap();

        let offers = engine.search(&criteria);

        assert_eq!(offers.len(), 1);
        let offer = &offers[0];
        assert_eq!(offer.flight().id, 2);
        assert_eq!(offer.flight().airline, "Oceanic Airlines");
        assert_eq!(offer.hotel().id, 9);
        assert_eq!(offer.hotel().name, "Nh Malaga");
        assert_eq!(offer.total_price(), 245.0 + 83.0 * 7.0);
    }

    #[test]
    fn test_e2e_any_airport_to_mallorca_over_sample_data() {
        let engine = engine_over_sample_data();
        let criteria = SearchCriteria::new(None, Some("PMI"), date(2023, 6, 15), 10).unwrap();

        let offers = engine.search(&criteria);

        // Flights 3, 4, 5 against hotels 4 and 5.
        assert_eq!(offers.len(), 6);
        assert_eq!(offers[0].flight().id, 4);
        assert_eq!(offers[0].hotel().id, 5);
        assert_eq!(offers[0].total_price(), 130.0 + 60.0 * 10.0);

        let totals: Vec<f64> = offers.iter().map(HolidayOffer::total_price).collect();
        assert!(totals.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_e2e_london_to_tenerife_over_sample_data() {
        let engine = engine_over_sample_data();
        let criteria =
            SearchCriteria::new(Some("London"), Some("Tenerife"), date(2022, 11, 10), 7)
                .unwrap();

        let offers = engine.search(&criteria);

        // Flights 7 and 8 cost the same; inventory order must hold.
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].flight().id, 7);
        assert_eq!(offers[1].flight().id, 8);
        assert_eq!(offers[0].hotel().name, "Laguna Park 2");
    }

    #[test]
    fn test_direct_code_criteria_bypass_the_directory() {
        // Codes are accepted without a directory lookup, so a search by
        // code works even against an empty airport directory.
        let flights = vec![
            Flight::new(2, "Oceanic Airlines", "MAN", "AGP", 245.0, date(2023, 7, 1)).unwrap(),
        ];
        let hotels = vec![
            Hotel::new(9, "Nh Malaga", date(2023, 7, 1), 83.0, &["AGP"], 7).unwrap(),
        ];
        let engine = HolidaySearch::new(Vec::new(), flights, hotels);

        let criteria =
            SearchCriteria::new(Some("man"), Some("agp"), date(2023, 7, 1), 7).unwrap();
        let offers = engine.search(&criteria);

        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].departing_from().as_str(), "MAN");
        assert_eq!(offers[0].traveling_to().as_str(), "AGP");
    }
}
