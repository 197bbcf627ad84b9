// Cross-join of matched flights and hotels into priced, ranked offers.

use crate::models::{Flight, Hotel, HolidayOffer};

// Pair every flight with every hotel and rank the pairings by total price,
// cheapest first. Without both a flight and a hotel there is no holiday,
// so an empty input on either side yields no offers.
//
// The sort is stable: offers at the same total price keep the
// flight-major, hotel-minor order in which the product was enumerated.
pub fn build_offers(flights: &[Flight], hotels: &[Hotel]) -> Vec<HolidayOffer> {
    if flights.is_empty() || hotels.is_empty() {
        return Vec::new();
    }

    let mut offers = Vec::with_capacity(flights.len() * hotels.len());
    for flight in flights {
        for hotel in hotels {
            offers.push(HolidayOffer::new(flight.clone(), hotel.clone()));
        }
    }

    offers.sort_by(|a, b| a.total_price().total_cmp(&b.total_price()));
    offers
}
