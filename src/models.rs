// Core records for the holiday search engine.
// Every invariant is enforced once, at construction time; the matching
// stages downstream treat these records as already valid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Invariant violations raised at record construction
#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("airport code must be exactly 3 letters, got {0:?}")]
    InvalidAirportCode(String),

    #[error("price cannot be negative: {0}")]
    NegativePrice(f64),

    #[error("nights must be at least 1, got {0}")]
    InvalidNights(u32),

    #[error("hotel must serve at least one local airport")]
    NoLocalAirports,

    #[error("duration must be at least 1 night, got {0}")]
    InvalidDuration(u32),
}

// A 3-letter uppercase airport identifier. Construction normalizes to
// uppercase and rejects anything that is not exactly three ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AirportCode(String);

impl AirportCode {
    pub fn new(value: &str) -> Result<Self, ModelError> {
        if value.len() == 3 && value.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(value.to_ascii_uppercase()))
        } else {
            Err(ModelError::InvalidAirportCode(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AirportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AirportCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for AirportCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        AirportCode::new(&raw).map_err(serde::de::Error::custom)
    }
}

// Prices are stored rounded to 2 decimal places
fn validate_price(value: f64) -> Result<f64, ModelError> {
    if value < 0.0 {
        return Err(ModelError::NegativePrice(value));
    }
    Ok((value * 100.0).round() / 100.0)
}

// An entry in the airport reference directory
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "RawAirport")]
pub struct Airport {
    pub id: u32,
    pub code: AirportCode,
    pub name: String,
    pub city: String,
}

#[derive(Deserialize)]
struct RawAirport {
    id: u32,
    code: String,
    name: String,
    city: String,
}

impl TryFrom<RawAirport> for Airport {
    type Error = ModelError;

    fn try_from(raw: RawAirport) -> Result<Self, Self::Error> {
        Ok(Airport {
            id: raw.id,
            code: AirportCode::new(&raw.code)?,
            name: raw.name,
            city: raw.city,
        })
    }
}

impl Airport {
    pub fn new(id: u32, code: &str, name: &str, city: &str) -> Result<Self, ModelError> {
        Ok(Self {
            id,
            code: AirportCode::new(code)?,
            name: name.to_string(),
            city: city.to_string(),
        })
    }
}

// One flight in the supplier inventory
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "RawFlight")]
pub struct Flight {
    pub id: u32,
    pub airline: String,
    pub from: AirportCode,
    pub to: AirportCode,
    pub price: f64,
    pub departure_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawFlight {
    id: u32,
    airline: String,
    from: AirportCode,
    to: AirportCode,
    price: f64,
    departure_date: NaiveDate,
}

impl TryFrom<RawFlight> for Flight {
    type Error = ModelError;

    fn try_from(raw: RawFlight) -> Result<Self, Self::Error> {
        Ok(Flight {
            id: raw.id,
            airline: raw.airline,
            from: raw.from,
            to: raw.to,
            price: validate_price(raw.price)?,
            departure_date: raw.departure_date,
        })
    }
}

impl Flight {
    pub fn new(
        id: u32,
        airline: &str,
        from: &str,
        to: &str,
        price: f64,
        departure_date: NaiveDate,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            id,
            airline: airline.to_string(),
            from: AirportCode::new(from)?,
            to: AirportCode::new(to)?,
            price: validate_price(price)?,
            departure_date,
        })
    }
}

// One hotel in the supplier inventory
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "RawHotel")]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    pub arrival_date: NaiveDate,
    pub price_per_night: f64,
    pub local_airports: Vec<AirportCode>,
    pub nights: u32,
}

#[derive(Deserialize)]
struct RawHotel {
    id: u32,
    name: String,
    arrival_date: NaiveDate,
    price_per_night: f64,
    local_airports: Vec<AirportCode>,
    nights: u32,
}

impl TryFrom<RawHotel> for Hotel {
    type Error = ModelError;

    fn try_from(raw: RawHotel) -> Result<Self, Self::Error> {
        if raw.nights < 1 {
            return Err(ModelError::InvalidNights(raw.nights));
        }
        if raw.local_airports.is_empty() {
            return Err(ModelError::NoLocalAirports);
        }
        Ok(Hotel {
            id: raw.id,
            name: raw.name,
            arrival_date: raw.arrival_date,
            price_per_night: validate_price(raw.price_per_night)?,
            local_airports: raw.local_airports,
            nights: raw.nights,
        })
    }
}

impl Hotel {
    pub fn new(
        id: u32,
        name: &str,
        arrival_date: NaiveDate,
        price_per_night: f64,
        local_airports: &[&str],
        nights: u32,
    ) -> Result<Self, ModelError> {
        let codes = local_airports
            .iter()
            .map(|code| AirportCode::new(code))
            .collect::<Result<Vec<_>, _>>()?;
        RawHotel {
            id,
            name: name.to_string(),
            arrival_date,
            price_per_night,
            local_airports: codes,
            nights,
        }
        .try_into()
    }

    // Combined cost for the whole stay
    pub fn total_cost(&self) -> f64 {
        self.price_per_night * self.nights as f64
    }
}

// What the customer asked for. Absent origin/destination means "any".
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    pub departing_from: Option<String>,
    pub traveling_to: Option<String>,
    pub departure_date: NaiveDate,
    pub duration: u32,
}

impl SearchCriteria {
    pub fn new(
        departing_from: Option<&str>,
        traveling_to: Option<&str>,
        departure_date: NaiveDate,
        duration: u32,
    ) -> Result<Self, ModelError> {
        if duration < 1 {
            return Err(ModelError::InvalidDuration(duration));
        }
        Ok(Self {
            departing_from: departing_from.map(str::to_string),
            traveling_to: traveling_to.map(str::to_string),
            departure_date,
            duration,
        })
    }
}

// One ranked flight+hotel pairing. Only the offer builder constructs
// these; callers read them.
#[derive(Debug, Clone)]
pub struct HolidayOffer {
    flight: Flight,
    hotel: Hotel,
    total_price: f64,
}

impl HolidayOffer {
    pub(crate) fn new(flight: Flight, hotel: Hotel) -> Self {
        let total_price = flight.price + hotel.total_cost();
        Self {
            flight,
            hotel,
            total_price,
        }
    }

    pub fn flight(&self) -> &Flight {
        &self.flight
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn departing_from(&self) -> &AirportCode {
        &self.flight.from
    }

    pub fn traveling_to(&self) -> &AirportCode {
        &self.flight.to
    }
}
