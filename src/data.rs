// JSON-backed data access for the airport, flight, and hotel inventories.
// Records are validated while they deserialize, so everything handed to
// the matching engine already satisfies its construction invariants.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Airport, Flight, Hotel};

#[derive(Error, Debug)]
pub enum DataError {
    #[error("data file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Default inventory locations
pub const AIRPORTS_DATA_PATH: &str = "data/airports.json";
pub const FLIGHTS_DATA_PATH: &str = "data/flights.json";
pub const HOTELS_DATA_PATH: &str = "data/hotels.json";

// Reads a JSON array of records from one file
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, DataError> {
        if !self.path.exists() {
            return Err(DataError::FileNotFound(self.path.clone()));
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| DataError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

pub struct AirportStore {
    store: JsonStore,
}

impl AirportStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            store: JsonStore::new(path.as_ref()),
        }
    }

    pub fn all_airports(&self) -> Result<Vec<Airport>, DataError> {
        self.store.read_all()
    }
}

impl Default for AirportStore {
    fn default() -> Self {
        Self::new(AIRPORTS_DATA_PATH)
    }
}

pub struct FlightStore {
    store: JsonStore,
}

impl FlightStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            store: JsonStore::new(path.as_ref()),
        }
    }

    pub fn all_flights(&self) -> Result<Vec<Flight>, DataError> {
        self.store.read_all()
    }
}

impl Default for FlightStore {
    fn default() -> Self {
        Self::new(FLIGHTS_DATA_PATH)
    }
}

pub struct HotelStore {
    store: JsonStore,
}

impl HotelStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            store: JsonStore::new(path.as_ref()),
        }
    }

    pub fn all_hotels(&self) -> Result<Vec<Hotel>, DataError> {
        self.store.read_all()
    }
}

impl Default for HotelStore {
    fn default() -> Self {
        Self::new(HOTELS_DATA_PATH)
    }
}
