// Airport directory resolution: maps a free-form location string (or the
// absence of one) onto the set of airport codes it could mean.

use std::collections::HashSet;

use crate::models::{Airport, AirportCode};

// Resolve a customer-supplied location against the airport directory.
//
// Resolution rules, in order:
// 1. No location (or a blank string) means "any airport": every code in
//    the directory.
// 2. Exactly three letters is taken as a direct code and returned
//    uppercased as a singleton. The directory is deliberately not
//    consulted, so a syntactically valid code that no airport record
//    carries still resolves to itself.
// 3. Anything else is matched case-insensitively against each airport's
//    city (exact) or name (substring); all codes that satisfy either
//    condition are collected.
//
// An unmatched location yields the empty set. Callers must treat the
// result as unordered.
pub fn resolve_airport_codes(
    location: Option<&str>,
    directory: &[Airport],
) -> HashSet<AirportCode> {
    let location = match location.map(str::trim).filter(|loc| !loc.is_empty()) {
        Some(loc) => loc,
        None => {
            return directory
                .iter()
                .map(|airport| airport.code.clone())
                .collect()
        }
    };

    if let Ok(code) = AirportCode::new(location) {
        return HashSet::from([code]);
    }

    let needle = location.to_lowercase();
    directory
        .iter()
        .filter(|airport| {
            airport.city.to_lowercase() == needle
                || airport.name.to_lowercase().contains(&needle)
        })
        .map(|airport| airport.code.clone())
        .collect()
}
