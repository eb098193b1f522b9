// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Airlines offered for manual selection, and the airline to IATA code table.

/// Airlines with US service, grouped as they are presented. Use [`known_airlines`]
/// for the sorted list.
pub const MAJOR_US_AIRLINES: &[&str] = &[
    "Alaska Airlines",
    "Allegiant Air",
    "American Airlines",
    "Delta Air Lines",
    "Frontier Airlines",
    "Hawaiian Airlines",
    "JetBlue Airways",
    "Southwest Airlines",
    "Spirit Airlines",
    "Sun Country Airlines",
    "United Airlines",
];

pub const REGIONAL_AIRLINES: &[&str] = &[
    "Air Wisconsin",
    "Cape Air",
    "Compass Airlines",
    "Endeavor Air",
    "Envoy Air",
    "ExpressJet",
    "GoJet Airlines",
    "Horizon Air",
    "Mesa Airlines",
    "Piedmont Airlines",
    "PSA Airlines",
    "Republic Airways",
    "SkyWest Airlines",
];

pub const CARGO_AIRLINES: &[&str] = &["Atlas Air", "FedEx Express", "UPS Airlines"];

pub const CHARTER_AIRLINES: &[&str] = &["JSX", "NetJets", "Flexjet"];

pub const INTERNATIONAL_AIRLINES: &[&str] = &[
    "Aer Lingus",
    "Aeromexico",
    "Air Canada",
    "Air France",
    "All Nippon Airways",
    "Avianca",
    "British Airways",
    "Cathay Pacific",
    "Emirates",
    "Etihad Airways",
    "Iberia",
    "KLM Royal Dutch Airlines",
    "Lufthansa",
    "Qatar Airways",
    "Royal Air Maroc",
    "Singapore Airlines",
    "Turkish Airlines",
    "Virgin Atlantic",
];

const IATA_CODES: &[(&str, &str)] = &[
    ("American Airlines", "AA"),
    ("Delta Air Lines", "DL"),
    ("United Airlines", "UA"),
    ("British Airways", "BA"),
    ("Air France", "AF"),
    ("KLM Royal Dutch Airlines", "KL"),
    ("Lufthansa", "LH"),
    ("Singapore Airlines", "SQ"),
    ("Cathay Pacific", "CX"),
    ("Emirates", "EK"),
    ("Qatar Airways", "QR"),
    ("All Nippon Airways", "NH"),
    ("Japan Airlines", "JL"),
    ("Air Canada", "AC"),
    ("Virgin Atlantic", "VS"),
    ("Turkish Airlines", "TK"),
    ("Swiss International Air Lines", "LX"),
    ("Austrian Airlines", "OS"),
    ("Brussels Airlines", "SN"),
    ("Scandinavian Airlines", "SK"),
    ("Finnair", "AY"),
    ("Iberia", "IB"),
    ("Aer Lingus", "EI"),
    ("TAP Air Portugal", "TP"),
    ("LOT Polish Airlines", "LO"),
    ("Czech Airlines", "OK"),
    ("Croatia Airlines", "OU"),
    ("Air China", "CA"),
    ("China Eastern Airlines", "MU"),
    ("China Southern Airlines", "CZ"),
    ("Korean Air", "KE"),
    ("Asiana Airlines", "OZ"),
    ("Thai Airways", "TG"),
    ("Malaysia Airlines", "MH"),
    ("Garuda Indonesia", "GA"),
    ("Philippine Airlines", "PR"),
    ("Vietnam Airlines", "VN"),
    ("Air India", "AI"),
    ("Ethiopian Airlines", "ET"),
    ("Kenya Airways", "KQ"),
    ("South African Airways", "SA"),
    ("EgyptAir", "MS"),
    ("Royal Air Maroc", "AT"),
    ("Royal Jordanian", "RJ"),
    ("Middle East Airlines", "ME"),
    ("Saudia", "SV"),
    ("Etihad Airways", "EY"),
    ("Oman Air", "WY"),
    ("Kuwait Airways", "KU"),
    ("JetBlue Airways", "B6"),
    ("Alaska Airlines", "AS"),
    ("Hawaiian Airlines", "HA"),
    ("Southwest Airlines", "WN"),
    ("Frontier Airlines", "F9"),
    ("Spirit Airlines", "NK"),
    ("Allegiant Air", "G4"),
    ("Sun Country Airlines", "SY"),
    ("Qantas", "QF"),
    ("Virgin Australia", "VA"),
    ("Air New Zealand", "NZ"),
    ("Avianca", "AV"),
    ("LATAM Airlines", "LA"),
    ("Copa Airlines", "CM"),
    ("Aeromexico", "AM"),
    ("WestJet", "WS"),
];

/// Two-letter code for an exact airline name.
pub fn iata_code(airline: &str) -> Option<&'static str> {
    IATA_CODES
        .iter()
        .find(|(name, _)| *name == airline)
        .map(|(_, code)| *code)
}

/// Every catalog airline, alphabetically.
pub fn known_airlines() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = MAJOR_US_AIRLINES
        .iter()
        .chain(REGIONAL_AIRLINES)
        .chain(CARGO_AIRLINES)
        .chain(CHARTER_AIRLINES)
        .chain(INTERNATIONAL_AIRLINES)
        .copied()
        .collect();
    all.sort_unstable();
    all
}

/// Case-insensitive substring search. A blank query returns the whole catalog.
pub fn search_airlines(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    known_airlines()
        .into_iter()
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
        .collect()
}

/// Catalog spelling of a name typed in any case.
pub fn find_airline(name: &str) -> Option<&'static str> {
    let name = name.trim();
    known_airlines()
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(name))
}
