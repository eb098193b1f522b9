// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Static airline tables. Order matters everywhere: earlier entries win.

/// (phrase, canonical name). Phrases are matched case-insensitively as substrings of
/// whitespace-normalized text, so longer and more specific phrases come first.
pub const FULL_NAMES: &[(&str, &str)] = &[
    ("Royal Air Maroc", "Royal Air Maroc"),
    ("Delta Air Lines", "Delta Air Lines"),
    ("United Airlines", "United Airlines"),
    ("British Airways", "British Airways"),
    ("American Airline", "American Airlines"),
    ("Air France", "Air France"),
    ("KLM Royal Dutch", "KLM Royal Dutch Airlines"),
    ("Lufthansa", "Lufthansa"),
    ("Emirates", "Emirates"),
    ("Qatar Airways", "Qatar Airways"),
    ("Turkish Airlines", "Turkish Airlines"),
    ("Singapore Airlines", "Singapore Airlines"),
    ("Cathay Pacific", "Cathay Pacific"),
    ("Virgin Atlantic", "Virgin Atlantic"),
    ("Virgin Australia", "Virgin Australia"),
    ("Air Canada", "Air Canada"),
    ("Iberia", "Iberia"),
    ("Etihad Airways", "Etihad Airways"),
    ("All Nippon Airways", "All Nippon Airways"),
    ("Avianca", "Avianca"),
    ("Aeromexico", "Aeromexico"),
    ("Aeroméxico", "Aeromexico"),
    ("Aer Lingus", "Aer Lingus"),
    ("Japan Airlines", "Japan Airlines"),
    ("Qantas", "Qantas"),
    ("Finnair", "Finnair"),
    ("Alaska Air", "Alaska Airlines"),
    ("Hawaiian Airlines", "Hawaiian Airlines"),
    ("JetBlue", "JetBlue Airways"),
    ("Southwest Airlines", "Southwest Airlines"),
    ("Spirit Airlines", "Spirit Airlines"),
    ("Frontier Airlines", "Frontier Airlines"),
    ("Allegiant Air", "Allegiant Air"),
    ("Sun Country", "Sun Country Airlines"),
    ("Swiss International", "Swiss International Air Lines"),
    ("Austrian Airlines", "Austrian Airlines"),
    ("Brussels Airlines", "Brussels Airlines"),
    ("Scandinavian Airlines", "Scandinavian Airlines"),
    ("TAP Air Portugal", "TAP Air Portugal"),
    ("LOT Polish", "LOT Polish Airlines"),
    ("Korean Air", "Korean Air"),
    ("Asiana", "Asiana Airlines"),
    ("Thai Airways", "Thai Airways"),
    ("Malaysia Airlines", "Malaysia Airlines"),
    ("Ethiopian Airlines", "Ethiopian Airlines"),
    ("Kenya Airways", "Kenya Airways"),
    ("South African Airways", "South African Airways"),
    ("EgyptAir", "EgyptAir"),
    ("Royal Jordanian", "Royal Jordanian"),
    ("SriLankan", "SriLankan Airlines"),
    ("Air China", "Air China"),
    ("China Eastern", "China Eastern Airlines"),
    ("China Southern", "China Southern Airlines"),
    ("China Airlines", "China Airlines"),
    ("Air India", "Air India"),
    ("Air New Zealand", "Air New Zealand"),
    ("EVA Air", "EVA Air"),
    ("Copa Airlines", "Copa Airlines"),
    ("LATAM", "LATAM Airlines"),
    ("WestJet", "WestJet"),
    ("ExpressJet", "ExpressJet"),
    ("FedEx Express", "FedEx Express"),
    ("NetJets", "NetJets"),
    ("Flexjet", "Flexjet"),
];

/// IATA carrier codes recognised in front of a flight number by every profile.
pub const CARRIER_CODES: &[(&str, &str)] = &[
    ("AA", "American Airlines"),
    ("DL", "Delta Air Lines"),
    ("UA", "United Airlines"),
    ("WN", "Southwest Airlines"),
    ("B6", "JetBlue Airways"),
    ("AS", "Alaska Airlines"),
    ("NK", "Spirit Airlines"),
    ("F9", "Frontier Airlines"),
    ("G4", "Allegiant Air"),
    ("HA", "Hawaiian Airlines"),
    ("SY", "Sun Country Airlines"),
    ("BA", "British Airways"),
    ("AF", "Air France"),
    ("LH", "Lufthansa"),
    ("EK", "Emirates"),
    ("QR", "Qatar Airways"),
    ("SQ", "Singapore Airlines"),
    ("CX", "Cathay Pacific"),
    ("VS", "Virgin Atlantic"),
    ("KL", "KLM Royal Dutch Airlines"),
    ("AC", "Air Canada"),
    ("IB", "Iberia"),
    ("TK", "Turkish Airlines"),
    ("EY", "Etihad Airways"),
    ("NH", "All Nippon Airways"),
    ("AV", "Avianca"),
    ("AM", "Aeromexico"),
    ("EI", "Aer Lingus"),
    ("AT", "Royal Air Maroc"),
];

/// Extra codes only trusted on OCR output, where the carrier name is often cropped.
pub const OCR_EXTRA_CODES: &[(&str, &str)] = &[
    ("QF", "Qantas"),
    ("JL", "Japan Airlines"),
    ("AY", "Finnair"),
    ("LX", "Swiss International Air Lines"),
    ("OS", "Austrian Airlines"),
    ("SN", "Brussels Airlines"),
    ("SK", "Scandinavian Airlines"),
    ("TP", "TAP Air Portugal"),
    ("LO", "LOT Polish Airlines"),
    ("KE", "Korean Air"),
    ("OZ", "Asiana Airlines"),
    ("TG", "Thai Airways"),
    ("MH", "Malaysia Airlines"),
    ("ET", "Ethiopian Airlines"),
    ("SA", "South African Airways"),
    ("MS", "EgyptAir"),
    ("RJ", "Royal Jordanian"),
    ("VA", "Virgin Australia"),
    ("NZ", "Air New Zealand"),
    ("LA", "LATAM Airlines"),
    ("CM", "Copa Airlines"),
    ("WS", "WestJet"),
    ("MU", "China Eastern Airlines"),
    ("CZ", "China Southern Airlines"),
    ("AI", "Air India"),
    ("PR", "Philippine Airlines"),
    ("VN", "Vietnam Airlines"),
    ("KQ", "Kenya Airways"),
    ("SV", "Saudia"),
    ("UL", "SriLankan Airlines"),
    ("BR", "EVA Air"),
];

/// A short brand word people type instead of the full airline name.
#[derive(Debug, Clone, Copy)]
pub struct Brand {
    pub word: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    /// Whether the word alone (without a flight number) identifies the airline.
    pub bare: bool,
    /// Words that, when they follow the brand, mean it is not an airline at all.
    pub not_before: &'static [&'static str],
}

const fn brand(word: &'static str, name: &'static str, code: &'static str, bare: bool) -> Brand {
    Brand {
        word,
        name,
        code,
        bare,
        not_before: &[],
    }
}

pub const BRANDS: &[Brand] = &[
    brand("American", "American Airlines", "AA", false),
    brand("Delta", "Delta Air Lines", "DL", true),
    Brand {
        word: "United",
        name: "United Airlines",
        code: "UA",
        bare: true,
        not_before: &["states", "kingdom", "arab", "nations"],
    },
    brand("Southwest", "Southwest Airlines", "WN", true),
    brand("JetBlue", "JetBlue Airways", "B6", true),
    brand("Alaska", "Alaska Airlines", "AS", false),
    brand("Spirit", "Spirit Airlines", "NK", false),
    brand("Frontier", "Frontier Airlines", "F9", true),
    brand("Allegiant", "Allegiant Air", "G4", true),
    brand("Hawaiian", "Hawaiian Airlines", "HA", true),
    brand("Sun Country", "Sun Country Airlines", "SY", true),
    brand("British", "British Airways", "BA", false),
    brand("Qatar", "Qatar Airways", "QR", false),
    brand("Singapore", "Singapore Airlines", "SQ", false),
    brand("Cathay", "Cathay Pacific", "CX", true),
    Brand {
        word: "Virgin",
        name: "Virgin Atlantic",
        code: "VS",
        bare: true,
        not_before: &["islands", "australia", "mobile", "media"],
    },
    brand("KLM", "KLM Royal Dutch Airlines", "KL", true),
    brand("Turkish", "Turkish Airlines", "TK", false),
    brand("Etihad", "Etihad Airways", "EY", true),
    brand("Nippon", "All Nippon Airways", "NH", true),
    brand("FedEx", "FedEx Express", "FX", true),
    brand("JSX", "JSX", "XE", true),
];

/// Uppercase three-letter tokens that are airline brands rather than airports.
pub const AIRLINE_TOKENS: &[&str] = &["KLM", "ANA", "JAL", "SAS", "LOT", "TAP", "EVA", "JSX", "UPS"];

/// Words that turn a preceding `AIR` token into part of an airline name.
pub const AIR_FOLLOWERS: &[&str] = &[
    "LINES", "FRANCE", "CANADA", "CHINA", "INDIA", "EUROPA", "SERBIA", "ASTANA", "NEW", "TRANSAT",
    "ARABIA", "BALTIC", "MALTA", "MAROC", "LINGUS", "PORTUGAL", "TAHITI", "NIUGINI", "MAURITIUS",
    "SEYCHELLES", "NAMIBIA", "TANZANIA", "WISCONSIN",
];

/// Looks up the canonical name for a carrier code across both code tables.
pub fn name_for_code(code: &str) -> Option<&'static str> {
    CARRIER_CODES
        .iter()
        .chain(OCR_EXTRA_CODES.iter())
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Reverse lookup used to attach a flight designator to a full-name match.
pub fn code_for_name(name: &str) -> Option<&'static str> {
    CARRIER_CODES
        .iter()
        .chain(OCR_EXTRA_CODES.iter())
        .find(|(_, n)| *n == name)
        .map(|(code, _)| *code)
}
