// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airlines::detect_airline;
use crate::airports::detect_route;
use crate::date::detect_date;
use crate::{CabinClass, FlightData, GOOGLE_FLIGHTS_MARKER};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Which heuristics to run. OCR output is noisier and layout-shaped, so the OCR
/// profile adds misread repair, extra carrier codes and looser date shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Text,
    Ocr,
}

/// Extracts flight fields from pasted itinerary text.
pub fn extract(text: &str) -> FlightData {
    extract_with(text, Profile::Text)
}

/// Extracts flight fields from OCR output of a booking screenshot.
pub fn extract_ocr(text: &str) -> FlightData {
    extract_with(text, Profile::Ocr)
}

pub fn extract_with(text: &str, profile: Profile) -> FlightData {
    if text.trim().is_empty() {
        return FlightData::default();
    }
    if text.contains(GOOGLE_FLIGHTS_MARKER) {
        log::debug!("[Extract] Google Flights link, returning placeholder record");
        return FlightData::url_sentinel();
    }

    let route = detect_route(text);
    let data = FlightData {
        airline: detect_airline(text, profile),
        origin: route.origin,
        destination: route.destination,
        departure_date: detect_date(text, profile),
        cash_price: detect_price(text),
        cabin_class: detect_cabin(text, profile),
    };
    log::trace!("[Extract] {:?} profile result: {:?}", profile, data);
    data
}

/// First dollar amount in the text. Thousands separators are dropped.
pub fn detect_price(text: &str) -> Option<f64> {
    static PRICE_RE: OnceLock<Regex> = OnceLock::new();
    let re = PRICE_RE.get_or_init(|| Regex::new(r"\$(\d[\d,]*(?:\.\d{1,2})?)").unwrap());

    let caps = re.captures(text)?;
    let digits = caps[1].replace(',', "");
    match digits.parse::<f64>() {
        Ok(price) => Some(price),
        Err(e) => {
            log::debug!("[Extract] skipping price '{}': {}", &caps[1], e);
            None
        }
    }
}

/// Most specific phrases first so "Premium Economy" never reads as "Economy".
const CABIN_PHRASES: &[(&str, CabinClass)] = &[
    ("premium economy", CabinClass::PremiumEconomy),
    ("first class", CabinClass::First),
    ("business class", CabinClass::Business),
    ("premium", CabinClass::PremiumEconomy),
    ("business", CabinClass::Business),
    ("first", CabinClass::First),
    ("economy", CabinClass::Economy),
    ("coach", CabinClass::Economy),
    ("main cabin", CabinClass::Economy),
    ("main", CabinClass::Economy),
];

fn cabin_regexes() -> &'static [(Regex, CabinClass)] {
    static CABIN_RES: OnceLock<Vec<(Regex, CabinClass)>> = OnceLock::new();
    CABIN_RES.get_or_init(|| {
        CABIN_PHRASES
            .iter()
            .map(|(phrase, cabin)| {
                let pattern = format!(r"(?i)\b{}\b", phrase.replace(' ', r"\s+"));
                (Regex::new(&pattern).unwrap(), *cabin)
            })
            .collect()
    })
}

/// Single-letter fare codes as printed on boarding passes: `J Class`, `Y Cabin`.
fn fare_letter(text: &str) -> Option<CabinClass> {
    static FARE_RE: OnceLock<Regex> = OnceLock::new();
    let re = FARE_RE.get_or_init(|| Regex::new(r"\b([FJWY])\s+(?i:class|cabin)\b").unwrap());

    let caps = re.captures(text)?;
    match &caps[1] {
        "F" => Some(CabinClass::First),
        "J" => Some(CabinClass::Business),
        "W" => Some(CabinClass::PremiumEconomy),
        "Y" => Some(CabinClass::Economy),
        _ => None,
    }
}

pub fn detect_cabin(text: &str, profile: Profile) -> Option<CabinClass> {
    let phrase_hit = cabin_regexes()
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, cabin)| *cabin);
    if phrase_hit.is_some() {
        return phrase_hit;
    }
    match profile {
        Profile::Ocr => fare_letter(text),
        Profile::Text => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(extract(""), FlightData::default());
        assert_eq!(extract("   \n\t  "), FlightData::default());
        assert_eq!(extract_ocr("\n\n"), FlightData::default());
    }

    #[test]
    fn test_google_flights_link_gives_sentinel() {
        let data = extract("https://www.google.com/travel/flights/booking?tfs=CBwQAhoj&hl=en");
        assert_eq!(data, FlightData::url_sentinel());
        assert_eq!(data.departure_date.as_deref(), Some(""));
        assert_eq!(data.origin.as_deref(), Some("Processing..."));

        // Content after the marker does not matter.
        let other = extract_ocr("see google.com/travel/flights JFK LAX $900 Business");
        assert_eq!(other, FlightData::url_sentinel());
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(detect_price("Total $1,234.56"), Some(1234.56));
        assert_eq!(detect_price("only $450 today"), Some(450.0));
        assert_eq!(detect_price("was $899 now $450"), Some(899.0));
        assert_eq!(detect_price("$12,500,"), Some(12500.0));
        assert_eq!(detect_price("free"), None);
        assert_eq!(detect_price("$ 450"), None, "a detached dollar sign is not a price");
    }

    #[test]
    fn test_cabin_precedence() {
        assert_eq!(
            detect_cabin("Premium Economy (not Economy)", Profile::Text),
            Some(CabinClass::PremiumEconomy)
        );
        assert_eq!(
            detect_cabin("Economy upgrade to First Class", Profile::Text),
            Some(CabinClass::First)
        );
        assert_eq!(detect_cabin("Main Cabin Extra", Profile::Text), Some(CabinClass::Economy));
        assert_eq!(detect_cabin("COACH", Profile::Text), Some(CabinClass::Economy));
        assert_eq!(detect_cabin("Firstly, no cabin", Profile::Text), None);
    }

    #[test]
    fn test_fare_letters_only_in_ocr() {
        assert_eq!(detect_cabin("Seat 2A J Class", Profile::Ocr), Some(CabinClass::Business));
        assert_eq!(detect_cabin("W cabin", Profile::Ocr), Some(CabinClass::PremiumEconomy));
        assert_eq!(detect_cabin("Seat 2A J Class", Profile::Text), None);
        assert_eq!(detect_cabin("j class", Profile::Ocr), None);
    }

    #[test]
    fn test_end_to_end_sentence() {
        let data = extract("American Airlines AA123 JFK to LAX Dec 15, 2024 Economy $450");
        assert!(
            data.airline.as_deref().unwrap_or("").contains("American Airlines"),
            "airline was {:?}",
            data.airline
        );
        assert_eq!(data.origin.as_deref(), Some("JFK"));
        assert_eq!(data.destination.as_deref(), Some("LAX"));
        assert_eq!(data.departure_date.as_deref(), Some("Dec 15, 2024"));
        assert_eq!(data.cabin_class, Some(CabinClass::Economy));
        assert_eq!(data.cash_price, Some(450.0));
    }

    #[test]
    fn test_no_empty_strings_outside_sentinel() {
        let data = extract("nothing useful here at all");
        assert_eq!(data, FlightData::default());
        for field in [&data.airline, &data.origin, &data.destination, &data.departure_date] {
            assert_ne!(field.as_deref(), Some(""));
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let text = "Delta DL456 ATL→SEA 03/02/2025 Business $1,099";
        assert_eq!(extract(text), extract(text));
        assert_eq!(extract_ocr(text), extract_ocr(text));
    }

    #[test]
    fn test_profile_serde_names() {
        assert_eq!(serde_json::to_string(&Profile::Ocr).unwrap(), "\"ocr\"");
        assert_eq!(Profile::default(), Profile::Text);
    }
}
