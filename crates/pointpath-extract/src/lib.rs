// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Best-effort extraction of flight fields from pasted itinerary text or OCR output.
//!
//! Every step is independent and total: a step that finds nothing leaves its field
//! unset. Two profiles share the same pipeline, see [`flight_text::Profile`].

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod airlines;
pub mod airports;
pub mod date;
pub mod flight_text;

pub use flight_text::{extract, extract_ocr, extract_with, Profile};

/// Marker substring that turns the whole input into the URL sentinel record.
pub const GOOGLE_FLIGHTS_MARKER: &str = "google.com/travel/flights";
pub const URL_SENTINEL_AIRLINE: &str = "Google Flights URL detected - fetching details...";
pub const URL_SENTINEL_ROUTE: &str = "Processing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial flight record. `None` means unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabin_class: Option<CabinClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_price: Option<f64>,
}

impl FlightData {
    /// The only record allowed to carry empty strings: a Google Flights link was
    /// pasted and URL lookup happens elsewhere.
    pub fn url_sentinel() -> Self {
        Self {
            airline: Some(URL_SENTINEL_AIRLINE.to_string()),
            origin: Some(URL_SENTINEL_ROUTE.to_string()),
            destination: Some(URL_SENTINEL_ROUTE.to_string()),
            departure_date: Some(String::new()),
            cabin_class: None,
            cash_price: None,
        }
    }

    pub fn is_url_sentinel(&self) -> bool {
        self.airline.as_deref() == Some(URL_SENTINEL_AIRLINE)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Airline name without a trailing `<CODE> <number>` flight designator, suitable
    /// for partner lookup. `"American Airlines AA 123"` gives `"American Airlines"`.
    pub fn carrier_name(&self) -> Option<&str> {
        let airline = self.airline.as_deref()?;
        if self.is_url_sentinel() {
            return None;
        }
        let mut parts = airline.rsplitn(3, ' ');
        let number = parts.next();
        let code = parts.next();
        let name = parts.next();
        match (name, code, number) {
            (Some(name), Some(code), Some(number))
                if is_flight_number(number) && is_airline_code(code) =>
            {
                Some(name.trim_end())
            }
            _ => Some(airline),
        }
    }
}

fn is_flight_number(s: &str) -> bool {
    !s.is_empty() && s.len() <= 4 && s.chars().all(|c| c.is_ascii_digit())
}

fn is_airline_code(s: &str) -> bool {
    s.len() == 2
        && s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && s.chars().any(|c| c.is_ascii_uppercase())
}

/// What kind of input was pasted into the single flight input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    Empty,
    Url,
    Text,
}

impl InputKind {
    pub fn classify(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return InputKind::Empty;
        }
        match url::Url::parse(trimmed) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => InputKind::Url,
            _ => InputKind::Text,
        }
    }

    /// One-line hint shown under the input box.
    pub fn hint(&self) -> &'static str {
        match self {
            InputKind::Empty => "",
            InputKind::Url => {
                "🔗 URL detected - URL lookup is not supported, paste the itinerary text or OCR output instead"
            }
            InputKind::Text => "📝 Text detected - we'll parse the flight information directly",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_name_strips_designator() {
        let data = FlightData {
            airline: Some("American Airlines AA 123".to_string()),
            ..Default::default()
        };
        assert_eq!(data.carrier_name(), Some("American Airlines"));

        let data = FlightData {
            airline: Some("JetBlue Airways B6 615".to_string()),
            ..Default::default()
        };
        assert_eq!(data.carrier_name(), Some("JetBlue Airways"));
    }

    #[test]
    fn test_carrier_name_plain_name_untouched() {
        let data = FlightData {
            airline: Some("Air France".to_string()),
            ..Default::default()
        };
        assert_eq!(data.carrier_name(), Some("Air France"));

        // A two-word name ending in digits is not a designator without a code.
        let data = FlightData {
            airline: Some("Emirates".to_string()),
            ..Default::default()
        };
        assert_eq!(data.carrier_name(), Some("Emirates"));
    }

    #[test]
    fn test_carrier_name_sentinel_is_none() {
        assert_eq!(FlightData::url_sentinel().carrier_name(), None);
        assert_eq!(FlightData::default().carrier_name(), None);
    }

    #[test]
    fn test_serialization_omits_unknown_fields() {
        let data = FlightData {
            airline: Some("Qatar Airways".to_string()),
            cabin_class: Some(CabinClass::PremiumEconomy),
            cash_price: Some(890.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["airline"], "Qatar Airways");
        assert_eq!(json["cabinClass"], "Premium Economy");
        assert_eq!(json["cashPrice"], 890.0);
        assert!(json.get("origin").is_none());
        assert!(json.get("departureDate").is_none());
    }

    #[test]
    fn test_input_kind() {
        assert_eq!(InputKind::classify("   "), InputKind::Empty);
        assert_eq!(
            InputKind::classify("https://www.google.com/travel/flights/search?tfs=abc"),
            InputKind::Url
        );
        assert_eq!(InputKind::classify("JFK to LAX Dec 15"), InputKind::Text);
        // A colon after the first word is not a web link.
        assert_eq!(InputKind::classify("Economy:$450"), InputKind::Text);
        assert_eq!(InputKind::Empty.hint(), "");
        assert!(InputKind::Text.hint().contains("Text detected"));
    }
}
