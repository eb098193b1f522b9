// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Pasted-text cases collected from real itinerary emails and booking pages.

use pointpath_extract::{extract, CabinClass, FlightData};

fn carrier(data: &FlightData) -> Option<&str> {
    data.carrier_name()
}

#[test]
fn test_major_carriers_with_routes() {
    // (input, carrier, origin, destination)
    let cases = [
        (
            "American Airlines AA123 JFK to LAX Dec 15, 2024 Economy $450",
            "American Airlines",
            "JFK",
            "LAX",
        ),
        (
            "Delta Air Lines DL456 ATL→SEA Business Class Jan 20, 2025 $1,200",
            "Delta Air Lines",
            "ATL",
            "SEA",
        ),
        (
            "United UA789 SFO-ORD 01/15/2025 First Class $2,100",
            "United Airlines",
            "SFO",
            "ORD",
        ),
        (
            "British Airways BA100 LHR to JFK Mon, Mar 15 Premium Economy $890",
            "British Airways",
            "LHR",
            "JFK",
        ),
        (
            "Emirates EK215 DXB → LAX Thu, Apr 10 Business $3,450",
            "Emirates",
            "DXB",
            "LAX",
        ),
        (
            "Air France AF123 CDG to JFK Mar 20, 2024 Business €1,200",
            "Air France",
            "CDG",
            "JFK",
        ),
        (
            "Singapore Airlines SQ25 SIN → LAX Apr 15, 2024 First $4,500",
            "Singapore Airlines",
            "SIN",
            "LAX",
        ),
        (
            "Qatar Airways QR123 DOH to ORD May 10, 2024 Business $2,800",
            "Qatar Airways",
            "DOH",
            "ORD",
        ),
    ];

    for (input, airline, origin, destination) in cases {
        let data = extract(input);
        assert_eq!(carrier(&data), Some(airline), "airline for: {}", input);
        assert_eq!(data.origin.as_deref(), Some(origin), "origin for: {}", input);
        assert_eq!(
            data.destination.as_deref(),
            Some(destination),
            "destination for: {}",
            input
        );
    }
}

#[test]
fn test_code_only_airline_keeps_designator() {
    let data = extract("United UA789 SFO-ORD 01/15/2025 First Class $2,100");
    assert_eq!(data.airline.as_deref(), Some("United Airlines UA 789"));
    assert_eq!(data.cabin_class, Some(CabinClass::First));
    assert_eq!(data.departure_date.as_deref(), Some("01/15/2025"));
}

#[test]
fn test_date_shapes() {
    let cases = [
        ("American Airlines JFK to LAX 12/15/2024 Economy", "12/15/2024"),
        ("Delta ATL to SEA Dec 15, 2024 Business", "Dec 15, 2024"),
        ("British Airways LHR to JFK 15 Dec 2024 First", "15 Dec 2024"),
        ("United SFO to ORD Jan 20, 2025 Economy", "Jan 20, 2025"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            extract(input).departure_date.as_deref(),
            Some(expected),
            "date for: {}",
            input
        );
    }
}

#[test]
fn test_prices() {
    assert_eq!(extract("American Airlines JFK to LAX $450 Economy").cash_price, Some(450.0));
    assert_eq!(extract("Emirates DXB to LAX $3,450 Business").cash_price, Some(3450.0));
    assert_eq!(extract("Delta ATL to SEA $1,234.56 Premium").cash_price, Some(1234.56));
    assert_eq!(
        extract("Flight costs $450 or $650 for upgrade, taxes $89").cash_price,
        Some(450.0),
        "first amount wins"
    );
}

#[test]
fn test_cabins() {
    let cases = [
        ("American Airlines JFK to LAX Economy $450", CabinClass::Economy),
        ("Delta ATL to SEA Business Class $1,200", CabinClass::Business),
        ("United SFO to ORD First Class $2,100", CabinClass::First),
        ("British Airways LHR to JFK Premium Economy $890", CabinClass::PremiumEconomy),
        ("Southwest LAX to DEN Coach $250", CabinClass::Economy),
    ];
    for (input, expected) in cases {
        assert_eq!(extract(input).cabin_class, Some(expected), "cabin for: {}", input);
    }
}

#[test]
fn test_partial_and_empty() {
    let data = extract("American Airlines JFK $450");
    assert_eq!(data.airline.as_deref(), Some("American Airlines"));
    assert_eq!(data.cash_price, Some(450.0));
    assert_eq!(data.origin, None);
    assert_eq!(data.destination, None);

    let data = extract("This is just random text with no flight data");
    assert!(data.airline.is_none() && data.origin.is_none() && data.destination.is_none());

    assert!(extract("").is_empty());
    assert!(extract("   \n\t   ").is_empty());
}

#[test]
fn test_google_flights_url() {
    let data = extract(
        "https://www.google.com/travel/flights/search?tfs=CBwQAhooag0IAxIJL20vMDJfMjg2EgoyMDI0LTEyLTE1cgwIAxIIL20vMDMwcWI",
    );
    assert!(data.is_url_sentinel());
    assert_eq!(
        data.airline.as_deref(),
        Some("Google Flights URL detected - fetching details...")
    );
    assert_eq!(data.origin.as_deref(), Some("Processing..."));
    assert_eq!(data.destination.as_deref(), Some("Processing..."));
}

#[test]
fn test_messy_spacing_line_breaks_and_case() {
    let inputs = [
        "  American   Airlines    AA123     JFK   to    LAX    Dec  15,  2024   Economy   $450  ",
        "American Airlines\n      AA123\n      JFK to LAX\n      Dec 15, 2024\n      Economy $450",
        "american airlines aa123 jfk to lax dec 15, 2024 economy $450",
    ];
    for input in inputs {
        let data = extract(input);
        assert_eq!(data.airline.as_deref(), Some("American Airlines"), "input: {:?}", input);
        assert_eq!(data.origin.as_deref(), Some("JFK"), "input: {:?}", input);
        assert_eq!(data.destination.as_deref(), Some("LAX"), "input: {:?}", input);
        assert_eq!(data.cash_price, Some(450.0), "input: {:?}", input);
    }
}

#[test]
fn test_place_names_when_no_codes() {
    let data = extract("Flight from Boston to San Francisco on Friday, Economy");
    assert_eq!(data.origin.as_deref(), Some("Boston"));
    assert_eq!(data.destination.as_deref(), Some("San Francisco"));
    assert_eq!(data.cabin_class, Some(CabinClass::Economy));
}

#[test]
fn test_times_and_prose_are_not_carriers_or_routes() {
    let data = extract("JFK to LAX departs 9:05 AM 1 stop $450");
    assert_eq!(data.airline, None, "'AM 1' after a clock time is not Aeromexico");
    assert_eq!(data.origin.as_deref(), Some("JFK"));
    assert_eq!(data.destination.as_deref(), Some("LAX"));
    assert_eq!(data.cash_price, Some(450.0));

    let data = extract("Trip to Siberia $300");
    assert_eq!(data.airline, None, "'Iberia' inside another word");

    let data = extract("Fly to Rio next week");
    assert_ne!(data.origin.as_deref(), Some("FLY"));
    assert_ne!(data.destination.as_deref(), Some("RIO"));
}
