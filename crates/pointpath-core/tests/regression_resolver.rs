// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use pointpath_core::{explain, resolve, Registry, Relationship};

#[test]
fn test_royal_air_maroc_partner_order() {
    let result = resolve("Royal Air Maroc");
    assert!(result.is_bookable);
    assert_eq!(
        result.message,
        "Royal Air Maroc is bookable through 6 Amex transfer partners."
    );

    let got: Vec<(&str, Relationship)> = result
        .partner_programs
        .iter()
        .map(|p| (p.partner_name.as_str(), p.relationship))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Aer Lingus AerClub", Relationship::Alliance),
            ("British Airways Executive Club", Relationship::Alliance),
            ("Cathay Pacific Asia Miles", Relationship::Alliance),
            ("Iberia Plus", Relationship::Alliance),
            ("Qantas Frequent Flyer", Relationship::Alliance),
            ("Etihad Guest", Relationship::Bilateral),
        ]
    );
}

#[test]
fn test_every_indexed_airline_is_sorted_by_priority() {
    let registry = Registry::global();
    for airline in registry.airlines() {
        let result = registry.resolve(airline);
        assert!(result.is_bookable, "{} should be bookable", airline);
        let priorities: Vec<u8> = result
            .partner_programs
            .iter()
            .map(|p| p.relationship.priority())
            .collect();
        assert!(
            priorities.windows(2).all(|w| w[0] <= w[1]),
            "{} partners out of order: {:?}",
            airline,
            priorities
        );
    }
}

#[test]
fn test_home_programs_are_direct() {
    let cases = [
        ("Aer Lingus", "Aer Lingus AerClub"),
        ("Aeromexico", "Aeromexico Club Premier"),
        ("Air Canada", "Air Canada Aeroplan"),
        ("Air France", "Air France–KLM Flying Blue"),
        ("All Nippon Airways", "All Nippon Airways Mileage Club"),
        ("Avianca", "Avianca LifeMiles"),
        ("British Airways", "British Airways Executive Club"),
        ("Cathay Pacific", "Cathay Pacific Asia Miles"),
        ("Emirates", "Emirates Skywards"),
        ("Hawaiian Airlines", "Hawaiian Airlines HawaiianMiles"),
        ("Iberia", "Iberia Plus"),
        ("Qantas", "Qantas Frequent Flyer"),
        ("Singapore Airlines", "Singapore Airlines KrisFlyer"),
        ("Virgin Atlantic", "Virgin Atlantic Flying Club"),
    ];
    for (airline, program) in cases {
        let result = resolve(airline);
        let first = result.preferred().unwrap();
        assert_eq!(first.partner_name, program, "preferred program for {}", airline);
        assert_eq!(first.relationship, Relationship::Direct, "{}", airline);
    }
}

#[test]
fn test_name_mismatch_keeps_alliance_tier() {
    // The owning program's name does not contain the full airline name.
    for (airline, program) in [
        ("Delta Air Lines", "Delta SkyMiles"),
        ("JetBlue Airways", "JetBlue TrueBlue"),
        ("Etihad Airways", "Etihad Guest"),
    ] {
        let result = resolve(airline);
        assert!(!result.has(Relationship::Direct), "{}", airline);
        let own = result
            .partner_programs
            .iter()
            .find(|p| p.partner_name == program)
            .unwrap();
        assert_eq!(own.relationship, Relationship::Alliance, "{}", airline);
    }
}

#[test]
fn test_repeated_calls_agree() {
    for airline in ["Royal Air Maroc", "Unknown Carrier", "", "JetBlue Airways"] {
        let first = resolve(airline);
        let second = resolve(airline);
        assert_eq!(first, second);
        assert_eq!(explain(airline, &first), explain(airline, &second));
    }
}

#[test]
fn test_custom_registry_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partners.json");
    std::fs::write(
        &path,
        r#"[
          {"name": "Cape Air Club", "alliance": "Independent", "transfer_ratio": "1:2",
           "transfer_time": "1-2 days", "bookable_airlines": ["Cape Air"],
           "bilateral_partners": ["JetBlue Airways"]}
        ]"#,
    )
    .unwrap();

    let registry = Registry::load(&path).unwrap();
    let cape = registry.resolve("Cape Air");
    assert_eq!(cape.partner_programs[0].relationship, Relationship::Direct);
    assert_eq!(cape.partner_programs[0].transfer_ratio.to_string(), "1:2");

    let rec = explain("Cape Air", &cape).unwrap();
    assert_eq!(
        rec.how_to_book_steps[1],
        "Wait for transfer to complete (1-2 days)"
    );
    assert!(!registry.resolve("Royal Air Maroc").is_bookable);
}

#[test]
fn test_missing_registry_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Registry::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, pointpath_core::PointPathError::Io(_)));
}
