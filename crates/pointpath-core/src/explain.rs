// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Turns a resolution into a booking recommendation a person can follow.

use crate::catalog::iata_code;
use crate::registry::TransferRatio;
use crate::resolver::{BookabilityResult, PartnerMatch, Relationship};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirlineCategory {
    #[serde(rename = "Major US")]
    MajorUs,
    Regional,
    Cargo,
    Charter,
    International,
}

impl fmt::Display for AirlineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AirlineCategory::MajorUs => "Major US",
            AirlineCategory::Regional => "Regional",
            AirlineCategory::Cargo => "Cargo",
            AirlineCategory::Charter => "Charter",
            AirlineCategory::International => "International",
        };
        f.write_str(s)
    }
}

const MAJOR_US: &[&str] = &[
    "American Airlines",
    "Delta Air Lines",
    "United Airlines",
    "Southwest Airlines",
    "JetBlue Airways",
    "Alaska Airlines",
];
const CARGO_MARKERS: &[&str] = &["FedEx", "UPS Airlines", "Atlas Air", "Kalitta Air"];
const CHARTER_MARKERS: &[&str] = &["NetJets", "Flexjet", "VistaJet"];

/// Major US and Regional need the exact name; Cargo and Charter match on a
/// marker anywhere in the name. Everything else is International.
pub fn classify_airline(name: &str) -> AirlineCategory {
    if MAJOR_US.contains(&name) {
        AirlineCategory::MajorUs
    } else if CARGO_MARKERS.iter().any(|m| name.contains(m)) {
        AirlineCategory::Cargo
    } else if CHARTER_MARKERS.iter().any(|m| name.contains(m)) {
        AirlineCategory::Charter
    } else if crate::catalog::REGIONAL_AIRLINES.contains(&name) {
        AirlineCategory::Regional
    } else {
        AirlineCategory::International
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineRecommendation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iata_code: Option<String>,
    pub category: AirlineCategory,
    pub is_direct_partner: bool,
    pub is_alliance_bookable: bool,
    pub is_bilateral_bookable: bool,
    pub bookable_via: Vec<String>,
    pub partner_details: Vec<PartnerMatch>,
    pub preferred_partner: String,
    pub transfer_ratio: TransferRatio,
    pub transfer_time: String,
    pub how_to_book_steps: Vec<String>,
    pub notes: Vec<String>,
    pub recommendation_reasons: Vec<String>,
}

/// `None` when the airline is blank or no program can book it.
pub fn explain(airline: &str, result: &BookabilityResult) -> Option<AirlineRecommendation> {
    let airline = airline.trim();
    if airline.is_empty() || !result.is_bookable {
        return None;
    }
    let preferred = result.preferred()?;

    Some(AirlineRecommendation {
        name: airline.to_string(),
        iata_code: iata_code(airline).map(str::to_string),
        category: classify_airline(airline),
        is_direct_partner: preferred.relationship == Relationship::Direct,
        is_alliance_bookable: result.has(Relationship::Alliance),
        is_bilateral_bookable: result.has(Relationship::Bilateral),
        bookable_via: result
            .partner_programs
            .iter()
            .map(|p| p.partner_name.clone())
            .collect(),
        partner_details: result.partner_programs.clone(),
        preferred_partner: preferred.partner_name.clone(),
        transfer_ratio: preferred.transfer_ratio,
        transfer_time: preferred.transfer_time.clone(),
        how_to_book_steps: booking_steps(airline, preferred),
        notes: notes_for(preferred),
        recommendation_reasons: reasons_for(airline, preferred),
    })
}

fn booking_steps(airline: &str, preferred: &PartnerMatch) -> Vec<String> {
    let partner = &preferred.partner_name;
    let mut steps = vec![
        format!(
            "Transfer Amex points to {} at {} ratio",
            partner, preferred.transfer_ratio
        ),
        format!(
            "Wait for transfer to complete ({})",
            preferred.transfer_time
        ),
        format!("Log into your {} account", partner),
    ];
    match preferred.relationship {
        Relationship::Direct => {
            steps.push(format!(
                "Search for {} flights on the {} website",
                airline, partner
            ));
            steps.push("Book using points and pay any taxes/fees with cash".to_string());
        }
        Relationship::Alliance => {
            steps.push(format!(
                "Search for {} flights (alliance partner) on the {} website",
                airline, partner
            ));
            steps.push("Book the award ticket using points".to_string());
            steps.push("Pay taxes and fees with cash (may be higher for partner awards)".to_string());
        }
        Relationship::Bilateral => {
            steps.push(format!(
                "Search for {} flights on the {} website",
                airline, partner
            ));
            steps.push("Look for partner award availability (may be limited)".to_string());
            steps.push("Book using points and pay taxes/fees with cash".to_string());
        }
    }
    steps
}

fn notes_for(preferred: &PartnerMatch) -> Vec<String> {
    let partner = preferred.partner_name.as_str();
    let mut notes: Vec<&str> = Vec::new();

    match preferred.relationship {
        Relationship::Alliance => {
            notes.push("Alliance partner bookings may have limited award availability");
            notes.push("Expect higher taxes and fees compared to direct partner bookings");
        }
        Relationship::Bilateral => {
            notes.push("Bilateral partnership may have restricted routes and availability");
        }
        Relationship::Direct => {}
    }
    if partner.contains("British Airways") {
        notes.push("British Airways uses distance-based pricing - excellent for short flights");
        notes.push("Low taxes and fees on domestic US flights");
    }
    if partner.contains("Air France") || partner.contains("KLM") {
        notes.push("Flying Blue has dynamic pricing - book early for better rates");
    }
    if partner.contains("Singapore Airlines") {
        notes.push("KrisFlyer has excellent premium cabin availability");
    }
    if notes.is_empty() {
        notes.push("Book well in advance for better award availability");
    }
    notes.into_iter().map(str::to_string).collect()
}

/// Comparative advice for one airline when booked through a given program.
struct AirlineReason {
    airline: &'static str,
    partner: &'static str,
    reasons: &'static [&'static str],
}

const AIRLINE_REASONS: &[AirlineReason] = &[
    AirlineReason {
        airline: "Royal Air Maroc",
        partner: "Aer Lingus",
        reasons: &[
            "Aer Lingus AerClub usually prices Royal Air Maroc awards below British Airways Executive Club for the same flight",
            "Aer Lingus AerClub adds lower carrier surcharges than British Airways on Royal Air Maroc tickets",
            "Avios move freely between Aer Lingus, British Airways and Iberia accounts if you need to switch programs later",
        ],
    },
    AirlineReason {
        airline: "American Airlines",
        partner: "Aer Lingus",
        reasons: &[
            "Aer Lingus AerClub charges off-peak Avios rates on American Airlines flights that British Airways does not offer",
            "Short American Airlines hops price well on the Avios distance chart",
        ],
    },
    AirlineReason {
        airline: "Delta Air Lines",
        partner: "Aeromexico",
        reasons: &[
            "Aeromexico Club Premier often prices Delta flights within North America below Delta's own dynamic rates",
            "Check Air France–KLM Flying Blue and Virgin Atlantic Flying Club too, since Delta award prices move daily",
        ],
    },
    AirlineReason {
        airline: "JetBlue Airways",
        partner: "JetBlue TrueBlue",
        reasons: &[
            "JetBlue TrueBlue is the only transfer program that books JetBlue itself",
            "The 1:1.6 transfer ratio makes TrueBlue points cheaper than most partner miles",
        ],
    },
];

/// Advice tied to the preferred program regardless of airline.
const PARTNER_REASONS: &[(&str, &str)] = &[
    (
        "British Airways",
        "British Airways Executive Club uses a distance-based chart, which is strong value on short nonstop flights",
    ),
    (
        "Air France",
        "Flying Blue publishes monthly Promo Rewards with discounted award prices",
    ),
    (
        "Singapore Airlines",
        "KrisFlyer releases more premium cabin award seats to its own members than to partner programs",
    ),
    (
        "Avianca LifeMiles",
        "LifeMiles does not add fuel surcharges to partner awards",
    ),
    (
        "Virgin Atlantic",
        "Virgin Atlantic Flying Club often charges fewer points than other programs for its own and partner flights",
    ),
    (
        "Delta",
        "Delta SkyMiles awards have no blackout dates",
    ),
];

fn reasons_for(airline: &str, preferred: &PartnerMatch) -> Vec<String> {
    let partner = preferred.partner_name.as_str();
    let mut reasons: Vec<String> = AIRLINE_REASONS
        .iter()
        .filter(|r| r.airline == airline && partner.contains(r.partner))
        .flat_map(|r| r.reasons.iter().map(|s| s.to_string()))
        .collect();
    reasons.extend(
        PARTNER_REASONS
            .iter()
            .filter(|(key, _)| partner.contains(key))
            .map(|(_, reason)| reason.to_string()),
    );

    if reasons.is_empty() {
        reasons.push(match preferred.relationship {
            Relationship::Direct => format!(
                "Booking through the airline's own program ({}) is usually the best value and has the widest award availability",
                partner
            ),
            _ => format!(
                "{} generally offers better pricing than the alternatives for {} flights",
                partner, airline
            ),
        });
    }
    reasons
}
