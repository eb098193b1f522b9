// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::resolver::{resolve, BookabilityResult, Relationship};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub emoji: &'static str,
    pub meaning: &'static str,
}

impl Badge {
    pub fn for_relationship(relationship: Relationship) -> Self {
        match relationship {
            Relationship::Direct => Badge {
                emoji: "⭐",
                meaning: "Direct Amex transfer partner",
            },
            Relationship::Alliance => Badge {
                emoji: "🌐",
                meaning: "Bookable via alliance",
            },
            Relationship::Bilateral => Badge {
                emoji: "🔁",
                meaning: "Bookable via bilateral partner",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineBadges {
    pub airline: String,
    pub emojis: Vec<&'static str>,
    pub eligibility_types: Vec<&'static str>,
}

/// One badge per relationship kind present, always in Direct, Alliance, Bilateral order.
pub fn badges_for(airline: &str, result: &BookabilityResult) -> AirlineBadges {
    let mut badges = AirlineBadges {
        airline: airline.to_string(),
        emojis: Vec::new(),
        eligibility_types: Vec::new(),
    };
    if !result.is_bookable {
        return badges;
    }
    for relationship in [
        Relationship::Direct,
        Relationship::Alliance,
        Relationship::Bilateral,
    ] {
        if result.has(relationship) {
            let badge = Badge::for_relationship(relationship);
            badges.emojis.push(badge.emoji);
            badges.eligibility_types.push(badge.meaning);
        }
    }
    badges
}

pub fn airline_badges(airline: &str) -> AirlineBadges {
    badges_for(airline, &resolve(airline))
}

/// `"Emirates ⭐🔁"`, or the bare name when nothing can book it.
pub fn format_with_badges(airline: &str) -> String {
    let badges = airline_badges(airline);
    if badges.emojis.is_empty() {
        airline.to_string()
    } else {
        format!("{} {}", airline, badges.emojis.concat())
    }
}

pub fn legend() -> [Badge; 3] {
    [
        Badge::for_relationship(Relationship::Direct),
        Badge::for_relationship(Relationship::Alliance),
        Badge::for_relationship(Relationship::Bilateral),
    ]
}
