// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::registry::{Registry, TransferRatio};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a transfer program can book an airline. Variant order is booking preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relationship {
    Direct,
    Alliance,
    Bilateral,
}

impl Relationship {
    /// Lower sorts first.
    pub fn priority(&self) -> u8 {
        match self {
            Relationship::Direct => 0,
            Relationship::Alliance => 1,
            Relationship::Bilateral => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Direct => "Direct",
            Relationship::Alliance => "Alliance",
            Relationship::Bilateral => "Bilateral",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerMatch {
    pub partner_name: String,
    pub relationship: Relationship,
    pub transfer_ratio: TransferRatio,
    pub transfer_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookabilityResult {
    pub is_bookable: bool,
    pub partner_programs: Vec<PartnerMatch>,
    pub message: String,
}

impl BookabilityResult {
    fn not_bookable(message: &str) -> Self {
        Self {
            is_bookable: false,
            partner_programs: Vec::new(),
            message: message.to_string(),
        }
    }

    /// The highest-priority program, if any.
    pub fn preferred(&self) -> Option<&PartnerMatch> {
        self.partner_programs.first()
    }

    pub fn has(&self, relationship: Relationship) -> bool {
        self.partner_programs
            .iter()
            .any(|p| p.relationship == relationship)
    }
}

impl Registry {
    /// Which programs can book `airline`. The name is trimmed and then matched
    /// exactly, so "british airways" is not bookable.
    pub fn resolve(&self, airline: &str) -> BookabilityResult {
        let airline = airline.trim();
        if airline.is_empty() {
            return BookabilityResult::not_bookable("No airline specified");
        }

        let entries = self.relationships(airline);
        if entries.is_empty() {
            log::debug!("[Registry] No programs book '{}'", airline);
            return BookabilityResult::not_bookable("No point path available.");
        }

        let mut partner_programs: Vec<PartnerMatch> = entries
            .iter()
            .map(|&(i, relationship)| {
                let program = &self.programs()[i];
                PartnerMatch {
                    partner_name: program.name.clone(),
                    relationship,
                    transfer_ratio: program.transfer_ratio,
                    transfer_time: program.transfer_time.clone(),
                }
            })
            .collect();
        // Stable: ties keep table order.
        partner_programs.sort_by_key(|p| p.relationship.priority());

        let n = partner_programs.len();
        let message = format!(
            "{} is bookable through {} Amex transfer partner{}.",
            airline,
            n,
            if n > 1 { "s" } else { "" }
        );
        log::debug!("[Registry] {}", message);
        BookabilityResult {
            is_bookable: true,
            partner_programs,
            message,
        }
    }
}

/// Resolves against the built-in partner table.
pub fn resolve(airline: &str) -> BookabilityResult {
    Registry::global().resolve(airline)
}
