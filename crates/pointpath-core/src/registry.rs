// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! The table of point-transfer programs and the airline index built from it.

use crate::resolver::Relationship;
use crate::PointPathError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alliance {
    Oneworld,
    SkyTeam,
    #[serde(rename = "Star Alliance")]
    StarAlliance,
    Independent,
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Alliance::Oneworld => "Oneworld",
            Alliance::SkyTeam => "SkyTeam",
            Alliance::StarAlliance => "Star Alliance",
            Alliance::Independent => "Independent",
        };
        f.write_str(s)
    }
}

/// Card points to program miles, written `points:miles` (`1:1`, `1:1.6`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransferRatio {
    pub points: u32,
    pub miles: f64,
}

impl TransferRatio {
    pub fn new(points: u32, miles: f64) -> Self {
        Self { points, miles }
    }

    /// Miles received for `points` card points.
    pub fn miles_for(&self, points: u64) -> f64 {
        points as f64 * self.miles / self.points as f64
    }
}

impl FromStr for TransferRatio {
    type Err = PointPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PointPathError::InvalidRatio(s.to_string());
        let (points, miles) = s.trim().split_once(':').ok_or_else(invalid)?;
        let points: u32 = points.trim().parse().map_err(|_| invalid())?;
        let miles: f64 = miles.trim().parse().map_err(|_| invalid())?;
        if points == 0 || !miles.is_finite() || miles <= 0.0 {
            return Err(invalid());
        }
        Ok(Self { points, miles })
    }
}

impl fmt::Display for TransferRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.points, self.miles)
    }
}

impl TryFrom<String> for TransferRatio {
    type Error = PointPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransferRatio> for String {
    fn from(ratio: TransferRatio) -> Self {
        ratio.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerProgram {
    pub name: String,
    pub alliance: Alliance,
    pub transfer_ratio: TransferRatio,
    pub transfer_time: String,
    pub bookable_airlines: Vec<String>,
    #[serde(default)]
    pub bilateral_partners: Vec<String>,
}

impl PartnerProgram {
    /// A program books its own airline directly. The program name has to start
    /// with the airline's first word or first two words, or contain the whole name.
    pub fn is_home_airline(&self, airline: &str) -> bool {
        let mut words = self.name.split(' ');
        let first = words.next().unwrap_or_default();
        let first_two = words.next().map(|second| format!("{} {}", first, second));
        airline == first || first_two.as_deref() == Some(airline) || self.name.contains(airline)
    }

    fn relationship_for(&self, airline: &str) -> Relationship {
        if self.is_home_airline(airline) {
            Relationship::Direct
        } else {
            Relationship::Alliance
        }
    }
}

const BUILTIN_PARTNERS: &str = include_str!("partners.json");

/// Programs in table order plus an airline index. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Registry {
    programs: Vec<PartnerProgram>,
    index: HashMap<String, Vec<(usize, Relationship)>>,
}

impl Registry {
    pub fn from_programs(programs: Vec<PartnerProgram>) -> Result<Self, PointPathError> {
        validate(&programs)?;

        let mut index: HashMap<String, Vec<(usize, Relationship)>> = HashMap::new();
        for (i, program) in programs.iter().enumerate() {
            for airline in &program.bookable_airlines {
                index
                    .entry(airline.clone())
                    .or_default()
                    .push((i, program.relationship_for(airline)));
            }
            for airline in &program.bilateral_partners {
                index
                    .entry(airline.clone())
                    .or_default()
                    .push((i, Relationship::Bilateral));
            }
        }

        log::debug!(
            "[Registry] Indexed {} airlines across {} programs",
            index.len(),
            programs.len()
        );
        Ok(Self { programs, index })
    }

    pub fn from_json(json: &str) -> Result<Self, PointPathError> {
        let programs: Vec<PartnerProgram> = serde_json::from_str(json)?;
        Self::from_programs(programs)
    }

    /// Loads an alternate partner table with the same layout as the built-in one.
    pub fn load(path: &Path) -> Result<Self, PointPathError> {
        log::debug!("[Registry] Loading partner table from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn builtin() -> Result<Self, PointPathError> {
        Self::from_json(BUILTIN_PARTNERS)
    }

    /// Process-wide registry built from the embedded table on first use.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Registry::builtin().expect("Failed to parse partners.json"))
    }

    pub fn programs(&self) -> &[PartnerProgram] {
        &self.programs
    }

    pub fn program(&self, name: &str) -> Option<&PartnerProgram> {
        self.programs.iter().find(|p| p.name == name)
    }

    /// Index entries for an exact airline name, in table order.
    pub fn relationships(&self, airline: &str) -> &[(usize, Relationship)] {
        self.index.get(airline).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_airline(&self, airline: &str) -> bool {
        self.index.contains_key(airline)
    }

    /// Every airline at least one program can book, sorted by name.
    pub fn airlines(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.index.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn validate(programs: &[PartnerProgram]) -> Result<(), PointPathError> {
    if programs.is_empty() {
        return Err(PointPathError::InvalidRegistry(
            "no partner programs".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for program in programs {
        let name = program.name.trim();
        if name.is_empty() {
            return Err(PointPathError::InvalidRegistry(
                "program with an empty name".to_string(),
            ));
        }
        if !seen.insert(name) {
            return Err(PointPathError::InvalidRegistry(format!(
                "duplicate program '{}'",
                name
            )));
        }
        if program.transfer_time.trim().is_empty() {
            return Err(PointPathError::InvalidRegistry(format!(
                "'{}' has no transfer time",
                name
            )));
        }
        if program.bookable_airlines.is_empty() {
            return Err(PointPathError::InvalidRegistry(format!(
                "'{}' books no airlines",
                name
            )));
        }
        let blank = program
            .bookable_airlines
            .iter()
            .chain(program.bilateral_partners.iter())
            .any(|a| a.trim().is_empty());
        if blank {
            return Err(PointPathError::InvalidRegistry(format!(
                "'{}' lists a blank airline",
                name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_parse_and_display() {
        let one: TransferRatio = "1:1".parse().unwrap();
        assert_eq!(one, TransferRatio::new(1, 1.0));
        assert_eq!(one.to_string(), "1:1");

        let jetblue: TransferRatio = "1:1.6".parse().unwrap();
        assert_eq!(jetblue.to_string(), "1:1.6");
        assert!((jetblue.miles_for(10_000) - 16_000.0).abs() < 1e-9);

        let bulk: TransferRatio = "250:200".parse().unwrap();
        assert_eq!(bulk.to_string(), "250:200");
    }

    #[test]
    fn test_ratio_rejects_garbage() {
        for bad in ["", "1", "1:", ":1", "0:1", "1:0", "1:-2", "a:b", "1:1:1", "1:NaN"] {
            assert!(
                bad.parse::<TransferRatio>().is_err(),
                "'{}' should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_builtin_table_loads_in_order() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.programs().len(), 17);
        assert_eq!(registry.programs()[0].name, "Aer Lingus AerClub");
        assert_eq!(
            registry.programs()[16].name,
            "Virgin Atlantic Flying Club"
        );
        let jetblue = registry.program("JetBlue TrueBlue").unwrap();
        assert_eq!(jetblue.transfer_ratio.to_string(), "1:1.6");
        assert_eq!(jetblue.alliance, Alliance::Independent);
        assert_eq!(
            registry.program("Air Canada Aeroplan").unwrap().alliance,
            Alliance::StarAlliance
        );
    }

    #[test]
    fn test_home_airline_heuristic() {
        let registry = Registry::builtin().unwrap();
        let ba = registry.program("British Airways Executive Club").unwrap();
        assert!(ba.is_home_airline("British Airways"), "first two words");
        let emirates = registry.program("Emirates Skywards").unwrap();
        assert!(emirates.is_home_airline("Emirates"), "first word");
        let flying_blue = registry.program("Air France–KLM Flying Blue").unwrap();
        assert!(flying_blue.is_home_airline("Air France"), "substring");
        assert!(!flying_blue.is_home_airline("KLM Royal Dutch Airlines"));
        let delta = registry.program("Delta SkyMiles").unwrap();
        assert!(!delta.is_home_airline("Delta Air Lines"));
    }

    #[test]
    fn test_index_relationships() {
        let registry = Registry::builtin().unwrap();
        let skywards = registry
            .programs()
            .iter()
            .position(|p| p.name == "Emirates Skywards")
            .unwrap();
        let emirates = registry.relationships("Emirates");
        assert_eq!(emirates.len(), 3);
        assert_eq!(emirates[0], (skywards, Relationship::Direct));
        assert!(emirates[1..]
            .iter()
            .all(|(_, rel)| *rel == Relationship::Bilateral));
        assert!(registry.relationships("emirates").is_empty(), "lookup is case-sensitive");
        assert!(registry.contains_airline("WestJet"));
        assert_eq!(registry.airlines().len(), 70);
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            Registry::from_json("[]"),
            Err(PointPathError::InvalidRegistry(_))
        ));
        let dup = r#"[
            {"name": "A Club", "alliance": "Oneworld", "transfer_ratio": "1:1",
             "transfer_time": "Instant", "bookable_airlines": ["A"]},
            {"name": "A Club", "alliance": "Oneworld", "transfer_ratio": "1:1",
             "transfer_time": "Instant", "bookable_airlines": ["B"]}
        ]"#;
        assert!(matches!(
            Registry::from_json(dup),
            Err(PointPathError::InvalidRegistry(msg)) if msg.contains("duplicate")
        ));
        let bad_ratio = r#"[{"name": "A Club", "alliance": "Oneworld", "transfer_ratio": "one",
             "transfer_time": "Instant", "bookable_airlines": ["A"]}]"#;
        assert!(matches!(
            Registry::from_json(bad_ratio),
            Err(PointPathError::Json(_))
        ));
    }
}
