// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airlines::data::{AIRLINE_TOKENS, AIR_FOLLOWERS};
use regex::Regex;
use std::sync::OnceLock;

/// Uppercase three-letter words that are never airport codes in itinerary text.
pub const STOPLIST: &[&str] = &[
    "THE", "AND", "FOR", "VIA", "NON", "ALL", "ANY", "ARE", "NOT", "YOU", "OUR", "ONE", "TWO",
    "FEE", "TAX", "USD", "EUR", "GBP", "CAD", "AUD", "MXN", "JPY", "HRS", "MIN", "EST", "EDT",
    "PST", "PDT", "CST", "CDT", "MST", "MDT", "GMT", "UTC", "JAN", "FEB", "MAR", "APR", "MAY",
    "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC", "MON", "TUE", "WED", "THU", "FRI", "SAT",
    "SUN",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// Uppercase three-letter tokens in text order, minus stopwords and airline-name fragments.
pub fn airport_candidates(text: &str) -> Vec<&str> {
    static AIRPORT_RE: OnceLock<Regex> = OnceLock::new();
    let re = AIRPORT_RE.get_or_init(|| Regex::new(r"\b[A-Z]{3}\b").unwrap());

    re.find_iter(text)
        .filter(|m| {
            let token = m.as_str();
            if STOPLIST.contains(&token) || AIRLINE_TOKENS.contains(&token) {
                return false;
            }
            if token == "AIR" {
                let next = text[m.end()..]
                    .split_whitespace()
                    .next()
                    .map(|w| w.to_uppercase());
                if let Some(next) = next {
                    if AIR_FOLLOWERS.contains(&next.as_str()) {
                        return false;
                    }
                }
            }
            true
        })
        .map(|m| m.as_str())
        .collect()
}

/// Origin and destination from the first two airport codes, falling back to
/// `<code> to <code>` and then to `<place> to <place>`.
pub fn detect_route(text: &str) -> Route {
    let candidates = airport_candidates(text);
    if candidates.len() >= 2 {
        log::debug!(
            "[Extract] route from airport codes {} -> {} ({} candidates)",
            candidates[0],
            candidates[1],
            candidates.len()
        );
        return Route {
            origin: Some(candidates[0].to_string()),
            destination: Some(candidates[1].to_string()),
        };
    }

    if let Some(route) = code_pair(text).or_else(|| place_pair(text)) {
        log::debug!("[Extract] route from fallback shape: {:?}", route);
        return route;
    }
    Route::default()
}

fn code_pair(text: &str) -> Option<Route> {
    static CODE_PAIR_RE: OnceLock<Regex> = OnceLock::new();
    let re = CODE_PAIR_RE.get_or_init(|| {
        Regex::new(r"(?i)\b([a-z]{3})(?:\s+to\s+|\s*[→\-–]\s*)([a-z]{3})\b").unwrap()
    });

    // Lowercase codes only count in an all-lowercase paste, so "Fly to Rio" stays prose.
    let lowercase_paste = !text.chars().any(char::is_uppercase);
    re.captures_iter(text).find_map(|caps| {
        let written_as_codes = [&caps[1], &caps[2]]
            .iter()
            .all(|c| c.chars().all(|ch| ch.is_ascii_uppercase()));
        if !lowercase_paste && !written_as_codes {
            return None;
        }
        let origin = caps[1].to_uppercase();
        let destination = caps[2].to_uppercase();
        let is_code = |c: &str| !STOPLIST.contains(&c) && !AIRLINE_TOKENS.contains(&c);
        if is_code(&origin) && is_code(&destination) {
            Some(Route {
                origin: Some(origin),
                destination: Some(destination),
            })
        } else {
            None
        }
    })
}

const TRAILING_CLAUSES: &[&str] = &[" on ", " in ", " for ", " via ", " at "];

fn place_pair(text: &str) -> Option<Route> {
    static PLACE_PAIR_RE: OnceLock<Regex> = OnceLock::new();
    let re = PLACE_PAIR_RE.get_or_init(|| {
        Regex::new(r"(?i)([a-z][a-z .']*?)(?:\s+to\s+|\s*→\s*)([a-z][a-z .']*)").unwrap()
    });

    let caps = re.captures(text)?;
    let origin = strip_from_prefix(caps[1].trim());
    let destination = strip_trailing_clause(caps[2].trim());
    if origin.is_empty() || destination.is_empty() {
        return None;
    }
    Some(Route {
        origin: Some(origin.to_string()),
        destination: Some(destination.to_string()),
    })
}

/// "Flight from New York" becomes "New York".
fn strip_from_prefix(s: &str) -> &str {
    let lower = s.to_ascii_lowercase();
    let start = if lower.starts_with("from ") {
        Some(5)
    } else {
        lower.rfind(" from ").map(|i| i + 6)
    };
    match start {
        Some(i) => s[i..].trim(),
        None => s,
    }
}

/// "Los Angeles on Friday" becomes "Los Angeles".
fn strip_trailing_clause(s: &str) -> &str {
    let lower = s.to_ascii_lowercase();
    let cut = TRAILING_CLAUSES
        .iter()
        .filter_map(|clause| lower.find(clause))
        .min();
    match cut {
        Some(i) => s[..i].trim(),
        None => s,
    }
}
