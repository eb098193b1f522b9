// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod data;

use crate::flight_text::Profile;
use data::{Brand, BRANDS, CARRIER_CODES, FULL_NAMES, OCR_EXTRA_CODES};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One airline detection rule. Rules run in order and the first hit wins.
pub struct AirlineRule {
    pub name: &'static str,
    pub detect: fn(&str) -> Option<String>,
}

const TEXT_RULES: &[AirlineRule] = &[
    AirlineRule {
        name: "full name",
        detect: full_name,
    },
    AirlineRule {
        name: "code + flight number",
        detect: code_with_number,
    },
    AirlineRule {
        name: "brand + flight number",
        detect: brand_with_number,
    },
    AirlineRule {
        name: "bare brand",
        detect: bare_brand,
    },
];

const OCR_RULES: &[AirlineRule] = &[
    AirlineRule {
        name: "full name + designator",
        detect: full_name_with_designator,
    },
    AirlineRule {
        name: "extended code + flight number",
        detect: extended_code_with_number,
    },
    AirlineRule {
        name: "brand + flight number",
        detect: brand_with_number,
    },
    AirlineRule {
        name: "British Airways misread",
        detect: british_airways_misread,
    },
    AirlineRule {
        name: "split BA designator",
        detect: split_ba_designator,
    },
    AirlineRule {
        name: "bare brand",
        detect: bare_brand,
    },
];

pub fn rules_for(profile: Profile) -> &'static [AirlineRule] {
    match profile {
        Profile::Text => TEXT_RULES,
        Profile::Ocr => OCR_RULES,
    }
}

/// Runs the profile's rules in order and returns the first airline found.
pub fn detect_airline(text: &str, profile: Profile) -> Option<String> {
    for rule in rules_for(profile) {
        if let Some(airline) = (rule.detect)(text) {
            log::debug!("[Extract] airline '{}' via rule '{}'", airline, rule.name);
            return Some(airline);
        }
    }
    None
}

fn designator(name: &str, code: &str, number: &str) -> String {
    format!("{} {} {}", name, code.to_uppercase(), number)
}

fn full_name_regexes() -> &'static [(Regex, &'static str)] {
    static FULL_NAME_RES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    FULL_NAME_RES.get_or_init(|| {
        FULL_NAMES
            .iter()
            .map(|(phrase, canonical)| {
                // Leading boundary only: "American Airline" must still match "American Airlines".
                let pattern = regex::escape(phrase).replace(' ', r"\s+");
                (Regex::new(&format!(r"(?i)\b{}", pattern)).unwrap(), *canonical)
            })
            .collect()
    })
}

fn full_name(text: &str) -> Option<String> {
    full_name_regexes()
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, canonical)| canonical.to_string())
}

/// Uppercase `<CODE> <number>` pattern for every known carrier code.
fn designator_regexes() -> &'static HashMap<&'static str, Regex> {
    static DESIGNATOR_RES: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
    DESIGNATOR_RES.get_or_init(|| {
        CARRIER_CODES
            .iter()
            .chain(OCR_EXTRA_CODES.iter())
            .map(|(code, _)| {
                let re = Regex::new(&format!(r"\b{}\s?(\d{{1,4}})\b", regex::escape(code)))
                    .unwrap();
                (*code, re)
            })
            .collect()
    })
}

/// Full name, plus the carrier's own flight designator when it appears anywhere in
/// the text. Screenshots often put "British Airways" and "BA 117" on separate lines.
fn full_name_with_designator(text: &str) -> Option<String> {
    let name = full_name(text)?;
    let Some(code) = data::code_for_name(&name) else {
        return Some(name);
    };
    let Some(re) = designator_regexes().get(code) else {
        return Some(name);
    };
    for caps in re.captures_iter(text) {
        let whole = caps.get(0)?;
        if is_time_fragment(text, whole.start(), whole.end(), code) {
            continue;
        }
        return Some(designator(&name, code, &caps[1]));
    }
    Some(name)
}

fn code_pattern(codes: impl Iterator<Item = &'static str>) -> Regex {
    let alternation = codes.collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"\b({})\s?(\d{{1,4}})\b", alternation)).unwrap()
}

/// `10:20 AM 11:30` and `9:05 AM 1 stop` must not read as Aeromexico flights.
/// A code right after `h:mm` is a meridiem or noise. After a bare 1-12 hour only `AM` is.
fn is_time_fragment(text: &str, start: usize, end: usize, code: &str) -> bool {
    static CLOCK_RE: OnceLock<Regex> = OnceLock::new();
    if text[end..].starts_with(':') {
        return true;
    }
    let re = CLOCK_RE
        .get_or_init(|| Regex::new(r"\b(?:(\d{1,2}:\d{2})|1[0-2]|0?[1-9])\s*$").unwrap());
    match re.captures(&text[..start]) {
        Some(caps) => caps.get(1).is_some() || code.eq_ignore_ascii_case("AM"),
        None => false,
    }
}

fn first_code_match(text: &str, re: &Regex) -> Option<String> {
    for caps in re.captures_iter(text) {
        let whole = caps.get(0)?;
        let code = &caps[1];
        if is_time_fragment(text, whole.start(), whole.end(), code) {
            continue;
        }
        if let Some(name) = data::name_for_code(code) {
            return Some(designator(name, code, &caps[2]));
        }
    }
    None
}

fn code_with_number(text: &str) -> Option<String> {
    static CODE_RE: OnceLock<Regex> = OnceLock::new();
    let re = CODE_RE.get_or_init(|| code_pattern(CARRIER_CODES.iter().map(|(c, _)| *c)));
    first_code_match(text, re)
}

fn extended_code_with_number(text: &str) -> Option<String> {
    static EXT_CODE_RE: OnceLock<Regex> = OnceLock::new();
    let re = EXT_CODE_RE.get_or_init(|| {
        code_pattern(
            CARRIER_CODES
                .iter()
                .chain(OCR_EXTRA_CODES.iter())
                .map(|(c, _)| *c),
        )
    });
    first_code_match(text, re)
}

struct BrandRegexes {
    with_number: Regex,
    bare: Regex,
}

fn brand_regexes() -> &'static [(Brand, BrandRegexes)] {
    static BRAND_RES: OnceLock<Vec<(Brand, BrandRegexes)>> = OnceLock::new();
    BRAND_RES.get_or_init(|| {
        BRANDS
            .iter()
            .map(|b| {
                let word = regex::escape(b.word).replace(' ', r"\s+");
                let res = BrandRegexes {
                    with_number: Regex::new(&format!(r"(?i)\b{}\s?(\d{{1,4}})\b", word)).unwrap(),
                    bare: Regex::new(&format!(r"(?i)\b{}\b", word)).unwrap(),
                };
                (*b, res)
            })
            .collect()
    })
}

fn brand_with_number(text: &str) -> Option<String> {
    for (brand, res) in brand_regexes() {
        for caps in res.with_number.captures_iter(text) {
            let whole = caps.get(0)?;
            if text[whole.end()..].starts_with(':') {
                continue;
            }
            return Some(designator(brand.name, brand.code, &caps[1]));
        }
    }
    None
}

fn next_word(text: &str, end: usize) -> Option<String> {
    text[end..]
        .split_whitespace()
        .next()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
}

fn bare_brand(text: &str) -> Option<String> {
    for (brand, res) in brand_regexes() {
        if !brand.bare {
            continue;
        }
        for m in res.bare.find_iter(text) {
            let disqualified = next_word(text, m.end())
                .map(|w| brand.not_before.contains(&w.as_str()))
                .unwrap_or(false);
            if !disqualified {
                return Some(brand.name.to_string());
            }
        }
    }
    None
}

/// OCR engines confuse `i`, `l`, `1` and `|`, and drop the space between words.
fn british_airways_misread(text: &str) -> Option<String> {
    static BA_MISREAD_RE: OnceLock<Regex> = OnceLock::new();
    let re = BA_MISREAD_RE.get_or_init(|| {
        Regex::new(r"(?i)\bbr[il1|!]t[il1|!]sh\s*a[il1|!]r\s*w[ao]ys\b(?:.*?\bBA\s?(\d{1,4})\b)?")
            .unwrap()
    });
    let caps = re.captures(text)?;
    Some(match caps.get(1) {
        Some(number) => designator("British Airways", "BA", number.as_str()),
        None => "British Airways".to_string(),
    })
}

fn split_ba_designator(text: &str) -> Option<String> {
    static BA_SPLIT_RE: OnceLock<Regex> = OnceLock::new();
    let re = BA_SPLIT_RE.get_or_init(|| Regex::new(r"(?i)\bba\s+(\d{1,4})\b").unwrap());
    let caps = re.captures(text)?;
    Some(designator("British Airways", "BA", &caps[1]))
}
