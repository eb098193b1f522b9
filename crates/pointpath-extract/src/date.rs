// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Departure date detection. The extractor stores the matched text as written;
//! [`normalize_date`] turns any stored shape into a calendar date on demand.

use crate::flight_text::Profile;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";
const WEEKDAY: &str = r"(?:Mon(?:day)?|Tue(?:s(?:day)?)?|Wed(?:nesday)?|Thu(?:r(?:s(?:day)?)?)?|Fri(?:day)?|Sat(?:urday)?|Sun(?:day)?)";

/// A date shape; `group` is the capture holding the text to store.
struct DateShape {
    name: &'static str,
    pattern: String,
    group: usize,
}

fn numeric_slash() -> DateShape {
    DateShape {
        name: "MM/DD/YYYY",
        pattern: r"\b\d{1,2}/\d{1,2}/\d{2,4}\b".to_string(),
        group: 0,
    }
}

fn numeric_dash() -> DateShape {
    DateShape {
        name: "MM-DD-YYYY",
        pattern: r"\b\d{1,2}-\d{1,2}-\d{2,4}\b".to_string(),
        group: 0,
    }
}

fn month_day_year() -> DateShape {
    DateShape {
        name: "Mon DD, YYYY",
        pattern: format!(r"(?i)\b{MONTH}\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"),
        group: 0,
    }
}

fn day_month_year() -> DateShape {
    DateShape {
        name: "DD Mon YYYY",
        pattern: format!(r"(?i)\b\d{{1,2}}\s+{MONTH}\.?,?\s+\d{{4}}\b"),
        group: 0,
    }
}

fn departing_context() -> DateShape {
    DateShape {
        name: "departing flight",
        pattern: format!(
            r"(?is)departing\s+flight.*?\b({WEEKDAY}\.?,?\s+{MONTH}\.?\s+\d{{1,2}})\b"
        ),
        group: 1,
    }
}

fn weekday_date() -> DateShape {
    DateShape {
        name: "weekday date",
        pattern: format!(r"(?i)\b{WEEKDAY}\.?,?\s+{MONTH}\.?\s+\d{{1,2}}\b(?:,?\s+\d{{4}}\b)?"),
        group: 0,
    }
}

fn bare_month_day() -> DateShape {
    DateShape {
        name: "Mon DD",
        pattern: format!(r"(?i)\b{MONTH}\.?\s+\d{{1,2}}\b"),
        group: 0,
    }
}

type CompiledShape = (DateShape, Regex);

fn compile(shapes: Vec<DateShape>) -> Vec<CompiledShape> {
    shapes
        .into_iter()
        .map(|shape| {
            let re = Regex::new(&shape.pattern).unwrap();
            (shape, re)
        })
        .collect()
}

fn shapes_for(profile: Profile) -> &'static [CompiledShape] {
    static TEXT_SHAPES: OnceLock<Vec<CompiledShape>> = OnceLock::new();
    static OCR_SHAPES: OnceLock<Vec<CompiledShape>> = OnceLock::new();
    let shapes = match profile {
        Profile::Text => TEXT_SHAPES.get_or_init(|| {
            compile(vec![
                numeric_slash(),
                numeric_dash(),
                month_day_year(),
                day_month_year(),
            ])
        }),
        Profile::Ocr => OCR_SHAPES.get_or_init(|| {
            compile(vec![
                departing_context(),
                weekday_date(),
                numeric_slash(),
                numeric_dash(),
                month_day_year(),
                day_month_year(),
                bare_month_day(),
            ])
        }),
    };
    shapes.as_slice()
}

/// First date found, trying shapes in preference order. Returns the literal text.
pub fn detect_date(text: &str, profile: Profile) -> Option<String> {
    for (shape, re) in shapes_for(profile) {
        if let Some(found) = re.captures(text).and_then(|caps| caps.get(shape.group)) {
            log::debug!(
                "[Extract] date '{}' via shape '{}'",
                found.as_str(),
                shape.name
            );
            return Some(found.as_str().to_string());
        }
    }
    None
}

fn month_number(name: &str) -> Option<u32> {
    let key = name.get(..3)?.to_ascii_lowercase();
    let n = match key.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}

fn expand_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    Some(if raw.len() == 2 { 2000 + year } else { year })
}

/// Parses any shape [`detect_date`] can store. Shapes without a year use
/// `reference_year`. Impossible dates (Feb 30) give `None`.
pub fn normalize_date(raw: &str, reference_year: i32) -> Option<NaiveDate> {
    static NUMERIC_RE: OnceLock<Regex> = OnceLock::new();
    static MONTH_FIRST_RE: OnceLock<Regex> = OnceLock::new();
    static DAY_FIRST_RE: OnceLock<Regex> = OnceLock::new();
    static YEAR_RE: OnceLock<Regex> = OnceLock::new();

    let raw = raw.trim();
    let numeric = NUMERIC_RE
        .get_or_init(|| Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2}|\d{4})$").unwrap());
    if let Some(caps) = numeric.captures(raw) {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year = expand_year(&caps[3])?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let year = YEAR_RE
        .get_or_init(|| Regex::new(r"\b(\d{4})\b").unwrap())
        .captures(raw)
        .and_then(|caps| caps[1].parse::<i32>().ok())
        .unwrap_or(reference_year);

    let month_first = MONTH_FIRST_RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)\b({MONTH})\.?\s+(\d{{1,2}})\b")).unwrap()
    });
    if let Some(caps) = month_first.captures(raw) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let day_first = DAY_FIRST_RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)\b(\d{{1,2}})\s+({MONTH})\b")).unwrap()
    });
    let caps = day_first.captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Short `MM/DD/YY` rendering, or the raw text when it cannot be parsed.
pub fn format_date(raw: &str, reference_year: i32) -> String {
    match normalize_date(raw, reference_year) {
        Some(date) => date.format("%m/%d/%y").to_string(),
        None => raw.to_string(),
    }
}
