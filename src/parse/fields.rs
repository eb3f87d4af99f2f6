// src/parse/fields.rs
//! Table-cell parsers for spell fields.
//!
//! Each function maps one raw cell to one typed value. Nothing here keeps
//! state or touches I/O. A cell that doesn't match a known pattern degrades to
//! the field's `Unknown`/sentinel value and leaves a `warn` diagnostic; only
//! [`parse_components`] reports an error.

use std::collections::BTreeSet;

use crate::entity::enums::{CastType, Component, RangeType};
use crate::error::ParseError;
use super::units::unit_normalize;

/// Marker appended to the casting time of ritual spells.
const RITUAL_MARKER: &str = "R";

/// Sentinel level for cells that don't parse.
pub const LEVEL_UNPARSED: i8 = -1;

const LEVELS: &[(&str, i8)] = &[
    ("cantrip", 0),
    ("1st level", 1),
    ("2nd level", 2),
    ("3rd level", 3),
    ("4th level", 4),
    ("5th level", 5),
    ("6th level", 6),
    ("7th level", 7),
    ("8th level", 8),
    ("9th level", 9),
];

/// "Fireball (HB)" → "Fireball". A trailing token must start with `(` and be
/// at least two characters to be dropped.
pub fn parse_name(raw: &str) -> String {
    if let Some(split) = raw.rfind(' ') {
        let last = &raw[split + 1..];
        if last.len() >= 2 && last.starts_with('(') {
            return raw[..split].trim().to_string();
        }
    }
    raw.to_string()
}

/// Casting time cell → (type, minutes, ritual).
///
/// ```
/// use dnd_scrape::entity::enums::CastType;
/// use dnd_scrape::parse::parse_cast_time;
///
/// assert_eq!(parse_cast_time("1 Action R"), (CastType::Action, 0, true));
/// assert_eq!(parse_cast_time("1 Hour"), (CastType::Time, 60, false));
/// ```
pub fn parse_cast_time(raw: &str) -> (CastType, u32, bool) {
    let mut text = raw.trim();
    let mut is_ritual = false;
    if let Some(split) = text.rfind(' ') {
        if &text[split + 1..] == RITUAL_MARKER {
            is_ritual = true;
            text = &text[..split];
        }
    }

    let lower = text.trim().to_lowercase();
    let mut tokens: Vec<&str> = lower.split_whitespace().collect();
    if tokens.is_empty() {
        log::warn!("empty cast time");
        return (CastType::Unknown, 0, is_ritual);
    }
    // "Reaction" alone means one reaction
    if tokens.len() < 2 {
        tokens.insert(0, "1");
    }

    let (cast_type, mut minutes) = match tokens[1] {
        "action" => (CastType::Action, 0),
        "bonus" => (CastType::Bonus, 0),
        "reaction" => (CastType::Reaction, 0),
        unit if unit.contains("hour") || unit.contains("minute") => {
            match minutes_of(tokens[0], unit) {
                Some(m) => (CastType::Time, m),
                None => {
                    log::warn!("could not parse cast time magnitude: {raw:?}");
                    (CastType::Unknown, 0)
                }
            }
        }
        other => {
            log::warn!("could not parse cast time: {other:?} in {raw:?}");
            (CastType::Unknown, 0)
        }
    };

    // "1 action or 10 minutes"
    if tokens.len() > 2 && tokens[2] == "or" {
        match (tokens.get(3), tokens.get(4)) {
            (Some(n), Some(unit)) => match minutes_of(n, unit) {
                Some(m) => minutes = m,
                None => log::warn!("could not parse alternate cast time: {raw:?}"),
            },
            _ => log::warn!("incomplete alternate cast time: {raw:?}"),
        }
    }

    (cast_type, minutes, is_ritual)
}

/// Magnitude in minutes; anything that isn't hours counts as minutes.
fn minutes_of(magnitude: &str, unit: &str) -> Option<u32> {
    let n: u32 = magnitude.parse().ok()?;
    if unit.contains("hour") { n.checked_mul(60) } else { Some(n) }
}

/// Range cell → (type, range text). Distances come back unit-normalized.
pub fn parse_spell_range(raw: &str) -> (RangeType, String) {
    let text = raw.trim().to_lowercase();
    let range_type = match text.as_str() {
        "touch" => RangeType::Touch,
        "sight" => RangeType::Sight,
        "special" => RangeType::Special,
        "unlimited" => RangeType::Unlimited,
        t if t.contains("self") => RangeType::Caster,
        _ => RangeType::Units,
    };

    let mut range = s!("0");
    match range_type {
        RangeType::Caster => {
            // "self (30-foot cone)"
            if let Some(split) = text.find(' ') {
                let area = text[split + 1..].trim().trim_matches(|c| c == '(' || c == ')');
                range = unit_normalize(area);
            }
        }
        RangeType::Units => {
            let normalized = unit_normalize(&text);
            if !normalized.is_empty() {
                range = normalized;
            }
        }
        _ => {}
    }
    (range_type, range)
}

/// Duration cell → (duration, concentration). The leading "Concentration,"
/// token is dropped from the returned text.
pub fn parse_duration(raw: &str) -> (String, bool) {
    let duration = raw.trim().to_lowercase().replace('"', "");
    let duration = duration.trim();
    if duration.contains("concentration") {
        let rest = match duration.find(' ') {
            Some(split) => duration[split + 1..].trim(),
            None => duration,
        };
        return (s!(rest), true);
    }
    (s!(duration), false)
}

/// Components cell ("V, S, M") → set of components.
pub fn parse_components(raw: &str) -> Result<BTreeSet<Component>, ParseError> {
    let cleaned: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '"')
        .collect();

    cleaned
        .split(',')
        .map(|token| match token {
            "v" => Ok(Component::Verbal),
            "s" => Ok(Component::Somatic),
            "m" => Ok(Component::Material),
            other => Err(ParseError::UnknownComponent(s!(other))),
        })
        .collect()
}

/// Level cell ("Cantrip", "3rd Level", or a bare digit) → 0..=9, or
/// [`LEVEL_UNPARSED`].
pub fn parse_level(raw: &str) -> i8 {
    let level = raw.trim().to_lowercase();
    if let Some((_, n)) = LEVELS.iter().find(|(name, _)| *name == level) {
        return *n;
    }
    match level.parse::<i8>() {
        Ok(n) if (0..=9).contains(&n) => n,
        _ => {
            log::warn!("could not parse spell level: {raw:?}");
            LEVEL_UNPARSED
        }
    }
}
