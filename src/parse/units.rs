// src/parse/units.rs
//! Distance phrases → generic units (1 foot = 1 unit, 1 mile = 5280 units).

use std::sync::LazyLock;

use regex::Regex;

pub const UNIT: &str = "unit";
pub const FEET_PER_MILE: u64 = 5280;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("INTEGER: hardcoded regex is valid"));

/// Replace feet/foot with the generic unit token. Any mention of miles collapses
/// the whole text to `"<n * 5280> unit"` using the first integer found.
pub fn unit_normalize(text: &str) -> String {
    let out = text.replace("feet", UNIT).replace("foot", UNIT);
    if !out.contains("mile") {
        return out;
    }

    let miles = INTEGER.find(&out).and_then(|m| m.as_str().parse::<u64>().ok());
    match miles {
        Some(n) => format!("{} {UNIT}", n.saturating_mul(FEET_PER_MILE)),
        None => {
            log::warn!("can't find number for distance: {text:?}");
            out
        }
    }
}

/// Feet/foot replacement only. Running prose keeps its mile figures; the
/// collapse in [`unit_normalize`] is meant for single distance cells.
pub fn unit_normalize_prose(text: &str) -> String {
    text.replace("feet", UNIT).replace("foot", UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_and_foot_become_units() {
        assert_eq!(unit_normalize("150 feet"), "150 unit");
        assert_eq!(unit_normalize("30-foot cone"), "30-unit cone");
        assert_eq!(unit_normalize("a 20-foot radius, 40 feet away"), "a 20-unit radius, 40 unit away");
    }

    #[test]
    fn miles_collapse_to_units() {
        assert_eq!(unit_normalize("1 mile"), "5280 unit");
        assert_eq!(unit_normalize("500 miles"), "2640000 unit");
    }

    #[test]
    fn mile_without_number_is_left_alone() {
        assert_eq!(unit_normalize("a mile or so"), "a mile or so");
    }

    #[test]
    fn prose_keeps_miles() {
        assert_eq!(
            unit_normalize_prose("a 20-foot cube within 1 mile, 5 feet high"),
            "a 20-unit cube within 1 mile, 5 unit high"
        );
    }

    #[test]
    fn plain_words_unchanged() {
        assert_eq!(unit_normalize("unlimited"), "unlimited");
        assert_eq!(unit_normalize(""), "");
    }
}
