// src/entity/spell.rs

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::consts::SPELL_PATH_PREFIX;
use crate::core::html::Block;
use crate::core::net::join_url;
use crate::error::ParseError;
use crate::parse::{self, unit_normalize_prose};
use crate::segment::segment_spell;
use super::enums::{CastType, ClassType, Component, RangeType};
use super::row::{self, Row};

/// Listing-table keys for spells.
pub mod keys {
    pub const NAME: &str = "Spell Name";
    pub const SCHOOL: &str = "School";
    pub const CASTING_TIME: &str = "Casting Time";
    pub const RANGE: &str = "Range";
    pub const DURATION: &str = "Duration";
    pub const COMPONENTS: &str = "Components";
    /// Only present in tab-separated spell lists; listings carry the level as
    /// the tab label.
    pub const LEVEL: &str = "Level";
}

/// Column order of a tab-separated spell list line.
pub const TAB_LINE_KEYS: [&str; 7] = [
    keys::NAME,
    keys::SCHOOL,
    keys::CASTING_TIME,
    keys::RANGE,
    keys::DURATION,
    keys::COMPONENTS,
    keys::LEVEL,
];

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.+?\)").expect("PARENTHESIZED: hardcoded regex is valid"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("NON_WORD: hardcoded regex is valid"));

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub description: String,
    /// 0 for cantrips, `-1` when the level cell didn't parse.
    pub level: i8,
    pub school: String,

    pub duration: String,
    pub is_concentration: bool,

    pub cast_type: CastType,
    /// Minutes; 0 unless the casting time is time-based.
    pub cast_time: u32,
    pub is_ritual: bool,

    pub range_type: RangeType,
    pub spell_range: String,

    pub has_upcast: bool,
    pub upcast: String,

    pub components: BTreeSet<Component>,
    pub component_material: String,
    pub classes: Vec<ClassType>,

    pub url: String,
}

impl Spell {
    /// Build from a listing row and, when the detail page was fetched, its
    /// content blocks. Without a detail page the record carries row fields only.
    pub fn build(row: &Row, base_url: &str, detail: Option<&[Block]>) -> Result<Spell, ParseError> {
        let name = parse::parse_name(row.get(keys::NAME).trim());
        let (cast_type, cast_time, is_ritual) = parse::parse_cast_time(row.get(keys::CASTING_TIME));
        let (range_type, spell_range) = parse::parse_spell_range(row.get(keys::RANGE));
        let (duration, is_concentration) = parse::parse_duration(row.get(keys::DURATION));
        let components = parse::parse_components(row.get(keys::COMPONENTS))?;
        let level = parse::parse_level(row.get_any(&[keys::LEVEL, row::CATEGORY]));

        let url = match row.get(row::URL).trim() {
            "" => spell_url(base_url, &name),
            href => join_url(base_url, href),
        };

        let segmented = detail.map(segment_spell).unwrap_or_default();

        let component_material = if components.contains(&Component::Material) {
            segmented.material.unwrap_or_default()
        } else {
            s!()
        };

        let (has_upcast, upcast) = match segmented.upcast {
            Some(text) => (true, text),
            None => (false, s!()),
        };

        Ok(Spell {
            name,
            description: unit_normalize_prose(&segmented.description),
            level,
            school: row.get(keys::SCHOOL).trim().to_lowercase(),
            duration,
            is_concentration,
            cast_type,
            cast_time,
            is_ritual,
            range_type,
            spell_range,
            has_upcast,
            upcast,
            components,
            component_material,
            classes: segmented.classes,
            url,
        })
    }
}

/// Row from one line of a tab-separated spell list. Returns `None` for lines
/// with the wrong number of columns.
pub fn row_from_fields(fields: &[String]) -> Option<Row> {
    if fields.len() != TAB_LINE_KEYS.len() {
        return None;
    }
    Some(TAB_LINE_KEYS.iter().copied().zip(fields.iter().map(|f| f.trim())).collect())
}

/// "Tasha's Hideous Laughter" → "<base>/spell:tashas-hideous-laughter".
pub fn spell_url(base_url: &str, name: &str) -> String {
    let lower = name.replace('\'', "").to_lowercase();
    let slug = PARENTHESIZED.replace_all(&lower, "");
    let slug = NON_WORD.replace_all(&slug, "-");
    join_url(base_url, &join!(SPELL_PATH_PREFIX, &slug))
}
