// src/entity/magic_item.rs

use serde::{Deserialize, Serialize};

use crate::core::net::join_url;
use super::enums::{lookup_or, ItemType, Rarity, Source};
use super::row::{self, Row};

pub mod keys {
    pub const NAME: &str = "Item Name";
    pub const TYPE: &str = "Type";
    pub const ATTUNED: &str = "Attuned";
    pub const SOURCE: &str = "Source";
    /// Pre-rendered item text; when present the detail page isn't fetched.
    pub const TEXT: &str = "text";
}

/// Type cell value that marks attunement instead of an item type.
const ATTUNED_TYPE: &str = "Attuned";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicItem {
    pub name: String,
    pub rarity: Rarity,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub source: Source,
    pub attuned: bool,
    /// Markdown.
    pub text: String,
    pub url: String,
}

impl MagicItem {
    /// Rarity comes from the listing tab the row sat under.
    pub fn build(row: &Row, base_url: &str, text: String) -> MagicItem {
        let type_cell = row.get(keys::TYPE).trim();

        MagicItem {
            name: s!(row.get(keys::NAME).trim()),
            rarity: parse_rarity(row.get(row::CATEGORY)),
            item_type: parse_item_type(type_cell),
            source: parse_source(row.get(keys::SOURCE)),
            attuned: type_cell == ATTUNED_TYPE || is_truthy(row.get(keys::ATTUNED)),
            text,
            url: join_url(base_url, row.get(row::URL)),
        }
    }
}

/// "Very Rare" → VeryRare; "???" → Unknown.
pub fn parse_rarity(raw: &str) -> Rarity {
    let key: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if key.is_empty() || key.chars().all(|c| c == '?') {
        return Rarity::Unknown;
    }
    lookup_or(Rarity::lookup, &key, Rarity::Unknown, "rarity")
}

/// "Wondrous Item" → Wondrous; "Weapon (any sword)" → Weapon.
pub fn parse_item_type(raw: &str) -> ItemType {
    let key = raw.replace(" Item", "");
    let key = key.split(" (").next().unwrap_or("").trim();
    lookup_or(ItemType::lookup, key, ItemType::Unknown, "item type")
}

/// "DMG:" → DMG.
pub fn parse_source(raw: &str) -> Source {
    let key = raw.replace(':', "");
    lookup_or(Source::lookup, key.trim(), Source::Unknown, "source")
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "yes" | "y" | "true" | "x" | "attuned" | "✓")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://dnd5e.wikidot.com";

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    #[test]
    fn builds_from_row() {
        let r = row(&[
            (keys::NAME, "Bag of Holding"),
            (keys::TYPE, "Wondrous Item"),
            (keys::SOURCE, "DMG"),
            (row::CATEGORY, "Uncommon"),
            (row::URL, "/wondrous-items:bag-of-holding"),
        ]);
        let item = MagicItem::build(&r, BASE, s!("This bag has an interior space."));
        assert_eq!(item.name, "Bag of Holding");
        assert_eq!(item.rarity, Rarity::Uncommon);
        assert_eq!(item.item_type, ItemType::Wondrous);
        assert_eq!(item.source, Source::DMG);
        assert!(!item.attuned);
        assert_eq!(item.url, "http://dnd5e.wikidot.com/wondrous-items:bag-of-holding");
    }

    #[test]
    fn rarity_variants() {
        assert_eq!(parse_rarity("Very Rare"), Rarity::VeryRare);
        assert_eq!(parse_rarity("???"), Rarity::Unknown);
        assert_eq!(parse_rarity(""), Rarity::Unknown);
        assert_eq!(parse_rarity("Mythic"), Rarity::Unknown);
    }

    #[test]
    fn type_and_source_fall_back() {
        assert_eq!(parse_item_type("Weapon (any sword)"), ItemType::Weapon);
        assert_eq!(parse_item_type("Spaceship"), ItemType::Unknown);
        assert_eq!(parse_source("xge:"), Source::XGE);
        assert_eq!(parse_source("Homebrew"), Source::Unknown);
    }

    #[test]
    fn attunement_from_either_column() {
        let by_type = MagicItem::build(&row(&[(keys::TYPE, "Attuned")]), BASE, s!());
        assert!(by_type.attuned);
        assert_eq!(by_type.item_type, ItemType::Unknown);

        let by_column = MagicItem::build(&row(&[(keys::TYPE, "Ring"), (keys::ATTUNED, "Yes")]), BASE, s!());
        assert!(by_column.attuned);
        assert_eq!(by_column.item_type, ItemType::Ring);
    }

    #[test]
    fn serializes_type_key() {
        let item = MagicItem::build(&row(&[(keys::NAME, "Wand of Web"), (keys::TYPE, "Wand")]), BASE, s!("x"));
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Wand\""));
        assert!(json.contains("\"source\":\"Unknown\""));
        let back: MagicItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
