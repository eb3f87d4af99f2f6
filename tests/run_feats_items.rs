// tests/run_feats_items.rs
mod common;

use std::fs;

use common::{options, FakeFetcher};
use dnd_scrape::config::options::EntityKind;
use dnd_scrape::entity::enums::{ItemType, Rarity, Source};
use dnd_scrape::entity::{Feat, MagicItem, Row};
use dnd_scrape::specs;

#[test]
fn feats_to_json() {
    let opts = options(&[EntityKind::Feats], "feats");
    let summary = dnd_scrape::runner::run(&opts, &FakeFetcher::with_site(), None).unwrap();
    assert_eq!(summary.records_written, 2);
    assert_eq!(summary.skipped, 1);

    let text = fs::read_to_string(opts.out_path(EntityKind::Feats)).unwrap();
    let feats: Vec<Feat> = serde_json::from_str(&text).unwrap();

    let alert = &feats[0];
    assert_eq!(alert.name, "Alert");
    assert!(!alert.has_prerequisite);
    assert!(alert.prerequisite.is_empty());
    assert_eq!(
        alert.description,
        "Always on the lookout for danger, you gain the following benefits: \
         You gain a +5 bonus to initiative. You can't be surprised while you are conscious."
    );
    assert_eq!(alert.url, "http://fixture.test/feat:alert");

    let grappler = &feats[1];
    assert!(grappler.has_prerequisite);
    assert_eq!(grappler.prerequisite, "Strength 13 or higher");
    assert!(grappler.description.starts_with("You've developed the skills"));
    assert!(grappler.description.ends_with("within 5 unit."));
}

#[test]
fn magic_items_to_json() {
    let opts = options(&[EntityKind::MagicItems], "magic_items");
    let summary = dnd_scrape::runner::run(&opts, &FakeFetcher::with_site(), None).unwrap();
    assert_eq!(summary.records_written, 2);
    assert_eq!(summary.skipped, 1);

    let text = fs::read_to_string(opts.out_path(EntityKind::MagicItems)).unwrap();
    let items: Vec<MagicItem> = serde_json::from_str(&text).unwrap();

    let bag = &items[0];
    assert_eq!(bag.name, "Bag of Holding");
    assert_eq!((bag.rarity, bag.item_type, bag.source), (Rarity::Uncommon, ItemType::Wondrous, Source::DMG));
    assert!(!bag.attuned);
    assert!(bag.text.contains("This bag has an interior space"));
    assert!(!bag.text.contains("trackPageView"));
    assert!(!bag.text.contains("wondrous-tag"));

    let staff = &items[1];
    assert_eq!((staff.rarity, staff.item_type, staff.source), (Rarity::VeryRare, ItemType::Staff, Source::DMG));
    assert!(staff.attuned);
    assert!(staff.text.contains("**+2 bonus**"));
    assert_eq!(staff.url, "http://fixture.test/wondrous-items:staff-of-power");
}

#[test]
fn item_text_in_row_skips_fetch() {
    let row: Row = [
        ("Item Name", "Driftglobe"),
        ("Type", "Wondrous Item"),
        ("Source", "DMG"),
        ("category", "Uncommon"),
        ("URL", "/wondrous-items:driftglobe"),
        ("text", "A small glass sphere."),
    ]
    .into_iter()
    .collect();
    let fetcher = FakeFetcher::new();

    let item = specs::magic_items::fetch_item(&fetcher, &row, common::BASE).unwrap();
    assert_eq!(item.text, "A small glass sphere.");
    assert!(fetcher.requested.borrow().is_empty());
}

#[test]
fn all_kinds_in_one_run() {
    let opts = options(&[EntityKind::MagicItems, EntityKind::Feats, EntityKind::Spells], "all_kinds");
    let summary = dnd_scrape::runner::run(&opts, &FakeFetcher::with_site(), None).unwrap();

    assert_eq!(
        summary.files_written,
        vec![
            opts.out_dir.join("spells.json"),
            opts.out_dir.join("feats.json"),
            opts.out_dir.join("magic_items.json"),
        ]
    );
    assert_eq!(summary.records_written, 3 + 2 + 2);
    assert_eq!(summary.skipped, 3);
}
