// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use dnd_scrape::config::options::{EntityKind, RunOptions};
use dnd_scrape::core::net::Fetch;
use dnd_scrape::error::{Result, ScrapeError};

pub const BASE: &str = "http://fixture.test";

/// Serves captured pages by URL; anything else is a 404.
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self { pages: HashMap::new(), requested: RefCell::new(Vec::new()) }
    }

    pub fn page(mut self, path: &str, body: &str) -> Self {
        self.pages.insert(format!("{BASE}{path}"), body.to_string());
        self
    }

    pub fn with_site() -> Self {
        Self::new()
            .page("/spells", include_str!("../fixtures/spells_listing.html"))
            .page("/spell:fire-bolt", include_str!("../fixtures/spell_fire_bolt.html"))
            .page("/spell:alarm", include_str!("../fixtures/spell_alarm.html"))
            .page("/feats", include_str!("../fixtures/feats_listing.html"))
            .page("/feat:alert", include_str!("../fixtures/feat_alert.html"))
            .page("/feat:grappler", include_str!("../fixtures/feat_grappler.html"))
            .page("/wondrous-items", include_str!("../fixtures/magic_items_listing.html"))
            .page("/wondrous-items:bag-of-holding", include_str!("../fixtures/item_bag_of_holding.html"))
            .page("/wondrous-items:staff-of-power", include_str!("../fixtures/item_staff_of_power.html"))
    }
}

impl Fetch for FakeFetcher {
    fn get(&self, url: &str) -> Result<String> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { status: 404, url: url.to_string() })
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("dnd_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn options(kinds: &[EntityKind], out: &str) -> RunOptions {
    let mut opts = RunOptions::default();
    for &k in kinds {
        opts.select(k);
    }
    opts.base_url = BASE.to_string();
    opts.out_dir = tmp_dir(out);
    opts.request_pause_ms = 0;
    opts
}

pub fn read_json(path: &PathBuf) -> serde_json::Value {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}
