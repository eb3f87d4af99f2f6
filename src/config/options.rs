// src/config/options.rs
use std::path::PathBuf;

use crate::file::normalize_dir_path;
use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Spells,
    Feats,
    MagicItems,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Spells, EntityKind::Feats, EntityKind::MagicItems];

    /// Listing page path, relative to the base URL.
    pub fn listing_path(self) -> &'static str {
        match self {
            EntityKind::Spells => SPELLS_PATH,
            EntityKind::Feats => FEATS_PATH,
            EntityKind::MagicItems => MAGIC_ITEMS_PATH,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            EntityKind::Spells => SPELLS_FILE,
            EntityKind::Feats => FEATS_FILE,
            EntityKind::MagicItems => MAGIC_ITEMS_FILE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Spells => "spells",
            EntityKind::Feats => "feats",
            EntityKind::MagicItems => "magic items",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Kinds to scrape, in run order.
    pub kinds: Vec<EntityKind>,
    pub base_url: String,
    /// Output directory; one JSON file per kind.
    pub out_dir: PathBuf,
    /// Pause between consecutive page fetches.
    pub request_pause_ms: u64,
    /// Stop after this many entities per kind.
    pub limit: Option<usize>,
    /// Abort the run on the first entity that fails to build.
    pub strict: bool,
    /// Tab-separated spell list used instead of the spells listing page.
    pub spell_list: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            kinds: Vec::new(),
            base_url: s!(BASE_URL),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            request_pause_ms: REQUEST_PAUSE_MS,
            limit: None,
            strict: false,
            spell_list: None,
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl RunOptions {
    pub fn out_path(&self, kind: EntityKind) -> PathBuf {
        self.out_dir.join(kind.file_name())
    }

    pub fn listing_url(&self, kind: EntityKind) -> String {
        crate::core::net::join_url(&self.base_url, kind.listing_path())
    }

    /// Blank input keeps the current directory.
    pub fn set_out_dir(&mut self, text: &str) {
        if !text.trim().is_empty() {
            self.out_dir = normalize_dir_path(text);
        }
    }

    /// Add a kind once, keeping the canonical order.
    pub fn select(&mut self, kind: EntityKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
            self.kinds.sort_by_key(|k| EntityKind::ALL.iter().position(|a| a == k));
        }
    }
}
