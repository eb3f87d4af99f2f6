// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://dnd5e.wikidot.com";
pub const USER_AGENT: &str = concat!("dnd_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Listing pages, relative to BASE_URL
pub const SPELLS_PATH: &str = "/spells";
pub const FEATS_PATH: &str = "/feats";
pub const MAGIC_ITEMS_PATH: &str = "/wondrous-items";
pub const SPELL_PATH_PREFIX: &str = "/spell:";

// Page layout
pub const CONTENT_ID: &str = "page-content";
pub const PAGE_TAGS_CLASS: &str = "page-tags";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const SPELLS_FILE: &str = "spells.json";
pub const FEATS_FILE: &str = "feats.json";
pub const MAGIC_ITEMS_FILE: &str = "magic_items.json";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";

// Pacing
pub const REQUEST_PAUSE_MS: u64 = 5000; // be polite
