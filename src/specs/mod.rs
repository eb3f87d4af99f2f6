// src/specs/mod.rs
//! # Page readers
//!
//! One module per entity kind. Each knows **where its data lives on the site**
//! and how to turn the pages into listing rows and finished records.
//!
//! ## What lives here
//! - **Listing extraction** (`listing`): the tab view of tables on `/spells`,
//!   `/feats`, `/wondrous-items` → [`Row`](crate::entity::Row)s.
//! - **Detail fetches**: spell and feat pages as ordered content blocks, item
//!   pages as markdown.
//! - **Per-kind fallbacks**: a spell keeps its row fields when its page can't be
//!   fetched; a magic item row that already carries `text` skips the fetch.
//!
//! ## What does **not** live here
//! - **Field parsing** (`parse`) and **region splitting** (`segment`); specs call
//!   into them through the entity builders.
//! - **Pacing, limits, output.** The runner decides when to fetch and where the
//!   records go.
//!
//! ## Typical call chain
//! ```text
//! runner → specs::<kind>::fetch_rows()        listing page → Vec<Row>
//!        → specs::<kind>::fetch_<entity>()    detail page  → Spell | Feat | MagicItem
//!        → file::JsonArrayWriter::push()
//! ```
//!
//! ## Testing notes
//! Everything takes a `&dyn Fetch`, so specs run offline against captured pages.

use crate::config::consts::CONTENT_ID;
use crate::core::html::{content_blocks, Block};
use crate::core::net::Fetch;
use crate::error::Result;

pub mod feats;
pub mod listing;
pub mod magic_items;
pub mod spells;

/// Detail page → direct children of the content container.
pub fn fetch_blocks(fetcher: &dyn Fetch, url: &str) -> Result<Vec<Block>> {
    let page = fetcher.get(url)?;
    content_blocks(&page, CONTENT_ID, url)
}
