// src/specs/feats.rs
//! Feats: rows from the `/feats` listing, prose from each feat page.

use crate::config::options::{EntityKind, RunOptions};
use crate::core::net::{join_url, Fetch};
use crate::entity::feat::Feat;
use crate::entity::row::{self, Row};
use crate::error::Result;
use super::{fetch_blocks, listing};

pub fn fetch_rows(fetcher: &dyn Fetch, opts: &RunOptions) -> Result<Vec<Row>> {
    listing::fetch(fetcher, &opts.listing_url(EntityKind::Feats))
}

pub fn fetch_feat(fetcher: &dyn Fetch, row: &Row, base_url: &str) -> Result<Feat> {
    let url = join_url(base_url, row.get(row::URL));
    let blocks = fetch_blocks(fetcher, &url)?;
    Ok(Feat::build(row, base_url, &blocks))
}
