// src/specs/spells.rs
//! Spells: listing rows come from the `/spells` tab view, or from a
//! tab-separated spell list file when one is given. Detail pages are read as
//! content blocks and handed to the segmenter.
//!
//! A detail page that can't be fetched doesn't lose the spell: the record is
//! built from the row alone.

use std::fs;
use std::path::Path;

use crate::config::options::{EntityKind, RunOptions};
use crate::core::net::Fetch;
use crate::csv::parse_rows;
use crate::entity::row::{self, Row};
use crate::entity::spell::{self as spell_entity, Spell};
use crate::error::{Result, ScrapeError};
use super::{fetch_blocks, listing};

pub fn fetch_rows(fetcher: &dyn Fetch, opts: &RunOptions) -> Result<Vec<Row>> {
    match &opts.spell_list {
        Some(path) => read_spell_list(path),
        None => listing::fetch(fetcher, &opts.listing_url(EntityKind::Spells)),
    }
}

pub fn read_spell_list(path: &Path) -> Result<Vec<Row>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_spell_list(&text))
}

/// One spell per line; lines with the wrong column count are skipped.
pub fn parse_spell_list(text: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    for (i, fields) in parse_rows(text, '\t').iter().enumerate() {
        match spell_entity::row_from_fields(fields) {
            Some(row) => rows.push(row),
            None => log::warn!("spell list line {}: expected {} columns, got {}", i + 1, spell_entity::TAB_LINE_KEYS.len(), fields.len()),
        }
    }
    rows
}

/// Build one spell, fetching its page. Only a bad component cell fails it.
pub fn fetch_spell(fetcher: &dyn Fetch, row: &Row, base_url: &str) -> Result<Spell> {
    // build once up front so the URL resolves the same way either path
    let bare = Spell::build(row, base_url, None).map_err(|source| ScrapeError::Entity {
        entity: s!(row.get(spell_entity::keys::NAME)),
        source,
    })?;

    let blocks = match fetch_blocks(fetcher, &bare.url) {
        Ok(blocks) => blocks,
        Err(e) => {
            log::warn!("{}: detail page unavailable, keeping row fields only: {e}", bare.name);
            return Ok(bare);
        }
    };

    let mut resolved = row.clone();
    resolved.insert(row::URL, bare.url.as_str());
    Spell::build(&resolved, base_url, Some(&blocks)).map_err(|source| ScrapeError::Entity {
        entity: bare.name.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_list_lines() {
        let text = "Alarm\tAbjuration\t1 Minute R\t30 feet\t8 Hours\tV, S, M\t1\n\
                    broken line\n\
                    Fire Bolt\tEvocation\t1 Action\t120 feet\tInstantaneous\tV, S\t0\n";
        let rows = parse_spell_list(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(spell_entity::keys::NAME), "Alarm");
        assert_eq!(rows[1].get(spell_entity::keys::LEVEL), "0");
    }
}
