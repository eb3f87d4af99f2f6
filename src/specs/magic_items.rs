// src/specs/magic_items.rs
//! Magic items: rows from the `/wondrous-items` tab view (one tab per rarity),
//! text from each item page's content container rendered as markdown.

use htmd::HtmlToMarkdown;

use crate::config::consts::{CONTENT_ID, PAGE_TAGS_CLASS};
use crate::config::options::{EntityKind, RunOptions};
use crate::core::html::content_markup;
use crate::core::net::{join_url, Fetch};
use crate::entity::magic_item::{keys, MagicItem};
use crate::entity::row::{self, Row};
use crate::error::{Result, ScrapeError};
use super::listing;

pub fn fetch_rows(fetcher: &dyn Fetch, opts: &RunOptions) -> Result<Vec<Row>> {
    listing::fetch(fetcher, &opts.listing_url(EntityKind::MagicItems))
}

/// Item page → markdown, without scripts and the trailing tag list.
pub fn fetch_text(fetcher: &dyn Fetch, url: &str) -> Result<String> {
    let page = fetcher.get(url)?;
    let markup = content_markup(&page, CONTENT_ID, &[PAGE_TAGS_CLASS], url)?;
    to_markdown(&markup)
}

pub fn to_markdown(html: &str) -> Result<String> {
    let converter = HtmlToMarkdown::builder().skip_tags(vec!["script", "style"]).build();
    let markdown = converter.convert(html).map_err(|e| ScrapeError::Markdown(e.to_string()))?;
    Ok(s!(markdown.trim()))
}

/// Rows that already carry `text` skip the page fetch.
pub fn fetch_item(fetcher: &dyn Fetch, row: &Row, base_url: &str) -> Result<MagicItem> {
    let text = if row.contains(keys::TEXT) {
        s!(row.get(keys::TEXT))
    } else {
        fetch_text(fetcher, &join_url(base_url, row.get(row::URL)))?
    };
    let item = MagicItem::build(row, base_url, text);
    log::debug!("{} ({:?}, {})", item.name, item.rarity, item.source.title());
    Ok(item)
}
