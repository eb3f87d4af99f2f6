// src/specs/listing.rs
//! Listing pages → rows.
//!
//! Listing pages group their tables under a tab view:
//!
//! ```text
//! div#page-content
//!   div.yui-navset
//!     ul.yui-nav > li > a > em         tab labels ("Cantrip", "1st Level", "Rare", ...)
//!     div.yui-content > div            one panel per label, same order
//!       table.wiki-content-table        first row = headers
//! ```
//!
//! Each data row becomes a [`Row`] keyed by header text, plus `URL` (first link
//! in the row) and `category` (the panel's tab label). Pages without a tab view
//! contribute every table in the container with an empty category.

use scraper::{ElementRef, Html};

use crate::config::consts::CONTENT_ID;
use crate::core::html::{element_text, selector};
use crate::core::net::Fetch;
use crate::core::sanitize::normalize_ws;
use crate::entity::row::{self, Row};
use crate::error::{Result, ScrapeError};

const TAB_LABELS: &str = "div.yui-navset ul.yui-nav > li";
const TAB_PANELS: &str = "div.yui-navset div.yui-content > div";
const TABLE: &str = "table";
const TABLE_ROW: &str = "tr";
const CELL: &str = "th, td";
const LINK: &str = "a[href]";

pub fn fetch(fetcher: &dyn Fetch, url: &str) -> Result<Vec<Row>> {
    let page = fetcher.get(url)?;
    extract_rows(&page, CONTENT_ID, url)
}

/// Rows of every listing table under `container_id`, in page order.
pub fn extract_rows(page: &str, container_id: &str, url: &str) -> Result<Vec<Row>> {
    let doc = Html::parse_document(page);
    let container_sel = selector(&format!("#{container_id}"))?;
    let container = doc
        .select(&container_sel)
        .next()
        .ok_or_else(|| ScrapeError::MissingContent { id: s!(container_id), url: s!(url) })?;

    let label_sel = selector(TAB_LABELS)?;
    let panel_sel = selector(TAB_PANELS)?;
    let table_sel = selector(TABLE)?;

    let labels: Vec<String> = container.select(&label_sel).map(|li| normalize_ws(&element_text(li))).collect();
    let panels: Vec<ElementRef<'_>> = container.select(&panel_sel).collect();

    let mut rows = Vec::new();
    if panels.is_empty() {
        for table in container.select(&table_sel) {
            rows.extend(table_rows(table, "")?);
        }
        return Ok(rows);
    }

    if labels.len() != panels.len() {
        log::warn!("{url}: {} tab labels for {} panels", labels.len(), panels.len());
    }
    for (i, panel) in panels.into_iter().enumerate() {
        let category = labels.get(i).map_or("", String::as_str);
        for table in panel.select(&table_sel) {
            rows.extend(table_rows(table, category)?);
        }
    }
    log::debug!("{url}: {} rows", rows.len());
    Ok(rows)
}

/// One table's data rows. The first row with cells supplies the headers.
fn table_rows(table: ElementRef<'_>, category: &str) -> Result<Vec<Row>> {
    let tr_sel = selector(TABLE_ROW)?;
    let cell_sel = selector(CELL)?;
    let link_sel = selector(LINK)?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for tr in table.select(&tr_sel) {
        let cells: Vec<ElementRef<'_>> = tr.select(&cell_sel).collect();
        if cells.is_empty() {
            continue;
        }
        if headers.is_none() {
            headers = Some(cells.iter().map(|c| normalize_ws(&element_text(*c))).collect());
            continue;
        }
        let Some(keys) = &headers else { continue };

        let mut row = Row::new();
        for (key, cell) in keys.iter().zip(&cells) {
            row.insert(key.as_str(), normalize_ws(&element_text(*cell)));
        }
        let href = tr.select(&link_sel).next().and_then(|a| a.value().attr("href")).unwrap_or("");
        row.insert(row::URL, href);
        row.insert(row::CATEGORY, category);
        rows.push(row);
    }
    Ok(rows)
}
