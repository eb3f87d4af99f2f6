// src/runner.rs
//! Run driver: for each selected kind, listing → build each entity → append to
//! that kind's JSON file. Strictly sequential, with a fixed pause between page
//! requests.

use std::cell::Cell;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::config::options::{EntityKind, RunOptions};
use crate::core::net::Fetch;
use crate::entity::row::Row;
use crate::entity::{feat, magic_item, spell};
use crate::error::{Result, ScrapeError};
use crate::file::JsonArrayWriter;
use crate::progress::{NullProgress, Progress};
use crate::specs;

/// Summary of what was produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub records_written: usize,
    pub skipped: usize,
}

/// Top-level runner. Kinds run in `opts.kinds` order.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let mut summary = RunSummary::default();
    for &kind in &opts.kinds {
        log::info!("scraping {}", kind.label());
        run_kind(kind, opts, fetcher, progress, &mut summary)?;
    }
    log::info!(
        "run complete: {} records in {} files, {} skipped",
        summary.records_written,
        summary.files_written.len(),
        summary.skipped
    );
    Ok(summary)
}

fn run_kind(
    kind: EntityKind,
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
    summary: &mut RunSummary,
) -> Result<()> {
    let paced = Paced::new(fetcher, opts.request_pause_ms);
    let fetcher: &dyn Fetch = &paced;

    let mut rows = match kind {
        EntityKind::Spells => specs::spells::fetch_rows(fetcher, opts)?,
        EntityKind::Feats => specs::feats::fetch_rows(fetcher, opts)?,
        EntityKind::MagicItems => specs::magic_items::fetch_rows(fetcher, opts)?,
    };
    if let Some(limit) = opts.limit {
        rows.truncate(limit);
    }

    let path = opts.out_path(kind);
    let mut writer = JsonArrayWriter::create(&path)?;
    progress.begin(kind.label(), rows.len());

    for row in &rows {
        let name = row_name(kind, row);
        let built = match kind {
            EntityKind::Spells => specs::spells::fetch_spell(fetcher, row, &opts.base_url)
                .and_then(|s| writer.push(&s)),
            EntityKind::Feats => specs::feats::fetch_feat(fetcher, row, &opts.base_url)
                .and_then(|f| writer.push(&f)),
            EntityKind::MagicItems => specs::magic_items::fetch_item(fetcher, row, &opts.base_url)
                .and_then(|m| writer.push(&m)),
        };

        match built {
            Ok(()) => {
                log::debug!("{} {name}", kind.label());
                progress.item_done(name);
            }
            Err(e @ ScrapeError::Entity { .. }) if opts.strict => {
                progress.finish();
                return Err(e);
            }
            Err(e @ (ScrapeError::Io(_) | ScrapeError::Json(_))) => {
                progress.finish();
                return Err(e);
            }
            Err(e) => {
                log::warn!("skipping {name}: {e}");
                progress.item_failed(name, &e.to_string());
                summary.skipped += 1;
            }
        }
    }

    summary.records_written += writer.count();
    writer.finish()?;
    log::info!("wrote {} ({} requests)", path.display(), paced.requests());
    progress.log(&format!("Wrote {}", path.display()));
    progress.finish();
    summary.files_written.push(path);
    Ok(())
}

fn row_name(kind: EntityKind, row: &Row) -> &str {
    match kind {
        EntityKind::Spells => row.get(spell::keys::NAME),
        EntityKind::Feats => row.get_any(&[feat::keys::FEAT_NAME, feat::keys::NAME]),
        EntityKind::MagicItems => row.get(magic_item::keys::NAME),
    }
}

/// Sleeps before every request but the first, so entities that never reach
/// the network (row text, failed bare builds) cost no wait.
struct Paced<'a> {
    inner: &'a dyn Fetch,
    pause_ms: u64,
    requests: Cell<usize>,
}

impl<'a> Paced<'a> {
    fn new(inner: &'a dyn Fetch, pause_ms: u64) -> Self {
        Self { inner, pause_ms, requests: Cell::new(0) }
    }

    fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl Fetch for Paced<'_> {
    fn get(&self, url: &str) -> Result<String> {
        if self.requests.get() > 0 {
            pause(self.pause_ms);
        }
        self.requests.set(self.requests.get() + 1);
        self.inner.get(url)
    }
}

fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    struct Echo;

    impl Fetch for Echo {
        fn get(&self, url: &str) -> Result<String> {
            Ok(s!(url))
        }
    }

    #[test]
    fn first_request_is_not_paused() {
        let paced = Paced::new(&Echo, 30);
        let start = Instant::now();
        assert_eq!(paced.get("a").unwrap(), "a");
        assert!(start.elapsed() < Duration::from_millis(30));

        paced.get("b").unwrap();
        paced.get("c").unwrap();
        assert!(start.elapsed() >= Duration::from_millis(60));
        assert_eq!(paced.requests(), 3);
    }
}
