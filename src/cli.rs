// src/cli.rs
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use log::LevelFilter;

use crate::config::consts::{BASE_URL, DEFAULT_OUT_DIR, LOG_FILE, REQUEST_PAUSE_MS};
use crate::config::options::{EntityKind, RunOptions};
use crate::core::net::HttpFetcher;
use crate::error::Result;
use crate::progress::CliProgress;
use crate::runner::{self, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "dnd_scrape")]
#[command(about = "Scrapes D&D 5e spells, feats and magic items to JSON")]
#[command(version)]
#[command(group(ArgGroup::new("kind").required(true).multiple(true).args(["spells", "feats", "magic_items"])))]
pub struct Args {
    /// Scrape spells
    #[arg(short, long)]
    pub spells: bool,

    /// Scrape feats
    #[arg(short, long)]
    pub feats: bool,

    /// Scrape magic items
    #[arg(short, long)]
    pub magic_items: bool,

    /// Output directory, one JSON file per kind
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: String,

    /// Pause between page fetches, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub delay_ms: u64,

    /// Stop after this many entities per kind
    #[arg(long)]
    pub limit: Option<usize>,

    /// Abort on the first entity that fails to build
    #[arg(long)]
    pub strict: bool,

    /// Tab-separated spell list to use instead of the spells listing page
    #[arg(long)]
    pub spell_list: Option<PathBuf>,

    /// Site root
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Log file
    #[arg(long, default_value = LOG_FILE)]
    pub log_file: PathBuf,

    /// Log per-entity detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Info
        }
    }

    pub fn into_options(self) -> RunOptions {
        let mut opts = RunOptions::default();
        for (on, kind) in [
            (self.spells, EntityKind::Spells),
            (self.feats, EntityKind::Feats),
            (self.magic_items, EntityKind::MagicItems),
        ] {
            if on {
                opts.select(kind);
            }
        }
        opts.set_out_dir(&self.out);
        opts.request_pause_ms = self.delay_ms;
        opts.limit = self.limit;
        opts.strict = self.strict;
        opts.spell_list = self.spell_list;
        opts.base_url = self.base_url;
        opts.log_file = self.log_file;
        opts
    }
}

/// Parse arguments, install logging, run.
pub fn run() -> Result<RunSummary> {
    let args = Args::parse();
    let level = args.log_level();
    let opts = args.into_options();

    crate::logger::init(&opts.log_file, level)?;
    log::info!("options: {opts:?}");

    let fetcher = HttpFetcher::new()?;
    let mut progress = CliProgress::new();
    runner::run(&opts, &fetcher, Some(&mut progress))
}
