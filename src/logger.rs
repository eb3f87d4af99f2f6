// src/logger.rs
//! File logger behind the `log` facade.
//!
//! Lines look like `[00:01:02.345][WARN] message` with the time elapsed since
//! install. Everything at or above the threshold is appended to the log file;
//! warnings and errors are echoed to stderr too.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::Result;
use crate::file::ensure_directory;

pub struct FileLogger {
    path: PathBuf,
    start: Instant,
    echo: Level,
    lock: Mutex<()>,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            start: Instant::now(),
            echo: Level::Warn,
            lock: Mutex::new(()),
        }
    }

    fn line(&self, level: Level, msg: &str) -> String {
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        format!("[{elapsed}][{level}] {msg}\n")
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.line(record.level(), &record.args().to_string());

        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = file.write_all(line.as_bytes());
            }
            if record.level() <= self.echo {
                eprint!("{line}");
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger as the global `log` backend.
///
/// Only the first call in a process takes effect; later calls just adjust the
/// level.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    if log::set_boxed_logger(Box::new(FileLogger::new(path))).is_err() {
        log::debug!("logger already installed; keeping it");
    }
    log::set_max_level(level);
    Ok(())
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
