// src/progress.rs
/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status; the runner only calls it.
pub trait Progress {
    /// Called when a kind starts, with the number of entities to process.
    fn begin(&mut self, _label: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One entity was built and written.
    fn item_done(&mut self, _name: &str) {}

    /// One entity was skipped.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called when a kind ends, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Counter lines on stderr: `[ 12/320] Fireball`.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
    seen: usize,
}

impl CliProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn tick(&mut self) -> String {
        self.seen += 1;
        let width = self.total.to_string().len();
        format!("[{:>width$}/{}]", self.seen, self.total)
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, label: &str, total: usize) {
        self.total = total;
        self.seen = 0;
        eprintln!("Scraping {total} {label}...");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        let tick = self.tick();
        eprintln!("{tick} {name}");
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        let tick = self.tick();
        eprintln!("{tick} {name} skipped: {reason}");
    }

    fn finish(&mut self) {
        eprintln!("Done ({} processed).", self.seen);
    }
}
