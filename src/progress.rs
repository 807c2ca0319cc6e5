// src/progress.rs
use crate::config::options::StatPage;

/// Progress reporting for the startup fetch.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page fetched and parsed.
    fn item_done(&mut self, _page: StatPage, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Writes progress to the log (stderr).
#[derive(Default)]
pub struct LogProgress {
    done: usize,
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        logf!("{}", msg);
    }
    fn item_done(&mut self, page: StatPage, rows: usize) {
        self.done += 1;
        logf!("Fetched {} ({} rows) ({}/{})", page.slug(), rows, self.done, self.total);
    }
    fn finish(&mut self) {
        if self.total == 0 {
            logf!("Fetch complete");
        } else {
            logf!("Fetch complete ({}/{})", self.done, self.total);
        }
    }
}
