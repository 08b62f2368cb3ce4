//! Batch pipeline: feed loading, record writing, run counters.

mod load;
mod write;

pub use load::{list_feed_files, load_feed};
pub use write::{OutputWriter, WriteOutcome};

/// Counters accumulated over one conversion run and logged as the final
/// summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// Feed files decoded
    pub files_processed: usize,
    /// CVE items seen across all files
    pub records_seen: usize,
    /// Items that passed the scope filter and produced records
    pub records_in_scope: usize,
    /// Output files written (one per vulnerability × product)
    pub records_written: usize,
    /// Output files that failed to serialize or write
    pub write_failures: usize,
    /// Records dropped because their product directory could not be created
    pub records_dropped: usize,
}

impl ConvertStats {
    /// Log the end-of-run summary.
    pub fn log_summary(&self) {
        tracing::info!(
            "Processed {} file(s), {} record(s) ({} in scope): wrote {} output file(s), \
             {} write failure(s), {} record(s) dropped on skipped products",
            self.files_processed,
            self.records_seen,
            self.records_in_scope,
            self.records_written,
            self.write_failures,
            self.records_dropped,
        );
    }
}
