//! Convert command handler.
//!
//! Drives the batch: enumerate feed files, decode each (fatal on failure),
//! transform every in-scope CVE item, and write one YAML record per
//! (vulnerability, product) pair.

use crate::assemble;
use crate::config::ConvertConfig;
use crate::pipeline::{list_feed_files, load_feed, ConvertStats, OutputWriter, WriteOutcome};
use anyhow::{Context, Result};

/// Run the convert command. Returns the run counters; any error is fatal
/// and maps to a non-zero process exit in main.
pub fn run_convert(config: &ConvertConfig) -> Result<ConvertStats> {
    let files = list_feed_files(&config.input_dir)
        .with_context(|| format!("Failed to list feed files in {}", config.input_dir.display()))?;

    let mut writer = OutputWriter::new(&config.output_dir);
    let mut stats = ConvertStats::default();

    for path in files {
        if !config.quiet {
            tracing::info!("Processing feed file: {}", path.display());
        }
        let feed = load_feed(&path)
            .with_context(|| format!("Failed to load feed file {}", path.display()))?;
        stats.files_processed += 1;
        stats.records_seen += feed.cve_items.len();

        for item in &feed.cve_items {
            let Some(records) = assemble::transform_item(item) else {
                continue;
            };
            stats.records_in_scope += 1;

            for product_record in records {
                match writer.write(&product_record.product, &product_record.record) {
                    WriteOutcome::Written => stats.records_written += 1,
                    WriteOutcome::WriteFailed => stats.write_failures += 1,
                    WriteOutcome::ProductSkipped => stats.records_dropped += 1,
                }
            }
        }
    }

    if !config.quiet {
        stats.log_summary();
    }
    Ok(stats)
}
