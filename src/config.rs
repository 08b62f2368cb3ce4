//! Conversion run configuration.
//!
//! The output root is an explicit value threaded through the pipeline
//! rather than a module-level constant, so callers (and tests) can point
//! each run at its own directory.

use std::path::PathBuf;

/// Configuration for a single batch conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory containing the NVD JSON feed files
    pub input_dir: PathBuf,

    /// Root directory for per-product OSV output
    pub output_dir: PathBuf,

    /// Suppress per-file progress logging
    pub quiet: bool,
}
