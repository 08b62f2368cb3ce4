//! **Convert legacy NVD JSON feeds into per-product OSV records.**
//!
//! `osv-gen` reads a directory of NVD 1.1 feed files (`nvdcve-1.1-*.json`),
//! keeps the vulnerabilities that carry commit-level fix evidence, and emits
//! one OSV record per (vulnerability, affected product) pair as a YAML file
//! under `<output>/<product>/<CVE-ID>.yaml`.
//!
//! ## Core concepts
//!
//! - **[`classify`]**: assigns each reference URL a semantic category
//!   (`FIX`, `REPORT`, `ADVISORY`, `ARTICLE`, `WEB`) via an ordered rule
//!   table, and parses fix URLs into `(repository, commit)` pairs.
//! - **[`cpe`]**: normalizes CPE 2.3 identifiers into vendor:product keys
//!   and accumulates the observed versions per key.
//! - **[`severity`]**: extracts CVSS v2/v3 severity entries and the v3
//!   details that feed the `database_specific` extension block.
//! - **[`assemble`]**: combines the above into [`model::osv::OsvRecord`]s,
//!   one per affected product.
//! - **[`pipeline`]**: loads feed files in batch order and writes the
//!   assembled records under product-named subdirectories.
//!
//! ## Example
//!
//! ```no_run
//! use osv_gen::{cli::run_convert, config::ConvertConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConvertConfig {
//!         input_dir: "feeds/".into(),
//!         output_dir: "vulns_output".into(),
//!         quiet: false,
//!     };
//!     let stats = run_convert(&config)?;
//!     println!("wrote {} records", stats.records_written);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod assemble;
pub mod classify;
pub mod cli;
pub mod config;
pub mod cpe;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod severity;

// Re-export main types for convenience
pub use config::ConvertConfig;
pub use error::{ConvertError, Result};
pub use model::osv::{OsvRecord, ReferenceType, SCHEMA_VERSION};
pub use pipeline::ConvertStats;
