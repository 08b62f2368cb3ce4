//! osv-gen: Convert legacy NVD JSON feeds into per-product OSV records

use anyhow::Result;
use clap::Parser;
use osv_gen::{cli, config::ConvertConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "osv-gen")]
#[command(version)]
#[command(about = "Convert legacy NVD JSON feeds into per-product OSV records", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Conversion completed (skipped records are logged, not fatal)
    1  Fatal error (unreadable input directory or undecodable feed file)

EXAMPLES:
    # Convert a directory of NVD feed files
    osv-gen --data feeds/

    # Write records somewhere other than ./vulns_output
    osv-gen --data feeds/ --output /srv/osv/vulns")]
struct Cli {
    /// Directory containing the NVD JSON feed files
    #[arg(long, value_name = "DIR", required = true)]
    data: PathBuf,

    /// Root directory for per-product OSV output
    #[arg(long, value_name = "DIR", default_value = "vulns_output")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ConvertConfig {
        input_dir: cli.data,
        output_dir: cli.output,
        quiet: cli.quiet,
    };

    cli::run_convert(&config)?;
    Ok(())
}
