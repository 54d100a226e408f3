//! `share-check`: rebuild a share's merkle root and block hash from its parts.
//!
//! Fields come from flags or a JSON request file. On success the merkle root
//! and block hash are printed; a claimed hash that does not match, or any
//! malformed field, exits non-zero with the offending field named.

mod args;
mod report;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::report::Report;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let request = args.load_request()?;
    let job = request.job.parse().context("invalid job")?;
    let share = request.share.parse().context("invalid share")?;
    let verification = job.verify(&share).context("share rejected")?;

    let report = Report::new(&verification, request.block_hash.as_deref())
        .context("invalid claimed block hash")?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }

    match report.matches {
        Some(false) => bail!(
            "block hash mismatch: computed {}, claimed {}",
            report.block_hash,
            report.claimed_hash.unwrap_or_default()
        ),
        Some(true) => info!(block_hash = %report.block_hash, "claimed hash confirmed"),
        None => {}
    }

    Ok(())
}

/// Log to stderr so stdout stays machine-readable.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
