//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use netload::fetch::constants::DEFAULT_TIMEOUT_SECS;

/// Fetch a single file over HTTP(S).
///
/// Netload resolves redirects, streams the response body to disk in
/// bounded-memory chunks, and reports progress on stdout.
#[derive(Parser, Debug)]
#[command(name = "netload")]
#[command(author, version, about)]
pub struct Args {
    /// URL to fetch (https is assumed when the scheme is omitted)
    pub url: Option<String>,

    /// Output path; derived from the URL and Content-Type when omitted
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Network timeout in seconds, applied per connect/read operation
    #[arg(short = 't', long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = parse_timeout)]
    pub timeout: f64,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_timeout(raw: &str) -> Result<f64, String> {
    let seconds: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err("timeout must be a positive number of seconds".to_string())
    }
}
