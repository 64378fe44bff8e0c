//! CLI entry point for the netload binary.
//!
//! The core returns typed [`FetchError`] values; this is the only place a
//! process exit happens, mapping the outcome to an exit code.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use netload::fetch::constants::DEFAULT_MAX_REDIRECTS;
use netload::{DownloadPlan, FetchError, Resolved, derive_filename, format_size};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    init_tracing(&args);
    debug!(?args, "CLI arguments parsed");

    let Some(url) = args.url.clone() else {
        info!("no URL given; nothing to do");
        info!("example: netload https://example.com/file.pdf");
        return ExitCode::SUCCESS;
    };

    match run(&url, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "fetch failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing on stdout, honoring `-v`/`-q` with `RUST_LOG`
/// taking precedence.
fn init_tracing(args: &Args) {
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();
}

/// Resolves the URL, derives the destination, and streams the body.
async fn run(url: &str, args: &Args) -> Result<(), FetchError> {
    let started = Instant::now();
    let timeout = Duration::from_secs_f64(args.timeout);

    let Resolved { target, response } =
        netload::resolve(url, timeout, DEFAULT_MAX_REDIRECTS).await?;

    let plan = DownloadPlan::from_response(&response);
    println!("File size: {}", plan.total.human_readable());

    let dest = match &args.output {
        Some(path) => path.clone(),
        None => {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            PathBuf::from(derive_filename(&target, content_type.as_deref()))
        }
    };
    debug!(dest = %dest.display(), "destination resolved");

    let bytes = netload::stream_to_file(response, &dest, &plan).await?;

    println!(
        "Downloaded {} in {:.2} seconds.",
        format_size(bytes),
        started.elapsed().as_secs_f64()
    );
    println!("File '{}' saved.", dest.display());

    Ok(())
}
