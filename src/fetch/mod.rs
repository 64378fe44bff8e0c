//! Redirect resolution and streaming download engine.
//!
//! This module implements the two-stage fetch pipeline: the resolver
//! follows redirects (headers only, fresh connection per hop) until it
//! reaches a terminal 200 response, then the streamer transfers the body
//! to a destination file in plan-sized chunks with an in-place progress
//! line.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::time::Duration;
//! use netload::fetch::{self, DownloadPlan};
//!
//! # async fn example() -> Result<(), netload::FetchError> {
//! let resolved = fetch::resolve("example.com/file.pdf", Duration::from_secs(10), 5).await?;
//! let plan = DownloadPlan::from_response(&resolved.response);
//! let bytes = fetch::stream_to_file(resolved.response, Path::new("file.pdf"), &plan).await?;
//! println!("saved {bytes} bytes");
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod error;
mod filename;
mod plan;
mod progress;
mod resolver;
mod streamer;

pub use error::FetchError;
pub use filename::derive_filename;
pub use plan::{DownloadPlan, TotalSize, format_size};
pub use progress::{BAR_WIDTH, Progress, WHEEL};
pub use resolver::{Resolved, normalize_url, resolve};
pub use streamer::stream_to_file;
