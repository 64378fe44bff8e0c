//! Netload Core Library
//!
//! This library provides the core functionality for the netload tool, a
//! single-shot HTTP file fetcher: it resolves redirects manually, then
//! streams the terminal response body to disk in bounded-memory chunks
//! while reporting progress.
//!
//! # Architecture
//!
//! Everything lives under the [`fetch`] module:
//! - `resolver` - the connect / request / classify / follow-or-stop loop
//! - `streamer` - chunked body transfer to a destination file
//! - `plan` - size classification and chunk-size policy
//! - `progress` - in-place progress line rendering
//! - `filename` - destination name derivation from URL and Content-Type

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fetch;

// Re-export commonly used types
pub use fetch::{
    DownloadPlan, FetchError, Progress, Resolved, TotalSize, derive_filename, format_size,
    normalize_url, resolve, stream_to_file,
};
