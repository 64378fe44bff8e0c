//! Download plan derivation: total size classification and chunk policy.
//!
//! The plan is computed once from the terminal response headers, before
//! any body bytes are read, and stays fixed for the whole transfer.

use reqwest::header::CONTENT_LENGTH;

use super::constants::{LARGE_BODY_THRESHOLD, LARGE_CHUNK_SIZE, SMALL_CHUNK_SIZE};

/// Declared body size: a nonnegative byte count, or unknown when the
/// response carries no usable Content-Length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalSize {
    /// Content-Length declared this many bytes.
    Known(u64),
    /// No Content-Length header (or an unparsable one).
    Unknown,
}

impl TotalSize {
    /// Human-readable rendering, `unknown` when no size was declared.
    #[must_use]
    pub fn human_readable(&self) -> String {
        match self {
            Self::Known(bytes) => format_size(*bytes),
            Self::Unknown => "unknown".to_string(),
        }
    }
}

/// Chunking strategy for one transfer. Chunk size is always positive and
/// never changes mid-transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadPlan {
    /// Declared total size.
    pub total: TotalSize,
    /// Bytes to read per chunk.
    pub chunk_size: usize,
}

impl DownloadPlan {
    /// Derives a plan from a declared content length.
    ///
    /// Sizes above 1 MiB use 16 KiB chunks to amortize syscall overhead;
    /// everything else (including unknown sizes) uses 4 KiB to bound the
    /// latency to the first progress update.
    #[must_use]
    pub fn from_content_length(content_length: Option<u64>) -> Self {
        match content_length {
            Some(bytes) if bytes > LARGE_BODY_THRESHOLD => Self {
                total: TotalSize::Known(bytes),
                chunk_size: LARGE_CHUNK_SIZE,
            },
            Some(bytes) => Self {
                total: TotalSize::Known(bytes),
                chunk_size: SMALL_CHUNK_SIZE,
            },
            None => Self {
                total: TotalSize::Unknown,
                chunk_size: SMALL_CHUNK_SIZE,
            },
        }
    }

    /// Derives a plan from the Content-Length header of a response.
    #[must_use]
    pub fn from_response(response: &reqwest::Response) -> Self {
        let content_length = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok());
        Self::from_content_length(content_length)
    }
}

/// Formats a byte count as a human string with one decimal place.
///
/// Thresholds: below 1024 → `B`, below 1024² → `KB`, at or above → `MB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let bytes = bytes as f64;
    if bytes >= MIB {
        format!("{:.1} MB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes / KIB)
    } else {
        format!("{bytes:.1} B")
    }
}
