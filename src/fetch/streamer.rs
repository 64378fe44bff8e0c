//! Streaming transfer of a resolved response body to disk.
//!
//! The body is read in plan-sized chunks so memory stays bounded no matter
//! how large the file is. The destination handle lives inside this
//! function, so it is flushed and closed on every exit path; bytes already
//! written are not rolled back on failure.

use std::io;
use std::path::Path;

use futures_util::TryStreamExt;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufWriter};
use tokio_util::io::StreamReader;
use tracing::{debug, info};

use super::error::FetchError;
use super::plan::DownloadPlan;
use super::progress::Progress;

/// Streams the response body to `dest`, drawing a progress line after
/// every chunk, and returns the number of bytes written.
///
/// The destination is created or truncated. On failure the partially
/// written file is left in place; callers that need cleanup must remove it
/// themselves.
///
/// # Errors
///
/// Returns [`FetchError::TransferFailed`] when reading the body, writing
/// the destination, or emitting progress fails.
pub async fn stream_to_file(
    response: reqwest::Response,
    dest: &Path,
    plan: &DownloadPlan,
) -> Result<u64, FetchError> {
    debug!(dest = %dest.display(), chunk_size = plan.chunk_size, "opening destination");

    let file = File::create(dest)
        .await
        .map_err(|e| FetchError::transfer_failed(dest, e))?;
    let mut writer = BufWriter::new(file);

    let body = response.bytes_stream().map_err(io::Error::other);
    let mut reader = StreamReader::new(body);

    let mut progress = Progress::new(plan.total);
    let mut buf = vec![0u8; plan.chunk_size];

    loop {
        let read = reader
            .read(&mut buf)
            .await
            .map_err(|e| FetchError::transfer_failed(dest, e))?;
        if read == 0 {
            break;
        }

        writer
            .write_all(&buf[..read])
            .await
            .map_err(|e| FetchError::transfer_failed(dest, e))?;

        progress.record(read as u64);
        progress
            .draw()
            .map_err(|e| FetchError::transfer_failed(dest, e))?;
    }

    writer
        .flush()
        .await
        .map_err(|e| FetchError::transfer_failed(dest, e))?;
    progress
        .finish()
        .map_err(|e| FetchError::transfer_failed(dest, e))?;

    info!(dest = %dest.display(), bytes = progress.downloaded(), "transfer complete");
    Ok(progress.downloaded())
}
