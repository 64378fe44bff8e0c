//! Constants for the fetch module (timeouts, redirect bound, chunk policy).

/// Default network timeout in seconds, applied per connect/read operation.
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

/// Maximum redirect hops before resolution gives up.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Declared body sizes above this threshold (1 MiB) use the large chunk.
pub const LARGE_BODY_THRESHOLD: u64 = 1024 * 1024;

/// Chunk size for bodies larger than [`LARGE_BODY_THRESHOLD`] (16 KiB).
pub const LARGE_CHUNK_SIZE: usize = 16 * 1024;

/// Chunk size for small or unknown-size bodies (4 KiB).
pub const SMALL_CHUNK_SIZE: usize = 4096;
