//! Destination filename derivation from the resolved URL and Content-Type.

use std::borrow::Cow;

use tracing::debug;
use url::Url;

/// Name used when the URL path has no usable last segment.
const DEFAULT_STEM: &str = "index";

/// Derives the destination filename from the resolved URL path and the
/// response Content-Type.
///
/// The last path segment is used (percent-decoded and sanitized), or
/// `index` when the path ends without one. The extension inferred from the
/// stripped Content-Type is appended when the name does not already end
/// with it; when no extension can be inferred the name is used as-is.
#[must_use]
pub fn derive_filename(target: &Url, content_type: Option<&str>) -> String {
    let segment = target
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            urlencoding::decode(segment)
                .map(Cow::into_owned)
                .unwrap_or_else(|e| {
                    debug!(segment = %segment, error = %e, "URL decoding failed, using raw segment");
                    segment.to_string()
                })
        });

    let mut name = match segment {
        Some(segment) => sanitize_filename(&segment),
        None => DEFAULT_STEM.to_string(),
    };

    if let Some(extension) = content_type.and_then(extension_from_content_type)
        && !name.ends_with(extension)
    {
        name.push_str(extension);
    }
    name
}

/// Guess file extension from a Content-Type header value.
///
/// Parameters after `;` are stripped before matching. Unknown types yield
/// `None` and the derived name keeps whatever extension it already had.
pub(crate) fn extension_from_content_type(content_type: &str) -> Option<&'static str> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();

    match mime.as_str() {
        "text/html" => Some(".html"),
        "text/plain" => Some(".txt"),
        "application/json" => Some(".json"),
        "application/xml" | "text/xml" => Some(".xml"),
        "application/pdf" => Some(".pdf"),
        "image/jpeg" => Some(".jpg"),
        "image/png" => Some(".png"),
        "image/gif" => Some(".gif"),
        "image/svg+xml" => Some(".svg"),
        "application/zip" => Some(".zip"),
        "application/gzip" => Some(".gz"),
        "text/css" => Some(".css"),
        "text/javascript" | "application/javascript" => Some(".js"),
        "video/mp4" => Some(".mp4"),
        "audio/mpeg" => Some(".mp3"),
        "application/octet-stream" => Some(".bin"),
        _ => None,
    }
}

/// Sanitizes a filename for filesystem safety.
///
/// Replaces characters that are invalid on common filesystems:
/// / \ : * ? " < > |
fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim_matches(['_', '.']).is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        sanitized
    }
}
