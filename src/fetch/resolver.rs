//! Redirect resolution: the connect / request / classify / follow loop.
//!
//! Resolution works headers-only so redirect chains never waste bandwidth
//! on discarded bodies. Each hop opens a fresh connection because redirect
//! targets may point at a different host entirely; the superseded
//! connection is closed when its client and response are dropped.

use std::time::Duration;

use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info};
use url::Url;

use super::error::FetchError;

/// Redirect statuses the resolver follows.
const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

/// Terminal outcome of resolution: the final target plus the open, unread
/// 200 response. The underlying connection stays open until the response
/// body has been consumed.
#[derive(Debug)]
pub struct Resolved {
    /// The URL the chain ended on.
    pub target: Url,
    /// The terminal response, body not yet read.
    pub response: Response,
}

/// Normalizes a raw URL string into a validated http(s) target.
///
/// Inputs without a scheme get `https://` prepended; the fallback is
/// logged before any parsing or connection attempt. An explicit scheme
/// other than http/https is rejected outright.
///
/// # Errors
///
/// Returns [`FetchError::UnsupportedScheme`] for non-http(s) schemes and
/// [`FetchError::InvalidUrl`] when the string does not parse.
pub fn normalize_url(raw: &str) -> Result<Url, FetchError> {
    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else if let Some((scheme, _)) = raw.split_once("://") {
        return Err(FetchError::unsupported_scheme(scheme));
    } else {
        info!(url = %raw, "no scheme given, assuming https");
        format!("https://{raw}")
    };

    let url = Url::parse(&candidate).map_err(|_| FetchError::invalid_url(raw))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::unsupported_scheme(other)),
    }
}

/// Builds the client for one hop. Redirects are disabled: the loop in
/// [`resolve`] owns redirect handling. The timeout applies per network
/// operation (connect, and each body read later on).
fn hop_client(target: &Url, timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .redirect(Policy::none())
        .connect_timeout(timeout)
        .read_timeout(timeout)
        .build()
        .map_err(|e| FetchError::network(target.as_str(), e))
}

/// Resolves `start_url` by following redirects up to `max_redirects` hops.
///
/// Only `GET` is ever issued. A 200 ends the loop successfully with the
/// body unread; 404 and any other non-redirect status are fatal. A
/// redirect without a Location header is a defined error here rather than
/// the undefined behavior of naive fetchers.
///
/// # Errors
///
/// Returns the [`FetchError`] variant matching the first fatal condition:
/// scheme/parse failures, connect/read timeouts, network errors, missing
/// redirect targets, 404, unexpected statuses, or the redirect limit.
pub async fn resolve(
    start_url: &str,
    timeout: Duration,
    max_redirects: usize,
) -> Result<Resolved, FetchError> {
    let mut next = start_url.to_string();

    for hop in 0..max_redirects {
        let target = normalize_url(&next)?;
        debug!(hop, url = %target, "requesting");

        let client = hop_client(&target, timeout)?;
        let response = client.get(target.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout(target.as_str())
            } else {
                FetchError::network(target.as_str(), e)
            }
        })?;

        let status = response.status();
        debug!(hop, status = status.as_u16(), "response received");

        if REDIRECT_STATUSES.contains(&status.as_u16()) {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| FetchError::missing_redirect_target(target.as_str()))?;
            // Location may be relative; resolve it against the current target.
            let redirected = target
                .join(location)
                .map_err(|_| FetchError::invalid_url(location))?;
            info!(from = %target, to = %redirected, "redirecting");
            next = String::from(redirected);
            // Dropping `response` and `client` here closes the connection.
            continue;
        }

        return match status {
            StatusCode::OK => {
                info!(url = %target, "resolved");
                Ok(Resolved { target, response })
            }
            StatusCode::NOT_FOUND => Err(FetchError::not_found(target.as_str())),
            other => Err(FetchError::unexpected_status(
                target.as_str(),
                other.as_u16(),
                other.canonical_reason().unwrap_or("unknown"),
            )),
        };
    }

    Err(FetchError::too_many_redirects(start_url, max_redirects))
}
