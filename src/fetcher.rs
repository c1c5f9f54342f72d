//! HTTP fetcher module
//!
//! This module performs the raw GET requests against the metadata API and hands
//! the response bodies back as text. It knows nothing about JSON.

use log::debug;
use thiserror::Error;
use url::Url;

use crate::endpoint::redact_api_key;

/// Errors that can occur while fetching a response body
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or no response arrived
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    /// A response arrived but its body could not be read as text
    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        source: reqwest::Error,
    },

    /// Transport failure reported by a custom `Fetcher` implementation
    ///
    /// `HttpFetcher` never returns this; it is the error for fetchers that
    /// don't go through reqwest (local mirrors, recorded responses, ...).
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

/// Trait for anything that can turn a URL into a response body.
///
/// The orchestrator is generic over this trait, so the HTTP client can be
/// swapped for a scripted fetcher in tests.
pub trait Fetcher {
    /// Performs a GET request and returns the body as text.
    ///
    /// The status code is not inspected: a 404 page is returned just like
    /// any other body and left for the decoder to reject.
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Fetcher backed by a blocking reqwest client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a fresh client using reqwest's defaults.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let printable = redact_api_key(url);
        debug!("GET {}", printable);

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Request {
                url: printable.clone(),
                source: e,
            })?;

        debug!("{} answered with HTTP {}", printable, response.status().as_u16());

        response.text().map_err(|e| FetchError::Body {
            url: printable,
            source: e,
        })
    }
}
