//! HTTP client for fetching the remote catalog payload.

use std::time::Duration;

use reqwest::blocking::Client;

use super::traits::IndexFetcher;
use super::{ManagerError, ManagerResult};

/// Default HTTP request timeout (30 seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP-based implementation of [`IndexFetcher`].
///
/// Fetches the published catalog file from a remote URL. No retry or
/// backoff is attempted here; a failed fetch leaves the on-disk catalog
/// as it was.
#[derive(Clone)]
pub struct HttpIndexClient {
    client: Client,
    timeout: Duration,
}

impl std::fmt::Debug for HttpIndexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpIndexClient")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for HttpIndexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpIndexClient {
    /// Create a new index client with default settings.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new index client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("libshelf/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create HTTP client");

        Self { client, timeout }
    }
}

impl IndexFetcher for HttpIndexClient {
    fn fetch_index(&self, url: &str) -> ManagerResult<String> {
        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                ManagerError::Timeout {
                    url: url.to_string(),
                    timeout_secs: self.timeout.as_secs(),
                }
            } else {
                ManagerError::IndexFetchFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        if !response.status().is_success() {
            return Err(ManagerError::IndexFetchFailed {
                url: url.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        response.text().map_err(|e| ManagerError::IndexFetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpIndexClient::new();
        assert_eq!(client.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_client_with_timeout() {
        let client = HttpIndexClient::with_timeout(Duration::from_secs(5));
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    // Network-dependent behavior is exercised through the IndexFetcher
    // seam with in-process fakes; these unit tests cover construction only.
}
