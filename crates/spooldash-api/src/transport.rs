// Transport configuration for building reqwest::Client instances.
//
// SimplyPrint is a public hosted service, so there are no TLS knobs
// here: the config carries the per-request timeout and bakes the default
// headers (Accept, X-API-KEY) into the client it builds.

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` with the given default headers.
    ///
    /// Used by `SimplyPrintClient` to inject `Accept` and `X-API-KEY`
    /// on every request.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("spooldash/0.1.0")
            .default_headers(headers)
            .build()
            .map_err(|e| crate::error::Error::ClientBuild(e.to_string()))
    }
}
