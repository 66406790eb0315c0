// ── Runtime inventory configuration ──
//
// Describes how to reach one SimplyPrint tenant. Carries credential
// data and tuning but never touches disk: the CLI builds an
// `InventoryConfig` from its own config layer and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Public SimplyPrint API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.simplyprint.io";

/// How long a fetched snapshot stays fresh by default.
pub const DEFAULT_REFRESH_WINDOW: Duration = Duration::from_secs(3600);

/// Configuration for one SimplyPrint tenant.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// API base URL.
    pub base_url: Url,
    /// API token, sent as `X-API-KEY` on every request.
    pub api_token: SecretString,
    /// Company (tenant) id, the first path segment of every request.
    pub company_id: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// How long a snapshot is served from cache before the next refresh
    /// performs real fetches. Zero disables caching.
    pub refresh_window: Duration,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL
                .parse()
                .expect("default base URL is a valid URL"),
            api_token: SecretString::from(String::new()),
            company_id: String::new(),
            timeout: spooldash_api::DEFAULT_TIMEOUT,
            refresh_window: DEFAULT_REFRESH_WINDOW,
        }
    }
}
