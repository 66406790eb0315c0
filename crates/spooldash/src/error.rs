//! CLI error types with miette diagnostics.
//!
//! Maps `FetchError` and `ConfigError` into user-facing errors with
//! actionable help text and distinct exit codes per failure family.

use miette::Diagnostic;
use thiserror::Error;

use spooldash_config::ConfigError;
use spooldash_core::FetchError;

/// Exit codes per failure family.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const CONNECTION: i32 = 4;
    pub const API: i32 = 5;
    pub const NOT_FOUND: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
#[allow(dead_code)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the SimplyPrint API")]
    #[diagnostic(
        code(spooldash::unreachable),
        help(
            "Check your network connection and the configured base URL.\n\
             A slow endpoint can be given more room with --timeout."
        )
    )]
    Unreachable {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Vendor API ───────────────────────────────────────────────────

    #[error("SimplyPrint API request failed with HTTP status {status}")]
    #[diagnostic(
        code(spooldash::http_status),
        help("The server rejected the request. Verify the base URL and company id.")
    )]
    HttpStatus { status: u16 },

    #[error("SimplyPrint API returned a response that is not JSON: {message}")]
    #[diagnostic(
        code(spooldash::invalid_payload),
        help("The endpoint may be behind a proxy or a maintenance page.")
    )]
    InvalidPayload { message: String },

    #[error("SimplyPrint API error: {message}")]
    #[diagnostic(
        code(spooldash::api_error),
        help("The vendor rejected the call. An expired or wrong API token is the usual cause.")
    )]
    Api { message: String },

    #[error("Unexpected response format from SimplyPrint API: {reason}")]
    #[diagnostic(
        code(spooldash::malformed_response),
        help("The vendor payload did not match the expected shape; re-run with -vv to inspect.")
    )]
    MalformedResponse { reason: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("Spool '{id}' not found")]
    #[diagnostic(
        code(spooldash::not_found),
        help("Run: spooldash spools list to see available spools")
    )]
    SpoolNotFound { id: i64 },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Failed to build the HTTP client: {message}")]
    #[diagnostic(code(spooldash::client_build))]
    ClientBuild { message: String },

    #[error(transparent)]
    #[diagnostic(
        code(spooldash::config),
        help(
            "Set SIMPLYPRINT_API_TOKEN and SIMPLYPRINT_API_COMPANY_ID in your\n\
             environment, or add them to the spooldash config file\n\
             (see: spooldash config path)."
        )
    )]
    Config(#[from] ConfigError),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unreachable { .. } => exit_code::CONNECTION,
            Self::HttpStatus { .. }
            | Self::InvalidPayload { .. }
            | Self::Api { .. }
            | Self::MalformedResponse { .. } => exit_code::API,
            Self::SpoolNotFound { .. } => exit_code::NOT_FOUND,
            Self::ClientBuild { .. } | Self::Config(_) => exit_code::CONFIG,
            Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── FetchError → CliError mapping ────────────────────────────────────

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::ClientBuild(message) => Self::ClientBuild { message },

            FetchError::Unreachable { source } => Self::Unreachable {
                source: source.into(),
            },

            FetchError::HttpStatus { status } => Self::HttpStatus { status },

            FetchError::InvalidPayload { message, .. } => Self::InvalidPayload { message },

            FetchError::Api { message } => Self::Api { message },

            FetchError::MalformedResponse { reason } => Self::MalformedResponse { reason },
        }
    }
}
