use thiserror::Error;

/// Top-level error type for the `spooldash-api` crate.
///
/// One variant per failure kind a fetch can produce, listed in the order
/// the response pipeline checks them, plus `ClientBuild` for constructor
/// failures. The CLI maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Construction ────────────────────────────────────────────────
    /// HTTP client construction failed (token not header-safe, TLS init).
    #[error("Failed to build SimplyPrint HTTP client: {0}")]
    ClientBuild(String),

    // ── Response pipeline ───────────────────────────────────────────
    /// Transport-level failure: timeout, refused connection, DNS, TLS,
    /// or an aborted body read.
    #[error("Failed to reach SimplyPrint API: {source}")]
    Unreachable {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status other than 200 OK.
    #[error("SimplyPrint API request failed with HTTP status {status}")]
    HttpStatus { status: u16 },

    /// The response body was not valid JSON.
    #[error("Invalid JSON response from SimplyPrint API: {message}")]
    InvalidPayload { message: String, body: String },

    /// The vendor envelope reported failure (`"status": false`).
    #[error("SimplyPrint API error: {message}")]
    Api { message: String },

    /// The body was valid JSON but not the shape the endpoint promises.
    #[error("Unexpected response format from SimplyPrint API: {reason}")]
    MalformedResponse { reason: String },
}

impl Error {
    /// Returns `true` for transport-level failures worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// The HTTP status code, when the server answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}
