//! Async Rust client for the SimplyPrint filament inventory API.
//!
//! - **[`SimplyPrintClient`]** — authenticated read-only client for the
//!   two inventory endpoints
//!   ([`fetch_filaments`](SimplyPrintClient::fetch_filaments),
//!   [`fetch_materials`](SimplyPrintClient::fetch_materials)), with an
//!   ordered response validation pipeline: transport, HTTP status, JSON
//!   decode, vendor error envelope, endpoint shape.
//!
//! - **[`Filament`] / [`Material`]** — immutable domain records decoded
//!   field by field from the vendor's loosely-typed JSON payloads.
//!
//! - **[`Error`]** — one variant per failure kind of the pipeline;
//!   callers match on the variant, not on message text.

pub mod client;
pub mod error;
pub mod model;
pub mod transport;

pub use client::SimplyPrintClient;
pub use error::Error;
pub use model::{DecodeError, Filament, FilamentId, Material, MaterialId};
pub use transport::{DEFAULT_TIMEOUT, TransportConfig};
