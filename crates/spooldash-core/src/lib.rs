//! Refresh orchestration and inventory data logic for spooldash.
//!
//! This crate sits between `spooldash-api` and the UI consumer (the CLI):
//!
//! - **[`InventoryStore`]** — owns the API client and a single-slot,
//!   time-boxed cache: [`refresh()`](InventoryStore::refresh) serves the
//!   cached [`InventorySnapshot`] while it is younger than the refresh
//!   window and performs real fetches otherwise. A failed refresh never
//!   evicts a previously cached snapshot.
//!
//! - **[`InventorySnapshot`]** — one refresh result: both keyed
//!   collections plus the UTC timestamp taken after both fetches
//!   succeeded, along with the joined views over it
//!   ([`spools()`](InventorySnapshot::spools),
//!   [`materials_sorted()`](InventorySnapshot::materials_sorted)).
//!
//! - **[`SpoolView`]** / **[`InventoryFilter`]** — the data logic behind
//!   the dashboard: spools paired with their resolved material, derived
//!   metrics (grams remaining), and cross-filter predicates. Unresolved
//!   material references are represented, never fatal.
//!
//! - **[`InventoryConfig`]** — runtime configuration handed in by the
//!   caller; this crate never reads files or the environment.

pub mod config;
pub mod inventory;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_API_BASE_URL, DEFAULT_REFRESH_WINDOW, InventoryConfig};
pub use inventory::{InventoryFilter, SpoolView};
pub use store::{InventorySnapshot, InventoryStore};

/// Fetch failures pass through orchestration unchanged; the store adds
/// no failure modes of its own.
pub use spooldash_api::Error as FetchError;

// Re-export the domain records for consumers that only depend on core.
pub use spooldash_api::{DEFAULT_TIMEOUT, Filament, FilamentId, Material, MaterialId};
