// ── Time-boxed inventory store ──
//
// A single slot holding the latest (materials, filaments, fetched_at)
// snapshot. `refresh()` serves the slot while it is younger than the
// refresh window and performs real fetches otherwise. A failed refresh
// propagates the error and leaves the slot alone.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use spooldash_api::{Filament, FilamentId, Material, MaterialId, SimplyPrintClient};

use crate::FetchError;
use crate::config::InventoryConfig;

/// One refresh result: both collections plus the UTC instant captured
/// after both fetches succeeded. Cloning is cheap; the maps are shared.
#[derive(Debug, Clone)]
pub struct InventorySnapshot {
    pub materials: Arc<HashMap<MaterialId, Material>>,
    pub filaments: Arc<HashMap<FilamentId, Filament>>,
    pub fetched_at: DateTime<Utc>,
}

/// The API client plus its single-slot cache.
pub struct InventoryStore {
    client: SimplyPrintClient,
    refresh_window: chrono::Duration,
    slot: Mutex<Option<InventorySnapshot>>,
}

impl InventoryStore {
    /// Build a store (and its HTTP client) from runtime config.
    pub fn new(config: &InventoryConfig) -> Result<Self, FetchError> {
        let transport = spooldash_api::TransportConfig {
            timeout: config.timeout,
        };
        let client = SimplyPrintClient::new(
            &config.base_url,
            &config.api_token,
            config.company_id.clone(),
            &transport,
        )?;
        Ok(Self::with_client(client, config.refresh_window))
    }

    /// Wrap an existing client.
    pub fn with_client(client: SimplyPrintClient, refresh_window: std::time::Duration) -> Self {
        let refresh_window =
            chrono::Duration::from_std(refresh_window).unwrap_or(chrono::Duration::MAX);
        Self {
            client,
            refresh_window,
            slot: Mutex::new(None),
        }
    }

    /// Return the current snapshot, fetching when the cache is stale.
    ///
    /// Materials are fetched before filaments; the timestamp is taken
    /// once both succeed. The slot lock is held only to check and to
    /// store, never across the fetches, so concurrent callers racing an
    /// expired window may duplicate the request pair -- an accepted
    /// limitation. The slot swap itself is atomic, last writer wins.
    pub async fn refresh(&self) -> Result<InventorySnapshot, FetchError> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            debug!(fetched_at = %snapshot.fetched_at, "serving cached inventory");
            return Ok(snapshot);
        }

        let materials = self.client.fetch_materials().await?;
        let filaments = self.client.fetch_filaments().await?;
        let snapshot = InventorySnapshot {
            materials: Arc::new(materials),
            filaments: Arc::new(filaments),
            fetched_at: Utc::now(),
        };

        info!(
            materials = snapshot.materials.len(),
            spools = snapshot.filaments.len(),
            "refreshed inventory"
        );

        *self.slot.lock().await = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// The slot's snapshot if it is younger than the refresh window.
    async fn fresh_snapshot(&self) -> Option<InventorySnapshot> {
        let slot = self.slot.lock().await;
        slot.as_ref()
            .filter(|s| Utc::now() - s.fetched_at < self.refresh_window)
            .cloned()
    }

    /// Whatever the slot holds, fresh or stale. A failed refresh never
    /// evicts, so this can serve stale data alongside the error.
    pub async fn last_snapshot(&self) -> Option<InventorySnapshot> {
        self.slot.lock().await.clone()
    }

    /// Age of the stored snapshot, or `None` if nothing was fetched yet.
    pub async fn data_age(&self) -> Option<chrono::Duration> {
        self.last_snapshot().await.map(|s| Utc::now() - s.fetched_at)
    }
}
