//! Status command: last-fetch timestamp and inventory counts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use spooldash_core::InventoryStore;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct StatusReport {
    fetched_at: DateTime<Utc>,
    materials: usize,
    spools: usize,
}

pub async fn handle(store: &InventoryStore, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = store.refresh().await?;

    let report = StatusReport {
        fetched_at: snapshot.fetched_at,
        materials: snapshot.materials.len(),
        spools: snapshot.filaments.len(),
    };

    let out = output::render_single(
        &global.output,
        &report,
        |r| {
            format!(
                "Last fetch: {} | Materials: {} | Spools: {}",
                r.fetched_at.format("%Y-%m-%d %H:%M:%S UTC"),
                r.materials,
                r.spools,
            )
        },
        |r| r.fetched_at.to_rfc3339(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
