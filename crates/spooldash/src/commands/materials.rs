//! Material command handlers.

use tabled::Tabled;

use spooldash_core::{InventoryStore, Material};

use crate::cli::{GlobalOpts, MaterialsArgs, MaterialsCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MaterialRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Material")]
    material: String,
    #[tabled(rename = "Type")]
    type_name: String,
    #[tabled(rename = "Density (g/cm³)")]
    density: String,
}

impl From<&Material> for MaterialRow {
    fn from(m: &Material) -> Self {
        Self {
            id: m.id.to_string(),
            brand: m.brand.clone(),
            material: m.material_type.clone(),
            type_name: m.filament_type_name.clone(),
            density: format!("{:.2}", m.density),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    store: &InventoryStore,
    args: &MaterialsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        MaterialsCommand::List => {
            let snapshot = store.refresh().await?;
            let materials = snapshot.materials_sorted();

            let out = output::render_list(
                &global.output,
                &materials,
                |m| MaterialRow::from(*m),
                |m| m.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
