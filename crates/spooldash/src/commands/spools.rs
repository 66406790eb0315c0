//! Spool command handlers.
//!
//! Listings render the joined spool/material view. An unresolved
//! material reference is a per-spool warning on stderr, never a failure.

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::Tabled;

use spooldash_core::{FilamentId, InventoryStore, SpoolView};

use crate::cli::{GlobalOpts, SpoolListArgs, SpoolsArgs, SpoolsCommand};
use crate::error::CliError;
use crate::output;

// ── Serializable report ─────────────────────────────────────────────

/// Owned, flattened spool view for structured output.
#[derive(Debug, Serialize)]
pub struct SpoolReport {
    id: i64,
    uid: String,
    brand: String,
    color_name: String,
    color_hex: String,
    diameter_mm: f64,
    length_left_mm: f64,
    length_total_mm: f64,
    fill_ratio: f64,
    remaining_grams: Option<f64>,
    material: Option<MaterialSummary>,
}

#[derive(Debug, Serialize)]
struct MaterialSummary {
    id: i64,
    brand: String,
    material_type: String,
    filament_type_name: String,
    density: f64,
}

impl From<&SpoolView<'_>> for SpoolReport {
    fn from(view: &SpoolView<'_>) -> Self {
        let f = view.filament;
        Self {
            id: f.id.0,
            uid: f.uid.clone(),
            brand: f.brand.clone(),
            color_name: f.color_name.clone(),
            color_hex: f.color_hex.clone(),
            diameter_mm: f.diameter,
            length_left_mm: f.length_left,
            length_total_mm: f.length_total,
            fill_ratio: f.fill_ratio(),
            remaining_grams: view.remaining_grams(),
            material: view.material.map(|m| MaterialSummary {
                id: m.id.0,
                brand: m.brand.clone(),
                material_type: m.material_type.clone(),
                filament_type_name: m.filament_type_name.clone(),
                density: m.density,
            }),
        }
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SpoolRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Material")]
    material: String,
    #[tabled(rename = "Type")]
    type_name: String,
    #[tabled(rename = "Dia (mm)")]
    diameter: String,
    #[tabled(rename = "Left (g)")]
    left_grams: String,
    #[tabled(rename = "Fill")]
    fill: String,
}

impl From<&SpoolReport> for SpoolRow {
    fn from(r: &SpoolReport) -> Self {
        let (material, type_name) = match &r.material {
            Some(m) => (m.material_type.clone(), m.filament_type_name.clone()),
            None => ("?".into(), "?".into()),
        };
        Self {
            id: r.id.to_string(),
            color: r.color_name.clone(),
            brand: r.brand.clone(),
            material,
            type_name,
            diameter: format!("{:.2}", r.diameter_mm),
            left_grams: r
                .remaining_grams
                .map_or_else(|| "?".into(), |g| format!("{g:.0}")),
            fill: format!("{:.0}%", r.fill_ratio * 100.0),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle(
    store: &InventoryStore,
    args: SpoolsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SpoolsCommand::List(list) => handle_list(store, &list, global).await,
        SpoolsCommand::Get { id } => handle_get(store, id, global).await,
    }
}

async fn handle_list(
    store: &InventoryStore,
    list: &SpoolListArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let snapshot = store.refresh().await?;

    let filter = spooldash_core::InventoryFilter {
        brands: list.brands.clone(),
        material_types: list.material_types.clone(),
        filament_type_names: list.filament_types.clone(),
    };
    let views = snapshot.filter_spools(&filter);

    warn_unresolved(&views, global);

    let reports: Vec<SpoolReport> = views.iter().map(SpoolReport::from).collect();
    let out = output::render_list(
        &global.output,
        &reports,
        |r| SpoolRow::from(r),
        |r| r.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

async fn handle_get(store: &InventoryStore, id: i64, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = store.refresh().await?;

    let views = snapshot.spools();
    let view = views
        .iter()
        .find(|v| v.filament.id == FilamentId(id))
        .ok_or(CliError::SpoolNotFound { id })?;

    warn_unresolved(std::slice::from_ref(view), global);

    let report = SpoolReport::from(view);
    let out = output::render_single(&global.output, &report, detail, |r| r.id.to_string());
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Rendering helpers ───────────────────────────────────────────────

/// One stderr warning per spool whose material reference did not
/// resolve. The listing itself still renders.
fn warn_unresolved(views: &[SpoolView<'_>], global: &GlobalOpts) {
    if global.quiet {
        return;
    }
    let color = output::should_color(&global.color);
    for view in views {
        if view.is_unresolved() {
            let material_id = view.filament.material_id;
            let spool_id = view.filament.id;
            if color {
                eprintln!(
                    "{} Material {material_id} not found (spool {spool_id}).",
                    "warning:".yellow().bold()
                );
            } else {
                eprintln!("warning: Material {material_id} not found (spool {spool_id}).");
            }
        }
    }
}

/// Multi-line detail view for `spools get` in table mode.
fn detail(r: &SpoolReport) -> String {
    let material = match &r.material {
        Some(m) => format!(
            "{} {} / {} (id {})",
            m.brand, m.material_type, m.filament_type_name, m.id
        ),
        None => "unresolved".into(),
    };
    let mass = r
        .remaining_grams
        .map_or_else(|| "unknown (material unresolved)".into(), |g| format!("{g:.1} g"));

    format!(
        "Spool {id}\n\
         \x20 UID:        {uid}\n\
         \x20 Brand:      {brand}\n\
         \x20 Color:      {color} ({hex})\n\
         \x20 Material:   {material}\n\
         \x20 Diameter:   {dia:.2} mm\n\
         \x20 Remaining:  {left:.0} mm of {total:.0} mm ({fill:.0}%)\n\
         \x20 Est. mass:  {mass}",
        id = r.id,
        uid = r.uid,
        brand = r.brand,
        color = r.color_name,
        hex = r.color_hex,
        dia = r.diameter_mm,
        left = r.length_left_mm,
        total = r.length_total_mm,
        fill = r.fill_ratio * 100.0,
    )
}
