// ── Joined inventory view ──
//
// The data logic behind the dashboard: spools paired with their
// resolved material, derived metrics, and the cross-filter predicates.
// An unresolved material reference is represented, never an error;
// consumers surface it per item and carry on.

use spooldash_api::{Filament, Material};

use crate::store::InventorySnapshot;

/// A spool joined with its material, when the reference resolves.
#[derive(Debug, Clone, Copy)]
pub struct SpoolView<'a> {
    pub filament: &'a Filament,
    pub material: Option<&'a Material>,
}

impl SpoolView<'_> {
    /// Estimated grams remaining on the spool.
    ///
    /// Cross-section area times remaining length gives volume in mm³;
    /// dividing by 1000 yields cm³, and density (g/cm³) converts to
    /// mass. Needs the material, so unresolved spools yield `None`.
    pub fn remaining_grams(&self) -> Option<f64> {
        let material = self.material?;
        let radius = self.filament.diameter / 2.0;
        let area_mm2 = std::f64::consts::PI * radius * radius;
        let volume_cm3 = area_mm2 * self.filament.length_left / 1000.0;
        Some(volume_cm3 * material.density)
    }

    /// True when `material_id` did not resolve against the materials map.
    pub fn is_unresolved(&self) -> bool {
        self.material.is_none()
    }
}

/// Cross-filter criteria over material attributes.
///
/// A material passes when every non-empty list contains the matching
/// field (exact match); an empty filter passes everything.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub brands: Vec<String>,
    pub material_types: Vec<String>,
    pub filament_type_names: Vec<String>,
}

impl InventoryFilter {
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
            && self.material_types.is_empty()
            && self.filament_type_names.is_empty()
    }

    /// Does this material pass every active criterion?
    pub fn matches(&self, material: &Material) -> bool {
        (self.brands.is_empty() || self.brands.contains(&material.brand))
            && (self.material_types.is_empty()
                || self.material_types.contains(&material.material_type))
            && (self.filament_type_names.is_empty()
                || self.filament_type_names.contains(&material.filament_type_name))
    }
}

impl InventorySnapshot {
    /// Spools joined with their materials, ordered by filament id.
    pub fn spools(&self) -> Vec<SpoolView<'_>> {
        let mut spools: Vec<_> = self
            .filaments
            .values()
            .map(|filament| SpoolView {
                filament,
                material: self.materials.get(&filament.material_id),
            })
            .collect();
        spools.sort_by_key(|s| s.filament.id);
        spools
    }

    /// Spools whose material passes the filter.
    ///
    /// An empty filter keeps every spool, unresolved ones included; an
    /// active filter keeps only spools whose material resolves and
    /// matches.
    pub fn filter_spools(&self, filter: &InventoryFilter) -> Vec<SpoolView<'_>> {
        if filter.is_empty() {
            return self.spools();
        }
        self.spools()
            .into_iter()
            .filter(|s| s.material.is_some_and(|m| filter.matches(m)))
            .collect()
    }

    /// Materials ordered by id.
    pub fn materials_sorted(&self) -> Vec<&Material> {
        let mut materials: Vec<_> = self.materials.values().collect();
        materials.sort_by_key(|m| m.id);
        materials
    }
}
