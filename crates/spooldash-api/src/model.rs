// ── Domain records ──
//
// Filament and Material are decoded from loosely-typed vendor payloads:
// fields come and go between accounts and firmware versions, so decoding
// is explicit per-field lookup over a generic `serde_json::Value` rather
// than derive. Optional fields have documented defaults; only `id` is
// required, and it fails precisely when absent or not an integer.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ── Identifiers ─────────────────────────────────────────────────────

/// Numeric id of a filament spool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FilamentId(pub i64);

/// Numeric id of a material (the vendor's "filament type").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MaterialId(pub i64);

impl MaterialId {
    /// Sentinel for spools whose payload carried no type information.
    /// Never a valid lookup key.
    pub const UNSET: Self = Self(0);

    pub fn is_unset(self) -> bool {
        self == Self::UNSET
    }
}

impl fmt::Display for FilamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Decode failures ─────────────────────────────────────────────────

/// A payload entry that cannot become a domain record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required field was absent or `null`.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A required field was present with the wrong JSON type.
    #[error("field `{field}` is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

// ── Decode helpers ──────────────────────────────────────────────────
//
// `Value::get` returns None on non-objects, so a junk entry (string,
// array, number) falls through to a missing-`id` failure.

fn require_id(raw: &Value, field: &'static str) -> Result<i64, DecodeError> {
    match raw.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingField(field)),
        Some(value) => value.as_i64().ok_or(DecodeError::WrongType {
            field,
            expected: "an integer",
        }),
    }
}

fn string_or_default(raw: &Value, field: &str) -> String {
    raw.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

fn number_or_default(raw: &Value, field: &str) -> f64 {
    raw.get(field).and_then(Value::as_f64).unwrap_or_default()
}

// ── Filament ────────────────────────────────────────────────────────

/// One physical spool as reported by the vendor.
///
/// Lengths and diameter are millimetres. Records are immutable; a
/// refresh produces entirely new ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filament {
    pub id: FilamentId,
    pub uid: String,
    pub brand: String,
    /// Material this spool is wound from; `MaterialId::UNSET` when the
    /// payload carried no usable `type.id`.
    pub material_id: MaterialId,
    pub color_name: String,
    pub color_hex: String,
    pub length_total: f64,
    pub length_left: f64,
    pub diameter: f64,
}

impl Filament {
    /// Decode one entry of the `filament` mapping.
    pub fn decode(raw: &Value) -> Result<Self, DecodeError> {
        let material_id = raw
            .get("type")
            .and_then(|t| t.get("id"))
            .and_then(Value::as_i64)
            .map_or(MaterialId::UNSET, MaterialId);

        Ok(Self {
            id: FilamentId(require_id(raw, "id")?),
            uid: string_or_default(raw, "uid"),
            brand: string_or_default(raw, "brand"),
            material_id,
            color_name: string_or_default(raw, "colorName"),
            color_hex: string_or_default(raw, "colorHex"),
            length_total: number_or_default(raw, "total"),
            length_left: number_or_default(raw, "left"),
            diameter: number_or_default(raw, "dia"),
        })
    }

    /// Fraction of the spool remaining, clamped to `0.0..=1.0`.
    /// Zero-length spools report 0.0 rather than dividing by zero.
    pub fn fill_ratio(&self) -> f64 {
        if self.length_total <= 0.0 {
            return 0.0;
        }
        (self.length_left / self.length_total).clamp(0.0, 1.0)
    }
}

// ── Material ────────────────────────────────────────────────────────

/// A material definition (the vendor's "filament type").
///
/// Density is g/cm³.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub id: MaterialId,
    /// Brand name from the nested `brand.name`; empty when absent.
    pub brand: String,
    pub material_type: String,
    pub filament_type_name: String,
    pub density: f64,
}

impl Material {
    /// Decode one element of the `data` array.
    pub fn decode(raw: &Value) -> Result<Self, DecodeError> {
        let brand = raw
            .get("brand")
            .and_then(|b| b.get("name"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        Ok(Self {
            id: MaterialId(require_id(raw, "id")?),
            brand,
            material_type: string_or_default(raw, "material_type_name"),
            filament_type_name: string_or_default(raw, "filament_type_name"),
            density: number_or_default(raw, "density"),
        })
    }
}
