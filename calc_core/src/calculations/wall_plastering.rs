//! # Wall Plastering
//!
//! Cement and sand for plastering a wall with 1:4 mortar. Coefficients are
//! published for a 15 mm coat and scale linearly with thickness.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::inputs::{FieldSpec, InputSet};
use crate::materials::{PlasterMix, MIX_1_4, REFERENCE_THICKNESS_MM};
use crate::results::{format_fixed, ResultRow, ResultSet};
use crate::settings::DisplaySettings;
use crate::units::{CubicMeters, Kilograms, Meters};

/// Form fields, in display order
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("wall_length", "Wall Length", "m", ""),
    FieldSpec::number("wall_height", "Wall Height", "m", ""),
    FieldSpec::number("thickness", "Plaster Thickness", "mm", "15"),
];


/// Input parameters for wall plastering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallPlasteringInput {
    /// Wall length in meters
    pub wall_length_m: f64,
    /// Wall height in meters
    pub wall_height_m: f64,
    /// Plaster coat thickness in millimeters
    pub thickness_mm: f64,
}

impl WallPlasteringInput {
    /// Read the typed input from raw form text.
    pub fn from_inputs(inputs: &InputSet) -> CalcResult<Self> {
        let input = WallPlasteringInput {
            wall_length_m: inputs.positive("wall_length")?,
            wall_height_m: inputs.positive("wall_height")?,
            thickness_mm: inputs.positive("thickness")?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let checks = [
            ("wall_length_m", self.wall_length_m),
            ("wall_height_m", self.wall_height_m),
            ("thickness_mm", self.thickness_mm),
        ];
        for (field, value) in checks {
            if value <= 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be greater than zero"));
            }
        }
        Ok(())
    }
}

/// Results from the plastering estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallPlasteringResult {
    /// Wall area (m²)
    pub area_m2: f64,
    /// Cement (kg)
    pub cement_kg: f64,
    /// Sand (m³)
    pub sand_m3: f64,
}

impl WallPlasteringResult {
    /// Labeled rows for display
    pub fn result_set(&self, display: &DisplaySettings) -> ResultSet {
        ResultSet {
            heading: format!("Results (for {} m²)", format_fixed(self.area_m2, 2, display)),
            rows: vec![
                ResultRow::new("Cement", format_fixed(self.cement_kg, 2, display), "kg"),
                ResultRow::new("Sand", format_fixed(self.sand_m3, 3, display), "m³"),
            ],
            footnote: format!(
                "Based on SNI analysis for {} (cement:sand) plaster at a {} mm reference thickness.",
                MIX_1_4.ratio, REFERENCE_THICKNESS_MM
            ),
        }
    }
}

/// Calculate plaster materials.
pub fn calculate(input: &WallPlasteringInput) -> CalcResult<WallPlasteringResult> {
    input.validate()?;

    let area = Meters(input.wall_length_m) * Meters(input.wall_height_m);
    let factor = PlasterMix::thickness_factor(input.thickness_mm);

    let cement = Kilograms(MIX_1_4.cement_kg_per_m2) * area.value() * factor;
    let sand = CubicMeters(MIX_1_4.sand_m3_per_m2) * area.value() * factor;

    Ok(WallPlasteringResult {
        area_m2: area.value(),
        cement_kg: cement.value(),
        sand_m3: sand.value(),
    })
}
