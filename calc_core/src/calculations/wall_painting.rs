//! # Wall Painting
//!
//! Paint volume for a wall and the number of containers to buy.
//!
//! liters = area x coats / coverage. The 5 kg and 25 kg container counts are
//! two independent alternatives (all gallons, or all pails), not a combined
//! purchase plan.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::inputs::{FieldSpec, InputSet};
use crate::materials::{GALLON_5KG, PAIL_25KG};
use crate::results::{format_count, format_fixed, ResultRow, ResultSet};
use crate::settings::DisplaySettings;
use crate::units::{pieces_needed, Liters, Meters};

/// Form fields, in display order
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("wall_length", "Wall Length", "m", ""),
    FieldSpec::number("wall_height", "Wall Height", "m", ""),
    FieldSpec::integer("coats", "Number of Coats", "coats", "2"),
    FieldSpec::number("coverage", "Paint Coverage", "m²/liter", "10"),
];

const FOOTNOTE: &str =
    "Coverage varies by brand and paint type. Check the label on the can for a more accurate figure.";

/// Input parameters for wall painting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallPaintingInput {
    /// Wall length in meters
    pub wall_length_m: f64,
    /// Wall height in meters
    pub wall_height_m: f64,
    /// Number of coats
    pub coats: u32,
    /// Area one liter covers (m²/L)
    pub coverage_m2_per_liter: f64,
}

impl WallPaintingInput {
    /// Read the typed input from raw form text.
    pub fn from_inputs(inputs: &InputSet) -> CalcResult<Self> {
        let input = WallPaintingInput {
            wall_length_m: inputs.positive("wall_length")?,
            wall_height_m: inputs.positive("wall_height")?,
            coats: inputs.positive_integer("coats")?,
            coverage_m2_per_liter: inputs.positive("coverage")?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let checks = [
            ("wall_length_m", self.wall_length_m),
            ("wall_height_m", self.wall_height_m),
            ("coverage_m2_per_liter", self.coverage_m2_per_liter),
        ];
        for (field, value) in checks {
            if value <= 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be greater than zero"));
            }
        }
        if self.coats == 0 {
            return Err(CalcError::invalid_input("coats", "0", "At least one coat is required"));
        }
        Ok(())
    }
}

/// Results from the painting estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallPaintingResult {
    /// Wall area (m²)
    pub area_m2: f64,
    /// Area painted across all coats (m²)
    pub painted_area_m2: f64,
    /// Paint needed (liters)
    pub liters: f64,
    /// 5 kg gallons if buying only gallons
    pub gallons_5kg: u64,
    /// 25 kg pails if buying only pails
    pub pails_25kg: u64,
}

impl WallPaintingResult {
    /// Labeled rows for display
    pub fn result_set(&self, display: &DisplaySettings) -> ResultSet {
        ResultSet {
            heading: "Results".to_string(),
            rows: vec![
                ResultRow::new("Total wall area", format_fixed(self.area_m2, 2, display), "m²"),
                ResultRow::new("Total paint needed", format_fixed(self.liters, 2, display), "liters"),
                ResultRow::new(
                    format!("Estimate in {} cans", GALLON_5KG.label()),
                    format_count(self.gallons_5kg, display),
                    "cans",
                )
                .after_separator(),
                ResultRow::new(
                    format!("Estimate in {} cans", PAIL_25KG.label()),
                    format_count(self.pails_25kg, display),
                    "cans",
                ),
            ],
            footnote: FOOTNOTE.to_string(),
        }
    }
}

/// Calculate paint volume and container counts.
pub fn calculate(input: &WallPaintingInput) -> CalcResult<WallPaintingResult> {
    input.validate()?;

    let area = Meters(input.wall_length_m) * Meters(input.wall_height_m);
    let painted = area * f64::from(input.coats);
    let liters = Liters(painted.value() / input.coverage_m2_per_liter);

    Ok(WallPaintingResult {
        area_m2: area.value(),
        painted_area_m2: painted.value(),
        liters: liters.value(),
        gallons_5kg: pieces_needed("wall_length_m", liters.value(), GALLON_5KG.liters)?,
        pails_25kg: pieces_needed("wall_length_m", liters.value(), PAIL_25KG.liters)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_wall() -> InputSet {
        InputSet::from_defaults(FIELDS)
            .with("wall_length", "4")
            .with("wall_height", "3")
    }

    #[test]
    fn test_reference_wall() {
        let result = calculate(&WallPaintingInput::from_inputs(&test_wall()).unwrap()).unwrap();
        assert!((result.area_m2 - 12.0).abs() < 1e-9);
        assert!((result.painted_area_m2 - 24.0).abs() < 1e-9);
        // 24 / 10 = 2.4 L
        assert!((result.liters - 2.4).abs() < 1e-9);
        assert_eq!(result.gallons_5kg, 1);
        assert_eq!(result.pails_25kg, 1);
    }

    #[test]
    fn test_container_estimates_are_independent() {
        // 30 x 3 x 3 coats / 8 = 33.75 L -> 9 gallons or 2 pails
        let inputs = test_wall()
            .with("wall_length", "30")
            .with("coats", "3")
            .with("coverage", "8");
        let result = calculate(&WallPaintingInput::from_inputs(&inputs).unwrap()).unwrap();
        assert!((result.liters - 33.75).abs() < 1e-9);
        assert_eq!(result.gallons_5kg, 9);
        assert_eq!(result.pails_25kg, 2);
    }

    #[test]
    fn test_fractional_coats_truncate() {
        let inputs = test_wall().with("coats", "2.7");
        let input = WallPaintingInput::from_inputs(&inputs).unwrap();
        assert_eq!(input.coats, 2);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(WallPaintingInput::from_inputs(&test_wall().with("coats", "0")).is_err());
        assert!(WallPaintingInput::from_inputs(&test_wall().with("coverage", "0")).is_err());
        assert!(WallPaintingInput::from_inputs(&test_wall().with("coverage", "-10")).is_err());
    }

    #[test]
    fn test_result_rows() {
        let result = calculate(&WallPaintingInput::from_inputs(&test_wall()).unwrap()).unwrap();
        let set = result.result_set(&DisplaySettings::default());
        assert_eq!(set.rows.len(), 4);
        assert_eq!(set.rows[1].value, "2.40");
        assert!(set.rows[2].separator_before);
        assert_eq!(set.rows[2].label, "Estimate in 5 kg (~4 liters) cans");
        assert_eq!(set.rows[3].value, "1");
    }
}
