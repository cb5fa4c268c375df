//! # Brick Wall
//!
//! Estimates bricks (or concrete blocks) and mortar materials for a wall.
//!
//! Wall area is multiplied by the per-m² coefficients of the chosen
//! [`BrickType`]. The piece count is rounded up; cement and sand are kept
//! as fractional quantities (shown at 2 and 3 decimals).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::inputs::{ChoiceOption, FieldSpec, InputSet};
use crate::materials::BrickType;
use crate::results::{format_count, format_fixed, ResultRow, ResultSet};
use crate::settings::DisplaySettings;
use crate::units::{pieces_needed, CubicMeters, Kilograms, Meters};

const BRICK_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "standard-red",
        label: "Red Brick (standard)",
    },
    ChoiceOption {
        value: "concrete-block",
        label: "Concrete Block (20x40 cm)",
    },
];

/// Form fields, in display order
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("wall_length", "Wall Length", "m", ""),
    FieldSpec::number("wall_height", "Wall Height", "m", ""),
    FieldSpec::choice("brick_type", "Brick Type", "standard-red", BRICK_OPTIONS),
];

const FOOTNOTE: &str =
    "Based on Indonesian National Standard (SNI) unit analysis. Actual quantities may vary.";

/// Input parameters for a brick wall.
///
/// ## JSON Example
///
/// ```json
/// { "wall_length_m": 4.0, "wall_height_m": 3.0, "brick_type": "standard-red" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickWallInput {
    /// Wall length in meters
    pub wall_length_m: f64,
    /// Wall height in meters
    pub wall_height_m: f64,
    /// Masonry unit
    pub brick_type: BrickType,
}

impl BrickWallInput {
    /// Read the typed input from raw form text.
    pub fn from_inputs(inputs: &InputSet) -> CalcResult<Self> {
        let input = BrickWallInput {
            wall_length_m: inputs.positive("wall_length")?,
            wall_height_m: inputs.positive("wall_height")?,
            brick_type: BrickType::from_str_flexible(inputs.choice("brick_type")?)?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.wall_length_m <= 0.0 || !self.wall_length_m.is_finite() {
            return Err(CalcError::invalid_input(
                "wall_length_m",
                self.wall_length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.wall_height_m <= 0.0 || !self.wall_height_m.is_finite() {
            return Err(CalcError::invalid_input(
                "wall_height_m",
                self.wall_height_m.to_string(),
                "Height must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the brick wall estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickWallResult {
    /// Wall area (m²)
    pub area_m2: f64,
    /// Bricks or blocks, rounded up
    pub bricks: u64,
    /// Mortar cement (kg)
    pub cement_kg: f64,
    /// Mortar sand (m³)
    pub sand_m3: f64,
}

impl BrickWallResult {
    /// Labeled rows for display
    pub fn result_set(&self, display: &DisplaySettings) -> ResultSet {
        ResultSet {
            heading: format!("Results (for {} m²)", format_fixed(self.area_m2, 2, display)),
            rows: vec![
                ResultRow::new("Bricks", format_count(self.bricks, display), "pcs"),
                ResultRow::new("Mortar cement", format_fixed(self.cement_kg, 2, display), "kg"),
                ResultRow::new("Mortar sand", format_fixed(self.sand_m3, 3, display), "m³"),
            ],
            footnote: FOOTNOTE.to_string(),
        }
    }
}

/// Calculate bricks, cement and sand for a wall.
pub fn calculate(input: &BrickWallInput) -> CalcResult<BrickWallResult> {
    input.validate()?;

    let area = Meters(input.wall_length_m) * Meters(input.wall_height_m);
    let coef = input.brick_type.coefficients();

    let bricks = pieces_needed("wall_length_m", area.value() * coef.units_per_m2, 1.0)?;
    let cement = Kilograms(coef.cement_kg_per_m2) * area.value();
    let sand = CubicMeters(coef.sand_m3_per_m2) * area.value();

    Ok(BrickWallResult {
        area_m2: area.value(),
        bricks,
        cement_kg: cement.value(),
        sand_m3: sand.value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_wall(brick: &str) -> InputSet {
        InputSet::from_defaults(FIELDS)
            .with("wall_length", "4")
            .with("wall_height", "3")
            .with("brick_type", brick)
    }

    #[test]
    fn test_red_brick_wall() {
        let input = BrickWallInput::from_inputs(&test_wall("standard-red")).unwrap();
        let result = calculate(&input).unwrap();

        assert!((result.area_m2 - 12.0).abs() < 1e-9);
        // 12 * 70 = 840
        assert_eq!(result.bricks, 840);
        // 12 * 11.5 = 138
        assert!((result.cement_kg - 138.0).abs() < 1e-9);
        // 12 * 0.04 = 0.48
        assert!((result.sand_m3 - 0.48).abs() < 1e-9);
    }

    #[test]
    fn test_concrete_block_wall() {
        let input = BrickWallInput::from_inputs(&test_wall("concrete-block")).unwrap();
        let result = calculate(&input).unwrap();

        // 12 * 11 = 132 blocks, 12 * 9.68 = 116.16 kg, 12 * 0.038 = 0.456 m³
        assert_eq!(result.bricks, 132);
        assert!((result.cement_kg - 116.16).abs() < 1e-9);
        assert!((result.sand_m3 - 0.456).abs() < 1e-9);
    }

    #[test]
    fn test_brick_count_rounds_up() {
        // 1.05 * 1 * 70 = 73.5 -> 74
        let inputs = test_wall("standard-red").with("wall_length", "1.05").with("wall_height", "1");
        let result = calculate(&BrickWallInput::from_inputs(&inputs).unwrap()).unwrap();
        assert_eq!(result.bricks, 74);
    }

    #[test]
    fn test_default_brick_is_red() {
        let inputs = InputSet::from_defaults(FIELDS)
            .with("wall_length", "4")
            .with("wall_height", "3");
        let input = BrickWallInput::from_inputs(&inputs).unwrap();
        assert_eq!(input.brick_type, BrickType::StandardRed);
    }

    #[test]
    fn test_local_brick_names() {
        let input = BrickWallInput::from_inputs(&test_wall("batako")).unwrap();
        assert_eq!(input.brick_type, BrickType::ConcreteBlock);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(BrickWallInput::from_inputs(&test_wall("standard-red").with("wall_length", "0")).is_err());
        assert!(BrickWallInput::from_inputs(&test_wall("standard-red").with("wall_height", "x")).is_err());
        assert_eq!(
            BrickWallInput::from_inputs(&test_wall("adobe")).unwrap_err().error_code(),
            "MATERIAL_NOT_FOUND"
        );
    }

    #[test]
    fn test_result_rows() {
        let input = BrickWallInput::from_inputs(&test_wall("standard-red")).unwrap();
        let set = calculate(&input).unwrap().result_set(&DisplaySettings::default());
        assert_eq!(set.heading, "Results (for 12.00 m²)");
        assert_eq!(set.rows[0].value, "840");
        assert_eq!(set.rows[1].value, "138.00");
        assert_eq!(set.rows[2].value, "0.480");
    }

    #[test]
    fn test_options_match_brick_codes() {
        let options = FIELDS[2].options();
        assert_eq!(options.len(), BrickType::ALL.len());
        for (option, brick) in options.iter().zip(BrickType::ALL) {
            assert_eq!(option.value, brick.code());
            assert_eq!(option.label, brick.display_name());
        }
    }
}
