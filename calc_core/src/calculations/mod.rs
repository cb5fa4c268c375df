//! # Material Estimators
//!
//! Each estimator follows the pattern:
//!
//! - `FIELDS` - form fields with labels, units and default text
//! - `*Input` - typed parameters, read from an [`InputSet`] by `from_inputs`
//! - `*Result` - quantities (JSON-serializable), with `result_set()` for display
//! - `calculate(input) -> Result<*Result, CalcError>` - pure calculation function
//!
//! [`Formula`] ties them together behind one `compute` operation so the
//! catalog can hold any estimator, including the "coming soon" placeholder.
//!
//! ## Available Estimators
//!
//! - [`tile_flooring`] - floor tiles and boxes
//! - [`brick_wall`] - bricks or blocks, mortar cement and sand
//! - [`wall_plastering`] - plaster cement and sand
//! - [`wall_painting`] - paint liters and containers
//! - [`coming_soon`] - placeholder with no formula

pub mod brick_wall;
pub mod coming_soon;
pub mod tile_flooring;
pub mod wall_painting;
pub mod wall_plastering;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::inputs::{FieldSpec, InputSet};
use crate::results::ResultSet;
use crate::settings::DisplaySettings;

// Re-export commonly used types
pub use brick_wall::{BrickWallInput, BrickWallResult};
pub use tile_flooring::{TileFlooringInput, TileFlooringResult};
pub use wall_painting::{WallPaintingInput, WallPaintingResult};
pub use wall_plastering::{WallPlasteringInput, WallPlasteringResult};

/// The formula behind a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    TileFlooring,
    BrickWall,
    WallPlastering,
    WallPainting,
    /// Placeholder: no fields, never a result
    ComingSoon,
}

impl Formula {
    /// Form fields in display order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Formula::TileFlooring => tile_flooring::FIELDS,
            Formula::BrickWall => brick_wall::FIELDS,
            Formula::WallPlastering => wall_plastering::FIELDS,
            Formula::WallPainting => wall_painting::FIELDS,
            Formula::ComingSoon => coming_soon::FIELDS,
        }
    }

    /// False only for the placeholder
    pub fn is_implemented(&self) -> bool {
        !matches!(self, Formula::ComingSoon)
    }

    /// Run the formula, reporting why no result could be produced.
    pub fn try_compute(&self, inputs: &InputSet) -> CalcResult<Estimate> {
        match self {
            Formula::TileFlooring => {
                tile_flooring::calculate(&TileFlooringInput::from_inputs(inputs)?).map(Estimate::TileFlooring)
            }
            Formula::BrickWall => brick_wall::calculate(&BrickWallInput::from_inputs(inputs)?).map(Estimate::BrickWall),
            Formula::WallPlastering => {
                wall_plastering::calculate(&WallPlasteringInput::from_inputs(inputs)?).map(Estimate::WallPlastering)
            }
            Formula::WallPainting => {
                wall_painting::calculate(&WallPaintingInput::from_inputs(inputs)?).map(Estimate::WallPainting)
            }
            Formula::ComingSoon => Err(CalcError::not_implemented("coming_soon")),
        }
    }

    /// Run the formula. `None` whenever any required input is missing,
    /// non-numeric or out of range; no partial result is ever produced.
    pub fn compute(&self, inputs: &InputSet) -> Option<Estimate> {
        self.try_compute(inputs).ok()
    }
}

/// Output of any estimator.
///
/// ## JSON Example
///
/// ```json
/// { "type": "WallPainting", "area_m2": 12.0, "painted_area_m2": 24.0,
///   "liters": 2.4, "gallons_5kg": 1, "pails_25kg": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Estimate {
    TileFlooring(TileFlooringResult),
    BrickWall(BrickWallResult),
    WallPlastering(WallPlasteringResult),
    WallPainting(WallPaintingResult),
}

impl Estimate {
    /// Formula that produced this estimate
    pub fn formula(&self) -> Formula {
        match self {
            Estimate::TileFlooring(_) => Formula::TileFlooring,
            Estimate::BrickWall(_) => Formula::BrickWall,
            Estimate::WallPlastering(_) => Formula::WallPlastering,
            Estimate::WallPainting(_) => Formula::WallPainting,
        }
    }

    /// Surface area the estimate covers (m²)
    pub fn area_m2(&self) -> f64 {
        match self {
            Estimate::TileFlooring(r) => r.area_m2,
            Estimate::BrickWall(r) => r.area_m2,
            Estimate::WallPlastering(r) => r.area_m2,
            Estimate::WallPainting(r) => r.area_m2,
        }
    }

    /// Labeled, formatted rows for display
    pub fn result_set(&self, display: &DisplaySettings) -> ResultSet {
        match self {
            Estimate::TileFlooring(r) => r.result_set(display),
            Estimate::BrickWall(r) => r.result_set(display),
            Estimate::WallPlastering(r) => r.result_set(display),
            Estimate::WallPainting(r) => r.result_set(display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(formula: Formula, length: &str) -> InputSet {
        InputSet::from_defaults(formula.fields())
            .with("wall_length", length)
            .with("wall_height", "3")
    }

    fn numeric_outputs(estimate: &Estimate) -> Vec<f64> {
        match estimate {
            Estimate::BrickWall(r) => vec![r.area_m2, r.bricks as f64, r.cement_kg, r.sand_m3],
            Estimate::WallPlastering(r) => vec![r.area_m2, r.cement_kg, r.sand_m3],
            Estimate::WallPainting(r) => vec![r.area_m2, r.painted_area_m2, r.liters],
            Estimate::TileFlooring(r) => vec![r.area_m2, r.total_tiles as f64, r.total_boxes as f64],
        }
    }

    #[test]
    fn test_dispatch() {
        let estimate = Formula::WallPainting.compute(&wall(Formula::WallPainting, "4")).unwrap();
        assert_eq!(estimate.formula(), Formula::WallPainting);
        assert!((estimate.area_m2() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_inputs_give_no_result() {
        for formula in [
            Formula::TileFlooring,
            Formula::BrickWall,
            Formula::WallPlastering,
            Formula::WallPainting,
        ] {
            let defaults = InputSet::from_defaults(formula.fields());
            assert!(formula.compute(&defaults).is_none(), "{:?} computed from defaults", formula);
            assert!(formula.compute(&InputSet::new()).is_none());
        }
    }

    #[test]
    fn test_non_positive_inputs_give_no_result() {
        for formula in [Formula::BrickWall, Formula::WallPlastering, Formula::WallPainting] {
            for bad in ["0", "-2", "abc", ""] {
                assert!(formula.compute(&wall(formula, bad)).is_none());
            }
        }
    }

    #[test]
    fn test_coming_soon_never_computes() {
        let inputs = InputSet::new().with("wall_length", "4");
        assert!(Formula::ComingSoon.compute(&inputs).is_none());
        assert_eq!(
            Formula::ComingSoon.try_compute(&inputs).unwrap_err().error_code(),
            "NOT_IMPLEMENTED"
        );
        assert!(Formula::ComingSoon.fields().is_empty());
        assert!(!Formula::ComingSoon.is_implemented());
    }

    fn room(length: &str, width: &str) -> InputSet {
        InputSet::from_defaults(Formula::TileFlooring.fields())
            .with("room_length", length)
            .with("room_width", width)
    }

    #[test]
    fn test_idempotent() {
        let cases = [
            (Formula::TileFlooring, room("4.37", "3.15")),
            (Formula::BrickWall, wall(Formula::BrickWall, "4.37")),
            (Formula::WallPlastering, wall(Formula::WallPlastering, "4.37")),
            (Formula::WallPainting, wall(Formula::WallPainting, "4.37")),
        ];
        for (formula, inputs) in cases {
            let first = formula.compute(&inputs).unwrap();
            let second = formula.compute(&inputs).unwrap();
            assert_eq!(first, second);
            let bits = |e: &Estimate| numeric_outputs(e).iter().map(|v| v.to_bits()).collect::<Vec<_>>();
            assert_eq!(bits(&first), bits(&second));
        }
    }

    #[test]
    fn test_huge_sizes_give_no_result() {
        let huge = "10000000000";
        assert!(Formula::TileFlooring.compute(&room(huge, huge)).is_none());
        assert_eq!(
            Formula::TileFlooring.try_compute(&room(huge, huge)).unwrap_err().error_code(),
            "INVALID_INPUT"
        );

        let wall_inputs = wall(Formula::BrickWall, huge).with("wall_height", huge);
        assert!(Formula::BrickWall.compute(&wall_inputs).is_none());

        let paint_inputs = wall(Formula::WallPainting, "1e300").with("coverage", "1e-300");
        assert!(Formula::WallPainting.compute(&paint_inputs).is_none());

        // large but countable rooms still compute
        assert!(Formula::TileFlooring.compute(&room("10000", "10000")).is_some());
    }

    #[test]
    fn test_wall_length_monotonic() {
        for formula in [Formula::BrickWall, Formula::WallPlastering, Formula::WallPainting] {
            let mut previous: Option<Vec<f64>> = None;
            for length in ["1", "2.5", "4", "7.25", "12"] {
                let outputs = numeric_outputs(&formula.compute(&wall(formula, length)).unwrap());
                if let Some(prev) = &previous {
                    for (before, after) in prev.iter().zip(&outputs) {
                        assert!(after > before, "{:?}: {} -> {} at length {}", formula, before, after, length);
                    }
                }
                previous = Some(outputs);
            }
        }
    }

    #[test]
    fn test_paint_containers_never_decrease() {
        let mut last = (0, 0);
        for length in ["1", "3", "10", "30", "100"] {
            match Formula::WallPainting.compute(&wall(Formula::WallPainting, length)) {
                Some(Estimate::WallPainting(r)) => {
                    assert!(r.gallons_5kg >= last.0 && r.pails_25kg >= last.1);
                    last = (r.gallons_5kg, r.pails_25kg);
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_estimate_json_is_tagged() {
        let estimate = Formula::BrickWall.compute(&wall(Formula::BrickWall, "4")).unwrap();
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json["type"], "BrickWall");
        assert_eq!(json["bricks"], 840);
        let roundtrip: Estimate = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, estimate);
    }
}
