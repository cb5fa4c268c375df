//! # Tile Flooring
//!
//! Estimates floor tiles and boxes for a rectangular room.
//!
//! ## Method
//!
//! 1. Room dimensions (m) are converted to cm.
//! 2. The joint width (mm) is added to each tile dimension to get the
//!    effective footprint of one tile.
//! 3. Tiles along each axis = ceil(room / effective tile), independently.
//!    No mixed-orientation layout is attempted.
//! 4. Total tiles = product of both axes; boxes = ceil(total / tiles per box).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::tile_flooring::{calculate, TileFlooringInput};
//!
//! let input = TileFlooringInput {
//!     room_length_m: 4.0,
//!     room_width_m: 3.0,
//!     tile_length_cm: 40.0,
//!     tile_width_cm: 40.0,
//!     tiles_per_box: 6,
//!     joint_width_mm: 3.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.total_tiles, 80);
//! assert_eq!(result.total_boxes, 14);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::inputs::{FieldSpec, InputSet};
use crate::results::{format_count, format_fixed, ResultRow, ResultSet};
use crate::settings::DisplaySettings;
use crate::units::{pieces_needed, pieces_product, Centimeters, Meters, Millimeters};

/// Form fields, in display order
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("room_length", "Room Length", "m", ""),
    FieldSpec::number("room_width", "Room Width", "m", ""),
    FieldSpec::number("tile_length", "Tile Length", "cm", "40"),
    FieldSpec::number("tile_width", "Tile Width", "cm", "40"),
    FieldSpec::integer("tiles_per_box", "Tiles per Box", "pcs", "6"),
    FieldSpec::number("joint_width", "Joint Width", "mm", "3"),
];

const FOOTNOTE: &str = "Results are estimates. Buy 5-10% extra as a reserve for cuts and breakage.";

/// Input parameters for a tiled floor.
///
/// ## JSON Example
///
/// ```json
/// {
///   "room_length_m": 4.0,
///   "room_width_m": 3.0,
///   "tile_length_cm": 40.0,
///   "tile_width_cm": 40.0,
///   "tiles_per_box": 6,
///   "joint_width_mm": 3.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileFlooringInput {
    /// Room length in meters
    pub room_length_m: f64,
    /// Room width in meters
    pub room_width_m: f64,
    /// Tile length in centimeters
    pub tile_length_cm: f64,
    /// Tile width in centimeters
    pub tile_width_cm: f64,
    /// Tiles packed in one box
    pub tiles_per_box: u32,
    /// Grout joint width in millimeters (0 for butt joints)
    pub joint_width_mm: f64,
}

impl TileFlooringInput {
    /// Read the typed input from raw form text.
    pub fn from_inputs(inputs: &InputSet) -> CalcResult<Self> {
        let input = TileFlooringInput {
            room_length_m: inputs.positive("room_length")?,
            room_width_m: inputs.positive("room_width")?,
            tile_length_cm: inputs.positive("tile_length")?,
            tile_width_cm: inputs.positive("tile_width")?,
            tiles_per_box: inputs.positive_integer("tiles_per_box")?,
            joint_width_mm: inputs.non_negative("joint_width")?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("room_length_m", self.room_length_m),
            ("room_width_m", self.room_width_m),
            ("tile_length_cm", self.tile_length_cm),
            ("tile_width_cm", self.tile_width_cm),
        ];
        for (field, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be greater than zero"));
            }
        }
        if self.tiles_per_box == 0 {
            return Err(CalcError::invalid_input("tiles_per_box", "0", "Must be at least 1"));
        }
        if self.joint_width_mm < 0.0 || !self.joint_width_mm.is_finite() {
            return Err(CalcError::invalid_input(
                "joint_width_mm",
                self.joint_width_mm.to_string(),
                "Cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from the tile estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileFlooringResult {
    /// Floor area (m²)
    pub area_m2: f64,
    /// Tiles along the room length
    pub tiles_along_length: u64,
    /// Tiles along the room width
    pub tiles_along_width: u64,
    /// Total tiles (approx.)
    pub total_tiles: u64,
    /// Boxes to buy
    pub total_boxes: u64,
}

impl TileFlooringResult {
    /// Labeled rows for display
    pub fn result_set(&self, display: &DisplaySettings) -> ResultSet {
        ResultSet {
            heading: "Results".to_string(),
            rows: vec![
                ResultRow::new("Floor area", format_fixed(self.area_m2, 2, display), "m²"),
                ResultRow::new("Total tiles (approx.)", format_count(self.total_tiles, display), "pcs"),
                ResultRow::new("Boxes needed", format_count(self.total_boxes, display), "boxes"),
            ],
            footnote: FOOTNOTE.to_string(),
        }
    }
}

/// Calculate tile and box counts.
///
/// # Returns
///
/// * `Ok(TileFlooringResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &TileFlooringInput) -> CalcResult<TileFlooringResult> {
    input.validate()?;

    let room_length: Centimeters = Meters(input.room_length_m).into();
    let room_width: Centimeters = Meters(input.room_width_m).into();
    let joint: Centimeters = Millimeters(input.joint_width_mm).into();

    let tile_length = Centimeters(input.tile_length_cm) + joint;
    let tile_width = Centimeters(input.tile_width_cm) + joint;

    let tiles_along_length = pieces_needed("room_length_m", room_length.value(), tile_length.value())?;
    let tiles_along_width = pieces_needed("room_width_m", room_width.value(), tile_width.value())?;
    let total_tiles = pieces_product("room_length_m", tiles_along_length, tiles_along_width)?;
    let total_boxes = pieces_needed("tiles_per_box", total_tiles as f64, f64::from(input.tiles_per_box))?;

    let area = Meters(input.room_length_m) * Meters(input.room_width_m);

    Ok(TileFlooringResult {
        area_m2: area.value(),
        tiles_along_length,
        tiles_along_width,
        total_tiles,
        total_boxes,
    })
}
