//! # Materials Database
//!
//! Fixed material-per-area coefficients used by the estimators.
//!
//! ## Material Tables
//!
//! - **Bricks**: units, mortar cement and mortar sand per m² of wall
//! - **Plaster**: cement and sand per m² at a 15 mm reference thickness
//! - **Paint**: container sizes with their assumed liquid volume
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::BrickType;
//!
//! let coef = BrickType::StandardRed.coefficients();
//! assert_eq!(coef.units_per_m2, 70.0);
//! ```

pub mod brick;
pub mod paint;
pub mod plaster;

pub use brick::{BrickCoefficients, BrickType};
pub use paint::{PaintContainer, GALLON_5KG, PAIL_25KG};
pub use plaster::{PlasterMix, MIX_1_4, REFERENCE_THICKNESS_MM};
