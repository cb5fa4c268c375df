//! # calc_core - Construction Material Estimation Engine
//!
//! `calc_core` is the computational heart of Bangun: quick estimates of the
//! materials a small building job needs (floor tiles, bricks, plaster, paint).
//! All inputs and outputs are JSON-serializable so the same engine drives the
//! desktop/web GUI and the command line.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Estimates and result sets implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No partial results**: Any missing or invalid input means no estimate
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::catalog;
//!
//! let wall = catalog::find("brick-wall").unwrap();
//! let inputs = wall.default_inputs().with("wall_length", "4").with("wall_height", "3");
//!
//! let estimate = wall.compute(&inputs).unwrap();
//! let json = serde_json::to_string_pretty(&estimate).unwrap();
//! assert!(json.contains("\"bricks\": 840"));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The list of calculators, slugs and display metadata
//! - [`calculations`] - Estimator formulas
//! - [`inputs`] - Form field descriptions and raw input parsing
//! - [`results`] - Formatted result rows
//! - [`routing`] - Path to screen resolution
//! - [`screen`] - State of one open calculator
//! - [`materials`] - Brick, plaster and paint reference data
//! - [`settings`] - User settings with atomic saves
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod inputs;
pub mod materials;
pub mod results;
pub mod routing;
pub mod screen;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Estimate, Formula};
pub use catalog::CalculatorDescriptor;
pub use errors::{CalcError, CalcResult};
pub use inputs::{FieldKind, FieldSpec, InputSet};
pub use results::{ResultRow, ResultSet};
pub use routing::Route;
pub use screen::CalculatorScreen;
pub use settings::{load_settings, save_settings, DisplaySettings, Settings};
