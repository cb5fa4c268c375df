//! Paint containers.
//!
//! Wall paint is sold by nominal weight; the estimator works in liters, so
//! each container size carries an assumed liquid volume.

use serde::{Deserialize, Serialize};

/// A paint container size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintContainer {
    /// Nominal weight printed on the can (kg)
    pub nominal_kg: f64,
    /// Assumed liquid content (liters)
    pub liters: f64,
}

/// 5 kg gallon, about 4 liters
pub const GALLON_5KG: PaintContainer = PaintContainer {
    nominal_kg: 5.0,
    liters: 4.0,
};

/// 25 kg pail, about 20 liters
pub const PAIL_25KG: PaintContainer = PaintContainer {
    nominal_kg: 25.0,
    liters: 20.0,
};

impl PaintContainer {
    /// Display label, e.g. "5 kg (~4 liters)"
    pub fn label(&self) -> String {
        format!("{} kg (~{} liters)", self.nominal_kg, self.liters)
    }
}
