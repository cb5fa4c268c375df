//! Plaster mix coefficients.

use serde::Serialize;

/// Thickness at which the published coefficients apply (mm)
pub const REFERENCE_THICKNESS_MM: f64 = 15.0;

/// Cement and sand consumption for a plaster mix at the reference thickness.
///
/// Other thicknesses scale both coefficients linearly by
/// `thickness / REFERENCE_THICKNESS_MM`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlasterMix {
    /// Mix label, cement:sand by volume
    pub ratio: &'static str,
    /// Cement per m² at reference thickness (kg)
    pub cement_kg_per_m2: f64,
    /// Sand per m² at reference thickness (m³)
    pub sand_m3_per_m2: f64,
}

/// 1:4 cement:sand plaster (SNI analysis)
pub const MIX_1_4: PlasterMix = PlasterMix {
    ratio: "1:4",
    cement_kg_per_m2: 6.24,
    sand_m3_per_m2: 0.024,
};

impl PlasterMix {
    /// Linear scale factor for a given thickness
    pub fn thickness_factor(thickness_mm: f64) -> f64 {
        thickness_mm / REFERENCE_THICKNESS_MM
    }
}
