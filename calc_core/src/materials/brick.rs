//! Masonry units for wall construction.
//!
//! Per-m² consumption for a half-brick wall laid in 1:4 mortar, taken from the
//! Indonesian national standard (SNI) unit-price analysis tables.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Brick types offered by the brick wall estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrickType {
    /// Fired red clay brick (bata merah), standard size
    StandardRed,
    /// Concrete block (batako), 20 x 40 cm
    ConcreteBlock,
}

/// Consumption per square meter of finished wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickCoefficients {
    /// Units laid per m²
    pub units_per_m2: f64,
    /// Mortar cement per m² (kg)
    pub cement_kg_per_m2: f64,
    /// Mortar sand per m² (m³)
    pub sand_m3_per_m2: f64,
}

impl BrickType {
    /// All brick types for UI selection
    pub const ALL: [BrickType; 2] = [BrickType::StandardRed, BrickType::ConcreteBlock];

    /// Form value used in input sets and URLs
    pub fn code(&self) -> &'static str {
        match self {
            BrickType::StandardRed => "standard-red",
            BrickType::ConcreteBlock => "concrete-block",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BrickType::StandardRed => "Red Brick (standard)",
            BrickType::ConcreteBlock => "Concrete Block (20x40 cm)",
        }
    }

    /// Parse from common string representations, including the local names
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "standard-red" | "red" | "red-brick" | "merah" | "bata-merah" => Ok(BrickType::StandardRed),
            "concrete-block" | "block" | "batako" => Ok(BrickType::ConcreteBlock),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Consumption table for this brick type
    pub fn coefficients(&self) -> BrickCoefficients {
        match self {
            BrickType::StandardRed => BrickCoefficients {
                units_per_m2: 70.0,
                cement_kg_per_m2: 11.5,
                sand_m3_per_m2: 0.04,
            },
            BrickType::ConcreteBlock => BrickCoefficients {
                units_per_m2: 11.0,
                cement_kg_per_m2: 9.68,
                sand_m3_per_m2: 0.038,
            },
        }
    }
}

impl std::fmt::Display for BrickType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
