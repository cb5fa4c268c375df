//! # Calculator Catalog
//!
//! The static list of calculators shown on the home screen, in display
//! order. Each entry maps a URL slug to display metadata and a [`Formula`].
//! Entries also answer to their original Indonesian slugs (`keramik`,
//! `dinding-bata`, ...) so old links keep working.
//!
//! ```rust
//! use calc_core::catalog;
//!
//! let tile = catalog::find("tile-flooring").unwrap();
//! assert_eq!(catalog::find("keramik").unwrap().id, tile.id);
//! assert_eq!(catalog::all().len(), 20);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::calculations::{Estimate, Formula};
use crate::errors::{CalcError, CalcResult};
use crate::inputs::{FieldSpec, InputSet};

/// Card icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Brick,
    Tile,
    Paint,
    Concrete,
}

impl Icon {
    /// Asset file name for the icon
    pub fn file_name(&self) -> &'static str {
        match self {
            Icon::Brick => "brick.svg",
            Icon::Tile => "tile.svg",
            Icon::Paint => "paint.svg",
            Icon::Concrete => "concrete.svg",
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatorDescriptor {
    /// Unique slug used in routes
    pub id: &'static str,
    /// Other slugs that resolve to this entry
    pub aliases: &'static [&'static str],
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub formula: Formula,
}

impl CalculatorDescriptor {
    /// Form fields in display order
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.formula.fields()
    }

    /// Fresh input set holding every field's default text
    pub fn default_inputs(&self) -> InputSet {
        InputSet::from_defaults(self.fields())
    }

    pub fn is_implemented(&self) -> bool {
        self.formula.is_implemented()
    }

    /// Canonical route path, e.g. `/calculator/tile-flooring`
    pub fn path(&self) -> String {
        format!("/calculator/{}", self.id)
    }

    /// Run the formula; `None` when the inputs do not validate
    pub fn compute(&self, inputs: &InputSet) -> Option<Estimate> {
        self.formula.compute(inputs)
    }

    /// Run the formula, reporting why no result could be produced
    pub fn try_compute(&self, inputs: &InputSet) -> CalcResult<Estimate> {
        if !self.is_implemented() {
            return Err(CalcError::not_implemented(self.id));
        }
        self.formula.try_compute(inputs)
    }
}

const fn entry(
    id: &'static str,
    aliases: &'static [&'static str],
    title: &'static str,
    description: &'static str,
    icon: Icon,
    formula: Formula,
) -> CalculatorDescriptor {
    CalculatorDescriptor { id, aliases, title, description, icon, formula }
}

static CATALOG: [CalculatorDescriptor; 20] = [
    entry(
        "tile-flooring",
        &["keramik"],
        "Floor Tiles",
        "Calculate the tiles, boxes and joints needed for a floor.",
        Icon::Tile,
        Formula::TileFlooring,
    ),
    entry(
        "brick-wall",
        &["dinding-bata"],
        "Brick Wall",
        "Estimate red bricks or concrete blocks, cement and sand.",
        Icon::Brick,
        Formula::BrickWall,
    ),
    entry(
        "wall-plastering",
        &["plesteran-dinding"],
        "Wall Plastering",
        "Calculate the cement and sand needed to plaster a wall.",
        Icon::Paint,
        Formula::WallPlastering,
    ),
    entry(
        "wall-painting",
        &["pengecatan-dinding"],
        "Wall Painting",
        "Calculate paint needed from wall area and number of coats.",
        Icon::Paint,
        Formula::WallPainting,
    ),
    entry(
        "tie-beam",
        &["beton-sloof"],
        "Concrete Tie Beam",
        "Calculate volume and materials for a concrete tie beam (sloof).",
        Icon::Concrete,
        Formula::ComingSoon,
    ),
    entry(
        "light-steel-roof-truss",
        &["rangka-atap"],
        "Light Steel Roof Truss",
        "Estimate light steel members for a roof structure.",
        Icon::Brick,
        Formula::ComingSoon,
    ),
    entry(
        "rubble-stone-foundation",
        &["pondasi-batu-kali"],
        "Rubble Stone Foundation",
        "Calculate volume and materials for a river-stone foundation.",
        Icon::Concrete,
        Formula::ComingSoon,
    ),
    entry(
        "paving-block",
        &["pasang-paving-block"],
        "Paving Block Installation",
        "Calculate paving blocks and bedding sand.",
        Icon::Tile,
        Formula::ComingSoon,
    ),
    entry(
        "electrical-installation",
        &["instalasi-listrik"],
        "Electrical Installation",
        "Estimate cable, sockets and switches per room.",
        Icon::Brick,
        Formula::ComingSoon,
    ),
    entry(
        "gypsum-ceiling",
        &["plafon-gipsum"],
        "Gypsum Ceiling",
        "Calculate gypsum boards, hollow frames and other components.",
        Icon::Tile,
        Formula::ComingSoon,
    ),
    entry(
        "column-formwork",
        &["bekisting"],
        "Column Formwork",
        "Calculate timber and nails for column formwork.",
        Icon::Concrete,
        Formula::ComingSoon,
    ),
    entry(
        "concrete-reinforcement",
        &["pembesian-beton"],
        "Concrete Reinforcement",
        "Calculate total length and weight of reinforcing bar.",
        Icon::Concrete,
        Formula::ComingSoon,
    ),
    entry(
        "wall-skim-coat",
        &["acian-dinding"],
        "Wall Skim Coat",
        "Calculate instant cement or mix for a wall skim coat.",
        Icon::Paint,
        Formula::ComingSoon,
    ),
    entry(
        "concrete-floor-slab",
        &["rabat-beton"],
        "Concrete Floor Slab",
        "Estimate materials for a lean concrete floor or work slab.",
        Icon::Concrete,
        Formula::ComingSoon,
    ),
    entry(
        "concrete-stairs",
        &["tangga-beton"],
        "Concrete Stairs",
        "Calculate concrete volume and reinforcement for a staircase.",
        Icon::Concrete,
        Formula::ComingSoon,
    ),
    entry(
        "septic-tank-excavation",
        &["septic-tank"],
        "Septic Tank Excavation",
        "Calculate excavation volume for a conventional septic tank.",
        Icon::Brick,
        Formula::ComingSoon,
    ),
    entry(
        "door-window-frames",
        &["kusen-pintu-jendela"],
        "Door & Window Frames",
        "Estimate timber needed for door and window frames.",
        Icon::Brick,
        Formula::ComingSoon,
    ),
    entry(
        "roof-tiles",
        &["pasang-genteng"],
        "Roof Tiles",
        "Calculate roof tiles and battens needed for a roof.",
        Icon::Tile,
        Formula::ComingSoon,
    ),
    entry(
        "roof-waterproofing",
        &["waterproofing"],
        "Roof Slab Waterproofing",
        "Calculate waterproofing material for a concrete roof slab.",
        Icon::Paint,
        Formula::ComingSoon,
    ),
    entry(
        "water-pipe-fittings",
        &["sambungan-pipa"],
        "Water Pipe Fittings",
        "Estimate pipes and fittings for a clean-water installation.",
        Icon::Brick,
        Formula::ComingSoon,
    ),
];

static INDEX: Lazy<HashMap<&'static str, &'static CalculatorDescriptor>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for descriptor in CATALOG.iter() {
        index.insert(descriptor.id, descriptor);
        for alias in descriptor.aliases {
            index.insert(*alias, descriptor);
        }
    }
    index
});

/// All calculators in display order
pub fn all() -> &'static [CalculatorDescriptor] {
    &CATALOG
}

/// Look up a calculator by slug or alias (case-insensitive)
pub fn find(slug: &str) -> Option<&'static CalculatorDescriptor> {
    let slug = slug.trim();
    INDEX
        .get(slug)
        .or_else(|| INDEX.get(slug.to_ascii_lowercase().as_str()))
        .copied()
}

/// Like [`find`], but an unknown slug is an error
pub fn get(slug: &str) -> CalcResult<&'static CalculatorDescriptor> {
    find(slug).ok_or_else(|| CalcError::unknown_calculator(slug))
}

/// Calculators that have a working formula
pub fn implemented() -> impl Iterator<Item = &'static CalculatorDescriptor> {
    CATALOG.iter().filter(|d| d.is_implemented())
}
