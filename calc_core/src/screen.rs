//! # Calculator Screen State
//!
//! The state behind one open calculator: which catalog entry is shown and
//! the raw text of its fields. Every edit replaces one field; the result is
//! derived from the current inputs on demand, so it is never stale.
//!
//! ```rust
//! use calc_core::catalog;
//! use calc_core::screen::CalculatorScreen;
//!
//! let mut screen = CalculatorScreen::open(catalog::find("brick-wall").unwrap());
//! assert!(screen.result().is_none());
//!
//! screen.set_field("wall_length", "4");
//! screen.set_field("wall_height", "3");
//! assert!(screen.result().is_some());
//! ```

use crate::calculations::Estimate;
use crate::catalog::CalculatorDescriptor;
use crate::errors::CalcResult;
use crate::inputs::InputSet;
use crate::results::ResultSet;
use crate::settings::DisplaySettings;

/// One open calculator and its field values
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorScreen {
    descriptor: &'static CalculatorDescriptor,
    inputs: InputSet,
}

impl CalculatorScreen {
    /// Open a calculator with every field at its default
    pub fn open(descriptor: &'static CalculatorDescriptor) -> Self {
        CalculatorScreen {
            descriptor,
            inputs: descriptor.default_inputs(),
        }
    }

    pub fn descriptor(&self) -> &'static CalculatorDescriptor {
        self.descriptor
    }

    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    /// Replace the raw text of one field. Names the calculator does not
    /// declare are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if self.descriptor.fields().iter().any(|f| f.name == name) {
            self.inputs.set(name, value);
        }
    }

    /// Show a different calculator. Inputs never carry over, even between
    /// calculators that share field names.
    pub fn switch_to(&mut self, descriptor: &'static CalculatorDescriptor) {
        *self = CalculatorScreen::open(descriptor);
    }

    /// Put every field back to its default
    pub fn reset(&mut self) {
        self.inputs = self.descriptor.default_inputs();
    }

    /// Current estimate, `None` while any input is missing or invalid
    pub fn result(&self) -> Option<Estimate> {
        self.descriptor.compute(&self.inputs)
    }

    /// Current estimate, or why there is none
    pub fn try_result(&self) -> CalcResult<Estimate> {
        self.descriptor.try_compute(&self.inputs)
    }

    /// Formatted result rows, `None` when the results block is hidden
    pub fn result_set(&self, display: &DisplaySettings) -> Option<ResultSet> {
        self.result().map(|estimate| estimate.result_set(display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn open(slug: &str) -> CalculatorScreen {
        CalculatorScreen::open(catalog::find(slug).unwrap())
    }

    #[test]
    fn test_opens_with_defaults() {
        let screen = open("tile-flooring");
        assert_eq!(screen.inputs().get("tile_length"), Some("40"));
        assert_eq!(screen.inputs().get("room_length"), Some(""));
        assert!(screen.result().is_none());
    }

    #[test]
    fn test_result_follows_edits() {
        let mut screen = open("wall-plastering");
        screen.set_field("wall_length", "4");
        assert!(screen.result().is_none());

        screen.set_field("wall_height", "3");
        match screen.result() {
            Some(Estimate::WallPlastering(r)) => assert!((r.cement_kg - 74.88).abs() < 1e-9),
            other => panic!("unexpected {:?}", other),
        }

        screen.set_field("wall_height", "");
        assert!(screen.result().is_none());
        assert!(screen.result_set(&DisplaySettings::default()).is_none());
    }

    #[test]
    fn test_unknown_field_ignored() {
        let mut screen = open("wall-painting");
        screen.set_field("nonsense", "4");
        assert!(screen.inputs().get("nonsense").is_none());
    }

    #[test]
    fn test_switch_does_not_carry_inputs() {
        let mut screen = open("wall-plastering");
        screen.set_field("wall_length", "4");
        screen.set_field("wall_height", "3");

        screen.switch_to(catalog::find("wall-painting").unwrap());
        assert_eq!(screen.descriptor().id, "wall-painting");
        assert_eq!(screen.inputs().get("wall_length"), Some(""));
        assert!(screen.result().is_none());
    }

    #[test]
    fn test_reset() {
        let mut screen = open("wall-painting");
        screen.set_field("coats", "5");
        screen.reset();
        assert_eq!(screen.inputs().get("coats"), Some("2"));
    }

    #[test]
    fn test_stub_screen() {
        let screen = open("roof-tiles");
        assert!(screen.inputs().is_empty());
        assert!(screen.result().is_none());
        assert_eq!(screen.try_result().unwrap_err().error_code(), "NOT_IMPLEMENTED");
    }
}
