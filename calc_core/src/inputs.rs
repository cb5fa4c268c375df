//! # Form Inputs
//!
//! An [`InputSet`] holds the raw text of every field on a calculator screen,
//! exactly as typed. Formulas pull typed values out of it through the
//! `positive`/`non_negative`/`positive_integer`/`choice` accessors, which
//! fail with a structured [`CalcError`] instead of guessing.
//!
//! [`FieldSpec`] describes one field (label, unit, default text, kind) and
//! drives both GUI form rendering and CLI prompting.
//!
//! ## Parsing rules
//!
//! - Text is trimmed; blank text is a missing field.
//! - Numbers must parse completely as finite decimals (`"4"`, `"3.5"`,
//!   `"1e2"`). Trailing garbage, `inf` and `NaN` are rejected.
//! - Integer fields accept a decimal and truncate toward zero, so `"2.5"`
//!   coats means 2 coats.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One option of a choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Value stored in the input set
    pub value: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

impl std::fmt::Display for ChoiceOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// How a field is entered and parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free decimal number
    Number,
    /// Whole number (decimals truncate)
    Integer,
    /// One of a fixed set of values
    Choice { options: &'static [ChoiceOption] },
}

/// Static description of one input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key in the [`InputSet`]
    pub name: &'static str,
    /// Form label
    pub label: &'static str,
    /// Unit suffix shown beside the field (may be empty)
    pub unit: &'static str,
    /// Initial text when a screen opens or resets
    pub default: &'static str,
    /// Entry kind
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A decimal field
    pub const fn number(name: &'static str, label: &'static str, unit: &'static str, default: &'static str) -> Self {
        FieldSpec { name, label, unit, default, kind: FieldKind::Number }
    }

    /// A whole-number field
    pub const fn integer(name: &'static str, label: &'static str, unit: &'static str, default: &'static str) -> Self {
        FieldSpec { name, label, unit, default, kind: FieldKind::Integer }
    }

    /// A selection field
    pub const fn choice(
        name: &'static str,
        label: &'static str,
        default: &'static str,
        options: &'static [ChoiceOption],
    ) -> Self {
        FieldSpec { name, label, unit: "", default, kind: FieldKind::Choice { options } }
    }

    /// Options of a choice field, empty for numeric fields
    pub fn options(&self) -> &'static [ChoiceOption] {
        match self.kind {
            FieldKind::Choice { options } => options,
            _ => &[],
        }
    }

    /// The option whose value matches `value`, if this is a choice field
    pub fn option_for(&self, value: &str) -> Option<ChoiceOption> {
        self.options().iter().copied().find(|o| o.value == value)
    }
}

/// Raw text values of one calculator screen, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputSet {
    values: BTreeMap<String, String>,
}

impl InputSet {
    /// An empty input set
    pub fn new() -> Self {
        Self::default()
    }

    /// An input set seeded with each field's default text
    pub fn from_defaults(fields: &[FieldSpec]) -> Self {
        fields.iter().map(|f| (f.name, f.default)).collect()
    }

    /// Builder-style setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Replace the raw text of a field
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw text of a field, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Raw text of a field, empty when absent
    pub fn raw(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Iterate `(name, raw text)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no field has been set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a field as a finite decimal number
    pub fn number(&self, name: &str) -> CalcResult<f64> {
        let raw = self.raw(name).trim();
        if raw.is_empty() {
            return Err(CalcError::missing_field(name));
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(CalcError::invalid_input(name, raw, "Not a number")),
        }
    }

    /// Parse a field that must be strictly greater than zero
    pub fn positive(&self, name: &str) -> CalcResult<f64> {
        let v = self.number(name)?;
        if v <= 0.0 {
            return Err(CalcError::invalid_input(name, v.to_string(), "Must be greater than zero"));
        }
        Ok(v)
    }

    /// Parse a field that may be zero but not negative
    pub fn non_negative(&self, name: &str) -> CalcResult<f64> {
        let v = self.number(name)?;
        if v < 0.0 {
            return Err(CalcError::invalid_input(name, v.to_string(), "Cannot be negative"));
        }
        Ok(v)
    }

    /// Parse a whole-number field that must be at least 1
    pub fn positive_integer(&self, name: &str) -> CalcResult<u32> {
        let v = self.number(name)?.trunc();
        if v <= 0.0 {
            return Err(CalcError::invalid_input(name, v.to_string(), "Must be at least 1"));
        }
        if v > u32::MAX as f64 {
            return Err(CalcError::invalid_input(name, v.to_string(), "Value is too large"));
        }
        Ok(v as u32)
    }

    /// Raw text of a choice field, trimmed; blank is missing
    pub fn choice(&self, name: &str) -> CalcResult<&str> {
        let raw = self.raw(name).trim();
        if raw.is_empty() {
            return Err(CalcError::missing_field(name));
        }
        Ok(raw)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        InputSet {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Split a `name=value` assignment as typed on the command line.
pub fn parse_assignment(s: &str) -> CalcResult<(String, String)> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim().to_string(), value.trim().to_string())),
        _ => Err(CalcError::invalid_input("assignment", s, "Expected name=value")),
    }
}
