//! # Result Sets
//!
//! The presentation view of an estimate: a heading, labeled value rows with
//! units, and a footnote. Values are already formatted (fixed decimals for
//! quantities, grouped digits for piece counts) using the
//! [`DisplaySettings`] in effect, so every front end shows the same text.

use serde::{Deserialize, Serialize};

use crate::settings::DisplaySettings;

/// One labeled value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Row label, e.g. "Total tiles (approx.)"
    pub label: String,
    /// Formatted value
    pub value: String,
    /// Unit suffix, e.g. "m²", "pcs"
    pub unit: String,
    /// Draw a dashed rule above this row
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub separator_before: bool,
}

impl ResultRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>, unit: impl Into<String>) -> Self {
        ResultRow {
            label: label.into(),
            value: value.into(),
            unit: unit.into(),
            separator_before: false,
        }
    }

    /// Mark this row as starting a new group
    pub fn after_separator(mut self) -> Self {
        self.separator_before = true;
        self
    }
}

/// Everything the results block shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub heading: String,
    pub rows: Vec<ResultRow>,
    pub footnote: String,
}

impl ResultSet {
    /// Render as aligned plain text, one row per line
    pub fn to_plain_text(&self) -> String {
        let width = self.rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
        let mut out = String::new();
        out.push_str(&self.heading);
        out.push('\n');
        for row in &self.rows {
            if row.separator_before {
                out.push_str(&format!("  {}\n", "-".repeat(width + 12)));
            }
            out.push_str(&format!("  {:<width$}  {} {}\n", row.label, row.value, row.unit, width = width));
        }
        out.push_str(&format!("* {}\n", self.footnote));
        out
    }
}

/// Format a quantity with a fixed number of decimals
pub fn format_fixed(value: f64, decimals: usize, display: &DisplaySettings) -> String {
    let text = format!("{:.*}", decimals, value);
    if display.decimal_separator == '.' {
        text
    } else {
        text.replace('.', &display.decimal_separator.to_string())
    }
}

/// Format a whole-piece count with digit grouping, e.g. `1,250`
pub fn format_count(count: u64, display: &DisplaySettings) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(display.thousands_separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        let display = DisplaySettings::default();
        assert_eq!(format_fixed(12.0, 2, &display), "12.00");
        assert_eq!(format_fixed(0.48, 3, &display), "0.480");
        assert_eq!(format_fixed(74.88, 2, &display), "74.88");
    }

    #[test]
    fn test_format_fixed_custom_separator() {
        let display = DisplaySettings {
            thousands_separator: '.',
            decimal_separator: ',',
        };
        assert_eq!(format_fixed(138.0, 2, &display), "138,00");
    }

    #[test]
    fn test_format_count() {
        let display = DisplaySettings::default();
        assert_eq!(format_count(0, &display), "0");
        assert_eq!(format_count(840, &display), "840");
        assert_eq!(format_count(1250, &display), "1,250");
        assert_eq!(format_count(1234567, &display), "1,234,567");
    }

    #[test]
    fn test_plain_text() {
        let set = ResultSet {
            heading: "Results".to_string(),
            rows: vec![
                ResultRow::new("Area", "12.00", "m²"),
                ResultRow::new("Cans", "1", "cans").after_separator(),
            ],
            footnote: "Estimate only.".to_string(),
        };
        let text = set.to_plain_text();
        assert!(text.starts_with("Results\n"));
        assert!(text.contains("Area  12.00 m²"));
        assert!(text.contains("----"));
        assert!(text.ends_with("* Estimate only.\n"));
    }
}
