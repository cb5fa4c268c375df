//! # Routing
//!
//! Maps a location path to the screen to show.
//!
//! | Path                                   | Route                 |
//! |----------------------------------------|-----------------------|
//! | `/`, empty                             | [`Route::Home`]       |
//! | `/calculator/<slug>`                   | [`Route::Calculator`] |
//! | `/kalkulator/<slug>` (legacy)          | [`Route::Calculator`] |
//! | anything else, unknown slug            | [`Route::NotFound`]   |
//!
//! A leading `#` (hash-style browser URLs such as `#/calculator/brick-wall`)
//! and a trailing `/` are ignored.

use serde::Serialize;

use crate::catalog::{self, CalculatorDescriptor};

/// Path of the home screen
pub const HOME_PATH: &str = "/";

const CALCULATOR_PREFIXES: [&str; 2] = ["calculator", "kalkulator"];

/// Screen selected by a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// Card grid of all calculators
    Home,
    /// One calculator screen
    Calculator(&'static CalculatorDescriptor),
    /// Unrecognised path, kept for display
    NotFound { path: String },
}

impl Route {
    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME_PATH.to_string(),
            Route::Calculator(descriptor) => descriptor.path(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Calculator shown by this route, if any
    pub fn calculator(&self) -> Option<&'static CalculatorDescriptor> {
        match self {
            Route::Calculator(descriptor) => Some(descriptor),
            _ => None,
        }
    }
}

/// Resolve a path into a route.
pub fn resolve(path: &str) -> Route {
    let trimmed = path.trim();
    let normalized = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Route::Home,
        [prefix, slug] if CALCULATOR_PREFIXES.contains(prefix) => match catalog::find(slug) {
            Some(descriptor) => Route::Calculator(descriptor),
            None => Route::NotFound { path: trimmed.to_string() },
        },
        _ => Route::NotFound { path: trimmed.to_string() },
    }
}
