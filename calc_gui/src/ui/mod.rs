//! UI module for Bangun GUI
//!
//! # Page Structure
//! - `toolbar` - Header with title, Home button and settings dropdown
//! - body, one of:
//!   - `home` - Intro banner and the calculator card grid
//!   - `calculator_page` - Back link, calculator heading, then either the
//!     form (`input_panel`) with its results (`results_panel`) or the
//!     `coming_soon` notice
//!   - `not_found` - Unknown route with a link home
//! - `footer` - Copyright line and status messages
//!
//! # Shared Components
//! - `icons` - Embedded SVG card icons

pub mod toolbar;
pub mod home;
pub mod calculator_page;
pub mod input_panel;
pub mod results_panel;
pub mod coming_soon;
pub mod not_found;
pub mod footer;

pub mod icons;
