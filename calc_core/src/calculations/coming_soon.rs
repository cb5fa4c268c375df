//! # Coming Soon
//!
//! Placeholder for catalog entries whose formula is not written yet. It has
//! no fields and never produces a result; front ends show [`NOTICE`].

use serde::Serialize;

use crate::inputs::FieldSpec;

/// No fields
pub const FIELDS: &[FieldSpec] = &[];

/// Fixed notice shown in place of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

pub const NOTICE: Notice = Notice {
    title: "Coming Soon",
    message: "This calculator is under development and will be available soon. Thank you for your patience!",
};
