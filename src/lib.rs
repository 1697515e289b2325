//! shapesum - Sum the areas of geometric shapes described in JSON
//!
//! Reads a JSON array of shape records (a `type` tag plus named
//! numeric parameters), computes each shape's area, and reports the
//! total together with a per-kind count. Records that cannot be turned
//! into shapes are skipped with a diagnostic rather than aborting the
//! run.

pub mod domain;
pub mod cli;

pub use domain::{aggregate, AreaReport, Shape, ShapeError, ShapeKind, ShapeRecord};
