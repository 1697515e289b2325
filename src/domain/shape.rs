//! Shape domain model
//!
//! A closed set of geometric shapes, each computing its own area.
//! Parameters are plain `f64` values and are never validated: a
//! negative radius yields a negative "area". Callers that need
//! geometric plausibility must check before constructing.

use std::f64::consts::PI;

use serde::Serialize;

/// The kind of a shape, matching the `type` tag used in input records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
    Square,
}

impl ShapeKind {
    /// Returns all supported kinds
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Circle,
            ShapeKind::Rectangle,
            ShapeKind::Triangle,
            ShapeKind::Square,
        ]
    }

    /// The tag this kind uses on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
        }
    }

    /// The parameter names this kind requires, in construction order
    pub fn params(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => &["radius"],
            ShapeKind::Rectangle => &["width", "height"],
            ShapeKind::Triangle => &["base", "height"],
            ShapeKind::Square => &["side"],
        }
    }

    /// Looks up a kind by its wire tag
    pub fn from_tag(tag: &str) -> Option<ShapeKind> {
        ShapeKind::all().iter().copied().find(|k| k.tag() == tag)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Circle => write!(f, "Circle"),
            ShapeKind::Rectangle => write!(f, "Rectangle"),
            ShapeKind::Triangle => write!(f, "Triangle"),
            ShapeKind::Square => write!(f, "Square"),
        }
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::from_tag(&s.to_lowercase())
            .ok_or_else(|| format!("Unknown shape kind: {}", s))
    }
}

/// A geometric shape with fixed parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Triangle { base: f64, height: f64 },
    Square { side: f64 },
}

impl Shape {
    /// Computes the area of this shape
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
            Shape::Triangle { base, height } => 0.5 * base * height,
            Shape::Square { side } => side * side,
        }
    }

    /// Returns the kind of this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Square { .. } => ShapeKind::Square,
        }
    }
}
