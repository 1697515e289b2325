//! Shape factory
//!
//! Turns one decoded input record (a `type` tag plus named numeric
//! parameters) into a [`Shape`], or a per-record error. The set of
//! supported tags and their parameter names lives in the static
//! [`ShapeKind`] table; there is no runtime registration.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use super::shape::{Shape, ShapeKind};

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("Record has no \"type\" field")]
    MissingType,

    #[error("Unknown shape type: {0}")]
    UnknownType(String),

    #[error("Missing parameter \"{param}\" for {kind}")]
    MissingParameter { kind: ShapeKind, param: &'static str },

    #[error("Parameter \"{param}\" for {kind} is not a number")]
    InvalidParameter { kind: ShapeKind, param: &'static str },

    #[error("Unexpected parameter \"{param}\" for {kind}")]
    UnexpectedParameter { kind: ShapeKind, param: String },
}

/// One decoded input record: a type tag plus named parameters
///
/// Parameters stay as raw JSON values until construction binds them,
/// so a bad value fails that record alone.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeRecord {
    /// The shape's type tag (e.g., "circle")
    #[serde(rename = "type")]
    pub shape_type: Option<String>,

    /// All remaining keys, bound to the variant's parameters
    #[serde(flatten)]
    pub params: HashMap<String, serde_json::Value>,
}

impl Shape {
    /// Constructs a shape from a decoded record
    ///
    /// Fails if the tag is missing or unknown, if a required parameter
    /// is absent or non-numeric, or if the record carries a parameter
    /// the variant does not declare. Never returns a partially built
    /// shape.
    pub fn from_record(record: &ShapeRecord) -> Result<Shape, ShapeError> {
        let tag = record.shape_type.as_deref().ok_or(ShapeError::MissingType)?;
        let kind =
            ShapeKind::from_tag(tag).ok_or_else(|| ShapeError::UnknownType(tag.to_string()))?;

        // Sorted so the reported key is stable when several are extra
        let mut extras: Vec<&String> = record
            .params
            .keys()
            .filter(|k| !kind.params().contains(&k.as_str()))
            .collect();
        extras.sort();
        if let Some(param) = extras.first() {
            return Err(ShapeError::UnexpectedParameter {
                kind,
                param: param.to_string(),
            });
        }

        let bind = |param: &'static str| -> Result<f64, ShapeError> {
            record
                .params
                .get(param)
                .ok_or(ShapeError::MissingParameter { kind, param })?
                .as_f64()
                .ok_or(ShapeError::InvalidParameter { kind, param })
        };

        let shape = match kind {
            ShapeKind::Circle => Shape::Circle {
                radius: bind("radius")?,
            },
            ShapeKind::Rectangle => Shape::Rectangle {
                width: bind("width")?,
                height: bind("height")?,
            },
            ShapeKind::Triangle => Shape::Triangle {
                base: bind("base")?,
                height: bind("height")?,
            },
            ShapeKind::Square => Shape::Square { side: bind("side")? },
        };

        Ok(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::f64::consts::PI;

    fn record(value: serde_json::Value) -> ShapeRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn builds_circle() {
        let shape = Shape::from_record(&record(json!({"type": "circle", "radius": 3}))).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Circle);
        assert!((shape.area() - 9.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn builds_rectangle() {
        let shape =
            Shape::from_record(&record(json!({"type": "rectangle", "width": 2, "height": 3})))
                .unwrap();
        assert_eq!(shape, Shape::Rectangle { width: 2.0, height: 3.0 });
    }

    #[test]
    fn builds_triangle() {
        let shape =
            Shape::from_record(&record(json!({"type": "triangle", "base": 4, "height": 5})))
                .unwrap();
        assert_eq!(shape.area(), 10.0);
    }

    #[test]
    fn builds_square() {
        let shape = Shape::from_record(&record(json!({"type": "square", "side": 4}))).unwrap();
        assert_eq!(shape.area(), 16.0);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = Shape::from_record(&record(json!({"type": "hexagon", "side": 2}))).unwrap_err();
        assert_eq!(err, ShapeError::UnknownType("hexagon".to_string()));
    }

    #[test]
    fn missing_type_is_rejected() {
        let err = Shape::from_record(&record(json!({"radius": 1}))).unwrap_err();
        assert_eq!(err, ShapeError::MissingType);
    }

    #[test]
    fn missing_parameter_is_rejected() {
        let err = Shape::from_record(&record(json!({"type": "rectangle", "width": 2}))).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingParameter {
                kind: ShapeKind::Rectangle,
                param: "height"
            }
        );
    }

    #[test]
    fn non_numeric_parameter_is_rejected() {
        let err =
            Shape::from_record(&record(json!({"type": "circle", "radius": "big"}))).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidParameter {
                kind: ShapeKind::Circle,
                param: "radius"
            }
        );
    }

    #[test]
    fn unexpected_parameter_is_rejected() {
        let err = Shape::from_record(&record(json!({"type": "square", "side": 2, "color": "red"})))
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::UnexpectedParameter {
                kind: ShapeKind::Square,
                param: "color".to_string()
            }
        );
    }

    #[test]
    fn negative_parameters_are_accepted() {
        let shape = Shape::from_record(&record(json!({"type": "circle", "radius": -1}))).unwrap();
        assert!((shape.area() - PI).abs() < 1e-12);
    }

    #[test]
    fn construction_is_idempotent() {
        let rec = record(json!({"type": "triangle", "base": 3.5, "height": 2.25}));
        let a = Shape::from_record(&rec).unwrap();
        let b = Shape::from_record(&rec).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.area(), b.area());
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = Shape::from_record(&record(json!({"type": "hexagon"}))).unwrap_err();
        assert_eq!(err.to_string(), "Unknown shape type: hexagon");

        let err = Shape::from_record(&record(json!({"type": "circle"}))).unwrap_err();
        assert_eq!(err.to_string(), "Missing parameter \"radius\" for Circle");
    }
}
