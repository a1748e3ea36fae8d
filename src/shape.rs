//! Shape construction.
//!
//! The parser never builds shapes itself; it hands the numbers it read to a
//! [`ShapeFactory`]. [`SimpleShapeFactory`] produces the plain [`Shape`] values used by
//! the command-line tool, and any other geometry model can be plugged in by
//! implementing the trait.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Materializes shapes from parsed coordinates.
pub trait ShapeFactory {
    type Shape;

    fn make_point(&self, x: f64, y: f64) -> Self::Shape;

    fn make_rectangle(&self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self::Shape;
}

/// The default shape model.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Point {
        x: f64,
        y: f64,
    },
    Rectangle {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point { .. } => "point",
            Shape::Rectangle { .. } => "rectangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::writer::write_shape(f, self)
    }
}

/// Builds [`Shape`] values verbatim, without range or ordering checks.
#[derive(Debug, Copy, Clone, Default)]
pub struct SimpleShapeFactory;

impl ShapeFactory for SimpleShapeFactory {
    type Shape = Shape;

    fn make_point(&self, x: f64, y: f64) -> Shape {
        Shape::Point { x, y }
    }

    fn make_rectangle(&self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Shape {
        Shape::Rectangle {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_factory() {
        let factory = SimpleShapeFactory;
        assert_eq!(factory.make_point(1.0, 2.0), Shape::Point { x: 1.0, y: 2.0 });
        let rect = factory.make_rectangle(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.kind(), "rectangle");
        assert_eq!(
            rect,
            Shape::Rectangle {
                min_x: 1.0,
                max_x: 2.0,
                min_y: 3.0,
                max_y: 4.0
            }
        );
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&Shape::Point { x: 1.5, y: -2.0 }).unwrap();
        assert_eq!(json, r#"{"type":"point","x":1.5,"y":-2.0}"#);
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Shape::Point { x: 1.5, y: -2.0 });
    }
}
