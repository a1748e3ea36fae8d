//! Canonical WKT output for the default [`Shape`] model.
//!
//! Numbers use Rust's shortest round-trip formatting (`1`, `0.1`, `1e300`, `-2.5e-7`),
//! all of which fall inside the grammar the scanner accepts, so re-parsing the output
//! reproduces the same values. Non-finite values have no WKT form and are written as
//! Rust prints them (`NaN`, `inf`), which the parser rejects.

use std::fmt::{self, Write};

use crate::shape::Shape;

/// Renders `shape` as WKT.
///
/// ```rust
/// use spatial_wkt::{to_wkt, Shape};
/// assert_eq!(to_wkt(&Shape::Point { x: 1.0, y: -0.5 }), "POINT (1 -0.5)");
/// ```
pub fn to_wkt(shape: &Shape) -> String {
    shape.to_string()
}

/// Writes `shape` as WKT into any formatter sink.
pub fn write_shape<W: Write>(out: &mut W, shape: &Shape) -> fmt::Result {
    match *shape {
        Shape::Point { x, y } => write!(out, "POINT ({} {})", Num(x), Num(y)),
        // ENVELOPE keeps the CQL argument order: minX, maxX, maxY, minY.
        Shape::Rectangle {
            min_x,
            max_x,
            min_y,
            max_y,
        } => write!(
            out,
            "ENVELOPE ({}, {}, {}, {})",
            Num(min_x),
            Num(max_x),
            Num(max_y),
            Num(min_y)
        ),
    }
}

struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:?}", self.0);
        f.write_str(text.strip_suffix(".0").unwrap_or(&text))
    }
}
