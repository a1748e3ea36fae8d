//! # Built-in Shape Rules
//!
//! One module per shape keyword. Each rule parses its own parenthesized argument list
//! with the scanner and the coordinate reader, then asks the parser's factory for the
//! shape.
//!
//! - **`point`**: `POINT (x y)`
//! - **`envelope`**: `ENVELOPE (minX, maxX, maxY, minY)`

use crate::registry::ShapeRegistry;
use crate::shape::ShapeFactory;

pub mod envelope;
pub mod point;

/// Registers every built-in rule with `registry`.
pub fn register_builtin_rules<F: ShapeFactory>(registry: &mut ShapeRegistry<F>) {
    registry.register(point::KEYWORD, point::parse_point::<F>);
    registry.register(envelope::KEYWORD, envelope::parse_envelope::<F>);
}
