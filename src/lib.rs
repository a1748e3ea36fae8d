//! # spatial-wkt
//!
//! An extensible parser for [Well-Known Text](http://en.wikipedia.org/wiki/Well-known_text)
//! shape definitions.
//!
//! ```text
//! POINT (x y)
//! ENVELOPE (minX, maxX, maxY, minY)
//! ```
//!
//! Further shape keywords are added by registering a [`ShapeRule`] with a
//! [`ShapeRegistry`]; rules are written against the [`ParseSession`] scanner primitives.

pub use crate::diagnostics::{ErrorKind, WktError};
pub use crate::parser::WktParser;
pub use crate::registry::{build_default_shape_registry, ShapeRegistry, ShapeRule};
pub use crate::shape::{Shape, ShapeFactory, SimpleShapeFactory};
pub use crate::syntax::{Coord, ParseSession};
pub use crate::writer::to_wkt;

pub mod cli;
pub mod diagnostics;
pub mod parser;
pub mod registry;
pub mod rules;
pub mod shape;
pub mod syntax;
pub mod writer;
