//! # Shape Rule Registry
//!
//! Maps a lower-cased shape keyword (`point`, `envelope`, ...) to the rule that parses
//! the rest of that shape's definition. The registry is the only extension point: new
//! shape types are added by registering a rule, never by touching the scanner or the
//! entry points.
//!
//! ## Usage Workflow
//! ```rust
//! use spatial_wkt::{build_default_shape_registry, SimpleShapeFactory, WktParser};
//! let registry = build_default_shape_registry::<SimpleShapeFactory>();
//! assert_eq!(registry.list(), vec!["envelope", "point"]);
//! let parser = WktParser::with_registry(SimpleShapeFactory, registry);
//! assert!(parser.parse("POINT (1 2)").is_ok());
//! ```

use std::fmt;

use im::HashMap;

use crate::diagnostics::WktError;
use crate::parser::WktParser;
use crate::rules;
use crate::shape::ShapeFactory;
use crate::syntax::ParseSession;

/// A grammar rule. Called with the keyword already consumed; must consume the shape's
/// own argument list and leave the session just past it.
///
/// The parser is passed in so a rule can reach the factory, or delegate a captured
/// sub-shape to [`WktParser::parse`].
pub type ShapeRule<F> =
    fn(&WktParser<F>, &mut ParseSession) -> Result<<F as ShapeFactory>::Shape, WktError>;

/// Keyword to rule lookup, inspectable at runtime.
pub struct ShapeRegistry<F: ShapeFactory> {
    rules: HashMap<String, ShapeRule<F>>,
}

impl<F: ShapeFactory> ShapeRegistry<F> {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registers `rule` under `keyword` (case-insensitive), returning any rule it replaces.
    pub fn register(&mut self, keyword: &str, rule: ShapeRule<F>) -> Option<ShapeRule<F>> {
        self.rules.insert(keyword.to_lowercase(), rule)
    }

    pub fn get(&self, keyword: &str) -> Option<&ShapeRule<F>> {
        self.rules.get(&keyword.to_lowercase())
    }

    pub fn has(&self, keyword: &str) -> bool {
        self.rules.contains_key(&keyword.to_lowercase())
    }

    pub fn remove(&mut self, keyword: &str) -> Option<ShapeRule<F>> {
        self.rules.remove(&keyword.to_lowercase())
    }

    /// Registered keywords, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut keywords: Vec<String> = self.rules.keys().cloned().collect();
        keywords.sort();
        keywords
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<F: ShapeFactory> Default for ShapeRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ShapeFactory> Clone for ShapeRegistry<F> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<F: ShapeFactory> fmt::Debug for ShapeRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeRegistry")
            .field("keywords", &self.list())
            .finish()
    }
}

/// Builds a registry holding the built-in `point` and `envelope` rules.
#[inline]
pub fn build_default_shape_registry<F: ShapeFactory>() -> ShapeRegistry<F> {
    let mut registry = ShapeRegistry::new();
    rules::register_builtin_rules(&mut registry);
    registry
}
