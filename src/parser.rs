//! Entry points and keyword routing.
//!
//! A [`WktParser`] holds configuration only: the shape factory and the rule registry.
//! Each call to [`parse`](WktParser::parse) or
//! [`parse_if_supported`](WktParser::parse_if_supported) scans through its own
//! [`ParseSession`], so one parser can be shared across threads and may be re-entered
//! from inside a rule.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::diagnostics::WktError;
use crate::registry::{build_default_shape_registry, ShapeRegistry, ShapeRule};
use crate::shape::ShapeFactory;
use crate::syntax::ParseSession;

/// Name given to the input text in rendered diagnostics.
const SOURCE_NAME: &str = "wkt";

/// Inputs longer than this are shortened when echoed in an error message.
const MAX_ECHO_CHARS: usize = 128;

/// An extensible Well-Known-Text shape parser.
///
/// ```rust
/// use spatial_wkt::{Shape, SimpleShapeFactory, WktParser};
/// let parser = WktParser::new(SimpleShapeFactory);
/// assert_eq!(parser.parse("POINT (1 2)").unwrap(), Shape::Point { x: 1.0, y: 2.0 });
/// assert_eq!(parser.parse_if_supported("TRIANGLE (1 2, 3 4)").unwrap(), None);
/// ```
pub struct WktParser<F: ShapeFactory> {
    factory: F,
    registry: ShapeRegistry<F>,
}

impl<F: ShapeFactory> WktParser<F> {
    /// Creates a parser with the built-in `POINT` and `ENVELOPE` rules.
    pub fn new(factory: F) -> Self {
        Self::with_registry(factory, build_default_shape_registry())
    }

    pub fn with_registry(factory: F, registry: ShapeRegistry<F>) -> Self {
        Self { factory, registry }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn registry(&self) -> &ShapeRegistry<F> {
        &self.registry
    }

    /// Adds (or replaces) the rule for `keyword`.
    pub fn register(&mut self, keyword: &str, rule: ShapeRule<F>) -> &mut Self {
        self.registry.register(keyword, rule);
        self
    }

    /// Parses `text`, failing if it is not a recognized, well-formed shape.
    pub fn parse(&self, text: &str) -> Result<F::Shape, WktError> {
        let mut session = ParseSession::new(text);
        match self.parse_session(&mut session) {
            Ok(Some(shape)) => Ok(shape),
            Ok(None) => Err(WktError::unknown_shape(shorten(text), session.offset())
                .with_source(SOURCE_NAME, session.text())),
            Err(e) => Err(e.with_source(SOURCE_NAME, session.text())),
        }
    }

    /// Parses `text`, returning `Ok(None)` when it is blank, does not start with a
    /// keyword, or names a shape no rule is registered for.
    pub fn parse_if_supported(&self, text: &str) -> Result<Option<F::Shape>, WktError> {
        let mut session = ParseSession::new(text);
        self.parse_session(&mut session)
            .map_err(|e| e.with_source(SOURCE_NAME, session.text()))
    }

    /// Dispatches to the rule registered for `keyword`; `Ok(None)` if there is none.
    pub fn route_shape(
        &self,
        keyword: &str,
        session: &mut ParseSession,
    ) -> Result<Option<F::Shape>, WktError> {
        let keyword = keyword.to_lowercase();
        match self.registry.get(&keyword) {
            Some(rule) => {
                debug!(keyword = %keyword, offset = session.offset(), "dispatching shape rule");
                rule(self, session).map(Some)
            }
            None => {
                trace!(keyword = %keyword, "no shape rule registered");
                Ok(None)
            }
        }
    }

    fn parse_session(&self, session: &mut ParseSession) -> Result<Option<F::Shape>, WktError> {
        session.skip_whitespace();
        match session.peek() {
            None => {
                trace!("blank input is not a shape");
                return Ok(None);
            }
            Some(ch) if !ch.is_alphabetic() => {
                trace!(found = %ch, "input does not start with a shape keyword");
                return Ok(None);
            }
            Some(_) => {}
        }
        let keyword = session.read_word()?.to_string();
        let result = self.route_shape(&keyword, session)?;
        if result.is_some() && !session.is_eof() {
            return Err(WktError::end_of_shape_expected(session.offset()));
        }
        Ok(result)
    }
}

impl<F: ShapeFactory + Default> Default for WktParser<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: ShapeFactory + Clone> Clone for WktParser<F> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            registry: self.registry.clone(),
        }
    }
}

impl<F: ShapeFactory + std::fmt::Debug> std::fmt::Debug for WktParser<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WktParser")
            .field("factory", &self.factory)
            .field("registry", &self.registry)
            .finish()
    }
}

fn shorten(text: &str) -> Cow<'_, str> {
    if text.chars().count() <= MAX_ECHO_CHARS {
        return Cow::Borrowed(text);
    }
    let head: String = text.chars().take(MAX_ECHO_CHARS - 3).collect();
    Cow::Owned(format!("{head}..."))
}
