//! `ENVELOPE '(' x1 ',' x2 ',' y2 ',' y1 ')'`
//!
//! Not part of standard WKT: this is the envelope of OGC CQL (Catalogue Services),
//! whose arguments run minX, maxX, maxY, minY.

use crate::diagnostics::WktError;
use crate::parser::WktParser;
use crate::shape::ShapeFactory;
use crate::syntax::ParseSession;

pub const KEYWORD: &str = "envelope";

pub fn parse_envelope<F: ShapeFactory>(
    parser: &WktParser<F>,
    session: &mut ParseSession,
) -> Result<F::Shape, WktError> {
    session.expect('(')?;
    let x1 = session.read_number()?;
    session.expect(',')?;
    let x2 = session.read_number()?;
    session.expect(',')?;
    let y2 = session.read_number()?;
    session.expect(',')?;
    let y1 = session.read_number()?;
    session.expect(')')?;
    // The factory takes (minX, maxX, minY, maxY).
    Ok(parser.factory().make_rectangle(x1, x2, y1, y2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Shape, SimpleShapeFactory};

    #[test]
    fn test_y_order_is_swapped_for_factory() {
        let parser = WktParser::new(SimpleShapeFactory);
        let mut session = ParseSession::new("(-10, 10, 20, -20)");
        assert_eq!(
            parse_envelope(&parser, &mut session).unwrap(),
            Shape::Rectangle {
                min_x: -10.0,
                max_x: 10.0,
                min_y: -20.0,
                max_y: 20.0
            }
        );
        assert!(session.is_eof());
    }

    #[test]
    fn test_space_separated_arguments_are_rejected() {
        let parser = WktParser::new(SimpleShapeFactory);
        let mut session = ParseSession::new("(1 2 3 4)");
        let err = parse_envelope(&parser, &mut session).unwrap_err();
        assert_eq!(err.message(), "expected ',', found '2'");
        assert_eq!(err.offset(), 3);
    }
}
