//! `POINT '(' coordinate ')'`

use crate::diagnostics::WktError;
use crate::parser::WktParser;
use crate::shape::ShapeFactory;
use crate::syntax::ParseSession;

pub const KEYWORD: &str = "point";

pub fn parse_point<F: ShapeFactory>(
    parser: &WktParser<F>,
    session: &mut ParseSession,
) -> Result<F::Shape, WktError> {
    session.expect('(')?;
    let coord = session.read_coordinate()?;
    session.expect(')')?;
    Ok(parser.factory().make_point(coord.x, coord.y))
}
