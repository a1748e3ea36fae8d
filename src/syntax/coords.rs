//! Coordinate reader built on the scanner primitives.
//!
//! ```text
//! Coordinate:         number number
//! CoordinateSequence: '(' Coordinate (',' Coordinate)* ')'
//! ```

use serde::{Deserialize, Serialize};

use crate::diagnostics::WktError;
use crate::syntax::ParseSession;

/// An (x, y) pair. Range and axis meaning belong to the shape factory.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl ParseSession {
    /// Reads two numbers with no separator between them.
    pub fn read_coordinate(&mut self) -> Result<Coord, WktError> {
        let x = self.read_number()?;
        let y = self.read_number()?;
        Ok(Coord { x, y })
    }

    /// Reads a parenthesized, comma-separated list holding at least one coordinate.
    pub fn read_coordinate_sequence(&mut self) -> Result<Vec<Coord>, WktError> {
        let mut sequence = Vec::new();
        self.expect('(')?;
        loop {
            sequence.push(self.read_coordinate()?);
            if !self.consume_if_present(',') {
                break;
            }
        }
        self.expect(')')?;
        Ok(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;

    #[test]
    fn test_read_coordinate() {
        let mut session = ParseSession::new("1.5   -2e1)");
        assert_eq!(session.read_coordinate().unwrap(), Coord::new(1.5, -20.0));
        assert_eq!(session.peek(), Some(')'));
    }

    #[test]
    fn test_read_coordinate_missing_y() {
        let mut session = ParseSession::new("1 )");
        let err = session.read_coordinate().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NumberExpected);
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn test_read_sequence_keeps_order() {
        let mut session = ParseSession::new("(0 0, 1 0 ,1 1,0 0) tail");
        let coords = session.read_coordinate_sequence().unwrap();
        assert_eq!(
            coords,
            vec![
                Coord::new(0.0, 0.0),
                Coord::new(1.0, 0.0),
                Coord::new(1.0, 1.0),
                Coord::new(0.0, 0.0),
            ]
        );
        assert_eq!(session.remaining(), "tail");
    }

    #[test]
    fn test_read_sequence_single_element() {
        let mut session = ParseSession::new("(3 4)");
        assert_eq!(session.read_coordinate_sequence().unwrap(), vec![Coord::new(3.0, 4.0)]);
        assert!(session.is_eof());
    }

    #[test]
    fn test_read_sequence_requires_one_coordinate() {
        let mut session = ParseSession::new("()");
        let err = session.read_coordinate_sequence().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NumberExpected);
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_read_sequence_unclosed() {
        let mut session = ParseSession::new("(1 2, 3 4");
        let err = session.read_coordinate_sequence().unwrap_err();
        assert_eq!(err.message(), "expected ')', found end-of-input");
        assert_eq!(err.offset(), 9);
    }
}
