//! # WKT Diagnostics
//!
//! Every failure produced while reading a shape definition is a [`WktError`]: the text
//! matched a known keyword but its body was syntactically wrong, trailing characters
//! followed a complete shape, or `parse` was handed something no rule recognizes.
//!
//! "Not recognized" is *not* an error. [`crate::WktParser::parse_if_supported`] reports
//! it as `Ok(None)` so callers can chain several parsers.
//!
//! ## Construction
//!
//! - Use the per-kind helpers (`WktError::word_expected`, `WktError::unexpected_char`, ...)
//!   inside the scanner.
//! - Use [`err_at!`](crate::err_at) from shape rules that need their own message.
//! - Entry points attach the normalized input with [`WktError::with_source`] so that
//!   `miette` reports can point at the failing offset.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

pub type SourceArc = Arc<NamedSource<String>>;

/// What went wrong. The `Display` text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    #[error("word expected")]
    WordExpected,
    #[error("number expected")]
    NumberExpected,
    #[error("invalid number literal '{literal}'")]
    InvalidNumber { literal: String },
    #[error("expected '{expected}', found {}", describe_found(.found))]
    UnexpectedChar { expected: char, found: Option<char> },
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("end of shape expected")]
    EndOfShapeExpected,
    #[error("unknown shape definition [{text}]")]
    UnknownShape { text: String },
    /// Free-form message raised by an extension rule.
    #[error("{0}")]
    Custom(String),
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("'{ch}'"),
        None => "end-of-input".to_string(),
    }
}

impl ErrorKind {
    /// Suffix for the diagnostic code (`wkt::<suffix>`).
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::WordExpected => "word_expected",
            Self::NumberExpected => "number_expected",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::UnexpectedChar { .. } => "unexpected_char",
            Self::UnbalancedParenthesis => "unbalanced_parenthesis",
            Self::EndOfShapeExpected => "end_of_shape_expected",
            Self::UnknownShape { .. } => "unknown_shape",
            Self::Custom(_) => "malformed_input",
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            Self::InvalidNumber { .. } => {
                Some("numbers are an optional sign, digits, an optional fraction and an optional exponent, e.g. -1.5e3")
            }
            Self::UnbalancedParenthesis => Some("every '(' needs a matching ')'"),
            Self::EndOfShapeExpected => Some("remove the characters following the closing ')'"),
            Self::UnknownShape { .. } => Some("shape definitions start with a keyword such as POINT or ENVELOPE"),
            _ => None,
        }
    }
}

/// A malformed-input error at a byte offset of the normalized (lower-cased) input.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct WktError {
    kind: ErrorKind,
    offset: usize,
    src: Option<SourceArc>,
}

impl WktError {
    pub fn malformed(kind: ErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset,
            src: None,
        }
    }

    pub fn custom(message: impl Into<String>, offset: usize) -> Self {
        Self::malformed(ErrorKind::Custom(message.into()), offset)
    }

    pub fn word_expected(offset: usize) -> Self {
        Self::malformed(ErrorKind::WordExpected, offset)
    }

    pub fn number_expected(offset: usize) -> Self {
        Self::malformed(ErrorKind::NumberExpected, offset)
    }

    pub fn invalid_number(literal: &str, offset: usize) -> Self {
        Self::malformed(
            ErrorKind::InvalidNumber {
                literal: literal.to_string(),
            },
            offset,
        )
    }

    pub fn unexpected_char(expected: char, found: Option<char>, offset: usize) -> Self {
        Self::malformed(ErrorKind::UnexpectedChar { expected, found }, offset)
    }

    pub fn unbalanced_parenthesis(offset: usize) -> Self {
        Self::malformed(ErrorKind::UnbalancedParenthesis, offset)
    }

    pub fn end_of_shape_expected(offset: usize) -> Self {
        Self::malformed(ErrorKind::EndOfShapeExpected, offset)
    }

    pub fn unknown_shape(text: impl Into<String>, offset: usize) -> Self {
        Self::malformed(ErrorKind::UnknownShape { text: text.into() }, offset)
    }

    /// Attaches the text the offset refers to. An already attached source is kept,
    /// so errors bubbling out of a delegated sub-parse still point into the text
    /// they were raised against.
    pub fn with_source(mut self, name: &str, text: &str) -> Self {
        if self.src.is_none() {
            self.src = Some(Arc::new(NamedSource::new(name, text.to_string())));
        }
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn source_text(&self) -> Option<&str> {
        self.src.as_ref().map(|s| s.inner().as_str())
    }
}

impl Diagnostic for WktError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(format!("wkt::{}", self.kind.code_suffix())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.kind
            .help()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.src.as_ref().map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let src = self.src.as_ref()?;
        // Point at one character, or at nothing when the failure is at end of input
        // or the offset does not fall on a character boundary.
        let len = src
            .inner()
            .get(self.offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        let label = LabeledSpan::new(Some(self.kind.to_string()), self.offset, len);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Builds a [`WktError`] with a formatted message at the session's current offset.
///
/// Intended for extension rules:
///
/// ```rust
/// use spatial_wkt::{err_at, ParseSession};
/// let session = ParseSession::new("polygon ((1 2))");
/// let err = err_at!(session, "ring needs at least {} points", 4);
/// assert_eq!(err.message(), "ring needs at least 4 points");
/// ```
#[macro_export]
macro_rules! err_at {
    ($session:expr, $msg:expr) => {
        $crate::WktError::custom(format!("{}", $msg), $session.offset())
    };
    ($session:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $crate::WktError::custom(format!($fmt, $($arg),+), $session.offset())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Report;

    #[test]
    fn test_messages() {
        assert_eq!(WktError::word_expected(0).to_string(), "word expected");
        assert_eq!(
            WktError::unexpected_char(')', None, 10).to_string(),
            "expected ')', found end-of-input"
        );
        assert_eq!(
            WktError::unexpected_char(',', Some(')'), 15).to_string(),
            "expected ',', found ')'"
        );
        assert_eq!(
            WktError::invalid_number("1-2", 3).to_string(),
            "invalid number literal '1-2'"
        );
    }

    #[test]
    fn test_with_source_keeps_first_source() {
        let err = WktError::end_of_shape_expected(2)
            .with_source("inner", "ab")
            .with_source("outer", "abcdef");
        assert_eq!(err.source_text(), Some("ab"));
    }

    #[test]
    fn test_report_renders_code_label_and_help() {
        let err = WktError::end_of_shape_expected(12).with_source("wkt", "point (1 2) extra");
        let output = format!("{:?}", Report::new(err));
        assert!(output.contains("wkt::end_of_shape_expected"));
        assert!(output.contains("end of shape expected"));
        assert!(output.contains("remove the characters"));
    }

    #[test]
    fn test_label_at_end_of_input() {
        let err = WktError::unexpected_char(')', None, 10).with_source("wkt", "point (1 2");
        let labels: Vec<_> = err.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 10);
        assert_eq!(labels[0].len(), 0);
    }

    #[test]
    fn test_label_inside_multibyte_char_is_zero_width() {
        // Byte 1 is the second byte of 'é'.
        let err = WktError::custom("bad", 1).with_source("wkt", "été");
        let labels: Vec<_> = err.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 1);
        assert_eq!(labels[0].len(), 0);
    }

    #[test]
    fn test_label_past_end_is_zero_width() {
        let err = WktError::custom("bad", 10).with_source("wkt", "abc");
        let labels: Vec<_> = err.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 10);
        assert_eq!(labels[0].len(), 0);
    }

    #[test]
    fn test_label_covers_whole_multibyte_char() {
        let err = WktError::custom("bad", 2).with_source("wkt", "été");
        let labels: Vec<_> = err.labels().unwrap().collect();
        assert_eq!(labels[0].len(), 't'.len_utf8());
        let err = WktError::custom("bad", 0).with_source("wkt", "été");
        let labels: Vec<_> = err.labels().unwrap().collect();
        assert_eq!(labels[0].len(), 'é'.len_utf8());
    }

    #[test]
    fn test_no_labels_without_source() {
        assert!(WktError::number_expected(4).labels().is_none());
    }
}
