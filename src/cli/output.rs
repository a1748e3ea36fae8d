//! Handles all user-facing output for the CLI.
//!
//! Successful results go to stdout, as colored text or as one JSON object per input.
//! Parse failures are rendered on stderr as `miette` reports in text mode, and as
//! JSON objects on stdout in JSON mode so a consumer sees every input's outcome.

use std::io::{self, Write};

use miette::Report;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::WktError;
use crate::shape::Shape;
use crate::writer::to_wkt;

/// The outcome of one input line, as serialized in JSON mode.
#[derive(Debug, Serialize)]
pub struct ParseOutcome<'a> {
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<&'a Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorOutput>,
    pub supported: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    pub code: &'static str,
    pub message: String,
    pub offset: usize,
}

impl From<&WktError> for ErrorOutput {
    fn from(err: &WktError) -> Self {
        Self {
            code: err.kind().code_suffix(),
            message: err.message(),
            offset: err.offset(),
        }
    }
}

impl<'a> ParseOutcome<'a> {
    pub fn parsed(input: &'a str, shape: &'a Shape) -> Self {
        Self {
            input,
            shape: Some(shape),
            wkt: Some(to_wkt(shape)),
            error: None,
            supported: true,
        }
    }

    pub fn unsupported(input: &'a str) -> Self {
        Self {
            input,
            shape: None,
            wkt: None,
            error: None,
            supported: false,
        }
    }

    pub fn failed(input: &'a str, err: &WktError) -> Self {
        Self {
            input,
            shape: None,
            wkt: None,
            error: Some(err.into()),
            supported: true,
        }
    }
}

/// Colored stdout, falling back to plain text when stdout is not a terminal.
pub fn stdout() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Prints a parsed shape as `<kind>  <canonical wkt>`.
pub fn print_shape(out: &mut StandardStream, shape: &Shape) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{:<10}", shape.kind())?;
    out.reset()?;
    writeln!(out, " {}", to_wkt(shape))
}

/// Prints a note that `input` names no registered shape.
pub fn print_unsupported(out: &mut StandardStream, input: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, "{:<10}", "unsupported")?;
    out.reset()?;
    writeln!(out, " {}", input.trim())
}

/// Prints one outcome as a JSON line.
pub fn print_json(out: &mut impl Write, outcome: &ParseOutcome<'_>) -> io::Result<()> {
    let line = serde_json::to_string(outcome).map_err(io::Error::other)?;
    writeln!(out, "{line}")
}

/// Renders a parse failure as a `miette` report on stderr.
pub fn print_error(err: &WktError) {
    eprintln!("{:?}", Report::new(err.clone()));
}

/// Prints the `check` summary line.
pub fn print_summary(out: &mut StandardStream, valid: usize, invalid: usize) -> io::Result<()> {
    let color = if invalid == 0 { Color::Green } else { Color::Red };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    writeln!(out, "{valid} valid, {invalid} invalid")?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_json_shapes() {
        let shape = Shape::Point { x: 1.0, y: 2.0 };
        let json = serde_json::to_string(&ParseOutcome::parsed("POINT (1 2)", &shape)).unwrap();
        assert_eq!(
            json,
            r#"{"input":"POINT (1 2)","shape":{"type":"point","x":1.0,"y":2.0},"wkt":"POINT (1 2)","supported":true}"#
        );

        let json = serde_json::to_string(&ParseOutcome::unsupported("circle (1)")).unwrap();
        assert_eq!(json, r#"{"input":"circle (1)","supported":false}"#);
    }

    #[test]
    fn test_failed_outcome_carries_offset() {
        let err = WktError::end_of_shape_expected(12);
        let outcome = ParseOutcome::failed("POINT (1 2) extra", &err);
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains(r#""code":"end_of_shape_expected""#));
        assert!(json.contains(r#""offset":12"#));
    }
}
