//! The `wkt` Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{info, warn, Level};

use crate::cli::args::{Command, InputArgs, OutputFormat, WktArgs};
use crate::parser::WktParser;
use crate::shape::SimpleShapeFactory;

pub mod args;
pub mod output;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// The main entry point for the CLI.
pub fn run() {
    let args = WktArgs::parse();
    init_logging(args.verbose, args.log_json);
    info!(?args, "parsed CLI arguments");

    let parser = WktParser::new(SimpleShapeFactory);

    // Dispatch to the appropriate subcommand handler.
    let result = match &args.command {
        Command::Parse { input, lenient } => handle_parse(&parser, input, *lenient, args.format),
        Command::Check { input } => handle_check(&parser, input, args.format),
        Command::Keywords => handle_keywords(&parser, args.format).map(|_| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn init_logging(verbose: u8, json: bool) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Collects the definitions to process. File and stdin input skip blank lines.
fn read_inputs(input: &InputArgs) -> CliResult<Vec<String>> {
    if !input.shapes.is_empty() {
        return Ok(input.shapes.clone());
    }
    let lines = match input.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            info!(path = %path.display(), "reading shape definitions from file");
            fs::read_to_string(path)?
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        }
        _ => {
            info!("reading shape definitions from stdin");
            io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
        }
    };
    Ok(lines.into_iter().filter(|l| !l.trim().is_empty()).collect())
}

/// Handles the `parse` subcommand. Returns whether every input parsed.
fn handle_parse(
    parser: &WktParser<SimpleShapeFactory>,
    input: &InputArgs,
    lenient: bool,
    format: OutputFormat,
) -> CliResult<bool> {
    let inputs = read_inputs(input)?;
    let mut out = output::stdout();
    let mut all_ok = true;

    for text in &inputs {
        let result = if lenient {
            parser.parse_if_supported(text)
        } else {
            parser.parse(text).map(Some)
        };
        match (result, format) {
            (Ok(Some(shape)), OutputFormat::Text) => output::print_shape(&mut out, &shape)?,
            (Ok(Some(shape)), OutputFormat::Json) => {
                output::print_json(&mut out, &output::ParseOutcome::parsed(text, &shape))?
            }
            (Ok(None), OutputFormat::Text) => output::print_unsupported(&mut out, text)?,
            (Ok(None), OutputFormat::Json) => {
                output::print_json(&mut out, &output::ParseOutcome::unsupported(text))?
            }
            (Err(e), fmt) => {
                all_ok = false;
                warn!(offset = e.offset(), "failed to parse shape definition");
                match fmt {
                    OutputFormat::Text => output::print_error(&e),
                    OutputFormat::Json => {
                        output::print_json(&mut out, &output::ParseOutcome::failed(text, &e))?
                    }
                }
            }
        }
    }
    Ok(all_ok)
}

/// Handles the `check` subcommand. Returns whether every input was well formed.
fn handle_check(
    parser: &WktParser<SimpleShapeFactory>,
    input: &InputArgs,
    format: OutputFormat,
) -> CliResult<bool> {
    let inputs = read_inputs(input)?;
    let mut out = output::stdout();
    let mut invalid = 0;

    for text in &inputs {
        if let Err(e) = parser.parse(text) {
            invalid += 1;
            match format {
                OutputFormat::Text => output::print_error(&e),
                OutputFormat::Json => {
                    output::print_json(&mut out, &output::ParseOutcome::failed(text, &e))?
                }
            }
        }
    }
    if format == OutputFormat::Text {
        output::print_summary(&mut out, inputs.len() - invalid, invalid)?;
    }
    Ok(invalid == 0)
}

/// Handles the `keywords` subcommand.
fn handle_keywords(parser: &WktParser<SimpleShapeFactory>, format: OutputFormat) -> CliResult<()> {
    let keywords = parser.registry().list();
    match format {
        OutputFormat::Text => {
            for keyword in keywords {
                println!("{}", keyword.to_uppercase());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&keywords)?),
    }
    Ok(())
}
