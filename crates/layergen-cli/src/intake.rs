//! Interactive parameter intake.
//!
//! Validation is a pure function over the raw input line; the prompt
//! loop re-asks until it succeeds, so the generator never sees
//! unvalidated input.

use std::io::{self, BufRead, Write};

use layergen_core::errors::{ErrorInfo, LayergenError};

/// Parses one non-negative integer parameter from a raw input line.
///
/// Fails with a `Config` error carrying code `negative-value` for
/// negative integers and `not-an-integer` for anything unparseable.
pub fn parse_count(input: &str) -> Result<usize, LayergenError> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<usize>() {
        return Ok(value);
    }
    if trimmed.parse::<i64>().map(|v| v < 0).unwrap_or(false) {
        return Err(LayergenError::Config(
            ErrorInfo::new("negative-value", "value cannot be negative")
                .with_context("input", trimmed),
        ));
    }
    Err(LayergenError::Config(
        ErrorInfo::new("not-an-integer", "value must be a non-negative integer")
            .with_context("input", trimmed),
    ))
}

/// Prompts for one named parameter until a valid value is read.
///
/// Returns an I/O error only when the input stream ends or a read
/// fails; validation failures re-prompt instead.
pub fn prompt_count(
    label: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<usize> {
    writeln!(output, "Enter {label}:")?;
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended before a valid {label} was provided"),
            ));
        }
        match parse_count(&line) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(
                output,
                "{label} must be a non-negative integer ({}). Try again:",
                err.info().code
            )?,
        }
    }
}
