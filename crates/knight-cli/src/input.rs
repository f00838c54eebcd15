//! Resolving the start and end squares from flags, config, or prompts.

use crate::config::PathConfig;
use anyhow::Context;
use knight_core::{from_algebraic, Square};
use std::io::{BufRead, Write};
use std::path::Path;

/// Raw start and end tokens before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionInput {
    pub start: String,
    pub end: String,
}

/// Picks the position tokens.
///
/// A config file replaces both flags. If either token is still missing, both
/// are read interactively from `input`, with prompts written to `output`.
pub fn gather_positions<R: BufRead, W: Write>(
    start: Option<String>,
    end: Option<String>,
    config: Option<&Path>,
    input: R,
    output: W,
) -> anyhow::Result<PositionInput> {
    let (start, end) = match config {
        Some(path) => {
            let config = PathConfig::load(path).context("Error reading config file")?;
            let (start, end) = config.positions()?;
            tracing::debug!(path = %path.display(), "loaded positions from config");
            (Some(start.to_string()), Some(end.to_string()))
        }
        None => (start, end),
    };

    match (start, end) {
        (Some(start), Some(end)) => Ok(PositionInput { start, end }),
        _ => prompt_positions(input, output).context("failed to read positions"),
    }
}

/// Asks for both positions on the terminal.
pub fn prompt_positions<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> std::io::Result<PositionInput> {
    writeln!(
        output,
        "Enter chess positions using algebraic notation (e.g., a1, h8)."
    )?;
    let start = prompt(&mut input, &mut output, "Enter the start position: ")?;
    let end = prompt(&mut input, &mut output, "Enter the end position: ")?;
    Ok(PositionInput { start, end })
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> std::io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parses both tokens into squares.
pub fn parse_positions(positions: &PositionInput) -> anyhow::Result<(Square, Square)> {
    const HINT: &str = "Invalid position format. Use algebraic notation (e.g., a1, h8).";
    let start = from_algebraic(&positions.start).context(HINT)?;
    let end = from_algebraic(&positions.end).context(HINT)?;
    Ok((start, end))
}
