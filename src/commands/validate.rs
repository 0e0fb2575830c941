use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::cli::normalize_stored_arg;
use crate::score::{parse_stored, Score};

/// Check one stored value. Invalid values are returned as errors carrying
/// the user-facing range message.
pub fn validate_value<W: Write>(out: &mut W, raw: &str) -> Result<Score> {
    let score = parse_stored(normalize_stored_arg(raw))?;
    match score {
        Some(score) => writeln!(out, "{} {}", "✓".green(), score)?,
        None => writeln!(out, "{} unset", "✓".green())?,
    }
    Ok(score)
}
