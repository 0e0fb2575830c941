//! CLI command implementations.
//!
//! Available commands:
//! - **render**: read-only star rows for stored scores
//! - **widget**: interactive widget markup for a form
//! - **edit**: terminal widget, prints the committed value
//! - **validate**: check a stored value against the score range
//! - **init**: write a default `.starscore.toml`
//!
//! Commands write to a caller-supplied writer so they can be tested
//! without a process boundary.

pub mod edit;
pub mod init;
pub mod render;
pub mod validate;
pub mod widget;

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::normalize_stored_arg;
use crate::config::{load_config, load_config_from, StarscoreConfig};
use crate::score::{parse_stored, Score};

pub use edit::edit_score;
pub use init::init_config;
pub use render::{render_scores, RenderOptions};
pub use validate::validate_value;
pub use widget::print_widget;

/// Explicit config path is strict; otherwise search with fallback to defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<StarscoreConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Parse an optional command-line score argument.
pub fn parse_score_arg(raw: Option<&str>) -> Result<Score> {
    match raw {
        None => Ok(None),
        Some(raw) => parse_stored(normalize_stored_arg(raw))
            .with_context(|| format!("Invalid score '{}'", raw)),
    }
}
