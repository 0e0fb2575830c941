use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured stars for the terminal (default)
    Terminal,
    /// Read-only formatter markup
    Html,
    /// Projection as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "starscore")]
#[command(about = "Five-star review score rendering and editing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Explicit config file (defaults to searching for .starscore.toml)
    #[arg(long, global = true, env = "STARSCORE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render stored scores read-only; empty values ("" or "-") are skipped
    Render {
        /// Stored score values (0-400)
        #[arg(required = true)]
        scores: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Row width in pixels (overrides config)
        #[arg(long)]
        width: Option<u32>,
    },

    /// Print the interactive widget markup for a form
    Widget {
        /// Initial stored score (omit for unset)
        #[arg(long)]
        score: Option<String>,

        /// Hidden input name
        #[arg(long, default_value = "review_score")]
        name: String,

        /// Leave out the reset button
        #[arg(long = "no-reset")]
        no_reset: bool,
    },

    /// Edit a score with the terminal widget
    Edit {
        /// Initial stored score (omit for unset)
        #[arg(long)]
        score: Option<String>,
    },

    /// Check that a stored value is a valid score
    Validate {
        /// Stored value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Initialize a .starscore.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// "-" is accepted on the command line as the unset value.
pub fn normalize_stored_arg(raw: &str) -> &str {
    if raw.trim() == "-" {
        ""
    } else {
        raw
    }
}
