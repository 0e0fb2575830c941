use anyhow::Result;
use clap::Parser;
use starscore::cli::{Cli, Commands};
use starscore::commands::{self, RenderOptions};
use starscore::observability::{init_logging, install_panic_hook};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Render {
            scores,
            format,
            width,
        } => {
            let config = commands::resolve_config(cli.config.as_deref())?;
            let display = match width {
                Some(width) => config.display.with_width(width),
                None => config.display,
            };
            let options = RenderOptions {
                scores,
                format,
                display,
            };
            commands::render_scores(&mut stdout, &options)?;
        }
        Commands::Widget {
            score,
            name,
            no_reset,
        } => {
            let config = commands::resolve_config(cli.config.as_deref())?;
            let initial = commands::parse_score_arg(score.as_deref())?;
            commands::print_widget(&mut stdout, initial, &name, !no_reset, &config.display)?;
        }
        Commands::Edit { score } => {
            let initial = commands::parse_score_arg(score.as_deref())?;
            install_panic_hook();
            commands::edit_score(&mut stdout, initial)?;
        }
        Commands::Validate { value } => {
            commands::validate_value(&mut stdout, &value)?;
        }
        Commands::Init { force } => {
            let dir = std::env::current_dir()?;
            commands::init_config(&mut stdout, &dir, force)?;
        }
    }

    Ok(())
}
