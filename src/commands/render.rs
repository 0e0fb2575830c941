use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::cli::{normalize_stored_arg, OutputFormat};
use crate::config::DisplayConfig;
use crate::render::html::HtmlRenderer;
use crate::render::terminal::AnsiRenderer;
use crate::render::{project_items, RatingProjection, StarRenderer};
use crate::score::{parse_stored, Score};

/// Inputs for the render command.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub scores: Vec<String>,
    pub format: OutputFormat,
    pub display: DisplayConfig,
}

#[derive(Serialize)]
struct RenderedItem<'a> {
    delta: usize,
    #[serde(flatten)]
    projection: &'a RatingProjection,
}

/// Render every defined score; unset entries are skipped.
pub fn render_scores<W: Write>(out: &mut W, options: &RenderOptions) -> Result<()> {
    options.display.validate()?;
    log::debug!("Display settings: {}", options.display.summary());

    let items = options
        .scores
        .iter()
        .map(|raw| {
            parse_stored(normalize_stored_arg(raw))
                .with_context(|| format!("Invalid score '{}'", raw))
        })
        .collect::<Result<Vec<Score>>>()?;

    let projected = project_items(&items);
    log::debug!("Rendering {} of {} items", projected.len(), items.len());

    match options.format {
        OutputFormat::Terminal => {
            let renderer = AnsiRenderer { show_label: true };
            for (_, projection) in &projected {
                writeln!(out, "{}", renderer.row(projection))?;
            }
        }
        OutputFormat::Html => {
            let renderer = HtmlRenderer::new(options.display.clone());
            for (_, projection) in &projected {
                writeln!(out, "{}", renderer.row(projection))?;
            }
        }
        OutputFormat::Json => {
            let rendered: Vec<RenderedItem> = projected
                .iter()
                .map(|(delta, projection)| RenderedItem {
                    delta: *delta,
                    projection,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rendered)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
