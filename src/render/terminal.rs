//! Terminal backends: ratatui spans for the TUI and coloured strings for
//! plain stdout.

use super::{RatingProjection, StarRenderer, StarVisual};
use crate::tui::theme::Theme;
use colored::Colorize;
use ratatui::text::{Line, Span};

const FULL_GLYPH: &str = "★";
const EMPTY_GLYPH: &str = "☆";
const PARTIAL_GLYPH: &str = "⯪";

fn glyph(visual: &StarVisual) -> &'static str {
    match visual {
        StarVisual::Full => FULL_GLYPH,
        StarVisual::Empty => EMPTY_GLYPH,
        StarVisual::Partial(_) => PARTIAL_GLYPH,
    }
}

/// Renders stars as ratatui lines, one styled span per star.
pub struct TerminalRenderer {
    theme: Theme,
}

impl TerminalRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Stars only, spaced for mouse targeting.
    pub fn stars(&self, visuals: &[StarVisual]) -> Line<'static> {
        let mut spans = Vec::with_capacity(visuals.len() * 2);
        for (i, visual) in visuals.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.extend(self.star(visual).spans);
        }
        Line::from(spans)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(Theme::default_theme())
    }
}

impl StarRenderer for TerminalRenderer {
    type Node = Line<'static>;

    fn star(&self, visual: &StarVisual) -> Line<'static> {
        let style = match visual {
            StarVisual::Full => self.theme.full_star_style(),
            StarVisual::Empty => self.theme.empty_star_style(),
            StarVisual::Partial(_) => self.theme.partial_star_style(),
        };
        Line::from(Span::styled(glyph(visual), style))
    }

    fn row(&self, projection: &RatingProjection) -> Line<'static> {
        let spans: Vec<Span<'static>> = projection
            .stars
            .iter()
            .flat_map(|visual| self.star(visual).spans)
            .collect();
        Line::from(spans)
    }
}

/// Renders stars as ANSI-coloured text.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer {
    pub show_label: bool,
}

impl StarRenderer for AnsiRenderer {
    type Node = String;

    fn star(&self, visual: &StarVisual) -> String {
        match visual {
            StarVisual::Full => FULL_GLYPH.yellow().to_string(),
            StarVisual::Empty => EMPTY_GLYPH.dimmed().to_string(),
            StarVisual::Partial(_) => PARTIAL_GLYPH.yellow().to_string(),
        }
    }

    fn row(&self, projection: &RatingProjection) -> String {
        let stars: String = projection.stars.iter().map(|v| self.star(v)).collect();
        if self.show_label {
            format!("{}  {}", stars, projection.label.dimmed())
        } else {
            stars
        }
    }
}
