//! Frame rendering for the terminal star widget.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::theme::Theme;
use crate::render::terminal::TerminalRenderer;
use crate::score::to_stored;

/// Cells taken by five stars with single spaces between them.
const STAR_ROW_WIDTH: u16 = 9;

/// Render the full interface and record where the star row landed.
pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let theme = Theme::default_theme();
    let chunks = calculate_layout(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Review score ")
        .border_style(theme.border_style(app.widget.is_focused()));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let row = star_row_area(inner);
    let stars = TerminalRenderer::default().stars(&app.widget.visuals());
    frame.render_widget(Paragraph::new(stars), row);
    app.row_area = Some(hit_area(row));

    render_value_line(frame, app, &theme, chunks[1]);
    render_footer(frame, app, &theme, chunks[2]);
}

/// Header box, value line, footer.
pub fn calculate_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area)
        .to_vec()
}

fn star_row_area(inner: Rect) -> Rect {
    Rect {
        x: inner.x + 1,
        y: inner.y,
        width: STAR_ROW_WIDTH.min(inner.width.saturating_sub(1)),
        height: 1.min(inner.height),
    }
}

/// Stars plus the clear margin cell to their left.
fn hit_area(row: Rect) -> Rect {
    if row.x == 0 {
        return row;
    }
    Rect {
        x: row.x - 1,
        width: row.width + 1,
        ..row
    }
}

fn render_value_line(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let committed = match app.committed() {
        Some(_) => format!("{} / 400", to_stored(app.committed())),
        None => "unset".to_string(),
    };
    let mut spans = vec![Span::styled(committed, theme.label_style())];
    if app.widget.live() != app.committed() {
        spans.push(Span::styled(
            format!("  (preview {})", to_stored(app.widget.live())),
            theme.hint_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "←/→ adjust  Home/End min/max  r reset  Tab focus  q done",
        theme.hint_style(),
    ))];
    if let Some(message) = &app.status_message {
        lines.push(Line::from(Span::styled(message.clone(), theme.label_style())));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
