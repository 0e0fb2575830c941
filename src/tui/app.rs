//! Terminal host state for one star widget.
//!
//! Pure core: `classify_key` and `classify_mouse` map crossterm events to
//! intents. Imperative shell: `App::handle_key` / `App::handle_mouse`
//! apply them to the widget.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::math::{pointer_fraction, KeyAction, STAR_COUNT};
use crate::score::{to_stored, Score};
use crate::widget::keys::action_for_key_event;
use crate::widget::{EventOutcome, StarWidget, WidgetEvent};

/// User intents in the terminal host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppAction {
    Quit,
    ToggleFocus,
    Widget(WidgetEvent),
}

/// Pure function: which action a key triggers.
pub fn classify_key(key: KeyEvent) -> Option<AppAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(AppAction::Quit),
        KeyCode::Tab => Some(AppAction::ToggleFocus),
        KeyCode::Char('r') | KeyCode::Delete | KeyCode::Backspace => {
            Some(AppAction::Widget(WidgetEvent::Reset))
        }
        _ => match action_for_key_event(key) {
            KeyAction::NoOp => None,
            action => Some(AppAction::Widget(WidgetEvent::Key(action))),
        },
    }
}

/// Row fraction for a cell of the star row hit area.
///
/// Cell 0 is the clear margin left of the first star. Star `k` sits at
/// cell `1 + 2k` and fills through its own end; the gap after a star keeps
/// that star's boundary.
pub fn cell_fraction(offset: u16) -> f64 {
    let stars_through = offset.saturating_add(1) / 2;
    pointer_fraction(f64::from(stars_through), 0.0, STAR_COUNT as f64)
}

/// Pure function: which widget event a mouse event triggers, given where
/// the star row hit area was last drawn.
pub fn classify_mouse(mouse: MouseEvent, row: Rect, hovering: bool) -> Option<WidgetEvent> {
    let inside = mouse.row == row.y && mouse.column >= row.x && mouse.column < row.right();
    let fraction = cell_fraction(mouse.column.saturating_sub(row.x));
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => Some(WidgetEvent::Click(fraction)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) if inside => {
            Some(WidgetEvent::PointerMove(fraction))
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) if hovering => {
            Some(WidgetEvent::PointerLeave)
        }
        _ => None,
    }
}

/// Terminal host state
pub struct App {
    pub widget: StarWidget,
    /// Where the star row was drawn last frame
    pub row_area: Option<Rect>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(widget: StarWidget) -> Self {
        let mut app = Self {
            widget,
            row_area: None,
            status_message: None,
            should_quit: false,
        };
        app.widget.handle(WidgetEvent::Focus);
        app
    }

    pub fn committed(&self) -> Score {
        self.widget.committed()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match classify_key(key) {
            Some(AppAction::Quit) => self.should_quit = true,
            Some(AppAction::ToggleFocus) => {
                let event = if self.widget.is_focused() {
                    WidgetEvent::Blur
                } else {
                    WidgetEvent::Focus
                };
                self.widget.handle(event);
            }
            Some(AppAction::Widget(event)) => {
                let outcome = self.widget.handle(event);
                self.note_outcome(outcome);
            }
            None => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(row) = self.row_area else {
            return;
        };
        let hovering = self.widget.phase() == crate::widget::WidgetPhase::Hovering;
        if let Some(event) = classify_mouse(mouse, row, hovering) {
            let outcome = self.widget.handle(event);
            self.note_outcome(outcome);
        }
    }

    fn note_outcome(&mut self, outcome: EventOutcome) {
        if let Some(score) = outcome.committed {
            self.status_message = Some(match score {
                Some(_) => format!("Saved {}", to_stored(score)),
                None => "Cleared".to_string(),
            });
        }
    }
}
