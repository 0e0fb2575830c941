//! Terminal host for the interactive star widget.
//!
//! Mouse movement over the star row previews a score, a click commits it,
//! arrow keys and Home/End adjust it, `r` resets it. Events are read and
//! applied one at a time on the calling thread.
//!
//! # Usage
//!
//! ```rust,no_run
//! use starscore::tui::TuiManager;
//! use starscore::widget::StarWidget;
//!
//! let mut tui = TuiManager::new(StarWidget::new(None))?;
//! let committed = tui.run()?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod app;
pub mod renderer;
pub mod theme;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::score::Score;
use crate::widget::StarWidget;
use app::App;
use renderer::render_ui;

/// TUI manager for the star widget
pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl TuiManager {
    /// Create a new TUI manager and initialize the terminal
    pub fn new(widget: StarWidget) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(widget),
        })
    }

    /// Render the current frame
    pub fn render(&mut self) -> io::Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|f| render_ui(f, app))?;
        Ok(())
    }

    /// Process events until the user finishes; returns the committed score.
    pub fn run(&mut self) -> io::Result<Score> {
        while !self.app.should_quit {
            self.render()?;
            match event::read()? {
                Event::Key(key) => self.app.handle_key(key),
                Event::Mouse(mouse) => self.app.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(self.app.committed())
    }

    /// Clean up and restore terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
