//! Color themes and styling for the terminal star widget.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the star widget
pub struct Theme {
    /// Lit star color
    pub gold: Color,
    /// Unlit star color
    pub dim: Color,
    /// Accent color for focus and key hints
    pub primary: Color,
    /// Text color
    pub text: Color,
    /// Muted color for secondary text
    pub muted: Color,
}

impl Theme {
    /// Create the default theme
    pub fn default_theme() -> Self {
        Self {
            gold: Color::Rgb(0xf5, 0xa6, 0x23),
            dim: Color::DarkGray,
            primary: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
        }
    }

    /// Style for a fully lit star
    pub fn full_star_style(&self) -> Style {
        Style::default().fg(self.gold).add_modifier(Modifier::BOLD)
    }

    /// Style for a partially lit star
    pub fn partial_star_style(&self) -> Style {
        Style::default().fg(self.gold)
    }

    /// Style for an unlit star
    pub fn empty_star_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Border style, highlighted while the widget has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for the committed value and labels
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for key hints and status messages
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
