//! Clickable trigger button with focused and pressed states.

use ratatui::prelude::*;

/// Visual state of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    /// Idle.
    #[default]
    Normal,
    /// Its card has keyboard focus.
    Focused,
    /// Just activated; shown for a few ticks.
    Pressed,
}

/// A one-line button showing `[ label ]`.
pub struct Button<'a> {
    label: &'a str,
    state: ButtonState,
}

impl<'a> Button<'a> {
    /// Create a button with the given label.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            state: ButtonState::Normal,
        }
    }

    /// Set the visual state.
    pub fn state(mut self, state: ButtonState) -> Self {
        self.state = state;
        self
    }

    /// Run `action` if the cell at `(col, row)` falls inside `area`.
    /// Returns whether the button was hit.
    pub fn click<F: FnOnce()>(area: Rect, col: u16, row: u16, action: F) -> bool {
        let hit = area.contains(Position::new(col, row));
        if hit {
            action();
        }
        hit
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = match self.state {
            ButtonState::Normal => Style::default().fg(Color::White).bg(Color::Blue),
            ButtonState::Focused => Style::default().fg(Color::Yellow).bg(Color::Blue).bold(),
            ButtonState::Pressed => Style::default()
                .fg(Color::Yellow)
                .bg(Color::DarkGray)
                .bold(),
        };
        let text = format!("[ {} ]", self.label);
        buf.set_stringn(area.x, area.y, text, area.width as usize, style);
    }
}
