//! Titled card container holding a description, a trigger button, and
//! arbitrary body content.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use ct_core::Marker;

use super::button::{Button, ButtonState};
use super::marker::MarkerWidget;
use crate::layout::CardLayout;

/// A bordered card.
pub struct Card<'a> {
    title: &'a str,
    description: &'a str,
    action: &'a str,
    focused: bool,
    button_state: ButtonState,
    body: Vec<Line<'a>>,
    marker: Option<Marker>,
}

impl<'a> Card<'a> {
    /// Create a card with a title, description, and button label.
    pub fn new(title: &'a str, description: &'a str, action: &'a str) -> Self {
        Self {
            title,
            description,
            action,
            focused: false,
            button_state: ButtonState::Normal,
            body: Vec::new(),
            marker: None,
        }
    }

    /// Highlight the card as focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the button state.
    pub fn button_state(mut self, state: ButtonState) -> Self {
        self.button_state = state;
        self
    }

    /// Content shown below the button.
    pub fn body(mut self, body: Vec<Line<'a>>) -> Self {
        self.body = body;
        self
    }

    /// Pin a hidden marker to the card.
    pub fn marker(mut self, marker: Option<Marker>) -> Self {
        self.marker = marker;
        self
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Color::Yellow
        } else {
            Color::Gray
        };
        Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(Color::White).bold(),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .render(area, buf);

        let layout = CardLayout::new(area, self.action);
        if layout.inner.height < 3 || layout.inner.width < 8 {
            return;
        }

        Paragraph::new(self.description)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .render(layout.description, buf);

        Button::new(self.action)
            .state(self.button_state)
            .render(layout.button, buf);

        Paragraph::new(self.body)
            .wrap(Wrap { trim: false })
            .render(layout.body, buf);

        if let Some(marker) = self.marker {
            MarkerWidget::new(marker).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::marker::SCENE_MARKER;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn renders_title_description_button_and_body() {
        let area = Rect::new(0, 0, 50, 10);
        let mut buf = Buffer::empty(area);
        Card::new("Prompt Spinner", "Get random improv prompts.", "Spin Prompt")
            .body(vec![Line::from("The scene is a musical now")])
            .render(area, &mut buf);

        assert!(row(&buf, 0).contains(" Prompt Spinner "));
        assert!(row(&buf, 1).contains("Get random improv prompts."));
        assert!(row(&buf, 3).contains("[ Spin Prompt ]"));
        assert!(row(&buf, 5).contains("The scene is a musical now"));
    }

    #[test]
    fn focused_border_is_yellow() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        Card::new("T", "D", "Go").focused(true).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Yellow);
    }

    #[test]
    fn marker_is_drawn_when_given() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        Card::new("Scene Generator", "D", "Generate Scene")
            .marker(Some(SCENE_MARKER))
            .render(area, &mut buf);
        assert_eq!(buf[(27, 2)].symbol(), crate::widget::marker::MARKER_GLYPH);
    }
}
