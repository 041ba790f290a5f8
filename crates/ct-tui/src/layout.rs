//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::prelude::*;

use ct_core::ToolId;

/// Areas of the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Page heading row.
    pub header: Rect,
    /// Subtitle row.
    pub subtitle: Rect,
    /// One card per tool, indexed by [`ToolId::index`].
    pub cards: [Rect; 4],
    /// Status bar row.
    pub status: Rect,
}

impl PageLayout {
    /// Split the screen into header, 2x2 card grid, and status bar.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(1), // Subtitle
                Constraint::Length(1), // Spacer
                Constraint::Min(0),    // Cards
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let grid_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[3]);

        let mut cards = [Rect::default(); 4];
        for (r, row) in grid_rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            cards[r * 2] = cols[0];
            cards[r * 2 + 1] = cols[1];
        }

        Self {
            header: rows[0],
            subtitle: rows[1],
            cards,
            status: rows[4],
        }
    }

    /// The card area for `tool`.
    pub fn card(&self, tool: ToolId) -> Rect {
        self.cards[tool.index()]
    }

    /// Which card, if any, contains the cell at `(col, row)`.
    pub fn card_at(&self, col: u16, row: u16) -> Option<ToolId> {
        ToolId::ALL
            .into_iter()
            .find(|t| self.card(*t).contains(Position::new(col, row)))
    }
}

/// Areas inside one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// The card's inner area (inside the border).
    pub inner: Rect,
    /// Description text.
    pub description: Rect,
    /// Trigger button.
    pub button: Rect,
    /// Result region.
    pub body: Rect,
}

impl CardLayout {
    /// Lay out a card occupying `area` with a button labelled `label`.
    pub fn new(area: Rect, label: &str) -> Self {
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Description
                Constraint::Length(1), // Button
                Constraint::Length(1), // Gap
                Constraint::Min(0),    // Result
            ])
            .split(inner);

        let button_width = (label.chars().count() as u16 + 4).min(rows[1].width);
        let button = Rect {
            width: button_width,
            ..rows[1]
        };

        Self {
            inner,
            description: rows[0],
            button,
            body: rows[3],
        }
    }
}
