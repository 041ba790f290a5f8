//! Renders a hidden marker as a single dim glyph.

use ratatui::prelude::*;

use ct_core::Marker;

/// Glyph drawn for a marker.
pub const MARKER_GLYPH: &str = "\u{00b7}";

/// Cell a marker occupies inside `area`.
pub fn marker_cell(area: Rect, marker: &Marker) -> Position {
    let (dx, dy) = marker.anchor.offset(area.width, area.height, 1, 1);
    Position::new(area.x + dx, area.y + dy)
}

/// A marker pinned to a corner of its container.
pub struct MarkerWidget {
    marker: Marker,
}

impl MarkerWidget {
    /// Wrap a marker descriptor.
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }
}

impl Widget for MarkerWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let pos = marker_cell(area, &self.marker);
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_symbol(MARKER_GLYPH)
                .set_style(Style::default().fg(Color::DarkGray));
        }
    }
}
