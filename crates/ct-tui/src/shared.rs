//! Shared drawing helpers: page header, status bar, and the help popup.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use ct_core::{PAGE_SUBTITLE, PAGE_TITLE};

use crate::animation::Fade;

/// Status bar hint text.
pub const STATUS_HINT: &str =
    "1-4:generate  \u{2190}\u{2191}\u{2192}\u{2193}/hjkl/Tab:focus  Enter/Space:generate focused  ?:help  q:quit";

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the page heading and subtitle at the given fade level.
pub fn draw_header(frame: &mut Frame, header: Rect, subtitle: Rect, fade: Fade) {
    let (title_fg, subtitle_fg) = match fade {
        Fade::Dim => (Color::DarkGray, Color::Black),
        Fade::Mid => (Color::Gray, Color::DarkGray),
        Fade::Full => (Color::White, Color::Gray),
    };
    frame.render_widget(
        Paragraph::new(PAGE_TITLE).style(Style::default().fg(title_fg).bold()),
        header,
    );
    frame.render_widget(
        Paragraph::new(PAGE_SUBTITLE).style(Style::default().fg(subtitle_fg)),
        subtitle,
    );
}

/// Draw the status bar.
pub fn draw_status(frame: &mut Frame, area: Rect) {
    let status =
        Paragraph::new(STATUS_HINT).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, area);
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Generators:"),
        Line::from("  1           Generate Scene"),
        Line::from("  2           Generate Name"),
        Line::from("  3           Spin Prompt"),
        Line::from("  4           New Word"),
        Line::from(""),
        Line::from("Focus:"),
        Line::from("  h j k l     Move between cards"),
        Line::from("  Arrow keys  Move between cards"),
        Line::from("  Tab         Next card"),
        Line::from("  Enter/Space Generate for focused card"),
        Line::from("  Click       Press a button / focus a card"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
