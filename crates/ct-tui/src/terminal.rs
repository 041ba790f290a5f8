//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use ct_core::ToolId;

use crate::animation::{card_visible, header_fade};
use crate::app::{FocusMove, TuiApp};
use crate::layout::{CardLayout, PageLayout};
use crate::shared;
use crate::widget::marker::marker_cell;
use crate::widget::{Button, Card, result_lines};

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop. Input is handled between ticks; the clock advances
/// whenever a full tick has elapsed.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    let tick_rate = Duration::from_millis(app.config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            let size = terminal.size().map_err(|e| format!("terminal error: {e}"))?;
            let area = Rect::new(0, 0, size.width, size.height);
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event, area);
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

/// Handle a crossterm event. `area` is the full screen, for hit-testing.
fn handle_event(app: &mut TuiApp, event: Event, area: Rect) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse, area),
        _ => {}
    }
}

/// Handle keyboard input.
fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => app.show_help = false,
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
        return;
    }

    tracing::debug!(code = ?key.code, "key");

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char(c) if ('1'..='4').contains(&c) => {
            if let Some(idx) = c.to_digit(10) {
                app.trigger(ToolId::ALL[idx as usize - 1]);
            }
        }
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Left | KeyCode::Char('h') => app.move_focus(FocusMove::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_focus(FocusMove::Right),
        KeyCode::Up | KeyCode::Char('k') => app.move_focus(FocusMove::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_focus(FocusMove::Down),
        KeyCode::Enter | KeyCode::Char(' ') => app.trigger_focused(),
        _ => {}
    }
}

/// Handle mouse events: buttons trigger, cards take focus.
fn handle_mouse(app: &mut TuiApp, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.show_help {
        return;
    }
    let (col, row) = (mouse.column, mouse.row);
    let page = PageLayout::new(area);

    for tool in ToolId::ALL {
        let card_area = page.card(tool);
        let layout = CardLayout::new(card_area, tool.action());
        if Button::click(layout.button, col, row, || app.trigger(tool)) {
            return;
        }
        if tool
            .marker()
            .is_some_and(|m| marker_cell(card_area, &m) == Position::new(col, row))
        {
            tracing::trace!(tool = tool.slug(), "marker clicked");
            return;
        }
    }

    if let Some(tool) = page.card_at(col, row) {
        app.focus = tool;
    }
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &TuiApp) {
    let page = PageLayout::new(frame.area());

    shared::draw_header(frame, page.header, page.subtitle, header_fade(app.tick));

    for tool in ToolId::ALL {
        if !card_visible(tool.index(), app.tick, app.config.stagger_ticks) {
            continue;
        }
        let body = app
            .board
            .result(tool)
            .map(|r| result_lines(r, app.pose(tool)))
            .unwrap_or_default();
        let card = Card::new(tool.title(), tool.description(), tool.action())
            .focused(app.focus == tool)
            .button_state(app.button_state(tool))
            .body(body)
            .marker(tool.marker());
        frame.render_widget(card, page.card(tool));
    }

    shared::draw_status(frame, page.status);

    if app.show_help {
        shared::draw_help_popup(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::{ToolResult, ToolsConfig};
    use ratatui::backend::TestBackend;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    fn app() -> TuiApp {
        TuiApp::new(
            ToolsConfig::default().with_seed(42).without_animation(),
            ToolId::Scene,
        )
    }

    fn press(app: &mut TuiApp, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut TuiApp, col: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(app, mouse, SCREEN);
    }

    fn screen_text(app: &TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn number_keys_trigger_their_tool() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert!(app.board.is_populated(ToolId::Prompt));
        assert!(!app.board.is_populated(ToolId::Scene));
        press(&mut app, KeyCode::Char('1'));
        assert!(app.board.is_populated(ToolId::Scene));
        assert_eq!(app.board.generation(ToolId::Prompt), 1);
    }

    #[test]
    fn enter_triggers_focused_card() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, ToolId::Name);
        press(&mut app, KeyCode::Enter);
        assert!(app.board.is_populated(ToolId::Name));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.board.generation(ToolId::Name), 2);
    }

    #[test]
    fn vim_keys_move_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.focus, ToolId::Prompt);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.focus, ToolId::Word);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, ToolId::Prompt);
    }

    #[test]
    fn help_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('1'));
        assert!(!app.board.is_populated(ToolId::Scene));
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn clicking_a_button_triggers_it() {
        let mut app = app();
        let page = PageLayout::new(SCREEN);
        let button = CardLayout::new(page.card(ToolId::Word), ToolId::Word.action()).button;
        click(&mut app, button.x + 1, button.y);
        assert!(app.board.is_populated(ToolId::Word));
        assert_eq!(app.focus, ToolId::Word);
    }

    #[test]
    fn clicking_a_card_body_focuses_it() {
        let mut app = app();
        let page = PageLayout::new(SCREEN);
        let card = page.card(ToolId::Prompt);
        click(&mut app, card.x + 2, card.bottom() - 2);
        assert_eq!(app.focus, ToolId::Prompt);
        assert!(!app.board.is_populated(ToolId::Prompt));
    }

    #[test]
    fn clicking_the_marker_does_not_generate() {
        let mut app = app();
        let page = PageLayout::new(SCREEN);
        let card = page.card(ToolId::Scene);
        let cell = marker_cell(card, &ct_core::marker::SCENE_MARKER);
        click(&mut app, cell.x, cell.y);
        assert!(!app.board.is_populated(ToolId::Scene));
    }

    #[test]
    fn empty_board_shows_titles_and_buttons_only() {
        let text = screen_text(&app());
        assert!(text.contains("Comedy Tools"));
        for tool in ToolId::ALL {
            assert!(text.contains(tool.title()), "missing {}", tool.title());
            assert!(text.contains(&format!("[ {} ]", tool.action())));
        }
        assert!(!text.contains("Location:"));
    }

    #[test]
    fn generated_results_are_drawn() {
        let mut app = app();
        app.trigger(ToolId::Scene);
        app.trigger(ToolId::Word);
        let text = screen_text(&app);
        assert!(text.contains("Location:"));
        assert!(text.contains("Relationship:"));
        assert!(text.contains("Conflict:"));
        match app.board.result(ToolId::Word) {
            Some(ToolResult::Word(w)) => assert!(text.contains(&w.text)),
            other => panic!("unexpected word slot {other:?}"),
        }
    }

    #[test]
    fn scene_card_carries_marker() {
        let text = screen_text(&app());
        assert!(text.contains(crate::widget::marker::MARKER_GLYPH));
    }

    #[test]
    fn staggered_cards_hidden_on_first_tick() {
        let app = TuiApp::new(
            ToolsConfig::default().with_seed(1).with_stagger(2),
            ToolId::Scene,
        );
        let text = screen_text(&app);
        assert!(text.contains(ToolId::Scene.title()));
        assert!(!text.contains(ToolId::Word.title()));
    }
}
