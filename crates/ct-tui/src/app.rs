//! Top-level application state: the tool board plus focus and animation.

use ct_core::{ToolBoard, ToolId, ToolsConfig};

use crate::animation::{Entrance, EntranceKind, Pose};
use crate::widget::ButtonState;

/// Ticks a pressed button stays highlighted.
const PRESS_TICKS: u64 = 2;

/// Direction for moving focus across the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// One column left.
    Left,
    /// One column right.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

/// Main application state for the TUI.
pub struct TuiApp {
    /// Current result of each tool.
    pub board: ToolBoard,
    /// Session configuration.
    pub config: ToolsConfig,
    /// Card with keyboard focus.
    pub focus: ToolId,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Animation clock.
    pub tick: u64,
    /// Running entrance per tool, indexed by [`ToolId::index`].
    entrances: [Option<Entrance>; 4],
    /// Button shown pressed, and the tick the highlight ends.
    pressed: Option<(ToolId, u64)>,
}

impl TuiApp {
    /// Create an app with every tool empty.
    pub fn new(config: ToolsConfig, focus: ToolId) -> Self {
        let board = ToolBoard::new(&config);
        Self::with_board(board, config, focus)
    }

    /// Create an app around an existing board.
    pub fn with_board(board: ToolBoard, config: ToolsConfig, focus: ToolId) -> Self {
        Self {
            board,
            config,
            focus,
            show_help: false,
            should_quit: false,
            tick: 0,
            entrances: [None; 4],
            pressed: None,
        }
    }

    /// Generate a new result for `tool` and start its entrance.
    pub fn trigger(&mut self, tool: ToolId) {
        self.board.trigger(tool);
        self.focus = tool;
        self.pressed = Some((tool, self.tick + PRESS_TICKS));
        self.entrances[tool.index()] = if self.config.animate {
            Some(Entrance::new(EntranceKind::for_tool(tool), self.tick))
        } else {
            None
        };
        tracing::debug!(
            tool = tool.slug(),
            generation = self.board.generation(tool),
            tick = self.tick,
            "triggered"
        );
    }

    /// Generate for the focused card.
    pub fn trigger_focused(&mut self) {
        self.trigger(self.focus);
    }

    /// Advance the animation clock by one tick.
    pub fn on_tick(&mut self) {
        self.tick += 1;
        if self.pressed.is_some_and(|(_, until)| self.tick >= until) {
            self.pressed = None;
        }
    }

    /// Move focus within the 2x2 grid, wrapping at the edges.
    pub fn move_focus(&mut self, dir: FocusMove) {
        let idx = self.focus.index();
        let (row, col) = (idx / 2, idx % 2);
        let (row, col) = match dir {
            FocusMove::Left | FocusMove::Right => (row, 1 - col),
            FocusMove::Up | FocusMove::Down => (1 - row, col),
        };
        self.focus = ToolId::ALL[row * 2 + col];
    }

    /// How `tool`'s result should be drawn on the current tick.
    pub fn pose(&self, tool: ToolId) -> Pose {
        match self.entrances[tool.index()] {
            Some(entrance) if self.config.animate => entrance.pose(self.tick),
            _ => Pose::settled(),
        }
    }

    /// Visual state of `tool`'s button.
    pub fn button_state(&self, tool: ToolId) -> ButtonState {
        match self.pressed {
            Some((pressed, _)) if pressed == tool => ButtonState::Pressed,
            _ if self.focus == tool => ButtonState::Focused,
            _ => ButtonState::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ENTRANCE_TICKS;

    fn app() -> TuiApp {
        TuiApp::new(ToolsConfig::default().with_seed(42), ToolId::Scene)
    }

    #[test]
    fn starts_with_nothing_generated() {
        let app = app();
        for tool in ToolId::ALL {
            assert!(!app.board.is_populated(tool));
        }
        assert_eq!(app.focus, ToolId::Scene);
    }

    #[test]
    fn trigger_populates_and_focuses() {
        let mut app = app();
        app.trigger(ToolId::Word);
        assert!(app.board.is_populated(ToolId::Word));
        assert!(!app.board.is_populated(ToolId::Scene));
        assert_eq!(app.focus, ToolId::Word);
        assert_eq!(app.button_state(ToolId::Word), ButtonState::Pressed);
    }

    #[test]
    fn press_highlight_expires() {
        let mut app = app();
        app.trigger(ToolId::Name);
        app.on_tick();
        app.on_tick();
        assert_eq!(app.button_state(ToolId::Name), ButtonState::Focused);
        assert_eq!(app.button_state(ToolId::Scene), ButtonState::Normal);
    }

    #[test]
    fn entrance_plays_then_settles() {
        let mut app = app();
        app.trigger(ToolId::Prompt);
        assert!(!app.pose(ToolId::Prompt).is_settled());
        for _ in 0..ENTRANCE_TICKS {
            app.on_tick();
        }
        assert!(app.pose(ToolId::Prompt).is_settled());
    }

    #[test]
    fn retrigger_restarts_entrance() {
        let mut app = app();
        app.trigger(ToolId::Scene);
        for _ in 0..ENTRANCE_TICKS {
            app.on_tick();
        }
        app.trigger(ToolId::Scene);
        assert!(!app.pose(ToolId::Scene).is_settled());
    }

    #[test]
    fn no_animation_is_always_settled() {
        let mut app = TuiApp::new(
            ToolsConfig::default().with_seed(1).without_animation(),
            ToolId::Scene,
        );
        app.trigger(ToolId::Name);
        assert!(app.pose(ToolId::Name).is_settled());
    }

    #[test]
    fn focus_moves_around_grid() {
        let mut app = app();
        app.move_focus(FocusMove::Right);
        assert_eq!(app.focus, ToolId::Name);
        app.move_focus(FocusMove::Down);
        assert_eq!(app.focus, ToolId::Word);
        app.move_focus(FocusMove::Left);
        assert_eq!(app.focus, ToolId::Prompt);
        app.move_focus(FocusMove::Up);
        assert_eq!(app.focus, ToolId::Scene);
        app.move_focus(FocusMove::Left);
        assert_eq!(app.focus, ToolId::Name);
    }
}
