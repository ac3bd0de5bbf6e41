//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail;
pub mod grid;
mod help;
mod helpers;
pub mod layout;
pub mod search_bar;
pub mod styles;

pub use detail::{detail_lines, render_detail_overlay};
pub use grid::{columns_for_width, RecipeGrid, NO_RESULTS_MESSAGE};
pub use help::render_help_overlay;
pub use helpers::{centered_rect, truncate_to_width};
pub use layout::render_layout;
pub use search_bar::{SearchBar, SEARCH_PLACEHOLDER};
pub use styles::{ColorConfig, Palette};

use crate::config::KeyBindings;
use crate::model::AppError;
use crate::state::{handle_key, AppState, KeyOutcome};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Poll interval while no debounce emission is pending.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(e) => AppError::Terminal(e),
        }
    }
}

/// Rendering options resolved from config and CLI.
#[derive(Debug, Clone, Copy)]
pub struct TuiOptions {
    /// Colors, or plain styles under `--no-color`.
    pub palette: Palette,
    /// Target card width; the grid fits as many columns as this allows.
    pub card_width: u16,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            card_width: crate::config::ResolvedConfig::default().card_width,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend. Every
/// time-dependent method takes `now` so tests can drive a virtual clock.
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    options: TuiOptions,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, options: TuiOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, options))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal events
    /// until the pending debounce deadline, so idle costs nothing.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.dispatch_key(key, Instant::now()) == KeyOutcome::Quit {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build an app over an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState, options: TuiOptions) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            options,
        }
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    /// The backing terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Cards per grid row at the current terminal width.
    pub fn columns(&self) -> usize {
        let width = match self.terminal.size() {
            Ok(size) if size.width > 0 => size.width,
            _ => 80,
        };
        columns_for_width(width, self.options.card_width)
    }

    /// Handle one key press at time `now`.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
        let columns = self.columns();
        handle_key(&mut self.app_state, &self.key_bindings, key, now, columns)
    }

    /// Handle a key press, then deliver any emission due at the same instant.
    ///
    /// An edit arriving exactly at the pending deadline replaces the
    /// scheduled value before it can fire.
    pub fn dispatch_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
        let outcome = self.handle_key(key, now);
        if outcome != KeyOutcome::Quit {
            self.tick(now);
        }
        outcome
    }

    /// Deliver any due debounce emission. Returns `true` if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.app_state.tick(now)
    }

    /// How long the event loop may block before the next deadline.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.app_state
            .input()
            .time_until_deadline(now)
            .unwrap_or(IDLE_POLL_INTERVAL)
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let TuiOptions {
            palette,
            card_width,
        } = self.options;

        self.terminal.draw(|frame| {
            render_layout(frame, state, palette, card_width);

            if let Some(recipe) = state.detail_recipe() {
                render_detail_overlay(frame, recipe, palette);
            }
            if state.help_visible {
                render_help_overlay(frame, palette);
            }
        })?;

        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(app_state: AppState, options: TuiOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, options)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;
    use crate::state::DebouncedInput;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn create_test_app() -> TuiApp<TestBackend> {
        let recipes = vec![
            Recipe::new(1, "Pad Thai", "Asian", "Medium"),
            Recipe::new(2, "Tacos", "Mexican", "Easy"),
        ];
        let state = AppState::new(recipes, DebouncedInput::new(Duration::from_millis(500)));
        let options = TuiOptions {
            palette: Palette::new(ColorConfig::disabled()),
            card_width: 36,
        };
        TuiApp::with_terminal(Terminal::new(TestBackend::new(120, 30)).unwrap(), state, options)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn tui_error_converts_to_terminal_app_error() {
        let app_err: AppError = TuiError::Io(io::Error::other("gone")).into();
        assert!(matches!(app_err, AppError::Terminal(_)));
    }

    #[test]
    fn handle_key_q_quits() {
        let mut app = create_test_app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q')), Instant::now()), KeyOutcome::Quit);
    }

    #[test]
    fn columns_use_terminal_width() {
        let app = create_test_app();
        assert_eq!(app.columns(), 3);
    }

    #[test]
    fn poll_timeout_tracks_pending_deadline() {
        let mut app = create_test_app();
        let base = Instant::now();
        assert_eq!(app.poll_timeout(base), IDLE_POLL_INTERVAL);

        app.handle_key(key(KeyCode::Char('/')), base);
        app.handle_key(key(KeyCode::Char('t')), base);
        assert_eq!(
            app.poll_timeout(base + Duration::from_millis(200)),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn tick_commits_after_delay() {
        let mut app = create_test_app();
        let base = Instant::now();
        app.handle_key(key(KeyCode::Char('/')), base);
        app.handle_key(key(KeyCode::Char('t')), base);
        app.handle_key(key(KeyCode::Char('a')), base);

        assert!(!app.tick(base + Duration::from_millis(499)));
        assert!(app.tick(base + Duration::from_millis(500)));
        let visible = app.state().visible_recipes();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Tacos");
    }

    #[test]
    fn key_at_deadline_supersedes_scheduled_term() {
        let mut app = create_test_app();
        let base = Instant::now();
        app.dispatch_key(key(KeyCode::Char('/')), base);
        app.dispatch_key(key(KeyCode::Char('p')), base);

        let deadline = base + Duration::from_millis(500);
        app.dispatch_key(key(KeyCode::Char('a')), deadline);
        assert_eq!(app.state().committed().search_term, "");
        assert_eq!(app.state().visible_recipes().len(), 2);

        assert!(app.tick(deadline + Duration::from_millis(500)));
        assert_eq!(app.state().committed().search_term, "pa");
        let visible = app.state().visible_recipes();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Pad Thai");
    }

    #[test]
    fn draw_renders_overlays() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Enter), Instant::now());
        app.draw().unwrap();

        let rendered: String = app
            .terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("Press Esc to close"));
    }
}
