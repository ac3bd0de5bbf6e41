//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with a virtual clock so user stories can be
//! replayed keystroke by keystroke with exact control over elapsed time.

use crate::model::Recipe;
use crate::source::RecipeSource;
use crate::state::{AppState, DebouncedInput, KeyOutcome, DEFAULT_DEBOUNCE};
use crate::view::{ColorConfig, Palette, TuiApp, TuiOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    base: Instant,
    elapsed: Duration,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness over the built-in catalog at 130x40 with the default delay.
    pub fn with_builtin_catalog() -> Self {
        let recipes = RecipeSource::Builtin
            .load()
            .expect("built-in catalog loads");
        Self::with_recipes(recipes, 130, 40)
    }

    /// Harness over `recipes` with a custom terminal size.
    pub fn with_recipes(recipes: Vec<Recipe>, width: u16, height: u16) -> Self {
        Self::with_input(recipes, DebouncedInput::new(DEFAULT_DEBOUNCE), width, height)
    }

    /// Harness with a pre-seeded input controller.
    pub fn with_input(
        recipes: Vec<Recipe>,
        input: DebouncedInput,
        width: u16,
        height: u16,
    ) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        let options = TuiOptions {
            palette: Palette::new(ColorConfig::disabled()),
            card_width: 36,
        };

        Self {
            app: TuiApp::with_terminal(terminal, AppState::new(recipes, input), options),
            base: Instant::now(),
            elapsed: Duration::ZERO,
            running: true,
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Instant {
        self.base + self.elapsed
    }

    /// Advance the virtual clock by `millis`, delivering any due emission.
    pub fn advance_ms(&mut self, millis: u64) {
        self.elapsed += Duration::from_millis(millis);
        let now = self.now();
        self.app.tick(now);
    }

    /// Advance the clock by `millis` with a keystroke about to arrive.
    ///
    /// Emissions due strictly before the new instant are delivered. One due
    /// exactly at it is left for the next key, which the event loop handles
    /// before ticking.
    pub fn advance_ms_before_key(&mut self, millis: u64) {
        self.elapsed += Duration::from_millis(millis);
        let now = self.now();
        if let Some(deadline) = self.app.state().input().next_deadline() {
            if deadline < now {
                self.app.tick(deadline);
            }
        }
    }

    /// Send a key without modifiers.
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let now = self.now();
        if self.app.dispatch_key(KeyEvent::new(key, mods), now) == KeyOutcome::Quit {
            self.running = false;
        }
        !self.running
    }

    /// Type text one character at a time, without advancing the clock.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    pub fn state(&self) -> &AppState {
        self.app.state()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Titles of the recipes currently shown in the grid.
    pub fn visible_titles(&self) -> Vec<String> {
        self.state()
            .visible_recipes()
            .into_iter()
            .map(|recipe| recipe.title.clone())
            .collect()
    }

    /// Render the current frame to a string
    pub fn render_to_string(&mut self) -> String {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
