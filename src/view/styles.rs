//! Colour palette for cards, badges and the search bar.

use ratatui::style::{Color, Modifier, Style};

/// Muted text for hints and secondary labels.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` flag or the `NO_COLOR`
/// environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off; emphasis falls back to modifiers.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles used across the recipe views.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    colors: ColorConfig,
}

impl Palette {
    /// Palette honoring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Recipe titles.
    pub fn title(self) -> Style {
        self.fg(Color::LightYellow).add_modifier(Modifier::BOLD)
    }

    /// Secondary text such as descriptions and hints.
    pub fn muted(self) -> Style {
        if self.colors.colors_enabled() {
            MUTED_TEXT
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    /// Cuisine label on cards.
    pub fn cuisine(self) -> Style {
        self.fg(Color::Magenta)
    }

    /// Badge colour keyed on the difficulty label.
    pub fn difficulty(self, difficulty: &str) -> Style {
        let color = match difficulty {
            "Easy" => Color::Green,
            "Medium" => Color::Yellow,
            "Hard" => Color::Red,
            _ => Color::Gray,
        };
        self.fg(color).add_modifier(Modifier::BOLD)
    }

    /// Border of a card; the selected card stands out even without colour.
    pub fn card_border(self, selected: bool) -> Style {
        if selected {
            self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            self.fg(Color::Gray)
        }
    }

    /// Border of the search field, brighter while it has focus.
    pub fn search_border(self, focused: bool) -> Style {
        if focused {
            self.fg(Color::Cyan)
        } else {
            self.fg(Color::Gray)
        }
    }

    /// Text cursor in the search field.
    pub fn cursor(self) -> Style {
        if self.colors.colors_enabled() {
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    /// A selector with a value chosen.
    pub fn active_filter(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// The clear-all hint, shown only while criteria are active.
    pub fn clear_hint(self) -> Style {
        self.fg(Color::LightRed)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
