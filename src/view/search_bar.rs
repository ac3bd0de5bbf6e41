//! Search bar widget: text input plus cuisine and difficulty selectors.

use super::styles::Palette;
use crate::state::debounce::DebouncedInput;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the search text is empty and unfocused.
pub const SEARCH_PLACEHOLDER: &str = "Search recipes by name or ingredient...";

/// Renders the raw (not yet committed) query held by the input controller.
pub struct SearchBar<'a> {
    input: &'a DebouncedInput,
    focused: bool,
    palette: Palette,
}

impl<'a> SearchBar<'a> {
    /// Search bar over the controller's raw values.
    pub fn new(input: &'a DebouncedInput, focused: bool, palette: Palette) -> Self {
        Self {
            input,
            focused,
            palette,
        }
    }

    fn text_line(&self) -> Line<'a> {
        let text = self.input.search_text();

        if self.focused {
            Line::from(vec![
                Span::raw(text.to_string()),
                Span::styled(" ", self.palette.cursor()),
            ])
        } else if text.is_empty() {
            Line::from(Span::styled(SEARCH_PLACEHOLDER, self.palette.muted()))
        } else {
            Line::from(text.to_string())
        }
    }

    fn selector(&self, label: &str, value: &str, all_label: &'static str, key: char) -> Line<'a> {
        let value_span = if value.is_empty() {
            Span::raw(all_label)
        } else {
            Span::styled(value.to_string(), self.palette.active_filter())
        };

        Line::from(vec![
            Span::styled(format!("{label} "), self.palette.muted()),
            value_span,
            Span::styled(format!(" [{key}]"), self.palette.muted()),
        ])
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [input_area, cuisine_area, difficulty_area, clear_area] = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(28),
            Constraint::Length(33),
            Constraint::Length(15),
        ])
        .areas(area);

        let title = if self.input.is_pending() {
            " Search … "
        } else {
            " Search "
        };
        Paragraph::new(self.text_line())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(self.palette.search_border(self.focused)),
            )
            .render(input_area, buf);

        let query = self.input.query();
        let selector_block = || Block::default().borders(Borders::ALL);

        Paragraph::new(self.selector("Cuisine", query.cuisine(), "All Cuisines", 'c'))
            .block(selector_block())
            .render(cuisine_area, buf);

        Paragraph::new(self.selector(
            "Difficulty",
            query.difficulty(),
            "All Difficulties",
            'd',
        ))
        .block(selector_block())
        .render(difficulty_area, buf);

        if self.input.has_active_criteria() {
            Paragraph::new(Line::from(Span::styled(
                "Clear All [x]",
                self.palette.clear_hint(),
            )))
            .block(selector_block())
            .render(clear_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::debounce::Emission;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::{Duration, Instant};

    fn render(input: &DebouncedInput, focused: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(130, 3)).unwrap();
        terminal
            .draw(|frame| {
                let widget = SearchBar::new(input, focused, Palette::new(ColorConfig::disabled()));
                frame.render_widget(widget, frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area();
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_unfocused_bar_shows_placeholder_and_all_labels() {
        let input = DebouncedInput::new(Duration::from_millis(500));
        let out = render(&input, false);

        assert!(out.contains(SEARCH_PLACEHOLDER));
        assert!(out.contains("All Cuisines"));
        assert!(out.contains("All Difficulties"));
        assert!(!out.contains("Clear All"), "clear hint hidden without criteria");
    }

    #[test]
    fn raw_text_and_clear_hint_render_before_commit() {
        let mut input = DebouncedInput::new(Duration::from_millis(500));
        input.on_text_change("curry", Instant::now());
        let out = render(&input, true);

        assert!(out.contains("curry"));
        assert!(out.contains("Search …"), "pending marker in title");
        assert!(out.contains("Clear All [x]"));
    }

    #[test]
    fn selected_filters_replace_all_labels() {
        let mut input = DebouncedInput::new(Duration::from_millis(500));
        let mut sink: Vec<Emission> = Vec::new();
        input.on_cuisine_change("Mexican", &mut sink);
        input.on_difficulty_change("Hard", &mut sink);
        let out = render(&input, false);

        assert!(out.contains("Cuisine Mexican"));
        assert!(out.contains("Difficulty Hard"));
        assert!(!out.contains("All Cuisines"));
    }
}
