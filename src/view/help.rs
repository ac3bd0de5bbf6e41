//! Help overlay widget displaying keyboard shortcuts.
//!
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::centered_rect;
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: category headers followed by (keys, description) rows.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Browse",
        &[
            ("h/l ←/→", "Previous / next recipe"),
            ("k/j ↑/↓", "Row up / down"),
            ("g/Home", "First recipe"),
            ("G/End", "Last recipe"),
            ("Enter", "Open recipe details"),
            ("Esc", "Close details"),
        ],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Focus the search box"),
            ("Enter/Tab/Esc", "Back to the grid"),
            ("Backspace", "Delete last character"),
        ],
    ),
    (
        "Filters",
        &[
            ("c / C", "Next / previous cuisine"),
            ("d / D", "Next / previous difficulty"),
            ("x", "Clear search and filters"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: Palette) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.search_border(true)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted(),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn build_help_content(palette: Palette) -> Vec<Line<'static>> {
    let category_style = palette.title().add_modifier(Modifier::UNDERLINED);
    let key_style = palette.active_filter();
    let desc_style = Style::default();

    let mut lines = Vec::new();
    for (index, (category, rows)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (keys, description) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<14}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
