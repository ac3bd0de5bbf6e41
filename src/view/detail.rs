//! Recipe detail overlay.

use super::constants::{DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT};
use super::helpers::centered_rect;
use super::styles::Palette;
use crate::model::Recipe;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the full recipe centered over the grid.
pub fn render_detail_overlay(frame: &mut Frame, recipe: &Recipe, palette: Palette) {
    let popup_area = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(detail_lines(recipe, palette))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.card_border(true))
                .title(Span::styled(format!(" {} ", recipe.title), palette.title())),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Press Esc to close ",
            palette.muted(),
        )))
        .alignment(Alignment::Center),
        hint_area,
    );
}

/// Body lines: badges, description, stats, ingredients, numbered steps.
pub fn detail_lines(recipe: &Recipe, palette: Palette) -> Vec<Line<'static>> {
    let section = palette.title().add_modifier(Modifier::UNDERLINED);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}]", recipe.cuisine), palette.cuisine()),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", recipe.difficulty),
                palette.difficulty(&recipe.difficulty),
            ),
        ]),
        Line::from(""),
    ];

    if let Some(description) = &recipe.description {
        lines.push(Line::from(description.clone()));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Cook time: ", palette.muted()),
        Span::raw(recipe.cook_time.clone()),
        Span::styled("   Servings: ", palette.muted()),
        Span::raw(recipe.servings.to_string()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Ingredients", section)));
    lines.extend(
        recipe
            .ingredients
            .iter()
            .map(|ingredient| Line::from(format!("  • {ingredient}"))),
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Instructions", section)));
    lines.extend(
        recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(step, text)| Line::from(format!("  {}. {text}", step + 1))),
    );

    lines
}
