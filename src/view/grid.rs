//! Recipe grid: responsive rows of cards, or an empty-state message.

use super::constants::{CARD_HEIGHT, MIN_CARD_WIDTH};
use super::helpers::truncate_to_width;
use super::styles::Palette;
use crate::model::Recipe;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Message shown when the committed query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No recipes found";

/// Rows under the description: timing, then cuisine.
const META_LINES: u16 = 2;

/// Cards per row for a grid `width` columns wide.
///
/// Never less than one, so narrow terminals still show a single column.
pub fn columns_for_width(width: u16, card_width: u16) -> usize {
    let card_width = card_width.max(MIN_CARD_WIDTH);
    usize::from((width / card_width).max(1))
}

/// Grid widget over the filtered recipes.
pub struct RecipeGrid<'a> {
    recipes: &'a [&'a Recipe],
    selected: Option<usize>,
    card_width: u16,
    palette: Palette,
}

impl<'a> RecipeGrid<'a> {
    /// Grid over `recipes`, highlighting `selected`.
    pub fn new(
        recipes: &'a [&'a Recipe],
        selected: Option<usize>,
        card_width: u16,
        palette: Palette,
    ) -> Self {
        Self {
            recipes,
            selected,
            card_width,
            palette,
        }
    }

    /// First row to draw so the selected card stays on screen.
    fn first_visible_row(&self, columns: usize, visible_rows: usize) -> usize {
        let Some(selected) = self.selected else {
            return 0;
        };
        let selected_row = selected / columns;
        (selected_row + 1).saturating_sub(visible_rows.max(1))
    }

    fn render_card(&self, recipe: &Recipe, selected: bool, area: Rect, buf: &mut Buffer) {
        let inner_width = usize::from(area.width.saturating_sub(2));
        let badge = format!(" {} ", recipe.difficulty);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.card_border(selected))
            .title(Span::styled(
                truncate_to_width(&recipe.title, inner_width.saturating_sub(badge.len() + 1)),
                self.palette.title(),
            ))
            .title(
                Line::from(Span::styled(badge, self.palette.difficulty(&recipe.difficulty)))
                    .alignment(Alignment::Right),
            );

        let timing = Line::from(Span::raw(truncate_to_width(
            &format!("⏱ {}  {} servings", recipe.cook_time, recipe.servings),
            inner_width,
        )));
        let cuisine = Line::from(Span::styled(
            truncate_to_width(&recipe.cuisine, inner_width),
            self.palette.cuisine(),
        ));

        let description = Line::from(Span::styled(
            recipe.description_text().to_string(),
            self.palette.muted(),
        ));

        // Description wraps into the rows above timing and cuisine.
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }
        let meta_height = META_LINES.min(inner.height);
        let description_area = Rect {
            height: inner.height - meta_height,
            ..inner
        };
        let meta_area = Rect {
            y: inner.y + inner.height - meta_height,
            height: meta_height,
            ..inner
        };

        Paragraph::new(description)
            .wrap(Wrap { trim: true })
            .render(description_area, buf);
        // Cuisine is last so it survives the shortest cards.
        let meta = if meta_height < META_LINES {
            vec![cuisine]
        } else {
            vec![timing, cuisine]
        };
        Paragraph::new(meta).render(meta_area, buf);
    }
}

impl Widget for RecipeGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.recipes.is_empty() {
            let y = area.y + area.height / 2;
            let message_area = Rect {
                y,
                height: 1.min(area.height),
                ..area
            };
            Paragraph::new(Line::from(Span::styled(NO_RESULTS_MESSAGE, self.palette.muted())))
                .alignment(Alignment::Center)
                .render(message_area, buf);
            return;
        }

        let columns = columns_for_width(area.width, self.card_width);
        let card_width = area.width / columns as u16;
        let visible_rows = usize::from(area.height / CARD_HEIGHT);
        let first_row = self.first_visible_row(columns, visible_rows);

        for (index, recipe) in self.recipes.iter().enumerate().skip(first_row * columns) {
            let row = index / columns - first_row;
            if row >= visible_rows {
                break;
            }
            let column = index % columns;
            let card_area = Rect {
                x: area.x + column as u16 * card_width,
                y: area.y + row as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            };
            self.render_card(recipe, self.selected == Some(index), card_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn recipes() -> Vec<Recipe> {
        (1..=6)
            .map(|i| {
                Recipe::new(i, format!("Recipe {i}"), "Italian", "Easy")
                    .with_description(format!("Description {i}"))
                    .with_cook_time("10 mins", 2)
            })
            .collect()
    }

    fn render(recipes: &[&Recipe], selected: Option<usize>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let grid =
                    RecipeGrid::new(recipes, selected, 30, Palette::new(ColorConfig::disabled()));
                frame.render_widget(grid, frame.area());
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
    fn columns_follow_width() {
        assert_eq!(columns_for_width(120, 36), 3);
        assert_eq!(columns_for_width(71, 36), 1);
        assert_eq!(columns_for_width(10, 36), 1);
    }

    #[test]
    fn columns_respect_minimum_card_width() {
        assert_eq!(columns_for_width(100, 5), 5);
    }

    #[test]
    fn empty_results_show_message() {
        let out = render(&[], None, 60, 10);
        assert!(out.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn cards_show_title_badge_and_meta() {
        let catalog = recipes();
        let refs: Vec<&Recipe> = catalog.iter().take(2).collect();
        let out = render(&refs, Some(0), 60, CARD_HEIGHT);

        assert!(out.contains("Recipe 1"));
        assert!(out.contains("Recipe 2"));
        assert!(out.contains(" Easy "));
        assert!(out.contains("Description 1"));
        assert!(out.contains("2 servings"));
        assert!(out.contains("Italian"));
    }

    #[test]
    fn narrow_cards_keep_cuisine() {
        let catalog = vec![
            Recipe::new(1, "Chicken Enchiladas", "Mexican", "Medium").with_cook_time("45 mins", 6),
            Recipe::new(2, "Pad Thai", "Asian", "Medium").with_cook_time("30 mins", 2),
        ];
        let refs: Vec<&Recipe> = catalog.iter().collect();

        let mut terminal = Terminal::new(TestBackend::new(40, CARD_HEIGHT)).unwrap();
        terminal
            .draw(|frame| {
                let grid = RecipeGrid::new(
                    &refs,
                    None,
                    MIN_CARD_WIDTH,
                    Palette::new(ColorConfig::disabled()),
                );
                frame.render_widget(grid, frame.area());
            })
            .unwrap();
        let out = crate::test_harness::buffer_to_string(terminal.backend().buffer());

        assert!(out.contains("Mexican"));
        assert!(out.contains("Asian"));
        assert!(out.contains("45 mins"));
    }

    #[test]
    fn grid_scrolls_to_keep_selection_visible() {
        let catalog = recipes();
        let refs: Vec<&Recipe> = catalog.iter().collect();
        // Two columns, one visible row: selecting card 5 shows row 2.
        let out = render(&refs, Some(4), 60, CARD_HEIGHT);

        assert!(out.contains("Recipe 5"));
        assert!(out.contains("Recipe 6"));
        assert!(!out.contains("Recipe 1"));
    }
}
