//! Snapshot tests for key view components
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use recipe_finder::filter::results_heading;
use recipe_finder::model::Recipe;
use recipe_finder::state::{AppState, DebouncedInput, Emission};
use recipe_finder::view::{
    detail_lines, render_layout, ColorConfig, Palette, RecipeGrid, NO_RESULTS_MESSAGE,
};
use std::time::{Duration, Instant};

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string, dropping blank lines.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
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

fn palette() -> Palette {
    Palette::new(ColorConfig::disabled())
}

fn chai() -> Recipe {
    Recipe::new(1, "Masala Chai", "Indian", "Easy")
        .with_description("Spiced milk tea.")
        .with_ingredients(["black tea", "milk"])
        .with_instructions(["Simmer the spices.", "Add tea and strain."])
        .with_cook_time("10 mins", 2)
}

fn render_screen(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, palette(), 36))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

// ===== Text snapshots =====

#[test]
fn snapshot_results_headings() {
    let headings = [(12, 12), (1, 12), (3, 12), (0, 12)]
        .iter()
        .map(|&(matched, total)| results_heading(matched, total))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(headings, @r"
    All Recipes (12)
    Found 1 recipe
    Found 3 recipes
    Found 0 recipes
    ");
}

#[test]
fn snapshot_detail_body() {
    let body = detail_lines(&chai(), palette())
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(body, @r"
    [Indian] [Easy]

    Spiced milk tea.

    Cook time: 10 mins   Servings: 2

    Ingredients
      • black tea
      • milk

    Instructions
      1. Simmer the spices.
      2. Add tea and strain.
    ");
}

// ===== Rendered screens =====

#[test]
fn first_frame_shows_header_then_cards() {
    let state = AppState::new(vec![chai()], DebouncedInput::new(Duration::from_millis(500)));
    let screen = render_screen(&state, 130, 20);

    let first_lines: Vec<&str> = screen.lines().take(2).collect();
    assert_eq!(
        first_lines,
        vec![
            "Recipe Finder",
            "Discover delicious recipes from around the world"
        ]
    );
    assert!(screen.contains("All Recipes (1)"));
    assert!(screen.contains("Masala Chai"));
    assert!(screen.contains("10 mins"));
}

#[test]
fn committed_search_with_no_match_renders_empty_state() {
    let mut state = AppState::new(vec![chai()], DebouncedInput::new(Duration::from_millis(500)));
    let base = Instant::now();
    for ch in "pizza".chars() {
        state.type_char(ch, base);
    }

    let before = render_screen(&state, 130, 20);
    assert!(before.contains("pizza"), "raw text shows immediately");
    assert!(before.contains("Masala Chai"), "grid waits for the debounce");

    state.tick(base + Duration::from_millis(500));
    let after = render_screen(&state, 130, 20);
    assert!(after.contains(NO_RESULTS_MESSAGE));
    assert!(after.contains("Found 0 recipes"));
}

#[test]
fn grid_widget_renders_empty_message_alone() {
    let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
    terminal
        .draw(|frame| frame.render_widget(RecipeGrid::new(&[], None, 36, palette()), frame.area()))
        .unwrap();

    assert_eq!(
        buffer_to_string(terminal.backend().buffer()).trim(),
        NO_RESULTS_MESSAGE
    );
}

#[test]
fn active_filters_render_in_search_bar() {
    let mut input = DebouncedInput::new(Duration::from_millis(500));
    let mut sink: Vec<Emission> = Vec::new();
    input.on_cuisine_change("Indian", &mut sink);

    let state = AppState::new(vec![chai()], input);
    let screen = render_screen(&state, 130, 20);
    assert!(screen.contains("Cuisine Indian [c]"));
    assert!(screen.contains("All Difficulties"));
    assert!(screen.contains("Clear All [x]"));
}
