//! Screen layout: header, search bar, results heading, grid, status bar.
//!
//! Pure rendering of AppState; overlays are drawn on top by the caller.

use super::constants::{
    HEADER_HEIGHT, RESULTS_HEADING_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT,
};
use super::grid::RecipeGrid;
use super::search_bar::SearchBar;
use super::styles::Palette;
use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title and subtitle.
    pub header: Rect,
    /// Search field and selectors.
    pub search: Rect,
    /// Results heading.
    pub heading: Rect,
    /// Recipe cards.
    pub grid: Rect,
    /// Key hints.
    pub status: Rect,
}

/// Split `area` into the fixed bands plus a flexible grid.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let [header, search, heading, grid, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Length(RESULTS_HEADING_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    ScreenAreas {
        header,
        search,
        heading,
        grid,
        status,
    }
}

/// Render the main screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: Palette, card_width: u16) {
    let areas = screen_areas(frame.area());

    render_header(frame, areas.header, palette);

    frame.render_widget(
        SearchBar::new(state.input(), state.focus == Focus::Search, palette),
        areas.search,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(state.heading(), palette.title()))),
        areas.heading,
    );

    let visible = state.visible_recipes();
    frame.render_widget(
        RecipeGrid::new(&visible, state.selected_index(), card_width, palette),
        areas.grid,
    );

    render_status_bar(frame, areas.status, state, palette);
}

fn render_header(frame: &mut Frame, area: Rect, palette: Palette) {
    let lines = vec![
        Line::from(Span::styled("Recipe Finder", palette.title())),
        Line::from(Span::styled(
            "Discover delicious recipes from around the world",
            palette.muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let hint = match state.focus {
        Focus::Search => "Type to search · Enter/Esc: back to grid · Ctrl+c: quit",
        Focus::Grid => "/: search · c/d: filters · x: clear · Enter: details · ?: help · q: quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, palette.muted()))),
        area,
    );
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
