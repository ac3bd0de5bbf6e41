//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions
//! are plain methods; nothing here touches the terminal or a clock.

use crate::filter::{evaluate_query, results_heading};
use crate::model::{cycle_option, Filters, QueryState, Recipe, RecipeId, CUISINES, DIFFICULTIES};
use crate::state::debounce::{DebouncedInput, QueryObserver};
use std::time::Instant;
use tracing::debug;

// ===== Focus =====

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Printable keys edit the search text.
    Search,
    /// Keys navigate cards and change filters.
    #[default]
    Grid,
}

// ===== CommittedQuery =====

/// The query the grid is filtered by.
///
/// Receives emissions from the [`DebouncedInput`], so it lags the raw text
/// by the debounce window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommittedQuery {
    query: QueryState,
    revision: u64,
}

impl CommittedQuery {
    /// Start from an already committed query, revision zero.
    pub fn new(query: QueryState) -> Self {
        Self { query, revision: 0 }
    }

    /// The last committed query.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Incremented on every emission received.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl QueryObserver for CommittedQuery {
    fn emit_query(&mut self, committed_term: &str) {
        self.query.search_term = committed_term.to_string();
        self.revision += 1;
    }

    fn emit_filters(&mut self, filters: &Filters) {
        self.query.filters = filters.clone();
        self.revision += 1;
    }
}

// ===== AppState =====

/// Application state. No side effects beyond its own fields.
///
/// # State
///
/// - **Catalog**: the recipes, read-only after construction
/// - **Input**: raw search text and selections, with the debounce timer
/// - **Committed**: the query the grid currently reflects
/// - **Selection**: index into the filtered results
/// - **Overlays**: recipe detail and help
#[derive(Debug)]
pub struct AppState {
    recipes: Vec<Recipe>,
    input: DebouncedInput,
    committed: CommittedQuery,
    /// Which part of the screen receives keystrokes.
    pub focus: Focus,
    selected: usize,
    detail: Option<RecipeId>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Create state over `recipes`, committing the controller's initial query.
    pub fn new(recipes: Vec<Recipe>, input: DebouncedInput) -> Self {
        let committed = CommittedQuery::new(input.query().clone());
        Self {
            recipes,
            input,
            committed,
            focus: Focus::default(),
            selected: 0,
            detail: None,
            help_visible: false,
        }
    }

    /// The full catalog, in dataset order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The input controller holding the raw, uncommitted values.
    pub fn input(&self) -> &DebouncedInput {
        &self.input
    }

    /// The query the grid is filtered by.
    pub fn committed(&self) -> &QueryState {
        self.committed.query()
    }

    /// Recipes matching the committed query, recomputed on every call.
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        evaluate_query(&self.recipes, self.committed.query())
    }

    /// Heading for the current result set.
    pub fn heading(&self) -> String {
        results_heading(self.visible_recipes().len(), self.recipes.len())
    }

    // ===== Search and filters =====

    /// Move keyboard focus to the search field.
    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    /// Move keyboard focus back to the grid.
    pub fn focus_grid(&mut self) {
        self.focus = Focus::Grid;
    }

    /// Append `ch` to the search text and restart the quiet period.
    pub fn type_char(&mut self, ch: char, now: Instant) {
        self.input.on_char(ch, now);
    }

    /// Delete the last search character and restart the quiet period.
    pub fn backspace(&mut self, now: Instant) {
        self.input.on_backspace(now);
    }

    /// Deliver a due debounce emission. Returns `true` if the grid changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.with_committed_change(|input, committed| input.poll(now, committed))
    }

    /// Step the cuisine selector, committing at once.
    pub fn cycle_cuisine(&mut self, forward: bool) {
        let next = cycle_option(&CUISINES, self.input.query().cuisine(), forward);
        self.with_committed_change(|input, committed| {
            input.on_cuisine_change(next, committed);
            true
        });
    }

    /// Step the difficulty selector, committing at once.
    pub fn cycle_difficulty(&mut self, forward: bool) {
        let next = cycle_option(&DIFFICULTIES, self.input.query().difficulty(), forward);
        self.with_committed_change(|input, committed| {
            input.on_difficulty_change(next, committed);
            true
        });
    }

    /// Reset search text and filters, committing immediately.
    pub fn clear_all(&mut self) {
        self.with_committed_change(|input, committed| {
            input.on_clear(committed);
            true
        });
    }

    /// Run a controller operation and reset the selection if the committed
    /// query moved.
    fn with_committed_change<F>(&mut self, op: F) -> bool
    where
        F: FnOnce(&mut DebouncedInput, &mut CommittedQuery) -> bool,
    {
        let before = self.committed.revision();
        let emitted = op(&mut self.input, &mut self.committed);
        if self.committed.revision() != before {
            self.selected = 0;
            debug!(
                query = ?self.committed.query(),
                matches = self.visible_recipes().len(),
                "Committed query changed"
            );
        }
        emitted
    }

    // ===== Selection =====

    /// Index of the selected card, `None` when nothing matches.
    pub fn selected_index(&self) -> Option<usize> {
        let count = self.visible_recipes().len();
        (count > 0).then(|| self.selected.min(count - 1))
    }

    /// The recipe under the selection.
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        let index = self.selected_index()?;
        self.visible_recipes().get(index).copied()
    }

    /// Move one card back, stopping at the first.
    pub fn select_left(&mut self) {
        if let Some(index) = self.selected_index() {
            self.selected = index.saturating_sub(1);
        }
    }

    /// Move one card forward, stopping at the last.
    pub fn select_right(&mut self) {
        self.move_selection(1);
    }

    /// Move one row up; no-op on the first row.
    pub fn select_up(&mut self, columns: usize) {
        if let Some(index) = self.selected_index() {
            let columns = columns.max(1);
            if index >= columns {
                self.selected = index - columns;
            }
        }
    }

    /// Move one row down; no-op when the row below has no card in this column.
    pub fn select_down(&mut self, columns: usize) {
        let columns = columns.max(1);
        if let Some(index) = self.selected_index() {
            if index + columns < self.visible_recipes().len() {
                self.selected = index + columns;
            }
        }
    }

    /// Select the first card.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Select the last card.
    pub fn select_last(&mut self) {
        self.selected = self.visible_recipes().len().saturating_sub(1);
    }

    fn move_selection(&mut self, delta: usize) {
        let count = self.visible_recipes().len();
        if let Some(index) = self.selected_index() {
            self.selected = (index + delta).min(count - 1);
        }
    }

    // ===== Overlays =====

    /// Show the detail overlay for the selected card, if any.
    pub fn open_detail(&mut self) {
        self.detail = self.selected_recipe().map(|recipe| recipe.id);
        if let Some(id) = self.detail {
            debug!(recipe = %id, "Detail opened");
        }
    }

    /// Hide the detail overlay.
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Recipe shown in the detail overlay.
    pub fn detail_recipe(&self) -> Option<&Recipe> {
        let id = self.detail?;
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
