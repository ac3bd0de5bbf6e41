//! Recipe filter evaluation.
//!
//! Pure functions over borrowed recipes. Results are recomputed from scratch
//! on every call; catalogs are small enough that no index is kept.

use crate::model::{QueryState, Recipe};

// ===== Evaluation =====

/// Return the recipes that satisfy every criterion, in catalog order.
///
/// - `search_term`: case-insensitive substring of the title, any ingredient,
///   or the description. Empty matches everything.
/// - `cuisine` / `difficulty`: exact, case-sensitive equality. Empty matches
///   everything.
pub fn evaluate<'a>(
    recipes: &'a [Recipe],
    search_term: &str,
    cuisine: &str,
    difficulty: &str,
) -> Vec<&'a Recipe> {
    let needle = search_term.to_lowercase();

    recipes
        .iter()
        .filter(|recipe| {
            matches_search(recipe, &needle)
                && matches_category(&recipe.cuisine, cuisine)
                && matches_category(&recipe.difficulty, difficulty)
        })
        .collect()
}

/// [`evaluate`] with the criteria taken from a [`QueryState`].
pub fn evaluate_query<'a>(recipes: &'a [Recipe], query: &QueryState) -> Vec<&'a Recipe> {
    evaluate(
        recipes,
        &query.search_term,
        query.cuisine(),
        query.difficulty(),
    )
}

/// Single-recipe form of the filter predicate.
pub fn matches(recipe: &Recipe, query: &QueryState) -> bool {
    matches_search(recipe, &query.search_term.to_lowercase())
        && matches_category(&recipe.cuisine, query.cuisine())
        && matches_category(&recipe.difficulty, query.difficulty())
}

/// `needle` must already be lowercased.
fn matches_search(recipe: &Recipe, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    contains_lowercase(&recipe.title, needle)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| contains_lowercase(ingredient, needle))
        || recipe
            .description
            .as_deref()
            .is_some_and(|description| contains_lowercase(description, needle))
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn matches_category(value: &str, selected: &str) -> bool {
    selected.is_empty() || value == selected
}

// ===== Headings =====

/// Heading shown above the grid.
///
/// An unconstrained result reads `All Recipes (N)`; anything narrower reads
/// `Found N recipe(s)`.
pub fn results_heading(matched: usize, total: usize) -> String {
    if matched == total {
        format!("All Recipes ({total})")
    } else if matched == 1 {
        "Found 1 recipe".to_string()
    } else {
        format!("Found {matched} recipes")
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
