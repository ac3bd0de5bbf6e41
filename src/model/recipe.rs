//! Recipe records and query values.
//!
//! Recipes are read-only data supplied by a [`crate::source`]. The query
//! types are plain values owned by the input controller and replaced on
//! every change.

use serde::{Deserialize, Serialize};
use std::fmt;

// ===== RecipeId =====

/// Stable identifier of a recipe within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(u32);

impl RecipeId {
    /// Wrap a raw dataset id.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ===== Recipe =====

/// A single recipe as it appears in the dataset.
///
/// Only `title`, `description`, `ingredients`, `cuisine` and `difficulty`
/// take part in filtering. The remaining fields are display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique within a catalog.
    pub id: RecipeId,
    /// Card and overlay title; searched.
    pub title: String,
    /// Missing descriptions never match a search term.
    #[serde(default)]
    pub description: Option<String>,
    /// Ingredient lines; searched one by one.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Ordered preparation steps, shown in the detail overlay.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Cuisine category, matched exactly.
    pub cuisine: String,
    /// Difficulty category, matched exactly.
    pub difficulty: String,
    /// Free-form duration such as `30 mins`.
    #[serde(default)]
    pub cook_time: String,
    /// Number of servings.
    #[serde(default)]
    pub servings: u32,
    /// Image URL. Kept for round-tripping; terminals do not show it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recipe {
    /// Minimal recipe with the filterable fields set; display fields empty.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        cuisine: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            id: RecipeId::new(id),
            title: title.into(),
            description: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            cuisine: cuisine.into(),
            difficulty: difficulty.into(),
            cook_time: String::new(),
            servings: 0,
            image: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the ingredient list.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the instruction steps.
    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    /// Set cook time and servings.
    pub fn with_cook_time(mut self, cook_time: impl Into<String>, servings: u32) -> Self {
        self.cook_time = cook_time.into();
        self.servings = servings;
        self
    }

    /// Description text, or the empty string when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

// ===== Filters =====

/// Combined category selections. Empty string means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Filters {
    /// Selected cuisine, or empty for any.
    pub cuisine: String,
    /// Selected difficulty, or empty for any.
    pub difficulty: String,
}

impl Filters {
    /// Filters from the two selections.
    pub fn new(cuisine: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            cuisine: cuisine.into(),
            difficulty: difficulty.into(),
        }
    }

    /// True when neither category is selected.
    pub fn is_empty(&self) -> bool {
        self.cuisine.is_empty() && self.difficulty.is_empty()
    }
}

// ===== QueryState =====

/// Search text plus category selections.
///
/// Every field uses the empty string for "no constraint", never for
/// "match an empty field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryState {
    /// Search text, matched as a case-insensitive substring.
    pub search_term: String,
    /// Category selections.
    pub filters: Filters,
}

impl QueryState {
    /// Query from its three raw values.
    pub fn new(
        search_term: impl Into<String>,
        cuisine: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            filters: Filters::new(cuisine, difficulty),
        }
    }

    /// Selected cuisine.
    pub fn cuisine(&self) -> &str {
        &self.filters.cuisine
    }

    /// Selected difficulty.
    pub fn difficulty(&self) -> &str {
        &self.filters.difficulty
    }

    /// True when any field constrains the result set.
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.filters.is_empty()
    }
}
