//! Recipe catalog sources.
//!
//! - Built-in catalog embedded at compile time
//! - JSON file given on the command line or in the config
//!
//! Both parse at the boundary and hand back validated `Vec<Recipe>`.

use crate::model::{is_known_option, DataError, Recipe, CUISINES, DIFFICULTIES};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod builtin;

pub use builtin::BUILTIN_CATALOG_JSON;

/// Where the recipe catalog comes from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSource {
    /// Catalog compiled into the binary.
    Builtin,
    /// JSON array of recipes on disk.
    File(PathBuf),
}

impl RecipeSource {
    /// File source when a path is given, built-in otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => RecipeSource::File(path),
            None => RecipeSource::Builtin,
        }
    }

    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DataError` if the file is missing or unreadable, the JSON is
    /// not an array of recipes, the array is empty, or ids repeat.
    pub fn load(&self) -> Result<Vec<Recipe>, DataError> {
        let recipes = match self {
            RecipeSource::Builtin => parse_recipes(BUILTIN_CATALOG_JSON, "built-in catalog")?,
            RecipeSource::File(path) => load_file(path)?,
        };

        info!(source = ?self, count = recipes.len(), "Recipe catalog loaded");
        warn_unselectable(&recipes);
        Ok(recipes)
    }
}

/// Recipes whose category is not in the option lists load fine but can only
/// be reached through the search box.
fn warn_unselectable(recipes: &[Recipe]) {
    for recipe in recipes {
        if !is_known_option(&CUISINES, &recipe.cuisine)
            || !is_known_option(&DIFFICULTIES, &recipe.difficulty)
        {
            warn!(
                recipe = %recipe.id,
                cuisine = %recipe.cuisine,
                difficulty = %recipe.difficulty,
                "Recipe category is not offered by the filters"
            );
        }
    }
}

fn load_file(path: &Path) -> Result<Vec<Recipe>, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_recipes(&contents, &path.display().to_string())
}

/// Parse a JSON array of recipes and validate it.
///
/// `origin` appears in error messages.
pub fn parse_recipes(json: &str, origin: &str) -> Result<Vec<Recipe>, DataError> {
    let recipes: Vec<Recipe> = serde_json::from_str(json).map_err(|source| DataError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    if recipes.is_empty() {
        return Err(DataError::Empty);
    }

    validate_unique_ids(&recipes)?;
    Ok(recipes)
}

/// Reject catalogs where two recipes share an id.
pub fn validate_unique_ids(recipes: &[Recipe]) -> Result<(), DataError> {
    let mut seen: HashMap<_, &str> = HashMap::with_capacity(recipes.len());

    for recipe in recipes {
        if let Some(first) = seen.insert(recipe.id, recipe.title.as_str()) {
            return Err(DataError::DuplicateId {
                id: recipe.id,
                first: first.to_string(),
                second: recipe.title.clone(),
            });
        }
    }

    Ok(())
}
