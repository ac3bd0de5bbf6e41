//! Error types for recipe-finder.
//!
//! Errors are defined per concern with `thiserror` and compose through `From`
//! conversions so callers can propagate with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from application start-up
//!   - [`DataError`] - Recipe dataset loading failures (missing file, bad JSON, duplicate ids)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - `std::io::Error` - Terminal failures
//!
//! The filtering core and the debounced input controller have no failure
//! modes and return no errors. Every error here is fatal at start-up and is
//! reported on stderr after the terminal has been restored.

use std::path::PathBuf;
use thiserror::Error;

use super::RecipeId;

/// Top-level application error encompassing all start-up failure modes.
///
/// # Examples
///
/// ```
/// use recipe_finder::model::error::{AppError, DataError};
///
/// fn load() -> Result<(), DataError> {
///     Err(DataError::Empty)
/// }
///
/// fn run_app() -> Result<(), AppError> {
///     load()?;
///     Ok(())
/// }
///
/// assert!(run_app().is_err());
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The recipe dataset could not be loaded.
    #[error("Failed to load recipes: {0}")]
    Data(#[from] DataError),

    /// The configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Raised by the crossterm/ratatui layer (raw mode, alternate screen,
    /// drawing). Without a working terminal the browser cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading a recipe dataset.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use recipe_finder::model::error::DataError;
///
/// let err = DataError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.json"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.json"));
/// ```
#[derive(Debug, Error)]
pub enum DataError {
    /// The recipes file given on the command line or in the config does not exist.
    #[error("Recipes file not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The recipes file exists but could not be read.
    #[error("Failed to read recipes file {path}: {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of recipe objects.
    ///
    /// `origin` names where the JSON came from (a file path or the
    /// built-in catalog) so the message is actionable.
    #[error("Invalid recipe JSON in {origin}: {source}")]
    Parse {
        /// Human-readable origin of the JSON text.
        origin: String,
        /// The serde_json error, carrying line and column.
        #[source]
        source: serde_json::Error,
    },

    /// Two recipes share the same identifier.
    ///
    /// Identifiers key the detail overlay and card selection, so they must
    /// be unique within a catalog.
    #[error("Duplicate recipe id {id} (titles {first:?} and {second:?})")]
    DuplicateId {
        /// The repeated identifier.
        id: RecipeId,
        /// Title of the first recipe carrying the id.
        first: String,
        /// Title of the later recipe carrying the id.
        second: String,
    },

    /// The dataset parsed but contains no recipes.
    #[error("Recipe dataset is empty")]
    Empty,
}
