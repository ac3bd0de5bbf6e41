//! Domain model types (pure).
//!
//! All types in this module are plain data with no I/O.

pub mod error;
pub mod key_action;
pub mod options;
pub mod recipe;

// Re-export for convenience
pub use error::{AppError, DataError};
pub use key_action::KeyAction;
pub use options::{cycle_option, is_known_option, CUISINES, DIFFICULTIES};
pub use recipe::{Filters, QueryState, Recipe, RecipeId};
