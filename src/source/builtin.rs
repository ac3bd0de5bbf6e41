//! Catalog compiled into the binary.

/// JSON text of the built-in catalog.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/recipes.json");
