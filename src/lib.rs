//! Recipe Finder
//!
//! TUI application for browsing a recipe catalog with a debounced search
//! box and cuisine/difficulty filters.
//!
//! Pure core (`model`, `filter`, `state`) and impure shell (`source`,
//! `config`, `logging`, `view`).

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
