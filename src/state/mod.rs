//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI. Time is
//! passed in as an `Instant`, never read from the system clock here.

pub mod app_state;
pub mod debounce;
pub mod input_handler;

// Re-export for convenience
pub use app_state::{AppState, CommittedQuery, Focus};
pub use debounce::{
    DebounceState, DebouncedInput, Emission, QueryObserver, TimerHandle, DEFAULT_DEBOUNCE,
};
pub use input_handler::{handle_action, handle_key, KeyOutcome};
