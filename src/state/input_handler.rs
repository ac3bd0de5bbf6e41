//! Keyboard dispatch onto AppState transitions.
//!
//! Kept free of terminal I/O so the full key flow is testable with a
//! simulated clock.

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{AppState, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Result of handling one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Handle a key event.
///
/// `columns` is the number of cards per grid row at the current width, used
/// for vertical navigation.
pub fn handle_key(
    state: &mut AppState,
    bindings: &KeyBindings,
    key: KeyEvent,
    now: Instant,
    columns: usize,
) -> KeyOutcome {
    // Ctrl+C always quits, whatever has focus.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    // The help overlay hides the search field, so it takes no text.
    if state.focus == Focus::Search
        && !state.help_visible
        && handle_search_key(state, key, now)
    {
        return KeyOutcome::Continue;
    }

    let Some(action) = bindings.get(key) else {
        return KeyOutcome::Continue;
    };

    if state.help_visible && !action.allowed_during_help() {
        return KeyOutcome::Continue;
    }

    handle_action(state, action, columns)
}

/// Text editing while the search field has focus.
///
/// Returns `true` if the key was consumed.
fn handle_search_key(state: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.type_char(ch, now);
            true
        }
        KeyCode::Backspace => {
            state.backspace(now);
            true
        }
        KeyCode::Enter | KeyCode::Tab | KeyCode::Esc | KeyCode::Down => {
            state.focus_grid();
            true
        }
        _ => false,
    }
}

/// Apply a bound action.
pub fn handle_action(state: &mut AppState, action: KeyAction, columns: usize) -> KeyOutcome {
    match action {
        KeyAction::Quit => return KeyOutcome::Quit,
        KeyAction::Help => state.toggle_help(),
        KeyAction::CloseOverlay => {
            if state.help_visible {
                state.help_visible = false;
            } else {
                state.close_detail();
            }
        }
        // Grid actions are inert while the detail overlay is open.
        _ if state.detail_recipe().is_some() => {}
        KeyAction::FocusSearch => state.focus_search(),
        KeyAction::SelectLeft => state.select_left(),
        KeyAction::SelectRight => state.select_right(),
        KeyAction::SelectUp => state.select_up(columns),
        KeyAction::SelectDown => state.select_down(columns),
        KeyAction::SelectFirst => state.select_first(),
        KeyAction::SelectLast => state.select_last(),
        KeyAction::OpenDetail => state.open_detail(),
        KeyAction::NextCuisine => state.cycle_cuisine(true),
        KeyAction::PrevCuisine => state.cycle_cuisine(false),
        KeyAction::NextDifficulty => state.cycle_difficulty(true),
        KeyAction::PrevDifficulty => state.cycle_difficulty(false),
        KeyAction::ClearAll => state.clear_all(),
    }

    KeyOutcome::Continue
}

// ===== Tests =====

#[cfg(test)]
#[path = "input_handler_tests.rs"]
mod tests;
