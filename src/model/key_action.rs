//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`KeyBindings`](crate::config::KeyBindings). Text editing in the search
/// field bypasses this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Grid navigation
    /// Move selection one card left. Default: h/←
    SelectLeft,
    /// Move selection one card right. Default: l/→
    SelectRight,
    /// Move selection one row up. Default: k/↑
    SelectUp,
    /// Move selection one row down. Default: j/↓
    SelectDown,
    /// Jump to the first card. Default: g/Home
    SelectFirst,
    /// Jump to the last card. Default: G/End
    SelectLast,

    // Detail overlay
    /// Open the detail overlay for the selected card. Default: Enter
    OpenDetail,
    /// Close the detail overlay or help. Default: Esc
    CloseOverlay,

    // Search and filters
    /// Move focus into the search field. Default: / or Ctrl+f
    FocusSearch,
    /// Step cuisine filter forward. Default: c
    NextCuisine,
    /// Step cuisine filter backward. Default: C
    PrevCuisine,
    /// Step difficulty filter forward. Default: d
    NextDifficulty,
    /// Step difficulty filter backward. Default: D
    PrevDifficulty,
    /// Reset search text and both filters. Default: x
    ClearAll,

    // Application
    /// Show help overlay. Default: ?
    Help,
    /// Exit the application. Default: q
    Quit,
}

impl KeyAction {
    /// Whether this action is still honoured while the help overlay is open.
    pub fn allowed_during_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Quit | KeyAction::CloseOverlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_blocks_navigation_actions() {
        assert!(!KeyAction::SelectDown.allowed_during_help());
        assert!(!KeyAction::NextCuisine.allowed_during_help());
        assert!(!KeyAction::OpenDetail.allowed_during_help());
    }

    #[test]
    fn help_allows_dismissal_and_quit() {
        assert!(KeyAction::Help.allowed_during_help());
        assert!(KeyAction::CloseOverlay.allowed_during_help());
        assert!(KeyAction::Quit.allowed_during_help());
    }
}
