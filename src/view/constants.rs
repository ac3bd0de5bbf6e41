//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout numbers so the widgets and the key
//! handler agree on geometry.

/// Height of the title header (title + subtitle).
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the search bar (bordered input row).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the results heading line.
pub const RESULTS_HEADING_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of one recipe card including borders.
pub const CARD_HEIGHT: u16 = 7;

/// Narrowest card the grid will draw.
pub const MIN_CARD_WIDTH: u16 = 20;

/// Width percentage for the detail overlay.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 80;

/// Height percentage for the detail overlay.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 85;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
