//! Fixed category lists offered by the search bar.

/// Cuisines the search bar cycles through.
pub const CUISINES: [&str; 5] = ["Italian", "Indian", "American", "Mexican", "Asian"];

/// Difficulty levels the search bar cycles through.
pub const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Step through the ring `"" → options[0] → … → options[n-1] → ""`.
///
/// A `current` value outside `options` is treated as a stale selection:
/// forward returns to `""`, backward jumps to the last option.
pub fn cycle_option(options: &[&str], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return String::new();
    }

    let position = if current.is_empty() {
        None
    } else {
        match options.iter().position(|o| *o == current) {
            Some(idx) => Some(idx),
            None => {
                return if forward {
                    String::new()
                } else {
                    options[options.len() - 1].to_string()
                };
            }
        }
    };

    let next = match (position, forward) {
        (None, true) => Some(0),
        (None, false) => Some(options.len() - 1),
        (Some(idx), true) if idx + 1 < options.len() => Some(idx + 1),
        (Some(_), true) => None,
        (Some(0), false) => None,
        (Some(idx), false) => Some(idx - 1),
    };

    next.map(|idx| options[idx].to_string()).unwrap_or_default()
}

/// Whether `value` is empty or one of `options`.
pub fn is_known_option(options: &[&str], value: &str) -> bool {
    value.is_empty() || options.contains(&value)
}
