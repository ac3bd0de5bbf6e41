//! Debounced search input controller.
//!
//! Raw keystrokes update the controller's [`QueryState`] immediately, but the
//! search text reaches the observer only after a quiet period. Category
//! selections and "clear" bypass the delay.
//!
//! The controller never reads a clock. Every operation takes `now`, and the
//! event loop asks [`DebouncedInput::next_deadline`] how long it may sleep
//! before calling [`DebouncedInput::poll`].

use crate::model::{Filters, QueryState};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Quiet period before a search term is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

// ===== Observer =====

/// Receiver of committed query values.
pub trait QueryObserver {
    /// A search term survived the quiet period, or "clear" was invoked.
    fn emit_query(&mut self, committed_term: &str);

    /// Cuisine or difficulty changed, or "clear" was invoked.
    fn emit_filters(&mut self, filters: &Filters);
}

/// One notification delivered to a [`QueryObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// Committed search term.
    Query(String),
    /// Committed category selections.
    Filters(Filters),
}

/// Records every emission in order.
impl QueryObserver for Vec<Emission> {
    fn emit_query(&mut self, committed_term: &str) {
        self.push(Emission::Query(committed_term.to_string()));
    }

    fn emit_filters(&mut self, filters: &Filters) {
        self.push(Emission::Filters(filters.clone()));
    }
}

// ===== Timer =====

/// A scheduled emission. Dropping the handle from its slot cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    id: u64,
    deadline: Instant,
}

impl TimerHandle {
    /// Sequence number, unique per controller.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Instant the emission becomes due.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// Nothing scheduled.
    Idle,
    /// One emission is scheduled.
    Pending,
}

// ===== DebouncedInput =====

/// Trailing debounce over the search text.
///
/// At most one emission is outstanding: each text change cancels the
/// previous [`TimerHandle`] before scheduling a new one.
#[derive(Debug)]
pub struct DebouncedInput {
    delay: Duration,
    query: QueryState,
    pending: Option<TimerHandle>,
    next_timer_id: u64,
}

impl DebouncedInput {
    /// Controller with all-empty query state.
    pub fn new(delay: Duration) -> Self {
        Self::with_query(QueryState::default(), delay)
    }

    /// Controller seeded with an initial query, nothing scheduled.
    pub fn with_query(query: QueryState, delay: Duration) -> Self {
        Self {
            delay,
            query,
            pending: None,
            next_timer_id: 0,
        }
    }

    /// Quiet period applied to text changes.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current raw values, including text not yet committed.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Raw search text as typed.
    pub fn search_text(&self) -> &str {
        &self.query.search_term
    }

    /// Whether an emission is scheduled.
    pub fn state(&self) -> DebounceState {
        if self.pending.is_some() {
            DebounceState::Pending
        } else {
            DebounceState::Idle
        }
    }

    /// Shorthand for `state() == DebounceState::Pending`.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The scheduled timer, if any.
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// When the scheduled emission becomes due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|handle| handle.deadline)
    }

    /// Time left until the scheduled emission; zero if already due.
    pub fn time_until_deadline(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Whether search text, cuisine, or difficulty is non-empty.
    pub fn has_active_criteria(&self) -> bool {
        self.query.is_active()
    }

    // ===== Text input =====

    /// Replace the raw search text and restart the quiet period.
    ///
    /// Returns `false` (and leaves any schedule untouched) when the value is
    /// unchanged.
    pub fn on_text_change(&mut self, raw: impl Into<String>, now: Instant) -> bool {
        let raw = raw.into();
        if raw == self.query.search_term {
            return false;
        }

        self.query.search_term = raw;
        self.schedule(now);
        true
    }

    /// Append a character to the raw search text.
    pub fn on_char(&mut self, ch: char, now: Instant) -> bool {
        let mut raw = self.query.search_term.clone();
        raw.push(ch);
        self.on_text_change(raw, now)
    }

    /// Remove the last character of the raw search text.
    pub fn on_backspace(&mut self, now: Instant) -> bool {
        let mut raw = self.query.search_term.clone();
        if raw.pop().is_none() {
            return false;
        }
        self.on_text_change(raw, now)
    }

    /// Fire the scheduled emission once `now` reaches its deadline.
    ///
    /// An edit made at the deadline instant, before this call, reschedules
    /// first, so the superseded value never fires. Returns `true` when an
    /// emission was delivered.
    pub fn poll<O: QueryObserver>(&mut self, now: Instant, observer: &mut O) -> bool {
        match self.pending {
            Some(handle) if now >= handle.deadline => {
                self.pending = None;
                debug!(
                    timer = handle.id,
                    term = %self.query.search_term,
                    "Debounced search term committed"
                );
                observer.emit_query(&self.query.search_term);
                true
            }
            _ => false,
        }
    }

    // ===== Selections =====

    /// Select a cuisine and emit the combined filters immediately.
    pub fn on_cuisine_change<O: QueryObserver>(&mut self, value: impl Into<String>, observer: &mut O) {
        self.query.filters.cuisine = value.into();
        debug!(filters = ?self.query.filters, "Cuisine filter changed");
        observer.emit_filters(&self.query.filters);
    }

    /// Select a difficulty and emit the combined filters immediately.
    pub fn on_difficulty_change<O: QueryObserver>(
        &mut self,
        value: impl Into<String>,
        observer: &mut O,
    ) {
        self.query.filters.difficulty = value.into();
        debug!(filters = ?self.query.filters, "Difficulty filter changed");
        observer.emit_filters(&self.query.filters);
    }

    /// Reset everything and emit the empty values without waiting.
    ///
    /// Any scheduled emission is cancelled first, so the stale text never
    /// reaches the observer.
    pub fn on_clear<O: QueryObserver>(&mut self, observer: &mut O) {
        self.cancel();
        self.query = QueryState::default();
        debug!("Search and filters cleared");
        observer.emit_query("");
        observer.emit_filters(&self.query.filters);
    }

    /// Unmount the controller, returning the timer it discarded.
    ///
    /// Dropping has the same effect on the schedule; this form names the
    /// unmount at the call site and reports what was cancelled. [`Drop`]
    /// then finds the slot already empty.
    pub fn teardown(mut self) -> Option<TimerHandle> {
        let discarded = self.pending;
        self.cancel();
        discarded
    }

    // ===== Timer slot =====

    fn schedule(&mut self, now: Instant) {
        self.cancel();

        let handle = TimerHandle {
            id: self.next_timer_id,
            deadline: now + self.delay,
        };
        self.next_timer_id = self.next_timer_id.wrapping_add(1);
        trace!(timer = handle.id, "Search emission scheduled");
        self.pending = Some(handle);
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            trace!(timer = handle.id, "Search emission cancelled");
        }
    }
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for DebouncedInput {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
