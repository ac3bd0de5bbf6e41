//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests replay user stories against the full
//! TuiApp with a virtual clock.
