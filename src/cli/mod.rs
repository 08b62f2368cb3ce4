//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; `run_convert` implements the
//! whole batch conversion.

mod convert;

pub use convert::run_convert;
