//! folio application module.
//!
//! Terminal setup lives in `terminal`; the event loop, its channels, and the
//! background workers live under `runtime`.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Callers keep using `app::run(...)`.
pub use runtime::run;
pub use runtime::background::spawn_submission_worker;
