//! Library entry for folio exposing the portfolio runtime for the binary and integration tests.

pub mod app;
pub mod args;
pub mod content;
pub mod delivery;
pub mod events;
pub mod i18n;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
