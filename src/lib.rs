//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! The board widget and its pieces live in dedicated crates under `crates/`;
//! this package re-exports them as `tui_tictactoe::{core,input,term,types}`
//! and adds the runnable game: environment config, log setup and the
//! [`app::App`] that ties input, match state and rendering together.

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub mod app;
pub mod config;
pub mod logging;
