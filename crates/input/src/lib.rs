//! Terminal input module (board-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`Command`] values. Mouse positions
//! are converted from terminal cells to surface pixels, so the resulting
//! [`BoardEvent`](crate::types::BoardEvent)s can be forwarded to a grid as-is.

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, map_event, should_quit, to_surface, Command};
