//! Terminal rendering module.
//!
//! The board draws into a pixel [`Surface`](crate::core::Surface); this crate
//! turns that surface into a framebuffer of styled terminal cells and flushes
//! it to a real terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw one pixel as several columns to correct glyph aspect ratio
//! - Only rewrite the cells that changed since the previous frame

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use view::{ScreenView, StatusView, Viewport};
