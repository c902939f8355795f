//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the board widget, its win rules and input policies,
//! and the turn/score bookkeeping of a match. It has **no dependencies** on
//! terminal I/O, making it:
//!
//! - **Deterministic**: the same inputs always produce the same board and view
//! - **Testable**: every operation is a plain function over owned state
//! - **Portable**: renders into an in-memory [`Surface`] any host can flush
//!
//! # Module Structure
//!
//! - [`cells`]: flat `rows x columns` cell array with bounds-checked access
//! - [`grid`]: the [`Grid`] widget (placement, transforms, rendering, scoring)
//! - [`surface`]: retained pixel surface with line, ring, and blit primitives
//! - [`rules`]: [`WinRule`] hook and the [`InARow`] k-in-a-row rule
//! - [`policy`]: [`InputPolicy`] hook with [`ZoomPan`] and [`Static`] views
//! - [`session`]: [`Match`] turn order and [`Tally`] across rounds
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{Grid, GridConfig, InARow, Match, ZoomPan};
//! use tui_tictactoe_types::{ArrayPos, Verdict};
//!
//! let mut grid = Grid::new(GridConfig::default(), InARow::tic_tac_toe(), ZoomPan::default()).unwrap();
//! let mut game = Match::new();
//!
//! for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
//!     assert!(game.play(&mut grid, ArrayPos::new(row, col)));
//! }
//! assert_eq!(game.verdict(), Verdict::Player1Wins);
//!
//! grid.render();
//! assert_eq!(grid.surface().width(), grid.width());
//! ```

pub mod cells;
pub mod grid;
pub mod policy;
pub mod rules;
pub mod session;
pub mod surface;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use cells::Cells;
pub use grid::{Grid, GridConfig, GridError, View};
pub use policy::{ClickTracker, InputPolicy, Static, ZoomPan};
pub use rules::{InARow, WinRule};
pub use session::{Match, Tally};
pub use surface::Surface;
