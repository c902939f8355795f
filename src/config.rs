//! Game configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TICTACTOE_COLUMNS` | 3 |
//! | `TICTACTOE_ROWS` | 3 |
//! | `TICTACTOE_CELL_SIZE` | 7 |
//! | `TICTACTOE_SCALE` | 1.0 |
//! | `TICTACTOE_WIN_LENGTH` | 5 on boards at least 10x10, else 3 |
//! | `TICTACTOE_GRID_COLOR` | `#323232` |
//! | `TICTACTOE_CELL_WIDTH` | 2 |
//! | `TICTACTOE_LOG_PATH` | unset (logging disabled) |
//!
//! Missing or unparseable values fall back to the default. Board sides and
//! the cell size are clamped to `1..=64`, and the cell size further so the
//! board fits in `MAX_BOARD_PX`. A scale that would push the board past that
//! limit falls back to 1.0. The win length is capped to the longer board side.

use crate::core::{GridConfig, InARow};
use crate::types::{
    Palette, Rgb, DEFAULT_CELL_SIZE, DEFAULT_CELL_WIDTH, DEFAULT_COLUMNS, DEFAULT_ROWS,
    DEFAULT_SCALE, MAX_BOARD_PX,
};

/// Largest accepted board side and base cell size.
pub const MAX_SIDE: u16 = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub columns: u16,
    pub rows: u16,
    pub cell_size: u16,
    pub scale: f32,
    pub win_length: u16,
    pub grid_color: Rgb,
    pub cell_width: u16,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            scale: DEFAULT_SCALE,
            win_length: default_win_length(DEFAULT_COLUMNS, DEFAULT_ROWS),
            grid_color: Palette::default().grid,
            cell_width: DEFAULT_CELL_WIDTH,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let side = |key: &str, default: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .map(|v| v.clamp(1, MAX_SIDE))
                .unwrap_or(default)
        };

        let columns = side("TICTACTOE_COLUMNS", DEFAULT_COLUMNS);
        let rows = side("TICTACTOE_ROWS", DEFAULT_ROWS);
        let longest = columns.max(rows);
        let max_cell = (MAX_BOARD_PX / longest as u32).max(1) as u16;
        let cell_size = side("TICTACTOE_CELL_SIZE", DEFAULT_CELL_SIZE).min(max_cell);
        let cell_width = side("TICTACTOE_CELL_WIDTH", DEFAULT_CELL_WIDTH);

        let scale = lookup("TICTACTOE_SCALE")
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|s| {
                let cs = (cell_size as f32 * s).floor();
                s.is_finite() && cs >= 1.0 && cs <= max_cell as f32
            })
            .unwrap_or(DEFAULT_SCALE);

        let win_length = lookup("TICTACTOE_WIN_LENGTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(|v| v.clamp(1, longest))
            .unwrap_or_else(|| default_win_length(columns, rows));

        let grid_color = lookup("TICTACTOE_GRID_COLOR")
            .and_then(|s| Rgb::from_hex(&s))
            .unwrap_or(Palette::default().grid);

        let log_path = lookup("TICTACTOE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            columns,
            rows,
            cell_size,
            scale,
            win_length,
            grid_color,
            cell_width,
            log_path,
        }
    }

    /// Board constructor inputs; the position is left at the origin.
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            columns: self.columns,
            rows: self.rows,
            cell_size: self.cell_size,
            scale: self.scale,
            palette: Palette::default().with_grid(self.grid_color),
            ..GridConfig::default()
        }
    }

    pub fn win_rule(&self) -> InARow {
        InARow::new(self.win_length)
    }
}

fn default_win_length(columns: u16, rows: u16) -> u16 {
    let length = if columns.min(rows) >= 10 { 5 } else { 3 };
    length.min(columns.max(rows))
}
