//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, terminal rendering, input mapping).
//!
//! # Coordinate Spaces
//!
//! Three coordinate spaces meet at the board:
//!
//! | Space | Type | Origin |
//! |-------|------|--------|
//! | Parent surface ("screen") | [`ScreenPos`] | top-left of the host surface |
//! | Board-local ("grid") | [`ScreenPos`] | top-left of the board's own surface |
//! | Array | [`ArrayPos`] | `(row, col)` of a cell |
//!
//! Screen coordinates are signed because a panned board may hang off the
//! left or top edge of its parent.
//!
//! # Cell Values
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `-1` | [`Mark::Circle`] (player 2) |
//! | `0` | empty (`None`) |
//! | `1` | [`Mark::Cross`] (player 1) |
//!
//! # View Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 3 | Board columns |
//! | `DEFAULT_ROWS` | 3 | Board rows |
//! | `DEFAULT_CELL_SIZE` | 7 | Unscaled cell edge in surface pixels |
//! | `ZOOM_STEP` | 0.25 | Scale change per zoom input |
//! | `MIN_SCALE` / `MAX_SCALE` | 0.25 / 4.0 | Zoom limits |
//! | `MAX_BOARD_PX` | 2048 | Board edge cap in pixels, at any scale |
//! | `MAX_OFFSET` | 2^20 | Board origin limit on either axis |
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{ArrayPos, Mark, Rect, ScreenPos, Verdict};
//!
//! assert_eq!(Mark::from_value(1), Some(Some(Mark::Cross)));
//! assert_eq!(Mark::Cross.opponent(), Mark::Circle);
//!
//! let rect = Rect::new(0, 0, 300, 300);
//! assert!(rect.contains(ScreenPos::new(0, 299)));
//! assert!(!rect.contains(ScreenPos::new(300, 50)));
//!
//! assert_eq!(Verdict::from_check(Some(Mark::Circle), false), Verdict::Player2Wins);
//! assert_eq!(Verdict::from_check(None, true), Verdict::Draw);
//! assert_eq!(ArrayPos::new(1, 2).row, 1);
//! ```

/// Default number of board columns.
pub const DEFAULT_COLUMNS: u16 = 3;

/// Default number of board rows.
pub const DEFAULT_ROWS: u16 = 3;

/// Default unscaled cell size in surface pixels.
pub const DEFAULT_CELL_SIZE: u16 = 7;

/// Default view scale.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Scale change applied per zoom step.
pub const ZOOM_STEP: f32 = 0.25;

/// Smallest scale reachable through zoom input.
pub const MIN_SCALE: f32 = 0.25;

/// Largest scale reachable through zoom input.
pub const MAX_SCALE: f32 = 4.0;

/// Largest board edge in surface pixels, at any scale.
///
/// Views clamp their scale so `cell_size * max(columns, rows)` never
/// exceeds this.
pub const MAX_BOARD_PX: u32 = 2048;

/// Furthest a board origin may sit from its parent's origin on either axis.
pub const MAX_OFFSET: i32 = 1 << 20;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Default number of terminal columns used to draw one surface pixel.
///
/// 2x1 helps compensate for typical terminal glyph aspect ratio.
pub const DEFAULT_CELL_WIDTH: u16 = 2;

/// The two marks a player can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Player 2, drawn as concentric rings. Cell value `-1`.
    Circle,
    /// Player 1, drawn as a diagonal cross. Cell value `1`.
    Cross,
}

impl Mark {
    /// Parse an integer cell value.
    ///
    /// Returns `None` for anything outside `{-1, 0, 1}`; `Some(None)` is the
    /// empty cell.
    ///
    /// ```
    /// use tui_tictactoe_types::Mark;
    ///
    /// assert_eq!(Mark::from_value(1), Some(Some(Mark::Cross)));
    /// assert_eq!(Mark::from_value(0), Some(None));
    /// assert_eq!(Mark::from_value(7), None);
    /// ```
    pub fn from_value(value: i8) -> Option<Cell> {
        match value {
            -1 => Some(Some(Mark::Circle)),
            0 => Some(None),
            1 => Some(Some(Mark::Cross)),
            _ => None,
        }
    }

    pub fn opponent(self) -> Mark {
        match self {
            Mark::Circle => Mark::Cross,
            Mark::Cross => Mark::Circle,
        }
    }

    /// Single-letter label used in status text.
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Circle => "O",
            Mark::Cross => "X",
        }
    }
}

/// A board cell: `None` is empty.
pub type Cell = Option<Mark>;

/// Result of scoring a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    NoWinnerYet,
    Draw,
    /// [`Mark::Cross`] completed a line.
    Player1Wins,
    /// [`Mark::Circle`] completed a line.
    Player2Wins,
}

impl Verdict {
    /// Combine a win-check result with the board's fill state.
    ///
    /// A reported winner always passes through, even on a full board.
    pub fn from_check(winner: Option<Mark>, board_full: bool) -> Self {
        match winner {
            Some(Mark::Cross) => Verdict::Player1Wins,
            Some(Mark::Circle) => Verdict::Player2Wins,
            None if board_full => Verdict::Draw,
            None => Verdict::NoWinnerYet,
        }
    }

    /// Whether the round is over.
    pub fn is_final(self) -> bool {
        !matches!(self, Verdict::NoWinnerYet)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Verdict::Player1Wins => Some(Mark::Cross),
            Verdict::Player2Wins => Some(Mark::Circle),
            Verdict::NoWinnerYet | Verdict::Draw => None,
        }
    }

}

/// Cell coordinate in array space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayPos {
    pub row: u16,
    pub col: u16,
}

impl ArrayPos {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Pixel coordinate on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPos {
    pub x: i32,
    pub y: i32,
}

impl ScreenPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: `[x, x + width) × [y, y + height)`.
    pub fn contains(&self, p: ScreenPos) -> bool {
        let (px, py) = (p.x as i64, p.y as i64);
        let (x, y) = (self.x as i64, self.y as i64);
        px >= x && px < x + self.width as i64 && py >= y && py < y + self.height as i64
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` with an optional leading `#` (case-insensitive).
    ///
    /// ```
    /// use tui_tictactoe_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#323232"), Some(Rgb::new(50, 50, 50)));
    /// assert_eq!(Rgb::from_hex("a327F5"), Some(Rgb::new(163, 39, 245)));
    /// assert_eq!(Rgb::from_hex("#12345"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Board colors.
///
/// `key` is the transparent color of the board surface: pixels left in this
/// color are skipped when the board is composited onto its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub frame: Rgb,
    pub grid: Rgb,
    pub cross: Rgb,
    pub circle: Rgb,
    pub highlight: Rgb,
    pub key: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(206, 151, 219),
            frame: Rgb::new(163, 39, 245),
            grid: Rgb::new(50, 50, 50),
            cross: Rgb::new(224, 74, 144),
            circle: Rgb::new(134, 63, 181),
            highlight: Rgb::new(220, 120, 245),
            key: Rgb::new(0, 0, 0),
        }
    }
}

impl Palette {
    pub fn with_grid(mut self, grid: Rgb) -> Self {
        self.grid = grid;
        self
    }
}

/// View-level key commands understood by board input policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardKey {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ResetView,
}

/// Raw input delivered to a board, already in parent-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardEvent {
    PointerMoved(ScreenPos),
    PointerPressed(ScreenPos),
    PointerDragged(ScreenPos),
    PointerReleased(ScreenPos),
    /// Wheel input; positive `delta` zooms in.
    Scroll { at: ScreenPos, delta: i8 },
    Key(BoardKey),
}

impl BoardEvent {
    /// Pointer location carried by the event, if any.
    pub fn pointer(&self) -> Option<ScreenPos> {
        match *self {
            BoardEvent::PointerMoved(p)
            | BoardEvent::PointerPressed(p)
            | BoardEvent::PointerDragged(p)
            | BoardEvent::PointerReleased(p) => Some(p),
            BoardEvent::Scroll { at, .. } => Some(at),
            BoardEvent::Key(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_values_parse_to_marks() {
        assert_eq!(Mark::from_value(-1), Some(Some(Mark::Circle)));
        assert_eq!(Mark::from_value(0), Some(None));
        assert_eq!(Mark::from_value(1), Some(Some(Mark::Cross)));
        assert_eq!(Mark::from_value(2), None);
        assert_eq!(Mark::from_value(-2), None);
    }

    #[test]
    fn winner_passes_through_on_full_board() {
        assert_eq!(
            Verdict::from_check(Some(Mark::Cross), true),
            Verdict::Player1Wins
        );
        assert_eq!(Verdict::from_check(None, false), Verdict::NoWinnerYet);
    }

    #[test]
    fn verdict_winner_and_finality() {
        assert_eq!(Verdict::Player1Wins.winner(), Some(Mark::Cross));
        assert_eq!(Verdict::Player2Wins.winner(), Some(Mark::Circle));
        assert_eq!(Verdict::Draw.winner(), None);
        assert!(!Verdict::NoWinnerYet.is_final());
        assert!(Verdict::Draw.is_final());
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(-5, 10, 4, 2);
        assert!(r.contains(ScreenPos::new(-5, 10)));
        assert!(r.contains(ScreenPos::new(-2, 11)));
        assert!(!r.contains(ScreenPos::new(-1, 10)));
        assert!(!r.contains(ScreenPos::new(-5, 12)));
        assert!(!r.contains(ScreenPos::new(-6, 10)));
        assert!(!Rect::new(0, 0, 0, 0).contains(ScreenPos::new(0, 0)));
    }

    #[test]
    fn event_pointer_extraction() {
        let p = ScreenPos::new(3, 4);
        assert_eq!(BoardEvent::PointerDragged(p).pointer(), Some(p));
        assert_eq!(BoardEvent::Scroll { at: p, delta: -1 }.pointer(), Some(p));
        assert_eq!(BoardEvent::Key(BoardKey::ZoomIn).pointer(), None);
    }
}
