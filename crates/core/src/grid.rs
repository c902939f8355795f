//! Grid module - the board widget
//!
//! A [`Grid`] owns a [`Cells`] array, its view (position and scale), and a
//! backing [`Surface`] it renders grid lines and marks into. Game-specific
//! behavior is injected: a [`WinRule`] decides winners and an
//! [`InputPolicy`] turns raw pointer/key input into zoom and pan.
//!
//! # Coordinate transforms
//!
//! ```text
//! parent surface  --surf_to_grid-->  board-local  --grid_to_arr-->  (row, col)
//!                 <--grid_to_surf--               <--arr_to_grid--
//! ```
//!
//! `x` runs along columns and `y` along rows. `grid_to_arr` floors, so it
//! inverts `arr_to_grid` exactly and maps every pixel of a cell to that cell.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{Grid, GridConfig, InARow, Static};
//! use tui_tictactoe_types::{ArrayPos, Mark, ScreenPos, Verdict};
//!
//! let config = GridConfig {
//!     cell_size: 100,
//!     ..GridConfig::default()
//! };
//! let mut grid = Grid::new(config, InARow::tic_tac_toe(), Static::default()).unwrap();
//!
//! assert!(grid.add(Mark::Cross, ArrayPos::new(0, 0)));
//! assert!(!grid.add(Mark::Circle, ArrayPos::new(0, 0)));
//! assert_eq!(grid.filled(), 1);
//!
//! assert_eq!(grid.convert(ScreenPos::new(50, 50)), Some(ArrayPos::new(0, 0)));
//! assert_eq!(grid.convert(ScreenPos::new(350, 50)), None);
//! assert_eq!(grid.update_score(), Verdict::NoWinnerYet);
//! ```

use derive_more::{Display, Error};
use tracing::debug;

use crate::cells::Cells;
use crate::policy::InputPolicy;
use crate::rules::WinRule;
use crate::surface::Surface;
use crate::types::{
    ArrayPos, BoardEvent, Mark, Palette, Rect, Rgb, ScreenPos, Verdict, DEFAULT_CELL_SIZE,
    DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SCALE, MAX_BOARD_PX, MAX_OFFSET,
};

/// Rejected construction arguments.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum GridError {
    #[display("grid needs at least one column and one row, got {columns}x{rows}")]
    EmptyDimension { columns: u16, rows: u16 },
    #[display("base cell size must be positive")]
    ZeroCellSize,
    #[display("{columns}x{rows} does not fit in {} pixels even at one pixel per cell", MAX_BOARD_PX)]
    TooLarge { columns: u16, rows: u16 },
    #[display("scale {scale} gives base cell size {cell_size} no pixels or more than the board allows")]
    InvalidScale { scale: f32, cell_size: u16 },
}

/// Constructor inputs for a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub columns: u16,
    pub rows: u16,
    /// Unscaled cell edge in pixels.
    pub cell_size: u16,
    /// Top-left anchor in the parent surface.
    pub position: ScreenPos,
    pub scale: f32,
    pub palette: Palette,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            position: ScreenPos::default(),
            scale: DEFAULT_SCALE,
            palette: Palette::default(),
        }
    }
}

/// Position and scale of a board within its parent.
///
/// Input policies mutate this; the base cell size and the board's longest
/// side are fixed at construction. The scale is kept within
/// [`min_scale`](View::min_scale)..=[`max_scale`](View::max_scale) and the
/// position within `±MAX_OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    position: ScreenPos,
    scale: f32,
    base: u16,
    max_cell: u32,
}

impl View {
    /// `None` unless `scale` is finite and gives a cell size between one
    /// pixel and the largest size that keeps `longest_side` cells within
    /// `MAX_BOARD_PX`.
    pub fn new(position: ScreenPos, scale: f32, base: u16, longest_side: u16) -> Option<Self> {
        if base == 0 || longest_side == 0 || !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        let max_cell = MAX_BOARD_PX / longest_side as u32;
        let cs = (base as f32 * scale).floor();
        if max_cell == 0 || cs < 1.0 || cs > max_cell as f32 {
            return None;
        }
        Some(Self {
            position: clamp_position(position),
            scale,
            base,
            max_cell,
        })
    }

    pub fn position(&self) -> ScreenPos {
        self.position
    }

    /// Move the board origin, clamped to `±MAX_OFFSET`.
    pub fn set_position(&mut self, pos: ScreenPos) {
        self.position = clamp_position(pos);
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Smallest scale that still gives a one-pixel cell.
    pub fn min_scale(&self) -> f32 {
        1.0 / self.base as f32
    }

    /// Largest scale that keeps the board within `MAX_BOARD_PX`.
    pub fn max_scale(&self) -> f32 {
        self.max_cell as f32 / self.base as f32
    }

    /// Set the scale, clamped to `min_scale..=max_scale`.
    ///
    /// Non-finite values are ignored. Returns whether the scale changed.
    pub fn set_scale(&mut self, scale: f32) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let clamped = scale.clamp(self.min_scale(), self.max_scale());
        if clamped == self.scale {
            return false;
        }
        self.scale = clamped;
        true
    }

    /// `floor(base * scale)`, between one pixel and the board's limit.
    pub fn cell_size(&self) -> u32 {
        ((self.base as f32 * self.scale).floor() as u32).clamp(1, self.max_cell)
    }
}

fn clamp_position(pos: ScreenPos) -> ScreenPos {
    ScreenPos::new(
        pos.x.clamp(-MAX_OFFSET, MAX_OFFSET),
        pos.y.clamp(-MAX_OFFSET, MAX_OFFSET),
    )
}

/// Board widget parameterized by its win rule and input policy.
#[derive(Debug, Clone)]
pub struct Grid<R, P> {
    cells: Cells,
    view: View,
    home: View,
    filled: usize,
    last_moved: Option<ArrayPos>,
    palette: Palette,
    surface: Surface,
    rule: R,
    policy: P,
}

impl<R: WinRule, P: InputPolicy> Grid<R, P> {
    pub fn new(config: GridConfig, rule: R, policy: P) -> Result<Self, GridError> {
        if config.columns == 0 || config.rows == 0 {
            return Err(GridError::EmptyDimension {
                columns: config.columns,
                rows: config.rows,
            });
        }
        if config.cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        let longest = config.columns.max(config.rows);
        if longest as u32 > MAX_BOARD_PX {
            return Err(GridError::TooLarge {
                columns: config.columns,
                rows: config.rows,
            });
        }
        let view = View::new(config.position, config.scale, config.cell_size, longest).ok_or(
            GridError::InvalidScale {
                scale: config.scale,
                cell_size: config.cell_size,
            },
        )?;

        let palette = config.palette;
        let mut grid = Self {
            cells: Cells::new(config.columns, config.rows),
            view,
            home: view,
            filled: 0,
            last_moved: None,
            palette,
            surface: Surface::new(0, 0, palette.background).with_key(palette.key),
            rule,
            policy,
        };
        let (w, h) = grid.size();
        grid.surface.resize(w, h, palette.background);
        debug!(
            columns = config.columns,
            rows = config.rows,
            cell_size = grid.cell_size(),
            "grid created"
        );
        Ok(grid)
    }

    /// Place `mark` at `pos` if the cell is empty.
    ///
    /// Returns false without touching state when the cell is occupied or
    /// out of range.
    pub fn add(&mut self, mark: Mark, pos: ArrayPos) -> bool {
        if !self.cells.is_vacant(pos) {
            debug!(?pos, ?mark, "placement rejected");
            return false;
        }
        self.cells.set(pos, Some(mark));
        self.last_moved = Some(pos);
        self.filled += 1;
        debug!(?pos, ?mark, filled = self.filled, "placement accepted");
        true
    }

    /// Map a parent-surface point to the cell under it.
    pub fn convert(&self, pos: ScreenPos) -> Option<ArrayPos> {
        if !self.rect().contains(pos) {
            return None;
        }
        self.grid_to_arr(self.surf_to_grid(pos))
    }

    /// Score the board with the injected win rule.
    pub fn update_score(&self) -> Verdict {
        let winner = self.rule.check(&self.cells);
        let verdict = Verdict::from_check(winner, self.is_full());
        if verdict.is_final() {
            debug!(?verdict, filled = self.filled, "round decided");
        }
        verdict
    }

    /// Forward raw input to the input policy.
    ///
    /// Returns whether the view (scale or position) changed.
    pub fn update_input(&mut self, event: &BoardEvent) -> bool {
        let changed = self.policy.update_input(event, &mut self.view, &self.home);
        if changed {
            debug!(
                x = self.view.position().x,
                y = self.view.position().y,
                scale = self.view.scale(),
                "view changed"
            );
        }
        changed
    }

    /// Cell of the pending click, if the policy recorded one on the board.
    pub fn just_pressed(&mut self) -> Option<ArrayPos> {
        let click = self.policy.take_click()?;
        self.convert(click)
    }

    /// Clear all cells; the view is kept.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.filled = 0;
        self.last_moved = None;
    }

    /// Redraw grid lines and marks into the backing surface.
    pub fn render(&mut self) {
        self.render_board();
        self.render_cells();
    }

    /// Clear the backing surface and draw the bounding box and grid lines.
    pub fn render_board(&mut self) {
        let (w, h) = self.size();
        let cs = self.cell_size() as i32;
        let key = self.palette.key;
        let grid = self.palette.grid;

        self.surface.resize(w, h, key);
        self.surface.rect_outline(0, 0, w, h, self.palette.frame);

        for i in 1..self.columns() as i32 {
            self.surface.vline(i * cs, 0, h as i32 - 1, grid);
        }
        for j in 1..self.rows() as i32 {
            self.surface.hline(0, w as i32 - 1, j * cs, grid);
        }
    }

    /// Draw a glyph for every non-empty cell.
    pub fn render_cells(&mut self) {
        let cs = self.cell_size();
        let Self {
            cells,
            surface,
            palette,
            ..
        } = self;

        for (pos, cell) in cells.iter() {
            let Some(mark) = cell else {
                continue;
            };
            let step = cs as i32;
            let corner = ScreenPos::new(pos.col as i32 * step, pos.row as i32 * step);
            match mark {
                Mark::Cross => draw_cross(surface, corner, cs, palette.cross),
                Mark::Circle => draw_circle(surface, corner, cs, palette.circle),
            }
        }
    }

    /// Fill the cell under `pos` on `parent` with the highlight color.
    ///
    /// No-op when `pos` is off the board.
    pub fn highlight(&self, parent: &mut Surface, pos: ScreenPos) {
        if !self.rect().contains(pos) {
            return;
        }
        let cs = self.cell_size() as i32;
        let local = self.surf_to_grid(pos);
        let snapped = ScreenPos::new(local.x / cs * cs, local.y / cs * cs);
        let corner = self.grid_to_surf(snapped);
        let cs = cs as u32;
        parent.fill_rect(corner.x, corner.y, cs, cs, self.palette.highlight);
    }

    /// Board-local to parent-surface coordinates.
    ///
    /// Wrapping, so this and [`surf_to_grid`](Grid::surf_to_grid) invert
    /// each other for every input.
    pub fn grid_to_surf(&self, pos: ScreenPos) -> ScreenPos {
        let origin = self.view.position();
        ScreenPos::new(pos.x.wrapping_add(origin.x), pos.y.wrapping_add(origin.y))
    }

    /// Parent-surface to board-local coordinates.
    pub fn surf_to_grid(&self, pos: ScreenPos) -> ScreenPos {
        let origin = self.view.position();
        ScreenPos::new(pos.x.wrapping_sub(origin.x), pos.y.wrapping_sub(origin.y))
    }

    /// Top-left board-local pixel of a cell.
    pub fn arr_to_grid(&self, pos: ArrayPos) -> ScreenPos {
        let cs = self.cell_size() as i32;
        ScreenPos::new(pos.col as i32 * cs, pos.row as i32 * cs)
    }

    /// Cell containing a board-local pixel.
    ///
    /// `None` for negative coordinates; the result is not checked against
    /// the board's dimensions.
    pub fn grid_to_arr(&self, pos: ScreenPos) -> Option<ArrayPos> {
        let cs = self.cell_size() as i32;
        let row = u16::try_from(pos.y.div_euclid(cs)).ok()?;
        let col = u16::try_from(pos.x.div_euclid(cs)).ok()?;
        Some(ArrayPos::new(row, col))
    }

    /// Current scaled cell size.
    pub fn cell_size(&self) -> u32 {
        self.view.cell_size()
    }

    pub fn width(&self) -> u32 {
        self.cell_size() * self.columns() as u32
    }

    pub fn height(&self) -> u32 {
        self.cell_size() * self.rows() as u32
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn position(&self) -> ScreenPos {
        self.view.position()
    }

    /// Move the board origin, clamped to `±MAX_OFFSET`.
    pub fn set_position(&mut self, pos: ScreenPos) {
        self.view.set_position(pos);
    }

    pub fn scale(&self) -> f32 {
        self.view.scale()
    }

    /// Set the scale, clamped so cells keep at least one pixel and the
    /// board stays within `MAX_BOARD_PX`.
    pub fn set_scale(&mut self, scale: f32) -> bool {
        self.view.set_scale(scale)
    }

    /// Screen-space bounding rectangle.
    pub fn rect(&self) -> Rect {
        let p = self.view.position();
        Rect::new(p.x, p.y, self.width(), self.height())
    }

    /// Backing surface as of the last render.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn columns(&self) -> u16 {
        self.cells.columns()
    }

    pub fn rows(&self) -> u16 {
        self.cells.rows()
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    pub fn last_moved(&self) -> Option<ArrayPos> {
        self.last_moved
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }
}

fn draw_cross(surface: &mut Surface, corner: ScreenPos, cs: u32, color: Rgb) {
    let thickness = (cs / 8).max(1);
    let far = cs as i32 - 1;
    let (x, y) = (corner.x, corner.y);
    surface.line(
        ScreenPos::new(x, y),
        ScreenPos::new(x + far, y + far),
        thickness,
        color,
    );
    surface.line(
        ScreenPos::new(x + far, y),
        ScreenPos::new(x, y + far),
        thickness,
        color,
    );
}

fn draw_circle(surface: &mut Surface, corner: ScreenPos, cs: u32, color: Rgb) {
    let thickness = (cs / 20).max(1);
    let half = (cs / 2) as i32;
    let center = ScreenPos::new(corner.x + half, corner.y + half);

    let outer = (cs / 2).saturating_sub(1);
    let inner = (cs / 4).saturating_sub(1);
    surface.ring(center, outer, thickness, color);
    if inner > 0 {
        surface.ring(center, inner, thickness, color);
    }
}
