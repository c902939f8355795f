//! App: one board, one match, one screen.
//!
//! Pure state plus frame composition; the binary owns the terminal and the
//! event loop.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::{Grid, GridError, InARow, Match, Surface, View, ZoomPan};
use crate::input::Command;
use crate::term::{FrameBuffer, ScreenView, StatusView, Viewport};
use crate::types::{BoardEvent, ScreenPos};

/// The board type the game plays on.
pub type Board = Grid<InARow, ZoomPan>;

pub struct App {
    grid: Board,
    game: Match,
    view: ScreenView,
    parent: Surface,
    fb: FrameBuffer,
    pointer: Option<ScreenPos>,
}

impl App {
    /// Build the board from `config`, centered in `viewport`.
    ///
    /// The centered placement is also the view that `ResetView` returns to.
    pub fn new(config: &GameConfig, viewport: Viewport) -> Result<Self, GridError> {
        let view = ScreenView::new(config.cell_width);
        let mut grid_config = config.grid_config();

        let (sw, sh) = view.surface_size(viewport);
        let longest = config.columns.max(config.rows);
        let cs = View::new(
            ScreenPos::default(),
            grid_config.scale,
            grid_config.cell_size,
            longest,
        )
        .map_or(0, |v| v.cell_size());
        let (bw, bh) = (cs * config.columns as u32, cs * config.rows as u32);
        grid_config.position = ScreenPos::new(
            (sw.saturating_sub(bw) / 2) as i32,
            (sh.saturating_sub(bh) / 2) as i32,
        );
        let grid = Board::new(grid_config, config.win_rule(), ZoomPan::default())?;

        info!(
            columns = grid.columns(),
            rows = grid.rows(),
            win_length = grid.rule().length(),
            "board ready"
        );

        let palette = *grid.palette();
        Ok(Self {
            grid,
            game: Match::new(),
            view,
            parent: Surface::new(sw, sh, palette.background),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            pointer: None,
        })
    }

    pub fn grid(&self) -> &Board {
        &self.grid
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn pointer(&self) -> Option<ScreenPos> {
        self.pointer
    }

    /// Apply one command. Returns false when the app should quit.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Restart => {
                self.game.next_round(&mut self.grid);
                debug!(turn = ?self.game.turn(), "new round");
            }
            Command::Board(event) => self.board_event(event),
        }
        true
    }

    fn board_event(&mut self, event: BoardEvent) {
        if let Some(p) = event.pointer() {
            self.pointer = Some(p);
        }
        self.grid.update_input(&event);
        if let Some(pos) = self.grid.just_pressed() {
            self.game.play(&mut self.grid, pos);
        }
    }

    /// Compose the next frame for `viewport`.
    pub fn frame(&mut self, viewport: Viewport) -> &FrameBuffer {
        let background = self.grid.palette().background;
        let (sw, sh) = self.view.surface_size(viewport);
        self.parent.resize(sw, sh, background);
        self.parent.fill(background);

        if let Some(p) = self.pointer {
            if !self.game.verdict().is_final() {
                self.grid.highlight(&mut self.parent, p);
            }
        }
        self.grid.render();
        self.parent.blit(self.grid.surface(), self.grid.position());

        let status = StatusView {
            turn: self.game.turn(),
            verdict: self.game.verdict(),
            tally: self.game.tally(),
            scale: self.grid.scale(),
        };
        self.view
            .render_into(&self.parent, Some(&status), viewport, &mut self.fb);
        &self.fb
    }
}
