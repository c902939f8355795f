//! Terminal tic-tac-toe runner (default binary).
//!
//! Two players share the mouse: click a cell to place the current mark.
//! It uses crossterm for input and a custom framebuffer-based renderer.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::info;

use tui_tictactoe::app::App;
use tui_tictactoe::config::GameConfig;
use tui_tictactoe::input::map_event;
use tui_tictactoe::logging;
use tui_tictactoe::term::{TerminalRenderer, Viewport};
use tui_tictactoe::types::FRAME_MS;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(?config, "starting");

    let viewport = terminal_viewport();
    let mut app = App::new(&config, viewport)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, config.cell_width);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App, cell_w: u16) -> Result<()> {
    let timeout = Duration::from_millis(FRAME_MS as u64);
    let mut dirty = true;

    loop {
        if dirty {
            let fb = app.frame(terminal_viewport());
            term.draw(fb)?;
            dirty = false;
        }

        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            ev => {
                if let Some(command) = map_event(&ev, cell_w) {
                    if !app.handle(command) {
                        return Ok(());
                    }
                    dirty = true;
                }
            }
        }
    }
}

fn terminal_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
