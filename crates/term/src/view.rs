//! ScreenView: maps a composited pixel surface and match status into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Surface, Tally};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Mark, Rgb, Verdict, DEFAULT_CELL_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What the status line reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusView {
    pub turn: Mark,
    pub verdict: Verdict,
    pub tally: Tally,
    pub scale: f32,
}

/// Draws one surface pixel as `cell_w` terminal columns, with a status line
/// on the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenView {
    cell_w: u16,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH)
    }
}

impl ScreenView {
    /// `cell_w` of zero is treated as one.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Pixel size of the parent surface that fits above the status line.
    pub fn surface_size(&self, viewport: Viewport) -> (u32, u32) {
        (
            (viewport.width / self.cell_w) as u32,
            viewport.height.saturating_sub(1) as u32,
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        surface: &Surface,
        status: Option<&StatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (max_w, max_h) = self.surface_size(viewport);
        let rows = surface.height().min(max_h);
        let cols = surface.width().min(max_w);
        for y in 0..rows {
            for x in 0..cols {
                if let Some(color) = surface.get(x as i32, y as i32) {
                    let px = (x as u16) * self.cell_w;
                    fb.fill_rect(px, y as u16, self.cell_w, 1, ' ', CellStyle::solid(color));
                }
            }
        }

        if let Some(status) = status {
            self.draw_status(fb, status, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        surface: &Surface,
        status: Option<&StatusView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(surface, status, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, status: &StatusView, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }
        let y = viewport.height - 1;
        let label = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut x = match status.verdict {
            Verdict::NoWinnerYet => {
                let x = fb.put_str(0, y, status.turn.as_str(), label);
                fb.put_str(x, y, " to move", value)
            }
            Verdict::Player1Wins | Verdict::Player2Wins => {
                let winner = status.verdict.winner().map(Mark::as_str).unwrap_or("?");
                let x = fb.put_str(0, y, winner, label);
                fb.put_str(x, y, " wins", label)
            }
            Verdict::Draw => fb.put_str(0, y, "Draw", label),
        };

        x = fb.put_str(x, y, "  X ", value);
        x = fb.put_u32(x, y, status.tally.player1, label);
        x = fb.put_str(x, y, "  O ", value);
        x = fb.put_u32(x, y, status.tally.player2, label);
        x = fb.put_str(x, y, "  draws ", value);
        x = fb.put_u32(x, y, status.tally.draws, label);

        let zoom_pct = (status.scale * 100.0).round().max(0.0) as u32;
        x = fb.put_str(x, y, "  zoom ", value);
        x = fb.put_u32(x, y, zoom_pct, value);
        x = fb.put_str(x, y, "%", value);

        let help = if status.verdict.is_final() {
            "  r: next round  q: quit"
        } else {
            "  +/-: zoom  arrows: pan  0: reset  r: restart  q: quit"
        };
        fb.put_str(x, y, help, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_size_reserves_status_row() {
        let view = ScreenView::new(2);
        assert_eq!(view.surface_size(Viewport::new(81, 24)), (40, 23));
        assert_eq!(view.surface_size(Viewport::new(0, 0)), (0, 0));
    }

    #[test]
    fn zero_cell_width_is_raised() {
        assert_eq!(ScreenView::new(0).cell_w(), 1);
    }
}
