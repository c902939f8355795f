//! Retained pixel surface.
//!
//! A `Surface` is a 2D array of RGB pixels with clipped drawing primitives.
//! Boards draw into their own surface and are composited onto a parent
//! surface with [`Surface::blit`], which skips pixels in the source's
//! transparent key color.

use crate::types::{Rgb, ScreenPos};

/// 2D pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    key: Option<Rgb>,
}

impl Surface {
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![fill; len],
            key: None,
        }
    }

    /// Set the transparent color skipped when this surface is blitted.
    pub fn with_key(mut self, key: Rgb) -> Self {
        self.key = Some(key);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resize the surface, filling it with `fill`.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u32, height: u32, fill: Rgb) {
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.pixels.clear();
        self.pixels.resize(len, fill);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Set one pixel; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x as i64 + w as i64).min(self.width as i64) as i32;
        let y1 = (y as i64 + h as i64).min(self.height as i64) as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.set(px, py, color);
            }
        }
    }

    /// Horizontal line from `x0` to `x1` inclusive.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb) {
        let (a, b) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in a.max(0)..=b.min(self.width as i32 - 1) {
            self.set(x, y, color);
        }
    }

    /// Vertical line from `y0` to `y1` inclusive.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgb) {
        let (a, b) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in a.max(0)..=b.min(self.height as i32 - 1) {
            self.set(x, y, color);
        }
    }

    /// One-pixel outline of a `w x h` rectangle.
    pub fn rect_outline(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        let right = x + w as i32 - 1;
        let bottom = y + h as i32 - 1;
        self.hline(x, right, y, color);
        self.hline(x, right, bottom, color);
        self.vline(x, y, bottom, color);
        self.vline(right, y, bottom, color);
    }

    /// Straight line stamped with a square brush `thickness` pixels wide.
    pub fn line(&mut self, from: ScreenPos, to: ScreenPos, thickness: u32, color: Rgb) {
        let t = thickness.max(1);
        let half = (t / 2) as i32;

        // Bresenham over all octants.
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.fill_rect(x - half, y - half, t, t, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Ring of outer `radius` and `thickness` pixels, drawn inward.
    ///
    /// A thickness of at least `radius` fills the disc.
    pub fn ring(&mut self, center: ScreenPos, radius: u32, thickness: u32, color: Rgb) {
        let r = radius as i64;
        let inner = (radius.saturating_sub(thickness.max(1))) as i64;
        let outer_sq = r * r;
        let inner_sq = inner * inner;
        for dy in -r..=r {
            for dx in -r..=r {
                let d = dx * dx + dy * dy;
                if d <= outer_sq && (inner == 0 || d > inner_sq) {
                    self.set(center.x + dx as i32, center.y + dy as i32, color);
                }
            }
        }
    }

    /// Copy `src` onto this surface with its top-left at `at`, skipping
    /// pixels that match the source key.
    pub fn blit(&mut self, src: &Surface, at: ScreenPos) {
        for sy in 0..src.height as i32 {
            for sx in 0..src.width as i32 {
                let Some(color) = src.get(sx, sy) else {
                    continue;
                };
                if src.key == Some(color) {
                    continue;
                }
                self.set(at.x + sx, at.y + sy, color);
            }
        }
    }

    /// Number of pixels with exactly `color`.
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}
