//! Input policies: how a board interprets raw pointer and key input.
//!
//! A policy gets every [`BoardEvent`] forwarded to the grid. It may move or
//! rescale the grid's [`View`] and it records clicks (a press followed by a
//! release without dragging) for the host to pick up through
//! [`Grid::just_pressed`](crate::Grid::just_pressed).

use crate::grid::View;
use crate::types::{BoardEvent, BoardKey, ScreenPos, MAX_OFFSET, MAX_SCALE, MIN_SCALE, ZOOM_STEP};

/// Interprets input for a grid.
pub trait InputPolicy {
    /// Apply one event. `home` is the view the grid was created with.
    ///
    /// Returns whether `view` changed.
    fn update_input(&mut self, event: &BoardEvent, view: &mut View, home: &View) -> bool;

    /// Take the pending click position, if any.
    fn take_click(&mut self) -> Option<ScreenPos>;
}

/// Press/drag/release bookkeeping shared by the policies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTracker {
    pressed_at: Option<ScreenPos>,
    dragged: bool,
    click: Option<ScreenPos>,
}

impl ClickTracker {
    pub fn press(&mut self, at: ScreenPos) {
        self.pressed_at = Some(at);
        self.dragged = false;
    }

    pub fn drag(&mut self) {
        if self.pressed_at.is_some() {
            self.dragged = true;
        }
    }

    /// Completes a click at the press position unless the pointer dragged.
    pub fn release(&mut self) {
        if let Some(at) = self.pressed_at.take() {
            if !self.dragged {
                self.click = Some(at);
            }
        }
        self.dragged = false;
    }

    pub fn take(&mut self) -> Option<ScreenPos> {
        self.click.take()
    }
}

/// Fixed view: the board never moves or zooms.
#[derive(Debug, Clone, Default)]
pub struct Static {
    clicks: ClickTracker,
}

impl InputPolicy for Static {
    fn update_input(&mut self, event: &BoardEvent, _view: &mut View, _home: &View) -> bool {
        match *event {
            BoardEvent::PointerPressed(p) => self.clicks.press(p),
            BoardEvent::PointerDragged(_) => self.clicks.drag(),
            BoardEvent::PointerReleased(_) => self.clicks.release(),
            _ => {}
        }
        false
    }

    fn take_click(&mut self) -> Option<ScreenPos> {
        self.clicks.take()
    }
}

/// Wheel and `+`/`-` zoom, drag and arrow-key pan.
#[derive(Debug, Clone)]
pub struct ZoomPan {
    clicks: ClickTracker,
    last_drag: Option<ScreenPos>,
    step: f32,
    min_scale: f32,
    max_scale: f32,
}

impl Default for ZoomPan {
    fn default() -> Self {
        Self::new(ZOOM_STEP, MIN_SCALE, MAX_SCALE)
    }
}

impl ZoomPan {
    pub fn new(step: f32, min_scale: f32, max_scale: f32) -> Self {
        Self {
            clicks: ClickTracker::default(),
            last_drag: None,
            step,
            min_scale,
            max_scale,
        }
    }

    /// Rescale by `steps` zoom steps keeping `anchor` fixed on screen.
    fn zoom_at(&self, view: &mut View, anchor: ScreenPos, steps: f32) -> bool {
        let target = (view.scale() + steps * self.step).clamp(self.min_scale, self.max_scale);
        let old_cs = view.cell_size() as i64;
        if !view.set_scale(target) {
            return false;
        }
        let new_cs = view.cell_size() as i64;

        let origin = view.position();
        let keep = |anchor: i32, origin: i32| {
            let local = anchor as i64 - origin as i64;
            let moved = anchor as i64 - (local * new_cs).div_euclid(old_cs);
            moved.clamp(-(MAX_OFFSET as i64), MAX_OFFSET as i64) as i32
        };
        view.set_position(ScreenPos::new(
            keep(anchor.x, origin.x),
            keep(anchor.y, origin.y),
        ));
        true
    }

    fn pan(view: &mut View, dx: i32, dy: i32) -> bool {
        let before = view.position();
        view.set_position(before.offset(dx, dy));
        view.position() != before
    }
}

impl InputPolicy for ZoomPan {
    fn update_input(&mut self, event: &BoardEvent, view: &mut View, home: &View) -> bool {
        match *event {
            BoardEvent::PointerMoved(_) => false,
            BoardEvent::PointerPressed(p) => {
                self.clicks.press(p);
                self.last_drag = Some(p);
                false
            }
            BoardEvent::PointerDragged(p) => {
                let Some(prev) = self.last_drag.replace(p) else {
                    return false;
                };
                let moved =
                    Self::pan(view, p.x.saturating_sub(prev.x), p.y.saturating_sub(prev.y));
                if moved {
                    self.clicks.drag();
                }
                moved
            }
            BoardEvent::PointerReleased(_) => {
                self.clicks.release();
                self.last_drag = None;
                false
            }
            BoardEvent::Scroll { at, delta } => self.zoom_at(view, at, delta as f32),
            BoardEvent::Key(key) => {
                let cs = view.cell_size() as i32;
                let origin = view.position();
                match key {
                    BoardKey::ZoomIn => self.zoom_at(view, origin, 1.0),
                    BoardKey::ZoomOut => self.zoom_at(view, origin, -1.0),
                    BoardKey::PanLeft => Self::pan(view, -cs, 0),
                    BoardKey::PanRight => Self::pan(view, cs, 0),
                    BoardKey::PanUp => Self::pan(view, 0, -cs),
                    BoardKey::PanDown => Self::pan(view, 0, cs),
                    BoardKey::ResetView => {
                        let changed = *view != *home;
                        *view = *home;
                        changed
                    }
                }
            }
        }
    }

    fn take_click(&mut self) -> Option<ScreenPos> {
        self.clicks.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(x: i32, y: i32) -> View {
        View::new(ScreenPos::new(x, y), 1.0, 8, 3).unwrap()
    }

    #[test]
    fn click_requires_press_and_release_without_drag() {
        let mut t = ClickTracker::default();
        t.release();
        assert_eq!(t.take(), None);

        t.press(ScreenPos::new(1, 2));
        t.release();
        assert_eq!(t.take(), Some(ScreenPos::new(1, 2)));
        assert_eq!(t.take(), None);

        t.press(ScreenPos::new(1, 2));
        t.drag();
        t.release();
        assert_eq!(t.take(), None);
    }

    #[test]
    fn static_policy_never_moves() {
        let mut policy = Static::default();
        let mut v = view(3, 4);
        let home = v;
        let events = [
            BoardEvent::Scroll {
                at: ScreenPos::new(0, 0),
                delta: 1,
            },
            BoardEvent::Key(BoardKey::PanLeft),
            BoardEvent::PointerPressed(ScreenPos::new(5, 5)),
            BoardEvent::PointerReleased(ScreenPos::new(5, 5)),
        ];
        for e in &events {
            assert!(!policy.update_input(e, &mut v, &home));
        }
        assert_eq!(v, home);
        assert_eq!(policy.take_click(), Some(ScreenPos::new(5, 5)));
    }

    #[test]
    fn drag_pans_and_cancels_click() {
        let mut policy = ZoomPan::default();
        let mut v = view(0, 0);
        let home = v;

        policy.update_input(&BoardEvent::PointerPressed(ScreenPos::new(10, 10)), &mut v, &home);
        assert!(policy.update_input(
            &BoardEvent::PointerDragged(ScreenPos::new(13, 8)),
            &mut v,
            &home
        ));
        assert!(policy.update_input(
            &BoardEvent::PointerDragged(ScreenPos::new(14, 8)),
            &mut v,
            &home
        ));
        policy.update_input(&BoardEvent::PointerReleased(ScreenPos::new(14, 8)), &mut v, &home);

        assert_eq!(v.position(), ScreenPos::new(4, -2));
        assert_eq!(policy.take_click(), None);
    }

    #[test]
    fn scroll_zoom_keeps_anchor_fixed() {
        let mut policy = ZoomPan::new(1.0, 0.5, 4.0);
        let mut v = view(0, 0);
        let home = v;

        // Anchor at the top-left corner of cell (1, 1) with cell size 8.
        let anchor = ScreenPos::new(8, 8);
        assert!(policy.update_input(
            &BoardEvent::Scroll {
                at: anchor,
                delta: 1
            },
            &mut v,
            &home
        ));
        assert_eq!(v.cell_size(), 16);
        // Cell (1, 1) now starts at position + 16, which must still be the anchor.
        assert_eq!(v.position(), ScreenPos::new(-8, -8));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut policy = ZoomPan::new(1.0, 0.5, 2.0);
        let mut v = view(0, 0);
        let home = v;
        let zoom_in = BoardEvent::Key(BoardKey::ZoomIn);

        assert!(policy.update_input(&zoom_in, &mut v, &home));
        assert_eq!(v.scale(), 2.0);
        assert!(!policy.update_input(&zoom_in, &mut v, &home));

        let zoom_out = BoardEvent::Key(BoardKey::ZoomOut);
        assert!(policy.update_input(&zoom_out, &mut v, &home));
        assert!(policy.update_input(&zoom_out, &mut v, &home));
        assert_eq!(v.scale(), 0.5);
        assert_eq!(v.cell_size(), 4);
        assert!(!policy.update_input(&zoom_out, &mut v, &home));
    }

    #[test]
    fn keys_pan_by_one_cell_and_reset() {
        let mut policy = ZoomPan::default();
        let mut v = view(0, 0);
        let home = v;

        policy.update_input(&BoardEvent::Key(BoardKey::PanRight), &mut v, &home);
        policy.update_input(&BoardEvent::Key(BoardKey::PanDown), &mut v, &home);
        policy.update_input(&BoardEvent::Key(BoardKey::PanDown), &mut v, &home);
        assert_eq!(v.position(), ScreenPos::new(8, 16));

        assert!(policy.update_input(&BoardEvent::Key(BoardKey::ResetView), &mut v, &home));
        assert_eq!(v, home);
        assert!(!policy.update_input(&BoardEvent::Key(BoardKey::ResetView), &mut v, &home));
    }

    #[test]
    fn pan_stops_at_offset_limit() {
        let mut policy = ZoomPan::default();
        let mut v = view(MAX_OFFSET - 4, -MAX_OFFSET);
        let home = v;

        assert!(policy.update_input(&BoardEvent::Key(BoardKey::PanRight), &mut v, &home));
        assert_eq!(v.position(), ScreenPos::new(MAX_OFFSET, -MAX_OFFSET));
        assert!(!policy.update_input(&BoardEvent::Key(BoardKey::PanRight), &mut v, &home));
        assert!(!policy.update_input(&BoardEvent::Key(BoardKey::PanUp), &mut v, &home));

        policy.update_input(&BoardEvent::PointerPressed(ScreenPos::new(0, 0)), &mut v, &home);
        assert!(!policy.update_input(
            &BoardEvent::PointerDragged(ScreenPos::new(i32::MAX, i32::MIN)),
            &mut v,
            &home
        ));
        assert_eq!(v.position(), ScreenPos::new(MAX_OFFSET, -MAX_OFFSET));
    }

    #[test]
    fn zoom_far_from_board_stays_in_range() {
        let mut policy = ZoomPan::new(1.0, 0.5, 4.0);
        let mut v = view(-MAX_OFFSET, MAX_OFFSET);
        let home = v;

        for at in [ScreenPos::new(i32::MAX, i32::MIN), ScreenPos::new(i32::MIN, i32::MAX)] {
            policy.update_input(&BoardEvent::Scroll { at, delta: 1 }, &mut v, &home);
            let p = v.position();
            assert!((-MAX_OFFSET..=MAX_OFFSET).contains(&p.x), "{p:?}");
            assert!((-MAX_OFFSET..=MAX_OFFSET).contains(&p.y), "{p:?}");
        }
        assert!(v.cell_size() > 8);
    }
}
