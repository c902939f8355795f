//! Event mapping from terminal events to board commands.

use crate::types::{BoardEvent, BoardKey, ScreenPos};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the host loop should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the grid.
    Board(BoardEvent),
    /// Start the next round.
    Restart,
    Quit,
}

/// Terminal cell to surface pixel; each pixel is `cell_w` columns wide.
pub fn to_surface(column: u16, row: u16, cell_w: u16) -> ScreenPos {
    let cell_w = cell_w.max(1);
    ScreenPos::new((column / cell_w) as i32, row as i32)
}

/// Map any terminal event. Key releases and repeats are ignored.
pub fn map_event(event: &Event, cell_w: u16) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                Some(Command::Quit)
            } else {
                handle_key_event(*key)
            }
        }
        Event::Mouse(mouse) => handle_mouse_event(*mouse, cell_w).map(Command::Board),
        _ => None,
    }
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    let board_key = match key.code {
        // Zoom
        KeyCode::Char('+') | KeyCode::Char('=') => BoardKey::ZoomIn,
        KeyCode::Char('-') | KeyCode::Char('_') => BoardKey::ZoomOut,
        KeyCode::Char('0') => BoardKey::ResetView,

        // Pan
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => BoardKey::PanLeft,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => BoardKey::PanRight,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => BoardKey::PanUp,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => BoardKey::PanDown,

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => return Some(Command::Restart),

        _ => return None,
    };
    Some(Command::Board(BoardEvent::Key(board_key)))
}

fn handle_mouse_event(mouse: MouseEvent, cell_w: u16) -> Option<BoardEvent> {
    let at = to_surface(mouse.column, mouse.row, cell_w);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(BoardEvent::PointerPressed(at)),
        MouseEventKind::Up(MouseButton::Left) => Some(BoardEvent::PointerReleased(at)),
        MouseEventKind::Drag(MouseButton::Left) => Some(BoardEvent::PointerDragged(at)),
        MouseEventKind::Moved => Some(BoardEvent::PointerMoved(at)),
        MouseEventKind::ScrollUp => Some(BoardEvent::Scroll { at, delta: 1 }),
        MouseEventKind::ScrollDown => Some(BoardEvent::Scroll { at, delta: -1 }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_zoom_and_pan_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(Command::Board(BoardEvent::Key(BoardKey::ZoomIn)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(Command::Board(BoardEvent::Key(BoardKey::ZoomOut)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('0'))),
            Some(Command::Board(BoardEvent::Key(BoardKey::ResetView)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::Board(BoardEvent::Key(BoardKey::PanLeft)))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(Command::Board(BoardEvent::Key(BoardKey::PanDown)))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(Command::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Char('Q'))), 2),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(&Event::Key(release), 2), None);
    }

    #[test]
    fn test_mouse_columns_scale_to_pixels() {
        assert_eq!(to_surface(9, 4, 2), ScreenPos::new(4, 4));
        assert_eq!(to_surface(9, 4, 0), ScreenPos::new(9, 4));
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 3), 2),
            Some(Command::Board(BoardEvent::PointerPressed(ScreenPos::new(5, 3))))
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 11, 3), 2),
            Some(Command::Board(BoardEvent::PointerDragged(ScreenPos::new(5, 3))))
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::ScrollDown, 0, 0), 2),
            Some(Command::Board(BoardEvent::Scroll {
                at: ScreenPos::new(0, 0),
                delta: -1
            }))
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), 2),
            None
        );
    }
}
