use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_tictactoe::app::App;
use tui_tictactoe::config::GameConfig;
use tui_tictactoe::input::Command;
use tui_tictactoe::term::Viewport;
use tui_tictactoe::types::{ArrayPos, BoardEvent, Mark, ScreenPos};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

fn click(app: &mut App, at: ScreenPos) {
    app.handle(Command::Board(BoardEvent::PointerPressed(at)));
    app.handle(Command::Board(BoardEvent::PointerReleased(at)));
}

#[test]
fn frame_with_marks_is_allocation_free_after_warmup() {
    let viewport = Viewport::new(80, 25);
    let mut app = App::new(&GameConfig::default(), viewport).unwrap();

    // Board sits at (9, 1) with 7-pixel cells.
    click(&mut app, ScreenPos::new(10, 2));
    click(&mut app, ScreenPos::new(17, 9));
    app.handle(Command::Board(BoardEvent::PointerMoved(ScreenPos::new(24, 2))));
    assert_eq!(app.grid().filled(), 2);
    assert_eq!(
        app.grid().cells().get(ArrayPos::new(0, 0)),
        Some(Some(Mark::Cross))
    );

    // Warm-up (initial surface and framebuffer sizing).
    app.frame(viewport);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            app.frame(viewport);
        }
    });

    assert!(allocs == 0);
}
