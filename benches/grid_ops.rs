use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{Grid, GridConfig, InARow, Static, Surface};
use tui_tictactoe::types::{ArrayPos, Mark, Palette, ScreenPos};

fn board(columns: u16, rows: u16, cell_size: u16) -> Grid<InARow, Static> {
    let config = GridConfig {
        columns,
        rows,
        cell_size,
        ..GridConfig::default()
    };
    Grid::new(config, InARow::new(5), Static::default()).unwrap()
}

/// Checkerboard-ish fill that never completes a line of five.
fn fill_without_winner(grid: &mut Grid<InARow, Static>) {
    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let mark = if (col / 2 + row) % 2 == 0 {
                Mark::Cross
            } else {
                Mark::Circle
            };
            grid.add(mark, ArrayPos::new(row, col));
        }
    }
}

fn bench_convert(c: &mut Criterion) {
    let grid = board(15, 15, 10);

    c.bench_function("convert_15x15", |b| {
        b.iter(|| grid.convert(black_box(ScreenPos::new(87, 143))))
    });
}

fn bench_update_score(c: &mut Criterion) {
    let mut grid = board(15, 15, 10);
    fill_without_winner(&mut grid);

    c.bench_function("update_score_full_15x15", |b| {
        b.iter(|| black_box(&grid).update_score())
    });
}

fn bench_render(c: &mut Criterion) {
    let mut grid = board(15, 15, 10);
    fill_without_winner(&mut grid);

    c.bench_function("render_15x15", |b| {
        b.iter(|| {
            grid.render();
        })
    });
}

fn bench_compose(c: &mut Criterion) {
    let mut grid = board(3, 3, 20);
    grid.add(Mark::Cross, ArrayPos::new(1, 1));
    grid.render();
    let palette = Palette::default();
    let mut parent = Surface::new(120, 80, palette.background);

    c.bench_function("highlight_and_blit_3x3", |b| {
        b.iter(|| {
            parent.fill(palette.background);
            grid.highlight(&mut parent, black_box(ScreenPos::new(25, 25)));
            parent.blit(grid.surface(), grid.position());
        })
    });
}

criterion_group!(
    benches,
    bench_convert,
    bench_update_score,
    bench_render,
    bench_compose
);
criterion_main!(benches);
