use criterion::{black_box, criterion_group, criterion_main, Criterion};

use retro_tetris::core::{Board, Game, NullSurface, SimpleRng, Tetromino};
use retro_tetris::types::PieceKind;

fn bench_frame_update(c: &mut Criterion) {
    let mut surface = NullSurface;
    let mut game = Game::new(&mut surface, SimpleRng::new(12345));

    c.bench_function("frame_update", |b| {
        b.iter(|| {
            game.update(black_box(&mut surface));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, 1);
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    c.bench_function("hard_drop_cycle", |b| {
        b.iter(|| {
            let mut surface = NullSurface;
            let mut game = Game::new(&mut surface, SimpleRng::new(777));
            for _ in 0..10 {
                game.handle_input(black_box('s'));
            }
        })
    });
}

fn bench_rotation(c: &mut Criterion) {
    let mut piece = Tetromino::new(PieceKind::T);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            piece.rotate(black_box(1));
        })
    });
}

criterion_group!(
    benches,
    bench_frame_update,
    bench_line_clear,
    bench_hard_drop_cycle,
    bench_rotation
);
criterion_main!(benches);
