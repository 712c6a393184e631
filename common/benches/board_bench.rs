use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use common::games::tictactoe::{BoardGeometry, BoardLogic, Mark, Point, Position};

/// Fills the whole board in row-major order, alternating marks.
fn fill_board(board_size: usize) -> BoardLogic {
    let mut board = BoardLogic::new(board_size).unwrap();
    let mut mark = Mark::X;
    for index in 0..board_size * board_size {
        board.update(Position::from_index(index, board_size), mark);
        mark = mark.opponent();
    }
    board
}

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_board");
    for board_size in 3..=5 {
        group.bench_with_input(
            BenchmarkId::from_parameter(board_size),
            &board_size,
            |b, &size| b.iter(|| fill_board(black_box(size))),
        );
    }
    group.finish();
}

fn bench_hit_testing(c: &mut Criterion) {
    let geometry = BoardGeometry::for_window(5, 600.0, 600.0).unwrap();
    let points: Vec<Point> = (0..600)
        .step_by(7)
        .flat_map(|x| (0..600).step_by(7).map(move |y| Point::new(x as f32, y as f32)))
        .collect();

    c.bench_function("coordinates_for_position_5x5", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|point| geometry.coordinates_for_position(**point).is_some())
                .count()
        })
    });
}

criterion_group!(benches, bench_full_game, bench_hit_testing);
criterion_main!(benches);
