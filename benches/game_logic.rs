use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pink_blast::core::{base_shape, Board, GameConfig, GameSession, GameSnapshot};
use pink_blast::types::{Cell, GameAction, ShapeKind};

fn half_full_board() -> Board {
    let mut board = Board::default();
    for row in 0..8 {
        for col in 0..8 {
            if (row * 3 + col * 5) % 7 < 3 {
                board = board.with_cell(row, col, Cell::Filled);
            }
        }
    }
    board
}

fn bench_can_place_scan(c: &mut Criterion) {
    let board = half_full_board();
    let shape = base_shape(ShapeKind::LBig);

    c.bench_function("fits_anywhere_l_big", |b| {
        b.iter(|| black_box(&board).fits_anywhere(black_box(&shape)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let board = Board::parse(&[
        "########", "#.......", "#.......", "########", "#.......", "#.......", "#.......",
        "########",
    ])
    .unwrap_or_default();

    c.bench_function("detect_and_clear_4_lines", |b| {
        b.iter(|| {
            let lines = black_box(&board).detect_completed_lines();
            board.clear_lines(&lines)
        })
    });
}

fn bench_place_turn(c: &mut Criterion) {
    c.bench_function("select_place_retry", |b| {
        let mut session = GameSession::with_seed(GameConfig::default(), 12345, 0).unwrap();
        let mut slot_row = 0usize;
        b.iter(|| {
            session.apply_action(GameAction::Select(0));
            if !session.apply_action(GameAction::Place {
                row: slot_row % 5,
                col: (slot_row * 3) % 5,
            }) || session.game_over()
            {
                session.apply_action(GameAction::Retry);
            }
            slot_row = slot_row.wrapping_add(1);
            session.take_effects();
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let session = GameSession::with_seed(GameConfig::default(), 12345, 0).unwrap();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            black_box(snap.board_hash)
        })
    });
}

criterion_group!(
    benches,
    bench_can_place_scan,
    bench_line_clear,
    bench_place_turn,
    bench_snapshot_into
);
criterion_main!(benches);
