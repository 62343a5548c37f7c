//! `tictactoe_core::engine` の性能計測（勝敗判定、着手と取り消し）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use tictactoe_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 計測に使う進行中の局面。
fn midgame_board() -> Option<engine::Board> {
    "XO./.X./..O".parse().ok()
}

/// `Board::outcome` を計測する。
fn bench_outcome(criterion: &mut Criterion) {
    let Some(board) = midgame_board() else {
        return;
    };

    criterion.bench_function("engine/outcome_midgame", |bench| {
        bench.iter(|| black_box(black_box(board).outcome()));
    });
}

/// `Board::place` と `Board::clear` の組を計測する。
fn bench_place_clear(criterion: &mut Criterion) {
    let Some(cell) = engine::Cell::from_index(4) else {
        return;
    };

    criterion.bench_function("engine/place_clear_center", |bench| {
        bench.iter_batched(
            engine::Board::empty,
            |mut board| {
                let placed = board.place(cell, engine::Mark::X);
                board.clear(cell);
                black_box((placed, board))
            },
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_outcome(&mut criterion);
    bench_place_clear(&mut criterion);

    criterion.final_summary();
}
