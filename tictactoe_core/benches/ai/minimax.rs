//! `tictactoe_core::ai::minimax` の性能計測（探索方式ごとの1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use tictactoe_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 比較する探索方式。
const STRATEGIES: [ai::Strategy; 4] = [
    ai::Strategy::AlphaBeta,
    ai::Strategy::Exhaustive,
    ai::Strategy::ExactSymmetry,
    ai::Strategy::StaticSymmetry,
];

/// 空き盤面から全方式で1手を選ぶ時間を計測する。
fn bench_empty_board(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ai/minimax/empty_board");
    group.sample_size(10);

    for strategy in STRATEGIES {
        let bench_id = BenchmarkId::from_parameter(strategy);
        group.bench_with_input(bench_id, &strategy, |bench, input| {
            bench.iter(|| {
                black_box(ai::minimax::search(
                    engine::Board::empty(),
                    engine::Mark::X,
                    *input,
                ))
            });
        });
    }

    group.finish();
}

/// 2手進めた局面で αβ と全探索を比較する。
fn bench_after_two_plies(criterion: &mut Criterion) {
    let Ok(board) = "X...O....".parse::<engine::Board>() else {
        return;
    };
    let mut group = criterion.benchmark_group("ai/minimax/after_two_plies");

    for strategy in [ai::Strategy::AlphaBeta, ai::Strategy::Exhaustive] {
        let bench_id = BenchmarkId::from_parameter(strategy);
        group.bench_with_input(bench_id, &strategy, |bench, input| {
            bench.iter(|| black_box(ai::minimax::search(board, engine::Mark::X, *input)));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_empty_board(&mut criterion);
    bench_after_two_plies(&mut criterion);

    criterion.final_summary();
}
