use core::fmt;

use crate::ai::types::{Ai, SearchError};
use crate::engine::board::Board;
use crate::engine::types::{Cell, Mark};

use limits::{MAX_DEPTH, SearchContext};

mod eval;
mod limits;
mod search;
/// 盤面の対称変換と同値類。
pub mod symmetry;

pub type SearchStats = limits::SearchStats;

/// 最大化側の勝ち。
pub const SCORE_WIN: i8 = 1;

/// 引き分け。
pub const SCORE_DRAW: i8 = 0;

/// 最大化側の負け。
pub const SCORE_LOSS: i8 = -1;

/// ルートでの手の選び方。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Strategy {
    /// αβ 枝刈り付きミニマックス（全列挙）。
    #[default]
    AlphaBeta,
    /// 枝刈りなしのミニマックス（全列挙）。
    Exhaustive,
    /// 局面を保つ変換だけで求めた同値類の代表を調べる。
    ExactSymmetry,
    /// 空き盤面の同値類の代表だけを調べる近似。8変換すべてで不変な局面以外では最善手を逃すことがある。
    StaticSymmetry,
}

impl fmt::Display for Strategy {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::AlphaBeta => "alpha-beta",
            Self::Exhaustive => "exhaustive",
            Self::ExactSymmetry => "exact-symmetry",
            Self::StaticSymmetry => "static-symmetry",
        };
        f.write_str(name)
    }
}

/// 探索結果。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BestMove {
    /// 選択した手。
    cell: Cell,
    /// 探索統計。
    stats: SearchStats,
    /// 最大化側から見た値（-1, 0, +1）。
    value: i8,
}

impl BestMove {
    /// 選択した手を返す。
    #[inline]
    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    /// 探索統計を返す。
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 最大化側から見た値（+1 = 勝ち、0 = 引き分け、-1 = 負け）を返す。
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i8 {
        self.value
    }
}

/// 完全読みを行うAI。
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Agent {
    /// 手の選び方。
    strategy: Strategy,
}

impl Agent {
    /// `strategy` を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// 手の選び方を返す。
    #[inline]
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: Board) -> Result<Cell, SearchError> {
        search(board, board.side_to_move(), self.strategy).map(|found| found.cell())
    }
}

/// `maximizer` の手番として αβ 探索で最善手を求める。
///
/// # Errors
///
/// - `SearchError::Terminal`: 盤面がすでに終局している場合
/// - `SearchError::NotSideToMove`: `maximizer` が盤面の手番でない場合
#[inline]
pub fn best_move(board: Board, maximizer: Mark) -> Result<BestMove, SearchError> {
    search(board, maximizer, Strategy::AlphaBeta)
}

/// `maximizer` の手番として、指定の方法で最善手を求める。
///
/// 呼び出し側の盤面は変更しない（作業用の複製の上で仮置きと取り消しを行う）。
/// 同点の手はインデックス順で最初に見つかったものを選ぶ。
///
/// # Errors
///
/// - `SearchError::Terminal`: 盤面がすでに終局している場合
/// - `SearchError::NotSideToMove`: `maximizer` が盤面の手番でない場合
#[inline]
pub fn search(board: Board, maximizer: Mark, strategy: Strategy) -> Result<BestMove, SearchError> {
    let outcome = board.outcome();
    if outcome.is_terminal() {
        return Err(SearchError::Terminal { outcome });
    }

    let expected = board.side_to_move();
    if maximizer != expected {
        return Err(SearchError::NotSideToMove {
            expected,
            got: maximizer,
        });
    }

    let mut scratch = board;
    let mut ctx = SearchContext::new(MAX_DEPTH);
    let (value, best_cell) = match strategy {
        Strategy::AlphaBeta => search::root_alphabeta(&mut scratch, maximizer, &mut ctx),
        Strategy::Exhaustive => search::root_exhaustive(&mut scratch, maximizer, &mut ctx),
        Strategy::ExactSymmetry => {
            let classes = symmetry::exact_classes(board);
            symmetry::root_symmetric(&mut scratch, maximizer, &classes, &mut ctx)
        }
        Strategy::StaticSymmetry => symmetry::root_symmetric(
            &mut scratch,
            maximizer,
            &symmetry::CELL_CLASSES,
            &mut ctx,
        ),
    };

    // 進行中の盤面には必ず空きマスがある。
    let Some(cell) = best_cell else {
        return Err(SearchError::NoEmptyCell);
    };

    let stats = ctx.stats();
    tracing::debug!(
        %strategy,
        %maximizer,
        %board,
        value,
        %cell,
        nodes = stats.nodes(),
        cutoffs = stats.cutoffs(),
        "search finished"
    );

    Ok(BestMove { cell, stats, value })
}
