use crate::engine::board::Board;
use crate::engine::types::{Cell, Mark, Outcome};

/// 探索を開始できなかった理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// 置けるマスがない。
    #[error("no empty cell to play")]
    NoEmptyCell,
    /// 探索側が盤面の手番と一致しない。
    #[error("{got} is not on move ({expected} to move)")]
    NotSideToMove {
        /// 石数から導出した手番。
        expected: Mark,
        /// 指定された探索側。
        got: Mark,
    },
    /// 終局済みの盤面で手を求められた。
    #[error("cannot search a finished game ({outcome})")]
    Terminal {
        /// 盤面の勝敗。
        outcome: Outcome,
    },
}

/// 手を選択するAI。
pub trait Ai {
    /// 盤面の手番側として次に置くマスを選択する。
    ///
    /// # Errors
    ///
    /// 盤面がすでに終局している場合、`SearchError::Terminal` を返す。
    fn select_move(&mut self, board: Board) -> Result<Cell, SearchError>;
}
