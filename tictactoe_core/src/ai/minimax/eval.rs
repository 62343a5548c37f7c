use crate::engine::board::Board;
use crate::engine::types::{Mark, Outcome};

use super::{SCORE_DRAW, SCORE_LOSS, SCORE_WIN};

/// 終局していれば最大化側から見た値を返す。進行中なら `None`。
pub(super) fn terminal_score(board: Board, maximizer: Mark) -> Option<i8> {
    match board.outcome() {
        Outcome::Win(mark) if mark == maximizer => Some(SCORE_WIN),
        Outcome::Win(_) => Some(SCORE_LOSS),
        Outcome::Draw => Some(SCORE_DRAW),
        Outcome::InProgress => None,
    }
}

/// 深さ上限に達したときの静的評価（最大化側視点）。
///
/// 三目があればその勝敗、なければ引き分け扱い。
pub(super) fn evaluate(board: Board, maximizer: Mark) -> i8 {
    if board.winner(maximizer) {
        SCORE_WIN
    } else if board.winner(maximizer.opponent()) {
        SCORE_LOSS
    } else {
        SCORE_DRAW
    }
}
