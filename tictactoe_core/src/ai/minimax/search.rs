use core::ops::{Deref, DerefMut};

use crate::engine::board::Board;
use crate::engine::types::{Cell, Mark};

use super::eval::{evaluate, terminal_score};
use super::limits::SearchContext;

/// 仮置きした記号。`Drop` で必ず取り消すので、どの経路で抜けても盤面は元に戻る。
pub(super) struct Trial<'board> {
    /// 作業用の盤面。
    board: &'board mut Board,
    /// 仮置きしたマス。
    cell: Cell,
}

impl<'board> Trial<'board> {
    /// 空きマスに仮置きする。埋まっていれば `None`。
    pub(super) fn place(board: &'board mut Board, cell: Cell, mark: Mark) -> Option<Self> {
        match board.place(cell, mark) {
            Ok(()) => Some(Self { board, cell }),
            Err(_occupied) => None,
        }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.clear(self.cell);
    }
}

/// ルート探索（全探索）。空きマスをインデックス順に調べ、最初に最大値へ達した手を返す。
pub(super) fn root_exhaustive(
    board: &mut Board,
    maximizer: Mark,
    ctx: &mut SearchContext,
) -> (i8, Option<Cell>) {
    ctx.stats_mut().visit(0);

    let mut best_score = i8::MIN;
    let mut best_cell: Option<Cell> = None;

    for cell in board.empty_cells() {
        let Some(mut trial) = Trial::place(board, cell, maximizer) else {
            continue;
        };
        let score = minimax(&mut trial, maximizer.opponent(), maximizer, 1, ctx);
        drop(trial);

        if score > best_score {
            best_score = score;
            best_cell = Some(cell);
        }
    }

    (best_score, best_cell)
}

/// ミニマックス（枝刈りなし）。最大化側視点の値を返す。
pub(super) fn minimax(
    board: &mut Board,
    mover: Mark,
    maximizer: Mark,
    ply: u8,
    ctx: &mut SearchContext,
) -> i8 {
    ctx.stats_mut().visit(ply);

    if let Some(score) = terminal_score(*board, maximizer) {
        return score;
    }
    if ply >= ctx.max_depth() {
        return evaluate(*board, maximizer);
    }

    let maximizing = mover == maximizer;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };
    let next_ply = ply.saturating_add(1);

    for cell in board.empty_cells() {
        let Some(mut trial) = Trial::place(board, cell, mover) else {
            continue;
        };
        let score = minimax(&mut trial, mover.opponent(), maximizer, next_ply, ctx);
        drop(trial);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// ルート探索（αβ）。窓は `i8::MIN..i8::MAX` から始める。
pub(super) fn root_alphabeta(
    board: &mut Board,
    maximizer: Mark,
    ctx: &mut SearchContext,
) -> (i8, Option<Cell>) {
    alphabeta(board, maximizer, maximizer, i8::MIN, i8::MAX, 0, ctx)
}

/// ミニマックス（αβ付き）。最大化側視点の値と、その値に最初に達した手を返す。
///
/// `alpha >= beta` になった時点で残りの兄弟を打ち切る。返す値は枝刈りの有無で変わらない。
pub(super) fn alphabeta(
    board: &mut Board,
    mover: Mark,
    maximizer: Mark,
    mut alpha: i8,
    mut beta: i8,
    ply: u8,
    ctx: &mut SearchContext,
) -> (i8, Option<Cell>) {
    ctx.stats_mut().visit(ply);

    if let Some(score) = terminal_score(*board, maximizer) {
        return (score, None);
    }
    if ply >= ctx.max_depth() {
        return (evaluate(*board, maximizer), None);
    }

    let maximizing = mover == maximizer;
    let mut best_score = if maximizing { i8::MIN } else { i8::MAX };
    let mut best_cell: Option<Cell> = None;
    let next_ply = ply.saturating_add(1);

    for cell in board.empty_cells() {
        let Some(mut trial) = Trial::place(board, cell, mover) else {
            continue;
        };
        let (score, _reply) = alphabeta(
            &mut trial,
            mover.opponent(),
            maximizer,
            alpha,
            beta,
            next_ply,
            ctx,
        );
        drop(trial);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_cell = Some(cell);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_cell = Some(cell);
            }
            beta = beta.min(best_score);
        }

        if alpha >= beta {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
    }

    (best_score, best_cell)
}
