//! 盤面の対称性（二面体群 D4）による候補手の削減。
//!
//! `CELL_CLASSES` は空き盤面の幾何だけで決まる同値類で、既に置かれた記号を考慮しない。
//! D4 の8変換すべてで不変な局面（空き盤面、中央だけの局面など）以外では、
//! 一部の対称性を持つ局面も含めて同値でないマスを同一視し、最善手を取りこぼすことがある（近似）。
//! `exact_classes` は現局面を保つ変換だけで同値類を求め直すので、全列挙と同じ値を返す。

use crate::engine::board::Board;
use crate::engine::types::{Cell, Mark};

use super::limits::SearchContext;
use super::search::{Trial, minimax};

/// D4 の8変換。`D4[t][i]` はマス `i` の移動先。
pub const D4: [[u8; 9]; 8] = [
    // 恒等
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    // 90° 回転（時計回り）
    [2, 5, 8, 1, 4, 7, 0, 3, 6],
    // 180° 回転
    [8, 7, 6, 5, 4, 3, 2, 1, 0],
    // 270° 回転
    [6, 3, 0, 7, 4, 1, 8, 5, 2],
    // 左右反転
    [2, 1, 0, 5, 4, 3, 8, 7, 6],
    // 上下反転
    [6, 7, 8, 3, 4, 5, 0, 1, 2],
    // 主対角線で反転
    [0, 3, 6, 1, 4, 7, 2, 5, 8],
    // 副対角線で反転
    [8, 5, 2, 7, 4, 1, 6, 3, 0],
];

/// 角 `{0, 2, 6, 8}`。
const CORNERS: u16 = 0b1_0100_0101;

/// 辺 `{1, 3, 5, 7}`。
const EDGES: u16 = 0b0_1010_1010;

/// 中央 `{4}`。
const CENTER: u16 = 0b0_0001_0000;

/// 空き盤面での同値類（マスごとに、同一視するマスのビットマスク）。
///
/// `D4` の全変換による軌道そのもの。
pub const CELL_CLASSES: [u16; 9] = [
    CORNERS, EDGES, CORNERS, EDGES, CENTER, EDGES, CORNERS, EDGES, CORNERS,
];

/// 変換 `perm` をビットボードに適用する。
fn permute_bits(bits: u16, perm: &[u8; 9]) -> u16 {
    Cell::all()
        .zip(perm.iter())
        .filter(|&(cell, _)| bits & cell.bit() != u16::MIN)
        .fold(u16::MIN, |acc, (_, &to)| {
            acc | Cell::from_index_unchecked(to).bit()
        })
}

/// 変換 `perm` を盤面に適用する。
#[must_use]
pub fn transform(board: Board, perm: &[u8; 9]) -> Board {
    Board::from_bits(
        permute_bits(board.bits(Mark::X), perm),
        permute_bits(board.bits(Mark::O), perm),
    )
}

/// 現局面を保つ変換（安定化部分群）だけで同値類を求める。
#[must_use]
pub fn exact_classes(board: Board) -> [u16; 9] {
    let mut classes = [0_u16; 9];
    for perm in D4.iter().filter(|perm| transform(board, perm) == board) {
        for (slot, &to) in classes.iter_mut().zip(perm.iter()) {
            *slot |= Cell::from_index_unchecked(to).bit();
        }
    }
    classes
}

/// 各同値類で最初の空きマス（インデックス順）を代表として返す。
pub fn representatives(board: Board, classes: &[u16; 9]) -> impl Iterator<Item = Cell> {
    let empty = board.empty_bits();
    board.empty_cells().filter(move |cell| {
        let class = classes
            .get(usize::from(cell.index()))
            .copied()
            .unwrap_or(u16::MIN);
        let members = class & empty;
        members & members.wrapping_neg() == cell.bit()
    })
}

/// ルート探索（対称性削減）。代表マスだけを枝刈りなしのミニマックスで調べ、値の大きい手を選ぶ。
pub(super) fn root_symmetric(
    board: &mut Board,
    maximizer: Mark,
    classes: &[u16; 9],
    ctx: &mut SearchContext,
) -> (i8, Option<Cell>) {
    ctx.stats_mut().visit(0);

    let candidates: Vec<Cell> = representatives(*board, classes).collect();
    tracing::trace!(?candidates, "symmetry candidates");

    let mut best_score = i8::MIN;
    let mut best_cell: Option<Cell> = None;

    for cell in candidates {
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
