use crate::engine::board::{Board, PlaceError};
use crate::engine::types::{Cell, Mark, Outcome};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局。
    GameOver(Outcome),
    /// 進行中。
    InProgress,
}

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("game is already over ({outcome})")]
    GameOver {
        /// 確定した勝敗。
        outcome: Outcome,
    },
    /// 指定インデックスが 0..=8 の範囲外。
    #[error("cell index {index} is out of range (must be 0-8)")]
    InvalidIndex {
        /// 指定されたインデックス。
        index: u8,
    },
    /// 指定マスはすでに埋まっている。
    #[error("cell {cell} is already occupied")]
    Occupied {
        /// 対象のマス。
        cell: Cell,
    },
}

impl From<PlaceError> for PlayError {
    #[inline]
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::Occupied { cell } => Self::Occupied { cell },
        }
    }
}

/// UI から送られる操作。
///
/// ボタンのコールバックを直接ゲームに結びつけず、この値を `Game::dispatch` に渡す。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Command {
    /// 指定インデックスのマスに現手番の記号を置く。
    Place(u8),
    /// 盤面を空にして最初からやり直す。
    Reset,
}

/// 1ゲームの進行を管理する構造体。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(self) -> Board {
        self.board
    }

    /// 操作を適用する。
    ///
    /// # Errors
    ///
    /// `Command::Place` の場合は `Game::play` と同じ条件でエラーを返す。
    #[inline]
    pub fn dispatch(&mut self, command: Command) -> Result<Status, PlayError> {
        match command {
            Command::Place(index) => self.play(index),
            Command::Reset => {
                self.reset();
                Ok(self.status())
            }
        }
    }

    /// 指定盤面から再開する（手番は石数から決まる）。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board) -> Self {
        Self { board }
    }

    /// 空き盤面からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Board::empty(),
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(self) -> bool {
        self.board.outcome().is_terminal()
    }

    /// 現手番の記号を指定インデックスに置く。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::InvalidIndex`: インデックスが 0..=8 の範囲外の場合
    /// - `PlayError::Occupied`: 指定マスがすでに埋まっている場合
    ///
    #[inline]
    pub fn play(&mut self, index: u8) -> Result<Status, PlayError> {
        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            return Err(PlayError::GameOver { outcome });
        }

        let Some(cell) = Cell::from_index(index) else {
            return Err(PlayError::InvalidIndex { index });
        };

        let mark = self.board.side_to_move();
        if let Err(err) = self.board.place(cell, mark) {
            return Err(err.into());
        }
        tracing::trace!(%mark, %cell, board = %self.board, "move applied");

        let status = self.status();
        if let Status::GameOver(result) = status {
            tracing::info!(%result, board = %self.board, "game over");
        }
        Ok(status)
    }

    /// 盤面を空に戻す。
    #[inline]
    pub fn reset(&mut self) {
        tracing::debug!(board = %self.board, "game reset");
        self.board = Board::empty();
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(self) -> Mark {
        self.board.side_to_move()
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(self) -> Status {
        match self.board.outcome() {
            Outcome::InProgress => Status::InProgress,
            outcome => Status::GameOver(outcome),
        }
    }
}
