/// 盤面（ビットボード）と勝敗判定の実装。
pub mod board;
/// ゲーム進行（手番、終局判定、リセット）の実装。
pub mod game;
pub mod types;

pub type Board = board::Board;
pub type Game = game::Game;
pub type Mark = types::Mark;
pub type Cell = types::Cell;
pub type Outcome = types::Outcome;
pub type Command = game::Command;
pub type GameStatus = game::Status;
pub type PlayError = game::PlayError;
pub type PlaceError = board::PlaceError;
pub type ParseBoardError = board::ParseBoardError;
