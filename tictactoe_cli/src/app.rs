//! 端末での対局ループ。

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_core::ai::types::Ai;
use tictactoe_core::{ai, engine};

use crate::args::{Args, PlayerKind};

/// 入力待ちで表示する操作説明。
const HELP_TEXT: &str = "commands: 0-8 place a mark | r, reset, new start over | q, quit exit | h, help";

/// 1行ぶんの入力を解釈した結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// マスに置く。範囲は `Game::play` が検査する。
    Place(u8),
    Reset,
    Quit,
    Help,
}

/// 1行の入力を解釈する。解釈できなければ `None`。
pub fn parse_input(line: &str) -> Option<Input> {
    let word = line.trim().to_ascii_lowercase();
    match word.as_str() {
        "r" | "reset" | "new" => Some(Input::Reset),
        "q" | "quit" => Some(Input::Quit),
        "h" | "help" | "?" => Some(Input::Help),
        other => other.parse::<u8>().ok().map(Input::Place),
    }
}

/// 手番ごとの指し手の出どころ。
#[derive(Debug)]
pub enum Controller {
    Human,
    Minimax(ai::minimax::Agent),
}

impl Controller {
    /// 引数の指定からコントローラを作る。
    pub const fn from_kind(kind: PlayerKind, strategy: ai::Strategy) -> Self {
        match kind {
            PlayerKind::Human => Self::Human,
            PlayerKind::Minimax => Self::Minimax(ai::minimax::Agent::new(strategy)),
        }
    }

    const fn is_human(&self) -> bool {
        matches!(*self, Self::Human)
    }

    /// AI なら手を選ぶ。人間なら `None`。
    fn select_move(
        &mut self,
        board: engine::Board,
    ) -> Option<Result<engine::Cell, ai::SearchError>> {
        match *self {
            Self::Human => None,
            Self::Minimax(ref mut agent) => Some(agent.select_move(board)),
        }
    }
}

/// 対局の状態と入出力をまとめたもの。
pub struct App<R, W> {
    delay: Duration,
    game: engine::Game,
    input: R,
    o_player: Controller,
    output: W,
    x_player: Controller,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// コマンドライン引数から組み立てる。
    pub fn from_args(args: &Args, input: R, output: W) -> Self {
        let strategy = ai::Strategy::from(args.strategy);
        Self {
            delay: Duration::from_millis(args.delay_ms),
            game: engine::Game::initial(),
            input,
            o_player: Controller::from_kind(args.o_player, strategy),
            output,
            x_player: Controller::from_kind(args.x_player, strategy),
        }
    }

    fn controller_for(&self, mark: engine::Mark) -> &Controller {
        match mark {
            engine::Mark::X => &self.x_player,
            engine::Mark::O => &self.o_player,
        }
    }

    fn controller_for_mut(&mut self, mark: engine::Mark) -> &mut Controller {
        match mark {
            engine::Mark::X => &mut self.x_player,
            engine::Mark::O => &mut self.o_player,
        }
    }

    fn status_text(&self) -> String {
        match self.game.status() {
            engine::GameStatus::GameOver(engine::Outcome::Win(mark)) => format!("{mark} wins!"),
            engine::GameStatus::GameOver(_) => "Draw.".to_owned(),
            _ => format!("{} to move", self.game.side_to_move()),
        }
    }

    /// 盤面を描く。空きマスには入力用の番号を出す。
    fn render(&mut self) -> anyhow::Result<()> {
        let board = self.game.board();
        for row in 0_u8..3 {
            let line = (0_u8..3)
                .filter_map(|col| engine::Cell::from_row_col(row, col))
                .map(|cell| match board.mark_at(cell) {
                    Some(mark) => mark.symbol(),
                    None => char::from(b'0'.wrapping_add(cell.index())),
                })
                .map(|symbol| format!(" {symbol} "))
                .collect::<Vec<_>>()
                .join("|");
            writeln!(self.output, "{line}")?;
            if row < 2 {
                writeln!(self.output, "---+---+---")?;
            }
        }
        writeln!(self.output, "{}", self.status_text())?;
        Ok(())
    }

    /// 手番が AI なら1手指す。指したら `true`。
    fn step_ai_once(&mut self) -> anyhow::Result<bool> {
        if self.game.is_game_over() {
            return Ok(false);
        }

        let board = self.game.board();
        let side = self.game.side_to_move();
        let Some(chosen) = self.controller_for_mut(side).select_move(board) else {
            return Ok(false);
        };

        let cell = chosen?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        self.game.play(cell.index())?;
        tracing::info!(%side, %cell, "ai move");
        writeln!(self.output, "{side} plays {cell}")?;
        Ok(true)
    }

    /// 人間の入力を1行処理する。`Quit` なら `false`。
    fn handle_input(&mut self, input: Input) -> anyhow::Result<bool> {
        match input {
            Input::Quit => return Ok(false),
            Input::Help => writeln!(self.output, "{HELP_TEXT}")?,
            Input::Reset => {
                self.game.reset();
                writeln!(self.output, "New game.")?;
            }
            Input::Place(index) => {
                if self.game.is_game_over() {
                    writeln!(self.output, "The game is over. Enter r to play again or q to quit.")?;
                    return Ok(true);
                }
                if !self.controller_for(self.game.side_to_move()).is_human() {
                    return Ok(true);
                }
                match self.game.dispatch(engine::Command::Place(index)) {
                    Ok(_status) => tracing::trace!(index, "human move"),
                    Err(err) => {
                        tracing::debug!(%err, index, "rejected move");
                        writeln!(self.output, "Invalid move: {err}")?;
                    }
                }
            }
        }
        Ok(true)
    }

    /// 入力が尽きるか `q` が入力されるまで対局を続ける。
    ///
    /// # Errors
    ///
    /// 入出力に失敗した場合、または AI が手を返せなかった場合にエラーを返す。
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{HELP_TEXT}")?;
        let mut needs_render = true;

        loop {
            if needs_render {
                self.render()?;
            }
            if self.step_ai_once()? {
                needs_render = true;
                continue;
            }

            let prompt = if self.game.is_game_over() {
                "r/q"
            } else {
                "0-8"
            };
            write!(self.output, "[{prompt}]> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            let Some(input) = parse_input(&line) else {
                writeln!(self.output, "Unrecognized input {:?}. Enter h for help.", line.trim())?;
                needs_render = false;
                continue;
            };
            if !self.handle_input(input)? {
                return Ok(());
            }
            needs_render = !matches!(input, Input::Help);
        }
    }
}
