//! コマンドライン引数。

use clap::{Parser, ValueEnum};
use tictactoe_core::ai;

/// 各手番を誰が指すか。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PlayerKind {
    /// 標準入力から手を読む。
    Human,
    /// 完全読み。
    Minimax,
}

/// ミニマックスのルートでの手の選び方。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    Exhaustive,
    AlphaBeta,
    StaticSymmetry,
    ExactSymmetry,
}

impl From<StrategyArg> for ai::Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => Self::Exhaustive,
            StrategyArg::AlphaBeta => Self::AlphaBeta,
            StrategyArg::StaticSymmetry => Self::StaticSymmetry,
            StrategyArg::ExactSymmetry => Self::ExactSymmetry,
        }
    }
}

/// ログの出力形式。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// 出力するログの最大レベル。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// 端末で遊ぶ三目並べ。
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version)]
pub struct Args {
    /// X（先手）を指すプレイヤー。
    #[arg(short = 'x', long, value_enum, default_value_t = PlayerKind::Human)]
    pub x_player: PlayerKind,

    /// O（後手）を指すプレイヤー。
    #[arg(short = 'o', long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub o_player: PlayerKind,

    /// ミニマックスAIの探索方式。
    #[arg(long, value_enum, default_value_t = StrategyArg::AlphaBeta)]
    pub strategy: StrategyArg,

    /// AIが指す前に待つ時間（ミリ秒）。
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// ログの出力形式（標準エラー出力）。
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// ログの最大レベル。
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::{Args, LogFormat, LogLevel, PlayerKind, StrategyArg};
    use clap::{CommandFactory as _, Parser as _};
    use tictactoe_core::ai;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_put_the_human_on_x() {
        let args = Args::try_parse_from(["tictactoe"]).unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(args.x_player, PlayerKind::Human);
        assert_eq!(args.o_player, PlayerKind::Minimax);
        assert_eq!(args.strategy, StrategyArg::AlphaBeta);
        assert_eq!(args.delay_ms, 500);
        assert_eq!(args.log_format, LogFormat::Pretty);
        assert_eq!(args.log_level, LogLevel::Warn);
    }

    #[test]
    fn parses_every_flag() {
        let args = Args::try_parse_from([
            "tictactoe",
            "-x",
            "minimax",
            "-o",
            "human",
            "--strategy",
            "exact-symmetry",
            "--delay-ms",
            "0",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap_or_else(|err| panic!("{err}"));

        assert_eq!(args.x_player, PlayerKind::Minimax);
        assert_eq!(args.o_player, PlayerKind::Human);
        assert_eq!(ai::Strategy::from(args.strategy), ai::Strategy::ExactSymmetry);
        assert_eq!(args.delay_ms, 0);
        assert_eq!(args.log_format, LogFormat::Json);
        assert_eq!(tracing::Level::from(args.log_level), tracing::Level::DEBUG);
    }

    #[test]
    fn rejects_unknown_player() {
        assert!(Args::try_parse_from(["tictactoe", "-x", "oracle"]).is_err());
    }

    #[test]
    fn offers_no_weaker_opponent() {
        assert!(Args::try_parse_from(["tictactoe", "-o", "random"]).is_err());
        assert!(Args::try_parse_from(["tictactoe", "--seed", "7"]).is_err());
    }
}
