//! 端末で動作する三目並べ。

mod app;
mod args;

use std::io;

use clap::Parser as _;

use crate::args::{Args, LogFormat};

/// ログを標準エラー出力に流す subscriber を登録する。
fn init_tracing(args: &Args) -> anyhow::Result<()> {
    let level = tracing::Level::from(args.log_level);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr);

    let installed = match args.log_format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;
    tracing::debug!(?args, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = app::App::from_args(&args, stdin.lock(), stdout.lock());
    app.run()
}
