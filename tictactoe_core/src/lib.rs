//! Tic-tac-toe (3×3 三目並べ) core logic.
//!
//! このクレートは盤面とゲーム進行を管理する `engine` と、完全読みで手を選択する `ai` を提供します。
//! UI（`tictactoe_cli` など）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// 盤面・勝敗判定・ゲーム進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
