//! 結合テスト: CPU同士の対戦が終局まで進み、完全読み側が負けないことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use tictactoe_core::ai::types::Ai;
    use tictactoe_core::{ai, engine};

    /// 1局を最後まで進め、結果を返す。
    fn play_game(x_agent: &mut dyn Ai, o_agent: &mut dyn Ai) -> engine::Outcome {
        let mut game = engine::Game::initial();

        // 9手で必ず終局する。
        for _turn in 0_u8..9 {
            let board = game.board();
            let chosen = match game.side_to_move() {
                engine::Mark::X => x_agent.select_move(board),
                engine::Mark::O => o_agent.select_move(board),
            };
            assert!(chosen.is_ok(), "select_move must succeed, got={chosen:?}");
            let cell = match chosen {
                Ok(value) => value,
                Err(_err) => break,
            };

            let play_result = game.play(cell.index());
            assert!(play_result.is_ok(), "play must succeed, got={play_result:?}");

            if let Ok(engine::GameStatus::GameOver(outcome)) = play_result {
                return outcome;
            }
        }

        let status = game.status();
        panic!("game did not finish within 9 plies, status={status:?}");
    }

    /// 完全読み同士は引き分ける。
    #[test]
    fn minimax_vs_minimax_draws() {
        for strategy in [
            ai::Strategy::AlphaBeta,
            ai::Strategy::Exhaustive,
            ai::Strategy::ExactSymmetry,
        ] {
            let mut x_agent = ai::minimax::Agent::new(strategy);
            let mut o_agent = ai::minimax::Agent::new(strategy);
            let outcome = play_game(&mut x_agent, &mut o_agent);
            assert_eq!(outcome, engine::Outcome::Draw, "strategy={strategy}");
        }
    }

    /// 先手の完全読みはランダムに負けない。
    #[test]
    fn minimax_as_x_never_loses_to_random() {
        for seed in 0_u64..64 {
            let mut x_agent = ai::minimax::Agent::default();
            let mut o_agent = ai::random::Agent::new(seed);
            let outcome = play_game(&mut x_agent, &mut o_agent);
            assert_ne!(
                outcome,
                engine::Outcome::Win(engine::Mark::O),
                "seed={seed}"
            );
        }
    }

    /// 後手の完全読みはランダムに負けない。
    #[test]
    fn minimax_as_o_never_loses_to_random() {
        for seed in 0_u64..64 {
            let mut x_agent = ai::random::Agent::new(seed);
            let mut o_agent = ai::minimax::Agent::default();
            let outcome = play_game(&mut x_agent, &mut o_agent);
            assert_ne!(
                outcome,
                engine::Outcome::Win(engine::Mark::X),
                "seed={seed}"
            );
        }
    }

    /// 完全読みの手番では読んだ手を、相手の手番では全ての応手を試して終局まで進める。
    /// 辿った終局の数を返す。
    fn explore_every_reply(
        board: engine::Board,
        engine_side: engine::Mark,
        agent: &mut ai::minimax::Agent,
    ) -> u32 {
        let outcome = board.outcome();
        if outcome.is_terminal() {
            assert_ne!(
                outcome,
                engine::Outcome::Win(engine_side.opponent()),
                "engine lost as {engine_side}, board={board}"
            );
            return 1;
        }

        let mover = board.side_to_move();
        if mover == engine_side {
            let chosen = agent.select_move(board);
            assert!(chosen.is_ok(), "board={board}, got={chosen:?}");
            let Ok(cell) = chosen else {
                return 0;
            };
            let mut next = board;
            assert_eq!(next.place(cell, mover), Ok(()));
            return explore_every_reply(next, engine_side, agent);
        }

        board
            .empty_cells()
            .map(|cell| {
                let mut next = board;
                assert_eq!(next.place(cell, mover), Ok(()));
                explore_every_reply(next, engine_side, agent)
            })
            .sum()
    }

    /// 先手でも後手でも、相手のどの応手に対しても負けない。
    #[test]
    fn minimax_never_loses_against_any_line() {
        for engine_side in [engine::Mark::X, engine::Mark::O] {
            let mut agent = ai::minimax::Agent::default();
            let finished = explore_every_reply(engine::Board::empty(), engine_side, &mut agent);
            assert!(finished > 0, "engine_side={engine_side}");
        }
    }

    /// `random` 同士でも9手以内に終局する。
    #[test]
    fn random_vs_random_finishes() {
        let mut x_agent = ai::random::Agent::new(u64::MIN);
        let mut o_agent = ai::random::Agent::new(4242);
        let outcome = play_game(&mut x_agent, &mut o_agent);
        assert!(outcome.is_terminal());
    }

    /// 終局後の探索は拒否され、リセットで再開できる。
    #[test]
    fn finished_game_rejects_search_until_reset() {
        let mut game = engine::Game::initial();
        for index in [0_u8, 1, 4, 2, 8] {
            assert!(game.play(index).is_ok());
        }
        assert_eq!(
            game.status(),
            engine::GameStatus::GameOver(engine::Outcome::Win(engine::Mark::X))
        );

        let result = ai::minimax::best_move(game.board(), engine::Mark::O);
        assert!(
            matches!(result, Err(ai::SearchError::Terminal { .. })),
            "got={result:?}"
        );

        assert!(game.dispatch(engine::Command::Reset).is_ok());
        let found = ai::minimax::best_move(game.board(), game.side_to_move());
        assert!(found.is_ok(), "got={found:?}");
    }
}
