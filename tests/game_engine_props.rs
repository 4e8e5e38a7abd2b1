use chocolate_bar::{
    first_turn, select_safe_direction, AiPlayer, BarConfig, ConsolePresenter, Direction,
    GameEngine, GameStatus, Session, Side,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Bar shape with a spoiled location inside it, 1-indexed.
fn bar_config() -> impl Strategy<Value = BarConfig> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        (1..=rows, 1..=cols).prop_map(move |(r, c)| BarConfig::new(rows, cols, r, c))
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn first_turn_matches_parity(rows in 1usize..100, cols in 1usize..100) {
        let expected = if rows % 2 == cols % 2 { Side::Player } else { Side::Computer };
        prop_assert_eq!(first_turn(rows, cols), expected);
    }

    /// Non-terminal moves shrink exactly one dimension by one and keep the
    /// spoiled piece in bounds; terminal moves leave the bar untouched.
    #[test]
    fn moves_shrink_and_track_spoiled(
        config in bar_config(),
        moves in prop::collection::vec(direction(), 0..20),
    ) {
        let mut engine = GameEngine::new(&config).unwrap();
        for d in moves {
            if engine.is_over() {
                break;
            }
            let (rows, cols) = (engine.rows(), engine.cols());
            let mover = engine.turn();
            let would_eat_spoiled = engine.bar().edge_has_spoiled(d);
            prop_assert!(engine.is_valid_direction(d));

            let report = engine.apply_direction(d).unwrap();
            if would_eat_spoiled {
                prop_assert_eq!(report.status, GameStatus::ate_spoiled(mover));
                prop_assert!(report.eaten.contains_spoiled());
                prop_assert_eq!((engine.rows(), engine.cols()), (rows, cols));
            } else {
                prop_assert!(!report.eaten.contains_spoiled());
                if d.is_row() {
                    prop_assert_eq!((engine.rows(), engine.cols()), (rows - 1, cols));
                } else {
                    prop_assert_eq!((engine.rows(), engine.cols()), (rows, cols - 1));
                }
                let (sr, sc) = engine.spoiled();
                prop_assert!(sr < engine.rows());
                prop_assert!(sc < engine.cols());
                engine.switch_turn().unwrap();
                prop_assert_eq!(engine.turn(), mover.other());
            }
        }
        prop_assert!(engine.rows() >= 1 && engine.cols() >= 1);
    }

    #[test]
    fn computer_never_picks_spoiled_edge(config in bar_config(), seed in any::<u64>()) {
        let engine = GameEngine::new(&config).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        match select_safe_direction(&engine, &mut rng) {
            Some(d) => {
                prop_assert!(!engine.bar().edge_has_spoiled(d));
                prop_assert!(engine.safe_directions().contains(&d));
            }
            None => prop_assert_eq!((engine.rows(), engine.cols()), (1, 1)),
        }
    }

    /// With both sides avoiding the spoiled piece the bar always runs down to
    /// the single spoiled piece, and the opening rule hands that to the player.
    #[test]
    fn safe_play_ends_with_player_loss(config in bar_config(), seed in any::<u64>()) {
        let engine = GameEngine::new(&config).unwrap();
        let presenter = ConsolePresenter::new(std::io::sink(), false);
        let mut session = Session::new(
            engine,
            AiPlayer::seeded(seed),
            AiPlayer::seeded(seed.wrapping_add(1)),
            presenter,
        );
        let status = session.run().unwrap();
        prop_assert_eq!(status, GameStatus::PlayerLost);
        prop_assert_eq!(session.history().len(), config.rows + config.cols - 1);
        prop_assert_eq!((session.engine().rows(), session.engine().cols()), (1, 1));
    }
}
