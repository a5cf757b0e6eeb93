//! Seeded random playouts.
//!
//! Each game places stones on a shuffled list of every cell until it ends,
//! then checks the bookkeeping that must hold for any legal game.

use gomoku::core::{Cell, GameConfig, GameState, Player};
use gomoku::rules::{GameStatus, Outcome};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Play one random game to the end. Returns the final outcome and the number
/// of applied placements.
fn random_game(game: &mut GameState, seed: u64) -> (Outcome, usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let size = game.size();
    let mut cells: Vec<(usize, usize)> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .collect();
    cells.shuffle(&mut rng);

    let mut applied = 0;
    for (row, col) in cells {
        let outcome = game.place_marker(row, col);
        assert!(outcome.is_applied(), "empty cell ({row}, {col}) was ignored");
        applied += 1;
        if outcome.is_terminal() {
            return (outcome, applied);
        }
    }
    panic!("game did not end after filling the board");
}

fn count(game: &GameState, player: Player) -> usize {
    game.board()
        .cells()
        .filter(|&(_, cell)| cell == Cell::Stone(player))
        .count()
}

#[test]
fn test_random_games_standard_board() {
    for seed in 0..50 {
        let mut game = GameState::standard();
        let (outcome, applied) = random_game(&mut game, seed);

        assert_eq!(game.status(), GameStatus::Ended);
        assert_eq!(game.board().occupied(), applied);

        let black = count(&game, Player::Black);
        let white = count(&game, Player::White);
        assert!(black == white || black == white + 1, "seed {seed}: {black} vs {white}");

        match outcome {
            Outcome::Win(player) => {
                assert_eq!(game.winner(), Some(player));
                assert_eq!(game.current_player(), player);
            }
            Outcome::Draw => assert!(game.is_board_full()),
            other => panic!("seed {seed}: non-terminal outcome {other:?}"),
        }
    }
}

/// Boards smaller than five can only end in a draw.
#[test]
fn test_random_games_tiny_board_always_draw() {
    for seed in 0..20 {
        let mut game = GameState::new(GameConfig::new(4));
        let (outcome, applied) = random_game(&mut game, seed);

        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(applied, 16);
        assert_eq!(game.winner(), None);
    }
}

/// The same seed replays the same game; reset makes the replay identical.
#[test]
fn test_random_game_replay_after_reset() {
    let mut game = GameState::new(GameConfig::new(11));
    let (first, _) = random_game(&mut game, 7);
    let first_board = game.board().clone();

    game.reset();
    let (second, _) = random_game(&mut game, 7);

    assert_eq!(first, second);
    assert_eq!(&first_board, game.board());
}

#[test]
fn test_white_first_game_counts() {
    let config = GameConfig::new(13).with_first_player(Player::White);
    for seed in 100..120 {
        let mut game = GameState::new(config);
        random_game(&mut game, seed);

        let black = count(&game, Player::Black);
        let white = count(&game, Player::White);
        assert!(white == black || white == black + 1, "seed {seed}: {white} vs {black}");
    }
}
