//! Replay cursor tests over a played game: stepping, jumping, bounds,
//! and history reconstruction.

use gambit_engine::coretypes::Square::*;
use gambit_engine::error::ErrorKind;
use gambit_engine::fen::Fen;
use gambit_engine::{Board, Game};

/// Five full moves of the Italian opening, ten half-moves total.
fn ten_half_move_game() -> Game {
    let mut game = Game::new();
    let plies = [
        (E2, E4),
        (E7, E5),
        (G1, F3),
        (B8, C6),
        (F1, C4),
        (F8, C5),
        (C2, C3),
        (G8, F6),
        (D2, D3),
        (D7, D6),
    ];
    for (from, to) in plies {
        game.play(from, to, None).unwrap();
    }
    game
}

#[test]
fn cursor_starts_at_latest() {
    let game = ten_half_move_game();
    let cursor = game.replay();
    assert_eq!(cursor.total(), 10);
    assert_eq!(cursor.current(), 10);
    assert_eq!(cursor.position(), game.board().to_fen());
}

#[test]
fn index_zero_is_the_starting_position() {
    let game = ten_half_move_game();
    let mut cursor = game.replay_from_start();
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.position(), Board::START_FEN);

    // First half-move is 1.e4.
    let fen = cursor.step(1).unwrap();
    assert_eq!(
        fen,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn out_of_bounds_jump_is_rejected_and_cursor_unchanged() {
    let game = ten_half_move_game();
    let mut cursor = game.replay();

    let err = cursor.jump_to(11).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    assert_eq!(cursor.current(), 10);

    cursor.jump_to(10).unwrap();
    cursor.step(-1).unwrap();
    assert_eq!(cursor.current(), 9);
}

#[test]
fn step_below_zero_is_rejected() {
    let game = ten_half_move_game();
    let mut cursor = game.replay_from_start();
    assert_eq!(
        cursor.step(-1).unwrap_err().kind(),
        ErrorKind::OutOfBounds
    );
    assert_eq!(cursor.current(), 0);
}

#[test]
fn walking_backward_visits_every_recorded_fen() {
    let game = ten_half_move_game();
    let mut cursor = game.replay();

    for n in (1..=10usize).rev() {
        cursor.jump_to(n).unwrap();
        let expected = game.history().position_at(n).unwrap();
        assert_eq!(cursor.position(), expected);
    }
}

#[test]
fn game_rebuilt_from_history_matches_original() {
    let game = ten_half_move_game();
    let rebuilt = Game::from_history(game.history().clone()).unwrap();
    assert_eq!(rebuilt.board(), game.board());
    assert_eq!(
        rebuilt.history().total_half_moves(),
        game.history().total_half_moves()
    );
}
