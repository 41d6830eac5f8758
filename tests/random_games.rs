//! Random playout tests. Seeded games exercise every rule path at once
//! and check the invariants that must hold after any legal half-move.

use rand::prelude::*;
use rand::rngs::StdRng;

use gambit_engine::fen::Fen;
use gambit_engine::game::GameStatus;
use gambit_engine::{Board, Game};

const PLAYOUTS: u64 = 20;
const MAX_HALF_MOVES: usize = 120;

#[test]
fn random_playouts_preserve_invariants() {
    for seed in 0..PLAYOUTS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();

        for ply in 0..MAX_HALF_MOVES {
            if game.status() != GameStatus::Underway {
                break;
            }
            let moves = game.board().generate_legal_moves();
            assert!(!moves.is_empty(), "underway game must have a legal move");

            let mover = game.board().side_to_move();
            let move_ = *moves.choose(&mut rng).unwrap();
            game.play(move_.from(), move_.to(), move_.promotion())
                .unwrap();

            // The mover may never leave their own king attacked.
            assert!(
                !game.board().is_in_check(mover),
                "seed {seed} ply {ply}: king left in check after {move_}"
            );

            // Every reached position must survive the FEN codec.
            let fen = game.board().to_fen();
            let reparsed = Board::parse_fen(&fen).unwrap();
            assert_eq!(reparsed.to_fen(), fen, "seed {seed} ply {ply}");

            // History grows by exactly one half-move per play.
            assert_eq!(game.history().total_half_moves(), ply + 1);
        }
    }
}

#[test]
fn random_playouts_reconstruct_from_history() {
    for seed in 0..5u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();

        for _ in 0..40 {
            if game.status() != GameStatus::Underway {
                break;
            }
            let moves = game.board().generate_legal_moves();
            let move_ = *moves.choose(&mut rng).unwrap();
            game.play(move_.from(), move_.to(), move_.promotion())
                .unwrap();
        }

        let rebuilt = Game::from_history(game.history().clone()).unwrap();
        assert_eq!(rebuilt.board(), game.board(), "seed {seed}");
    }
}

#[test]
fn replay_positions_match_live_play() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = Game::new();
    let mut live_fens = vec![Board::START_FEN.to_string()];

    for _ in 0..30 {
        if game.status() != GameStatus::Underway {
            break;
        }
        let moves = game.board().generate_legal_moves();
        let move_ = *moves.choose(&mut rng).unwrap();
        game.play(move_.from(), move_.to(), move_.promotion())
            .unwrap();
        live_fens.push(game.board().to_fen());
    }

    let mut cursor = game.replay_from_start();
    for (n, fen) in live_fens.iter().enumerate() {
        cursor.jump_to(n).unwrap();
        assert_eq!(cursor.position(), fen);
    }
}
