//! FEN codec tests over whole positions: parse, serialize, and the
//! malformed inputs the parser must reject.

use gambit_engine::coretypes::Color;
use gambit_engine::coretypes::Square::*;
use gambit_engine::coretypes::{Castling, Move};
use gambit_engine::fen::Fen;
use gambit_engine::Board;

const ROUND_TRIP_FENS: &[&str] = &[
    Board::START_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    "4k3/8/8/8/8/8/4P3/4K3 b - - 12 40",
];

#[test]
fn parse_then_serialize_is_identity() {
    for fen in ROUND_TRIP_FENS {
        let board = Board::parse_fen(fen).unwrap();
        assert_eq!(board.to_fen(), *fen);
    }
}

#[test]
fn start_fen_fields() {
    let board = Board::parse_fen(Board::START_FEN).unwrap();
    assert_eq!(board, Board::default());
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.castling(), Castling::ALL);
    assert_eq!(board.en_passant(), None);
    assert_eq!(board.halfmoves(), 0);
    assert_eq!(board.fullmoves(), 1);
}

#[test]
fn serialize_after_moves_matches_known_fen() {
    let mut board = Board::default();
    board.apply_move(Move::new(E2, E4, None)).unwrap();
    assert_eq!(
        board.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );

    board.apply_move(Move::new(C7, C5, None)).unwrap();
    board.apply_move(Move::new(G1, F3, None)).unwrap();
    assert_eq!(
        board.to_fen(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn rejects_wrong_field_count() {
    assert!(Board::parse_fen("").is_err());
    assert!(Board::parse_fen("8/8/8/8/8/8/8/8 w - -").is_err());
    assert!(Board::parse_fen(&format!("{} extra", Board::START_FEN)).is_err());
}

#[test]
fn rejects_malformed_placement() {
    // Seven ranks.
    assert!(Board::parse_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
    // Rank wider than eight files.
    assert!(Board::parse_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
    assert!(Board::parse_fen("ppppppppp/8/8/8/8/8/8/8 w - - 0 1").is_err());
    // Rank shorter than eight files.
    assert!(Board::parse_fen("7/8/8/8/8/8/8/8 w - - 0 1").is_err());
    // Unknown piece letter.
    assert!(Board::parse_fen("7x/8/8/8/8/8/8/8 w - - 0 1").is_err());
}

#[test]
fn rejects_malformed_trailing_fields() {
    assert!(Board::parse_fen("8/8/8/8/8/8/8/8 x - - 0 1").is_err());
    assert!(Board::parse_fen("8/8/8/8/8/8/8/8 w KQxq - 0 1").is_err());
    assert!(Board::parse_fen("8/8/8/8/8/8/8/8 w - e9 0 1").is_err());
    assert!(Board::parse_fen("8/8/8/8/8/8/8/8 w - - x 1").is_err());
    // Fullmove counter starts at one.
    assert!(Board::parse_fen("8/8/8/8/8/8/8/8 w - - 0 0").is_err());
}
