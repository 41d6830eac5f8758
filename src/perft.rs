//! Performance Test
//!
//! [Perft](https://www.chessprogramming.org/Perft)
//!
//! Counts the number of move paths of a given length from a position.
//! The counts for well-known positions are published, which makes perft
//! the standard correctness check for move generation and legality
//! filtering, including the castling and en passant rules.

use crate::board::Board;
use crate::coretypes::MoveCount;

/// Count the number of paths to positions at exactly `ply` half moves
/// from `board`. Terminal positions above the target depth contribute
/// nothing.
pub fn perft(board: Board, ply: MoveCount) -> u64 {
    if ply == 0 {
        // Ever only 1 position at 0 ply.
        return 1;
    }
    perft_recurse(board, ply)
}

/// Ply must be non-zero.
fn perft_recurse(board: Board, ply: MoveCount) -> u64 {
    debug_assert_ne!(ply, 0);
    let legal_moves = board.generate_legal_moves();

    if ply == 1 {
        return legal_moves.len() as u64;
    }

    let mut nodes = 0;
    for legal_move in legal_moves {
        let mut child = board;
        if child.apply_move(legal_move).is_ok() {
            nodes += perft_recurse(child, ply - 1);
        }
    }
    nodes
}
