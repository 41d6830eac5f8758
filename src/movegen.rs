//! Pseudo-legal candidate move generation, per piece kind.
//!
//! Candidate generation is a pure read of the board grid: it applies each
//! piece kind's movement geometry and the basic occupancy rules, and ignores
//! whether the mover's own king is left in check. Legality filtering and
//! castling injection are layered on top by [`Board`](crate::board::Board),
//! never here, so rights logic is not re-derived per piece kind.

use crate::coretypes::{Color, Piece, PieceKind, Square};
use crate::grid::Grid;
use crate::squareset::SquareSet;

/// All 8 king step directions, as (file_delta, rank_delta).
const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// All 8 knight L-shaped jumps.
const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Orthogonal ray directions, for rooks and queens.
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions, for bishops and queens.
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Pseudo-legal candidate destinations for one piece, as two disjoint sets.
/// `quiet` destinations are empty squares, `captures` hold an enemy piece
/// (or are the en-passant target for a pawn).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Candidates {
    pub quiet: SquareSet,
    pub captures: SquareSet,
}

impl Candidates {
    /// Union of quiet and capture destinations.
    pub fn all(&self) -> SquareSet {
        self.quiet | self.captures
    }
}

/// Candidate moves of `piece` standing on `from`, switched on piece kind.
/// `en_passant` is the board's current en-passant target square, consumed
/// only by pawn geometry.
pub(crate) fn candidates(
    grid: &Grid,
    from: Square,
    piece: Piece,
    en_passant: Option<Square>,
) -> Candidates {
    match piece.piece_kind() {
        PieceKind::King => step_candidates(grid, from, piece.color(), &KING_STEPS),
        PieceKind::Knight => step_candidates(grid, from, piece.color(), &KNIGHT_STEPS),
        PieceKind::Rook => ray_candidates(grid, from, piece.color(), &ORTHOGONALS),
        PieceKind::Bishop => ray_candidates(grid, from, piece.color(), &DIAGONALS),
        PieceKind::Queen => {
            let ortho = ray_candidates(grid, from, piece.color(), &ORTHOGONALS);
            let diag = ray_candidates(grid, from, piece.color(), &DIAGONALS);
            Candidates {
                quiet: ortho.quiet | diag.quiet,
                captures: ortho.captures | diag.captures,
            }
        }
        PieceKind::Pawn => pawn_candidates(grid, from, piece.color(), en_passant),
    }
}

/// Fixed-offset movers: kings and knights.
/// A target square is a quiet move if unoccupied, a capture if occupied by
/// the opposite color, otherwise excluded.
fn step_candidates(grid: &Grid, from: Square, color: Color, steps: &[(i8, i8)]) -> Candidates {
    let mut candidates = Candidates::default();

    for &(file_delta, rank_delta) in steps {
        let Some(to) = from.offset(file_delta, rank_delta) else {
            continue;
        };
        match grid[to] {
            None => candidates.quiet.insert(to),
            Some(occupant) if occupant.color() != color => candidates.captures.insert(to),
            Some(_) => {}
        }
    }
    candidates
}

/// Sliding movers: rooks, bishops, and both halves of a queen.
/// Each ray extends until an occupied square or the board edge; the first
/// occupied square is included as a capture if it is the opposite color.
/// Own-color pieces block without being included.
fn ray_candidates(grid: &Grid, from: Square, color: Color, rays: &[(i8, i8)]) -> Candidates {
    let mut candidates = Candidates::default();

    for &(file_delta, rank_delta) in rays {
        let mut cursor = from;
        while let Some(to) = cursor.offset(file_delta, rank_delta) {
            match grid[to] {
                None => candidates.quiet.insert(to),
                Some(occupant) => {
                    if occupant.color() != color {
                        candidates.captures.insert(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
    candidates
}

/// Pawn geometry: single push, double push from the starting rank when both
/// squares are empty, and diagonal captures onto enemy pieces or the
/// en-passant target.
fn pawn_candidates(
    grid: &Grid,
    from: Square,
    color: Color,
    en_passant: Option<Square>,
) -> Candidates {
    let mut candidates = Candidates::default();
    let direction = color.pawn_direction();

    if let Some(forward) = from.offset(0, direction) {
        if grid[forward].is_none() {
            candidates.quiet.insert(forward);

            if from.rank() == color.pawn_start_rank() {
                if let Some(double) = forward.offset(0, direction) {
                    if grid[double].is_none() {
                        candidates.quiet.insert(double);
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        let Some(to) = from.offset(file_delta, direction) else {
            continue;
        };
        if grid.is_color_on(to, !color) || en_passant == Some(to) {
            candidates.captures.insert(to);
        }
    }
    candidates
}

/// Squares a pawn of `color` on `from` attacks, regardless of occupancy.
/// Distinct from its capture candidates, which require a capturable target:
/// an empty square a pawn bears on is still unsafe for the enemy king.
pub(crate) fn pawn_attacks(from: Square, color: Color) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    for file_delta in [-1, 1] {
        if let Some(to) = from.offset(file_delta, color.pawn_direction()) {
            attacks.insert(to);
        }
    }
    attacks
}

/// Returns true if `target` is attacked by any piece of color `by`.
/// Uses pseudo-legal capture geometry only; an attacker pinned to its own
/// king still gives check for the purposes of this query.
pub(crate) fn is_attacked(grid: &Grid, target: Square, by: Color) -> bool {
    for from in grid.occupied_by(by) {
        let Some(piece) = grid[from] else {
            continue;
        };
        let attacked = match piece.piece_kind() {
            PieceKind::Pawn => pawn_attacks(from, by),
            _ => candidates(grid, from, piece, None).all(),
        };
        if attacked.contains(target) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Piece;
    use Color::*;
    use PieceKind::*;
    use Square::*;

    fn lone(grid: &mut Grid, square: Square, color: Color, kind: PieceKind) -> Piece {
        let piece = Piece::new(color, kind);
        grid[square] = Some(piece);
        piece
    }

    #[test]
    fn king_steps_to_adjacent_squares() {
        let mut grid = Grid::new();
        let king = lone(&mut grid, E4, White, King);
        lone(&mut grid, E5, White, Pawn);
        lone(&mut grid, D3, Black, Knight);

        let cands = candidates(&grid, E4, king, None);
        assert_eq!(cands.quiet.len(), 6);
        assert!(!cands.all().contains(E5)); // own piece excluded
        assert_eq!(cands.captures, SquareSet::from(D3));
    }

    #[test]
    fn king_in_corner() {
        let mut grid = Grid::new();
        let king = lone(&mut grid, A1, White, King);
        let cands = candidates(&grid, A1, king, None);
        assert_eq!(cands.all().len(), 3);
        for square in [A2, B1, B2] {
            assert!(cands.quiet.contains(square));
        }
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let grid = Grid::start_position();
        let knight = grid[G1].unwrap();
        let cands = candidates(&grid, G1, knight, None);
        assert_eq!(cands.quiet.len(), 2);
        assert!(cands.quiet.contains(F3));
        assert!(cands.quiet.contains(H3));
        assert!(cands.captures.is_empty());
    }

    #[test]
    fn rook_rays_stop_at_blockers() {
        let mut grid = Grid::new();
        let rook = lone(&mut grid, D4, White, Rook);
        lone(&mut grid, D7, Black, Pawn);
        lone(&mut grid, F4, White, Bishop);

        let cands = candidates(&grid, D4, rook, None);
        // North: d5, d6 quiet, d7 capture. East: e4 quiet, f4 blocked by own.
        assert!(cands.quiet.contains(D6));
        assert!(cands.captures.contains(D7));
        assert!(!cands.all().contains(D8)); // beyond capture
        assert!(cands.quiet.contains(E4));
        assert!(!cands.all().contains(F4)); // own blocker excluded
        assert!(!cands.all().contains(G4)); // beyond own blocker
        assert_eq!(cands.captures.len(), 1);
    }

    #[test]
    fn bishop_and_queen_diagonals() {
        let mut grid = Grid::new();
        let bishop = lone(&mut grid, C1, White, Bishop);
        let cands = candidates(&grid, C1, bishop, None);
        assert_eq!(cands.quiet.len(), 7);
        assert!(cands.quiet.contains(H6));
        assert!(cands.quiet.contains(A3));

        let mut grid = Grid::new();
        let queen = lone(&mut grid, D4, White, Queen);
        let cands = candidates(&grid, D4, queen, None);
        // Empty board queen on d4 reaches 27 squares.
        assert_eq!(cands.quiet.len(), 27);
    }

    #[test]
    fn pawn_single_and_double_push() {
        let grid = Grid::start_position();
        let pawn = grid[E2].unwrap();
        let cands = candidates(&grid, E2, pawn, None);
        assert_eq!(cands.quiet.len(), 2);
        assert!(cands.quiet.contains(E3));
        assert!(cands.quiet.contains(E4));
        assert!(cands.captures.is_empty());

        // Double push requires both squares empty.
        let mut grid = Grid::start_position();
        grid[E4] = Some(Piece::new(Black, Knight));
        let cands = candidates(&grid, E2, pawn, None);
        assert_eq!(cands.quiet, SquareSet::from(E3));

        grid[E4] = None;
        grid[E3] = Some(Piece::new(Black, Knight));
        let cands = candidates(&grid, E2, pawn, None);
        assert!(cands.quiet.is_empty());
    }

    #[test]
    fn pawn_diagonal_captures_require_target() {
        let mut grid = Grid::new();
        let pawn = lone(&mut grid, D4, White, Pawn);
        lone(&mut grid, C5, Black, Rook);
        lone(&mut grid, E5, White, Rook);

        let cands = candidates(&grid, D4, pawn, None);
        assert_eq!(cands.captures, SquareSet::from(C5));
        assert!(cands.quiet.contains(D5));
    }

    #[test]
    fn pawn_en_passant_target_is_a_capture() {
        let mut grid = Grid::new();
        let pawn = lone(&mut grid, E5, White, Pawn);
        lone(&mut grid, D5, Black, Pawn);

        let without = candidates(&grid, E5, pawn, None);
        assert!(without.captures.is_empty());

        let with = candidates(&grid, E5, pawn, Some(D6));
        assert_eq!(with.captures, SquareSet::from(D6));
    }

    #[test]
    fn black_pawn_moves_down_board() {
        let grid = Grid::start_position();
        let pawn = grid[D7].unwrap();
        let cands = candidates(&grid, D7, pawn, None);
        assert!(cands.quiet.contains(D6));
        assert!(cands.quiet.contains(D5));
    }

    #[test]
    fn attack_map_includes_empty_pawn_diagonals() {
        let mut grid = Grid::new();
        lone(&mut grid, D4, White, Pawn);

        // Candidate captures need a target, but the squares are attacked.
        assert!(is_attacked(&grid, C5, White));
        assert!(is_attacked(&grid, E5, White));
        assert!(!is_attacked(&grid, D5, White));
    }

    #[test]
    fn attacks_through_pieces_blocked() {
        let mut grid = Grid::new();
        lone(&mut grid, A1, Black, Rook);
        lone(&mut grid, A4, White, Pawn);

        assert!(is_attacked(&grid, A3, Black));
        assert!(is_attacked(&grid, A4, Black));
        assert!(!is_attacked(&grid, A5, Black));
    }
}
