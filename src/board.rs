//! Holds Board struct, the authoritative position state for a game.
//!
//! Board owns legality filtering and move application. Piece geometry comes
//! from [`movegen`]; the board layers king-safety simulation and
//! rights-aware castling injection on top of the raw candidate sets.

use std::fmt::{self, Display};

use crate::coretypes::{Castling, Color, Move, MoveCount, Piece, PieceKind, Square};
use crate::error::{self, ErrorKind};
use crate::fen::Fen;
use crate::grid::Grid;
use crate::movegen;
use crate::movelist::MoveList;
use crate::squareset::SquareSet;

/// struct Board
/// A complete data set that can represent any chess position.
/// # Members:
/// * grid - square-centric container of all piece placements.
/// * side_to_move - Color of player whose turn it is.
/// * castling - Castling rights for both players.
/// * en_passant - Indicates if en passant is possible, and for which square.
/// * halfmoves - Tracker for 50 move draw rule. Resets after capture/pawn move.
/// * fullmoves - Starts at 1, increments after each black player's move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling: Castling,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmoves: MoveCount,
    pub(crate) fullmoves: MoveCount,
}

/// Legal destinations for the piece on one square, as three disjoint sets.
/// `castles` marks destinations reached via castling, the annotation the UI
/// layer needs to render special moves distinctly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct LegalMoves {
    pub quiet: SquareSet,
    pub captures: SquareSet,
    pub castles: SquareSet,
}

impl LegalMoves {
    /// Union of every legal destination.
    pub fn all(&self) -> SquareSet {
        self.quiet | self.captures | self.castles
    }

    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty() && self.castles.is_empty()
    }
}

/// How an applied move changed the position, beyond relocating the piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveKind {
    /// No special moves or captures, simply moved to an empty square.
    Quiet,
    /// Move resulted in a capture of the given piece kind.
    Capture(PieceKind),
    /// This move was the special castling move.
    Castle,
    /// En passant capture of the pawn that just double-stepped.
    EnPassant,
}

impl Board {
    /// FEN string of the standard chess start position.
    pub const START_FEN: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Standard chess start position.
    pub fn start_position() -> Self {
        Self {
            grid: Grid::start_position(),
            side_to_move: Color::White,
            castling: Castling::start_position(),
            en_passant: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }

    /// Const getters.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn castling(&self) -> Castling {
        self.castling
    }
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }
    pub fn halfmoves(&self) -> MoveCount {
        self.halfmoves
    }
    pub fn fullmoves(&self) -> MoveCount {
        self.fullmoves
    }

    /// Returns true if the king of `color` is attacked by the other side.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.grid.king_of(color) {
            Some(king) => movegen::is_attacked(&self.grid, king, !color),
            None => false,
        }
    }

    /// Legal destinations for the piece occupying `square`.
    /// Candidate moves from the piece's own geometry are filtered by
    /// king-safety simulation; castling options are injected here by the
    /// board, not produced by the king's geometry. Empty if the square is
    /// unoccupied.
    pub fn legal_moves(&self, square: Square) -> LegalMoves {
        let Some(piece) = self.grid[square] else {
            return LegalMoves::default();
        };

        let candidates = movegen::candidates(&self.grid, square, piece, self.en_passant);
        let mut legal = LegalMoves {
            quiet: self.keeping_king_safe(square, piece, candidates.quiet),
            captures: self.keeping_king_safe(square, piece, candidates.captures),
            castles: SquareSet::EMPTY,
        };

        if piece.piece_kind() == PieceKind::King {
            legal.castles = self.castle_options(piece.color());
        }
        legal
    }

    /// Filter a candidate destination set down to moves that do not leave
    /// the mover's own king attacked.
    fn keeping_king_safe(&self, from: Square, piece: Piece, destinations: SquareSet) -> SquareSet {
        destinations
            .iter()
            .filter(|to| self.move_keeps_king_safe(from, *to, piece))
            .collect()
    }

    /// Simulate relocating `piece` from `from` to `to` on a scratch grid and
    /// report whether the mover's king ends up unattacked.
    fn move_keeps_king_safe(&self, from: Square, to: Square, piece: Piece) -> bool {
        let mut grid = self.grid;
        grid[from] = None;

        // An en-passant capture removes the bypassed pawn, not the piece on `to`.
        if piece.piece_kind() == PieceKind::Pawn && Some(to) == self.en_passant {
            if let Some(bypassed) = to.offset(0, -piece.color().pawn_direction()) {
                grid[bypassed] = None;
            }
        }
        grid[to] = Some(piece);

        match grid.king_of(piece.color()) {
            Some(king) => !movegen::is_attacked(&grid, king, !piece.color()),
            None => true,
        }
    }

    /// Castling destinations currently available to `color`'s king.
    /// A side is offered only while its right is intact, the king and rook
    /// stand on their home squares with nothing between them, and the king
    /// neither starts on, passes through, nor lands on an attacked square.
    fn castle_options(&self, color: Color) -> SquareSet {
        use Square::*;
        let mut options = SquareSet::EMPTY;
        let enemy = !color;

        let (king_home, king_rook, queen_rook) = match color {
            Color::White => (E1, H1, A1),
            Color::Black => (E8, H8, A8),
        };
        if self.grid.king_of(color) != Some(king_home) {
            return options;
        }

        let rook = Piece::new(color, PieceKind::Rook);

        if self.castling.has(Castling::king_side(color)) && self.grid[king_rook] == Some(rook) {
            let (transit, destination) = match color {
                Color::White => (F1, G1),
                Color::Black => (F8, G8),
            };
            let clear = self.grid[transit].is_none() && self.grid[destination].is_none();
            let safe_path = ![king_home, transit, destination]
                .iter()
                .any(|square| movegen::is_attacked(&self.grid, *square, enemy));
            if clear && safe_path {
                options.insert(destination);
            }
        }

        if self.castling.has(Castling::queen_side(color)) && self.grid[queen_rook] == Some(rook) {
            let (rook_transit, destination, transit) = match color {
                Color::White => (B1, C1, D1),
                Color::Black => (B8, C8, D8),
            };
            let clear = self.grid[rook_transit].is_none()
                && self.grid[destination].is_none()
                && self.grid[transit].is_none();
            let safe_path = ![king_home, transit, destination]
                .iter()
                .any(|square| movegen::is_attacked(&self.grid, *square, enemy));
            if clear && safe_path {
                options.insert(destination);
            }
        }
        options
    }

    /// Apply a move for the side to move, validating it fully first.
    /// Validation happens before any mutation, so a rejected move leaves the
    /// board untouched; no rollback is ever needed.
    ///
    /// Checked, in order: a piece of the moving side stands on `from`, the
    /// destination is in that piece's legal set, and a promotion kind is
    /// supplied exactly when a pawn reaches the last rank.
    pub fn apply_move(&mut self, move_: Move) -> error::Result<MoveKind> {
        let from = move_.from();
        let to = move_.to();

        let active_piece = match self.grid[from] {
            Some(piece) if piece.color() == self.side_to_move => piece,
            Some(_) => {
                return Err((ErrorKind::IllegalMove, "piece belongs to the other side").into())
            }
            None => return Err((ErrorKind::IllegalMove, "no piece on origin square").into()),
        };

        let legal = self.legal_moves(from);
        if !legal.all().contains(to) {
            return Err((
                ErrorKind::IllegalMove,
                format!("{to} is not a legal destination from {from}"),
            )
                .into());
        }

        let color = active_piece.color();
        let is_pawn = active_piece.piece_kind() == PieceKind::Pawn;
        let is_promotion = is_pawn && to.rank() == color.promotion_rank();
        match move_.promotion() {
            Some(kind) if is_promotion && kind.is_promotable() => {}
            Some(_) if is_promotion => {
                return Err((ErrorKind::IllegalMove, "kind is not promotable").into())
            }
            Some(_) => {
                return Err((ErrorKind::IllegalMove, "promotion kind on a non-promoting move").into())
            }
            None if is_promotion => {
                return Err((
                    ErrorKind::MissingPromotion,
                    format!("pawn reaches {} without a promotion kind", to.rank()),
                )
                    .into())
            }
            None => {}
        }

        // Move is proven legal. Mutation begins here.
        let is_en_passant = is_pawn && Some(to) == self.en_passant && self.grid[to].is_none();
        let is_castle = legal.castles.contains(to);
        let captured_kind = self.grid[to].map(|piece| piece.piece_kind());

        self.grid[from] = None;
        if is_en_passant {
            if let Some(bypassed) = to.offset(0, -color.pawn_direction()) {
                self.grid[bypassed] = None;
            }
        }
        self.grid[to] = match move_.promotion() {
            Some(kind) => Some(Piece::new(color, kind)),
            None => Some(active_piece),
        };
        if is_castle {
            self.relocate_castling_rook(to);
        }

        self.update_en_passant(&move_, active_piece);
        self.update_castling_rights(&move_, active_piece, captured_kind.is_some());
        self.update_move_counters(is_pawn, captured_kind.is_some() || is_en_passant);
        self.side_to_move = !self.side_to_move;

        Ok(if is_castle {
            MoveKind::Castle
        } else if is_en_passant {
            MoveKind::EnPassant
        } else if let Some(kind) = captured_kind {
            MoveKind::Capture(kind)
        } else {
            MoveKind::Quiet
        })
    }

    /// Move the rook that participates in a castle just applied to the king.
    /// castle_options already proved the rook stands on its home square.
    fn relocate_castling_rook(&mut self, king_to: Square) {
        use Square::*;
        let (rook_from, rook_to) = match king_to {
            G1 => (H1, F1),
            C1 => (A1, D1),
            G8 => (H8, F8),
            C8 => (A8, D8),
            _ => return,
        };
        self.grid[rook_to] = self.grid[rook_from];
        self.grid[rook_from] = None;
    }

    /// En Passant square is set to the square passed over, only immediately
    /// after a double pawn push. Any other move clears it.
    fn update_en_passant(&mut self, move_: &Move, active_piece: Piece) {
        let is_double_push = active_piece.piece_kind() == PieceKind::Pawn
            && (move_.to().rank_u8() as i8 - move_.from().rank_u8() as i8).abs() == 2;

        self.en_passant = if is_double_push {
            move_.from().offset(0, active_piece.color().pawn_direction())
        } else {
            None
        };
    }

    /// Castling rights are revoked permanently when a king or rook leaves
    /// its home square, or when anything captures onto a rook home square.
    fn update_castling_rights(&mut self, move_: &Move, active_piece: Piece, is_capture: bool) {
        use Square::*;
        match active_piece.piece_kind() {
            PieceKind::King => self.castling.clear_color(active_piece.color()),
            PieceKind::Rook => match move_.from() {
                H1 => self.castling.clear(Castling::W_KING),
                A1 => self.castling.clear(Castling::W_QUEEN),
                H8 => self.castling.clear(Castling::B_KING),
                A8 => self.castling.clear(Castling::B_QUEEN),
                _ => {}
            },
            _ => {}
        }

        if is_capture {
            match move_.to() {
                H1 => self.castling.clear(Castling::W_KING),
                A1 => self.castling.clear(Castling::W_QUEEN),
                H8 => self.castling.clear(Castling::B_KING),
                A8 => self.castling.clear(Castling::B_QUEEN),
                _ => {}
            }
        }
    }

    /// halfmoves is set to zero after a capture or pawn move, incremented
    /// otherwise. fullmoves is incremented after each Black player's move.
    fn update_move_counters(&mut self, is_pawn_move: bool, is_capture: bool) {
        if is_pawn_move || is_capture {
            self.halfmoves = 0;
        } else {
            self.halfmoves += 1;
        }

        if self.side_to_move == Color::Black {
            self.fullmoves += 1;
        }
    }

    /// Returns a list of every legal move for the side to move, with
    /// promotion moves expanded over the four promotable kinds.
    pub fn generate_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();

        for from in self.grid.occupied_by(self.side_to_move) {
            let Some(piece) = self.grid[from] else {
                continue;
            };
            let promotes = piece.piece_kind() == PieceKind::Pawn;

            for to in self.legal_moves(from).all() {
                if promotes && to.rank() == self.side_to_move.promotion_rank() {
                    for kind in PieceKind::iter().filter(PieceKind::is_promotable) {
                        moves.push(Move::new(from, to, Some(kind)));
                    }
                } else {
                    moves.push(Move::new(from, to, None));
                }
            }
        }
        moves
    }

    /// Returns true if `color` has at least one legal move anywhere.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.grid
            .occupied_by(color)
            .iter()
            .any(|square| !self.legal_moves(square).is_empty())
    }

    /// The side to move is checkmated: in check with no legal reply.
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_any_legal_move(self.side_to_move)
    }

    /// The side to move is stalemated: not in check, but has no legal move.
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_any_legal_move(self.side_to_move)
    }
}

/// Defaults to standard chess start position.
impl Default for Board {
    fn default() -> Self {
        Self::start_position()
    }
}

/// Displays pretty-printed chess board and FEN string representing Board.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n Fen: {}\n", self.grid, self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::Fen;
    use Color::*;
    use PieceKind::*;
    use Square::*;

    fn board(fen: &str) -> Board {
        Board::parse_fen(fen).unwrap()
    }

    #[test]
    fn start_position_legal_moves() {
        let board = Board::start_position();
        let pawn_moves = board.legal_moves(E2);
        assert!(pawn_moves.quiet.contains(E3));
        assert!(pawn_moves.quiet.contains(E4));
        assert!(pawn_moves.captures.is_empty());

        let king_moves = board.legal_moves(E1);
        assert!(king_moves.is_empty());

        assert_eq!(board.legal_moves(E4), LegalMoves::default());
    }

    #[test]
    fn apply_simple_pawn_push() {
        let mut board = Board::start_position();
        let kind = board.apply_move(Move::new(E2, E4, None)).unwrap();
        assert_eq!(kind, MoveKind::Quiet);
        assert_eq!(board.grid[E4], Some(Piece::new(White, Pawn)));
        assert_eq!(board.grid[E2], None);
        assert_eq!(board.side_to_move(), Black);
        assert_eq!(board.en_passant(), Some(E3));
        assert_eq!(board.halfmoves(), 0);
        assert_eq!(board.fullmoves(), 1);
    }

    #[test]
    fn illegal_moves_leave_board_untouched() {
        let mut board = Board::start_position();
        let before = board;

        // Knight to an unreachable square.
        let err = board.apply_move(Move::new(G1, G3, None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        // Empty origin square.
        let err = board.apply_move(Move::new(E4, E5, None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        // Black piece while White is to move.
        let err = board.apply_move(Move::new(E7, E5, None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);

        assert_eq!(board, before);
    }

    #[test]
    fn king_cannot_move_into_check() {
        let board = board("8/8/8/8/8/4r3/8/3K4 w - - 0 1");
        let moves = board.legal_moves(D1);
        // e1, e2 are covered by the rook on e3.
        assert!(!moves.all().contains(E1));
        assert!(!moves.all().contains(E2));
        assert!(moves.quiet.contains(C1));
        assert!(moves.quiet.contains(C2));
        assert!(moves.quiet.contains(D2));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        // Bishop on d2 is pinned by the rook on d8.
        let board = board("3r4/8/8/8/8/8/3B4/3K4 w - - 0 1");
        let moves = board.legal_moves(D2);
        assert!(moves.all().is_empty());
    }

    #[test]
    fn check_must_be_answered() {
        // White king on e1 checked by rook on e8; pawn push a2a3 is illegal.
        let mut board = board("4r3/8/8/8/8/8/P7/4K3 w - - 0 1");
        let err = board.apply_move(Move::new(A2, A3, None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        // Stepping out of the rook's file is legal.
        board.apply_move(Move::new(E1, D1, None)).unwrap();
    }

    #[test]
    fn capture_resets_halfmove_clock() {
        let mut board = board("4k3/8/8/3p4/8/3R4/8/4K3 w - - 7 20");
        let kind = board.apply_move(Move::new(D3, D5, None)).unwrap();
        assert_eq!(kind, MoveKind::Capture(Pawn));
        assert_eq!(board.halfmoves(), 0);
        assert_eq!(board.grid[D5], Some(Piece::new(White, Rook)));
    }

    #[test]
    fn promotion_requires_kind() {
        let mut board = board("8/P7/8/8/8/8/8/k2K4 w - - 0 1");
        let err = board.apply_move(Move::new(A7, A8, None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingPromotion);

        // A supplied kind that is not a valid promotion target was not
        // omitted; it is an illegal request.
        let err = board
            .apply_move(Move::new(A7, A8, Some(King)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);

        board.apply_move(Move::new(A7, A8, Some(Queen))).unwrap();
        assert_eq!(board.grid[A8], Some(Piece::new(White, Queen)));
    }

    #[test]
    fn promotion_kind_rejected_on_ordinary_move() {
        let mut board = Board::start_position();
        let err = board
            .apply_move(Move::new(E2, E4, Some(Queen)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
    }

    #[test]
    fn fullmove_increments_after_black() {
        let mut board = Board::start_position();
        board.apply_move(Move::new(E2, E4, None)).unwrap();
        assert_eq!(board.fullmoves(), 1);
        board.apply_move(Move::new(E7, E5, None)).unwrap();
        assert_eq!(board.fullmoves(), 2);
    }

    #[test]
    fn checkmate_and_stalemate() {
        // Fool's mate.
        let mate = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(mate.is_in_check(White));
        assert!(mate.is_checkmate());
        assert!(!mate.is_stalemate());

        // Classic king+queen stalemate.
        let stale = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!stale.is_in_check(Black));
        assert!(stale.is_stalemate());
        assert!(!stale.is_checkmate());
    }
}
