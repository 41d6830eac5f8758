//! A [mailbox](https://www.chessprogramming.org/Mailbox) is a square-centric
//! representation of a chess board.
//!
//! The grid is an array of size Files x Ranks where each index may contain a
//! chess piece or be empty. It is the exclusive owner of every live piece:
//! capturing a piece removes it from the grid, and no two pieces can ever
//! occupy one square because a square holds at most one `Piece`.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::coretypes::{Color, Piece, PieceKind, Square, NUM_FILES, NUM_RANKS, NUM_SQUARES};
use crate::squareset::SquareSet;

/// Classic 8x8 square board representation of a chess board.
/// Grid is square-centric, meaning it indexes by square to get a piece.
/// Index starts at A1.
/// A1 = idx 0
/// B1 = idx 1
/// A2 = idx 8
/// H8 = idx 63
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Grid {
    board: [Option<Piece>; NUM_SQUARES],
}

impl Grid {
    /// Creates an empty Grid, where all squares are None.
    pub const fn new() -> Self {
        Grid {
            board: [None; NUM_SQUARES],
        }
    }

    /// Create Grid with pieces arranged in starting chess position.
    pub fn start_position() -> Self {
        use Color::*;
        use PieceKind::*;
        use Square::*;
        let mut grid = Self::new();

        grid[A1] = Some(Piece::new(White, Rook));
        grid[B1] = Some(Piece::new(White, Knight));
        grid[C1] = Some(Piece::new(White, Bishop));
        grid[D1] = Some(Piece::new(White, Queen));
        grid[E1] = Some(Piece::new(White, King));
        grid[F1] = Some(Piece::new(White, Bishop));
        grid[G1] = Some(Piece::new(White, Knight));
        grid[H1] = Some(Piece::new(White, Rook));
        for square in [A2, B2, C2, D2, E2, F2, G2, H2] {
            grid[square] = Some(Piece::new(White, Pawn));
        }
        grid[A8] = Some(Piece::new(Black, Rook));
        grid[B8] = Some(Piece::new(Black, Knight));
        grid[C8] = Some(Piece::new(Black, Bishop));
        grid[D8] = Some(Piece::new(Black, Queen));
        grid[E8] = Some(Piece::new(Black, King));
        grid[F8] = Some(Piece::new(Black, Bishop));
        grid[G8] = Some(Piece::new(Black, Knight));
        grid[H8] = Some(Piece::new(Black, Rook));
        for square in [A7, B7, C7, D7, E7, F7, G7, H7] {
            grid[square] = Some(Piece::new(Black, Pawn));
        }

        grid
    }

    /// Set of all occupied squares.
    pub fn occupied(&self) -> SquareSet {
        Square::iter()
            .filter(|square| self[*square].is_some())
            .collect()
    }

    /// Set of squares occupied by pieces of one color.
    pub fn occupied_by(&self, color: Color) -> SquareSet {
        Square::iter()
            .filter(|square| matches!(self[*square], Some(piece) if piece.color() == color))
            .collect()
    }

    /// Returns true if square holds a piece of the given color.
    pub fn is_color_on(&self, square: Square, color: Color) -> bool {
        matches!(self[square], Some(piece) if piece.color() == color)
    }

    /// Square of the king of a color. None only for positions mid-edit;
    /// any position built from a start position or valid FEN has both kings.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        Square::iter().find(|square| {
            matches!(
                self[*square],
                Some(piece) if piece.color() == color && piece.piece_kind() == PieceKind::King
            )
        })
    }

    /// Returns pretty-printed chess board representation of Self.
    /// The chess board has borders and file/rank indicators.
    pub fn pretty(&self) -> String {
        const RANK_SEP: &str = "+---+---+---+---+---+---+---+---+\n";
        let mut pretty = String::with_capacity(626);

        pretty.push_str(RANK_SEP);
        for rank in (0..NUM_RANKS as u8).rev() {
            pretty.push_str("| ");

            for file in 0..NUM_FILES as u8 {
                let square = Square::from_u8(rank * NUM_FILES as u8 + file).unwrap();
                pretty.push(match self[square] {
                    Some(piece) => char::from(piece),
                    None => ' ',
                });
                pretty.push_str(" | ");
            }
            pretty.push_str(&(rank + 1).to_string());
            pretty.push('\n');
            pretty.push_str(RANK_SEP);
        }
        pretty.push_str("  a   b   c   d   e   f   g   h\n");

        pretty
    }
}

impl Index<Square> for Grid {
    type Output = Option<Piece>;
    fn index(&self, square: Square) -> &Self::Output {
        &self.board[square.idx()]
    }
}

impl IndexMut<Square> for Grid {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.board[square.idx()]
    }
}

/// Default value is that of a standard starting chess position.
impl Default for Grid {
    fn default() -> Self {
        Grid::start_position()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
