//! FEN parsing and serialization for [`Board`].
//!
//! Forsyth-Edwards Notation is the storage and transport representation of a
//! position: six space-separated fields covering piece placement, side to
//! move, castling rights, en-passant target, halfmove clock and fullmove
//! number. `parse_fen` and `to_fen` are exact inverses for any valid Board.

use std::convert::TryFrom;

use crate::board::Board;
use crate::coretypes::{Castling, Color, MoveCount, Piece, Square, NUM_FILES, NUM_RANKS};
use crate::error::{self, ErrorKind};
use crate::grid::Grid;

/// Conversion between a type and its FEN string form.
pub trait Fen: Sized {
    /// Parse a full six-field FEN string.
    /// Fails with `FenMalformed` on any field that does not parse to a
    /// valid value.
    fn parse_fen(s: &str) -> error::Result<Self>;

    /// Serialize to a FEN string. The output always parses back to an
    /// equal value.
    fn to_fen(&self) -> String;
}

impl Fen for Board {
    fn parse_fen(s: &str) -> error::Result<Self> {
        let mut fields = s.split_whitespace();

        let placement = fields
            .next()
            .ok_or((ErrorKind::FenMalformed, "missing piece placement"))?;
        let side = fields
            .next()
            .ok_or((ErrorKind::FenMalformed, "missing side to move"))?;
        let castling = fields
            .next()
            .ok_or((ErrorKind::FenMalformed, "missing castling rights"))?;
        let en_passant = fields
            .next()
            .ok_or((ErrorKind::FenMalformed, "missing en-passant target"))?;
        let halfmoves = fields
            .next()
            .ok_or((ErrorKind::FenMalformed, "missing halfmove clock"))?;
        let fullmoves = fields
            .next()
            .ok_or((ErrorKind::FenMalformed, "missing fullmove number"))?;

        if fields.next().is_some() {
            return Err((ErrorKind::FenMalformed, "trailing fields").into());
        }

        let grid = parse_placement(placement)?;

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err((ErrorKind::FenMalformed, "side to move is not w|b").into()),
        };

        let castling: Castling = castling
            .parse()
            .map_err(|_| (ErrorKind::FenMalformed, "bad castling rights field"))?;

        let en_passant: Option<Square> = match en_passant {
            "-" => None,
            square => Some(
                square
                    .parse()
                    .map_err(|_| (ErrorKind::FenMalformed, "bad en-passant square"))?,
            ),
        };

        let halfmoves: MoveCount = halfmoves
            .parse()
            .map_err(|_| (ErrorKind::FenMalformed, "bad halfmove clock"))?;
        let fullmoves: MoveCount = fullmoves
            .parse()
            .map_err(|_| (ErrorKind::FenMalformed, "bad fullmove number"))?;
        if fullmoves == 0 {
            return Err((ErrorKind::FenMalformed, "fullmove number starts at 1").into());
        }

        Ok(Board {
            grid,
            side_to_move,
            castling,
            en_passant,
            halfmoves,
            fullmoves,
        })
    }

    fn to_fen(&self) -> String {
        let placement = serialize_placement(self.grid());

        let en_passant = match self.en_passant() {
            Some(square) => square.to_string(),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} {}",
            placement,
            self.side_to_move(),
            self.castling(),
            en_passant,
            self.halfmoves(),
            self.fullmoves(),
        )
    }
}

/// Piece placement ::= 8 '/'-separated ranks, rank 8 first. Digits
/// run-length-encode empty squares; letters are piece kind with case = color.
fn parse_placement(placement: &str) -> error::Result<Grid> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != NUM_RANKS {
        return Err((ErrorKind::FenMalformed, "placement must have 8 ranks").into());
    }

    let mut grid = Grid::new();
    for (fen_row, rank_str) in ranks.iter().enumerate() {
        let rank = (NUM_RANKS - 1 - fen_row) as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(digit) = ch.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err((ErrorKind::FenMalformed, "empty-square count not 1-8").into());
                }
                file += digit as u8;
                continue;
            }

            if file >= NUM_FILES as u8 {
                return Err((ErrorKind::FenMalformed, "rank has too many files").into());
            }
            let piece = Piece::try_from(ch)
                .map_err(|_| (ErrorKind::FenMalformed, "unknown piece letter"))?;
            let square = Square::from_u8(rank * NUM_FILES as u8 + file)
                .ok_or((ErrorKind::FenMalformed, "rank has too many files"))?;
            grid[square] = Some(piece);
            file += 1;
        }

        if file != NUM_FILES as u8 {
            return Err((ErrorKind::FenMalformed, "rank does not sum to 8 files").into());
        }
    }
    Ok(grid)
}

fn serialize_placement(grid: &Grid) -> String {
    let mut out = String::with_capacity(71);

    for rank in (0..NUM_RANKS as u8).rev() {
        let mut empty_run = 0u8;

        for file in 0..NUM_FILES as u8 {
            let square = Square::from_u8(rank * NUM_FILES as u8 + file).unwrap();
            match grid[square] {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(char::from(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}
