//! Move history: the sequential record of played half-moves, grouped into
//! full-move rows, that drives replay navigation and storage.
//!
//! Each recorded half-move carries the FEN snapshot of the position it
//! produced, so any historical position is an O(1) lookup rather than a
//! re-simulation. The serialized shape
//! `[{ moveNumber, white: {notation, fen}, black: {notation, fen} }, ..]`
//! is shared with the dashboard's storage layer and must round-trip with
//! field names and row order intact.
//!
//! Half-move indexing is canonical here: index 0 is the initial position,
//! White's m-th move is half-move `2m - 1` and Black's is `2m`, and valid
//! indices span `[0, total_half_moves()]`.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::coretypes::{Color, MoveCount};

/// One played half-move: its coordinate notation and the FEN of the
/// position it produced. Immutable once recorded.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub notation: String,
    pub fen: String,
}

/// One full-move row: White's half-move and, once played, Black's reply.
/// The last row of a history may have an empty black half mid-move.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRow {
    #[serde(rename = "moveNumber")]
    pub move_number: MoveCount,
    pub white: Option<MoveRecord>,
    pub black: Option<MoveRecord>,
}

/// Ordered, append-only sequence of full-move rows.
/// Past entries are never mutated; replay is free to read concurrently with
/// appends as long as it snapshots the current length first.
#[derive(Debug, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    rows: Vec<MoveRow>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded rows, in play order.
    pub fn rows(&self) -> &[MoveRow] {
        &self.rows
    }

    /// Append one half-move for `color`.
    /// A White half-move opens a new row; a Black half-move completes the
    /// last row (or opens one with an empty white half for histories that
    /// start mid-move).
    pub fn push(&mut self, color: Color, record: MoveRecord) {
        match color {
            Color::White => {
                let move_number = self.rows.len() as MoveCount + 1;
                self.rows.push(MoveRow {
                    move_number,
                    white: Some(record),
                    black: None,
                });
            }
            Color::Black => match self.rows.last_mut() {
                Some(row) if row.black.is_none() => row.black = Some(record),
                _ => {
                    let move_number = self.rows.len() as MoveCount + 1;
                    self.rows.push(MoveRow {
                        move_number,
                        white: None,
                        black: Some(record),
                    });
                }
            },
        }
    }

    /// Iterate the recorded half-moves in play order. A row missing its
    /// white half (a history that started mid-move, Black to play) yields
    /// its black record alone.
    pub fn records(&self) -> impl Iterator<Item = &MoveRecord> {
        self.rows
            .iter()
            .flat_map(|row| row.white.iter().chain(row.black.iter()))
    }

    /// The most recently recorded half-move, if any.
    pub fn last_record(&self) -> Option<&MoveRecord> {
        let row = self.rows.last()?;
        row.black.as_ref().or(row.white.as_ref())
    }

    /// Number of recorded half-moves. Valid navigation indices are
    /// `0..=total_half_moves()`, with 0 denoting the initial position.
    pub fn total_half_moves(&self) -> usize {
        self.records().count()
    }

    /// Returns true if `n` addresses a reachable position, the initial
    /// position included.
    pub fn in_bounds(&self, n: usize) -> bool {
        n <= self.total_half_moves()
    }

    /// Map a half-move index to its (full-move number, color) display slot,
    /// for histories whose first half-move is White's.
    /// Index 0 is the initial position and has no slot.
    pub fn half_move_to_row_and_color(n: usize) -> Option<(MoveCount, Color)> {
        if n == 0 {
            return None;
        }
        let move_number = ((n + 1) / 2) as MoveCount;
        let color = if n % 2 == 1 {
            Color::White
        } else {
            Color::Black
        };
        Some((move_number, color))
    }

    /// Inverse of [`half_move_to_row_and_color`](Self::half_move_to_row_and_color):
    /// White's m-th move is half-move `2m - 1`, Black's is `2m`.
    pub fn row_and_color_to_half_move(move_number: MoveCount, color: Color) -> usize {
        let full = move_number as usize * 2;
        match color {
            Color::White => full - 1,
            Color::Black => full,
        }
    }

    /// The record of half-move `n`, or None for 0 and out-of-range indices.
    /// Indexed by filled-slot order rather than the arithmetic display map,
    /// so a history whose first row holds only a black half still addresses
    /// every record.
    pub fn record_at(&self, n: usize) -> Option<&MoveRecord> {
        if n == 0 {
            return None;
        }
        self.records().nth(n - 1)
    }

    /// FEN snapshot of the position after half-move `n`; the standard start
    /// position for `n == 0`. O(1), no replay required: every half-move's
    /// resulting FEN was captured at recording time.
    pub fn position_at(&self, n: usize) -> Option<&str> {
        if n == 0 {
            return Some(Board::START_FEN);
        }
        self.record_at(n).map(|record| record.fen.as_str())
    }
}
