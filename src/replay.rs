//! Replay cursor: bounds-checked navigation over a recorded move history.
//!
//! The cursor is per-viewer state with no shared-mutability concerns. It
//! holds a half-move index in `[0, total]` where 0 is the position before
//! any move; navigation outside that range is rejected outright, never
//! clamped, and leaves the current index unchanged.

use crate::board::Board;
use crate::error::{self, ErrorKind};
use crate::history::MoveHistory;

/// An interactive cursor over one [`MoveHistory`].
/// State is the current half-move index; transitions are [`step`](Self::step)
/// and [`jump_to`](Self::jump_to).
#[derive(Debug, Clone)]
pub struct ReplayCursor<'a> {
    history: &'a MoveHistory,
    start_fen: &'a str,
    current: usize,
}

impl<'a> ReplayCursor<'a> {
    /// Cursor positioned at the most recent position, for a "rejoin at
    /// latest" viewer.
    pub fn at_latest(history: &'a MoveHistory) -> Self {
        Self {
            history,
            start_fen: Board::START_FEN,
            current: history.total_half_moves(),
        }
    }

    /// Cursor positioned at the initial position, for a "replay from start"
    /// viewer.
    pub fn at_start(history: &'a MoveHistory) -> Self {
        Self {
            history,
            start_fen: Board::START_FEN,
            current: 0,
        }
    }

    /// Use `start_fen` as the position reported for index 0, for games that
    /// did not begin from the standard start position.
    pub fn with_start_fen(mut self, start_fen: &'a str) -> Self {
        self.start_fen = start_fen;
        self
    }

    /// Current half-move index, in `[0, total]`.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Upper navigation bound: the number of recorded half-moves.
    pub fn total(&self) -> usize {
        self.history.total_half_moves()
    }

    /// FEN of the position at the current index.
    /// `current` never leaves `[0, total]`, and every index past 0 addresses
    /// a recorded half-move, so the record lookup misses exactly at index 0.
    pub fn position(&self) -> &str {
        match self.history.record_at(self.current) {
            Some(record) => &record.fen,
            None => self.start_fen,
        }
    }

    /// Move the cursor by one half-move in either direction.
    /// A step that would leave `[0, total]` is rejected with `OutOfBounds`
    /// and the cursor stays put.
    pub fn step(&mut self, delta: isize) -> error::Result<&str> {
        let target = self.current as isize + delta;
        if target < 0 || target as usize > self.total() {
            return Err((
                ErrorKind::OutOfBounds,
                format!("step to {target} outside [0, {}]", self.total()),
            )
                .into());
        }
        self.current = target as usize;
        Ok(self.position())
    }

    /// Jump the cursor to an absolute half-move index.
    /// Requests outside `[0, total]` are rejected with `OutOfBounds` and the
    /// cursor stays put.
    pub fn jump_to(&mut self, n: usize) -> error::Result<&str> {
        if !self.history.in_bounds(n) {
            return Err((
                ErrorKind::OutOfBounds,
                format!("jump to {n} outside [0, {}]", self.total()),
            )
                .into());
        }
        self.current = n;
        Ok(self.position())
    }
}
