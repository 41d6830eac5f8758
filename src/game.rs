//! Game structure: a Board paired with the MoveHistory it produces.
//!
//! Game is the surface the dashboard's request handlers talk to. A move
//! request enters as `(from, to, optional promotion)`; Game validates and
//! applies it on the board and appends the resulting half-move record, so
//! the history grows by exactly one entry per successful move. Each game is
//! an independent value with no shared state; callers serialize moves per
//! game by owning it exclusively.

use crate::board::{Board, LegalMoves};
use crate::coretypes::{Color, Move, PieceKind, Square};
use crate::error::{self, ErrorKind};
use crate::fen::Fen;
use crate::history::{MoveHistory, MoveRecord};
use crate::replay::ReplayCursor;

/// Outcome classification for a finished or in-progress game, matching the
/// status values the dashboard stores per game row.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameStatus {
    Underway,
    WhiteWin,
    BlackWin,
    Draw,
}

/// Game contains information for an in-progress game: the position the game
/// started from, the sequence of half-moves played, and the current board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    base_fen: String,
    board: Board,
    history: MoveHistory,
}

impl Game {
    /// Create a new game in the standard chess start position.
    pub fn new() -> Self {
        Self {
            base_fen: Board::START_FEN.to_string(),
            board: Board::start_position(),
            history: MoveHistory::new(),
        }
    }

    /// Create a game from an arbitrary base position.
    pub fn from_fen(fen: &str) -> error::Result<Self> {
        let board = Board::parse_fen(fen)?;
        Ok(Self {
            base_fen: board.to_fen(),
            board,
            history: MoveHistory::new(),
        })
    }

    /// Rebuild a game from a recorded move history, re-validating every
    /// half-move against the rules from the standard start position.
    pub fn from_history(history: MoveHistory) -> error::Result<Self> {
        Self::from_history_with_base(Board::START_FEN, history)
    }

    /// Rebuild a game whose history was recorded from an arbitrary base
    /// position. Err if the base FEN is malformed, any recorded move is
    /// illegal, or a FEN snapshot does not match the position it claims to
    /// produce.
    pub fn from_history_with_base(base_fen: &str, history: MoveHistory) -> error::Result<Self> {
        let mut board = Board::parse_fen(base_fen)?;
        let base_fen = board.to_fen();

        for record in history.records() {
            let move_: Move = record
                .notation
                .parse()
                .map_err(|_| (ErrorKind::HistoryIllegalMove, "unparseable notation"))?;
            board
                .apply_move(move_)
                .map_err(|_| (ErrorKind::HistoryIllegalMove, record.notation.clone()))?;
            if board.to_fen() != record.fen {
                return Err((
                    ErrorKind::HistoryIllegalMove,
                    format!("snapshot mismatch after {}", record.notation),
                )
                    .into());
            }
        }

        Ok(Self {
            base_fen,
            board,
            history,
        })
    }

    // Const getters.
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
    pub fn base_fen(&self) -> &str {
        &self.base_fen
    }

    /// Legal destinations for the piece on `square`, for the UI layer.
    pub fn legal_moves(&self, square: Square) -> LegalMoves {
        self.board.legal_moves(square)
    }

    /// Validate and apply one half-move, recording it in the history.
    /// On success the history holds exactly one more half-move; on failure
    /// neither board nor history changes. The applied move's record is
    /// returned directly; nothing can fail once the board has mutated.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> error::Result<MoveRecord> {
        let color = self.board.side_to_move();
        let move_ = Move::new(from, to, promotion);
        self.board.apply_move(move_)?;

        let record = MoveRecord {
            notation: move_.to_string(),
            fen: self.board.to_fen(),
        };
        self.history.push(color, record.clone());
        Ok(record)
    }

    /// Replay cursor over this game's history, positioned at the most
    /// recent half-move.
    pub fn replay(&self) -> ReplayCursor<'_> {
        ReplayCursor::at_latest(&self.history).with_start_fen(&self.base_fen)
    }

    /// Replay cursor positioned before the first half-move.
    pub fn replay_from_start(&self) -> ReplayCursor<'_> {
        ReplayCursor::at_start(&self.history).with_start_fen(&self.base_fen)
    }

    /// Current game status: checkmate resolves to a win for the side that
    /// delivered it, stalemate to a draw, anything else is underway.
    pub fn status(&self) -> GameStatus {
        if self.board.is_checkmate() {
            match self.board.side_to_move() {
                Color::White => GameStatus::BlackWin,
                Color::Black => GameStatus::WhiteWin,
            }
        } else if self.board.is_stalemate() {
            GameStatus::Draw
        } else {
            GameStatus::Underway
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
