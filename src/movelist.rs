//! MoveList type used in the Gambit engine.

use arrayvec::ArrayVec;

use crate::coretypes::{Move, MAX_MOVES};

/// MoveList is a container that can hold at most `MAX_MOVES`, the most
/// number of moves possible in any chess position.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;
