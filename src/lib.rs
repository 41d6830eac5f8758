pub mod board;
pub mod coretypes;
pub mod error;
pub mod fen;
pub mod game;
pub mod grid;
pub mod history;
pub(crate) mod movegen;
pub mod movelist;
pub mod perft;
pub mod replay;
pub mod squareset;

pub use board::Board;
pub use game::Game;
