//! Gambit engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Gambit engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the Gambit engine.
/// Every variant is recoverable by the caller; none is fatal to the process.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A move was requested whose destination is not in the legal set,
    /// or there is no piece of the moving side on the origin square.
    IllegalMove,
    /// A pawn reached the last rank without a chosen promotion kind,
    /// or the chosen kind is not a valid promotion target.
    MissingPromotion,
    /// One of the six FEN fields failed structural validation.
    FenMalformed,
    /// A replay navigation request landed outside `[0, total]`.
    OutOfBounds,
    /// A recorded move history could not be re-applied to its base position.
    HistoryIllegalMove,

    /// Square parse string malformed.
    ParseSquareMalformed,
    /// File parse char malformed.
    ParseFileMalformed,
    /// Rank parse char malformed.
    ParseRankMalformed,
    /// Color parse char malformed.
    ParseColorMalformed,
    /// Piece parse char malformed.
    ParsePieceMalformed,
    /// Castling parse string malformed.
    ParseCastlingMalformed,
    /// Coordinate-notation move string malformed.
    ParseMoveMalformed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::IllegalMove => "illegal move",
            ErrorKind::MissingPromotion => "missing promotion kind",
            ErrorKind::FenMalformed => "fen malformed",
            ErrorKind::OutOfBounds => "replay index out of bounds",
            ErrorKind::HistoryIllegalMove => "move history illegal move",

            ErrorKind::ParseSquareMalformed => "parse square malformed",
            ErrorKind::ParseFileMalformed => "parse file malformed",
            ErrorKind::ParseRankMalformed => "parse rank malformed",
            ErrorKind::ParseColorMalformed => "parse color malformed",
            ErrorKind::ParsePieceMalformed => "parse piece malformed",
            ErrorKind::ParseCastlingMalformed => "parse castling malformed",
            ErrorKind::ParseMoveMalformed => "parse move malformed",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Gambit engine.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
}

impl Error {
    /// Returns the classifying kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) => *error_kind,
            Error::Message(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
