//! Error types for board operations.

use std::fmt;

/// Error type for FEN parsing failures.
///
/// Parsing is deliberately forgiving: castling letters that do not match
/// the board are repaired rather than rejected, and missing clock fields
/// default to zero. Only input that cannot describe a position at all is
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Empty (or whitespace-only) input
    Empty,
    /// Unknown character in the piece placement field
    BadPiece { ch: char },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::BadPiece { ch } => {
                write!(f, "Invalid piece character '{ch}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}
