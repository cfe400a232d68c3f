//! Chess board representation and game logic on a 0x88 board.
//!
//! A square is a 7-bit index where `square & 0x88 != 0` is off the board;
//! a piece is a 4-bit nibble (type in the low 3 bits, color in bit 3).
//! Castling rights are stored as rook squares rather than flags, which
//! makes orthodox chess and Chess960 a single code path.
//!
//! # Example
//! ```
//! use ox88::board::Board;
//!
//! let mut board = Board::new();
//! let mv = board.move_san("e4", false, false, false);
//! assert!(!mv.is_null());
//! ```

mod config;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod san;
mod search;
mod state;
mod tables;
mod types;
mod uci;

#[cfg(test)]
mod tests;

pub use config::{
    SearchMode, EVAL_MATERIAL, EVAL_MOBILITY, EVAL_NEURAL, EVAL_NULL, EVAL_QUIESCENCE,
};
pub use error::FenError;
pub use fen::DEFAULT_POSITION;
pub use san::clean_san;
pub use state::Board;
pub use types::{
    an_to_square, piece_from_char, square_to_an, Color, Move, MoveRequest, MoveText, Piece, Square,
    BISHOP, KING, KNIGHT, PAWN, QUEEN, ROOK,
};
pub use uci::ucify;
