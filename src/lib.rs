//! 0x88 chess engine core.
//!
//! Position representation on a 0x88 board, legal move generation with
//! full Chess960 castling support, reversible make/undo, FEN/SAN/UCI
//! notation, and a small minimax / alpha-beta search with a material +
//! mobility evaluation.
//!
//! # Example
//! ```
//! use ox88::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.moves(false, true, false);
//! assert_eq!(moves.len(), 20);
//! ```

pub mod board;

pub use board::{
    an_to_square, clean_san, piece_from_char, square_to_an, ucify, Board, Color, FenError, Move,
    MoveRequest, MoveText, Piece, SearchMode, Square,
};
