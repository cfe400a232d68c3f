//! Applying and taking back moves.

use super::tables::{PIECE_SCORES, PROMOTE_SCORES};
use super::types::{Color, Move, Piece, Square, KING, PAWN, ROOK};
use super::Board;

impl Board {
    /// Apply a move without any legality check.
    ///
    /// This is the unchecked fast path used by the legality filter and
    /// the search; passing a move that is not pseudo-legal for the
    /// current position leaves the board in an undefined state. External
    /// callers should go through [`Board::move_san`], [`Board::move_uci`]
    /// or [`Board::move_object`] instead.
    pub fn move_raw(&mut self, mv: &Move) {
        let us = self.turn;
        let them = us.opponent();

        self.push_state(mv);

        let is_castle = mv.flags & Move::CASTLE != 0;
        let mut move_to = mv.to.index() as i32;
        let move_from = mv.from.index() as i32;

        self.half_moves += 1;
        self.ep_square = None;

        if mv.piece.kind() == KING {
            if is_castle {
                let q = i32::from(mv.flags & Move::QSIDE_CASTLE != 0);
                if let (Some(king), Some(rook)) = (
                    self.kings[us.index()],
                    self.castling[us.index() * 2 + q as usize],
                ) {
                    let king_i = king.index() as i32;
                    let king_to = ((king_i >> 4) << 4) + 6 - (q << 2);

                    self.board[king.index()] = Piece::NONE;
                    self.board[rook.index()] = Piece::NONE;
                    self.board[king_to as usize] = Piece::new(us, KING);
                    self.board[(king_to - 1 + (q << 1)) as usize] = Piece::new(us, ROOK);
                    move_to = king_to;
                }
            }

            self.kings[us.index()] = Square::from_0x88(move_to);
            self.castling[us.index() * 2] = None;
            self.castling[us.index() * 2 + 1] = None;
        }

        if !is_castle {
            if move_from != move_to {
                self.board[move_to as usize] = self.board[move_from as usize];
                self.board[move_from as usize] = Piece::NONE;
            }

            if mv.capture != 0 {
                self.materials[them.index()] -= PIECE_SCORES[mv.capture as usize];
                // a capture on a castling rook square takes the right with it
                if mv.capture == ROOK {
                    if Some(mv.to) == self.castling[them.index() * 2] {
                        self.castling[them.index() * 2] = None;
                    } else if Some(mv.to) == self.castling[them.index() * 2 + 1] {
                        self.castling[them.index() * 2 + 1] = None;
                    }
                }
                self.half_moves = 0;
            }

            if mv.piece.kind() == ROOK {
                if Some(mv.from) == self.castling[us.index() * 2] {
                    self.castling[us.index() * 2] = None;
                } else if Some(mv.from) == self.castling[us.index() * 2 + 1] {
                    self.castling[us.index() * 2 + 1] = None;
                }
            } else if mv.piece.kind() == PAWN {
                if mv.flags & Move::BIG_PAWN != 0 {
                    // the square behind the pawn becomes the ep target
                    self.ep_square = Square::from_0x88(move_to + 16 - ((us.index() as i32) << 5));
                } else {
                    if mv.flags & Move::EP_CAPTURE != 0 {
                        self.board[(move_to + 16 - ((us.index() as i32) << 5)) as usize] =
                            Piece::NONE;
                    }
                    if mv.flags & Move::PROMOTION != 0 {
                        self.board[move_to as usize] = Piece::new(us, mv.promote);
                        self.materials[us.index()] += PROMOTE_SCORES[mv.promote as usize];
                    }
                }
                self.half_moves = 0;
            }
        }

        self.ply += 1;
        if self.turn == Color::Black {
            self.move_number += 1;
        }
        self.turn = them;
    }

    /// Take back the last move, restoring every scalar exactly.
    pub fn undo_move(&mut self) {
        if self.ply < 0 {
            return;
        }
        let Some(state) = self.ply_states.get(self.ply as usize) else {
            return;
        };
        let state = state.clone();

        self.castling = state.castling;
        self.ep_square = state.ep_square;
        self.half_moves = state.half_moves;
        self.kings = state.kings;
        let mv = state.mv;

        self.turn = self.turn.opponent();
        if self.turn == Color::Black {
            self.move_number -= 1;
        }
        self.ply -= 1;

        let us = self.turn;
        let them = us.opponent();

        if mv.flags & Move::CASTLE != 0 {
            let q = i32::from(mv.flags & Move::QSIDE_CASTLE != 0);
            if let (Some(king), Some(rook)) = (
                self.kings[us.index()],
                self.castling[us.index() * 2 + q as usize],
            ) {
                let king_i = king.index() as i32;
                let king_to = ((king_i >> 4) << 4) + 6 - (q << 2);

                self.board[king_to as usize] = Piece::NONE;
                self.board[(king_to - 1 + (q << 1)) as usize] = Piece::NONE;
                self.board[king.index()] = Piece::new(us, KING);
                self.board[rook.index()] = Piece::new(us, ROOK);
            }
        } else {
            if mv.from != mv.to {
                self.board[mv.from.index()] = mv.piece;
                self.board[mv.to.index()] = Piece::NONE;
            }

            if mv.flags & Move::CAPTURE != 0 {
                self.board[mv.to.index()] = Piece::new(them, mv.capture);
                self.materials[them.index()] += PIECE_SCORES[mv.capture as usize];
            } else if mv.flags & Move::EP_CAPTURE != 0 {
                let behind = mv.to.index() as i32 + 16 - ((us.index() as i32) << 5);
                self.board[behind as usize] = Piece::new(them, PAWN);
                self.materials[them.index()] += PIECE_SCORES[PAWN as usize];
            }
            if mv.promote != 0 {
                self.materials[us.index()] -= PROMOTE_SCORES[mv.promote as usize];
            }
        }
    }
}
