//! UCI move notation.

use super::types::{an_to_square, piece_from_char, Move, MoveRequest, MoveText, Piece};
use super::Board;

/// Render a move as UCI text ("c2c4", "a7a8q") and store it in the
/// move's text slot.
pub fn ucify(mv: &mut Move) -> String {
    mv.san = mv.to_string();
    mv.san.clone()
}

impl Board {
    /// Parse a 4-or-5 character UCI move ("c2c4", "a7a8q") against the
    /// current position and play it. Returns the null-move sentinel when
    /// the text does not name a legal move.
    pub fn move_uci(&mut self, text: &str, frc: bool, decorate: bool) -> Move {
        if text.len() < 4 || !text.is_ascii() {
            return Move::null();
        }
        let (Some(from), Some(to)) = (an_to_square(&text[..2]), an_to_square(&text[2..4])) else {
            return Move::null();
        };
        let promote = text.chars().nth(4).map_or(Piece::NONE, piece_from_char);
        self.move_object(&MoveRequest { from, to, promote }, frc, decorate)
    }

    /// Find the legal move matching a (from, to, promote) request and
    /// play it.
    ///
    /// For Chess960, a king move is recognized as castling both as "king
    /// moves two squares" and as "king captures its own rook", so either
    /// convention is accepted on input. The matched move gets its SAN
    /// attached before being played.
    pub fn move_object(&mut self, request: &MoveRequest, frc: bool, decorate: bool) -> Move {
        let moves = self.moves(frc, true, false);
        let us = self.turn;

        let mut castle_flags = 0;
        if frc && Some(request.from) == self.kings[us.index()] {
            let from = request.from.index() as i32;
            let to = request.to.index() as i32;
            if Some(request.to) == self.castling[us.index() * 2] || to == from + 2 {
                castle_flags = Move::KSIDE_CASTLE;
            } else if Some(request.to) == self.castling[us.index() * 2 + 1] || to == from - 2 {
                castle_flags = Move::QSIDE_CASTLE;
            }
        }

        let mut found = Move::null();
        if castle_flags != 0 {
            for mv in &moves {
                if mv.flags & castle_flags != 0 {
                    found = mv.clone();
                    found.san = self.move_to_san(mv, &moves);
                    break;
                }
            }
        } else {
            for mv in &moves {
                if request.from == mv.from
                    && request.to == mv.to
                    && (mv.promote == 0 || request.promote.kind() == mv.promote)
                {
                    found = mv.clone();
                    found.san = self.move_to_san(mv, &moves);
                    break;
                }
            }
        }

        if !found.is_null() {
            self.move_raw(&found);
            if decorate {
                self.decorate_move(&mut found);
            }
        }
        found
    }

    /// Play a whitespace-separated sequence of UCI moves, skipping
    /// tokens that do not start with a letter and silently dropping
    /// unmatched moves. Each played move carries its SAN, post-move FEN
    /// and ply.
    pub fn multi_uci(&mut self, multi: &str, frc: bool) -> Vec<MoveText> {
        let mut result = Vec::new();
        for token in multi.split_whitespace() {
            let Some(first) = token.chars().next() else {
                continue;
            };
            if first < 'A' {
                continue;
            }
            let mv = self.move_uci(token, frc, true);
            if !mv.is_null() {
                let fen = self.fen();
                result.push(MoveText {
                    mv,
                    fen,
                    ply: self.ply,
                    score: 0.0,
                });
            }
        }
        result
    }
}
