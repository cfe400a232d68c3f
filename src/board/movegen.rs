//! Attack oracle and pseudo-legal move generation.

use super::tables::{ATTACKS, ATTACK_BITS, PAWN_OFFSETS, PIECE_OFFSETS, RAYS};
use super::types::{Color, Move, Piece, Square, KING, KNIGHT, PAWN, QUEEN};
use super::{Board, SearchMode};

impl Board {
    /// True if any piece of `color` attacks `square`.
    #[must_use]
    pub fn attacked(&self, color: Color, square: Square) -> bool {
        let target = square.index() as i32;
        for from in Square::all() {
            let piece = self.board[from.index()];
            if piece.is_none() || piece.color() != color {
                continue;
            }

            let diff = from.index() as i32 - target;
            let index = (diff + 119) as usize;
            let kind = piece.kind();
            if ATTACKS[index] & ATTACK_BITS[kind as usize] == 0 {
                continue;
            }

            match kind {
                KING | KNIGHT => return true,
                PAWN => {
                    // the pawn bit covers both colors; the sign of the
                    // difference tells which one actually attacks
                    if diff > 0 {
                        if color == Color::White {
                            return true;
                        }
                    } else if color == Color::Black {
                        return true;
                    }
                }
                _ => {
                    let offset = RAYS[index];
                    let mut between = from.index() as i32 + offset;
                    let mut blocked = false;
                    while between != target {
                        if !self.board[between as usize].is_none() {
                            blocked = true;
                            break;
                        }
                        between += offset;
                    }
                    if !blocked {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Is a king in check? `color` 0/1 names a side directly; 2 means the
    /// side to move, 3 the side that just moved.
    #[must_use]
    pub fn checked(&self, color: u8) -> bool {
        self.king_attacked(color)
    }

    pub(crate) fn king_attacked(&self, color: u8) -> bool {
        let color = match color {
            2 => self.turn,
            3 => self.turn.opponent(),
            direct => Color::from_index(direct),
        };
        match self.kings[color.index()] {
            Some(king) => self.attacked(color.opponent(), king),
            None => false,
        }
    }

    /// Generate moves for the side to move.
    ///
    /// With `legal` unset the result is pseudo-legal (may leave the own
    /// king in check); with it set each move is vetted by make/test/undo.
    /// `only_capture` drops quiet moves (castling included). `frc`
    /// selects the Chess960 castling encoding: the emitted `to` square is
    /// the rook square whenever the geometry is not the orthodox
    /// king-on-e-file, rook-on-a/h-file arrangement.
    ///
    /// As a side effect the mobility counters of the side to move are
    /// recomputed, which is what the mobility evaluation reads.
    pub fn moves(&mut self, frc: bool, legal: bool, only_capture: bool) -> Vec<Move> {
        let us = self.turn;
        let them = us.opponent();
        let second_rank = 6 - us.index() as i32 * 5;
        let us8 = us.index() << 3;
        for mobility in &mut self.mobilities[us8..us8 + 8] {
            *mobility = 0;
        }

        let ep_target = self.ep_square.map(|sq| sq.index() as i32);
        let mut moves = Vec::new();

        for from in Square::all() {
            let piece = self.board[from.index()];
            if piece.is_none() || piece.color() != us {
                continue;
            }
            let i = from.index() as i32;

            if piece.kind() == PAWN {
                let offsets = PAWN_OFFSETS[us.index()];

                // single and double push, non-capturing
                if !only_capture {
                    let to = i + offsets[0];
                    if to & 0x88 == 0 && self.board[to as usize].is_none() {
                        self.add_move(&mut moves, piece, i, to, Move::NORMAL);

                        let to = i + offsets[1];
                        if second_rank == i >> 4 && self.board[to as usize].is_none() {
                            self.add_move(&mut moves, piece, i, to, Move::BIG_PAWN);
                        }
                    }
                }

                for offset in &offsets[2..] {
                    let to = i + offset;
                    if to & 0x88 != 0 {
                        continue;
                    }
                    let target = self.board[to as usize];
                    if !target.is_none() && target.color() == them {
                        self.add_move(&mut moves, piece, i, to, Move::CAPTURE);
                    } else if Some(to) == ep_target {
                        self.add_move(&mut moves, piece, i, to, Move::EP_CAPTURE);
                    }
                }
            } else {
                let kind = piece.kind();
                for &offset in &PIECE_OFFSETS[kind as usize] {
                    if offset == 0 {
                        break;
                    }
                    let mut to = i;
                    loop {
                        to += offset;
                        if to & 0x88 != 0 {
                            break;
                        }
                        let target = self.board[to as usize];
                        if target.is_none() {
                            if !only_capture {
                                self.add_move(&mut moves, piece, i, to, Move::NORMAL);
                            }
                        } else {
                            if target.color() == us {
                                break;
                            }
                            self.add_move(&mut moves, piece, i, to, Move::CAPTURE);
                            break;
                        }
                        if kind == KING || kind == KNIGHT {
                            break;
                        }
                    }
                }
            }
        }

        if !only_capture {
            self.add_castles(&mut moves, frc);
        }

        if self.search_mode == SearchMode::AlphaBeta {
            self.order_moves(&mut moves);
        }

        if !legal {
            return moves;
        }

        // keep only moves that leave the own king safe
        let mut legal_moves = Vec::with_capacity(moves.len());
        for mv in moves {
            self.move_raw(&mv);
            if !self.king_attacked(us.index() as u8) {
                legal_moves.push(mv);
            }
            self.undo_move();
        }
        legal_moves
    }

    /// Castling, both sides of the board, orthodox and Chess960 geometry.
    ///
    /// Every square traversed by the king or rook must be empty (apart
    /// from those two pieces), and no square the king crosses, endpoints
    /// included, may be attacked.
    fn add_castles(&mut self, moves: &mut Vec<Move>, frc: bool) {
        let us = self.turn;
        let them = us.opponent();
        let Some(king) = self.kings[us.index()] else {
            return;
        };
        let king_i = king.index() as i32;
        let rank_base = king_i & !15;

        for q in 0..2 {
            let Some(rook) = self.castling[us.index() * 2 + q as usize] else {
                continue;
            };
            let rook_i = rook.index() as i32;
            let flags = if q == 1 {
                Move::QSIDE_CASTLE
            } else {
                Move::KSIDE_CASTLE
            };
            let king_to = rank_base + 6 - (q << 2);
            let rook_to = king_to - 1 + (q << 1);
            let min_king = king_i.min(king_to);
            let max_king = king_i.max(king_to);
            let min_path = min_king.min(rook_i).min(rook_to);
            let max_path = max_king.max(rook_i).max(rook_to);

            let path_clear = (min_path..=max_path)
                .all(|sq| sq == king_i || sq == rook_i || self.board[sq as usize].is_none());
            if !path_clear {
                continue;
            }
            let king_safe =
                (min_king..=max_king).all(|sq| !self.attacked(them, Square::new(sq as u8)));
            if !king_safe {
                continue;
            }

            // orthodox geometry keeps the king destination; anything else
            // is encoded as "king captures own rook"
            let to = if frc || king_i & 15 != 4 || (rook_i & 15) % 7 != 0 {
                rook_i
            } else {
                king_to
            };
            self.add_move(moves, Piece::new(us, KING), king_i, to, flags);
        }
    }

    /// Emit one move, expanding pawn moves onto the last rank into the
    /// four promotions. Counts one mobility point for the piece.
    fn add_move(&mut self, moves: &mut Vec<Move>, piece: Piece, from: i32, to: i32, flags: u8) {
        if piece.kind() == PAWN && (to >> 4) % 7 == 0 {
            for promote in (KNIGHT..=QUEEN).rev() {
                self.add_single_move(moves, piece, from, to, flags | Move::PROMOTION, promote);
            }
        } else {
            self.add_single_move(moves, piece, from, to, flags, 0);
        }
        self.mobilities[piece.index()] = self.mobilities[piece.index()].saturating_add(1);
    }

    fn add_single_move(
        &self,
        moves: &mut Vec<Move>,
        piece: Piece,
        from: i32,
        to: i32,
        flags: u8,
        promote: u8,
    ) {
        let mut capture = 0;
        if flags & Move::CASTLE == 0 {
            let target = self.board[to as usize];
            if !target.is_none() {
                capture = target.kind();
            } else if flags & Move::EP_CAPTURE != 0 {
                capture = PAWN;
            }
        }
        moves.push(Move {
            capture,
            flags,
            from: Square::new(from as u8),
            piece,
            promote,
            san: String::new(),
            to: Square::new(to as u8),
        });
    }

    /// Recount the mobility of every piece of both sides and return the
    /// counters, indexed by piece nibble.
    pub fn mobilities(&mut self) -> [u8; 16] {
        self.count_mobilities();
        self.mobilities
    }

    pub(crate) fn count_mobilities(&mut self) {
        self.mobilities = [0; 16];
        let ep_target = self.ep_square.map(|sq| sq.index() as i32);

        for from in Square::all() {
            let piece = self.board[from.index()];
            if piece.is_none() {
                continue;
            }
            let us = piece.color();
            let them = us.opponent();
            let i = from.index() as i32;
            let index = piece.index();

            if piece.kind() == PAWN {
                let offsets = PAWN_OFFSETS[us.index()];

                let to = i + offsets[0];
                if to & 0x88 == 0 && self.board[to as usize].is_none() {
                    self.mobilities[index] = self.mobilities[index].saturating_add(1);

                    let to = i + offsets[1];
                    if 6 - us.index() as i32 * 5 == i >> 4 && self.board[to as usize].is_none() {
                        self.mobilities[index] = self.mobilities[index].saturating_add(1);
                    }
                }

                for offset in &offsets[2..] {
                    let to = i + offset;
                    if to & 0x88 != 0 {
                        continue;
                    }
                    let target = self.board[to as usize];
                    let hits = (!target.is_none() && target.color() == them)
                        || (target.is_none() && Some(to) == ep_target);
                    if hits {
                        self.mobilities[index] = self.mobilities[index].saturating_add(1);
                    }
                }
            } else {
                let kind = piece.kind();
                for &offset in &PIECE_OFFSETS[kind as usize] {
                    if offset == 0 {
                        break;
                    }
                    let mut to = i;
                    loop {
                        to += offset;
                        if to & 0x88 != 0 {
                            break;
                        }
                        let target = self.board[to as usize];
                        if target.is_none() {
                            self.mobilities[index] = self.mobilities[index].saturating_add(1);
                        } else {
                            if target.color() == them {
                                self.mobilities[index] = self.mobilities[index].saturating_add(1);
                            }
                            break;
                        }
                        if kind == KING || kind == KNIGHT {
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Count the legal move sequences of length `depth` from this
    /// position. The standard move generator correctness check.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let frc = self.frc;
        let moves = self.moves(frc, true, false);
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in &moves {
            self.move_raw(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
