//! Standard Algebraic Notation.
//!
//! Writing uses minimal disambiguation (file first, then rank, then
//! both). Reading first matches the exact SAN of each legal move, then
//! optionally falls back to a "sloppy" right-to-left scan that tolerates
//! missing or extra decorations.

use super::types::{kind_to_upper_char, piece_from_char, Move, MoveText, PAWN};
use super::Board;

/// Strip `+ # ? !` decorations from the end of a SAN string and drop the
/// promotion `=` sign.
#[must_use]
pub fn clean_san(san: &str) -> String {
    let mut chars: Vec<char> = san.chars().collect();
    while chars.last().is_some_and(|c| "+#?!".contains(*c)) {
        chars.pop();
    }
    if let Some(pos) = chars.iter().rposition(|&c| c == '=') {
        chars.remove(pos);
    }
    chars.into_iter().collect()
}

impl Board {
    /// Render a move in SAN. `moves` is the legal move list of the
    /// current position, needed to compute the disambiguator.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move, moves: &[Move]) -> String {
        if mv.flags & Move::KSIDE_CASTLE != 0 {
            return "O-O".to_string();
        }
        if mv.flags & Move::QSIDE_CASTLE != 0 {
            return "O-O-O".to_string();
        }

        let mut output = String::new();
        let kind = mv.piece.kind();

        if kind != PAWN {
            output.push(kind_to_upper_char(kind));
            output.push_str(&self.disambiguate(mv, moves));
        }

        if mv.is_capture() {
            if kind == PAWN {
                output.push((b'a' + mv.from.file()) as char);
            }
            output.push('x');
        }

        output.push_str(&mv.to.to_string());

        if mv.flags & Move::PROMOTION != 0 {
            output.push('=');
            output.push(kind_to_upper_char(mv.promote));
        }
        output
    }

    /// The smallest origin prefix that uniquely identifies `mv` among
    /// same-type moves to the same destination: nothing, file, rank, or
    /// the full square.
    fn disambiguate(&self, mv: &Move, moves: &[Move]) -> String {
        let mut ambiguities = 0;
        let mut same_file = 0;
        let mut same_rank = 0;
        let kind = mv.piece.kind();

        for other in moves {
            if kind == other.piece.kind() && mv.from != other.from && mv.to == other.to {
                ambiguities += 1;
                if mv.from.rank() == other.from.rank() {
                    same_rank += 1;
                }
                if mv.from.file() == other.from.file() {
                    same_file += 1;
                }
            }
        }

        if ambiguities == 0 {
            return String::new();
        }
        let an = mv.from.to_string();
        if same_rank > 0 && same_file > 0 {
            an
        } else if same_file > 0 {
            an[1..].to_string()
        } else {
            an[..1].to_string()
        }
    }

    /// Match a SAN string against a legal move list.
    ///
    /// Returns the matched move with its SAN attached, or the null-move
    /// sentinel (`piece == 0`). The sloppy pass scans right-to-left:
    /// optional promotion letter, destination, optional capture sign,
    /// optional origin rank/file, optional piece letter.
    #[must_use]
    pub fn san_to_move(&self, san: &str, moves: &[Move], sloppy: bool) -> Move {
        let clean = clean_san(san);
        for mv in moves {
            if clean == clean_san(&self.move_to_san(mv, moves)) {
                let mut found = mv.clone();
                found.san = san.to_string();
                return found;
            }
        }

        if !sloppy {
            return Move::null();
        }

        let chars: Vec<char> = clean.chars().collect();
        if chars.len() < 3 {
            return Move::null();
        }
        let mut i = chars.len() as i32 - 1;
        let at = |i: i32| chars[i as usize];

        let mut promote = 0u8;
        if "bnrqBNRQ".contains(at(i)) {
            promote = piece_from_char(at(i)).kind();
            i -= 1;
        }
        if !('1'..='8').contains(&at(i)) {
            return Move::null();
        }
        i -= 1;
        // files up to 'j' are scanned; squares beyond 'h' are off-board
        // in 0x88 and simply never match a move
        if !('a'..='j').contains(&at(i)) {
            return Move::null();
        }
        let to = at(i) as i32 - 'a' as i32 + (('8' as i32 - at(i + 1) as i32) << 4);
        i -= 1;

        if i >= 0 && at(i) == 'x' {
            i -= 1;
        }
        let mut from_rank = -1;
        let mut from_file = -1;
        if i >= 0 && ('1'..='8').contains(&at(i)) {
            from_rank = '8' as i32 - at(i) as i32;
            i -= 1;
        }
        if i >= 0 && ('a'..='j').contains(&at(i)) {
            from_file = at(i) as i32 - 'a' as i32;
            i -= 1;
        }
        let kind = if i >= 0 { piece_from_char(at(i)).kind() } else { 0 };

        for mv in moves {
            if to == mv.to.index() as i32
                && (kind == 0 || kind == mv.piece.kind())
                && (from_file < 0 || from_file == i32::from(mv.from.file()))
                && (from_rank < 0 || from_rank == i32::from(mv.from.rank()))
                && (promote == 0 || promote == mv.promote)
            {
                let mut found = mv.clone();
                found.san = self.move_to_san(mv, moves);
                return found;
            }
        }
        Move::null()
    }

    /// Parse a SAN move against the current position and play it.
    ///
    /// Returns the played move, or the null-move sentinel if the text
    /// matches no legal move.
    pub fn move_san(&mut self, text: &str, frc: bool, decorate: bool, sloppy: bool) -> Move {
        let moves = self.moves(frc, true, false);
        let mut mv = self.san_to_move(text, &moves, sloppy);
        if !mv.is_null() {
            self.move_raw(&mv);
            if decorate {
                self.decorate_move(&mut mv);
            }
        }
        mv
    }

    /// Append `+` or `#` to the move's SAN if the side to move is now in
    /// check, unless the text already carries a decoration.
    pub fn decorate_move(&mut self, mv: &mut Move) -> String {
        let last = mv.san.chars().last();
        if last != Some('+') && last != Some('#') && self.king_attacked(2) {
            let frc = self.frc;
            let replies = self.moves(frc, true, false);
            mv.san.push(if replies.is_empty() { '#' } else { '+' });
        }
        mv.san.clone()
    }

    /// Play a whitespace-separated sequence of SAN moves. Tokens not
    /// starting with a letter (move numbers) are skipped; parsing stops
    /// at the first unmatched move. Each played move carries its
    /// post-move FEN and ply.
    pub fn multi_san(&mut self, multi: &str, frc: bool, sloppy: bool) -> Vec<MoveText> {
        let mut result = Vec::new();
        for token in multi.split_whitespace() {
            let Some(first) = token.chars().next() else {
                continue;
            };
            if first < 'A' {
                continue;
            }
            let moves = self.moves(frc, true, false);
            let mv = self.san_to_move(token, &moves, sloppy);
            if mv.is_null() {
                break;
            }
            self.move_raw(&mv);
            let fen = self.fen();
            result.push(MoveText {
                mv,
                fen,
                ply: self.ply,
                score: 0.0,
            });
        }
        result
    }
}
