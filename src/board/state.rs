//! The board struct and its scalar state.

use super::config::SearchMode;
use super::fen::DEFAULT_POSITION;
use super::tables::PIECE_SCORES;
use super::types::{Color, Move, Piece, Square, KING};
use super::EVAL_MATERIAL;

/// Undo-stack entry: every scalar mutated by a move, plus the move itself.
#[derive(Clone, Debug, Default)]
pub(crate) struct UnmakeInfo {
    pub(crate) castling: [Option<Square>; 4],
    pub(crate) ep_square: Option<Square>,
    pub(crate) half_moves: u32,
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) mv: Move,
}

/// A chess position with its move generator, notation layer and search.
///
/// All operations mutate the one instance in place; [`Board::move_raw`]
/// pushes an undo snapshot so [`Board::undo_move`] can restore the
/// position exactly. The castling array stores rook *squares* (not
/// flags), indexed white-kingside, white-queenside, black-kingside,
/// black-queenside, so orthodox chess and Chess960 share one code path.
pub struct Board {
    pub(crate) avg_depth: i32,
    pub(crate) board: [Piece; 128],
    pub(crate) castling: [Option<Square>; 4],
    pub(crate) ep_square: Option<Square>,
    pub(crate) eval_mode: u8,
    pub(crate) fen: String,
    pub(crate) frc: bool,
    pub(crate) half_moves: u32,
    pub(crate) idepth: i32,
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) materials: [i32; 2],
    pub(crate) max_depth: i32,
    pub(crate) max_nodes: u64,
    pub(crate) max_time: i64,
    pub(crate) mobilities: [u8; 16],
    pub(crate) move_number: u32,
    pub(crate) nodes: u64,
    pub(crate) ply: i32,
    pub(crate) ply_states: Vec<UnmakeInfo>,
    pub(crate) search_mode: SearchMode,
    pub(crate) sel_depth: i32,
    pub(crate) turn: Color,
}

impl Board {
    /// A board in the standard starting position with default settings
    /// (material evaluation, depth 4 search budget).
    #[must_use]
    pub fn new() -> Board {
        let mut board = Board {
            avg_depth: 0,
            board: [Piece::NONE; 128],
            castling: [None; 4],
            ep_square: None,
            eval_mode: EVAL_MATERIAL,
            fen: String::new(),
            frc: false,
            half_moves: 0,
            idepth: 0,
            kings: [None; 2],
            materials: [0; 2],
            max_depth: 4,
            max_nodes: 1_000_000_000,
            max_time: 0,
            mobilities: [0; 16],
            move_number: 1,
            nodes: 0,
            ply: -1,
            ply_states: Vec::new(),
            search_mode: SearchMode::Random,
            sel_depth: 0,
            turn: Color::White,
        };
        board.configure(false, "", 4);
        board
            .load(DEFAULT_POSITION)
            .expect("default position FEN is valid");
        board
    }

    /// Wipe the position and every derived counter. Search settings
    /// ([`Board::configure`]) and the FRC flag are left alone.
    pub fn clear(&mut self) {
        self.avg_depth = 0;
        self.board = [Piece::NONE; 128];
        self.castling = [None; 4];
        self.ep_square = None;
        self.fen.clear();
        self.half_moves = 0;
        self.idepth = 0;
        self.kings = [None; 2];
        self.materials = [0; 2];
        self.mobilities = [0; 16];
        self.move_number = 1;
        self.nodes = 0;
        self.ply = -1;
        self.ply_states.clear();
        self.sel_depth = 0;
        self.turn = Color::White;
    }

    /// Put a piece on a square, updating the king square or material sum.
    pub fn put(&mut self, piece: Piece, square: Square) {
        self.board[square.index()] = piece;
        if piece.kind() == KING {
            self.kings[piece.color().index()] = Some(square);
        } else {
            self.materials[piece.color().index()] += PIECE_SCORES[piece.index()];
        }
    }

    /// Back to the standard starting position.
    pub fn reset(&mut self) {
        self.frc = false;
        self.load(DEFAULT_POSITION)
            .expect("default position FEN is valid");
    }

    /// 8-line text dump of the board, one rank per line, a8 top-left.
    #[must_use]
    pub fn print(&self) -> String {
        let mut text = String::with_capacity(9 * 8);
        for rank in 0..8 {
            if rank > 0 {
                text.push('\n');
            }
            for file in 0..8 {
                text.push(self.board[rank * 16 + file].to_char());
            }
        }
        text
    }

    /// Snapshot the pre-move state at stack slot `ply + 1`, growing the
    /// stack on demand. The slot index is clamped at 0 because `ply` can
    /// start below -1 for degenerate FENs.
    pub(crate) fn push_state(&mut self, mv: &Move) {
        let index = usize::try_from(self.ply + 1).unwrap_or(0);
        if self.ply_states.len() <= index {
            self.ply_states.resize(index + 1, UnmakeInfo::default());
        }
        let state = &mut self.ply_states[index];
        state.castling = self.castling;
        state.ep_square = self.ep_square;
        state.half_moves = self.half_moves;
        state.kings = self.kings;
        state.mv = mv.clone();
    }

    // Read-only views.

    /// The raw 128-byte piece array.
    #[must_use]
    pub fn board(&self) -> &[Piece; 128] {
        &self.board
    }

    /// Castling rook squares: white-KS, white-QS, black-KS, black-QS.
    #[must_use]
    pub fn castling(&self) -> &[Option<Square>; 4] {
        &self.castling
    }

    /// En passant target square, if any.
    #[must_use]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    /// Fifty-move-rule counter.
    #[must_use]
    pub fn half_moves(&self) -> u32 {
        self.half_moves
    }

    /// Full move number, incremented after each black move.
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Material total for one side.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.materials[color.index()]
    }

    /// Signed plies since the game start; -1 before the first move.
    #[must_use]
    pub fn ply(&self) -> i32 {
        self.ply
    }

    /// Whether Chess960 castling semantics are active.
    #[must_use]
    pub fn frc(&self) -> bool {
        self.frc
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// King square of one side, if that side has a king on the board.
    #[must_use]
    pub fn king(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Leaf evaluations counted by the last search.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Deepest ply reached by the last search.
    #[must_use]
    pub fn avg_depth(&self) -> i32 {
        self.avg_depth
    }

    /// Deepest leaf evaluated by the last search.
    #[must_use]
    pub fn sel_depth(&self) -> i32 {
        self.sel_depth
    }

    /// Crate version, for diagnostics.
    #[must_use]
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
