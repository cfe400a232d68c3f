//! Integration tests through the public API.

use ox88::{an_to_square, clean_san, piece_from_char, square_to_an, Board, Color, Move, Piece};

#[test]
fn test_en_passant_scenario() {
    let mut board = Board::new();
    let played = board.multi_uci("e2e4 a7a6 e4e5 d7d5", false);
    assert_eq!(played.len(), 4);
    assert_eq!(board.ep_square(), an_to_square("d6"));

    let mv = board.move_uci("e5d6", false, false);
    assert!(mv.flags & Move::EP_CAPTURE != 0);
    assert!(board.board()[an_to_square("d5").unwrap().index()].is_none());
    assert_eq!(board.ep_square(), None);
}

#[test]
fn test_print_start_position() {
    let board = Board::new();
    let expected = "\
rnbqkbnr
pppppppp
........
........
........
........
PPPPPPPP
RNBQKBNR"
        .replace('.', " ");
    assert_eq!(board.print(), expected);
}

#[test]
fn test_put_and_clear() {
    let mut board = Board::new();
    board.clear();
    assert_eq!(board.material(Color::White), 0);

    board.put(piece_from_char('Q'), an_to_square("d1").unwrap());
    board.put(piece_from_char('K'), an_to_square("e1").unwrap());
    assert_eq!(board.material(Color::White), 900);
    assert_eq!(board.king(Color::White), an_to_square("e1"));
}

#[test]
fn test_attacked_and_checked() {
    let mut board = Board::new();
    board.load("4k3/8/8/8/8/8/8/4K2R w - - 0 1").unwrap();
    assert!(board.attacked(Color::White, an_to_square("h8").unwrap()));
    assert!(!board.attacked(Color::Black, an_to_square("h1").unwrap()));
    assert!(!board.checked(1));

    board.move_uci("h1h8", false, false);
    assert!(board.checked(1));
    // code 2: side to move (black), code 3: side that just moved (white)
    assert!(board.checked(2));
    assert!(!board.checked(3));
}

#[test]
fn test_current_fen_tracks_moves() {
    let mut board = Board::new();
    board.move_san("e4", false, false, false);
    let fen = board.fen();
    assert_eq!(board.current_fen(), fen);
    assert_eq!(
        fen,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_mobilities_view_counts_both_sides() {
    let mut board = Board::new();
    let mobilities = board.mobilities();
    // 16 pawn moves + 4 knight moves per side in the start position
    let white: u32 = (1..7).map(|i| u32::from(mobilities[i])).sum();
    let black: u32 = (9..15).map(|i| u32::from(mobilities[i])).sum();
    assert_eq!(white, 20);
    assert_eq!(black, 20);
}

#[test]
fn test_helpers() {
    assert_eq!(clean_san("exd8=Q+!?"), "exd8Q");
    assert_eq!(square_to_an(119, true), "h1");
    assert_eq!(piece_from_char('R'), Piece::new(Color::White, ox88::board::ROOK));
    assert!(!Board::version().is_empty());
}

#[test]
fn test_multi_san_then_search() {
    let mut board = Board::new();
    board.configure(false, "d=2 s=ab e=hce", -1);
    board.multi_san("1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 4. Ba4 Nf6", false, false);
    let moves = board.moves(false, true, false);
    let results = board.search(&moves, "");
    assert_eq!(results.len(), moves.len());
    assert!(results.iter().all(|r| !r.mv.san.is_empty()));
}

#[test]
fn test_undo_across_load_boundary_is_safe() {
    let mut board = Board::new();
    board.load("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    // ply is -1 right after load; undo must not underflow
    board.undo_move();
    assert_eq!(board.turn(), Color::White);
}
