//! Rule suite for the move generator
//!
//! Positions are built from `(square, token)` lists so each test reads like a
//! diagram.

use super::*;
use crate::board::Board;
use crate::types::{CastleSide, Piece};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn position_with(pieces: &[(&str, &str)]) -> Position {
    let mut board = Board::empty();
    for (square, token) in pieces {
        board.place(sq(square), Piece::from_token(token).unwrap());
    }
    Position::from_board(board)
}

fn play(position: &mut Position, from: &str, to: &str) {
    let mv = Move::new(position, sq(from), sq(to)).unwrap();
    position.apply(&mv).unwrap();
}

fn names(mut squares: Vec<Square>) -> Vec<String> {
    squares.sort();
    squares.into_iter().map(|s| s.algebraic()).collect()
}

// ============================================================================
// Basic generation
// ============================================================================

#[test]
fn test_starting_position_has_twenty_moves() {
    let position = Position::standard();
    assert_eq!(all_legal_moves(&position, Color::White).len(), 20);
    assert_eq!(all_legal_moves(&position, Color::Black).len(), 20);
}

#[test]
fn test_pawn_double_push_needs_both_squares_empty() {
    let mut position = Position::standard();
    position
        .board
        .place(sq("e3"), Piece::new(PieceType::Knight, Color::Black));
    assert!(legal_destinations(&position, sq("e2")).is_empty());

    position.board.take(sq("e3"));
    position
        .board
        .place(sq("e4"), Piece::new(PieceType::Knight, Color::Black));
    assert_eq!(names(legal_destinations(&position, sq("e2"))), vec!["e3"]);
}

#[test]
fn test_slider_stops_at_blockers() {
    let position = position_with(&[
        ("a1", "white_king"),
        ("h8", "black_king"),
        ("d4", "white_rook"),
        ("d6", "black_pawn"),
        ("f4", "white_pawn"),
    ]);
    let targets = names(legal_destinations(&position, sq("d4")));
    assert!(targets.contains(&"d6".to_string()), "enemy blocker is capturable");
    assert!(!targets.contains(&"d7".to_string()), "ray stops at the blocker");
    assert!(!targets.contains(&"f4".to_string()), "own piece is not a target");
    assert!(targets.contains(&"e4".to_string()));
    assert!(targets.contains(&"d1".to_string()));
}

#[test]
fn test_generation_leaves_position_untouched() {
    let mut position = Position::standard();
    play(&mut position, "e2", "e4");
    play(&mut position, "e7", "e5");
    let before = position;
    let _ = all_legal_moves(&position, Color::White);
    let _ = side_status(&position, Color::Black);
    assert_eq!(position, before);
}

// ============================================================================
// Legality filter
// ============================================================================

#[test]
fn test_pinned_piece_cannot_leave_pin_line() {
    let position = position_with(&[
        ("e1", "white_king"),
        ("e2", "white_bishop"),
        ("e8", "black_rook"),
        ("a8", "black_king"),
    ]);
    assert!(!pseudo_legal_destinations(&position, sq("e2")).is_empty());
    assert!(legal_destinations(&position, sq("e2")).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    let position = position_with(&[
        ("e1", "white_king"),
        ("d8", "black_rook"),
        ("h8", "black_king"),
    ]);
    assert_eq!(
        names(legal_destinations(&position, sq("e1"))),
        names(vec![sq("e2"), sq("f2"), sq("f1")])
    );
}

#[test]
fn test_king_cannot_hide_behind_itself_on_a_ray() {
    let position = position_with(&[
        ("e1", "white_king"),
        ("a1", "black_rook"),
        ("h8", "black_king"),
    ]);
    let targets = names(legal_destinations(&position, sq("e1")));
    assert!(!targets.contains(&"f1".to_string()), "f1 is still on the rook's rank");
    assert!(!targets.contains(&"d1".to_string()));
    assert!(targets.contains(&"e2".to_string()));
}

// ============================================================================
// Castling
// ============================================================================

fn cleared_kingside() -> Position {
    let mut position = Position::standard();
    position.board.take(sq("f1"));
    position.board.take(sq("g1"));
    position
}

#[test]
fn test_kingside_castle_legal_when_path_clear() {
    let position = cleared_kingside();
    assert!(can_castle(&position, Color::White, CastleSide::Kingside));
    assert!(legal_destinations(&position, sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_castle_illegal_through_attacked_square() {
    let mut position = cleared_kingside();
    position.board.take(sq("f2"));
    position
        .board
        .place(sq("f4"), Piece::new(PieceType::Rook, Color::Black));
    assert!(!can_castle(&position, Color::White, CastleSide::Kingside));
    assert!(!legal_destinations(&position, sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_castle_illegal_onto_attacked_square() {
    let mut position = cleared_kingside();
    position.board.take(sq("g2"));
    position
        .board
        .place(sq("g4"), Piece::new(PieceType::Rook, Color::Black));
    assert!(!can_castle(&position, Color::White, CastleSide::Kingside));
}

#[test]
fn test_castle_illegal_while_in_check() {
    let mut position = cleared_kingside();
    position.board.take(sq("e2"));
    position
        .board
        .place(sq("e4"), Piece::new(PieceType::Rook, Color::Black));
    assert!(!can_castle(&position, Color::White, CastleSide::Kingside));
}

#[test]
fn test_queenside_rook_path_may_be_attacked() {
    let mut position = Position::standard();
    for name in ["b1", "c1", "d1", "b2"] {
        position.board.take(sq(name));
    }
    position
        .board
        .place(sq("b4"), Piece::new(PieceType::Rook, Color::Black));
    assert!(
        can_castle(&position, Color::White, CastleSide::Queenside),
        "only the king's path must be safe"
    );
    assert!(legal_destinations(&position, sq("e1")).contains(&sq("c1")));
}

#[test]
fn test_queenside_needs_b_file_empty() {
    let mut position = Position::standard();
    position.board.take(sq("c8"));
    position.board.take(sq("d8"));
    assert!(!can_castle(&position, Color::Black, CastleSide::Queenside));
    position.board.take(sq("b8"));
    assert!(can_castle(&position, Color::Black, CastleSide::Queenside));
}

#[test]
fn test_king_that_moved_and_returned_cannot_castle() {
    let mut position = cleared_kingside();
    play(&mut position, "e1", "f1");
    play(&mut position, "a7", "a6");
    play(&mut position, "f1", "e1");
    play(&mut position, "a6", "a5");
    assert!(!can_castle(&position, Color::White, CastleSide::Kingside));
    assert!(!legal_destinations(&position, sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_rook_that_moved_and_returned_cannot_castle() {
    let mut position = cleared_kingside();
    play(&mut position, "h1", "g1");
    play(&mut position, "a7", "a6");
    play(&mut position, "g1", "h1");
    assert!(!can_castle(&position, Color::White, CastleSide::Kingside));
    position.board.take(sq("b1"));
    position.board.take(sq("c1"));
    position.board.take(sq("d1"));
    assert!(can_castle(&position, Color::White, CastleSide::Queenside));
}

// ============================================================================
// En passant
// ============================================================================

fn en_passant_ready() -> Position {
    let mut position = Position::standard();
    play(&mut position, "e2", "e4");
    play(&mut position, "a7", "a6");
    play(&mut position, "e4", "e5");
    play(&mut position, "d7", "d5");
    position
}

#[test]
fn test_en_passant_right_after_double_advance() {
    let position = en_passant_ready();
    assert_eq!(
        en_passant_target(&position, sq("e5"), Color::White),
        Some(sq("d6"))
    );
    assert!(legal_destinations(&position, sq("e5")).contains(&sq("d6")));
}

#[test]
fn test_en_passant_expires_after_another_move() {
    let mut position = en_passant_ready();
    play(&mut position, "h2", "h3");
    play(&mut position, "h7", "h6");
    assert_eq!(en_passant_target(&position, sq("e5"), Color::White), None);
    assert!(!legal_destinations(&position, sq("e5")).contains(&sq("d6")));
}

#[test]
fn test_en_passant_not_after_single_steps() {
    let mut position = Position::standard();
    play(&mut position, "e2", "e4");
    play(&mut position, "d7", "d6");
    play(&mut position, "e4", "e5");
    play(&mut position, "d6", "d5");
    assert!(!legal_destinations(&position, sq("e5")).contains(&sq("d6")));
}

#[test]
fn test_black_en_passant() {
    let mut position = Position::standard();
    play(&mut position, "a2", "a3");
    play(&mut position, "d7", "d5");
    play(&mut position, "a3", "a4");
    play(&mut position, "d5", "d4");
    play(&mut position, "c2", "c4");
    assert!(legal_destinations(&position, sq("d4")).contains(&sq("c3")));
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    let mut position = position_with(&[
        ("a5", "white_king"),
        ("b5", "white_pawn"),
        ("c7", "black_pawn"),
        ("h5", "black_rook"),
        ("e8", "black_king"),
    ]);
    play(&mut position, "c7", "c5");
    assert_eq!(
        en_passant_target(&position, sq("b5"), Color::White),
        Some(sq("c6"))
    );
    assert_eq!(names(legal_destinations(&position, sq("b5"))), vec!["b6"]);
}

// ============================================================================
// Promotion and terminal detection
// ============================================================================

#[test]
fn test_promotions_expand_to_four_choices() {
    let position = position_with(&[
        ("e1", "white_king"),
        ("h8", "black_king"),
        ("a7", "white_pawn"),
    ]);
    let promotions: Vec<Move> = all_legal_moves(&position, Color::White)
        .into_iter()
        .filter(|mv| mv.kind == MoveKind::Promotion)
        .collect();
    assert_eq!(promotions.len(), 4);
    assert!(promotions.iter().all(|mv| mv.promotion.is_some()));
}

#[test]
fn test_back_rank_mate_detected() {
    let position = position_with(&[
        ("g1", "white_king"),
        ("f2", "white_pawn"),
        ("g2", "white_pawn"),
        ("h2", "white_pawn"),
        ("e1", "black_rook"),
        ("g8", "black_king"),
    ]);
    assert_eq!(side_status(&position, Color::White), SideStatus::Checkmate);
    assert_eq!(side_status(&position, Color::Black), SideStatus::Normal);
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let position = position_with(&[
        ("g1", "white_king"),
        ("f2", "white_pawn"),
        ("h2", "white_pawn"),
        ("e1", "black_rook"),
        ("g8", "black_king"),
    ]);
    assert_eq!(side_status(&position, Color::White), SideStatus::Check);
}

#[test]
fn test_stalemate_detected() {
    let position = position_with(&[
        ("a8", "black_king"),
        ("b6", "white_queen"),
        ("c6", "white_king"),
    ]);
    assert!(!is_in_check(&position.board, Color::Black));
    assert_eq!(side_status(&position, Color::Black), SideStatus::Stalemate);
}
