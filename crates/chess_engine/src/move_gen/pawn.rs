//! Pawn move generation
//!
//! - **Forward push**: one row towards the opponent onto an empty square
//! - **Double push**: from the starting row, when both squares ahead are empty
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: see [`en_passant_target`]
//!
//! Promotion is not a separate destination; a push or capture that lands on
//! the farthest row is classified as a promotion when it is played.

use crate::position::Position;
use crate::types::{Color, PieceType, Square};

/// Generate pawn moves from a given square
pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    let board = &position.board;
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            out.push(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col) {
            if board.is_occupied_by(to, color.opponent()) {
                out.push(to);
            }
        }
    }

    if let Some(target) = en_passant_target(position, from, color) {
        out.push(target);
    }
}

/// Square a pawn on `from` may capture onto en passant, if any
///
/// Requires the immediately preceding half-move to be an enemy pawn's
/// double advance that landed right beside this pawn, with this pawn on its
/// en passant row (row 3 for White, row 4 for Black).
pub fn en_passant_target(position: &Position, from: Square, color: Color) -> Option<Square> {
    if from.row() != color.en_passant_row() {
        return None;
    }
    let last = position.last_move?;
    if !last.is_double_pawn_advance() || last.piece.color == color {
        return None;
    }
    if last.to.row() != from.row() || last.to.col().abs_diff(from.col()) != 1 {
        return None;
    }
    // The double-pushed pawn must still be there to be captured
    let still_there = position
        .board
        .piece_at(last.to)
        .is_some_and(|p| p.is(PieceType::Pawn) && p.color != color);
    if !still_there {
        return None;
    }
    let target = Square::from_parts(from.row(), last.to.col())
        .offset(color.pawn_direction(), 0)?;
    position.board.is_empty(target).then_some(target)
}
