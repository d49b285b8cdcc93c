//! King move generation and castling
//!
//! Kings step one square in any direction. Castling destinations are added
//! when every condition holds:
//!
//! - the king stands on its original square and has never moved
//! - the rook for that side stands in its corner and has never moved
//! - every square strictly between king and rook is empty
//! - the king is not in check, and neither the square it crosses nor the one
//!   it lands on is attacked
//!
//! "Never moved" comes from the explicit [`CastlingRights`] flags rather than
//! from current placement.
//!
//! [`CastlingRights`]: crate::position::CastlingRights

use super::attack::{is_square_attacked, KING_OFFSETS};
use crate::position::Position;
use crate::types::{CastleSide, Color, PieceType, Square};

/// Generate the one-step king moves from a given square
pub fn generate_king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    for &(d_row, d_col) in &KING_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            if !position.board.is_occupied_by(to, color) {
                out.push(to);
            }
        }
    }
    for side in CastleSide::ALL {
        if can_castle(position, color, side) {
            out.push(Square::from_parts(color.home_row(), side.king_target_col()));
        }
    }
}

/// Check every castling condition for `color` on `side`
pub fn can_castle(position: &Position, color: Color, side: CastleSide) -> bool {
    if !position.castling.has(color, side) {
        return false;
    }

    let board = &position.board;
    let row = color.home_row();
    let king_square = Square::from_parts(row, 4);
    let rook_square = Square::from_parts(row, side.rook_col());

    let king_home = board
        .piece_at(king_square)
        .is_some_and(|p| p.is(PieceType::King) && p.color == color);
    let rook_home = board
        .piece_at(rook_square)
        .is_some_and(|p| p.is(PieceType::Rook) && p.color == color);
    if !king_home || !rook_home {
        return false;
    }

    let (low, high) = match side {
        CastleSide::Kingside => (5, 6),
        CastleSide::Queenside => (1, 3),
    };
    if (low..=high).any(|col| !board.is_empty(Square::from_parts(row, col))) {
        return false;
    }

    // Current, crossed and landing squares
    let king_path: [u8; 3] = match side {
        CastleSide::Kingside => [4, 5, 6],
        CastleSide::Queenside => [4, 3, 2],
    };
    let enemy = color.opponent();
    !king_path
        .iter()
        .any(|&col| is_square_attacked(board, Square::from_parts(row, col), enemy))
}
