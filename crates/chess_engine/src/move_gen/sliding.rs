//! Sliding piece move generation
//!
//! Bishops, rooks and queens move any number of squares along a ray until
//! blocked. A blocking enemy piece is a capture and is included; a blocking
//! own piece is not. The ray stops there either way.

use super::attack::{BISHOP_DIRS, ROOK_DIRS};
use crate::board::Board;
use crate::types::{Color, Square};

/// Append every square reachable along `dirs` from `from`
pub(crate) fn generate_slides(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(piece) => {
                    if piece.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    generate_slides(board, from, color, &ROOK_DIRS, out);
}

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    generate_slides(board, from, color, &BISHOP_DIRS, out);
}

/// Queen: union of rook and bishop rays
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    generate_slides(board, from, color, &ROOK_DIRS, out);
    generate_slides(board, from, color, &BISHOP_DIRS, out);
}
