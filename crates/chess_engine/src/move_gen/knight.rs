//! Knight move generation
//!
//! Knights jump in an L-shape: two squares in one direction, then one square
//! perpendicular. They ignore pieces in between and may land on any square
//! not occupied by their own color.

use super::attack::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::types::{Color, Square};

/// Generate knight moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(&board, Square::from_algebraic("b1")?, Color::White, &mut moves);
/// // a3 and c3 from the starting position
/// ```
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            if !board.is_occupied_by(to, color) {
                out.push(to);
            }
        }
    }
}
