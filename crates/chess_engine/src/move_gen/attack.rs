//! Attack detection and square checking
//!
//! Answers "is this square attacked by that color?" ignoring whose turn it
//! is. Used for check detection, the legality filter and castling.
//!
//! ## Algorithm
//!
//! Rather than generating every enemy move, we look outwards from the target
//! square: a knight offset landing on an enemy knight, a ray ending on an
//! enemy slider of the right kind, and so on. Pawns and kings are tested by
//! their fixed attack offsets.

use crate::board::Board;
use crate::types::{Color, PieceType, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `board` - Board to inspect
/// * `square` - Target square
/// * `by_color` - Color of the pieces that might attack
///
/// # Examples
///
/// ```rust,ignore
/// // Is f3 covered by Black?
/// let attacked = is_square_attacked(&board, Square::from_algebraic("f3")?, Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    attacked_by_pawn(board, square, by_color)
        || attacked_by_leaper(board, square, by_color, &KNIGHT_OFFSETS, PieceType::Knight)
        || attacked_by_leaper(board, square, by_color, &KING_OFFSETS, PieceType::King)
        || attacked_along_rays(board, square, by_color, &ROOK_DIRS, PieceType::Rook)
        || attacked_along_rays(board, square, by_color, &BISHOP_DIRS, PieceType::Bishop)
}

/// Check if `color`'s king is attacked by the opponent
///
/// A board without a king for `color` is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}

fn attacked_by_pawn(board: &Board, square: Square, by_color: Color) -> bool {
    // An attacking pawn stands one step "behind" the target from its own
    // point of view.
    let back = -by_color.pawn_direction();
    [-1, 1].iter().any(|&d_col| {
        square
            .offset(back, d_col)
            .and_then(|from| board.piece_at(from))
            .is_some_and(|p| p.color == by_color && p.is(PieceType::Pawn))
    })
}

fn attacked_by_leaper(
    board: &Board,
    square: Square,
    by_color: Color,
    offsets: &[(i8, i8)],
    piece_type: PieceType,
) -> bool {
    offsets.iter().any(|&(d_row, d_col)| {
        square
            .offset(d_row, d_col)
            .and_then(|from| board.piece_at(from))
            .is_some_and(|p| p.color == by_color && p.is(piece_type))
    })
}

/// Walk each ray until the first piece; the queen counts as both sliders
fn attacked_along_rays(
    board: &Board,
    square: Square,
    by_color: Color,
    dirs: &[(i8, i8)],
    slider: PieceType,
) -> bool {
    for &(d_row, d_col) in dirs {
        let mut current = square;
        while let Some(next) = current.offset(d_row, d_col) {
            if let Some(piece) = board.piece_at(next) {
                if piece.color == by_color && (piece.is(slider) || piece.is(PieceType::Queen)) {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
