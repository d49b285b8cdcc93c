//! Move generation
//!
//! Two layers:
//!
//! 1. **Pseudo-legal** destinations per piece type (the submodules), which
//!    respect movement geometry and occupancy but may leave the mover's king
//!    attacked.
//! 2. The **legality filter**, which plays each candidate on a scratch copy of
//!    the position and discards it if the mover's king is then attacked.
//!
//! The live position is only ever borrowed immutably here.

pub mod attack;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;

#[cfg(test)]
mod tests;

pub use attack::{is_in_check, is_square_attacked};
pub use king::can_castle;
pub use pawn::en_passant_target;

use crate::make_unmake::{Move, MoveKind};
use crate::position::Position;
use crate::types::{Color, PieceType, Square};

/// Outcome of looking at the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideStatus {
    /// Has legal moves and is not in check
    Normal,
    /// In check, with at least one way out
    Check,
    Checkmate,
    Stalemate,
}

/// Pseudo-legal destinations for the piece on `from`
///
/// Empty when the square is empty.
pub fn pseudo_legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    let Some(piece) = position.board.piece_at(from) else {
        return Vec::new();
    };
    let board = &position.board;
    let color = piece.color;
    let mut out = Vec::with_capacity(16);
    match piece.piece_type {
        PieceType::Pawn => pawn::generate_pawn_moves(position, from, color, &mut out),
        PieceType::Knight => knight::generate_knight_moves(board, from, color, &mut out),
        PieceType::Bishop => sliding::generate_bishop_moves(board, from, color, &mut out),
        PieceType::Rook => sliding::generate_rook_moves(board, from, color, &mut out),
        PieceType::Queen => sliding::generate_queen_moves(board, from, color, &mut out),
        PieceType::King => king::generate_king_moves(position, from, color, &mut out),
    }
    out
}

/// Does playing `from` -> `to` keep the mover's own king safe?
fn keeps_king_safe(position: &Position, from: Square, to: Square, color: Color) -> bool {
    let Ok(mv) = Move::new(position, from, to) else {
        return false;
    };
    let mut scratch = *position;
    if scratch.apply(&mv).is_err() {
        return false;
    }
    !is_in_check(&scratch.board, color)
}

/// Legal destinations for the piece on `from`
///
/// # Examples
///
/// ```rust,ignore
/// let position = Position::standard();
/// let targets = legal_destinations(&position, Square::from_algebraic("e2")?);
/// assert_eq!(targets.len(), 2); // e3, e4
/// ```
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    let Some(piece) = position.board.piece_at(from) else {
        return Vec::new();
    };
    pseudo_legal_destinations(position, from)
        .into_iter()
        .filter(|&to| keeps_king_safe(position, from, to, piece.color))
        .collect()
}

pub fn is_legal_move(position: &Position, from: Square, to: Square) -> bool {
    legal_destinations(position, from).contains(&to)
}

/// Every legal move for `color`, with promotions expanded per choice
pub fn all_legal_moves(position: &Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    let origins: Vec<Square> = position.board.pieces_of(color).map(|(sq, _)| sq).collect();
    for from in origins {
        for to in legal_destinations(position, from) {
            let Ok(mv) = Move::new(position, from, to) else {
                continue;
            };
            if mv.kind == MoveKind::Promotion {
                moves.extend(PieceType::PROMOTION_CHOICES.iter().map(|&pt| mv.with_promotion(pt)));
            } else {
                moves.push(mv);
            }
        }
    }
    moves
}

/// True as soon as any piece of `color` has a legal move
pub fn has_legal_move(position: &Position, color: Color) -> bool {
    position
        .board
        .pieces_of(color)
        .any(|(from, _)| !legal_destinations(position, from).is_empty())
}

/// Check / checkmate / stalemate status for `color`
pub fn side_status(position: &Position, color: Color) -> SideStatus {
    let in_check = is_in_check(&position.board, color);
    match (in_check, has_legal_move(position, color)) {
        (true, true) => SideStatus::Check,
        (true, false) => SideStatus::Checkmate,
        (false, false) => SideStatus::Stalemate,
        (false, true) => SideStatus::Normal,
    }
}
