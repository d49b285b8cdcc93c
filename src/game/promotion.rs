//! Pending pawn promotion
//!
//! Set when a pawn lands on its last row, cleared once the player picks a
//! piece. While it is set the half-move is incomplete: the turn has not
//! switched and board input is refused.

use chess_engine::{Color, Piece, PieceType, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    /// Where the pawn landed
    pub square: Square,
    pub color: Color,
    /// Piece taken by the promoting move, if any
    pub captured: Option<Piece>,
}

/// Does moving `piece` onto `to` promote it?
pub fn is_promotion_move(piece: Piece, to: Square) -> bool {
    piece.is(PieceType::Pawn) && to.row() == piece.color.promotion_row()
}
