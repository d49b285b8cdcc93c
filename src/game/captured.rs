//! Captured pieces tracking
//!
//! Lists are keyed by the captured piece's own color: `white` holds White
//! pieces that Black has taken. This matches the server snapshot layout.
//!
//! # Material Values
//!
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (never captured)
//!
//! # Material Advantage
//!
//! Positive means White is ahead. If Black lost a rook and a pawn and White
//! lost a knight, White's advantage is (5 + 1) - 3 = +3.

use chess_engine::{Color, Piece, PieceType};
use shared::protocol::CapturedLists;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// White pieces taken by Black
    white: Vec<Piece>,
    /// Black pieces taken by White
    black: Vec<Piece>,
}

impl CapturedPieces {
    /// Record a captured piece under its own color
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // White captures Black's queen
    /// captured.add(Piece::new(PieceType::Queen, Color::Black));
    /// assert_eq!(captured.material_advantage(), 9);
    /// ```
    pub fn add(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    /// Pieces of `color` that have been captured
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn total(&self) -> usize {
        self.white.len() + self.black.len()
    }

    /// Material difference in pawns, positive when White is ahead
    pub fn material_advantage(&self) -> i32 {
        let lost_by_white: i32 = self.white.iter().map(|p| piece_value(p.piece_type)).sum();
        let lost_by_black: i32 = self.black.iter().map(|p| piece_value(p.piece_type)).sum();
        lost_by_black - lost_by_white
    }

    pub fn clear(&mut self) {
        self.white.clear();
        self.black.clear();
    }

    /// Replace both lists wholesale from a server snapshot
    pub fn replace_from(&mut self, lists: &CapturedLists) {
        // Lists are re-keyed by each piece's color in case the server mixed them
        self.clear();
        for piece in lists.white.iter().chain(lists.black.iter()) {
            self.add(*piece);
        }
    }

    pub fn to_lists(&self) -> CapturedLists {
        CapturedLists {
            white: self.white.clone(),
            black: self.black.clone(),
        }
    }
}

/// Standard piece values; the king has none
fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 1,
        PieceType::Knight => 3,
        PieceType::Bishop => 3,
        PieceType::Rook => 5,
        PieceType::Queen => 9,
        PieceType::King => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_pieces_default() {
        //! Verifies that captured pieces starts empty
        let captured = CapturedPieces::default();
        assert!(captured.of(Color::White).is_empty());
        assert!(captured.of(Color::Black).is_empty());
        assert_eq!(captured.material_advantage(), 0);
    }

    #[test]
    fn test_capture_is_keyed_by_own_color() {
        let mut captured = CapturedPieces::default();
        captured.add(Piece::new(PieceType::Queen, Color::Black));
        assert_eq!(captured.of(Color::Black).len(), 1);
        assert!(captured.of(Color::White).is_empty());
        assert_eq!(captured.material_advantage(), 9, "White is a queen up");
    }

    #[test]
    fn test_material_advantage_mixed() {
        let mut captured = CapturedPieces::default();
        captured.add(Piece::new(PieceType::Rook, Color::Black));
        captured.add(Piece::new(PieceType::Pawn, Color::Black));
        captured.add(Piece::new(PieceType::Knight, Color::White));
        assert_eq!(captured.material_advantage(), 3);
        assert_eq!(captured.total(), 3);
    }

    #[test]
    fn test_replace_from_snapshot_lists() {
        let mut captured = CapturedPieces::default();
        captured.add(Piece::new(PieceType::Queen, Color::White));
        let lists = CapturedLists {
            white: vec![],
            black: vec![Piece::new(PieceType::Pawn, Color::Black)],
        };
        captured.replace_from(&lists);
        assert!(captured.of(Color::White).is_empty());
        assert_eq!(captured.to_lists(), lists);
    }
}
