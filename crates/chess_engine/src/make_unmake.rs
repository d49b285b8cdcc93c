//! Move making and unmaking
//!
//! [`Position::apply`] plays a move and returns the [`UndoInfo`] needed for
//! [`Position::undo`] to restore the exact prior position: pieces, king cache,
//! castling rights and the en passant reference move.
//!
//! `apply` does not check legality. The move generator only feeds it moves it
//! has already accepted, and authoritative replays from the game server are
//! trusted as they arrive.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::{CastlingRights, Position};
use crate::types::{CastleSide, LastMove, Piece, PieceType, Square};

/// Special-move classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    /// Pawn advancing two rows from its starting row
    DoublePush,
    /// Diagonal pawn move onto an empty square; the captured pawn sits beside
    /// the mover on `captured_square`
    EnPassant { captured_square: Square },
    /// King moving two columns, rook hops over it
    Castle { side: CastleSide },
    /// Pawn reaching the farthest row
    Promotion,
}

/// A fully classified move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    /// Piece a promoting pawn becomes; `None` leaves the pawn on the last row
    /// until the player's choice arrives
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Classify `from` -> `to` against `position`
    pub fn new(position: &Position, from: Square, to: Square) -> ChessEngineResult<Move> {
        let kind = position.classify(from, to)?;
        Ok(Move {
            from,
            to,
            kind,
            promotion: None,
        })
    }

    pub fn with_promotion(mut self, piece_type: PieceType) -> Move {
        self.promotion = Some(piece_type);
        self
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }
}

/// Everything [`Position::undo`] needs to reverse a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    moved: Piece,
    captured: Option<(Square, Piece)>,
    rook_hop: Option<(Square, Square)>,
    castling: CastlingRights,
    last_move: Option<LastMove>,
}

impl UndoInfo {
    /// Piece that left the origin square (the pawn, for promotions)
    pub fn moved(&self) -> Piece {
        self.moved
    }

    /// Piece removed from the board, if any
    pub fn captured(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }
}

impl Position {
    /// Play `mv`, returning undo information
    ///
    /// Fails only when the origin square is empty; the position is left
    /// untouched in that case.
    pub fn apply(&mut self, mv: &Move) -> ChessEngineResult<UndoInfo> {
        let moved = self
            .board
            .take(mv.from)
            .ok_or_else(|| ChessEngineError::NoPieceAtSquare {
                square: mv.from.algebraic(),
            })?;
        let prior_castling = self.castling;
        let prior_last_move = self.last_move;

        let mut captured = None;
        let mut rook_hop = None;

        match mv.kind {
            MoveKind::EnPassant { captured_square } => {
                captured = self.board.take(captured_square).map(|p| (captured_square, p));
            }
            MoveKind::Castle { side } => {
                let row = mv.from.row();
                let rook_from = Square::from_parts(row, side.rook_col());
                let rook_to = Square::from_parts(row, side.rook_target_col());
                if let Some(rook) = self.board.take(rook_from) {
                    self.board.place(rook_to, rook);
                    rook_hop = Some((rook_from, rook_to));
                }
            }
            _ => {}
        }

        let landing = match (mv.kind, mv.promotion) {
            (MoveKind::Promotion, Some(piece_type)) => Piece::new(piece_type, moved.color),
            _ => moved,
        };
        if let Some(previous) = self.board.place(mv.to, landing) {
            captured = Some((mv.to, previous));
        }

        self.castling.touch(mv.from);
        self.castling.touch(mv.to);
        self.last_move = Some(LastMove {
            from: mv.from,
            to: mv.to,
            piece: moved,
            captured: captured.map(|(_, p)| p),
        });

        Ok(UndoInfo {
            moved,
            captured,
            rook_hop,
            castling: prior_castling,
            last_move: prior_last_move,
        })
    }

    /// Reverse a move previously played with [`Position::apply`]
    pub fn undo(&mut self, mv: &Move, undo: UndoInfo) {
        self.board.take(mv.to);
        self.board.place(mv.from, undo.moved);
        if let Some((rook_from, rook_to)) = undo.rook_hop {
            if let Some(rook) = self.board.take(rook_to) {
                self.board.place(rook_from, rook);
            }
        }
        if let Some((square, piece)) = undo.captured {
            self.board.place(square, piece);
        }
        self.castling = undo.castling;
        self.last_move = undo.last_move;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn play(position: &mut Position, from: &str, to: &str) -> (Move, UndoInfo) {
        let mv = Move::new(position, sq(from), sq(to)).unwrap();
        let undo = position.apply(&mv).unwrap();
        (mv, undo)
    }

    #[test]
    fn test_apply_undo_restores_exactly() {
        let mut position = Position::standard();
        let before = position;
        let (mv, undo) = play(&mut position, "e2", "e4");
        assert_ne!(position, before);
        assert!(position.last_move.unwrap().is_double_pawn_advance());
        position.undo(&mv, undo);
        assert_eq!(position, before);
    }

    #[test]
    fn test_capture_is_recorded() {
        let mut position = Position::standard();
        play(&mut position, "e2", "e4");
        play(&mut position, "d7", "d5");
        let (_, undo) = play(&mut position, "e4", "d5");
        assert_eq!(undo.captured(), Some(Piece::new(PieceType::Pawn, Color::Black)));
        assert_eq!(position.board.pieces().count(), 31);
    }

    #[test]
    fn test_castle_moves_rook_and_undoes() {
        let mut position = Position::standard();
        position.board.take(sq("f1"));
        position.board.take(sq("g1"));
        let before = position;

        let (mv, undo) = play(&mut position, "e1", "g1");
        assert_eq!(
            position.board.piece_at(sq("f1")),
            Some(Piece::new(PieceType::Rook, Color::White))
        );
        assert!(position.board.is_empty(sq("h1")));
        assert_eq!(position.board.king(Color::White), Some(sq("g1")));
        assert!(!position.castling.has(Color::White, CastleSide::Queenside));

        position.undo(&mv, undo);
        assert_eq!(position, before);
    }

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        let mut position = Position::standard();
        play(&mut position, "e2", "e4");
        play(&mut position, "a7", "a6");
        play(&mut position, "e4", "e5");
        play(&mut position, "d7", "d5");
        let before = position;

        let (mv, undo) = play(&mut position, "e5", "d6");
        assert!(matches!(mv.kind, MoveKind::EnPassant { .. }));
        assert!(position.board.is_empty(sq("d5")));
        assert_eq!(undo.captured(), Some(Piece::new(PieceType::Pawn, Color::Black)));

        position.undo(&mv, undo);
        assert_eq!(position, before);
    }

    #[test]
    fn test_promotion_with_and_without_choice() {
        let mut board = crate::board::Board::empty();
        board.place(sq("e1"), Piece::new(PieceType::King, Color::White));
        board.place(sq("e8"), Piece::new(PieceType::King, Color::Black));
        board.place(sq("a7"), Piece::new(PieceType::Pawn, Color::White));
        let start = Position::from_board(board);

        let mut pending = start;
        let mv = Move::new(&pending, sq("a7"), sq("a8")).unwrap();
        pending.apply(&mv).unwrap();
        assert_eq!(
            pending.board.piece_at(sq("a8")),
            Some(Piece::new(PieceType::Pawn, Color::White))
        );

        let mut chosen = start;
        let mv = mv.with_promotion(PieceType::Knight);
        let undo = chosen.apply(&mv).unwrap();
        assert_eq!(
            chosen.board.piece_at(sq("a8")),
            Some(Piece::new(PieceType::Knight, Color::White))
        );
        chosen.undo(&mv, undo);
        assert_eq!(chosen, start);
    }

    #[test]
    fn test_apply_from_empty_square_fails_cleanly() {
        let mut position = Position::standard();
        let before = position;
        let mv = Move {
            from: sq("e4"),
            to: sq("e5"),
            kind: MoveKind::Normal,
            promotion: None,
        };
        assert!(position.apply(&mv).is_err());
        assert_eq!(position, before);
    }
}
