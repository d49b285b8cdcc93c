//! Position: board plus the history-dependent rule state
//!
//! Two rules cannot be decided from the piece grid alone:
//!
//! - **Castling** needs to know whether the king or the rook has ever moved.
//!   [`CastlingRights`] keeps an explicit flag per color and side, cleared the
//!   first time a piece leaves (or is captured on) its original square. A king
//!   that wanders off and comes back home does not regain the right.
//! - **En passant** needs the immediately preceding half-move, kept as
//!   [`LastMove`].

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::make_unmake::MoveKind;
use crate::types::{CastleSide, Color, LastMove, PieceType, Square};

const KING_HOME_COL: u8 = 4;

/// Per-color, per-side castling flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    // [color][side]
    rights: [[bool; 2]; 2],
}

fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}

impl CastlingRights {
    pub fn all() -> CastlingRights {
        CastlingRights {
            rights: [[true; 2]; 2],
        }
    }

    pub fn none() -> CastlingRights {
        CastlingRights {
            rights: [[false; 2]; 2],
        }
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.rights[color_index(color)][side.index()]
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.rights[color_index(color)][side.index()] = false;
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.rights[color_index(color)] = [false; 2];
    }

    /// Rights implied by piece placement alone
    ///
    /// A side keeps its right only when the king and that side's rook both
    /// stand on their original squares.
    pub fn from_layout(board: &Board) -> CastlingRights {
        let mut rights = CastlingRights::none();
        for color in Color::ALL {
            let home = color.home_row();
            let king_home = board
                .piece_at(Square::from_parts(home, KING_HOME_COL))
                .is_some_and(|p| p.is(PieceType::King) && p.color == color);
            if !king_home {
                continue;
            }
            for side in CastleSide::ALL {
                let rook_home = board
                    .piece_at(Square::from_parts(home, side.rook_col()))
                    .is_some_and(|p| p.is(PieceType::Rook) && p.color == color);
                rights.rights[color_index(color)][side.index()] = rook_home;
            }
        }
        rights
    }

    /// Keep only the rights still consistent with `board`
    pub fn reconcile(self, board: &Board) -> CastlingRights {
        let layout = CastlingRights::from_layout(board);
        let mut merged = CastlingRights::none();
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if self.has(color, side) && layout.has(color, side) {
                    merged.rights[color_index(color)][side.index()] = true;
                }
            }
        }
        merged
    }

    /// Clear whatever rights depend on the piece that stood on `square`
    ///
    /// Called for both ends of every move, so a rook captured in its corner
    /// also costs its side the right.
    pub(crate) fn touch(&mut self, square: Square) {
        for color in Color::ALL {
            if square.row() != color.home_row() {
                continue;
            }
            if square.col() == KING_HOME_COL {
                self.revoke_all(color);
            }
            for side in CastleSide::ALL {
                if square.col() == side.rook_col() {
                    self.revoke(color, side);
                }
            }
        }
    }
}

/// Board together with castling rights and the en passant reference move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub castling: CastlingRights,
    pub last_move: Option<LastMove>,
}

impl Default for Position {
    fn default() -> Self {
        Position::standard()
    }
}

impl Position {
    pub fn standard() -> Position {
        Position {
            board: Board::standard(),
            castling: CastlingRights::all(),
            last_move: None,
        }
    }

    /// Position for an arbitrary board with rights inferred from layout
    pub fn from_board(board: Board) -> Position {
        Position {
            castling: CastlingRights::from_layout(&board),
            board,
            last_move: None,
        }
    }

    /// Work out which kind of move `from` -> `to` is
    ///
    /// Only the geometry is inspected; whether the move is legal is the move
    /// generator's concern.
    pub fn classify(&self, from: Square, to: Square) -> ChessEngineResult<MoveKind> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or_else(|| ChessEngineError::NoPieceAtSquare {
                square: from.algebraic(),
            })?;

        let kind = match piece.piece_type {
            PieceType::King if from.row() == to.row() && from.col().abs_diff(to.col()) == 2 => {
                let side = if to.col() > from.col() {
                    CastleSide::Kingside
                } else {
                    CastleSide::Queenside
                };
                MoveKind::Castle { side }
            }
            PieceType::Pawn if from.row().abs_diff(to.row()) == 2 => MoveKind::DoublePush,
            PieceType::Pawn if from.col() != to.col() && self.board.is_empty(to) => {
                MoveKind::EnPassant {
                    captured_square: Square::from_parts(from.row(), to.col()),
                }
            }
            PieceType::Pawn if to.row() == piece.color.promotion_row() => MoveKind::Promotion,
            _ => MoveKind::Normal,
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_rights_from_layout() {
        let mut board = Board::standard();
        board.take(sq("h1"));
        let rights = CastlingRights::from_layout(&board);
        assert!(!rights.has(Color::White, CastleSide::Kingside));
        assert!(rights.has(Color::White, CastleSide::Queenside));
        assert!(rights.has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_reconcile_never_restores_a_lost_right() {
        let mut rights = CastlingRights::all();
        rights.revoke_all(Color::Black);
        let merged = rights.reconcile(&Board::standard());
        assert!(!merged.has(Color::Black, CastleSide::Kingside));
        assert!(merged.has(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn test_touch_corner_and_king_squares() {
        let mut rights = CastlingRights::all();
        rights.touch(sq("a8"));
        assert!(!rights.has(Color::Black, CastleSide::Queenside));
        assert!(rights.has(Color::Black, CastleSide::Kingside));
        rights.touch(sq("e1"));
        assert!(!rights.has(Color::White, CastleSide::Kingside));
        assert!(!rights.has(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn test_classify_special_moves() {
        let mut position = Position::standard();
        assert_eq!(position.classify(sq("e2"), sq("e4")).unwrap(), MoveKind::DoublePush);
        assert_eq!(position.classify(sq("g1"), sq("f3")).unwrap(), MoveKind::Normal);
        assert_eq!(
            position.classify(sq("e1"), sq("g1")).unwrap(),
            MoveKind::Castle {
                side: CastleSide::Kingside
            }
        );

        position.board.place(sq("d5"), Piece::new(PieceType::Pawn, Color::White));
        assert_eq!(
            position.classify(sq("d5"), sq("e6")).unwrap(),
            MoveKind::EnPassant {
                captured_square: sq("e5")
            }
        );

        position.board.take(sq("a8"));
        position.board.place(sq("a7"), Piece::new(PieceType::Pawn, Color::White));
        assert_eq!(position.classify(sq("a7"), sq("a8")).unwrap(), MoveKind::Promotion);

        assert!(position.classify(sq("e4"), sq("e5")).is_err());
    }
}
