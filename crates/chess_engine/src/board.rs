//! Board model
//!
//! An 8x8 grid of optional pieces plus a cached location for each king.
//! The board is a plain `Copy` value: legality checks clone it into a scratch
//! copy, play the candidate move and inspect the result, so the live board is
//! never touched by a trial move.
//!
//! ## Serialization
//!
//! [`Board::to_tokens`] and [`Board::from_tokens`] convert to and from the
//! 8x8 grid of `"{color}_{type}"` tokens (or `None` for empty squares) used by
//! the server's board snapshot.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{Color, Piece, PieceType, Square};

/// Cached king locations, one per color
///
/// Kept in step with the grid by [`Board::place`] and [`Board::take`];
/// rebuilt from a full scan after deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KingPositions {
    white: Option<Square>,
    black: Option<Square>,
}

impl KingPositions {
    pub fn get(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn set(&mut self, color: Color, square: Option<Square>) {
        match color {
            Color::White => self.white = square,
            Color::Black => self.black = square,
        }
    }
}

/// The piece grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    kings: KingPositions,
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
            kings: KingPositions::default(),
        }
    }

    /// Standard starting arrangement, White on rows 6-7
    pub fn standard() -> Board {
        let mut board = Board::empty();
        for (col, piece_type) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.place(Square::from_parts(0, col), Piece::new(*piece_type, Color::Black));
            board.place(Square::from_parts(1, col), Piece::new(PieceType::Pawn, Color::Black));
            board.place(Square::from_parts(6, col), Piece::new(PieceType::Pawn, Color::White));
            board.place(Square::from_parts(7, col), Piece::new(*piece_type, Color::White));
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True when `square` holds a piece of `color`
    pub fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color == color)
    }

    /// Put a piece on a square, returning whatever stood there
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let previous = self.take(square);
        self.squares[square.row() as usize][square.col() as usize] = Some(piece);
        if piece.is(PieceType::King) {
            self.kings.set(piece.color, Some(square));
        }
        previous
    }

    /// Remove and return the piece on a square
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let previous = self.squares[square.row() as usize][square.col() as usize].take();
        if let Some(piece) = previous {
            if piece.is(PieceType::King) && self.kings.get(piece.color) == Some(square) {
                self.kings.set(piece.color, None);
            }
        }
        previous
    }

    /// Replace the pawn on `square` with a piece of `piece_type`
    pub fn promote(&mut self, square: Square, piece_type: PieceType) -> ChessEngineResult<Piece> {
        let pawn = self.piece_at(square).ok_or_else(|| ChessEngineError::NoPieceAtSquare {
            square: square.algebraic(),
        })?;
        if !pawn.is(PieceType::Pawn) {
            return Err(ChessEngineError::InvalidPromotion {
                square: square.algebraic(),
                message: format!("{} is not a pawn", pawn.token()),
            });
        }
        if !piece_type.is_promotion_choice() {
            return Err(ChessEngineError::InvalidPromotion {
                square: square.algebraic(),
                message: format!("cannot promote to {piece_type}"),
            });
        }
        let promoted = Piece::new(piece_type, pawn.color);
        self.place(square, promoted);
        Ok(promoted)
    }

    pub fn king(&self, color: Color) -> Option<Square> {
        self.kings.get(color)
    }

    pub fn king_positions(&self) -> KingPositions {
        self.kings
    }

    /// All occupied squares with their pieces
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Rebuild the king cache from a full scan
    pub fn refresh_king_positions(&mut self) {
        let mut kings = KingPositions::default();
        for (square, piece) in self.pieces() {
            if piece.is(PieceType::King) {
                kings.set(piece.color, Some(square));
            }
        }
        self.kings = kings;
    }

    /// Grid of piece tokens, row 0 first
    pub fn to_tokens(&self) -> Vec<Vec<Option<String>>> {
        self.squares
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(|p| p.token())).collect())
            .collect()
    }

    /// Parse a grid of piece tokens
    ///
    /// The grid must be exactly 8x8 and hold at most one king per color.
    pub fn from_tokens<S: AsRef<str>>(grid: &[Vec<Option<S>>]) -> ChessEngineResult<Board> {
        if grid.len() != 8 {
            return Err(ChessEngineError::InvalidLayout {
                message: format!("expected 8 rows, found {}", grid.len()),
            });
        }
        let mut board = Board::empty();
        let mut king_counts = [0u8; 2];
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != 8 {
                return Err(ChessEngineError::InvalidLayout {
                    message: format!("row {row} has {} columns, expected 8", cells.len()),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                let Some(token) = cell else { continue };
                let piece = Piece::from_token(token.as_ref())?;
                if piece.is(PieceType::King) {
                    let slot = match piece.color {
                        Color::White => 0,
                        Color::Black => 1,
                    };
                    king_counts[slot] += 1;
                    if king_counts[slot] > 1 {
                        return Err(ChessEngineError::InvalidLayout {
                            message: format!("more than one {} king", piece.color),
                        });
                    }
                }
                board.squares[row][col] = Some(piece);
            }
        }
        board.refresh_king_positions();
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.king(Color::White), Some(sq("e1")));
        assert_eq!(board.king(Color::Black), Some(sq("e8")));
        assert_eq!(
            board.piece_at(sq("d1")),
            Some(Piece::new(PieceType::Queen, Color::White))
        );
        assert_eq!(
            board.piece_at(sq("a7")),
            Some(Piece::new(PieceType::Pawn, Color::Black))
        );
    }

    #[test]
    fn test_king_cache_follows_moves() {
        let mut board = Board::standard();
        let king = board.take(sq("e1")).unwrap();
        assert_eq!(board.king(Color::White), None);
        board.place(sq("f2"), king);
        assert_eq!(board.king(Color::White), Some(sq("f2")));
    }

    #[test]
    fn test_promote_requires_pawn() {
        let mut board = Board::standard();
        assert!(board.promote(sq("a1"), PieceType::Queen).is_err());
        assert!(board.promote(sq("a2"), PieceType::King).is_err());
        let promoted = board.promote(sq("a2"), PieceType::Knight).unwrap();
        assert_eq!(promoted, Piece::new(PieceType::Knight, Color::White));
    }

    #[test]
    fn test_tokens_round_trip() {
        let board = Board::standard();
        let tokens = board.to_tokens();
        assert_eq!(tokens[0][4].as_deref(), Some("black_king"));
        assert_eq!(tokens[4][4], None);
        let parsed = Board::from_tokens(&tokens).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_from_tokens_rejects_bad_shapes() {
        let short: Vec<Vec<Option<String>>> = vec![vec![None; 8]; 7];
        assert!(Board::from_tokens(&short).is_err());

        let mut two_kings: Vec<Vec<Option<String>>> = vec![vec![None; 8]; 8];
        two_kings[0][0] = Some("white_king".to_string());
        two_kings[7][7] = Some("white_king".to_string());
        assert!(matches!(
            Board::from_tokens(&two_kings),
            Err(ChessEngineError::InvalidLayout { .. })
        ));

        let mut bad_token: Vec<Vec<Option<String>>> = vec![vec![None; 8]; 8];
        bad_token[3][3] = Some("white_dragon".to_string());
        assert!(matches!(
            Board::from_tokens(&bad_token),
            Err(ChessEngineError::InvalidToken { .. })
        ));
    }
}
