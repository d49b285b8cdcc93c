//! # Core value types for the rules engine
//!
//! ## Coordinates
//!
//! Squares use the client's display orientation: row 0 is rank 8 and row 7
//! is rank 1, column 0 is the a-file and column 7 the h-file. White therefore
//! starts on rows 6-7 and advances towards row 0; Black starts on rows 0-1 and
//! advances towards row 7.
//!
//! ```text
//!        col: 0  1  2  3  4  5  6  7
//!             a  b  c  d  e  f  g  h
//! row 0 (8)   r  n  b  q  k  b  n  r
//! row 1 (7)   p  p  p  p  p  p  p  p
//! ...
//! row 6 (2)   P  P  P  P  P  P  P  P
//! row 7 (1)   R  N  B  Q  K  B  N  R
//! ```
//!
//! ## Wire names
//!
//! [`Color`] and [`PieceType`] serialize as lowercase words (`"white"`,
//! `"knight"`), and a [`Piece`] as `{"type": "knight", "color": "white"}`,
//! which is the shape the game server uses for captured-piece lists.

use crate::error::{ChessEngineError, ChessEngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side to move / owner of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Capitalized name for status lines ("White wins!")
    pub fn title(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }

    /// Row holding this color's king and rooks at the start of the game
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a single pawn step
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row for this color's pawns
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row a pawn of this color must stand on to capture en passant
    /// (rank 5 for White, rank 4 for Black).
    pub fn en_passant_row(self) -> u8 {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> ChessEngineResult<Self> {
        match s {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            other => Err(ChessEngineError::InvalidToken {
                token: other.to_string(),
            }),
        }
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Pieces a pawn may promote to, in the order the chooser offers them
    pub const PROMOTION_CHOICES: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }

    /// Uppercase letter used in move notation
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Inverse of [`PieceType::letter`], case-insensitive
    pub fn from_letter(letter: char) -> Option<PieceType> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTION_CHOICES.contains(&self)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PieceType {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> ChessEngineResult<Self> {
        match s {
            "pawn" => Ok(PieceType::Pawn),
            "knight" => Ok(PieceType::Knight),
            "bishop" => Ok(PieceType::Bishop),
            "rook" => Ok(PieceType::Rook),
            "queen" => Ok(PieceType::Queen),
            "king" => Ok(PieceType::King),
            other => Err(ChessEngineError::InvalidToken {
                token: other.to_string(),
            }),
        }
    }
}

/// A piece on (or captured from) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    pub fn is(&self, piece_type: PieceType) -> bool {
        self.piece_type == piece_type
    }

    /// Serialized `{color}_{type}` token, e.g. `white_knight`
    pub fn token(&self) -> String {
        format!("{}_{}", self.color.as_str(), self.piece_type.as_str())
    }

    pub fn from_token(token: &str) -> ChessEngineResult<Piece> {
        let invalid = || ChessEngineError::InvalidToken {
            token: token.to_string(),
        };
        let (color, piece_type) = token.split_once('_').ok_or_else(invalid)?;
        let color = color.parse::<Color>().map_err(|_| invalid())?;
        let piece_type = piece_type.parse::<PieceType>().map_err(|_| invalid())?;
        Ok(Piece::new(piece_type, color))
    }
}

/// A square on the 8x8 board
///
/// Always in range; construct with [`Square::new`], [`Square::at`] or
/// [`Square::from_algebraic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> ChessEngineResult<Square> {
        if row < 8 && col < 8 {
            Ok(Square { row, col })
        } else {
            Err(ChessEngineError::InvalidSquare {
                row: row as i16,
                col: col as i16,
            })
        }
    }

    /// Signed constructor for offset arithmetic; `None` when off the board
    pub fn at(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Internal constructor for coordinates already known to be in range
    pub(crate) const fn from_parts(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::at(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Algebraic name, `a8` for row 0 col 0
    pub fn algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    pub fn from_algebraic(name: &str) -> ChessEngineResult<Square> {
        let invalid = || ChessEngineError::InvalidSquareName {
            name: name.to_string(),
        };
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::from_parts(b'8' - rank, file - b'a'))
    }

    /// Every square, row-major from a8 to h1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::from_parts(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Wing on which a king castles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Column of the rook that takes part in this castle
    pub fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    pub fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    pub fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Fixed notation token
    pub fn notation(self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }
}

/// The immediately preceding half-move, kept for en passant validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl LastMove {
    /// A pawn advancing two rows in one move
    pub fn is_double_pawn_advance(&self) -> bool {
        self.piece.is(PieceType::Pawn) && self.from.row().abs_diff(self.to.row()) == 2
    }
}
