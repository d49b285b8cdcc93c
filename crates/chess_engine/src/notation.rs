//! Move notation for the history panel
//!
//! A short algebraic-style rendering, not full SAN: no disambiguation and no
//! check or mate suffixes.
//!
//! | Move | Notation |
//! |---|---|
//! | pawn push | `e4` |
//! | pawn capture | `exd5` |
//! | piece move | `Nf3` |
//! | piece capture | `Bxc6` |
//! | castling | `O-O` / `O-O-O` |
//! | promotion | `e8=Q`, `dxe8=N` |

use crate::make_unmake::MoveKind;
use crate::types::{Piece, PieceType, Square};

/// Notation for a completed move, before any promotion suffix
///
/// # Arguments
///
/// * `piece` - The piece that moved (the pawn, for promotions)
/// * `from` / `to` - Origin and destination
/// * `captured` - Whether anything was captured, en passant included
/// * `kind` - Classification of the move
pub fn move_notation(piece: Piece, from: Square, to: Square, captured: bool, kind: MoveKind) -> String {
    if let MoveKind::Castle { side } = kind {
        return side.notation().to_string();
    }
    match (piece.piece_type, captured) {
        (PieceType::Pawn, false) => to.algebraic(),
        (PieceType::Pawn, true) => format!("{}x{}", from.file_char(), to),
        (piece_type, false) => format!("{}{}", piece_type.letter(), to),
        (piece_type, true) => format!("{}x{}", piece_type.letter(), to),
    }
}

/// `=Q` style suffix
pub fn promotion_suffix(piece_type: PieceType) -> String {
    format!("={}", piece_type.letter())
}

/// Amend a pawn-move notation with its promotion suffix
///
/// Already-suffixed text is returned unchanged.
pub fn with_promotion(notation: &str, piece_type: PieceType) -> String {
    if promotion_from_notation(notation).is_some() {
        notation.to_string()
    } else {
        format!("{notation}{}", promotion_suffix(piece_type))
    }
}

/// Promotion piece named by a trailing `=X`, if present
pub fn promotion_from_notation(notation: &str) -> Option<PieceType> {
    let (_, suffix) = notation.rsplit_once('=')?;
    let mut chars = suffix.chars();
    let piece_type = chars.next().and_then(PieceType::from_letter)?;
    piece_type.is_promotion_choice().then_some(piece_type)
}
