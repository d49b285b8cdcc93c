//! Error types for the chess rules engine
//!
//! Provides custom error types for engine operations including square
//! validation, move classification and board (de)serialization.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Row or column outside the 8x8 board
    #[error("Invalid square: row {row}, col {col} (must be 0-7)")]
    InvalidSquare { row: i16, col: i16 },

    /// Algebraic square name that cannot be parsed
    #[error("Invalid square name: {name}")]
    InvalidSquareName { name: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: String },

    /// Piece does not belong to the expected color
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: String, color: String },

    /// Move rejected by the legality filter
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: String, to: String },

    /// Promotion requested for something that is not a pawn, or to a king/pawn
    #[error("Invalid promotion at {square}: {message}")]
    InvalidPromotion { square: String, message: String },

    /// Piece token that is not `{color}_{type}`
    #[error("Invalid piece token: {token}")]
    InvalidToken { token: String },

    /// Serialized board with the wrong shape or impossible contents
    #[error("Invalid board layout: {message}")]
    InvalidLayout { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
