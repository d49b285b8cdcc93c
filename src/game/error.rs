//! Error types for game module
//!
//! Four categories reach the player:
//!
//! - [`GameError::InputRejected`]: a click or action that is not allowed right
//!   now; reported to the acting player only, nothing changes
//! - [`GameError::Protocol`]: an inbound frame that could not be understood;
//!   logged and dropped
//! - [`GameError::ServerRejectedMove`]: the server refused a move intent;
//!   surfaced, nothing to roll back
//! - [`GameError::Connection`]: the transport failed; networked actions are
//!   disabled, offline play carries on
//!
//! None of them is fatal to the process. Terminal game states are not errors.

use chess_engine::{ChessEngineError, Color};
use shared::ProtocolError;
use std::fmt;

/// Why an input was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    GameOver,
    AwaitingPromotion,
    WaitingForOpponent,
    NotConnected,
    NoColorAssigned,
    NotYourTurn { you: Color, active: Color },
    NotYourPiece { you: Color },
    EmptySquare,
    IllegalMove,
    NoPromotionPending,
    InvalidPromotionPiece,
    TimerAfterStart,
    MatchInProgress,
    NoDrawOffer,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::GameOver => f.write_str("The game is over."),
            RejectReason::AwaitingPromotion => f.write_str("Choose a piece to promote to first."),
            RejectReason::WaitingForOpponent => f.write_str("Waiting for opponent to join..."),
            RejectReason::NotConnected => f.write_str("Error: Not connected to multiplayer server"),
            RejectReason::NoColorAssigned => {
                f.write_str("Error: Player color not assigned. Try rejoining the game.")
            }
            RejectReason::NotYourTurn { you, active } => write!(
                f,
                "It's not your turn! You are {you}, current turn: {active}"
            ),
            RejectReason::NotYourPiece { you } => write!(f, "You can only move {you} pieces!"),
            RejectReason::EmptySquare => f.write_str("Error: No piece at selected square"),
            RejectReason::IllegalMove => f.write_str("That move is not legal."),
            RejectReason::NoPromotionPending => f.write_str("There is no promotion to choose."),
            RejectReason::InvalidPromotionPiece => {
                f.write_str("Promote to a queen, rook, bishop or knight.")
            }
            RejectReason::TimerAfterStart => {
                f.write_str("You cannot enable the timer after the game has started.")
            }
            RejectReason::MatchInProgress => f.write_str("Finish or resign the current match first."),
            RejectReason::NoDrawOffer => f.write_str("There is no draw offer to answer."),
        }
    }
}

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Input refused for the acting player
    #[error("{reason}")]
    InputRejected { reason: RejectReason },

    /// Inbound frame could not be decoded
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Inbound data named squares or pieces that do not fit the board
    #[error("Engine error: {0}")]
    Engine(#[from] ChessEngineError),

    /// The server refused a move intent
    #[error("Move error: {message}")]
    ServerRejectedMove { message: String },

    /// Transport failure or timeout
    #[error("{message}")]
    Connection { message: String },
}

impl GameError {
    pub fn rejected(reason: RejectReason) -> GameError {
        GameError::InputRejected { reason }
    }
}

impl From<RejectReason> for GameError {
    fn from(reason: RejectReason) -> Self {
        GameError::InputRejected { reason }
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
