//! Protocol error types

use thiserror::Error;

/// Errors raised while decoding inbound frames
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Body is not valid JSON, or a field has the wrong shape
    #[error("Malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// `type` names a message this client does not understand
    #[error("Unknown message type: {0}")]
    UnknownType(String),

    /// A required field is absent
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// `boardState` did not describe a usable board
    #[error("Invalid board state: {0}")]
    InvalidBoard(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
