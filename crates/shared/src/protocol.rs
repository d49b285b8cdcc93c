//! Message envelopes and payloads
//!
//! Every message is a JSON object tagged by `type`, with camelCase fields:
//!
//! ```json
//! { "type": "move", "playerId": "player_…", "move": { "fromRow": 6, … } }
//! ```
//!
//! Inbound messages ([`ServerMessage`]) arrive either on the game topic or on
//! the player's private topic. Outbound messages ([`ClientMessage`]) are
//! published to `/app/game/{id}/{route}`.

use crate::error::{ProtocolError, ProtocolResult};
use chess_engine::{ChessEngineResult, Color, Piece, PieceType, Square};
use serde::{Deserialize, Serialize};

// ============================================================================
// Payloads
// ============================================================================

/// A move as sent by a client and rebroadcast by the server
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovePayload {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub player_color: Option<Color>,
    pub piece: PieceType,
    #[serde(default)]
    pub captured_piece: Option<PieceType>,
    #[serde(default)]
    pub notation: String,
    /// ISO-8601 send time
    #[serde(default)]
    pub timestamp: String,
    /// Promotion choice for a pawn reaching the last row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceType>,
}

impl MovePayload {
    pub fn from_square(&self) -> ChessEngineResult<Square> {
        Square::new(self.from_row, self.from_col)
    }

    pub fn to_square(&self) -> ChessEngineResult<Square> {
        Square::new(self.to_row, self.to_col)
    }
}

/// One seat at the table
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_connected")]
    pub connected: bool,
}

fn default_connected() -> bool {
    true
}

/// Server-side game status
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WireStatus {
    Waiting,
    Active,
    Finished,
    Checkmate,
    Stalemate,
    Resigned,
    Draw,
    Timeout,
    #[serde(other)]
    Unknown,
}

impl WireStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, WireStatus::Waiting | WireStatus::Active | WireStatus::Unknown)
    }
}

/// Declared result of a finished game
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl Winner {
    pub fn color(self) -> Option<Color> {
        match self {
            Winner::White => Some(Color::White),
            Winner::Black => Some(Color::Black),
            Winner::Draw => None,
        }
    }
}

impl From<Option<Color>> for Winner {
    fn from(color: Option<Color>) -> Self {
        match color {
            Some(Color::White) => Winner::White,
            Some(Color::Black) => Winner::Black,
            None => Winner::Draw,
        }
    }
}

/// Captured pieces, keyed by the captured piece's own color
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedLists {
    #[serde(default)]
    pub white: Vec<Piece>,
    #[serde(default)]
    pub black: Vec<Piece>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub player: Color,
    pub notation: String,
    pub full_move: u32,
}

/// Authoritative game snapshot
///
/// Absent fields mean "not included", not "empty"; only present fields
/// overwrite local state.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSnapshot {
    pub game_id: String,
    pub white_player: Option<PlayerInfo>,
    pub black_player: Option<PlayerInfo>,
    pub current_turn: Option<Color>,
    pub game_status: Option<WireStatus>,
    /// JSON text `{"board": [[token|null; 8]; 8]}`, see [`crate::codec`]
    pub board_state: Option<String>,
    pub captured_pieces: Option<CapturedLists>,
    pub move_history: Option<Vec<HistoryRecord>>,
    pub winner: Option<Winner>,
}

impl GameSnapshot {
    pub fn both_players_present(&self) -> bool {
        self.white_player.is_some() && self.black_player.is_some()
    }

    /// Seat held by `player_id`, if any
    pub fn seat_of(&self, player_id: &str) -> Option<Color> {
        if self.white_player.as_ref().is_some_and(|p| p.id == player_id) {
            Some(Color::White)
        } else if self.black_player.as_ref().is_some_and(|p| p.id == player_id) {
            Some(Color::Black)
        } else {
            None
        }
    }
}

/// Body of the create-game request made before subscribing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub player_id: String,
    pub player_name: String,
}

/// Response to [`CreateGameRequest`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGame {
    pub game_id: String,
}

// ============================================================================
// Inbound
// ============================================================================

/// Messages received from the server
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    Move {
        #[serde(default)]
        player_id: Option<String>,
        #[serde(rename = "move")]
        mv: MovePayload,
        #[serde(default)]
        game_state: Option<GameSnapshot>,
    },
    MoveError {
        #[serde(default)]
        error: String,
    },
    Resign {
        #[serde(default)]
        player_id: Option<String>,
    },
    DrawOffer {
        #[serde(default)]
        player_id: Option<String>,
    },
    DrawAccept {
        #[serde(default)]
        player_id: Option<String>,
    },
    DrawDecline {
        #[serde(default)]
        player_id: Option<String>,
    },
    PlayerJoined {
        #[serde(default)]
        player_name: Option<String>,
        #[serde(default)]
        game_state: Option<GameSnapshot>,
    },
    PlayerDisconnected {
        #[serde(default)]
        player_name: Option<String>,
    },
    GameStart {
        #[serde(default)]
        game_state: Option<GameSnapshot>,
    },
    GameEnd {
        #[serde(default)]
        game_state: Option<GameSnapshot>,
    },
    GameJoined {
        game_state: GameSnapshot,
    },
    Error {
        #[serde(default)]
        error: String,
    },
}

const SERVER_TYPES: [&str; 12] = [
    "move",
    "moveError",
    "resign",
    "drawOffer",
    "drawAccept",
    "drawDecline",
    "playerJoined",
    "playerDisconnected",
    "gameStart",
    "gameEnd",
    "gameJoined",
    "error",
];

impl ServerMessage {
    /// Decode an inbound frame body
    ///
    /// Distinguishes a missing or unknown `type` from a malformed payload so
    /// the caller can log each precisely.
    pub fn parse(body: &str) -> ProtocolResult<ServerMessage> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        let kind = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or(ProtocolError::MissingField("type"))?;
        if !SERVER_TYPES.contains(&kind) {
            return Err(ProtocolError::UnknownType(kind.to_string()));
        }
        if kind == "move" && value.get("move").is_none() {
            return Err(ProtocolError::MissingField("move"));
        }
        if kind == "gameJoined" && value.get("gameState").is_none() {
            return Err(ProtocolError::MissingField("gameState"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The `type` tag, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::Move { .. } => "move",
            ServerMessage::MoveError { .. } => "moveError",
            ServerMessage::Resign { .. } => "resign",
            ServerMessage::DrawOffer { .. } => "drawOffer",
            ServerMessage::DrawAccept { .. } => "drawAccept",
            ServerMessage::DrawDecline { .. } => "drawDecline",
            ServerMessage::PlayerJoined { .. } => "playerJoined",
            ServerMessage::PlayerDisconnected { .. } => "playerDisconnected",
            ServerMessage::GameStart { .. } => "gameStart",
            ServerMessage::GameEnd { .. } => "gameEnd",
            ServerMessage::GameJoined { .. } => "gameJoined",
            ServerMessage::Error { .. } => "error",
        }
    }
}

// ============================================================================
// Outbound
// ============================================================================

/// Messages published by the client
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    Join {
        player_id: String,
        player_name: String,
    },
    Move {
        player_id: String,
        #[serde(rename = "move")]
        mv: MovePayload,
    },
    Resign {
        player_id: String,
    },
    DrawOffer {
        player_id: String,
    },
    DrawAccept {
        player_id: String,
    },
    DrawDecline {
        player_id: String,
    },
    Disconnect {
        player_id: String,
        player_name: String,
    },
}

impl ClientMessage {
    /// Last path segment of the publish destination
    pub fn route(&self) -> &'static str {
        match self {
            ClientMessage::Join { .. } => "join",
            ClientMessage::Move { .. } => "move",
            ClientMessage::Resign { .. } => "resign",
            ClientMessage::DrawOffer { .. } => "draw-offer",
            ClientMessage::DrawAccept { .. } => "draw-accept",
            ClientMessage::DrawDecline { .. } => "draw-decline",
            ClientMessage::Disconnect { .. } => "disconnect",
        }
    }

    pub fn player_id(&self) -> &str {
        match self {
            ClientMessage::Join { player_id, .. }
            | ClientMessage::Move { player_id, .. }
            | ClientMessage::Resign { player_id }
            | ClientMessage::DrawOffer { player_id }
            | ClientMessage::DrawAccept { player_id }
            | ClientMessage::DrawDecline { player_id }
            | ClientMessage::Disconnect { player_id, .. } => player_id,
        }
    }

    pub fn to_json(&self) -> ProtocolResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
