//! Client events and notices
//!
//! Every mutation of the game is triggered by one [`ClientEvent`], processed to
//! completion before the next one is taken off the queue. The front-end,
//! the clock ticker and the transport all feed the same queue.
//!
//! [`Notice`]s flow the other way: user-facing messages the front-end shows
//! next to the board.

use crate::networking::session::ConnectionStatus;
use crate::networking::transport::InboundFrame;
use chess_engine::PieceType;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// Board click in board coordinates (row 0 = rank 8)
    SquareClick { row: u8, col: u8 },
    PromotionChoice(PieceType),
    Action(UserAction),
    /// One second elapsed on the ticker stamped with `epoch`
    ClockTick { epoch: u64 },
    Inbound(InboundFrame),
    ConnectionChanged(ConnectionStatus),
}

/// Buttons and menu entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    NewGame,
    CreateGame,
    JoinGame(String),
    Resign,
    OfferDraw,
    AcceptDraw,
    DeclineDraw,
    Disconnect,
    ResetToLocal,
    ConfigureTimer { enabled: bool, minutes: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the local player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
