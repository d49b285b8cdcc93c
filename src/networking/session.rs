//! Match context
//!
//! One explicit value describing the current match: who we are, which game we
//! are in, which seats are filled and what the connection looks like. Every
//! handler in [`crate::networking::client`] reads and updates this value; there
//! is no other copy of "current game" state.

use chess_engine::Color;
use shared::protocol::{GameSnapshot, PlayerInfo};
use shared::topics;
use std::collections::BTreeSet;
use std::fmt;

/// Offline hot-seat or server-backed play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    #[default]
    Local,
    Networked,
}

/// One seat of a networked game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSession {
    pub id: String,
    pub name: String,
    pub color: Color,
    pub connected: bool,
}

impl PlayerSession {
    fn from_info(info: &PlayerInfo, color: Color) -> Self {
        Self {
            id: info.id.clone(),
            name: info.name.clone(),
            color,
            connected: info.connected,
        }
    }
}

/// Transport connection state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Failed(String),
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Disconnected => f.write_str("Disconnected from server"),
            ConnectionStatus::Connecting => f.write_str("Connecting to server..."),
            ConnectionStatus::Connected => f.write_str("Connected to server"),
            ConnectionStatus::Failed(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchContext {
    pub mode: PlayMode,
    pub game_id: Option<String>,
    /// `player_<uuid>`, stable for the lifetime of the client
    pub player_id: String,
    pub player_name: String,
    pub assigned_color: Option<Color>,
    pub white: Option<PlayerSession>,
    pub black: Option<PlayerSession>,
    pub connection: ConnectionStatus,
    /// Opponent's draw offer waiting for an answer
    pub incoming_draw_offer: bool,
    subscriptions: BTreeSet<String>,
}

impl MatchContext {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            mode: PlayMode::Local,
            game_id: None,
            player_id: topics::new_player_id(),
            player_name: player_name.into(),
            assigned_color: None,
            white: None,
            black: None,
            connection: ConnectionStatus::Disconnected,
            incoming_draw_offer: false,
            subscriptions: BTreeSet::new(),
        }
    }

    pub fn is_networked(&self) -> bool {
        self.mode == PlayMode::Networked
    }

    pub fn both_players_present(&self) -> bool {
        self.white.is_some() && self.black.is_some()
    }

    pub fn seat(&self, color: Color) -> Option<&PlayerSession> {
        match color {
            Color::White => self.white.as_ref(),
            Color::Black => self.black.as_ref(),
        }
    }

    /// Name of the player on the other side, if seated
    pub fn opponent_name(&self) -> Option<&str> {
        let you = self.assigned_color?;
        self.seat(you.opponent()).map(|s| s.name.as_str())
    }

    /// Refresh seats from snapshot player fields that are present
    pub fn update_seats(&mut self, snapshot: &GameSnapshot) {
        if let Some(info) = &snapshot.white_player {
            self.white = Some(PlayerSession::from_info(info, Color::White));
        }
        if let Some(info) = &snapshot.black_player {
            self.black = Some(PlayerSession::from_info(info, Color::Black));
        }
    }

    /// Our color from a snapshot: the seat holding our id, else the free seat
    pub fn resolve_color(&self, snapshot: &GameSnapshot) -> Option<Color> {
        snapshot.seat_of(&self.player_id).or_else(|| {
            match (&snapshot.white_player, &snapshot.black_player) {
                (None, _) => Some(Color::White),
                (Some(_), None) => Some(Color::Black),
                _ => None,
            }
        })
    }

    pub fn mark_disconnected(&mut self, name: &str) {
        for seat in [self.white.as_mut(), self.black.as_mut()].into_iter().flatten() {
            if seat.name == name {
                seat.connected = false;
            }
        }
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    pub fn add_subscription(&mut self, topic: String) {
        self.subscriptions.insert(topic);
    }

    pub fn is_subscribed(&self, topic: &str) -> bool {
        self.subscriptions.contains(topic)
    }

    /// Forget every subscription, returning them for the transport to drop
    pub fn take_subscriptions(&mut self) -> Vec<String> {
        std::mem::take(&mut self.subscriptions).into_iter().collect()
    }

    /// Back to offline play; identity is kept
    pub fn reset_to_local(&mut self) {
        let player_id = std::mem::take(&mut self.player_id);
        let player_name = std::mem::take(&mut self.player_name);
        *self = Self {
            player_id,
            player_name,
            ..Self::new(String::new())
        };
    }
}
