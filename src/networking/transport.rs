//! Transport seam
//!
//! The publish/subscribe channel itself lives outside this crate. The client
//! only needs four things from it, captured by [`Transport`]. Publishing is
//! fire-and-forget: confirmation arrives later as an inbound frame.
//!
//! [`ChannelTransport`] forwards everything over a `crossbeam-channel` so a
//! relay thread (or a test) can play the server.

use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use shared::protocol::{ClientMessage, CreateGameRequest, CreatedGame};
use shared::topics::{self, CREATE_GAME_PATH};
use shared::ProtocolError;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to connect to server")]
    Closed,

    #[error("Connection timeout - server may be down")]
    Timeout,

    #[error("Failed to encode message: {0}")]
    Encode(#[from] ProtocolError),

    #[error("Server rejected request: {0}")]
    Rejected(String),
}

/// A frame delivered on a subscribed topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundFrame {
    pub topic: String,
    pub body: String,
}

impl InboundFrame {
    pub fn new(topic: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            body: body.into(),
        }
    }
}

/// What the client asked the channel to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundFrame {
    Publish { destination: String, body: String },
    Subscribe { topic: String },
    Unsubscribe { topic: String },
}

pub trait Transport: Send {
    /// Send `message` to `destination` without waiting for a reply
    fn publish(&mut self, destination: &str, message: &ClientMessage) -> Result<(), TransportError>;

    fn subscribe(&mut self, topic: &str) -> Result<(), TransportError>;

    fn unsubscribe(&mut self, topic: &str) -> Result<(), TransportError>;

    /// Ask the server for a new game id
    fn create_game(&mut self, request: &CreateGameRequest) -> Result<CreatedGame, TransportError>;
}

/// Loopback transport over a crossbeam channel
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    outbound: Sender<OutboundFrame>,
}

impl ChannelTransport {
    pub fn new(outbound: Sender<OutboundFrame>) -> Self {
        Self { outbound }
    }

    /// Transport plus the receiving end for the relay
    pub fn pair() -> (ChannelTransport, Receiver<OutboundFrame>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (ChannelTransport::new(tx), rx)
    }

    fn send(&self, frame: OutboundFrame) -> Result<(), TransportError> {
        self.outbound.send(frame).map_err(|_| {
            warn!("[NETWORK] Relay is gone, frame dropped");
            TransportError::Closed
        })
    }
}

impl Transport for ChannelTransport {
    fn publish(&mut self, destination: &str, message: &ClientMessage) -> Result<(), TransportError> {
        let body = message.to_json()?;
        debug!("[NETWORK] -> {} {}", destination, message.route());
        self.send(OutboundFrame::Publish {
            destination: destination.to_string(),
            body,
        })
    }

    fn subscribe(&mut self, topic: &str) -> Result<(), TransportError> {
        self.send(OutboundFrame::Subscribe {
            topic: topic.to_string(),
        })
    }

    fn unsubscribe(&mut self, topic: &str) -> Result<(), TransportError> {
        self.send(OutboundFrame::Unsubscribe {
            topic: topic.to_string(),
        })
    }

    /// Ids are minted locally; the request is still forwarded so the relay
    /// can register the creator
    fn create_game(&mut self, request: &CreateGameRequest) -> Result<CreatedGame, TransportError> {
        let body = serde_json::to_string(request).map_err(ProtocolError::from)?;
        self.send(OutboundFrame::Publish {
            destination: CREATE_GAME_PATH.to_string(),
            body,
        })?;
        Ok(CreatedGame {
            game_id: topics::new_game_id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_forwards_json() {
        let (mut transport, rx) = ChannelTransport::pair();
        let message = ClientMessage::Resign {
            player_id: "player_1".into(),
        };
        transport.publish("/app/game/g/resign", &message).unwrap();
        match rx.try_recv().unwrap() {
            OutboundFrame::Publish { destination, body } => {
                assert_eq!(destination, "/app/game/g/resign");
                assert!(body.contains("\"type\":\"resign\""));
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_closed_relay_reports_failure() {
        let (mut transport, rx) = ChannelTransport::pair();
        drop(rx);
        let err = transport.subscribe("/topic/game/g").unwrap_err();
        assert_eq!(err.to_string(), "Failed to connect to server");
    }

    #[test]
    fn test_create_game_mints_id() {
        let (mut transport, rx) = ChannelTransport::pair();
        let created = transport
            .create_game(&CreateGameRequest {
                player_id: "player_1".into(),
                player_name: "Ann".into(),
            })
            .unwrap();
        assert!(!created.game_id.is_empty());
        assert!(matches!(
            rx.try_recv().unwrap(),
            OutboundFrame::Publish { destination, .. } if destination == CREATE_GAME_PATH
        ));
    }
}
