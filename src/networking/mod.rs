//! Networking module - keeping a local game in step with the server
//!
//! - `session` - [`MatchContext`]: mode, ids, seats, connection, subscriptions
//! - `transport` - the publish/subscribe seam and a crossbeam loopback
//! - `client` - [`SyncClient`], the event-driven owner of game and context

pub mod client;
pub mod session;
pub mod transport;

pub use client::{ControlStates, SyncClient};
pub use session::{ConnectionStatus, MatchContext, PlayMode, PlayerSession};
pub use transport::{ChannelTransport, InboundFrame, OutboundFrame, Transport, TransportError};
