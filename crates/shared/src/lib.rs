//! Wire protocol for the networked chess client
//!
//! Everything the client and the game server exchange is JSON over a
//! publish/subscribe channel scoped to a game id:
//!
//! - [`protocol`]: inbound and outbound message envelopes, move and snapshot
//!   payloads
//! - [`codec`]: the `boardState` string carried inside snapshots
//! - [`topics`]: subscription topics, publish destinations and id generation

pub mod codec;
pub mod error;
pub mod protocol;
pub mod topics;

pub use error::{ProtocolError, ProtocolResult};
