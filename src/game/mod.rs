//! Game module - turn order, promotion, clock and bookkeeping
//!
//! Wraps the pure rules in `chess_engine` with everything a playable game
//! needs on top of a position.
//!
//! # Module Organization
//!
//! - `state` - [`ChessGame`], the only owner of the board and its derived data
//! - `phase` - lifecycle (`Setup`, `InProgress`, `AwaitingPromotion`, `Over`)
//!   and end results
//! - `promotion` - pending pawn promotion
//! - `clock` - per-player countdown and the once-a-second ticker task
//! - `history` - move list with full-move numbers
//! - `captured` - captured pieces and material balance
//! - `input` - click selection and the networked turn gate
//! - `events` - events consumed by the event loop and notices it emits
//! - `error` - rejected input and other game errors
//!
//! # Event Flow
//!
//! 1. A click, promotion choice, action, tick or inbound frame arrives as a
//!    [`events::ClientEvent`]
//! 2. The owner (`networking::SyncClient`) routes it to one entry point on
//!    [`ChessGame`]
//! 3. The entry point runs to completion before the next event is taken

pub mod captured;
pub mod clock;
pub mod error;
pub mod events;
pub mod history;
pub mod input;
pub mod phase;
pub mod promotion;
pub mod state;

pub use clock::{format_time, ClockTicker, GameClock};
pub use error::{GameError, GameResult, RejectReason};
pub use events::{ClientEvent, Notice, NoticeLevel, UserAction};
pub use input::{ClickOutcome, Destination, Selection};
pub use phase::{EndReason, GameOutcome, GamePhase};
pub use state::{ChessGame, MovePreview, MoveReport};
