//! Core module - application infrastructure
//!
//! - [`error`]: core error types
//! - [`settings`]: persisted client preferences (player name, server URL,
//!   timer defaults, connection timeout)

pub mod error;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use settings::ClientSettings;
