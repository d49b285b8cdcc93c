//! UI module - text presentation and command input
//!
//! The board itself is drawn by whatever front-end embeds the client. This
//! module provides what every front-end needs:
//!
//! - **view**: glyphs, board perspective, status/timer/connection lines and a
//!   text board
//! - **commands**: text input translated into the click, promotion and action
//!   events a graphical board would send

pub mod commands;
pub mod view;

pub use commands::{parse_command, Command};
