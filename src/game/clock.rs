//! Per-player countdown clock
//!
//! Two pieces:
//!
//! - [`GameClock`]: the remaining time for each color, in whole seconds. Pure
//!   data, ticked by the game state machine.
//! - [`ClockTicker`]: a tokio interval task that posts a
//!   [`ClientEvent::ClockTick`] into the client event queue once per second.
//!   It never touches the clock itself, so every decrement happens inside the
//!   event loop like any other event.
//!
//! # Epochs
//!
//! Each [`ClockTicker::start`] bumps an epoch and the task stamps every tick
//! with it. A tick that was already queued when the ticker restarted carries
//! the old epoch and is ignored by [`ClockTicker::accepts`].

use crate::game::events::ClientEvent;
use chess_engine::Color;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Remaining-time threshold for the low-time indicator
pub const LOW_TIME_SECS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    pub enabled: bool,
    /// Starting allowance per player
    pub time_per_player: u32,
    pub white_left: u32,
    pub black_left: u32,
    running: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::disabled()
    }
}

impl GameClock {
    /// Enabled clock with `time_per_player` seconds each
    pub fn new(time_per_player: u32) -> Self {
        Self {
            enabled: true,
            time_per_player,
            white_left: time_per_player,
            black_left: time_per_player,
            running: false,
        }
    }

    /// Clock that never runs (10 minutes shown, never decremented)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(600)
        }
    }

    /// Start counting; no-op on a disabled clock
    pub fn start(&mut self) {
        if self.enabled {
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Take one second off `active`'s time
    ///
    /// Returns the flagged color when that reaches zero. A clock that is not
    /// running ignores ticks entirely.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut clock = GameClock::new(1);
    /// clock.start();
    /// assert_eq!(clock.tick(Color::White), Some(Color::White));
    /// ```
    pub fn tick(&mut self, active: Color) -> Option<Color> {
        if !self.running {
            return None;
        }
        let left = match active {
            Color::White => &mut self.white_left,
            Color::Black => &mut self.black_left,
        };
        *left = left.saturating_sub(1);
        if *left == 0 {
            self.running = false;
            Some(active)
        } else {
            None
        }
    }

    pub fn remaining(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_left,
            Color::Black => self.black_left,
        }
    }

    pub fn is_low_time(&self, color: Color) -> bool {
        self.enabled && self.remaining(color) < LOW_TIME_SECS
    }

    /// Change the allowance and refill both sides
    pub fn configure(&mut self, enabled: bool, time_per_player: u32) {
        *self = Self {
            enabled,
            ..Self::new(time_per_player)
        };
    }

    /// Refill both sides with the current allowance and stop
    pub fn reset(&mut self) {
        self.configure(self.enabled, self.time_per_player);
    }
}

/// Render seconds as `m:ss`
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Owner of the single live per-second tick task
#[derive(Debug, Default)]
pub struct ClockTicker {
    handle: Option<JoinHandle<()>>,
    epoch: u64,
}

impl ClockTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start the tick task, cancelling any live one first
    ///
    /// Needs a tokio runtime; without one the clock simply never ticks.
    pub fn start(&mut self, sink: UnboundedSender<ClientEvent>) {
        self.stop();
        self.epoch += 1;
        let epoch = self.epoch;

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!("[CLOCK] No async runtime, clock ticks disabled: {}", e);
                return;
            }
        };

        self.handle = Some(runtime.spawn(async move {
            let period = Duration::from_secs(1);
            let mut interval =
                tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                interval.tick().await;
                if sink.send(ClientEvent::ClockTick { epoch }).is_err() {
                    debug!("[CLOCK] Event queue closed, ticker exiting");
                    break;
                }
            }
        }));
        debug!("[CLOCK] Ticker started (epoch {})", epoch);
    }

    /// Cancel the live task, if any
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("[CLOCK] Ticker stopped (epoch {})", self.epoch);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Does a tick stamped with `epoch` come from the live task?
    pub fn accepts(&self, epoch: u64) -> bool {
        self.handle.is_some() && epoch == self.epoch
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
