//! Game phase and outcome
//!
//! ```text
//! Setup → InProgress ⇄ AwaitingPromotion
//!              ↓
//!         Over(outcome)
//! ```
//!
//! `Over` is terminal; only an explicit new game leaves it.

use chess_engine::Color;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    Resignation,
    DrawAgreement,
    Timeout,
    /// Ended by the server without a reason we can reconstruct
    Declared,
}

/// Final result: reason plus winner (`None` for a draw)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub reason: EndReason,
    pub winner: Option<Color>,
}

impl GameOutcome {
    pub fn new(reason: EndReason, winner: Option<Color>) -> Self {
        Self { reason, winner }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Status line shown when the game ends
    pub fn message(&self) -> String {
        match (self.reason, self.winner) {
            (EndReason::Checkmate, Some(winner)) => format!("Checkmate! {} wins!", winner.title()),
            (EndReason::Stalemate, _) => "Stalemate! The game is a draw.".to_string(),
            (EndReason::Resignation, Some(winner)) => {
                format!("{} wins by resignation", winner.title())
            }
            (EndReason::DrawAgreement, _) => "Game ended in a draw (mutual agreement)".to_string(),
            (EndReason::Timeout, Some(winner)) => format!("{} wins by timeout!", winner.title()),
            (_, Some(winner)) => format!("{} wins!", winner.title()),
            (_, None) => "Game ended in a draw".to_string(),
        }
    }
}

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// No half-move played yet (local) or waiting for both seats (networked)
    #[default]
    Setup,
    InProgress,
    /// A pawn reached the last row and its piece choice is outstanding
    AwaitingPromotion,
    Over(GameOutcome),
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Over(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GamePhase::Over(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
