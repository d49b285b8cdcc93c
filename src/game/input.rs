//! Board click handling
//!
//! Clicks drive a small selection state machine:
//!
//! ```text
//! nothing selected --click own piece--> selected (destinations highlighted)
//! selected --click same square--------> nothing selected
//! selected --click legal destination--> move committed
//! selected --click other own piece----> reselected
//! selected --click anything else------> nothing selected
//! ```
//!
//! What a committed move does (apply locally or send an intent) is up to the
//! caller. Networked games first pass the [`TurnGate`].

use crate::game::error::RejectReason;
use crate::game::phase::GamePhase;
use crate::game::state::{ChessGame, MoveReport};
use chess_engine::{Color, Square};

/// A highlighted target square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub square: Square,
    /// Occupied by an enemy piece (en passant targets count as quiet)
    pub capture: bool,
}

/// Result of one click, for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Selected {
        from: Square,
        destinations: Vec<Destination>,
    },
    Deselected,
    /// Offline move applied
    Moved(MoveReport),
    /// Pawn reached its last row; a piece choice is needed
    PromotionRequired { square: Square, color: Color },
    /// Networked move intent published, waiting for the server
    IntentSent { notation: String },
    Rejected(RejectReason),
}

/// What the selection machine decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionStep {
    Ignored,
    Selected {
        from: Square,
        destinations: Vec<Destination>,
    },
    Deselected,
    Commit { from: Square, to: Square },
    /// Clicked an enemy piece with nothing selected
    ForeignPiece,
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<Square>,
    destinations: Vec<Destination>,
}

impl Selection {
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.destinations.clear();
    }

    /// Advance the selection with a click on `square` by the `mover` side
    pub fn click(&mut self, game: &ChessGame, square: Square, mover: Color) -> SelectionStep {
        if let Some(from) = self.selected {
            if from == square {
                self.clear();
                return SelectionStep::Deselected;
            }
            if self.destinations.iter().any(|d| d.square == square) {
                self.clear();
                return SelectionStep::Commit { from, to: square };
            }
        }

        match game.board().piece_at(square) {
            Some(piece) if piece.color == mover => {
                let destinations: Vec<Destination> = game
                    .legal_destinations(square)
                    .into_iter()
                    .map(|to| Destination {
                        square: to,
                        capture: game.board().is_occupied_by(to, mover.opponent()),
                    })
                    .collect();
                self.selected = Some(square);
                self.destinations = destinations.clone();
                SelectionStep::Selected {
                    from: square,
                    destinations,
                }
            }
            Some(_) if self.selected.is_none() => SelectionStep::ForeignPiece,
            _ if self.selected.is_some() => {
                self.clear();
                SelectionStep::Deselected
            }
            _ => SelectionStep::Ignored,
        }
    }
}

/// Preconditions for board input in a networked game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnGate {
    pub connected: bool,
    pub both_players_present: bool,
    pub assigned: Option<Color>,
}

impl TurnGate {
    /// The local color if it may act now
    pub fn check(&self, game: &ChessGame) -> Result<Color, RejectReason> {
        match game.phase() {
            GamePhase::Over(_) => return Err(RejectReason::GameOver),
            GamePhase::AwaitingPromotion => return Err(RejectReason::AwaitingPromotion),
            _ => {}
        }
        if !self.connected {
            return Err(RejectReason::NotConnected);
        }
        if !self.both_players_present {
            return Err(RejectReason::WaitingForOpponent);
        }
        let you = self.assigned.ok_or(RejectReason::NoColorAssigned)?;
        if game.active() != you {
            return Err(RejectReason::NotYourTurn {
                you,
                active: game.active(),
            });
        }
        Ok(you)
    }
}
