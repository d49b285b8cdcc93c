//! Client-side sync adapter
//!
//! [`SyncClient`] is the single owner of a [`ChessGame`] plus the
//! [`MatchContext`] describing the match around it. Every event goes through
//! [`SyncClient::handle_event`] and runs to completion.
//!
//! # Modes
//!
//! - **Local**: clicks are applied straight to the game.
//! - **Networked**: clicks pass the turn gate, then become move intents
//!   published to the server. The board only changes when the server echoes
//!   the move back or sends a snapshot, so a rejected intent needs no rollback.
//!
//! # Inbound dispatch
//!
//! One dispatcher keyed by message type handles both the game topic and the
//! player topic. Frames on topics we are no longer subscribed to belong to a
//! superseded match and are dropped before parsing.

use crate::core::settings::ClientSettings;
use crate::game::clock::{ClockTicker, GameClock};
use crate::game::error::{GameError, RejectReason};
use crate::game::events::{ClientEvent, Notice, UserAction};
use crate::game::input::{ClickOutcome, Selection, SelectionStep, TurnGate};
use crate::game::phase::{EndReason, GameOutcome};
use crate::game::promotion::PendingPromotion;
use crate::game::state::{ChessGame, MovePreview};
use crate::networking::session::{ConnectionStatus, MatchContext, PlayMode};
use crate::networking::transport::{InboundFrame, Transport};
use chess_engine::notation::with_promotion;
use chess_engine::{Color, PieceType, Square};
use shared::protocol::{ClientMessage, CreateGameRequest, GameSnapshot, MovePayload, ServerMessage};
use shared::topics;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Which controls the front-end should enable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlStates {
    pub new_game: bool,
    pub multiplayer: bool,
    pub resign: bool,
    pub offer_draw: bool,
}

pub struct SyncClient {
    game: ChessGame,
    context: MatchContext,
    selection: Selection,
    transport: Option<Box<dyn Transport>>,
    ticker: ClockTicker,
    tick_sink: Option<UnboundedSender<ClientEvent>>,
    /// Networked promotion move waiting for the piece choice before sending
    pending_intent: Option<MovePreview>,
    notices: Vec<Notice>,
}

impl SyncClient {
    pub fn new(settings: &ClientSettings) -> Self {
        let clock = if settings.timer_enabled {
            GameClock::new(settings.time_per_player_secs)
        } else {
            GameClock::disabled()
        };
        Self {
            game: ChessGame::new(clock),
            context: MatchContext::new(settings.player_name.clone()),
            selection: Selection::default(),
            transport: None,
            ticker: ClockTicker::new(),
            tick_sink: None,
            pending_intent: None,
            notices: Vec::new(),
        }
    }

    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Queue that receives clock ticks
    pub fn with_tick_sink(mut self, sink: UnboundedSender<ClientEvent>) -> Self {
        self.tick_sink = Some(sink);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn game(&self) -> &ChessGame {
        &self.game
    }

    pub fn context(&self) -> &MatchContext {
        &self.context
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn ticker(&self) -> &ClockTicker {
        &self.ticker
    }

    /// Promotion waiting on the local player's choice, in either mode
    pub fn awaiting_promotion(&self) -> Option<PendingPromotion> {
        self.game.pending_promotion().or_else(|| {
            self.pending_intent.as_ref().map(|p| PendingPromotion {
                square: p.mv.to,
                color: p.piece.color,
                captured: p.captured,
            })
        })
    }

    /// Take the notices produced since the last call
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn controls(&self) -> ControlStates {
        let over = self.game.is_over();
        let in_progress = match self.context.mode {
            PlayMode::Networked => self.context.connection.is_connected() && !over,
            PlayMode::Local => self.game.has_started() && !over,
        };
        ControlStates {
            new_game: !in_progress,
            multiplayer: !in_progress,
            resign: in_progress,
            offer_draw: in_progress,
        }
    }

    // ========================================================================
    // Event entry point
    // ========================================================================

    /// Process one event to completion
    ///
    /// Board clicks and promotion choices return what the renderer should
    /// show; everything else reports through notices.
    pub fn handle_event(&mut self, event: ClientEvent) -> Option<ClickOutcome> {
        let outcome = match event {
            ClientEvent::SquareClick { row, col } => Some(self.handle_square_click(row, col)),
            ClientEvent::PromotionChoice(piece_type) => Some(self.choose_promotion(piece_type)),
            ClientEvent::Action(action) => {
                if let Err(reason) = self.handle_action(action) {
                    self.notices.push(Notice::warning(reason.to_string()));
                }
                None
            }
            ClientEvent::ClockTick { epoch } => {
                self.on_clock_tick(epoch);
                None
            }
            ClientEvent::Inbound(frame) => {
                self.handle_inbound(frame);
                None
            }
            ClientEvent::ConnectionChanged(status) => {
                self.set_connection(status);
                None
            }
        };
        self.sync_ticker();
        outcome
    }

    pub fn handle_action(&mut self, action: UserAction) -> Result<(), RejectReason> {
        match action {
            UserAction::NewGame => self.new_game(),
            UserAction::CreateGame => self.create_game(),
            UserAction::JoinGame(game_id) => self.join_game(&game_id),
            UserAction::Resign => self.resign(),
            UserAction::OfferDraw => self.offer_draw(),
            UserAction::AcceptDraw => self.accept_draw(),
            UserAction::DeclineDraw => self.decline_draw(),
            UserAction::Disconnect => {
                self.disconnect();
                Ok(())
            }
            UserAction::ResetToLocal => {
                self.reset_to_local();
                Ok(())
            }
            UserAction::ConfigureTimer { enabled, minutes } => {
                self.configure_timer(enabled, minutes.saturating_mul(60))
            }
        }
    }

    // ========================================================================
    // Board input
    // ========================================================================

    pub fn handle_square_click(&mut self, row: u8, col: u8) -> ClickOutcome {
        let Ok(square) = Square::new(row, col) else {
            return ClickOutcome::Ignored;
        };

        let mover = if self.context.is_networked() {
            if self.pending_intent.is_some() {
                return self.reject(RejectReason::AwaitingPromotion);
            }
            let gate = TurnGate {
                connected: self.context.connection.is_connected(),
                both_players_present: self.context.both_players_present(),
                assigned: self.context.assigned_color,
            };
            match gate.check(&self.game) {
                Ok(you) => you,
                Err(reason) => return self.reject(reason),
            }
        } else {
            if self.game.is_over() {
                return self.reject(RejectReason::GameOver);
            }
            if self.game.pending_promotion().is_some() {
                return self.reject(RejectReason::AwaitingPromotion);
            }
            self.game.active()
        };

        match self.selection.click(&self.game, square, mover) {
            SelectionStep::Ignored => ClickOutcome::Ignored,
            SelectionStep::Deselected => ClickOutcome::Deselected,
            SelectionStep::Selected { from, destinations } => {
                ClickOutcome::Selected { from, destinations }
            }
            SelectionStep::ForeignPiece if self.context.is_networked() => {
                self.reject(RejectReason::NotYourPiece { you: mover })
            }
            SelectionStep::ForeignPiece => ClickOutcome::Ignored,
            SelectionStep::Commit { from, to } => {
                if self.context.is_networked() {
                    self.send_move_intent(from, to)
                } else {
                    self.apply_local_move(from, to)
                }
            }
        }
    }

    /// Piece choice for a pawn on its last row
    pub fn choose_promotion(&mut self, piece_type: PieceType) -> ClickOutcome {
        if !piece_type.is_promotion_choice() {
            return self.reject(RejectReason::InvalidPromotionPiece);
        }

        if self.context.is_networked() {
            let Some(preview) = self.pending_intent.take() else {
                return self.reject(RejectReason::NoPromotionPending);
            };
            let notation = with_promotion(&preview.notation, piece_type);
            info!("[PROMOTION] Sending promotion to {}", piece_type);
            self.publish_move(&preview, Some(piece_type));
            return ClickOutcome::IntentSent { notation };
        }

        match self.game.apply_promotion_choice(piece_type) {
            Ok(report) => {
                self.announce(report.outcome);
                ClickOutcome::Moved(report)
            }
            Err(e) => self.reject_error(e),
        }
    }

    fn apply_local_move(&mut self, from: Square, to: Square) -> ClickOutcome {
        match self.game.apply_move(from, to) {
            Ok(report) if report.promotion_pending => ClickOutcome::PromotionRequired {
                square: to,
                color: self.game.active(),
            },
            Ok(report) => {
                self.announce(report.outcome);
                ClickOutcome::Moved(report)
            }
            Err(e) => self.reject_error(e),
        }
    }

    fn send_move_intent(&mut self, from: Square, to: Square) -> ClickOutcome {
        let preview = match self.game.preview(from, to) {
            Ok(preview) => preview,
            Err(e) => return self.reject_error(e),
        };
        if preview.is_promotion() {
            let color = preview.piece.color;
            self.pending_intent = Some(preview);
            return ClickOutcome::PromotionRequired { square: to, color };
        }
        let notation = preview.notation.clone();
        self.publish_move(&preview, None);
        ClickOutcome::IntentSent { notation }
    }

    fn publish_move(&mut self, preview: &MovePreview, promotion: Option<PieceType>) {
        let notation = match promotion {
            Some(piece_type) => with_promotion(&preview.notation, piece_type),
            None => preview.notation.clone(),
        };
        let payload = MovePayload {
            from_row: preview.mv.from.row(),
            from_col: preview.mv.from.col(),
            to_row: preview.mv.to.row(),
            to_col: preview.mv.to.col(),
            player_id: self.context.player_id.clone(),
            player_color: Some(preview.piece.color),
            piece: preview.piece.piece_type,
            captured_piece: preview.captured.map(|p| p.piece_type),
            notation,
            timestamp: chrono::Utc::now().to_rfc3339(),
            promotion,
        };
        let message = ClientMessage::Move {
            player_id: self.context.player_id.clone(),
            mv: payload,
        };
        self.publish(message);
    }

    // ========================================================================
    // Actions
    // ========================================================================

    pub fn new_game(&mut self) -> Result<(), RejectReason> {
        if !self.controls().new_game {
            return Err(RejectReason::MatchInProgress);
        }
        if self.context.is_networked() {
            self.leave_match();
        }
        self.restart_board();
        info!("[GAME] New local game");
        Ok(())
    }

    /// Ask the server for a game and join it as White
    pub fn create_game(&mut self) -> Result<(), RejectReason> {
        if !self.controls().multiplayer {
            return Err(RejectReason::MatchInProgress);
        }
        let request = CreateGameRequest {
            player_id: self.context.player_id.clone(),
            player_name: self.context.player_name.clone(),
        };
        let Some(transport) = self.transport.as_mut() else {
            self.connection_failed("Failed to connect to server".to_string());
            return Err(RejectReason::NotConnected);
        };
        self.context.connection = ConnectionStatus::Connecting;
        let created = match transport.create_game(&request) {
            Ok(created) => created,
            Err(e) => {
                self.connection_failed(e.to_string());
                return Err(RejectReason::NotConnected);
            }
        };
        info!("[SYNC] Created game {}", created.game_id);
        self.enter_match(&created.game_id, Some(Color::White))?;
        self.notices.push(Notice::info(format!(
            "Game created! Share this ID: {}. Waiting for opponent...",
            created.game_id
        )));
        Ok(())
    }

    pub fn join_game(&mut self, game_id: &str) -> Result<(), RejectReason> {
        if !self.controls().multiplayer {
            return Err(RejectReason::MatchInProgress);
        }
        let game_id = game_id.trim();
        if game_id.is_empty() {
            self.notices.push(Notice::warning("Please enter a game ID"));
            return Ok(());
        }
        self.notices.push(Notice::info(format!(
            "Attempting to join game {game_id}..."
        )));
        self.enter_match(game_id, None)
    }

    /// Resign; the local player loses
    pub fn resign(&mut self) -> Result<(), RejectReason> {
        if self.game.is_over() {
            return Err(RejectReason::GameOver);
        }
        let loser = if self.context.is_networked() {
            self.context
                .assigned_color
                .ok_or(RejectReason::NoColorAssigned)?
        } else {
            self.game.active()
        };
        let outcome = self
            .game
            .end_game(EndReason::Resignation, Some(loser.opponent()));
        self.announce(outcome);
        if self.context.is_networked() {
            let message = ClientMessage::Resign {
                player_id: self.context.player_id.clone(),
            };
            self.publish(message);
        }
        Ok(())
    }

    /// Offline: immediate draw. Networked: send the offer
    pub fn offer_draw(&mut self) -> Result<(), RejectReason> {
        if self.game.is_over() {
            return Err(RejectReason::GameOver);
        }
        if !self.context.is_networked() {
            let outcome = self.game.end_game(EndReason::DrawAgreement, None);
            self.announce(outcome);
            return Ok(());
        }
        let message = ClientMessage::DrawOffer {
            player_id: self.context.player_id.clone(),
        };
        if self.publish(message) {
            self.notices.push(Notice::info(
                "Draw offer sent. Waiting for opponent response...",
            ));
        }
        Ok(())
    }

    pub fn accept_draw(&mut self) -> Result<(), RejectReason> {
        if !self.context.incoming_draw_offer {
            return Err(RejectReason::NoDrawOffer);
        }
        self.context.incoming_draw_offer = false;
        let outcome = self.game.end_game(EndReason::DrawAgreement, None);
        self.announce(outcome);
        let message = ClientMessage::DrawAccept {
            player_id: self.context.player_id.clone(),
        };
        self.publish(message);
        Ok(())
    }

    pub fn decline_draw(&mut self) -> Result<(), RejectReason> {
        if !self.context.incoming_draw_offer {
            return Err(RejectReason::NoDrawOffer);
        }
        self.context.incoming_draw_offer = false;
        let message = ClientMessage::DrawDecline {
            player_id: self.context.player_id.clone(),
        };
        self.publish(message);
        self.notices.push(Notice::info("You declined the draw offer."));
        Ok(())
    }

    /// Tell the server we are leaving and drop every subscription
    pub fn disconnect(&mut self) {
        if self.context.is_networked() && self.context.game_id.is_some() {
            let message = ClientMessage::Disconnect {
                player_id: self.context.player_id.clone(),
                player_name: self.context.player_name.clone(),
            };
            self.publish(message);
        }
        self.teardown();
        self.context.connection = ConnectionStatus::Disconnected;
        info!("[SYNC] Disconnected");
    }

    /// Leave any match and start a fresh offline game
    pub fn reset_to_local(&mut self) {
        self.leave_match();
        self.restart_board();
        info!("[SYNC] Local game mode");
    }

    pub fn configure_timer(&mut self, enabled: bool, secs: u32) -> Result<(), RejectReason> {
        match self.game.configure_clock(enabled, secs) {
            Ok(()) => Ok(()),
            Err(GameError::InputRejected { reason }) => Err(reason),
            Err(e) => {
                warn!("[CLOCK] Timer change failed: {}", e);
                Err(RejectReason::TimerAfterStart)
            }
        }
    }

    // ========================================================================
    // Inbound
    // ========================================================================

    /// Single dispatcher for every inbound frame
    pub fn handle_inbound(&mut self, frame: InboundFrame) {
        if !self.context.is_subscribed(&frame.topic) {
            debug!("[SYNC] Dropping frame on stale topic {}", frame.topic);
            return;
        }
        let message = match ServerMessage::parse(&frame.body) {
            Ok(message) => message,
            Err(e) => {
                warn!("[SYNC] Dropping malformed frame on {}: {}", frame.topic, e);
                return;
            }
        };
        debug!("[SYNC] <- {} on {}", message.kind(), frame.topic);

        match message {
            ServerMessage::Move { mv, game_state, .. } => {
                self.selection.clear();
                match self.game.apply_remote_move(&mv) {
                    Ok(report) => self.announce(report.outcome),
                    Err(e) => warn!("[SYNC] Could not replay move {}: {}", mv.notation, e),
                }
                if let Some(snapshot) = game_state {
                    self.apply_snapshot(&snapshot);
                }
            }
            ServerMessage::MoveError { error } => {
                warn!("[SYNC] Server rejected move: {}", error);
                let e = GameError::ServerRejectedMove { message: error };
                self.notices.push(Notice::error(e.to_string()));
            }
            ServerMessage::Resign { player_id } => {
                if self.is_own(player_id.as_deref()) {
                    return;
                }
                let resigner = player_id
                    .as_deref()
                    .and_then(|id| self.seat_of_id(id))
                    .or_else(|| self.context.assigned_color.map(Color::opponent));
                if let Some(resigner) = resigner {
                    let outcome = self
                        .game
                        .end_game(EndReason::Resignation, Some(resigner.opponent()));
                    self.announce(outcome);
                }
            }
            ServerMessage::DrawOffer { player_id } => {
                if self.is_own(player_id.as_deref()) || self.game.is_over() {
                    return;
                }
                self.context.incoming_draw_offer = true;
                self.notices
                    .push(Notice::info("Opponent offered a draw. Do you accept?"));
            }
            ServerMessage::DrawAccept { .. } => {
                self.context.incoming_draw_offer = false;
                let outcome = self.game.end_game(EndReason::DrawAgreement, None);
                self.announce(outcome);
            }
            ServerMessage::DrawDecline { player_id } => {
                if self.is_own(player_id.as_deref()) {
                    return;
                }
                self.notices
                    .push(Notice::info("Opponent declined the draw offer."));
            }
            ServerMessage::PlayerJoined {
                player_name,
                game_state,
            } => {
                let name = player_name.unwrap_or_else(|| "Opponent".to_string());
                self.notices.push(Notice::info(format!("{name} joined the game")));
                if let Some(snapshot) = game_state {
                    self.apply_snapshot(&snapshot);
                }
            }
            ServerMessage::PlayerDisconnected { player_name } => {
                let name = player_name.unwrap_or_else(|| "Opponent".to_string());
                self.context.mark_disconnected(&name);
                self.notices.push(Notice::warning(format!("{name} disconnected")));
            }
            ServerMessage::GameStart { game_state } => {
                self.notices
                    .push(Notice::info("Game started! Both players connected."));
                if let Some(snapshot) = game_state {
                    self.apply_snapshot(&snapshot);
                }
            }
            ServerMessage::GameEnd { game_state } => {
                let winner = game_state.as_ref().and_then(|s| s.winner);
                if let Some(snapshot) = game_state {
                    self.apply_snapshot(&snapshot);
                }
                let outcome = self
                    .game
                    .end_game(EndReason::Declared, winner.and_then(|w| w.color()));
                self.announce(outcome);
            }
            ServerMessage::GameJoined { game_state } => self.handle_game_joined(game_state),
            ServerMessage::Error { error } => {
                warn!("[SYNC] Server error: {}", error);
                self.notices.push(Notice::error(format!("Error: {error}")));
            }
        }
    }

    fn handle_game_joined(&mut self, snapshot: GameSnapshot) {
        self.context.mode = PlayMode::Networked;
        if !snapshot.game_id.is_empty() {
            self.context.game_id = Some(snapshot.game_id.clone());
        }
        let Some(color) = self.context.resolve_color(&snapshot) else {
            warn!("[SYNC] No seat for {} in {}", self.context.player_id, snapshot.game_id);
            self.notices.push(Notice::error(
                "Error: Could not determine your color. Try rejoining the game.",
            ));
            return;
        };
        self.context.assigned_color = Some(color);
        info!("[SYNC] Joined as {}", color);
        self.apply_snapshot(&snapshot);

        let game_id = self.context.game_id.clone().unwrap_or_default();
        if self.context.both_players_present() {
            self.notices.push(Notice::info(format!(
                "Game ready. You are {}. {} to move.",
                color,
                self.game.active().title()
            )));
        } else {
            self.notices.push(Notice::info(format!(
                "Waiting for opponent... Share game ID: {game_id}"
            )));
        }
    }

    fn apply_snapshot(&mut self, snapshot: &GameSnapshot) {
        self.context.update_seats(snapshot);
        let was_over = self.game.is_over();
        if let Err(e) = self.game.apply_snapshot(snapshot) {
            warn!("[SYNC] Snapshot ignored: {}", e);
            return;
        }
        self.selection.clear();
        if !was_over {
            self.announce(self.game.outcome());
        }
    }

    // ========================================================================
    // Clock and connection
    // ========================================================================

    fn on_clock_tick(&mut self, epoch: u64) {
        if !self.ticker.accepts(epoch) {
            debug!("[CLOCK] Ignoring stale tick (epoch {})", epoch);
            return;
        }
        let outcome = self.game.tick_clock();
        self.announce(outcome);
    }

    /// Keep the ticker task running exactly while the game clock runs
    fn sync_ticker(&mut self) {
        let wanted = self.game.clock().is_running();
        if wanted && !self.ticker.is_running() {
            if let Some(sink) = self.tick_sink.clone() {
                self.ticker.start(sink);
            }
        } else if !wanted && self.ticker.is_running() {
            self.ticker.stop();
        }
    }

    pub fn set_connection(&mut self, status: ConnectionStatus) {
        match &status {
            ConnectionStatus::Failed(message) => self.connection_failed(message.clone()),
            other => {
                info!("[NETWORK] {}", other);
                self.context.connection = status;
            }
        }
    }

    fn connection_failed(&mut self, message: String) {
        warn!("[NETWORK] {}", message);
        self.notices.push(Notice::error(message.clone()));
        self.context.connection = ConnectionStatus::Failed(message);
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Publish to the current game; false if nothing was sent
    fn publish(&mut self, message: ClientMessage) -> bool {
        let Some(game_id) = self.context.game_id.clone() else {
            warn!("[SYNC] No game to send {} to", message.route());
            return false;
        };
        let Some(transport) = self.transport.as_mut() else {
            self.connection_failed("Failed to connect to server".to_string());
            return false;
        };
        let destination = topics::destination(&game_id, &message);
        match transport.publish(&destination, &message) {
            Ok(()) => true,
            Err(e) => {
                self.connection_failed(e.to_string());
                false
            }
        }
    }

    fn enter_match(&mut self, game_id: &str, color: Option<Color>) -> Result<(), RejectReason> {
        self.teardown();
        self.restart_board();
        self.context.mode = PlayMode::Networked;
        self.context.game_id = Some(game_id.to_string());
        self.context.assigned_color = color;
        self.context.white = None;
        self.context.black = None;
        self.context.incoming_draw_offer = false;
        self.context.connection = ConnectionStatus::Connecting;

        let Some(transport) = self.transport.as_mut() else {
            self.connection_failed("Failed to connect to server".to_string());
            return Err(RejectReason::NotConnected);
        };
        let wanted = [
            topics::game_topic(game_id),
            topics::player_topic(game_id, &self.context.player_id),
        ];
        for topic in wanted {
            if let Err(e) = transport.subscribe(&topic) {
                self.connection_failed(e.to_string());
                return Err(RejectReason::NotConnected);
            }
            self.context.add_subscription(topic);
        }
        self.context.connection = ConnectionStatus::Connected;

        let join = ClientMessage::Join {
            player_id: self.context.player_id.clone(),
            player_name: self.context.player_name.clone(),
        };
        if !self.publish(join) {
            return Err(RejectReason::NotConnected);
        }
        info!("[SYNC] Joining game {}", game_id);
        Ok(())
    }

    /// Stop the ticker and drop every subscription
    fn teardown(&mut self) {
        self.ticker.stop();
        let subscriptions = self.context.take_subscriptions();
        if let Some(transport) = self.transport.as_mut() {
            for topic in subscriptions {
                if let Err(e) = transport.unsubscribe(&topic) {
                    debug!("[SYNC] Unsubscribe from {} failed: {}", topic, e);
                }
            }
        }
    }

    fn leave_match(&mut self) {
        self.disconnect();
        self.context.reset_to_local();
    }

    fn restart_board(&mut self) {
        self.ticker.stop();
        self.game.reset();
        self.selection.clear();
        self.pending_intent = None;
    }

    fn is_own(&self, player_id: Option<&str>) -> bool {
        player_id == Some(self.context.player_id.as_str())
    }

    fn seat_of_id(&self, player_id: &str) -> Option<Color> {
        [self.context.white.as_ref(), self.context.black.as_ref()]
            .into_iter()
            .flatten()
            .find(|seat| seat.id == player_id)
            .map(|seat| seat.color)
    }

    fn announce(&mut self, outcome: Option<GameOutcome>) {
        if let Some(outcome) = outcome {
            self.selection.clear();
            self.notices.push(Notice::info(outcome.message()));
        }
    }

    fn reject(&mut self, reason: RejectReason) -> ClickOutcome {
        debug!("[GAME] Input rejected: {}", reason);
        self.notices.push(Notice::warning(reason.to_string()));
        ClickOutcome::Rejected(reason)
    }

    fn reject_error(&mut self, error: GameError) -> ClickOutcome {
        match error {
            GameError::InputRejected { reason } => self.reject(reason),
            other => {
                warn!("[GAME] Move failed: {}", other);
                self.notices.push(Notice::error(other.to_string()));
                ClickOutcome::Rejected(RejectReason::IllegalMove)
            }
        }
    }
}
