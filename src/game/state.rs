//! Game state machine
//!
//! [`ChessGame`] owns the position together with everything derived from play:
//! side to move, phase, history, captured pieces, pending promotion, check
//! flag and clock. It is only mutated through its entry points:
//!
//! | Entry point | Trigger |
//! |---|---|
//! | [`ChessGame::apply_move`] | local move (offline play) |
//! | [`ChessGame::apply_promotion_choice`] | piece picked for a promoting pawn |
//! | [`ChessGame::apply_remote_move`] | authoritative move broadcast |
//! | [`ChessGame::apply_snapshot`] | authoritative full state |
//! | [`ChessGame::end_game`] | resignation, draw agreement, server game end |
//! | [`ChessGame::tick_clock`] | one second of the active side's time |
//! | [`ChessGame::reset`] | new game |
//!
//! Local moves go through the legality filter. Remote moves and snapshots are
//! trusted as they arrive.

use crate::game::captured::CapturedPieces;
use crate::game::clock::GameClock;
use crate::game::error::{GameResult, RejectReason};
use crate::game::history::MoveHistory;
use crate::game::phase::{EndReason, GameOutcome, GamePhase};
use crate::game::promotion::PendingPromotion;
use chess_engine::notation::{move_notation, promotion_from_notation, with_promotion};
use chess_engine::{
    is_in_check, is_legal_move, legal_destinations, side_status, Board, CastlingRights,
    ChessEngineError, Color, Move, MoveKind, Piece, PieceType, Position, SideStatus, Square,
};
use shared::codec::decode_board_state;
use shared::protocol::{GameSnapshot, MovePayload, WireStatus};
use tracing::{debug, info};

/// A validated local move, not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePreview {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Notation before any promotion suffix
    pub notation: String,
}

impl MovePreview {
    pub fn is_promotion(&self) -> bool {
        self.mv.kind == MoveKind::Promotion
    }
}

/// What a completed (or suspended) half-move did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub notation: String,
    pub captured: Option<Piece>,
    /// The pawn is waiting on the last row for a piece choice
    pub promotion_pending: bool,
    /// Side to move is in check (and not mated)
    pub check: bool,
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, Default)]
pub struct ChessGame {
    position: Position,
    active: Color,
    phase: GamePhase,
    history: MoveHistory,
    captured: CapturedPieces,
    pending_promotion: Option<PendingPromotion>,
    in_check: bool,
    clock: GameClock,
}

impl ChessGame {
    /// Standard start, White to move, with the given clock
    pub fn new(clock: GameClock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    /// Game starting from an arbitrary position
    pub fn from_position(position: Position, active: Color) -> Self {
        let mut game = Self {
            position,
            active,
            ..Self::default()
        };
        game.in_check = is_in_check(&game.position.board, active);
        game
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    pub fn active(&self) -> Color {
        self.active
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.phase.outcome()
    }

    /// Has any half-move been played or the match been marked live?
    pub fn has_started(&self) -> bool {
        self.phase != GamePhase::Setup || !self.history.is_empty()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    pub fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Legal destinations of the piece on `from`, for highlighting
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.position, from)
    }

    // ========================================================================
    // Local moves
    // ========================================================================

    /// Validate `from` -> `to` for the side to move without applying it
    pub fn preview(&self, from: Square, to: Square) -> GameResult<MovePreview> {
        if let Some(outcome) = self.refusal() {
            return Err(outcome.into());
        }
        let piece = self
            .position
            .board
            .piece_at(from)
            .ok_or(RejectReason::EmptySquare)?;
        if piece.color != self.active {
            return Err(RejectReason::NotYourPiece { you: self.active }.into());
        }
        if !is_legal_move(&self.position, from, to) {
            return Err(RejectReason::IllegalMove.into());
        }

        let mv = Move::new(&self.position, from, to)?;
        let captured = match mv.kind {
            MoveKind::EnPassant { captured_square } => self.position.board.piece_at(captured_square),
            _ => self.position.board.piece_at(to),
        };
        let notation = move_notation(piece, from, to, captured.is_some(), mv.kind);
        Ok(MovePreview {
            mv,
            piece,
            captured,
            notation,
        })
    }

    /// Play a legal move for the side to move
    ///
    /// A pawn reaching its last row leaves the game in
    /// [`GamePhase::AwaitingPromotion`] with the turn unchanged.
    ///
    /// # Errors
    ///
    /// Input is refused (nothing changes) when the game is over, a promotion is
    /// outstanding, the origin is empty or holds the other side's piece, or
    /// the move is not legal.
    pub fn apply_move(&mut self, from: Square, to: Square) -> GameResult<MoveReport> {
        let preview = self.preview(from, to)?;
        self.position.apply(&preview.mv)?;
        if let Some(piece) = preview.captured {
            self.captured.add(piece);
        }
        self.history.push(self.active, preview.notation.clone());
        self.mark_started();

        if preview.is_promotion() {
            self.pending_promotion = Some(PendingPromotion {
                square: to,
                color: self.active,
                captured: preview.captured,
            });
            self.phase = GamePhase::AwaitingPromotion;
            info!("[PROMOTION] {} pawn reached {}, awaiting choice", self.active, to);
            return Ok(MoveReport {
                notation: preview.notation,
                captured: preview.captured,
                promotion_pending: true,
                check: false,
                outcome: None,
            });
        }

        let outcome = self.complete_half_move();
        debug!("[GAME] {} played {}", self.active.opponent(), preview.notation);
        Ok(MoveReport {
            notation: preview.notation,
            captured: preview.captured,
            promotion_pending: false,
            check: self.in_check,
            outcome,
        })
    }

    /// Resolve the outstanding promotion and finish the half-move
    pub fn apply_promotion_choice(&mut self, piece_type: PieceType) -> GameResult<MoveReport> {
        if self.is_over() {
            return Err(RejectReason::GameOver.into());
        }
        let pending = self
            .pending_promotion
            .ok_or(RejectReason::NoPromotionPending)?;
        if !piece_type.is_promotion_choice() {
            return Err(RejectReason::InvalidPromotionPiece.into());
        }

        self.position.board.promote(pending.square, piece_type)?;
        self.history.promote_last(piece_type);
        self.pending_promotion = None;
        self.phase = GamePhase::InProgress;
        info!("[PROMOTION] {} pawn on {} promoted to {}", pending.color, pending.square, piece_type);

        let outcome = self.complete_half_move();
        let notation = self
            .history
            .last()
            .map(|e| e.notation.clone())
            .unwrap_or_default();
        Ok(MoveReport {
            notation,
            captured: pending.captured,
            promotion_pending: false,
            check: self.in_check,
            outcome,
        })
    }

    // ========================================================================
    // Authoritative updates
    // ========================================================================

    /// Replay a move broadcast by the server without the legality filter
    ///
    /// Promotion piece comes from the payload, then a `=X` notation suffix,
    /// then defaults to a queen.
    pub fn apply_remote_move(&mut self, payload: &MovePayload) -> GameResult<MoveReport> {
        if self.is_over() {
            return Err(RejectReason::GameOver.into());
        }
        let from = payload.from_square()?;
        let to = payload.to_square()?;
        let piece = self
            .position
            .board
            .piece_at(from)
            .ok_or_else(|| ChessEngineError::NoPieceAtSquare {
                square: from.algebraic(),
            })?;

        let mut mv = Move::new(&self.position, from, to)?;
        let mut promoted = None;
        if mv.kind == MoveKind::Promotion {
            let choice = payload
                .promotion
                .filter(|pt| pt.is_promotion_choice())
                .or_else(|| promotion_from_notation(&payload.notation))
                .unwrap_or(PieceType::Queen);
            mv = mv.with_promotion(choice);
            promoted = Some(choice);
        }

        let undo = self.position.apply(&mv)?;
        let captured = undo.captured();
        if let Some(captured) = captured {
            self.captured.add(captured);
        }

        let notation = if payload.notation.is_empty() {
            let base = move_notation(piece, from, to, captured.is_some(), mv.kind);
            match promoted {
                Some(pt) => with_promotion(&base, pt),
                None => base,
            }
        } else {
            payload.notation.clone()
        };
        self.history.push(piece.color, notation.clone());
        self.pending_promotion = None;
        if self.phase == GamePhase::AwaitingPromotion {
            self.phase = GamePhase::InProgress;
        }
        self.mark_started();

        self.active = piece.color.opponent();
        let outcome = self.evaluate();
        debug!("[GAME] Replayed {} move {}", piece.color, notation);
        Ok(MoveReport {
            notation,
            captured,
            promotion_pending: false,
            check: self.in_check,
            outcome,
        })
    }

    /// Overwrite local state from a server snapshot
    ///
    /// Fields missing from the snapshot keep their local value. Applying the
    /// same snapshot twice leaves the same state. Nothing changes if the board
    /// layout fails to decode.
    pub fn apply_snapshot(&mut self, snapshot: &GameSnapshot) -> GameResult<()> {
        let board = match &snapshot.board_state {
            Some(text) => Some(decode_board_state(text)?),
            None => None,
        };

        if let Some(board) = board {
            let fresh_game = snapshot
                .move_history
                .as_ref()
                .is_some_and(|records| records.is_empty());
            let castling = if fresh_game {
                CastlingRights::from_layout(&board)
            } else {
                self.position.castling.reconcile(&board)
            };
            // The en passant reference only survives if the piece is still
            // where that move left it
            let last_move = self
                .position
                .last_move
                .filter(|lm| board.piece_at(lm.to) == Some(lm.piece));
            self.position = Position {
                board,
                castling,
                last_move,
            };
        }

        if let Some(turn) = snapshot.current_turn {
            self.active = turn;
        }
        if let Some(lists) = &snapshot.captured_pieces {
            self.captured.replace_from(lists);
        }
        if let Some(records) = &snapshot.move_history {
            self.history.replace_from(records);
        }

        self.in_check = is_in_check(&self.position.board, self.active);

        match snapshot.game_status {
            Some(WireStatus::Active) if !self.is_over() => {
                self.pending_promotion = None;
                self.phase = if snapshot.both_players_present() {
                    GamePhase::InProgress
                } else {
                    GamePhase::Setup
                };
            }
            Some(WireStatus::Waiting) if !self.is_over() => {
                self.pending_promotion = None;
                self.phase = GamePhase::Setup;
            }
            Some(status) if status.is_terminal() => {
                if !self.is_over() {
                    let outcome = self.outcome_for(status, snapshot);
                    self.finish(outcome);
                }
            }
            _ => {}
        }

        match self.phase {
            GamePhase::InProgress | GamePhase::AwaitingPromotion => self.clock.start(),
            _ => self.clock.stop(),
        }
        debug!(
            "[SYNC] Snapshot applied: {} to move, phase {:?}, {} moves",
            self.active,
            self.phase,
            self.history.len()
        );
        Ok(())
    }

    /// Externally triggered end (resignation, draw agreement, timeout, server)
    ///
    /// Returns `None` when the game was already over; the first outcome wins.
    pub fn end_game(&mut self, reason: EndReason, winner: Option<Color>) -> Option<GameOutcome> {
        if self.is_over() {
            return None;
        }
        Some(self.finish(GameOutcome::new(reason, winner)))
    }

    /// Take one second off the side to move
    ///
    /// Only counts while a started game is live. A flag ends the game in the
    /// opponent's favour.
    pub fn tick_clock(&mut self) -> Option<GameOutcome> {
        if !matches!(self.phase, GamePhase::InProgress | GamePhase::AwaitingPromotion) {
            return None;
        }
        let flagged = self.clock.tick(self.active)?;
        info!("[CLOCK] {} ran out of time", flagged);
        Some(self.finish(GameOutcome::new(EndReason::Timeout, Some(flagged.opponent()))))
    }

    /// Change the time control; only allowed before the first move
    pub fn configure_clock(&mut self, enabled: bool, time_per_player: u32) -> GameResult<()> {
        if self.has_started() {
            return Err(RejectReason::TimerAfterStart.into());
        }
        self.clock.configure(enabled, time_per_player);
        Ok(())
    }

    /// Back to the standard start, keeping the time control
    pub fn reset(&mut self) {
        let mut clock = self.clock;
        clock.reset();
        *self = Self::new(clock);
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn refusal(&self) -> Option<RejectReason> {
        match self.phase {
            GamePhase::Over(_) => Some(RejectReason::GameOver),
            GamePhase::AwaitingPromotion => Some(RejectReason::AwaitingPromotion),
            _ => None,
        }
    }

    fn mark_started(&mut self) {
        if self.phase == GamePhase::Setup {
            self.phase = GamePhase::InProgress;
            self.clock.start();
            info!("[GAME] Game started");
        }
    }

    fn complete_half_move(&mut self) -> Option<GameOutcome> {
        self.active = self.active.opponent();
        self.evaluate()
    }

    /// Check / mate / stalemate for the side now to move
    fn evaluate(&mut self) -> Option<GameOutcome> {
        match side_status(&self.position, self.active) {
            SideStatus::Checkmate => {
                self.in_check = true;
                Some(self.finish(GameOutcome::new(
                    EndReason::Checkmate,
                    Some(self.active.opponent()),
                )))
            }
            SideStatus::Stalemate => {
                self.in_check = false;
                Some(self.finish(GameOutcome::new(EndReason::Stalemate, None)))
            }
            SideStatus::Check => {
                self.in_check = true;
                None
            }
            SideStatus::Normal => {
                self.in_check = false;
                None
            }
        }
    }

    fn outcome_for(&self, status: WireStatus, snapshot: &GameSnapshot) -> GameOutcome {
        let declared = snapshot.winner.map(|w| w.color());
        match status {
            WireStatus::Checkmate => GameOutcome::new(
                EndReason::Checkmate,
                declared.flatten().or(Some(self.active.opponent())),
            ),
            WireStatus::Stalemate => GameOutcome::new(EndReason::Stalemate, None),
            WireStatus::Draw => GameOutcome::new(EndReason::DrawAgreement, None),
            WireStatus::Resigned => GameOutcome::new(EndReason::Resignation, declared.flatten()),
            WireStatus::Timeout => GameOutcome::new(EndReason::Timeout, declared.flatten()),
            _ => match side_status(&self.position, self.active) {
                SideStatus::Checkmate => {
                    GameOutcome::new(EndReason::Checkmate, Some(self.active.opponent()))
                }
                SideStatus::Stalemate => GameOutcome::new(EndReason::Stalemate, None),
                _ => GameOutcome::new(EndReason::Declared, declared.flatten()),
            },
        }
    }

    fn finish(&mut self, outcome: GameOutcome) -> GameOutcome {
        self.phase = GamePhase::Over(outcome);
        self.pending_promotion = None;
        self.clock.stop();
        info!("[GAME] {}", outcome.message());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::codec::encode_board_state;
    use shared::protocol::{HistoryRecord, PlayerInfo};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn play(game: &mut ChessGame, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            game.apply_move(sq(from), sq(to))
                .unwrap_or_else(|e| panic!("{from}{to} rejected: {e}"));
        }
    }

    fn player(id: &str) -> Option<PlayerInfo> {
        Some(PlayerInfo {
            id: id.to_string(),
            name: id.to_string(),
            connected: true,
        })
    }

    #[test]
    fn test_first_move_starts_game() {
        let mut game = ChessGame::default();
        assert_eq!(game.phase(), GamePhase::Setup);
        play(&mut game, &[("e2", "e4")]);
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.active(), Color::Black);
        assert_eq!(game.history().last().unwrap().notation, "e4");
    }

    #[test]
    fn test_wrong_color_rejected_without_change() {
        let mut game = ChessGame::default();
        let before = *game.position();
        let err = game.apply_move(sq("e7"), sq("e5")).unwrap_err();
        assert_eq!(err.to_string(), "You can only move white pieces!");
        assert_eq!(*game.position(), before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_empty_square_and_illegal_move() {
        let mut game = ChessGame::default();
        assert!(matches!(
            game.apply_move(sq("e4"), sq("e5")),
            Err(crate::game::error::GameError::InputRejected {
                reason: RejectReason::EmptySquare
            })
        ));
        assert!(matches!(
            game.apply_move(sq("e2"), sq("e5")),
            Err(crate::game::error::GameError::InputRejected {
                reason: RejectReason::IllegalMove
            })
        ));
    }

    #[test]
    fn test_fools_mate() {
        let mut game = ChessGame::default();
        play(
            &mut game,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );
        let outcome = game.outcome().expect("game should be over");
        assert_eq!(outcome.reason, EndReason::Checkmate);
        assert_eq!(outcome.winner, Some(Color::Black));
        assert!(game.in_check());
        assert!(game.apply_move(sq("a2"), sq("a3")).is_err());
    }

    #[test]
    fn test_capture_recorded() {
        let mut game = ChessGame::default();
        play(&mut game, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);
        assert_eq!(game.captured().of(Color::Black).len(), 1);
        assert_eq!(game.history().last().unwrap().notation, "exd5");
    }

    #[test]
    fn test_end_game_first_outcome_wins() {
        let mut game = ChessGame::default();
        assert!(game
            .end_game(EndReason::Resignation, Some(Color::Black))
            .is_some());
        assert!(game.end_game(EndReason::DrawAgreement, None).is_none());
        assert_eq!(game.outcome().unwrap().winner, Some(Color::Black));
    }

    #[test]
    fn test_configure_clock_after_start_rejected() {
        let mut game = ChessGame::default();
        game.configure_clock(true, 300).unwrap();
        play(&mut game, &[("e2", "e4")]);
        assert!(game.configure_clock(true, 60).is_err());
        assert_eq!(game.clock().remaining(Color::White), 300);
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut game = ChessGame::new(GameClock::new(1));
        assert_eq!(game.tick_clock(), None);
        assert!(!game.is_over());
    }

    #[test]
    fn test_remote_move_replays_castling() {
        let mut game = ChessGame::default();
        play(
            &mut game,
            &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("f8", "c5")],
        );
        let payload = MovePayload {
            from_row: 7,
            from_col: 4,
            to_row: 7,
            to_col: 6,
            player_id: "p1".into(),
            player_color: Some(Color::White),
            piece: PieceType::King,
            captured_piece: None,
            notation: "O-O".into(),
            timestamp: String::new(),
            promotion: None,
        };
        game.apply_remote_move(&payload).unwrap();
        let rook = game.board().piece_at(sq("f1")).unwrap();
        assert!(rook.is(PieceType::Rook));
        assert_eq!(game.board().king(Color::White), Some(sq("g1")));
        assert_eq!(game.active(), Color::Black);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut source = ChessGame::default();
        play(&mut source, &[("d2", "d4"), ("g8", "f6")]);
        let snapshot = GameSnapshot {
            game_id: "g1".into(),
            white_player: player("a"),
            black_player: player("b"),
            current_turn: Some(Color::White),
            game_status: Some(WireStatus::Active),
            board_state: Some(encode_board_state(source.board()).unwrap()),
            captured_pieces: None,
            move_history: Some(vec![
                HistoryRecord {
                    player: Color::White,
                    notation: "d4".into(),
                    full_move: 1,
                },
                HistoryRecord {
                    player: Color::Black,
                    notation: "Nf6".into(),
                    full_move: 1,
                },
            ]),
            winner: None,
        };

        let mut game = ChessGame::default();
        game.apply_snapshot(&snapshot).unwrap();
        let once = (*game.position(), game.active(), game.phase(), game.history().clone());
        game.apply_snapshot(&snapshot).unwrap();
        let twice = (*game.position(), game.active(), game.phase(), game.history().clone());
        assert_eq!(once, twice);
        assert_eq!(game.board(), source.board());
        assert_eq!(game.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_bad_snapshot_board_leaves_state() {
        let mut game = ChessGame::default();
        let snapshot = GameSnapshot {
            current_turn: Some(Color::Black),
            board_state: Some("not a board".into()),
            ..GameSnapshot::default()
        };
        assert!(game.apply_snapshot(&snapshot).is_err());
        assert_eq!(game.active(), Color::White, "Nothing should change");
    }

    #[test]
    fn test_capturing_promotion_reports_capture() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::new(PieceType::King, Color::White));
        board.place(sq("h5"), Piece::new(PieceType::King, Color::Black));
        board.place(sq("b7"), Piece::new(PieceType::Pawn, Color::White));
        board.place(sq("a8"), Piece::new(PieceType::Rook, Color::Black));
        board.refresh_king_positions();
        let mut game = ChessGame::from_position(Position::from_board(board), Color::White);
        let rook = Some(Piece::new(PieceType::Rook, Color::Black));

        let first = game.apply_move(sq("b7"), sq("a8")).unwrap();
        assert_eq!(first.captured, rook);
        assert_eq!(game.pending_promotion().unwrap().captured, rook);

        let report = game.apply_promotion_choice(PieceType::Queen).unwrap();
        assert_eq!(report.captured, rook, "Capture survives the piece choice");
        assert_eq!(report.notation, "bxa8=Q");
        assert_eq!(game.captured().of(Color::Black).len(), 1);
    }

    #[test]
    fn test_snapshot_cannot_revive_finished_game() {
        let mut game = ChessGame::default();
        play(&mut game, &[("e2", "e4")]);
        game.end_game(EndReason::Resignation, Some(Color::Black));
        let snapshot = GameSnapshot {
            game_id: "g1".into(),
            white_player: player("a"),
            black_player: player("b"),
            current_turn: Some(Color::White),
            game_status: Some(WireStatus::Active),
            ..GameSnapshot::default()
        };

        game.apply_snapshot(&snapshot).unwrap();
        assert!(game.is_over(), "Active status after the end is ignored");
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.reason, EndReason::Resignation);
        assert_eq!(outcome.winner, Some(Color::Black));
        assert!(!game.clock().is_running());

        game.apply_snapshot(&GameSnapshot {
            game_status: Some(WireStatus::Waiting),
            ..GameSnapshot::default()
        })
        .unwrap();
        assert!(game.is_over());
        assert!(game.apply_move(sq("d2"), sq("d4")).is_err());
    }

    #[test]
    fn test_checkmate_snapshot_never_declares_draw() {
        let mut game = ChessGame::default();
        let snapshot = GameSnapshot {
            current_turn: Some(Color::Black),
            game_status: Some(WireStatus::Checkmate),
            winner: Some(shared::protocol::Winner::Draw),
            ..GameSnapshot::default()
        };
        game.apply_snapshot(&snapshot).unwrap();
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.reason, EndReason::Checkmate);
        assert_eq!(outcome.winner, Some(Color::White), "Mated side to move loses");
        assert!(!outcome.is_draw());
    }
}
