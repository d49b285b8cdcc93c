//! Presentation helpers
//!
//! Turns game and match state into the strings the front-end shows: piece
//! glyphs, status lines, clocks, connection state and a text board.
//!
//! # Perspective
//!
//! In a networked game the local player's pieces are drawn with the white
//! glyph set and the opponent's with the black set, whatever their real
//! color. The board is flipped when the local player is Black so their
//! pieces sit at the bottom.

use crate::game::captured::CapturedPieces;
use crate::game::clock::{format_time, GameClock};
use crate::game::history::MoveHistory;
use crate::game::input::Destination;
use crate::game::state::ChessGame;
use crate::networking::client::SyncClient;
use crate::networking::session::MatchContext;
use chess_engine::{Color, Piece, PieceType, Square};
use std::fmt::Write;

/// Glyph for `piece`, seen by `viewer` (networked) or plainly (local)
pub fn glyph(piece: Piece, viewer: Option<Color>) -> char {
    let shown = match viewer {
        Some(you) if piece.color == you => Color::White,
        Some(_) => Color::Black,
        None => piece.color,
    };
    match (shown, piece.piece_type) {
        (Color::White, PieceType::King) => '♔',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, PieceType::Pawn) => '♙',
        (Color::Black, PieceType::King) => '♚',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, PieceType::Pawn) => '♟',
    }
}

/// Color whose glyph rules apply, if any
pub fn viewer(context: &MatchContext) -> Option<Color> {
    if context.is_networked() {
        context.assigned_color
    } else {
        None
    }
}

/// Is the board drawn from Black's side?
pub fn is_flipped(context: &MatchContext) -> bool {
    viewer(context) == Some(Color::Black)
}

/// Board square under screen cell (`display_row`, `display_col`)
pub fn square_at(display_row: u8, display_col: u8, flipped: bool) -> Option<Square> {
    let (row, col) = if flipped {
        (7u8.checked_sub(display_row)?, 7u8.checked_sub(display_col)?)
    } else {
        (display_row, display_col)
    };
    Square::new(row, col).ok()
}

/// "White's Turn", with "(You are black)" in networked games
pub fn turn_text(game: &ChessGame, context: &MatchContext) -> String {
    let mut text = format!("{}'s Turn", game.active().title());
    if let Some(you) = viewer(context) {
        let _ = write!(text, " (You are {you})");
    }
    text
}

/// Result, check warning, or nothing
pub fn status_text(game: &ChessGame) -> String {
    if let Some(outcome) = game.outcome() {
        outcome.message()
    } else if game.pending_promotion().is_some() {
        "Choose a piece: queen, rook, bishop or knight".to_string()
    } else if game.in_check() {
        format!("{} is in check!", game.active().title())
    } else {
        String::new()
    }
}

/// "White: 9:58  Black: 10:00", with a low-time marker
pub fn timer_display(clock: &GameClock) -> String {
    let side = |color: Color| {
        let marker = if clock.is_low_time(color) { "!" } else { "" };
        format!("{}: {}{}", color.title(), format_time(clock.remaining(color)), marker)
    };
    format!("{}  {}", side(Color::White), side(Color::Black))
}

pub fn connection_text(context: &MatchContext) -> String {
    if context.is_networked() {
        context.connection.to_string()
    } else {
        "Local Game Mode".to_string()
    }
}

/// Glyphs of the captured pieces of `color`
pub fn captured_line(captured: &CapturedPieces, color: Color) -> String {
    captured.of(color).iter().map(|p| glyph(*p, None)).collect()
}

/// "1. e4 e5" per full move
pub fn history_lines(history: &MoveHistory) -> Vec<String> {
    history
        .rows()
        .into_iter()
        .map(|(number, white, black)| {
            if black.is_empty() {
                format!("{number}. {white}")
            } else {
                format!("{number}. {white} {black}")
            }
        })
        .collect()
}

/// Text board with coordinates, selection and destination markers
///
/// `*` marks the selected piece, `+` a quiet destination, `x` a capture.
pub fn render_board(client: &SyncClient) -> String {
    let context = client.context();
    let flipped = is_flipped(context);
    let viewer = viewer(context);
    let board = client.game().board();
    let selected = client.selection().selected();
    let destinations: &[Destination] = client.selection().destinations();

    let mut out = String::new();
    for display_row in 0..8u8 {
        let Some(first) = square_at(display_row, 0, flipped) else {
            continue;
        };
        let _ = write!(out, "{} ", first.rank_char());
        for display_col in 0..8u8 {
            let Some(square) = square_at(display_row, display_col, flipped) else {
                continue;
            };
            let cell = board
                .piece_at(square)
                .map(|p| glyph(p, viewer))
                .unwrap_or('·');
            let marker = if selected == Some(square) {
                '*'
            } else if let Some(d) = destinations.iter().find(|d| d.square == square) {
                if d.capture {
                    'x'
                } else {
                    '+'
                }
            } else {
                ' '
            };
            let _ = write!(out, "{cell}{marker}");
        }
        out.push('\n');
    }
    out.push_str("  ");
    for display_col in 0..8u8 {
        if let Some(square) = square_at(7, display_col, flipped) {
            let _ = write!(out, "{} ", square.file_char());
        }
    }
    out.push('\n');
    out
}

/// Everything the terminal shows between moves
pub fn render_screen(client: &SyncClient) -> String {
    let game = client.game();
    let context = client.context();
    let mut out = String::new();
    let _ = writeln!(out, "{}", connection_text(context));
    out.push_str(&render_board(client));
    let _ = writeln!(out, "{}", turn_text(game, context));
    let status = status_text(game);
    if !status.is_empty() {
        let _ = writeln!(out, "{status}");
    }
    if game.clock().enabled {
        let _ = writeln!(out, "{}", timer_display(game.clock()));
    }
    let captured = game.captured();
    if captured.total() > 0 {
        let _ = writeln!(
            out,
            "Captured: {} | {} ({:+})",
            captured_line(captured, Color::White),
            captured_line(captured, Color::Black),
            captured.material_advantage()
        );
    }
    if let Some(last) = history_lines(game.history()).last() {
        let _ = writeln!(out, "Last: {last}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networking::session::PlayMode;

    #[test]
    fn test_glyph_local_and_networked() {
        let black_queen = Piece::new(PieceType::Queen, Color::Black);
        assert_eq!(glyph(black_queen, None), '♛');
        assert_eq!(glyph(black_queen, Some(Color::Black)), '♕', "Own pieces use white glyphs");
        assert_eq!(glyph(black_queen, Some(Color::White)), '♛');
    }

    #[test]
    fn test_square_at_flips() {
        assert_eq!(square_at(0, 0, false).unwrap().algebraic(), "a8");
        assert_eq!(square_at(0, 0, true).unwrap().algebraic(), "h1");
        assert_eq!(square_at(8, 0, false), None);
    }

    #[test]
    fn test_turn_text() {
        let game = ChessGame::default();
        let mut context = MatchContext::new("Ann");
        assert_eq!(turn_text(&game, &context), "White's Turn");
        context.mode = PlayMode::Networked;
        context.assigned_color = Some(Color::Black);
        assert_eq!(turn_text(&game, &context), "White's Turn (You are black)");
        assert!(is_flipped(&context));
    }

    #[test]
    fn test_connection_text_local() {
        assert_eq!(connection_text(&MatchContext::new("Ann")), "Local Game Mode");
    }

    #[test]
    fn test_timer_display() {
        let clock = GameClock::new(600);
        assert_eq!(timer_display(&clock), "White: 10:00  Black: 10:00");
    }

    #[test]
    fn test_history_lines() {
        let mut history = MoveHistory::default();
        history.push(Color::White, "e4");
        history.push(Color::Black, "e5");
        history.push(Color::White, "Nf3");
        assert_eq!(history_lines(&history), vec!["1. e4 e5", "2. Nf3"]);
    }
}
