//! Move history
//!
//! Append-only list of `{player, notation, full_move}` entries. The only
//! in-place edit is the promotion suffix added to the most recent entry once
//! the player picks a piece.
//!
//! `full_move` is derived from the list length at append time: entries 0 and
//! 1 are move 1, entries 2 and 3 are move 2, and so on.

use chess_engine::notation::with_promotion;
use chess_engine::{Color, PieceType};
use shared::protocol::HistoryRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub player: Color,
    pub notation: String,
    pub full_move: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    /// Append a half-move
    pub fn push(&mut self, player: Color, notation: impl Into<String>) {
        let full_move = (self.entries.len() / 2) as u32 + 1;
        self.entries.push(HistoryEntry {
            player,
            notation: notation.into(),
            full_move,
        });
    }

    /// Record the promotion piece on the most recent entry
    pub fn promote_last(&mut self, piece_type: PieceType) {
        if let Some(last) = self.entries.last_mut() {
            last.notation = with_promotion(&last.notation, piece_type);
        }
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the whole list from a server snapshot
    pub fn replace_from(&mut self, records: &[HistoryRecord]) {
        self.entries = records
            .iter()
            .map(|r| HistoryEntry {
                player: r.player,
                notation: r.notation.clone(),
                full_move: r.full_move,
            })
            .collect();
    }

    pub fn to_records(&self) -> Vec<HistoryRecord> {
        self.entries
            .iter()
            .map(|e| HistoryRecord {
                player: e.player,
                notation: e.notation.clone(),
                full_move: e.full_move,
            })
            .collect()
    }

    /// Display rows: move number, White's notation, Black's notation
    pub fn rows(&self) -> Vec<(u32, &str, &str)> {
        self.entries
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                let white = pair.first().map(|e| e.notation.as_str()).unwrap_or("");
                let black = pair.get(1).map(|e| e.notation.as_str()).unwrap_or("");
                (i as u32 + 1, white, black)
            })
            .collect()
    }
}
