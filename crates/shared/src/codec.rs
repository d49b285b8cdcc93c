//! `boardState` codec
//!
//! Snapshots carry the board as a JSON *string* (not a nested object):
//!
//! ```json
//! "{\"board\": [[\"black_rook\", \"black_knight\", …], …, [null, …], …]}"
//! ```
//!
//! Row 0 is rank 8. Each cell is `null` or a `"{color}_{type}"` token.

use crate::error::{ProtocolError, ProtocolResult};
use chess_engine::Board;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    pub board: Vec<Vec<Option<String>>>,
}

impl From<&Board> for BoardLayout {
    fn from(board: &Board) -> Self {
        BoardLayout {
            board: board.to_tokens(),
        }
    }
}

impl BoardLayout {
    pub fn to_board(&self) -> ProtocolResult<Board> {
        Board::from_tokens(&self.board).map_err(|e| ProtocolError::InvalidBoard(e.to_string()))
    }
}

/// Serialize a board into `boardState` text
pub fn encode_board_state(board: &Board) -> ProtocolResult<String> {
    Ok(serde_json::to_string(&BoardLayout::from(board))?)
}

/// Parse `boardState` text into a board
pub fn decode_board_state(text: &str) -> ProtocolResult<Board> {
    let layout: BoardLayout = serde_json::from_str(text)?;
    layout.to_board()
}
