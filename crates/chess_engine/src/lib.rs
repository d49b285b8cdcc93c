//! Chess rules engine
//!
//! Pure game logic with no I/O: the board model, attack detection, legal move
//! generation (castling and en passant included), an apply/undo move command
//! pair and history notation. The networked client builds its game state
//! machine on top of this crate.
//!
//! ## Example
//!
//! ```rust,ignore
//! use chess_engine::{legal_destinations, Move, Position, Square};
//!
//! let mut position = Position::standard();
//! let e2 = Square::from_algebraic("e2")?;
//! let e4 = Square::from_algebraic("e4")?;
//! assert!(legal_destinations(&position, e2).contains(&e4));
//! position.apply(&Move::new(&position, e2, e4)?)?;
//! ```

pub mod board;
pub mod error;
pub mod make_unmake;
pub mod move_gen;
pub mod notation;
pub mod position;
pub mod types;

pub use board::{Board, KingPositions};
pub use error::{ChessEngineError, ChessEngineResult};
pub use make_unmake::{Move, MoveKind, UndoInfo};
pub use move_gen::{
    all_legal_moves, can_castle, en_passant_target, has_legal_move, is_in_check, is_legal_move,
    is_square_attacked, legal_destinations, pseudo_legal_destinations, side_status, SideStatus,
};
pub use position::{CastlingRights, Position};
pub use types::{CastleSide, Color, LastMove, Piece, PieceType, Square};
