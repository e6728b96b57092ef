//! Move legality rules for a two-player chess board
//!
//! Answers one question: is this proposed move structurally legal for the
//! piece on that square, given current occupancy and whose turn it is?
//! Per-piece geometry, path obstruction for the sliding pieces, and
//! ownership discrimination are in scope; check detection, castling,
//! en passant, promotion, and game termination are not.
//!
//! # Module Organization
//!
//! - [`pieces`] - Piece identity (color, kind) as closed enumerations
//! - [`board`] - The 8×8 occupancy model and its read-only queries
//! - [`rules`] - The pure legality predicates and path clearance
//! - [`session`] - A game session owning board, turn, and selection state
//! - [`error`] - Typed rejection reasons for the session's apply path
//!
//! # Example
//!
//! ```
//! use chess_rules::{GameSession, PieceColor, Square};
//!
//! let mut session = GameSession::new();
//! assert_eq!(session.to_move(), PieceColor::White);
//!
//! // 1. e4 (row 6 is White's pawn row, rows count down toward Black)
//! session.try_move(Square::new(6, 4), Square::new(4, 4)).unwrap();
//! assert_eq!(session.to_move(), PieceColor::Black);
//!
//! // Illegal replies are refused with a reason and change nothing
//! assert!(session.try_move(Square::new(1, 0), Square::new(4, 0)).is_err());
//! assert_eq!(session.to_move(), PieceColor::Black);
//! ```

pub mod board;
pub mod error;
pub mod pieces;
pub mod rules;
pub mod session;

pub use board::{Board, Square, BOARD_SIZE};
pub use error::{MoveError, MoveResult};
pub use pieces::{Piece, PieceColor, PieceKind};
pub use rules::{is_eligible_to_move, is_legal_move, is_path_clear, legal_destinations};
pub use session::{AppliedMove, CurrentTurn, GameSession};
