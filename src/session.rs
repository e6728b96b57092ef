//! Game session - board, turn, and selection state
//!
//! The session owns everything a single game needs: the board, whose turn it
//! is, and which square (if any) the mover has picked up. It is the single
//! source of truth for turn order and the only place a move mutates the
//! board; the validator in [`crate::rules`] stays a pure function of a
//! snapshot. Hosts that run several games hold one session per game.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch() → Black plays → switch() → Move 2: White plays
//! ```
//!
//! No terminal state is modeled - the session alternates colors until the
//! host stops asking.

use log::debug;

use crate::board::{Board, Square};
use crate::error::{MoveError, MoveResult};
use crate::pieces::{Piece, PieceColor};
use crate::rules::{is_eligible_to_move, is_legal_move};

/// Tracks whose turn it currently is and the current move number.
///
/// Move numbers follow chess notation: move 1 is White's first move and
/// Black's response, and the number increments only after Black completes
/// their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTurn {
    pub color: PieceColor,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// Switch to the other player's turn.
    pub fn switch(&mut self) {
        self.color = match self.color {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.move_number += 1;
                PieceColor::White
            }
        };
    }
}

/// Record of an accepted move: the piece that moved and what it captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: Piece,
    pub captured: Option<Piece>,
}

/// One game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    turn: CurrentTurn,
    selected: Option<Square>,
}

impl GameSession {
    /// New game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::standard())
    }

    /// New game from an arbitrary position, White to move.
    pub fn with_board(board: Board) -> Self {
        GameSession {
            board,
            turn: CurrentTurn::default(),
            selected: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> CurrentTurn {
        self.turn
    }

    /// The color currently entitled to move.
    pub fn to_move(&self) -> PieceColor {
        self.turn.color
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Pick up the piece on `square` for the mover.
    ///
    /// Refuses empty squares and opponent pieces; on success the selection
    /// is stored until a move is attempted or the selection is cleared.
    pub fn select(&mut self, square: Square) -> bool {
        if !is_eligible_to_move(&self.board, square, self.turn.color) {
            debug!("[SESSION] selection refused at {}", square);
            return false;
        }
        self.selected = Some(square);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Validate and apply a move for the current mover.
    ///
    /// On success the piece is moved, the origin cleared, and the turn
    /// switched; the captured piece (if any) is returned. On failure the
    /// board and turn are untouched and the error names the reason.
    pub fn try_move(&mut self, from: Square, to: Square) -> MoveResult<AppliedMove> {
        let piece = match self.board.piece_at(from) {
            Some(piece) => piece,
            None => return Err(MoveError::NoPieceAtSquare { square: from }),
        };

        if piece.color != self.turn.color {
            return Err(MoveError::WrongPieceColor {
                square: from,
                color: self.turn.color,
            });
        }

        if !is_legal_move(&self.board, self.turn.color, from, to) {
            debug!("[SESSION] rejected {} -> {}", from, to);
            return Err(MoveError::IllegalMove { from, to });
        }

        let captured = self.board.remove(to);
        self.board.remove(from);
        self.board.place(to, piece);
        self.turn.switch();

        debug!(
            "[SESSION] applied {} -> {}, {} to move",
            from, to, self.turn.color
        );

        Ok(AppliedMove { piece, captured })
    }

    /// Attempt a move from the stored selection.
    ///
    /// The selection is cleared whether or not the move is accepted,
    /// mirroring a two-click UI where the second click always drops the
    /// highlight.
    pub fn move_selected(&mut self, to: Square) -> MoveResult<AppliedMove> {
        let from = match self.selected.take() {
            Some(square) => square,
            None => return Err(MoveError::NothingSelected),
        };
        self.try_move(from, to)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceKind;

    #[test]
    fn test_current_turn_default() {
        //! Verifies that games start with White to move on move 1
        let turn = CurrentTurn::default();
        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(turn.move_number, 1);
    }

    #[test]
    fn test_turn_switch_white_to_black() {
        //! Tests switching from White to Black stays on same move number
        let mut turn = CurrentTurn::default();
        turn.switch();

        assert_eq!(turn.color, PieceColor::Black);
        assert_eq!(
            turn.move_number, 1,
            "Move number should not increment when White switches to Black"
        );
    }

    #[test]
    fn test_turn_switch_black_to_white() {
        //! Tests switching from Black to White increments the move number
        let mut turn = CurrentTurn {
            color: PieceColor::Black,
            move_number: 1,
        };
        turn.switch();

        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(
            turn.move_number, 2,
            "Move number should increment when Black completes their turn"
        );
    }

    #[test]
    fn test_select_requires_own_piece() {
        //! Selection refuses empty squares and opponent pieces
        let mut session = GameSession::new();

        assert!(
            !session.select(Square::new(4, 4)),
            "Empty square should not be selectable"
        );
        assert!(
            !session.select(Square::new(1, 4)),
            "Black pawn should not be selectable while White is to move"
        );
        assert!(
            session.select(Square::new(6, 4)),
            "White pawn should be selectable"
        );
        assert_eq!(session.selected(), Some(Square::new(6, 4)));
    }

    #[test]
    fn test_try_move_switches_turn() {
        //! An accepted move flips the mover and leaves the move number until
        //! Black has answered
        let mut session = GameSession::new();

        let applied = session
            .try_move(Square::new(6, 4), Square::new(4, 4))
            .expect("double pawn advance from the home row should be accepted");

        assert_eq!(applied.piece.kind, PieceKind::Pawn);
        assert_eq!(applied.captured, None);
        assert_eq!(session.to_move(), PieceColor::Black);
        assert_eq!(session.turn().move_number, 1);

        session
            .try_move(Square::new(1, 4), Square::new(3, 4))
            .expect("Black's reply should be accepted");
        assert_eq!(session.to_move(), PieceColor::White);
        assert_eq!(session.turn().move_number, 2);
    }

    #[test]
    fn test_try_move_error_taxonomy() {
        //! Each rejection reason maps to its own error, and nothing changes
        //! on the board
        let mut session = GameSession::new();
        let before = session.board().clone();

        assert_eq!(
            session.try_move(Square::new(4, 4), Square::new(3, 4)),
            Err(MoveError::NoPieceAtSquare {
                square: Square::new(4, 4)
            })
        );
        assert_eq!(
            session.try_move(Square::new(1, 4), Square::new(2, 4)),
            Err(MoveError::WrongPieceColor {
                square: Square::new(1, 4),
                color: PieceColor::White
            })
        );
        assert_eq!(
            session.try_move(Square::new(6, 4), Square::new(3, 4)),
            Err(MoveError::IllegalMove {
                from: Square::new(6, 4),
                to: Square::new(3, 4)
            })
        );

        assert_eq!(session.board(), &before, "Rejected moves must not mutate");
        assert_eq!(session.to_move(), PieceColor::White);
    }

    #[test]
    fn test_try_move_returns_captured_piece() {
        //! Capturing returns the removed piece and takes it off the board
        let mut board = Board::empty();
        board.place(
            Square::new(4, 4),
            Piece::new(PieceColor::White, PieceKind::Rook),
        );
        board.place(
            Square::new(4, 7),
            Piece::new(PieceColor::Black, PieceKind::Knight),
        );
        let mut session = GameSession::with_board(board);

        let applied = session
            .try_move(Square::new(4, 4), Square::new(4, 7))
            .expect("rook capture along the rank should be accepted");

        assert_eq!(
            applied.captured,
            Some(Piece::new(PieceColor::Black, PieceKind::Knight))
        );
        assert_eq!(
            session.board().piece_at(Square::new(4, 7)),
            Some(Piece::new(PieceColor::White, PieceKind::Rook))
        );
        assert!(session.board().is_empty(Square::new(4, 4)));
    }

    #[test]
    fn test_move_selected_clears_selection() {
        //! The stored selection is dropped on accept and on reject alike
        let mut session = GameSession::new();

        assert_eq!(
            session.move_selected(Square::new(4, 4)),
            Err(MoveError::NothingSelected)
        );

        assert!(session.select(Square::new(6, 4)));
        assert!(session.move_selected(Square::new(4, 4)).is_ok());
        assert_eq!(session.selected(), None);

        assert!(session.select(Square::new(1, 0)));
        assert!(
            session.move_selected(Square::new(5, 5)).is_err(),
            "Pawn cannot wander across the board"
        );
        assert_eq!(
            session.selected(),
            None,
            "Selection should be cleared even when the move is refused"
        );
    }
}
