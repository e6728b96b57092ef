//! Chess piece movement rules
//!
//! Contains the rules for how each piece may move: geometry per kind, path
//! obstruction for the sliding pieces, and ownership discrimination for
//! captures. Everything here is a pure function of a board snapshot.
//!
//! King safety is deliberately not modeled: a move that exposes the mover's
//! king is still answered legal. Castling, en passant, and promotion are
//! likewise outside this module's scope.

use crate::board::{Board, Square, BOARD_SIZE};
use crate::pieces::{PieceColor, PieceKind};

/// Check if a proposed move is legal for the piece at `from`.
///
/// The verdict covers geometry, occupancy along the path, and the
/// destination: a move is legal only when the destination is empty or holds
/// an opposing piece. An empty origin, a piece that does not belong to
/// `mover`, a null move (`from == to`), or off-board coordinates all answer
/// false. The board is never mutated - applying an accepted move is the
/// caller's job.
pub fn is_legal_move(board: &Board, mover: PieceColor, from: Square, to: Square) -> bool {
    // A move must displace the piece
    if from == to {
        return false;
    }

    // Can't move off the board
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }

    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return false,
    };

    // Ownership is gated at selection time as well; re-checked here so the
    // verdict stands on its own
    if piece.color != mover {
        return false;
    }

    // Can't capture your own pieces
    if board.color_at(to) == Some(mover) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_move(board, piece.color, from, to),
        PieceKind::Knight => is_legal_knight_move(from, to),
        PieceKind::Bishop => is_legal_bishop_move(board, from, to),
        PieceKind::Rook => is_legal_rook_move(board, from, to),
        PieceKind::Queen => is_legal_queen_move(board, from, to),
        PieceKind::King => is_legal_king_move(from, to),
    }
}

/// Check if the piece on `square` may be picked up by `mover`.
///
/// False for an empty square, true iff the occupant's color equals the
/// mover's. This predicate gates *selection*; the capture-target check
/// inside [`is_legal_move`] separately gates *destinations*.
pub fn is_eligible_to_move(board: &Board, square: Square, mover: PieceColor) -> bool {
    board.color_at(square) == Some(mover)
}

/// All squares the piece at `from` may legally move to.
pub fn legal_destinations(board: &Board, mover: PieceColor, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let to = Square::new(row, col);
            if is_legal_move(board, mover, from, to) {
                moves.push(to);
            }
        }
    }

    moves
}

fn is_legal_pawn_move(board: &Board, color: PieceColor, from: Square, to: Square) -> bool {
    let direction = color.forward_direction();

    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;

    // Single advance onto an empty square
    if dc == 0 && dr == direction {
        return board.is_empty(to);
    }

    // Double advance from the home row; the stepped-over square and the
    // destination must both be empty
    if dc == 0 && dr == 2 * direction && from.row == color.pawn_home_row() {
        let intermediate = Square::new((from.row as i8 + direction) as u8, from.col);
        return board.is_empty(intermediate) && board.is_empty(to);
    }

    // Diagonal capture, only onto an opposing piece
    if dc.abs() == 1 && dr == direction {
        return board.color_at(to) == Some(color.opponent());
    }

    false
}

fn is_legal_knight_move(from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn is_legal_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();

    // Must move diagonally
    if dr != dc {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_legal_rook_move(board: &Board, from: Square, to: Square) -> bool {
    // Must move along a rank or a file
    if from.row != to.row && from.col != to.col {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_legal_queen_move(board: &Board, from: Square, to: Square) -> bool {
    // Queen moves like rook or bishop
    is_legal_rook_move(board, from, to) || is_legal_bishop_move(board, from, to)
}

fn is_legal_king_move(from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();

    // One square in any direction; the null move is rejected before dispatch
    dr <= 1 && dc <= 1
}

/// Check that every square strictly between `from` and `to` is empty.
///
/// Walks the signum unit step from the square after `from` up to but
/// excluding `to`; any occupant of either color blocks. Only meaningful for
/// straight or diagonal moves - callers confirm the geometry first.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row as i8 - from.row as i8).signum();
    let step_col = (to.col as i8 - from.col as i8).signum();

    let mut row = from.row as i8 + step_row;
    let mut col = from.col as i8 + step_col;

    while (row, col) != (to.row as i8, to.col as i8) {
        let square = Square::new(row as u8, col as u8);
        // A walk that leaves the board was not straight or diagonal
        if !square.is_on_board() {
            return false;
        }
        if !board.is_empty(square) {
            return false;
        }
        row += step_row;
        col += step_col;
    }

    true
}
