//! Piece identity types
//!
//! A piece is a (color, kind) pair. Identity is a closed enumeration, fully
//! decoupled from any rendering representation: callers that draw glyphs or
//! meshes map from these types, never the other way around.

use core::fmt;

/// The two players. White moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// The other player's color.
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta for one step of pawn advance.
    ///
    /// White advances toward decreasing row indices (its back rank is row 7),
    /// Black toward increasing ones.
    pub fn forward_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// The row a pawn of this color starts on, from which the double advance
    /// is allowed.
    pub fn pawn_home_row(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

/// The six piece kinds of the standard set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Sliding pieces move along straight or diagonal lines and require an
    /// unobstructed path.
    pub fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// One piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: PieceColor, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips_both_ways() {
        assert_eq!(PieceColor::White.opponent(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opponent(), PieceColor::White);
    }

    #[test]
    fn test_forward_direction_and_home_row() {
        //! White sits on rows 6-7 and advances toward row 0; Black mirrors
        assert_eq!(PieceColor::White.forward_direction(), -1);
        assert_eq!(PieceColor::Black.forward_direction(), 1);
        assert_eq!(PieceColor::White.pawn_home_row(), 6);
        assert_eq!(PieceColor::Black.pawn_home_row(), 1);
    }

    #[test]
    fn test_sliding_kinds() {
        assert!(PieceKind::Bishop.is_sliding());
        assert!(PieceKind::Rook.is_sliding());
        assert!(PieceKind::Queen.is_sliding());
        assert!(!PieceKind::Pawn.is_sliding());
        assert!(!PieceKind::Knight.is_sliding());
        assert!(!PieceKind::King.is_sliding());
    }
}
