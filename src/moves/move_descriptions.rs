use std::fmt;

use crate::game_state::chess_types::{CastleSide, Piece, PieceKind, Square};

/// Special handling a move needs beyond lifting and dropping one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    /// Pawn advance of two squares; creates an en-passant target.
    DoublePawnPush,
    /// Captures the pawn beside the destination, not on it.
    EnPassant,
    /// King moves two squares and the rook jumps over it.
    Castle(CastleSide),
}

/// A described transition. Building one never touches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Square of the piece removed by this move, if any.
    #[inline]
    pub fn capture_square(&self) -> Option<Square> {
        match self.kind {
            MoveKind::EnPassant => Some(en_passant_victim_square(self.from, self.to)),
            _ if self.captured.is_some() => Some(self.to),
            _ => None,
        }
    }
}

/// The enemy pawn taken en passant sits on the capturer's rank, on the
/// destination file.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Square {
    Square::at(from.rank(), to.file())
}

/// Coordinate notation, e.g. `e2e4` or `e7e8=Q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.letter())?;
        }
        Ok(())
    }
}
