//! The 8x8 grid of optional pieces.
//!
//! `Board` is a plain `Copy` value so a full snapshot costs one memcpy of
//! 64 two-byte cells. The legality filter snapshots the board before each
//! simulated move and checks in debug builds that undoing it restored
//! every cell.

use crate::game_state::chess_types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in Color::BOTH {
            let home = color.home_rank();
            let pawns = color.pawn_start_rank();
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let file = file as u8;
                board.set(Square::at(home, file), Some(Piece::new(color, *kind)));
                board.set(
                    Square::at(pawns, file),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Writes `piece` to `square`, returning whatever stood there before.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.rank() as usize][square.file() as usize],
            piece,
        )
    }

    /// Location of `color`'s king, scanning all 64 squares.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Every occupied square holding a piece of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[inline]
    pub fn snapshot(&self) -> Board {
        *self
    }

    #[inline]
    pub fn restore(&mut self, snapshot: Board) {
        *self = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_sixteen_pieces_per_side() {
        let board = Board::standard();
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert_eq!(
            board.piece_at(Square::at(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(Square::at(1, 0)),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn find_king_locates_each_side() {
        let board = Board::standard();
        assert_eq!(board.find_king(Color::White), Some(Square::at(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square::at(0, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn set_returns_previous_occupant() {
        let mut board = Board::empty();
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(board.set(Square::at(2, 2), Some(knight)), None);
        assert_eq!(board.set(Square::at(2, 2), None), Some(knight));
        assert!(board.is_empty(Square::at(2, 2)));
    }

    #[test]
    fn restore_undoes_every_write() {
        let mut board = Board::standard();
        let snapshot = board.snapshot();
        board.set(Square::at(6, 4), None);
        board.set(Square::at(0, 0), None);
        board.set(Square::at(4, 4), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_ne!(board, snapshot);
        board.restore(snapshot);
        assert_eq!(board, Board::standard());
    }
}
