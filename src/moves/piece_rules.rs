//! Top-level movement predicate.
//!
//! The per-kind predicates answer only "does this shape fit on this board";
//! the own-piece exclusion lives here, once, so ordinary move generation and
//! attack detection can never drift apart.

use crate::game_state::chess_types::*;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};

/// Could `piece` standing on `from` reach `to`, ignoring turn order, self
/// check and the stateful special moves (castling, en passant).
pub fn can_move_to(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    if board
        .piece_at(to)
        .is_some_and(|target| target.color == piece.color)
    {
        return false;
    }
    can_reach(board, piece, from, to)
}

/// Dispatches to the geometry rule of `piece.kind`.
#[inline]
pub fn can_reach(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_moves::can_reach(piece.color, from, to, board),
        PieceKind::Knight => knight_moves::can_reach(piece.color, from, to, board),
        PieceKind::Bishop => bishop_moves::can_reach(piece.color, from, to, board),
        PieceKind::Rook => rook_moves::can_reach(piece.color, from, to, board),
        PieceKind::Queen => queen_moves::can_reach(piece.color, from, to, board),
        PieceKind::King => king_moves::can_reach(piece.color, from, to, board),
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// The squares must share a rank, file or diagonal; anything else is
/// reported as blocked.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_rank, d_file) = from.delta_to(to);
    let aligned = d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs();
    if !aligned || from == to {
        return false;
    }

    let step_rank = d_rank.signum();
    let step_file = d_file.signum();
    let mut current = from;
    loop {
        let Some(next) = current.offset(step_rank, step_file) else {
            return false;
        };
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
}
