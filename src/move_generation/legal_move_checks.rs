use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::piece_rules::can_reach;

/// Location of `color`'s king.
///
/// # Panics
///
/// Panics if the king is missing. The engine never removes a king, so this
/// only happens on a position that was corrupt before it reached us.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Square {
    match board.find_king(color) {
        Some(square) => square,
        None => panic!("board invariant broken: no {color} king on the board"),
    }
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, king_square(board, color), color.opposite())
}

/// True if any piece of `attacker_color` attacks `target`. Read-only.
///
/// Pawns attack diagonally forward regardless of what stands on `target`;
/// every other kind reuses its movement rule directly.
pub fn is_square_attacked(board: &Board, target: Square, attacker_color: Color) -> bool {
    board
        .pieces(attacker_color)
        .any(|(from, piece)| piece_attacks(board, from, piece, target))
}

/// Squares holding `attacker_color` pieces that attack `target`.
pub fn attackers_to_square(
    board: &Board,
    target: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    board
        .pieces(attacker_color)
        .filter(|&(from, piece)| piece_attacks(board, from, piece, target))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

fn piece_attacks(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, target),
        _ => from != target && can_reach(board, piece, from, target),
    }
}
