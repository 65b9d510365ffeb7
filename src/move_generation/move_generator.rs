//! Pseudo-legal move enumeration.
//!
//! Moves produced here obey piece geometry, occupancy and the special-move
//! conditions, but may still leave the mover's king attacked. The legality
//! filter removes those.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::build_move;
use crate::move_generation::special_moves::{
    castling_allowed, castling_king_destination, en_passant_capture_allowed, king_start_square,
    needs_promotion,
};
use crate::moves::move_descriptions::Move;
use crate::moves::piece_rules::can_move_to;

/// Every square `piece` on `from` may move to, before the self-check test.
pub fn pseudo_legal_destinations(piece: Piece, from: Square, state: &GameState) -> Vec<Square> {
    let board = &state.board;
    let mut out: Vec<Square> = Square::all()
        .filter(|&to| {
            can_move_to(board, piece, from, to)
                || (piece.kind == PieceKind::Pawn
                    && en_passant_capture_allowed(state, piece.color, from, to))
        })
        .collect();

    if piece.kind == PieceKind::King && from == king_start_square(piece.color) {
        for side in CastleSide::BOTH {
            if castling_allowed(state, piece.color, side) {
                out.push(castling_king_destination(piece.color, side));
            }
        }
    }

    out
}

/// Pseudo-legal moves for every `color` piece. A pawn reaching the last
/// rank yields one move per promotion kind.
pub fn pseudo_legal_moves(color: Color, state: &GameState) -> Vec<Move> {
    let mut out = Vec::<Move>::with_capacity(64);
    for (from, piece) in state.board.pieces(color) {
        for to in pseudo_legal_destinations(piece, from, state) {
            if needs_promotion(piece, to) {
                for kind in PieceKind::PROMOTIONS {
                    out.push(build_move(state, piece, from, to, Some(kind)));
                }
            } else {
                out.push(build_move(state, piece, from, to, None));
            }
        }
    }
    out
}
