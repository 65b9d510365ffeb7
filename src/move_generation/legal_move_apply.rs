//! Raw board effect of a move, and its exact inverse.
//!
//! The controller and the legality filter both go through `apply_move`, so a
//! simulated move and a committed one can never differ.

use crate::game::config::GameConfig;
use crate::game_state::chess_types::*;
use crate::move_generation::special_moves::{
    castle_side_for, castling_rook_squares, en_passant_capture_allowed, next_en_passant_target,
    update_castling_rights,
};
use crate::moves::move_descriptions::{en_passant_victim_square, Move, MoveKind};

/// Describes moving `piece` from `from` to `to` in `state`, deriving the
/// capture and special-move flags. Does not check legality.
pub fn build_move(
    state: &GameState,
    piece: Piece,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Move {
    let mut kind = MoveKind::Normal;
    let mut captured = state.board.piece_at(to);

    match piece.kind {
        PieceKind::Pawn => {
            let (d_rank, d_file) = from.delta_to(to);
            if d_file == 0 && d_rank.abs() == 2 {
                kind = MoveKind::DoublePawnPush;
            } else if en_passant_capture_allowed(state, piece.color, from, to) {
                kind = MoveKind::EnPassant;
                captured = state.board.piece_at(en_passant_victim_square(from, to));
            }
        }
        PieceKind::King => {
            if let Some(side) = castle_side_for(piece.color, from, to) {
                kind = MoveKind::Castle(side);
            }
        }
        _ => {}
    }

    Move {
        from,
        to,
        piece,
        captured,
        promotion,
        kind,
    }
}

/// Commits `mv` to `state` and returns the record that reverses it.
///
/// Board writes for en passant and castling happen together with the main
/// piece move. Castling rights and the en-passant target are updated and
/// the side to move flips; the outcome is left for the caller to classify.
pub fn apply_move(state: &mut GameState, mv: &Move, config: &GameConfig) -> UndoState {
    let undo = UndoState {
        mv: *mv,
        prev_side_to_move: state.side_to_move,
        prev_castling: state.castling,
        prev_en_passant: state.en_passant,
        prev_outcome: state.outcome,
    };

    let board = &mut state.board;
    board.set(mv.from, None);
    match mv.kind {
        MoveKind::EnPassant => {
            board.set(en_passant_victim_square(mv.from, mv.to), None);
        }
        MoveKind::Castle(side) => {
            let (rook_from, rook_to) = castling_rook_squares(mv.piece.color, side);
            let rook = board.set(rook_from, None);
            board.set(rook_to, rook);
        }
        MoveKind::Normal | MoveKind::DoublePawnPush => {}
    }
    let placed = match mv.promotion {
        Some(kind) => Piece::new(mv.piece.color, kind),
        None => mv.piece,
    };
    board.set(mv.to, Some(placed));

    update_castling_rights(&mut state.castling, mv, config);
    state.en_passant = next_en_passant_target(mv);
    state.side_to_move = mv.piece.color.opposite();

    undo
}

/// Reverses a move previously applied with `apply_move`.
pub fn undo_move(state: &mut GameState, undo: &UndoState) {
    let mv = &undo.mv;
    let board = &mut state.board;

    board.set(mv.to, None);
    match mv.kind {
        MoveKind::EnPassant => {
            board.set(en_passant_victim_square(mv.from, mv.to), mv.captured);
        }
        MoveKind::Castle(side) => {
            let (rook_from, rook_to) = castling_rook_squares(mv.piece.color, side);
            let rook = board.set(rook_to, None);
            board.set(rook_from, rook);
        }
        MoveKind::Normal | MoveKind::DoublePawnPush => {
            board.set(mv.to, mv.captured);
        }
    }
    board.set(mv.from, Some(mv.piece));

    state.side_to_move = undo.prev_side_to_move;
    state.castling = undo.prev_castling;
    state.en_passant = undo.prev_en_passant;
    state.outcome = undo.prev_outcome;
}
