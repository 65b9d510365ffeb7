//! Legality filter.
//!
//! A candidate is simulated on a scratch copy of the position with the same
//! `apply_move` the controller commits with, the mover's king is tested, and
//! the move is undone before the next candidate. This is the only authority
//! on whether a move is legal; validating one requested move and
//! enumerating all moves both come through here.

use log::trace;

use crate::game::config::GameConfig;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::moves::move_descriptions::Move;

/// Keeps the candidates that do not leave `color`'s king attacked.
pub fn filter_legal(
    color: Color,
    candidates: Vec<Move>,
    state: &GameState,
    config: &GameConfig,
) -> Vec<Move> {
    let mut scratch = *state;
    candidates
        .into_iter()
        .filter(|mv| keeps_king_safe(&mut scratch, color, mv, config))
        .collect()
}

/// True if `mv` does not expose its mover's king.
pub fn is_legal(state: &GameState, mv: &Move, config: &GameConfig) -> bool {
    let mut scratch = *state;
    keeps_king_safe(&mut scratch, mv.piece.color, mv, config)
}

/// Every legal move for `color`, regardless of whose turn it is.
pub fn legal_moves(state: &GameState, color: Color, config: &GameConfig) -> Vec<Move> {
    filter_legal(color, pseudo_legal_moves(color, state), state, config)
}

/// Short-circuiting `!legal_moves(..).is_empty()`.
pub fn has_legal_move(state: &GameState, color: Color, config: &GameConfig) -> bool {
    let mut scratch = *state;
    pseudo_legal_moves(color, state)
        .iter()
        .any(|mv| keeps_king_safe(&mut scratch, color, mv, config))
}

/// Legal destination squares for the piece on `from`, deduplicated across
/// promotion choices.
pub fn legal_destinations(state: &GameState, from: Square, config: &GameConfig) -> Vec<Square> {
    let Some(piece) = state.board.piece_at(from) else {
        return Vec::new();
    };
    let mut out: Vec<Square> = legal_moves(state, piece.color, config)
        .into_iter()
        .filter(|mv| mv.from == from)
        .map(|mv| mv.to)
        .collect();
    out.dedup();
    out
}

fn keeps_king_safe(scratch: &mut GameState, color: Color, mv: &Move, config: &GameConfig) -> bool {
    let board_before = scratch.board.snapshot();
    let rights_before = (scratch.castling, scratch.en_passant, scratch.side_to_move);
    let undo = apply_move(scratch, mv, config);
    let exposed = is_king_in_check(&scratch.board, color);
    undo_move(scratch, &undo);
    debug_assert_eq!(scratch.board, board_before, "simulating {mv} leaked board writes");
    debug_assert_eq!(
        (scratch.castling, scratch.en_passant, scratch.side_to_move),
        rights_before,
        "simulating {mv} leaked state"
    );

    if exposed {
        trace!("rejected {mv}: leaves the {color} king attacked");
    }
    !exposed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{diagram, sq};

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let state = GameState::new_game();
        let config = GameConfig::default();
        assert_eq!(legal_moves(&state, Color::White, &config).len(), 20);
    }

    #[test]
    fn pinned_bishop_cannot_leave_the_file() {
        let board = diagram([
            "....k...", //
            "....r...", //
            "........", //
            "........", //
            "........", //
            "........", //
            "....B...", //
            "....K...", //
        ]);
        let state = GameState::from_parts(board, Color::White, CastlingRights::none(), None);
        let config = GameConfig::default();
        assert!(legal_destinations(&state, sq("e2"), &config).is_empty());
        assert!(!legal_moves(&state, Color::White, &config).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = diagram([
            "....k...", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "...r....", //
            "K.......", //
        ]);
        let state = GameState::from_parts(board, Color::White, CastlingRights::none(), None);
        let config = GameConfig::default();
        let mut dests = legal_destinations(&state, sq("a1"), &config);
        dests.sort();
        assert_eq!(dests, vec![sq("b1")]);
    }

    #[test]
    fn en_passant_that_exposes_king_is_rejected() {
        let board = diagram([
            "........", //
            "........", //
            "........", //
            "K..pP..r", //
            "........", //
            "........", //
            "........", //
            "....k...", //
        ]);
        let state =
            GameState::from_parts(board, Color::White, CastlingRights::none(), Some(sq("d6")));
        let config = GameConfig::default();
        let pawn_moves: Vec<_> = legal_moves(&state, Color::White, &config)
            .into_iter()
            .filter(|mv| mv.from == sq("e5"))
            .collect();
        assert_eq!(pawn_moves.len(), 1);
        assert_eq!(pawn_moves[0].to, sq("e6"));
    }

    #[test]
    fn filtering_never_mutates_the_input_state() {
        let state = GameState::new_game();
        let before = state;
        let config = GameConfig::default();
        let _ = legal_moves(&state, Color::Black, &config);
        assert_eq!(state, before);
    }
}
