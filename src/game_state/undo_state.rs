use crate::game::outcome::Outcome;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Everything `undo_move` needs to restore the position before `mv`.
///
/// The board squares touched are recoverable from `mv` itself (including the
/// captured piece and the castling rook), so only the scalar state is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_side_to_move: Color,
    pub prev_castling: CastlingRights,
    pub prev_en_passant: Option<Square>,
    pub prev_outcome: Outcome,
}
