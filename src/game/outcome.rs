use std::fmt;

use crate::game::config::GameConfig;
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Status of a position from the point of view of the side to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[default]
    Ongoing,
    /// King attacked, at least one legal reply.
    Check,
    /// King attacked, no legal reply.
    Checkmate,
    /// King safe, no legal move.
    Stalemate,
}

impl Outcome {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Outcome::Checkmate | Outcome::Stalemate)
    }

    #[inline]
    pub const fn from_flags(in_check: bool, has_legal_move: bool) -> Self {
        match (in_check, has_legal_move) {
            (true, true) => Outcome::Check,
            (true, false) => Outcome::Checkmate,
            (false, true) => Outcome::Ongoing,
            (false, false) => Outcome::Stalemate,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Ongoing => "ongoing",
            Outcome::Check => "check",
            Outcome::Checkmate => "checkmate",
            Outcome::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

/// Classifies `state` for its side to move, computed fresh from check status
/// and legal-move availability.
pub fn classify_outcome(state: &GameState, config: &GameConfig) -> Outcome {
    let side = state.side_to_move;
    let in_check = is_king_in_check(&state.board, side);
    Outcome::from_flags(in_check, has_legal_move(state, side, config))
}
