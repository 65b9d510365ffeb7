//! The aggregate position a game is played on.
//!
//! `GameState` is owned by the controller. Everything below it either reads
//! it by reference or receives a scratch copy for simulation; the
//! en-passant target travels as an explicit field rather than ambient state.

use crate::game::config::GameConfig;
use crate::game::outcome::{classify_outcome, Outcome};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a pawn just skipped with a double push. Lives for one reply.
    pub en_passant: Option<Square>,
    /// Classification of the position for `side_to_move`.
    pub outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, White to move, all rights intact.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            outcome: Outcome::Ongoing,
        }
    }

    /// Builds a position from its parts and classifies it.
    ///
    /// # Panics
    ///
    /// Panics if either king is missing from `board`.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
    ) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            castling,
            en_passant,
            outcome: Outcome::Ongoing,
        };
        state.outcome = classify_outcome(&state, &GameConfig::default());
        state
    }

    /// The side that delivered mate, once the game is decided.
    pub fn winner(&self) -> Option<Color> {
        match self.outcome {
            Outcome::Checkmate => Some(self.side_to_move.opposite()),
            _ => None,
        }
    }
}
