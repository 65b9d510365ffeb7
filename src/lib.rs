//! Crate root for the Plum chess rules engine.
//!
//! The engine decides which moves are legal for a position, applies them
//! together with their castling, en-passant and promotion side effects, and
//! classifies the result as ongoing, check, checkmate or stalemate. Rendering
//! and input handling belong to the caller; `game::controller::Game` is the
//! surface they talk to.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod piece_rules;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod special_moves;
}

pub mod game {
    pub mod config;
    pub mod controller;
    pub mod outcome;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}

#[cfg(test)]
mod test_support;

pub use chess_errors::{MoveError, MoveResult, SquareError};
pub use game::config::{GameConfig, PromotionPolicy};
pub use game::controller::{Game, MoveReport, Phase, Selection, Step};
pub use game::outcome::Outcome;
pub use game_state::chess_types::{
    Board, CastleSide, CastlingRights, Color, GameState, Piece, PieceKind, Square,
};
pub use moves::move_descriptions::{Move, MoveKind};
