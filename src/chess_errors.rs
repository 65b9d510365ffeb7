//! Errors reported by the rules engine.
//!
//! Every failure a caller can provoke through the public surface is returned
//! as a value of one of these enums, never raised as a panic. Each variant
//! carries the squares or pieces involved so a presentation layer can turn
//! it into a user-facing message through `Display`.
//!
//! The one condition that is not represented here is a missing king: that
//! can only follow from an already corrupted position and is treated as an
//! assertion failure by the attack detector.

use thiserror::Error;

use crate::game::outcome::Outcome;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Result alias for controller operations.
pub type MoveResult<T> = Result<T, MoveError>;

/// Why a selection or move request was refused.
///
/// A refused request never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The square holds a piece of the side that is not to move.
    #[error("the piece on {square} is {owner} but it is {side_to_move} to move")]
    NotYourTurn {
        square: Square,
        owner: Color,
        side_to_move: Color,
    },

    /// Selected a square with no piece on it.
    #[error("there is no piece on {0}")]
    EmptySquareSelected(Square),

    /// The destination fails the piece's movement rules (wrong shape,
    /// blocked path, own piece on the target, castling conditions unmet).
    #[error("a {piece} cannot move from {from} to {to}")]
    IllegalGeometry { piece: Piece, from: Square, to: Square },

    /// The move is geometrically fine but leaves the mover's king attacked.
    #[error("moving {from} to {to} would leave the {color} king in check")]
    OwnKingExposed { from: Square, to: Square, color: Color },

    /// The game already ended in checkmate or stalemate.
    #[error("the game is over: {0}")]
    GameAlreadyOver(Outcome),

    /// A pawn reaches the last rank and the configured policy requires an
    /// explicit promotion choice that was not supplied.
    #[error("a pawn reaching {0} needs a promotion choice")]
    AmbiguousPromotion(Square),

    /// Promotion to a pawn or king was requested.
    #[error("a pawn cannot promote to a {0}")]
    InvalidPromotionChoice(PieceKind),

    /// A destination was submitted before any piece was selected.
    #[error("no piece is selected")]
    NothingSelected,
}

/// Malformed square coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("rank {rank}, file {file} is off the board")]
    OutOfBounds { rank: i16, file: i16 },

    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),
}
