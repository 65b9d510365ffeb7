//! Turn orchestration and the selection state machine.
//!
//! `Game` owns the one `GameState` of a running game. A presentation layer
//! drives it either square by square (`select` then `select_destination`)
//! or with whole moves (`attempt_move`). Every refused request leaves the
//! position untouched and comes back as a `MoveError`.
//!
//! The controller is not reentrant: a host that shares it between threads
//! must serialize calls.

use log::debug;

use crate::chess_errors::{MoveError, MoveResult};
use crate::game::config::GameConfig;
use crate::game::outcome::{classify_outcome, Outcome};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, build_move};
use crate::move_generation::legal_move_checks::{attackers_to_square, is_king_in_check, king_square};
use crate::move_generation::legal_move_generator::{is_legal, legal_destinations, legal_moves};
use crate::move_generation::move_generator::pseudo_legal_destinations;
use crate::move_generation::special_moves::resolve_promotion;
use crate::moves::move_descriptions::Move;

/// A piece picked up by the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub piece: Piece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    AwaitingDestination(Selection),
    GameOver(Outcome),
}

/// A committed move and the position it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub played: Move,
    /// Classification for the side now to move.
    pub outcome: Outcome,
    /// Squares of the pieces giving check, empty when not in check.
    pub checkers: Vec<Square>,
    pub state: GameState,
}

/// What a destination click turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Moved(MoveReport),
    /// Clicked another own piece; it is now the selection.
    Reselected(Selection),
    /// Clicked the selected square again.
    Deselected,
}

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    phase: Phase,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Game {
    pub fn new_game() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::from_state(GameState::new_game(), config)
    }

    /// Resumes play from an arbitrary position. The outcome is reclassified
    /// under `config`, so a state whose fields were edited after
    /// construction is judged by its current board.
    pub fn from_state(mut state: GameState, config: GameConfig) -> Self {
        state.outcome = classify_outcome(&state, &config);
        let phase = if state.outcome.is_terminal() {
            Phase::GameOver(state.outcome)
        } else {
            Phase::AwaitingSelection
        };
        Self {
            state,
            phase,
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    /// Starts over from the initial position, keeping the config.
    pub fn reset(&mut self) {
        debug!("new game");
        self.state = GameState::new_game();
        self.phase = Phase::AwaitingSelection;
    }

    /// Picks up the piece on `square`. Allowed while a piece is already
    /// selected, in which case the selection moves.
    pub fn select(&mut self, square: Square) -> MoveResult<Selection> {
        if let Phase::GameOver(outcome) = self.phase {
            return Err(MoveError::GameAlreadyOver(outcome));
        }
        let piece = self.own_piece_at(square)?;
        let selection = Selection { square, piece };
        self.phase = Phase::AwaitingDestination(selection);
        Ok(selection)
    }

    /// Drops the current selection, if any.
    pub fn deselect(&mut self) {
        if let Phase::AwaitingDestination(_) = self.phase {
            self.phase = Phase::AwaitingSelection;
        }
    }

    /// Second click of the selection state machine.
    ///
    /// An illegal destination keeps the selection so the player can try
    /// another square.
    pub fn select_destination(
        &mut self,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> MoveResult<Step> {
        let selection = match self.phase {
            Phase::AwaitingDestination(selection) => selection,
            Phase::AwaitingSelection => return Err(MoveError::NothingSelected),
            Phase::GameOver(outcome) => return Err(MoveError::GameAlreadyOver(outcome)),
        };

        if to == selection.square {
            self.phase = Phase::AwaitingSelection;
            return Ok(Step::Deselected);
        }
        match self.state.board.piece_at(to) {
            Some(piece) if piece.color == selection.piece.color => {
                return self.select(to).map(Step::Reselected);
            }
            _ => {}
        }

        self.attempt_move(selection.square, to, promotion)
            .map(Step::Moved)
    }

    /// Validates and commits one move for the side to move.
    ///
    /// `promotion` is required for a pawn reaching the last rank unless the
    /// config supplies a default; it is ignored for every other move.
    pub fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> MoveResult<MoveReport> {
        let mv = self
            .validate(from, to, promotion)
            .inspect_err(|err| debug!("rejected {from}{to}: {err}"))?;
        Ok(self.commit(&mv))
    }

    /// Legal moves for `color`. Empty unless `color` is to move and the game
    /// is still running.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        if color != self.state.side_to_move || self.state.outcome.is_terminal() {
            return Vec::new();
        }
        legal_moves(&self.state, color, &self.config)
    }

    /// Legal destinations of the side-to-move piece on `from`, for
    /// highlighting.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        match self.state.board.piece_at(from) {
            Some(piece) if piece.color == self.state.side_to_move => {
                if self.state.outcome.is_terminal() {
                    Vec::new()
                } else {
                    legal_destinations(&self.state, from, &self.config)
                }
            }
            _ => Vec::new(),
        }
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.state.board, color)
    }

    fn own_piece_at(&self, square: Square) -> MoveResult<Piece> {
        let piece = self
            .state
            .board
            .piece_at(square)
            .ok_or(MoveError::EmptySquareSelected(square))?;
        if piece.color != self.state.side_to_move {
            return Err(MoveError::NotYourTurn {
                square,
                owner: piece.color,
                side_to_move: self.state.side_to_move,
            });
        }
        Ok(piece)
    }

    fn validate(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> MoveResult<Move> {
        if self.state.outcome.is_terminal() {
            return Err(MoveError::GameAlreadyOver(self.state.outcome));
        }
        let piece = self.own_piece_at(from)?;

        if !pseudo_legal_destinations(piece, from, &self.state).contains(&to) {
            return Err(MoveError::IllegalGeometry { piece, from, to });
        }
        let promotion = resolve_promotion(piece, to, promotion, self.config.promotion)?;

        let mv = build_move(&self.state, piece, from, to, promotion);
        if !is_legal(&self.state, &mv, &self.config) {
            return Err(MoveError::OwnKingExposed {
                from,
                to,
                color: piece.color,
            });
        }
        Ok(mv)
    }

    fn commit(&mut self, mv: &Move) -> MoveReport {
        apply_move(&mut self.state, mv, &self.config);

        let outcome = classify_outcome(&self.state, &self.config);
        self.state.outcome = outcome;
        self.phase = if outcome.is_terminal() {
            Phase::GameOver(outcome)
        } else {
            Phase::AwaitingSelection
        };

        let checkers = match outcome {
            Outcome::Check | Outcome::Checkmate => {
                let board = &self.state.board;
                let king = king_square(board, self.state.side_to_move);
                attackers_to_square(board, king, mv.piece.color)
                    .into_iter()
                    .map(|(square, _)| square)
                    .collect()
            }
            Outcome::Ongoing | Outcome::Stalemate => Vec::new(),
        };

        debug!("{} played {mv}: {outcome}", mv.piece.color);
        MoveReport {
            played: *mv,
            outcome,
            checkers,
            state: self.state,
        }
    }
}
