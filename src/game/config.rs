//! Rule policies the controller applies when committing moves.

use crate::game_state::chess_types::PieceKind;

/// What happens when a pawn reaches the last rank without a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionPolicy {
    /// The move is refused with `MoveError::AmbiguousPromotion`.
    RequireChoice,
    /// The pawn becomes this kind. `DefaultTo(PieceKind::Queen)` is the
    /// classic auto-queen behaviour.
    DefaultTo(PieceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub promotion: PromotionPolicy,
    /// Capturing an unmoved rook on its starting corner also revokes the
    /// owner's castling right on that side. When off, rights are only lost
    /// when the king or rook itself moves.
    pub forfeit_castling_on_rook_capture: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            promotion: PromotionPolicy::RequireChoice,
            forfeit_castling_on_rook_capture: true,
        }
    }
}

impl GameConfig {
    pub fn with_promotion(mut self, promotion: PromotionPolicy) -> Self {
        self.promotion = promotion;
        self
    }

    pub fn with_forfeit_castling_on_rook_capture(mut self, forfeit: bool) -> Self {
        self.forfeit_castling_on_rook_capture = forfeit;
        self
    }
}
