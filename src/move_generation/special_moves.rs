//! Castling, en passant and promotion.
//!
//! These are the moves whose legality depends on more than the static
//! board: castling rights and the en-passant target both live on
//! `GameState` and are passed in explicitly.

use crate::chess_errors::{MoveError, MoveResult};
use crate::game::config::{GameConfig, PromotionPolicy};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::{en_passant_victim_square, Move, MoveKind};

/// Whether a `color` pawn on `from` may capture en passant onto `to`.
///
/// Requires `to` to be the current target and empty, a one-square diagonal
/// step forward, the capturer on its en-passant rank, and an enemy pawn
/// beside it on the destination file.
pub fn en_passant_capture_allowed(
    state: &GameState,
    color: Color,
    from: Square,
    to: Square,
) -> bool {
    if state.en_passant != Some(to) || !state.board.is_empty(to) {
        return false;
    }
    let (d_rank, d_file) = from.delta_to(to);
    if d_rank != color.pawn_direction() || d_file.abs() != 1 {
        return false;
    }
    if from.rank() != color.en_passant_rank() {
        return false;
    }
    state.board.piece_at(en_passant_victim_square(from, to))
        == Some(Piece::new(color.opposite(), PieceKind::Pawn))
}

/// The square a pawn passed over, when `mv` is a double push.
#[inline]
pub fn next_en_passant_target(mv: &Move) -> Option<Square> {
    match mv.kind {
        MoveKind::DoublePawnPush => Some(Square::at(
            (mv.from.rank() + mv.to.rank()) / 2,
            mv.from.file(),
        )),
        _ => None,
    }
}

/// Home square of `color`'s king.
#[inline]
pub fn king_start_square(color: Color) -> Square {
    Square::at(color.home_rank(), KING_START_FILE)
}

/// Starting corner of `color`'s rook on `side`.
#[inline]
pub fn rook_start_square(color: Color, side: CastleSide) -> Square {
    Square::at(color.home_rank(), side.rook_file())
}

#[inline]
pub fn castling_king_destination(color: Color, side: CastleSide) -> Square {
    Square::at(color.home_rank(), side.king_destination_file())
}

/// Rook relocation `(from, to)` that accompanies castling on `side`.
#[inline]
pub fn castling_rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    (
        rook_start_square(color, side),
        Square::at(color.home_rank(), side.rook_destination_file()),
    )
}

/// Which castle a king move from `from` to `to` would be, if any.
pub fn castle_side_for(color: Color, from: Square, to: Square) -> Option<CastleSide> {
    if from != king_start_square(color) {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|&side| castling_king_destination(color, side) == to)
}

/// All castling conditions for `color` on `side`:
/// rights intact, king and rook on their corners, the squares between them
/// empty, the king not in check, and neither its transit nor destination
/// square attacked.
pub fn castling_allowed(state: &GameState, color: Color, side: CastleSide) -> bool {
    if !state.castling.can_castle(color, side) {
        return false;
    }

    let board = &state.board;
    let king_from = king_start_square(color);
    let rook_from = rook_start_square(color, side);
    if board.piece_at(king_from) != Some(Piece::new(color, PieceKind::King))
        || board.piece_at(rook_from) != Some(Piece::new(color, PieceKind::Rook))
    {
        return false;
    }

    let home = color.home_rank();
    let (low, high) = if rook_from.file() < king_from.file() {
        (rook_from.file(), king_from.file())
    } else {
        (king_from.file(), rook_from.file())
    };
    if ((low + 1)..high).any(|file| !board.is_empty(Square::at(home, file))) {
        return false;
    }

    let enemy = color.opposite();
    let king_to = castling_king_destination(color, side);
    let transit = Square::at(home, (king_from.file() + king_to.file()) / 2);
    !is_square_attacked(board, king_from, enemy)
        && !is_square_attacked(board, transit, enemy)
        && !is_square_attacked(board, king_to, enemy)
}

/// Revokes whatever castling rights `mv` costs.
///
/// Moving the king loses both sides; moving a rook off its corner loses that
/// side. With `forfeit_castling_on_rook_capture`, taking a rook on its
/// corner also revokes its owner's right.
pub fn update_castling_rights(rights: &mut CastlingRights, mv: &Move, config: &GameConfig) {
    let color = mv.piece.color;
    match mv.piece.kind {
        PieceKind::King => rights.mark_king_moved(color),
        PieceKind::Rook => {
            for side in CastleSide::BOTH {
                if mv.from == rook_start_square(color, side) {
                    rights.mark_rook_moved(color, side);
                }
            }
        }
        _ => {}
    }

    if !config.forfeit_castling_on_rook_capture {
        return;
    }
    if let Some(captured) = mv.captured {
        if captured.kind == PieceKind::Rook {
            for side in CastleSide::BOTH {
                if mv.to == rook_start_square(captured.color, side) {
                    rights.mark_rook_moved(captured.color, side);
                }
            }
        }
    }
}

/// True when a `piece` landing on `to` must promote.
#[inline]
pub fn needs_promotion(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank()
}

/// Settles the promotion kind of a move request.
///
/// Returns `None` for moves that do not promote; any requested kind is
/// ignored for those.
pub fn resolve_promotion(
    piece: Piece,
    to: Square,
    requested: Option<PieceKind>,
    policy: PromotionPolicy,
) -> MoveResult<Option<PieceKind>> {
    if !needs_promotion(piece, to) {
        return Ok(None);
    }
    let kind = match (requested, policy) {
        (Some(kind), _) => kind,
        (None, PromotionPolicy::DefaultTo(kind)) => kind,
        (None, PromotionPolicy::RequireChoice) => return Err(MoveError::AmbiguousPromotion(to)),
    };
    if !kind.is_promotion_target() {
        return Err(MoveError::InvalidPromotionChoice(kind));
    }
    Ok(Some(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{diagram, sq};

    #[test]
    fn en_passant_needs_matching_target_and_rank() {
        let board = diagram([
            "....k...", //
            "........", //
            "........", //
            "...pP...", //
            "........", //
            "........", //
            "........", //
            "....K...", //
        ]);
        let mut state = GameState::from_parts(board, Color::White, CastlingRights::none(), None);
        assert!(!en_passant_capture_allowed(&state, Color::White, sq("e5"), sq("d6")));

        state.en_passant = Some(sq("d6"));
        assert!(en_passant_capture_allowed(&state, Color::White, sq("e5"), sq("d6")));
        assert!(!en_passant_capture_allowed(&state, Color::White, sq("e5"), sq("f6")));
    }

    #[test]
    fn double_push_sets_passed_square() {
        let mv = Move {
            from: sq("c7"),
            to: sq("c5"),
            piece: Piece::new(Color::Black, PieceKind::Pawn),
            captured: None,
            promotion: None,
            kind: MoveKind::DoublePawnPush,
        };
        assert_eq!(next_en_passant_target(&mv), Some(sq("c6")));
        let single = Move {
            to: sq("c6"),
            kind: MoveKind::Normal,
            ..mv
        };
        assert_eq!(next_en_passant_target(&single), None);
    }

    #[test]
    fn castling_blocked_by_attacked_transit_square() {
        let board = diagram([
            "....k...", //
            "........", //
            "........", //
            "........", //
            "........", //
            ".....r..", //
            "........", //
            "R...K..R", //
        ]);
        let state = GameState::from_parts(board, Color::White, CastlingRights::all(), None);
        assert!(!castling_allowed(&state, Color::White, CastleSide::Kingside));
        assert!(castling_allowed(&state, Color::White, CastleSide::Queenside));
    }

    #[test]
    fn queenside_b_file_may_be_attacked_but_not_occupied() {
        let mut board = diagram([
            "....k...", //
            "........", //
            "........", //
            "........", //
            "........", //
            ".r......", //
            "........", //
            "R...K...", //
        ]);
        let state = GameState::from_parts(board, Color::White, CastlingRights::all(), None);
        assert!(castling_allowed(&state, Color::White, CastleSide::Queenside));

        board.set(sq("b1"), Some(Piece::new(Color::White, PieceKind::Knight)));
        let state = GameState::from_parts(board, Color::White, CastlingRights::all(), None);
        assert!(!castling_allowed(&state, Color::White, CastleSide::Queenside));
    }

    #[test]
    fn rook_capture_on_corner_forfeits_right_by_default() {
        let mv = Move {
            from: sq("b7"),
            to: sq("a8"),
            piece: Piece::new(Color::White, PieceKind::Bishop),
            captured: Some(Piece::new(Color::Black, PieceKind::Rook)),
            promotion: None,
            kind: MoveKind::Normal,
        };

        let mut rights = CastlingRights::all();
        update_castling_rights(&mut rights, &mv, &GameConfig::default());
        assert!(!rights.can_castle(Color::Black, CastleSide::Queenside));
        assert!(rights.can_castle(Color::Black, CastleSide::Kingside));

        let lenient = GameConfig::default().with_forfeit_castling_on_rook_capture(false);
        let mut rights = CastlingRights::all();
        update_castling_rights(&mut rights, &mv, &lenient);
        assert!(rights.can_castle(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn promotion_policy_is_respected() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let a8 = sq("a8");
        assert_eq!(
            resolve_promotion(pawn, a8, None, PromotionPolicy::RequireChoice),
            Err(MoveError::AmbiguousPromotion(a8))
        );
        assert_eq!(
            resolve_promotion(pawn, a8, None, PromotionPolicy::DefaultTo(PieceKind::Queen)),
            Ok(Some(PieceKind::Queen))
        );
        assert_eq!(
            resolve_promotion(pawn, a8, Some(PieceKind::Knight), PromotionPolicy::RequireChoice),
            Ok(Some(PieceKind::Knight))
        );
        assert_eq!(
            resolve_promotion(pawn, a8, Some(PieceKind::King), PromotionPolicy::RequireChoice),
            Err(MoveError::InvalidPromotionChoice(PieceKind::King))
        );
        assert_eq!(
            resolve_promotion(pawn, sq("a6"), Some(PieceKind::Queen), PromotionPolicy::RequireChoice),
            Ok(None)
        );
    }
}
