use crate::game_state::chess_types::{Board, Color, Square};

/// Ordinary pawn moves: a single push onto an empty square, a double push
/// from the start rank through two empty squares, or a diagonal step onto an
/// enemy piece. En passant needs game state and lives with the special moves.
pub fn can_reach(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let dir = color.pawn_direction();
    let (d_rank, d_file) = from.delta_to(to);

    if d_file == 0 {
        if d_rank == dir {
            return board.is_empty(to);
        }
        if d_rank == 2 * dir && from.rank() == color.pawn_start_rank() {
            let Some(passed) = from.offset(dir, 0) else {
                return false;
            };
            return board.is_empty(passed) && board.is_empty(to);
        }
        return false;
    }

    d_rank == dir
        && d_file.abs() == 1
        && board
            .piece_at(to)
            .is_some_and(|target| target.color != color)
}

/// Diagonal-forward adjacency. A pawn attacks these squares whether or not
/// anything stands on them.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let (d_rank, d_file) = from.delta_to(target);
    d_rank == color.pawn_direction() && d_file.abs() == 1
}

#[cfg(test)]
mod tests {
    use super::{can_reach, pawn_attacks};
    use crate::game_state::chess_types::*;
    use crate::test_support::sq;

    #[test]
    fn pawns_push_one_or_two_from_start() {
        let board = Board::standard();
        assert!(can_reach(Color::White, sq("e2"), sq("e3"), &board));
        assert!(can_reach(Color::White, sq("e2"), sq("e4"), &board));
        assert!(!can_reach(Color::White, sq("e2"), sq("e5"), &board));
        assert!(can_reach(Color::Black, sq("d7"), sq("d5"), &board));
        assert!(!can_reach(Color::Black, sq("d7"), sq("d8"), &board));
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut board = Board::standard();
        board.set(sq("e3"), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(!can_reach(Color::White, sq("e2"), sq("e4"), &board));
        assert!(!can_reach(Color::White, sq("e2"), sq("e3"), &board));
        assert!(can_reach(Color::White, sq("d2"), sq("e3"), &board));
        assert!(can_reach(Color::White, sq("f2"), sq("e3"), &board));
    }

    #[test]
    fn double_push_only_from_start_rank() {
        let mut board = Board::empty();
        board.set(sq("e3"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(!can_reach(Color::White, sq("e3"), sq("e5"), &board));
    }

    #[test]
    fn diagonal_needs_enemy_but_attack_does_not() {
        let board = Board::standard();
        assert!(!can_reach(Color::White, sq("e2"), sq("d3"), &board));
        assert!(pawn_attacks(Color::White, sq("e2"), sq("d3")));
        assert!(pawn_attacks(Color::Black, sq("e7"), sq("f6")));
        assert!(!pawn_attacks(Color::Black, sq("e7"), sq("f8")));
    }
}
