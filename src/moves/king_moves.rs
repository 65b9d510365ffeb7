use crate::game_state::chess_types::{Board, Color, Square};

/// One step in any direction. Castling is a special move handled elsewhere.
pub fn can_reach(_color: Color, from: Square, to: Square, _board: &Board) -> bool {
    let (d_rank, d_file) = from.delta_to(to);
    d_rank.abs() <= 1 && d_file.abs() <= 1 && (d_rank, d_file) != (0, 0)
}

#[cfg(test)]
mod tests {
    use super::can_reach;
    use crate::game_state::chess_types::*;
    use crate::test_support::sq;

    #[test]
    fn king_steps_one_square() {
        let board = Board::empty();
        assert!(can_reach(Color::White, sq("e1"), sq("f2"), &board));
        assert!(can_reach(Color::White, sq("e1"), sq("d1"), &board));
        assert!(!can_reach(Color::White, sq("e1"), sq("g1"), &board));
        assert!(!can_reach(Color::White, sq("e1"), sq("e1"), &board));
    }

    #[test]
    fn king_in_corner_has_three_steps() {
        let board = Board::empty();
        let count = Square::all()
            .filter(|&to| can_reach(Color::Black, sq("h8"), to, &board))
            .count();
        assert_eq!(count, 3);
    }
}
