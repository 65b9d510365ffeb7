use crate::game_state::chess_types::{Board, Color, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Deltas of {2, 1} in either order. Knights jump, so nothing blocks them.
pub fn can_reach(_color: Color, from: Square, to: Square, _board: &Board) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|&(d_rank, d_file)| from.offset(d_rank, d_file) == Some(to))
}
