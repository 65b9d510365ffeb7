use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::piece_rules::is_path_clear;

/// Equal rank and file distance with nothing in between.
pub fn can_reach(_color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (d_rank, d_file) = from.delta_to(to);
    if d_rank == 0 || d_rank.abs() != d_file.abs() {
        return false;
    }
    is_path_clear(board, from, to)
}
