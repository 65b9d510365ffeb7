use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::{bishop_moves, rook_moves};

/// Rook rule for orthogonal moves, bishop rule for diagonal ones.
pub fn can_reach(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (d_rank, d_file) = from.delta_to(to);
    if d_rank == 0 || d_file == 0 {
        rook_moves::can_reach(color, from, to, board)
    } else if d_rank.abs() == d_file.abs() {
        bishop_moves::can_reach(color, from, to, board)
    } else {
        false
    }
}
