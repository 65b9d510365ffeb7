//! Fixtures shared by the unit tests.

use crate::game_state::chess_types::*;

pub fn sq(name: &str) -> Square {
    name.parse().expect("test square name should parse")
}

/// Board from eight rows, top row first (Black's home rank). Upper case is
/// White, lower case Black, `.` empty.
pub fn diagram(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (rank, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 8, "row {rank} must have eight cells");
        for (file, cell) in row.chars().enumerate() {
            if cell == '.' {
                continue;
            }
            let color = if cell.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match cell.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("unknown piece letter {other:?}"),
            };
            board.set(
                Square::at(rank as u8, file as u8),
                Some(Piece::new(color, kind)),
            );
        }
    }
    board
}
