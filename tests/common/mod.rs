#![allow(dead_code)]

use plum_rules::{Board, Color, Game, MoveReport, Piece, PieceKind, Square};

pub fn sq(name: &str) -> Square {
    name.parse().expect("test square name should parse")
}

/// Board from eight rows, top row first. Upper case is White, lower case
/// Black, `.` empty.
pub fn diagram(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (rank_row, row) in rows.iter().enumerate() {
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
            let square = Square::new(rank_row as u8, file as u8).expect("diagram is 8x8");
            board.set(square, Some(Piece::new(color, kind)));
        }
    }
    board
}

/// Plays `from`-`to` pairs such as `["e2e4", "e7e5"]`, panicking on refusal.
pub fn play_line(game: &mut Game, line: &[&str]) -> Option<MoveReport> {
    let mut last = None;
    for text in line {
        let (from, to) = text.split_at(2);
        let report = game
            .attempt_move(sq(from), sq(to), None)
            .unwrap_or_else(|err| panic!("{text} should be legal: {err}"));
        last = Some(report);
    }
    last
}
