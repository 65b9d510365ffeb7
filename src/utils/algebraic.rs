//! Algebraic square names (`e4`) for squares.
//!
//! Rank index 0 is printed as `8` and rank index 7 as `1`, matching the
//! board orientation where White starts on rank index 7.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::SquareError;
use crate::game_state::chess_types::Square;

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidAlgebraic(text.to_owned()));
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::InvalidAlgebraic(text.to_owned()));
        }

        Ok(Square::at(b'8' - rank, file - b'a'))
    }
}

impl Square {
    #[inline]
    pub fn from_algebraic(text: &str) -> Result<Self, SquareError> {
        text.parse()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = char::from(b'a' + self.file());
        let rank_char = char::from(b'8' - self.rank());
        write!(f, "{file_char}{rank_char}")
    }
}
