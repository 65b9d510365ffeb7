//! Leaf-node counting over the legal move generator.
//!
//! Perft totals for well-known positions are published, which makes this
//! the quickest end-to-end check of the generator, the special moves and
//! the apply/undo pair together.

use crate::game::config::GameConfig;
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Counts leaf positions `depth` plies below `game_state`.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut scratch = *game_state;
    perft_recurse(&mut scratch, depth, &GameConfig::default())
}

fn perft_recurse(state: &mut GameState, depth: u8, config: &GameConfig) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    for mv in legal_moves(state, state.side_to_move, config) {
        let undo = apply_move(state, &mv, config);
        if depth == 1 {
            counts.nodes += 1;
            counts.captures += usize::from(mv.is_capture());
            counts.en_passant += usize::from(mv.is_en_passant());
            counts.castles += usize::from(mv.is_castle());
            counts.promotions += usize::from(mv.is_promotion());
            counts.checks += usize::from(is_king_in_check(&state.board, state.side_to_move));
        } else {
            counts.merge(perft_recurse(state, depth - 1, config));
        }
        undo_move(state, &undo);
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::chess_types::*;
    use crate::test_support::diagram;

    #[test]
    fn start_position_matches_published_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth3 = perft(&game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
    }

    #[test]
    fn endgame_with_en_passant_matches_published_counts() {
        let board = diagram([
            "........", //
            "..p.....", //
            "...p....", //
            "KP.....r", //
            ".R...p.k", //
            "........", //
            "....P.P.", //
            "........", //
        ]);
        let game = GameState::from_parts(board, Color::White, CastlingRights::none(), None);
        assert_eq!(perft(&game, 1).nodes, 14);
        assert_eq!(perft(&game, 2).nodes, 191);

        let depth3 = perft(&game, 3);
        assert_eq!(depth3.nodes, 2812);
        assert_eq!(depth3.en_passant, 2);
    }

    #[test]
    fn kiwipete_matches_published_counts() {
        let board = diagram([
            "r...k..r", //
            "p.ppqpb.", //
            "bn..pnp.", //
            "...PN...", //
            ".p..P...", //
            "..N..Q.p", //
            "PPPBBPPP", //
            "R...K..R", //
        ]);
        let game = GameState::from_parts(board, Color::White, CastlingRights::all(), None);

        let depth1 = perft(&game, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&game, 2);
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
        assert_eq!(depth2.checks, 3);
    }
}
