//! Plays games of uniformly random legal moves through the controller and
//! tallies how they end.
//!
//! Run with:
//! `RUST_LOG=info cargo run --release --bin playout -- --games 50 --seed 7`

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use plum_rules::utils::render_game_state::render_game_state;
use plum_rules::{Color, Game, Outcome};

#[derive(Debug, Default)]
struct Tally {
    white_wins: u32,
    black_wins: u32,
    stalemates: u32,
    unfinished: u32,
    plies: u64,
}

fn play_one(rng: &mut StdRng, max_plies: u32) -> Result<(Game, u32), String> {
    let mut game = Game::new_game();
    let mut plies = 0u32;
    while plies < max_plies && !game.outcome().is_terminal() {
        let moves = game.legal_moves(game.side_to_move());
        let mv = *moves
            .choose(rng)
            .ok_or_else(|| "non-terminal position without legal moves".to_owned())?;
        game.attempt_move(mv.from, mv.to, mv.promotion)
            .map_err(|err| format!("generated move {mv} was refused: {err}"))?;
        plies += 1;
    }
    Ok((game, plies))
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut games = 20u32;
    let mut seed = 1234u64;
    let mut max_plies = 300u32;
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--games" if i + 1 < args.len() => {
                if let Ok(v) = args[i + 1].parse::<u32>() {
                    games = v.max(1);
                }
                i += 1;
            }
            "--seed" if i + 1 < args.len() => {
                if let Ok(v) = args[i + 1].parse::<u64>() {
                    seed = v;
                }
                i += 1;
            }
            "--max-plies" if i + 1 < args.len() => {
                if let Ok(v) = args[i + 1].parse::<u32>() {
                    max_plies = v.max(1);
                }
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut tally = Tally::default();

    for game_index in 0..games {
        let (game, plies) = play_one(&mut rng, max_plies)?;
        tally.plies += u64::from(plies);
        match (game.outcome(), game.state().winner()) {
            (Outcome::Checkmate, Some(Color::White)) => tally.white_wins += 1,
            (Outcome::Checkmate, _) => tally.black_wins += 1,
            (Outcome::Stalemate, _) => tally.stalemates += 1,
            _ => tally.unfinished += 1,
        }
        info!("game {game_index}: {} after {plies} plies", game.outcome());
        debug!("final position:\n{}", render_game_state(game.state()));
    }

    println!(
        "games={games} seed={seed} white_mates={} black_mates={} stalemates={} unfinished={} avg_plies={:.1}",
        tally.white_wins,
        tally.black_wins,
        tally.stalemates,
        tally.unfinished,
        tally.plies as f64 / f64::from(games)
    );
    Ok(())
}
