use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scoreboard_common::config::Config;
use scoreboard_common::success;
use scoreboard_common::validate::SCORE_RANGE;
use scoreboard_core::{GameId, GameLibrary, PlayerId};

use crate::terminal::{print, report};

const TITLES: &[&str] = &[
    "Chess", "Go", "Poker", "Backgammon", "Scrabble", "Carcassonne", "Catan", "Hanabi",
];

#[derive(Debug, Clone, Copy)]
pub struct SimulationPlan {
    pub games: usize,
    pub players: usize,
    pub results: usize,
    pub seed: u64,
}

pub fn simulate(plan: SimulationPlan, cfg: &Config) -> anyhow::Result<()> {
    print::header("simulating results", cfg.quiet);
    success!("Using seed {}", plan.seed);

    let library: GameLibrary = populate(plan)?;
    report::print_library(&library, cfg);
    Ok(())
}

/// Registers the planned games and players, then records random results.
///
/// The same seed always yields the same library.
pub fn populate(plan: SimulationPlan) -> anyhow::Result<GameLibrary> {
    if plan.results > 0 && (plan.games == 0 || plan.players == 0) {
        anyhow::bail!("recording results needs at least one game and one player");
    }

    let mut rng: StdRng = StdRng::seed_from_u64(plan.seed);
    let mut library = GameLibrary::new();

    let games: Vec<GameId> = (0..plan.games)
        .map(|i| library.add_game(game_title(i)))
        .collect::<Result<_, _>>()?;

    let players: Vec<PlayerId> = (0..plan.players)
        .map(|i| library.add_player(format!("player{:02}", i + 1)))
        .collect::<Result<_, _>>()?;

    for _ in 0..plan.results {
        let player: PlayerId = players[rng.random_range(0..players.len())];
        let game: GameId = games[rng.random_range(0..games.len())];
        let score: i64 = rng.random_range(SCORE_RANGE);
        library.add_result(player, game, score)?;
    }

    Ok(library)
}

fn game_title(i: usize) -> String {
    let base: &str = TITLES[i % TITLES.len()];
    match i / TITLES.len() {
        0 => base.to_string(),
        round => format!("{base} {}", round + 1),
    }
}
