use scoreboard_common::config::Config;
use scoreboard_common::{success, warn};
use scoreboard_core::{GameId, GameLibrary, PlayerId};

use crate::terminal::{print, report};

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    print::header("recording a chess tournament", cfg.quiet);

    let library: GameLibrary = build_library()?;
    success!(
        "Recorded {} results for {} players",
        library.result_count(),
        library.player_count()
    );

    report::print_library(&library, cfg);
    Ok(())
}

fn build_library() -> anyhow::Result<GameLibrary> {
    let mut library = GameLibrary::new();

    let chess: GameId = library.add_game("Chess")?;
    let checkers: GameId = library.add_game("Checkers")?;
    let alice: PlayerId = library.add_player("alice")?;
    let bob: PlayerId = library.add_player("bob")?;

    library.add_result(alice, chess, 100)?;
    library.add_result(bob, chess, 200)?;
    library.add_result(alice, checkers, 350)?;

    // show the rules biting without aborting the demo
    if let Err(err) = library.add_player("a") {
        warn!("Rejected player 'a': {err}");
    }
    if let Err(err) = library.add_result(bob, checkers, 9000) {
        warn!("Rejected score 9000: {err}");
    }
    if let Some(game) = library.game_mut(chess) {
        if let Err(err) = game.set_title("Chess960") {
            warn!("Rejected retitle: {err}");
        }
    }

    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_library_matches_round_trip() {
        let library = build_library().unwrap();
        let chess = library.games().next().unwrap().id();
        let bob = library.find_player("bob").unwrap();

        assert_eq!(library.player_count(), 2, "rejected player must not be registered");
        assert_eq!(library.result_count(), 3, "rejected score must not be registered");
        assert_eq!(library.highest_scored(chess), Some(bob));
        assert_eq!(library.game(chess).unwrap().title(), "Chess");
    }
}
