//! Per-game standings rendered from a [`GameLibrary`].

use colored::*;
use scoreboard_common::config::Config;
use scoreboard_common::success;
use scoreboard_core::{GameLibrary, GameRef};

use crate::sprint;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLine {
    pub username: String,
    pub times_played: usize,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub title: String,
    pub players: Vec<PlayerLine>,
    pub top: Option<String>,
}

/// Builds one summary per registered game, in registration order.
pub fn summarize(library: &GameLibrary) -> Vec<GameSummary> {
    library
        .games()
        .map(|game| summarize_game(library, game))
        .collect()
}

fn summarize_game(library: &GameLibrary, game: GameRef<'_>) -> GameSummary {
    let players: Vec<PlayerLine> = game
        .players()
        .into_iter()
        .filter_map(|id| library.player(id))
        .map(|player| PlayerLine {
            username: player.username().to_string(),
            times_played: player.num_times_played(game.id()),
            average: game.average_score(player.id()),
        })
        .collect();

    let top: Option<String> = library
        .highest_scored(game.id())
        .and_then(|id| library.player(id))
        .map(|player| player.username().to_string());

    GameSummary {
        title: game.title().to_string(),
        players,
        top,
    }
}

pub fn print_library(library: &GameLibrary, cfg: &Config) {
    let summaries: Vec<GameSummary> = summarize(library);

    if library.result_count() == 0 {
        print::header("nothing recorded", cfg.quiet);
        print::no_results();
        return;
    }

    print::header("standings", cfg.quiet);
    if cfg.quiet < 2 {
        for (idx, summary) in summaries.iter().enumerate() {
            print::tree_head(idx, &summary.title);
            print::as_tree_one_level(details(summary));
            if idx + 1 != summaries.len() {
                sprint!();
            }
        }
    }

    print_summary(library, cfg);
}

fn details(summary: &GameSummary) -> Vec<Detail> {
    let mut details: Vec<Detail> = summary
        .players
        .iter()
        .map(|line| {
            let value: String = format!(
                "{} avg over {} play{}",
                format!("{:.2}", line.average).color(colors::SCORE),
                line.times_played,
                if line.times_played == 1 { "" } else { "s" }
            );
            (line.username.clone(), value.normal())
        })
        .collect();

    let top: ColoredString = match &summary.top {
        Some(username) => username.color(colors::WINNER).bold(),
        None => "nobody played".dimmed(),
    };
    details.push(("Top".to_string(), top));
    details
}

fn print_summary(library: &GameLibrary, cfg: &Config) {
    let output: String = format!(
        "{} games, {} players, {} results",
        library.game_count().to_string().bold(),
        library.player_count().to_string().bold(),
        library.result_count().to_string().bold().green(),
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            sprint!();
            success!("{}", output)
        }
    }
}
