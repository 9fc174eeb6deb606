#![cfg(test)]
use scoreboard_core::{GameId, GameLibrary, GameResult, PlayerId, ResultId};

/// Answers "results for game" by scanning the whole registry.
pub fn scan_game(library: &GameLibrary, game: GameId) -> Vec<ResultId> {
    library
        .results()
        .filter(|result| result.game() == game)
        .map(GameResult::id)
        .collect()
}

/// Answers "results for player" by scanning the whole registry.
pub fn scan_player(library: &GameLibrary, player: PlayerId) -> Vec<ResultId> {
    library
        .results()
        .filter(|result| result.player() == player)
        .map(GameResult::id)
        .collect()
}

pub fn usernames(library: &GameLibrary, ids: impl IntoIterator<Item = PlayerId>) -> Vec<String> {
    ids.into_iter()
        .filter_map(|id| library.player(id))
        .map(|player| player.username().to_string())
        .collect()
}
