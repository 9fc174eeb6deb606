//! Borrowed views answering the relationship queries of one entity.

use std::collections::BTreeSet;

use crate::library::GameLibrary;
use crate::models::{Game, GameId, GameResult, Player, PlayerId};

/// A registered game together with the library it lives in.
#[derive(Debug, Clone, Copy)]
pub struct GameRef<'a> {
    pub(crate) library: &'a GameLibrary,
    pub(crate) id: GameId,
    pub(crate) game: &'a Game,
}

impl<'a> GameRef<'a> {
    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn title(&self) -> &'a str {
        self.game.title()
    }

    pub fn game(&self) -> &'a Game {
        self.game
    }

    /// All results recorded for this game, in result registration order.
    pub fn results(self) -> impl Iterator<Item = &'a GameResult> + 'a {
        let library: &'a GameLibrary = self.library;
        library
            .index
            .for_game(self.id)
            .iter()
            .map(move |id| &library.results[id.index()])
    }

    /// Every distinct player with at least one result for this game.
    pub fn players(&self) -> BTreeSet<PlayerId> {
        self.results().map(GameResult::player).collect()
    }

    /// Mean score of `player` on this game, `0.0` if they never played it.
    pub fn average_score(&self, player: PlayerId) -> f64 {
        let (total, count) = self
            .results()
            .filter(|result| result.player() == player)
            .fold((0_i64, 0_usize), |(total, count), result| {
                (total + result.score(), count + 1)
            });

        if count == 0 {
            return 0.0;
        }
        total as f64 / count as f64
    }
}

/// A registered player together with the library it lives in.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRef<'a> {
    pub(crate) library: &'a GameLibrary,
    pub(crate) id: PlayerId,
    pub(crate) player: &'a Player,
}

impl<'a> PlayerRef<'a> {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn username(&self) -> &'a str {
        self.player.username()
    }

    pub fn player(&self) -> &'a Player {
        self.player
    }

    /// All results recorded by this player, in result registration order.
    pub fn results(self) -> impl Iterator<Item = &'a GameResult> + 'a {
        let library: &'a GameLibrary = self.library;
        library
            .index
            .for_player(self.id)
            .iter()
            .map(move |id| &library.results[id.index()])
    }

    pub fn games_played(&self) -> BTreeSet<GameId> {
        self.results().map(GameResult::game).collect()
    }

    pub fn played_game(&self, game: GameId) -> bool {
        self.results().any(|result| result.game() == game)
    }

    pub fn num_times_played(&self, game: GameId) -> usize {
        self.results().filter(|result| result.game() == game).count()
    }
}
