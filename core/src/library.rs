//! # Game Library
//!
//! Owns the three registries (games, players, results) and keeps the
//! game→results and player→results indices in step with them. A fresh
//! library is empty and dropping it discards everything it registered.

mod index;
mod views;

use std::collections::BTreeMap;

use scoreboard_common::error::{Field, ModelError, ModelResult};
use tracing::{debug, trace};

use crate::models::{Game, GameId, GameResult, LibraryId, Player, PlayerId, ResultId};
use index::ResultIndex;

pub use views::{GameRef, PlayerRef};

#[derive(Debug)]
pub struct GameLibrary {
    id: LibraryId,
    games: Vec<Game>,
    players: Vec<Player>,
    results: Vec<GameResult>,
    index: ResultIndex,
}

impl Default for GameLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLibrary {
    pub fn new() -> Self {
        Self {
            id: LibraryId::next(),
            games: Vec::new(),
            players: Vec::new(),
            results: Vec::new(),
            index: ResultIndex::default(),
        }
    }

    pub fn id(&self) -> LibraryId {
        self.id
    }

    // ── registration ─────────────────────────────────────────

    pub fn add_game(&mut self, title: impl Into<String>) -> ModelResult<GameId> {
        let game: Game = Game::new(title)?;
        let id: GameId = GameId::new(self.id, self.games.len());
        debug!(%id, title = game.title(), "registered game");

        self.games.push(game);
        self.index.add_game_slot();
        Ok(id)
    }

    pub fn add_player(&mut self, username: impl Into<String>) -> ModelResult<PlayerId> {
        let player: Player = Player::new(username)?;
        let id: PlayerId = PlayerId::new(self.id, self.players.len());
        debug!(%id, username = player.username(), "registered player");

        self.players.push(player);
        self.index.add_player_slot();
        Ok(id)
    }

    /// Records a score for `player` on `game`.
    ///
    /// Both references must have been issued by this library; they are checked
    /// the same way [`reassign_player`](Self::reassign_player) and
    /// [`reassign_game`](Self::reassign_game) check them.
    pub fn add_result(&mut self, player: PlayerId, game: GameId, score: i64) -> ModelResult<ResultId> {
        self.check_player(player)?;
        self.check_game(game)?;

        let id: ResultId = ResultId::new(self.id, self.results.len());
        let result: GameResult = GameResult::new(id, player, game, score)?;
        debug!(%id, %player, %game, score, "registered result");

        self.results.push(result);
        self.index.insert(id, player, game);
        Ok(id)
    }

    // ── reassignment ─────────────────────────────────────────

    pub fn reassign_player(&mut self, result: ResultId, player: PlayerId) -> ModelResult<()> {
        self.check_player(player)?;
        let record: &mut GameResult = self.result_slot(result)?;
        let previous: PlayerId = record.player();
        record.set_player(player);

        self.index.move_player(result, previous, player);
        debug!(%result, from = %previous, to = %player, "moved result to another player");
        Ok(())
    }

    pub fn reassign_game(&mut self, result: ResultId, game: GameId) -> ModelResult<()> {
        self.check_game(game)?;
        let record: &mut GameResult = self.result_slot(result)?;
        let previous: GameId = record.game();
        record.set_game(game);

        self.index.move_game(result, previous, game);
        debug!(%result, from = %previous, to = %game, "moved result to another game");
        Ok(())
    }

    // ── lookups ──────────────────────────────────────────────

    pub fn game(&self, id: GameId) -> Option<GameRef<'_>> {
        if !self.owns(id.library()) {
            return None;
        }
        self.games.get(id.index()).map(|game| GameRef {
            library: self,
            id,
            game,
        })
    }

    pub fn player(&self, id: PlayerId) -> Option<PlayerRef<'_>> {
        if !self.owns(id.library()) {
            return None;
        }
        self.players.get(id.index()).map(|player| PlayerRef {
            library: self,
            id,
            player,
        })
    }

    pub fn result(&self, id: ResultId) -> Option<&GameResult> {
        if !self.owns(id.library()) {
            return None;
        }
        self.results.get(id.index())
    }

    pub fn game_mut(&mut self, id: GameId) -> Option<&mut Game> {
        if !self.owns(id.library()) {
            return None;
        }
        self.games.get_mut(id.index())
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        if !self.owns(id.library()) {
            return None;
        }
        self.players.get_mut(id.index())
    }

    /// Mutable access to a result. Only the score can be written through it;
    /// use the `reassign_*` methods to move a result.
    pub fn result_mut(&mut self, id: ResultId) -> Option<&mut GameResult> {
        if !self.owns(id.library()) {
            return None;
        }
        self.results.get_mut(id.index())
    }

    /// First registered player with exactly this username.
    pub fn find_player(&self, username: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|player| player.username() == username)
            .map(|index| PlayerId::new(self.id, index))
    }

    // ── registries ───────────────────────────────────────────

    pub fn games(&self) -> impl Iterator<Item = GameRef<'_>> {
        self.games.iter().enumerate().map(move |(index, game)| GameRef {
            library: self,
            id: GameId::new(self.id, index),
            game,
        })
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerRef<'_>> {
        self.players.iter().enumerate().map(move |(index, player)| PlayerRef {
            library: self,
            id: PlayerId::new(self.id, index),
            player,
        })
    }

    pub fn results(&self) -> impl Iterator<Item = &GameResult> {
        self.results.iter()
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    // ── rankings ─────────────────────────────────────────────

    /// The player with the best average score on `game`.
    ///
    /// Only players who played the game are considered. On equal averages the
    /// earliest registered player wins. Returns `None` when nobody played it.
    pub fn highest_scored(&self, game: GameId) -> Option<PlayerId> {
        let game: GameRef<'_> = self.game(game)?;

        // keyed by PlayerId, so iteration follows player registration order
        let mut totals: BTreeMap<PlayerId, (i64, usize)> = BTreeMap::new();
        for result in game.results() {
            let entry = totals.entry(result.player()).or_insert((0, 0));
            entry.0 += result.score();
            entry.1 += 1;
        }

        let mut best: Option<(PlayerId, f64)> = None;
        for (player, (total, count)) in totals {
            let average: f64 = total as f64 / count as f64;
            match best {
                Some((_, top)) if average <= top => {}
                _ => best = Some((player, average)),
            }
        }

        trace!(game = %game.id(), winner = ?best, "ranked players");
        best.map(|(player, _)| player)
    }

    // ── helpers ──────────────────────────────────────────────

    fn owns(&self, library: LibraryId) -> bool {
        library == self.id
    }

    fn check_player(&self, id: PlayerId) -> ModelResult<()> {
        if self.owns(id.library()) && id.index() < self.players.len() {
            return Ok(());
        }
        Err(ModelError::validation(
            Field::Player,
            format!("Must be of type Player ({id} is not registered in this library)"),
        ))
    }

    fn check_game(&self, id: GameId) -> ModelResult<()> {
        if self.owns(id.library()) && id.index() < self.games.len() {
            return Ok(());
        }
        Err(ModelError::validation(
            Field::Game,
            format!("Must be of type Game ({id} is not registered in this library)"),
        ))
    }

    fn result_slot(&mut self, id: ResultId) -> ModelResult<&mut GameResult> {
        let library: LibraryId = self.id;
        self.result_mut(id).ok_or_else(|| {
            ModelError::validation(
                Field::Result,
                format!("{id} is not registered in library {library:?}"),
            )
        })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
