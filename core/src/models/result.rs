use scoreboard_common::error::{Field, ModelResult};
use scoreboard_common::field::SingleShot;
use scoreboard_common::validate;

use crate::models::ids::{GameId, PlayerId, ResultId};

/// One score recorded by a player for a game.
///
/// Only the owning library can build one or move it to another player or
/// game, since it has to keep its indices in step.
#[derive(Debug, Clone)]
pub struct GameResult {
    id: ResultId,
    player: PlayerId,
    game: GameId,
    score: SingleShot<i64>,
}

impl GameResult {
    pub(crate) fn new(id: ResultId, player: PlayerId, game: GameId, score: i64) -> ModelResult<Self> {
        let mut result = Self {
            id,
            player,
            game,
            score: SingleShot::new(),
        };
        result.set_score(score)?;
        Ok(result)
    }

    pub fn id(&self) -> ResultId {
        self.id
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn game(&self) -> GameId {
        self.game
    }

    pub fn score(&self) -> i64 {
        self.score.get().copied().unwrap_or_default()
    }

    /// Assigns the score. Range is checked before the single-shot rule.
    pub fn set_score(&mut self, score: i64) -> ModelResult<()> {
        validate::score(score)?;
        self.score.set(Field::Score, score)
    }

    pub(crate) fn set_player(&mut self, player: PlayerId) {
        self.player = player;
    }

    pub(crate) fn set_game(&mut self, game: GameId) {
        self.game = game;
    }
}
