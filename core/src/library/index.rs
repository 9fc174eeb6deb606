use crate::models::{GameId, PlayerId, ResultId};

/// Secondary indices from games and players to their results.
///
/// Slots are addressed by entity index. Every list stays sorted by
/// [`ResultId`], which is the result registration order.
#[derive(Debug, Default)]
pub(crate) struct ResultIndex {
    by_game: Vec<Vec<ResultId>>,
    by_player: Vec<Vec<ResultId>>,
}

impl ResultIndex {
    pub fn add_game_slot(&mut self) {
        self.by_game.push(Vec::new());
    }

    pub fn add_player_slot(&mut self) {
        self.by_player.push(Vec::new());
    }

    pub fn insert(&mut self, result: ResultId, player: PlayerId, game: GameId) {
        insert_sorted(&mut self.by_player[player.index()], result);
        insert_sorted(&mut self.by_game[game.index()], result);
    }

    pub fn move_player(&mut self, result: ResultId, from: PlayerId, to: PlayerId) {
        remove_sorted(&mut self.by_player[from.index()], result);
        insert_sorted(&mut self.by_player[to.index()], result);
    }

    pub fn move_game(&mut self, result: ResultId, from: GameId, to: GameId) {
        remove_sorted(&mut self.by_game[from.index()], result);
        insert_sorted(&mut self.by_game[to.index()], result);
    }

    pub fn for_game(&self, game: GameId) -> &[ResultId] {
        self.by_game.get(game.index()).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn for_player(&self, player: PlayerId) -> &[ResultId] {
        self.by_player.get(player.index()).map(Vec::as_slice).unwrap_or_default()
    }
}

fn insert_sorted(list: &mut Vec<ResultId>, id: ResultId) {
    if let Err(pos) = list.binary_search(&id) {
        list.insert(pos, id);
    }
}

fn remove_sorted(list: &mut Vec<ResultId>, id: ResultId) {
    if let Ok(pos) = list.binary_search(&id) {
        list.remove(pos);
    }
}
