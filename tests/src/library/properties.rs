#![cfg(test)]
use scoreboard_common::error::{Field, ModelError};
use scoreboard_core::{GameLibrary, GameResult};

use crate::util::{scan_game, scan_player};

#[test]
fn every_username_length() {
    let mut library = GameLibrary::new();

    for len in 0..=20 {
        let name: String = "x".repeat(len);
        let outcome = library.add_player(name.clone());
        if (2..=16).contains(&len) {
            let id = outcome.unwrap_or_else(|e| panic!("length {len} rejected: {e}"));
            let player = library.player_mut(id).expect("just registered");
            player.set_username("renamed").expect("valid rename");
            assert!(player.set_username(name.clone() + &"y".repeat(17)).is_err());
        } else {
            let err = outcome.expect_err("length outside 2..=16 accepted");
            assert_eq!(err.field(), Field::Username);
        }
    }

    assert_eq!(library.player_count(), 15);
}

#[test]
fn score_boundaries_and_single_shot() {
    let mut library = GameLibrary::new();
    let game = library.add_game("Darts").unwrap();
    let player = library.add_player("dan").unwrap();

    for score in [i64::MIN, -1, 0, 5001, 10_000, i64::MAX] {
        let err = library.add_result(player, game, score).unwrap_err();
        assert!(err.is_validation(), "score {score} should be a validation error");
    }

    for score in [1, 2, 2500, 4999, 5000] {
        let id = library.add_result(player, game, score).unwrap();
        let result = library.result_mut(id).unwrap();
        assert_eq!(result.score(), score);
        assert_eq!(result.set_score(score), Err(ModelError::ImmutableField(Field::Score)));
    }

    assert_eq!(library.result_count(), 5);
}

#[test]
fn title_is_single_shot() {
    let mut library = GameLibrary::new();
    assert!(library.add_game("").unwrap_err().is_validation());

    for title in ["Chess", "Go", "a", "ゲーム"] {
        let id = library.add_game(title).unwrap();
        let game = library.game_mut(id).unwrap();
        assert_eq!(game.set_title("Other"), Err(ModelError::ImmutableField(Field::Title)));
        assert_eq!(game.title(), title);
    }
}

#[test]
fn average_score_is_the_mean() {
    let mut library = GameLibrary::new();
    let game = library.add_game("Bowling").unwrap();
    let eve = library.add_player("eve").unwrap();
    let frank = library.add_player("frank").unwrap();

    assert_eq!(library.game(game).unwrap().average_score(eve), 0.0);

    for score in [10, 20, 30] {
        library.add_result(eve, game, score).unwrap();
    }
    library.add_result(frank, game, 7).unwrap();
    library.add_result(frank, game, 8).unwrap();

    let view = library.game(game).unwrap();
    assert_eq!(view.average_score(eve), 20.0);
    assert_eq!(view.average_score(frank), 7.5);
}

#[test]
fn indices_agree_with_full_scan_after_moves() {
    let mut library = GameLibrary::new();
    let games: Vec<_> = ["A1", "B2", "C3"]
        .into_iter()
        .map(|title| library.add_game(title).unwrap())
        .collect();
    let players: Vec<_> = ["p1", "p2", "p3", "p4"]
        .into_iter()
        .map(|name| library.add_player(name).unwrap())
        .collect();

    let mut ids = Vec::new();
    for i in 0..24 {
        let id = library
            .add_result(players[i % 4], games[i % 3], (i as i64 + 1) * 10)
            .unwrap();
        ids.push(id);
    }

    for (step, id) in ids.iter().enumerate().filter(|(step, _)| step % 5 == 0) {
        library.reassign_player(*id, players[(step + 1) % 4]).unwrap();
        library.reassign_game(*id, games[(step + 2) % 3]).unwrap();
    }

    for &game in &games {
        let indexed: Vec<_> = library.game(game).unwrap().results().map(GameResult::id).collect();
        assert_eq!(indexed, scan_game(&library, game));
    }
    for &player in &players {
        let indexed: Vec<_> = library.player(player).unwrap().results().map(GameResult::id).collect();
        assert_eq!(indexed, scan_player(&library, player));
    }
}

#[test]
fn highest_scored_is_strict_and_stable() {
    let mut library = GameLibrary::new();
    let game = library.add_game("Golf").unwrap();
    assert_eq!(library.highest_scored(game), None);

    let low = library.add_player("low").unwrap();
    let high = library.add_player("high").unwrap();
    let late = library.add_player("late").unwrap();
    library.add_result(low, game, 100).unwrap();
    library.add_result(high, game, 900).unwrap();
    library.add_result(late, game, 900).unwrap();

    let first = library.highest_scored(game);
    assert_eq!(first, Some(high), "tie with a later player keeps the earlier one");
    for _ in 0..5 {
        assert_eq!(library.highest_scored(game), first);
    }
}
