#![cfg(test)]
use std::collections::BTreeSet;

use scoreboard_core::GameLibrary;

use crate::util::usernames;

/// Chess with alice and bob: the canonical walk through every query.
#[test]
fn chess_round_trip() -> anyhow::Result<()> {
    let mut library = GameLibrary::new();
    let chess = library.add_game("Chess")?;
    let alice = library.add_player("alice")?;
    let bob = library.add_player("bob")?;
    library.add_result(alice, chess, 100)?;
    library.add_result(bob, chess, 200)?;

    let game = library.game(chess).expect("chess is registered");
    assert_eq!(game.players(), BTreeSet::from([alice, bob]));
    assert_eq!(game.average_score(alice), 100.0);
    assert_eq!(library.highest_scored(chess), Some(bob));
    assert_eq!(usernames(&library, library.highest_scored(chess)), vec!["bob"]);

    let alice_ref = library.player(alice).expect("alice is registered");
    assert_eq!(alice_ref.games_played(), BTreeSet::from([chess]));
    assert!(alice_ref.played_game(chess));
    assert_eq!(alice_ref.num_times_played(chess), 1);
    Ok(())
}

#[test]
fn username_boundary() {
    let mut library = GameLibrary::new();

    let err = library.add_player("a").unwrap_err();
    assert!(err.is_validation(), "length 1 must be rejected, got {err:?}");
    assert!(library.add_player("ab").is_ok(), "length 2 must be accepted");
    assert_eq!(library.player_count(), 1);
}

#[test]
fn rename_keeps_results() -> anyhow::Result<()> {
    let mut library = GameLibrary::new();
    let go = library.add_game("Go")?;
    let carol = library.add_player("carol")?;
    library.add_result(carol, go, 4000)?;

    library
        .player_mut(carol)
        .expect("carol is registered")
        .set_username("caroline")?;

    assert_eq!(library.find_player("carol"), None);
    assert_eq!(library.find_player("caroline"), Some(carol));
    assert_eq!(library.highest_scored(go), Some(carol));
    Ok(())
}
