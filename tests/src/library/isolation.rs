#![cfg(test)]
use scoreboard_core::GameLibrary;

#[test]
fn libraries_do_not_share_registries() {
    let mut first = GameLibrary::new();
    let mut second = GameLibrary::new();

    let chess = first.add_game("Chess").unwrap();
    let alice = first.add_player("alice").unwrap();
    first.add_result(alice, chess, 10).unwrap();

    assert_eq!(second.game_count(), 0);
    assert_eq!(second.player_count(), 0);
    assert_eq!(second.result_count(), 0);

    // ids from the first library mean nothing in the second
    assert!(second.game(chess).is_none());
    assert!(second.player(alice).is_none());
    assert!(second.add_result(alice, chess, 10).unwrap_err().is_validation());

    let chess_again = second.add_game("Chess").unwrap();
    assert_ne!(chess, chess_again);
    assert_eq!(chess.index(), chess_again.index());
}

#[test]
fn dropping_a_library_is_the_reset() {
    let mut library = GameLibrary::new();
    library.add_game("Chess").unwrap();
    drop(library);

    let fresh = GameLibrary::new();
    assert_eq!(fresh.games().count(), 0);
}
