//! In-memory game library: games, players and the results linking them.
//!
//! Everything lives inside a [`GameLibrary`]. Entities are addressed by typed
//! ids handed out at registration, and all relationship queries are answered
//! by the library from its result registry.

pub mod library;
pub mod models;

pub use library::{GameLibrary, GameRef, PlayerRef};
pub use models::{Game, GameId, GameResult, LibraryId, Player, PlayerId, ResultId};
