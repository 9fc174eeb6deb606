//! # Entity Models
//!
//! * [`game::Game`]: a title, assigned once.
//! * [`player::Player`]: a username, re-validated on every rename.
//! * [`result::GameResult`]: the join record between one player and one game,
//!   carrying a score that is assigned once.
//!
//! Entities do not reference each other directly. Links go through the typed
//! ids in [`ids`], which only mean something inside the library that issued them.

pub mod game;
pub mod ids;
pub mod player;
pub mod result;

pub use game::Game;
pub use ids::{GameId, LibraryId, PlayerId, ResultId};
pub use player::Player;
pub use result::GameResult;
