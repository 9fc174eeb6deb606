//! Cross-crate scenarios for the scoreboard library.

mod library;
mod util;
