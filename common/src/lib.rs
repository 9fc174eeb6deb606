//! Shared building blocks for the scoreboard crates.
//!
//! Nothing in here knows about the library store itself: these are the error
//! types, attribute rules and small value types that `scoreboard-core` and the
//! CLI both lean on.

pub mod config;
pub mod error;
pub mod field;
pub mod log;
pub mod validate;

#[doc(hidden)]
pub use tracing as __tracing;
