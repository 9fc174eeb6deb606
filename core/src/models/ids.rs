use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_LIBRARY: AtomicU32 = AtomicU32::new(0);

/// Identifies the library an entity id was issued by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LibraryId(u32);

impl LibraryId {
    pub(crate) fn next() -> Self {
        Self(NEXT_LIBRARY.fetch_add(1, Ordering::Relaxed))
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        ///
        /// Ordering follows registration order within one library.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            library: LibraryId,
            index: usize,
        }

        impl $name {
            pub(crate) fn new(library: LibraryId, index: usize) -> Self {
                Self { library, index }
            }

            pub fn library(&self) -> LibraryId {
                self.library
            }

            /// Position in the registry of the issuing library.
            pub fn index(&self) -> usize {
                self.index
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}.{}", $label, self.library.0, self.index)
            }
        }
    };
}

entity_id!(
    /// Identity of a registered [`Game`](crate::models::Game).
    GameId,
    "game"
);
entity_id!(
    /// Identity of a registered [`Player`](crate::models::Player).
    PlayerId,
    "player"
);
entity_id!(
    /// Identity of a registered [`GameResult`](crate::models::GameResult).
    ResultId,
    "result"
);
