//! Player identity and roster queries.
//!
//! The selector grammar resolves against a [`Roster`] snapshot; the host
//! game supplies the live implementation. [`TableRoster`] is a small
//! vector-backed implementation for tests, demos, and offline tools.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric key identifying a connected player.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Returns the raw numeric key.
    #[must_use]
    pub const fn key(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Snapshot queries over the current player roster.
///
/// Implementations should answer from a consistent snapshot for the
/// duration of one selector resolution; the parser never mutates roster
/// state and never retains the borrow across calls.
pub trait Roster {
    /// All currently connected players, in roster order.
    fn players(&self) -> Vec<PlayerId>;

    /// Whether the player currently holds the admin flag.
    fn is_admin(&self, player: PlayerId) -> bool;

    /// The player's visible display name.
    fn display_name(&self, player: PlayerId) -> String;
}

/// Vector-backed roster for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct TableRoster {
    entries: Vec<(PlayerId, String, bool)>,
}

impl TableRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a player with the given key, name, and admin flag.
    pub fn add(&mut self, key: u32, name: impl Into<String>, admin: bool) -> PlayerId {
        let id = PlayerId(key);
        self.entries.push((id, name.into(), admin));
        id
    }
}

impl Roster for TableRoster {
    fn players(&self) -> Vec<PlayerId> {
        self.entries.iter().map(|(id, _, _)| *id).collect()
    }

    fn is_admin(&self, player: PlayerId) -> bool {
        self.entries
            .iter()
            .any(|(id, _, admin)| *id == player && *admin)
    }

    fn display_name(&self, player: PlayerId) -> String {
        self.entries
            .iter()
            .find(|(id, _, _)| *id == player)
            .map(|(_, name, _)| name.clone())
            .unwrap_or_default()
    }
}
