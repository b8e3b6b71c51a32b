//! The four compass exits a room can have.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A compass exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward the top of the map.
    North,
    /// Toward the bottom of the map.
    South,
    /// Toward the right of the map.
    East,
    /// Toward the left of the map.
    West,
}

impl Direction {
    /// Every direction, in the order exits are listed.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Read a direction typed by the player: the full word or its first
    /// letter, in any case.
    pub fn parse(word: &str) -> Option<Self> {
        let word = word.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|dir| {
            let name = dir.name();
            word == name || word == name[..1]
        })
    }

    /// Lowercase word used in exit listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
