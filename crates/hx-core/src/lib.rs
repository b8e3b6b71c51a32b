//! Core types for Hexagram: the static world catalog, the mutable room
//! overlay, and the game state aggregate.
//!
//! Nothing in this crate performs I/O. The catalog is immutable content;
//! everything that changes during play lives in [`GameState`], which can be
//! captured in a [`Snapshot`] and restored later.

/// Static rooms, items, and NPCs.
pub mod catalog;
/// Compass directions for room exits.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Per-room dynamic contents (items and NPCs currently present).
pub mod overlay;
/// Puzzle counters and talked/visited sets.
pub mod progress;
/// Serializable snapshot of a game in progress.
pub mod snapshot;
/// The mutable game state aggregate.
pub mod state;

/// Re-export catalog identifiers and records.
pub use catalog::{Item, ItemId, Npc, NpcId, Room, RoomId, SYMBOLS};
/// Re-export direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{HxError, HxResult};
/// Re-export overlay types.
pub use overlay::{RoomContents, WorldOverlay};
/// Re-export progress types.
pub use progress::{Creation, GardenPlot, GardenStep, RoseColor, Stage, StoneTrial, Talked, WisdomPath};
/// Re-export snapshot type.
pub use snapshot::Snapshot;
/// Re-export state types.
pub use state::{Conversation, Flag, GameState, ItemLocation, Topic};
