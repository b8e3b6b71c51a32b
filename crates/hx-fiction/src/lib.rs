//! Command interpreter and narrative engines for Hexagram.
//!
//! A command is parsed into a [`Command`], then [`interpret`] maps the
//! current [`GameState`](hx_core::GameState) and the command to the next
//! state plus a [`CommandResult`]. [`GameSession`] hosts that transition,
//! keeps the current state and hands snapshots to a [`SaveStore`].

/// Game session configuration.
pub mod config;
/// Dialogue engine: conversation entry, replies and completion effects.
pub mod dialogue;
/// Error types for the fiction engine.
pub mod error;
/// Disk repair in the finale courtyard.
pub mod finale;
/// Command dispatch as a pure state transition.
pub mod interpreter;
/// Take, use, release and the inventory listing.
pub mod inventory;
/// Exit gating and room transitions.
pub mod movement;
/// Room descriptions and help text.
pub mod narrator;
/// Command parsing and name resolution.
pub mod parser;
/// The stone, theater, garden and library puzzles.
pub mod puzzle;
/// Uniform command results.
pub mod result;
/// Interactive session: interpreter host plus persistence.
pub mod session;
/// Save storage backends.
pub mod store;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult, StoreError, StoreResult};
pub use interpreter::{Transition, interpret};
pub use movement::ExitCheck;
pub use parser::{Command, parse_command};
pub use result::{CommandResult, ResultKind};
pub use session::GameSession;
pub use store::{JsonFileStore, MemoryStore, SaveStore};
