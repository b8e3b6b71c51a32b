//! Interactive game session.

use hx_core::{GameState, Snapshot};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::interpreter::interpret;
use crate::parser::{Command, parse_command};
use crate::result::CommandResult;
use crate::store::{MemoryStore, SaveStore};

/// A game in progress, with the store it saves to.
///
/// Persistence never fails a command: store errors are logged and play
/// continues from the in-memory state.
pub struct GameSession {
    state: GameState,
    store: Box<dyn SaveStore>,
    config: GameConfig,
}

impl GameSession {
    /// Create a session, resuming the saved game when the config asks for it.
    pub fn new(config: GameConfig, store: Box<dyn SaveStore>) -> Self {
        let state = if config.restore {
            restore(&*store).unwrap_or_default()
        } else {
            GameState::new()
        };
        Self {
            state,
            store,
            config,
        }
    }

    /// A fresh session that keeps its saves in memory.
    pub fn in_memory() -> Self {
        Self::new(GameConfig::default(), Box::new(MemoryStore::new()))
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read the saved game from the store, if any.
    pub fn saved(&self) -> Option<Snapshot> {
        self.store.load().ok().flatten()
    }

    /// Process a line of player input.
    pub fn process(&mut self, input: &str) -> CommandResult {
        let command = parse_command(input);
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> CommandResult {
        let transition = interpret(&self.state, &command);
        self.state = transition.state;

        if command == Command::Reset {
            if let Err(e) = self.store.clear() {
                warn!(error = %e, "failed to clear saved game");
            }
        } else if self.config.autosave && !command.is_query() && !transition.result.is_error() {
            self.save();
        }
        transition.result
    }

    /// Snapshot the current state into the store. Returns false on failure.
    pub fn save(&mut self) -> bool {
        match self.store.save(&Snapshot::capture(&self.state)) {
            Ok(()) => {
                debug!("game saved");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to save game");
                false
            }
        }
    }
}

fn restore(store: &dyn SaveStore) -> Option<GameState> {
    match store.load() {
        Ok(Some(snapshot)) => {
            info!(saved_at = %snapshot.saved_at, "restored saved game");
            Some(snapshot.into_state())
        }
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable saved game");
            None
        }
    }
}
