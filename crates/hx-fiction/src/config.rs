//! Game session configuration.

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Save after every successful, state-changing command.
    pub autosave: bool,
    /// Resume from the store's saved game on start.
    pub restore: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            autosave: true,
            restore: true,
        }
    }
}

impl GameConfig {
    /// Enable or disable autosave.
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Enable or disable restoring a saved game.
    pub fn with_restore(mut self, restore: bool) -> Self {
        self.restore = restore;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert!(cfg.autosave);
        assert!(cfg.restore);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_autosave(false)
            .with_restore(false);
        assert!(!cfg.autosave);
        assert!(!cfg.restore);
    }
}
