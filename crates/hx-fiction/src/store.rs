//! Save storage backends.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use hx_core::Snapshot;

use crate::error::StoreResult;

/// Somewhere a single saved game can live.
pub trait SaveStore {
    /// Replace the saved game.
    fn save(&mut self, snapshot: &Snapshot) -> StoreResult<()>;

    /// Read the saved game. `Ok(None)` means nothing was saved.
    fn load(&self) -> StoreResult<Option<Snapshot>>;

    /// Remove the saved game. Clearing an empty store succeeds.
    fn clear(&mut self) -> StoreResult<()>;
}

/// Keeps the encoded snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The encoded snapshot, if one was saved.
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SaveStore for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> StoreResult<()> {
        self.slot = Some(snapshot.to_json()?);
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<Snapshot>> {
        match &self.slot {
            Some(json) => Ok(Some(Snapshot::from_json(json)?)),
            None => Ok(None),
        }
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.slot = None;
        Ok(())
    }
}

/// Stores the snapshot as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by the file at `path`. Nothing is touched until the
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SaveStore for JsonFileStore {
    fn save(&mut self, snapshot: &Snapshot) -> StoreResult<()> {
        let json = snapshot.to_json()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<Snapshot>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(Snapshot::from_json(&json)?))
    }

    fn clear(&mut self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
