use std::path::Path;

use hx_fiction::{JsonFileStore, SaveStore};

/// Delete the save file. A missing file is not an error.
pub fn run(save: &Path) -> Result<(), String> {
    let mut store = JsonFileStore::new(save);
    store.clear().map_err(|e| e.to_string())?;
    println!("Saved game cleared: {}", save.display());
    Ok(())
}
