use std::path::Path;

use colored::Colorize;
use hx_core::{Flag, SYMBOLS};
use hx_fiction::{JsonFileStore, SaveStore};

/// Summarize the saved game without starting a session.
pub fn run(save: &Path) -> Result<(), String> {
    let store = JsonFileStore::new(save);
    let Some(snapshot) = store.load().map_err(|e| e.to_string())? else {
        println!("No saved game.");
        return Ok(());
    };
    let state = &snapshot.state;

    println!("  {} {}", "Room:".bold(), state.room.room().title);

    let carried: Vec<&str> = state.inventory().iter().map(|item| item.name()).collect();
    if carried.is_empty() {
        println!("  {} (empty)", "Inventory:".bold());
    } else {
        println!("  {} {}", "Inventory:".bold(), carried.join(", "));
    }

    let held = SYMBOLS.iter().filter(|&&symbol| state.has_item(symbol)).count();
    println!("  {} {held}/{}", "Symbols:".bold(), SYMBOLS.len());

    if state.has_flag(Flag::DiskRepaired) {
        println!("  {}", "The Hexagram has been restored.".green());
    }
    println!(
        "  {} {}",
        "Saved:".dimmed(),
        snapshot.saved_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(())
}
