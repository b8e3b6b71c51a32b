//! Interactive play on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use hx_fiction::{GameConfig, GameSession, JsonFileStore, MemoryStore, SaveStore};

use crate::render;

/// Run the prompt loop until `quit` or end of input.
pub fn run(save: &Path, no_save: bool, fresh: bool) -> Result<(), String> {
    let config = GameConfig::default().with_restore(!fresh);
    let store: Box<dyn SaveStore> = if no_save {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::new(save))
    };
    let mut session = GameSession::new(config, store);

    println!("  {}", "Hexagram".bold());
    if no_save {
        println!("  Progress is not saved this time.");
    } else {
        println!("  Saving to {}", save.display());
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", render::result(&session.process("look")));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let result = session.process(input);
        println!("{}\n", render::result(&result));
    }

    println!();
    Ok(())
}
