//! Terminal rendering of command results.

use colored::Colorize;
use hx_core::RoomId;
use hx_fiction::{CommandResult, ResultKind};

/// Shown once the disk is repaired.
const BANNER: &str = "*** The Hexagram is whole again. Thank you for playing. ***";

/// Format a result for the terminal.
pub fn result(result: &CommandResult) -> String {
    let mut out = match (result.kind, result.room) {
        (ResultKind::Error, _) => result.message.yellow().to_string(),
        (ResultKind::Move, Some(room)) => {
            format!("{}\n{}", title(room.room().title, room), result.message.cyan())
        }
        (ResultKind::Look, Some(room)) => match result.message.split_once('\n') {
            Some((heading, rest)) => format!("{}\n{rest}", title(heading, room)),
            None => title(&result.message, room),
        },
        _ => result.message.clone(),
    };
    if result.game_complete {
        out.push_str("\n\n");
        out.push_str(&BANNER.green().bold().to_string());
    }
    out
}

/// A room title on the room's backdrop color.
fn title(text: &str, room: RoomId) -> String {
    let (r, g, b) = room.room().background;
    text.bold().white().on_truecolor(r, g, b).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_survives_styling() {
        colored::control::set_override(false);
        let look = CommandResult::look(RoomId::Cave, "Cave of Shadows\n\nDark.");
        assert_eq!(result(&look), "Cave of Shadows\n\nDark.");

        let moved = CommandResult::moved(RoomId::Forest, "You walk south.");
        assert_eq!(result(&moved), "Forest of Freedom\nYou walk south.");
    }

    #[test]
    fn completion_appends_banner() {
        colored::control::set_override(false);
        let done = CommandResult::success("The disk glows.").completing();
        let text = result(&done);
        assert!(text.starts_with("The disk glows."));
        assert!(text.ends_with(BANNER));
    }
}
