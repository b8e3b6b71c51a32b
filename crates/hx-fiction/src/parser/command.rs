//! Command parsing for player input.

use hx_core::{Direction, GardenStep, WisdomPath};

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start over and wipe the save.
    Reset,
    /// Describe the current room.
    Look,
    /// Move through an exit.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// `go` without a compass direction.
    GoNowhere,
    /// Pick up an item.
    Take {
        /// The item name or alias.
        item: String,
    },
    /// Collect the garden's seed of love.
    TakeSeed,
    /// Use a carried item.
    Use {
        /// The item name or alias.
        item: String,
    },
    /// Start a conversation.
    Talk {
        /// The character name or alias.
        character: String,
    },
    /// List inventory.
    Inventory,
    /// Advance the active conversation.
    Respond,
    /// Leave the active conversation.
    End,
    /// Set the bird free.
    Release,
    /// Walk a library path of wisdom.
    Path {
        /// The path walked.
        path: WisdomPath,
    },
    /// Step onto the theater stage.
    Stage,
    /// Choose what to create on stage.
    Create {
        /// The raw choice text.
        choice: String,
    },
    /// Advance the stage creation.
    Continue,
    /// Discard the stage creation choice.
    Cancel,
    /// Push the boulder on the slope.
    PushStone,
    /// Abandon the stone trial.
    Leave,
    /// Choose a garden rose.
    Choose {
        /// The raw color text.
        rose: String,
    },
    /// Tend the chosen rose.
    Tend {
        /// The tending action.
        step: GardenStep,
    },
    /// Restore the Hexagram.
    RepairDisk,
    /// Show help.
    Help,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

impl Command {
    /// Pure reads that never change state and never trigger a save.
    pub fn is_query(&self) -> bool {
        matches!(self, Command::Look | Command::Inventory | Command::Help)
    }
}

/// Parse a player input string into a command.
///
/// Verbs are matched case-insensitively; arguments are lowercased and
/// rejoined with single spaces.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let Some((&verb, args)) = words.split_first() else {
        return Command::Unknown {
            input: String::new(),
        };
    };
    let rest = args.join(" ");

    match verb {
        "reset" => Command::Reset,
        "look" => Command::Look,
        "go" => match args.first().and_then(|w| Direction::parse(w)) {
            Some(direction) => Command::Move { direction },
            None => Command::GoNowhere,
        },
        "take" if rest == "seed" => Command::TakeSeed,
        "take" => Command::Take { item: rest },
        "use" => Command::Use { item: rest },
        "talk" => {
            // "talk to marx", "talk with the bird"
            let character = args
                .iter()
                .skip_while(|w| matches!(**w, "to" | "with" | "the"))
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            Command::Talk { character }
        }
        "inventory" => Command::Inventory,
        "respond" => Command::Respond,
        "end" => Command::End,
        "release" => Command::Release,
        "stage" => Command::Stage,
        "create" => Command::Create { choice: rest },
        "continue" => Command::Continue,
        "cancel" => Command::Cancel,
        "push" if rest == "stone" => Command::PushStone,
        "leave" => Command::Leave,
        "choose" => Command::Choose { rose: rest },
        "repair" if rest == "disk" => Command::RepairDisk,
        "help" => Command::Help,
        _ => {
            if let Some(path) = WisdomPath::parse(verb) {
                Command::Path { path }
            } else if let Some(step) = GardenStep::parse(verb) {
                Command::Tend { step }
            } else {
                Command::Unknown {
                    input: input.trim().to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_movement() {
        assert_eq!(
            parse_command("go west"),
            Command::Move {
                direction: Direction::West
            }
        );
        assert_eq!(
            parse_command("GO S"),
            Command::Move {
                direction: Direction::South
            }
        );
        assert_eq!(parse_command("go home"), Command::GoNowhere);
        assert_eq!(parse_command("go"), Command::GoNowhere);
        assert_eq!(parse_command("go up"), Command::GoNowhere);
        // Bare directions are not verbs here.
        assert!(matches!(parse_command("north"), Command::Unknown { .. }));
    }

    #[test]
    fn parse_item_verbs() {
        assert_eq!(
            parse_command("take Feather of Freedom"),
            Command::Take {
                item: "feather of freedom".to_string()
            }
        );
        assert_eq!(parse_command("take seed"), Command::TakeSeed);
        assert_eq!(
            parse_command("use  torch"),
            Command::Use {
                item: "torch".to_string()
            }
        );
    }

    #[test]
    fn parse_talk_skips_prepositions() {
        assert_eq!(
            parse_command("talk to the guide"),
            Command::Talk {
                character: "guide".to_string()
            }
        );
        assert_eq!(
            parse_command("talk with marx"),
            Command::Talk {
                character: "marx".to_string()
            }
        );
    }

    #[test]
    fn parse_puzzle_verbs() {
        assert_eq!(
            parse_command("reflect"),
            Command::Path {
                path: WisdomPath::Reflect
            }
        );
        assert_eq!(
            parse_command("Fertilize"),
            Command::Tend {
                step: GardenStep::Fertilize
            }
        );
        assert_eq!(parse_command("push stone"), Command::PushStone);
        assert!(matches!(parse_command("push door"), Command::Unknown { .. }));
        assert_eq!(parse_command("repair disk"), Command::RepairDisk);
        assert!(matches!(parse_command("repair"), Command::Unknown { .. }));
        assert_eq!(
            parse_command("choose White"),
            Command::Choose {
                rose: "white".to_string()
            }
        );
    }

    #[test]
    fn unknown_and_empty_input() {
        assert_eq!(
            parse_command("  dance wildly "),
            Command::Unknown {
                input: "dance wildly".to_string()
            }
        );
        assert_eq!(
            parse_command("   "),
            Command::Unknown {
                input: String::new()
            }
        );
    }

    #[test]
    fn queries() {
        assert!(parse_command("look").is_query());
        assert!(parse_command("inventory").is_query());
        assert!(parse_command("help").is_query());
        assert!(!parse_command("respond").is_query());
        assert!(!parse_command("reset").is_query());
    }
}
