//! Room descriptions and help text.

use hx_core::{Flag, GameState, ItemId, RoomId};

use crate::result::CommandResult;

const UNLIT_CAVE: &str = "You can only see shadows swaying on the wall. They seem to mock you in whispers.\n\
You begin to doubt… is this all of reality?\n\
There is a torch on the ground. Pick it up, and try to light it!";

const ROSE_PROMPT: &str = "At the center of a circular stone path, three roses bloom together: \
one red like flame, one white like morning dew, and one purple like a dream of night.\n\
(Type 'talk red' / 'talk white' / 'talk purple' to speak to them)";

/// What part of a room the player can currently make out.
struct View {
    items: bool,
    npcs: bool,
    exits: bool,
    note: Option<&'static str>,
}

impl View {
    const FULL: View = View {
        items: true,
        npcs: true,
        exits: true,
        note: None,
    };

    fn of(state: &GameState) -> View {
        match state.room {
            RoomId::Cave if !state.has_flag(Flag::TorchLit) => View {
                npcs: false,
                note: Some(UNLIT_CAVE),
                ..View::FULL
            },
            RoomId::Forest if state.has_item(ItemId::Bird) => View {
                items: false,
                npcs: false,
                note: Some("Please release the little bird here."),
                ..View::FULL
            },
            RoomId::Garden => View {
                npcs: false,
                note: state.garden.chosen.is_none().then_some(ROSE_PROMPT),
                ..View::FULL
            },
            RoomId::CourtyardFinale => View {
                exits: false,
                ..View::FULL
            },
            _ => View::FULL,
        }
    }
}

/// Describe the current room.
pub fn look(state: &GameState) -> CommandResult {
    let room = state.room.room();
    let view = View::of(state);
    let mut text = format!("{}\n\n{}", room.title, room.description);
    if let Some(note) = view.note {
        text.push_str("\n\n");
        text.push_str(note);
    }

    let mut lines = Vec::new();
    let items = state.items_here();
    if view.items && !items.is_empty() {
        let names: Vec<&str> = items.into_iter().map(ItemId::name).collect();
        lines.push(format!("You see: {}.", names.join(", ")));
    }
    let npcs = state.npcs_here();
    if view.npcs && !npcs.is_empty() {
        let names: Vec<&str> = npcs.into_iter().map(|npc| npc.name()).collect();
        lines.push(format!("Here: {}.", names.join(", ")));
    }
    if view.exits && !room.exits.is_empty() {
        let names: Vec<&str> = room.exits.iter().map(|(dir, _)| dir.name()).collect();
        lines.push(format!("Exits: {}", names.join(", ")));
    }
    if !lines.is_empty() {
        text.push_str("\n\n");
        text.push_str(&lines.join("\n"));
    }
    CommandResult::look(state.room, text)
}

/// The command reference.
pub fn help() -> CommandResult {
    CommandResult::info(
        "Hexagram: commands\n\
         \n\
         Basics:\n\
         • look - describe the current room\n\
         • go <direction> - move (north, south, east, west)\n\
         • take <item> - pick up an item\n\
         • use <item> - use an item\n\
         • inventory - list what you carry\n\
         • talk <npc> - start a conversation\n\
         • respond - reply in the conversation\n\
         • end - end the conversation\n\
         \n\
         Along the way:\n\
         • release - set the bird free in the forest\n\
         • learn / live / dialogue / reflect - walk the paths of wisdom in the library\n\
         • stage - step onto the theater stage\n\
         • create <star|tree|castle> - choose your creation\n\
         • continue / cancel - advance or restart your creation\n\
         • push stone / leave - the trial on the slope\n\
         • choose <red|white|purple> - choose a rose in the garden\n\
         • water / fertilize / weed / wish / wait - tend your rose\n\
         • take seed - collect the seed of love\n\
         • repair disk - restore the Hexagram\n\
         • reset - start over\n\
         \n\
         Goal:\n\
         Collect the six symbols of Courage, Freedom, Wisdom, Creation, Grit and Love,\n\
         then repair the broken Hexagram Stone Disk to complete your journey.",
    )
}
