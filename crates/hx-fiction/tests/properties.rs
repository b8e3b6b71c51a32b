//! Invariants that must hold across arbitrary command sequences.

use hx_core::{GameState, ItemId, RoomId};
use hx_fiction::{interpret, parse_command};
use proptest::prelude::*;

/// Known-good progress points to start random play from.
const CHECKPOINTS: &[&[&str]] = &[
    &[],
    &["talk guide", "respond", "respond", "go west"],
    &[
        "talk guide", "respond", "respond", "go west", "take torch", "use torch",
        "talk prisoner", "talk watcher", "talk philosopher", "take bird", "go south",
    ],
];

const VOCABULARY: &[&str] = &[
    "look", "go north", "go south", "go east", "go west", "go up", "take torch",
    "take bird", "take feather", "take shield", "take orb", "take stone", "take seed",
    "take disk", "take big stone", "use torch", "use feather", "talk guide",
    "talk prisoner", "talk watcher", "talk philosopher", "talk bird", "talk einstein",
    "talk marx", "talk rose", "talk white", "talk purple", "inventory", "respond",
    "respond", "respond", "end", "release", "learn", "live", "dialogue", "reflect",
    "stage", "create star", "create moon", "continue", "cancel", "push stone", "leave",
    "choose red", "choose blue", "water", "fertilize", "weed", "wish", "wait",
    "repair disk", "help", "dance",
];

const QUERIES: &[&str] = &["look", "inventory", "help"];

fn replay(inputs: &[&str]) -> GameState {
    inputs.iter().fold(GameState::new(), |state, input| {
        interpret(&state, &parse_command(input)).state
    })
}

/// Number of containers (inventory or rooms) holding the item.
fn holders(state: &GameState, item: ItemId) -> usize {
    let in_inventory = usize::from(state.has_item(item));
    let in_rooms = RoomId::ALL
        .into_iter()
        .filter(|room| state.overlay().has_item(*room, item))
        .count();
    in_inventory + in_rooms
}

fn commands() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..60)
}

proptest! {
    #[test]
    fn invariants_hold_under_random_play(
        checkpoint in 0..CHECKPOINTS.len(),
        inputs in commands(),
    ) {
        let mut state = replay(CHECKPOINTS[checkpoint]);
        for input in inputs {
            let transition = interpret(&state, &parse_command(input));
            let next = transition.state;

            if transition.result.is_error() {
                prop_assert_eq!(&next, &state, "'{}' refused but changed state", input);
            }
            prop_assert!(next.talked.contains_all(&state.talked), "'{}' shrank a talked set", input);
            prop_assert!(next.flags().is_superset(state.flags()), "'{}' cleared a flag", input);
            for item in ItemId::ALL {
                prop_assert!(holders(&next, item) <= 1, "{} held twice after '{}'", item, input);
            }
            if let Some(conversation) = next.dialogue {
                let replies = hx_fiction::dialogue::replies(conversation.topic);
                prop_assert!(usize::from(conversation.turn) <= replies.len());
            }
            state = next;
        }
    }

    #[test]
    fn queries_never_change_state(
        checkpoint in 0..CHECKPOINTS.len(),
        query in prop::sample::select(QUERIES),
    ) {
        let state = replay(CHECKPOINTS[checkpoint]);
        let transition = interpret(&state, &parse_command(query));
        prop_assert_eq!(transition.state, state);
    }
}
