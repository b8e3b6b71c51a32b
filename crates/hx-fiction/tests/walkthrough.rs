//! Full-game walkthrough tests.

use hx_core::{Flag, ItemId, NpcId, RoomId, SYMBOLS};
use hx_fiction::{GameSession, ResultKind};

/// A complete playthrough, room by room.
const WALKTHROUGH: &[&str] = &[
    "talk guide",
    "respond",
    "respond",
    "go west",
    "take torch",
    "use torch",
    "talk prisoner",
    "respond",
    "respond",
    "talk watcher",
    "talk philosopher",
    "take bird",
    "go south",
    "release",
    "talk bird",
    "respond",
    "respond",
    "respond",
    "take feather",
    "go east",
    "learn",
    "live",
    "dialogue",
    "reflect",
    "take shield",
    "go north",
    "talk einstein",
    "talk marx",
    "stage",
    "create star",
    "continue",
    "continue",
    "take orb",
    "go north",
    "push stone",
    "push stone",
    "push stone",
    "push stone",
    "push stone",
    "take stone",
    "go west",
    "talk red",
    "talk white",
    "talk purple",
    "choose purple",
    "water",
    "fertilize",
    "weed",
    "wish",
    "wait",
    "take seed",
    "go south",
];

fn play(session: &mut GameSession, inputs: &[&str]) {
    for input in inputs {
        let result = session.process(input);
        assert!(
            !result.is_error(),
            "'{input}' was refused: {}",
            result.message
        );
    }
}

#[test]
fn full_game_restores_the_hexagram() {
    let mut session = GameSession::in_memory();
    play(&mut session, WALKTHROUGH);

    let state = session.state();
    assert_eq!(state.room, RoomId::CourtyardFinale);
    assert!(state.holds_all_symbols());
    assert!(!state.has_item(ItemId::Torch));

    let inventory = session.process("inventory");
    assert!(inventory.message.contains("'repair disk'"));

    let greeting = session.process("talk guide");
    assert!(greeting.message.starts_with("Guide: Welcome back"));
    assert!(session.state().dialogue.is_none());

    let done = session.process("repair disk");
    assert_eq!(done.kind, ResultKind::Success);
    assert!(done.game_complete);
    assert!(session.state().has_flag(Flag::DiskRepaired));
}

#[test]
fn guide_then_west_reaches_the_cave() {
    let mut session = GameSession::in_memory();
    play(&mut session, &["talk guide", "respond", "respond", "go west"]);
    assert_eq!(session.state().room, RoomId::Cave);
}

#[test]
fn seeking_wisdom_gate_holds_before_the_guide() {
    let mut session = GameSession::in_memory();
    let result = session.process("go west");
    assert_eq!(result.kind, ResultKind::Error);
    assert!(result.message.contains("Seek wisdom"));
    assert_eq!(session.state().room, RoomId::CourtyardStart);
}

#[test]
fn torch_reveals_the_cave() {
    let mut session = GameSession::in_memory();
    play(
        &mut session,
        &["talk guide", "respond", "respond", "go west", "take torch", "use torch"],
    );
    let state = session.state();
    assert_eq!(
        state.npcs_here(),
        vec![NpcId::Prisoner, NpcId::Watcher, NpcId::Philosopher]
    );
    assert_eq!(state.items_here(), vec![ItemId::Bird]);
}

#[test]
fn taking_twice_is_refused() {
    let mut session = GameSession::in_memory();
    play(&mut session, &["talk guide", "respond", "respond", "go west", "take torch"]);
    let before = session.state().clone();
    let again = session.process("take torch");
    assert_eq!(again.message, "You already have that item.");
    assert_eq!(session.state(), &before);
}

#[test]
fn symbols_arrive_in_order() {
    let mut session = GameSession::in_memory();
    let mut collected = Vec::new();
    for input in WALKTHROUGH {
        session.process(input);
        for symbol in SYMBOLS {
            if session.state().has_item(symbol) && !collected.contains(&symbol) {
                collected.push(symbol);
            }
        }
    }
    assert_eq!(collected, SYMBOLS.to_vec());
}

#[test]
fn saved_game_resumes_in_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut first = GameSession::new(
        hx_fiction::GameConfig::default(),
        Box::new(hx_fiction::JsonFileStore::new(&path)),
    );
    play(&mut first, &WALKTHROUGH[..20]);
    let expected = first.state().clone();
    assert_eq!(expected.room, RoomId::Library);

    let second = GameSession::new(
        hx_fiction::GameConfig::default(),
        Box::new(hx_fiction::JsonFileStore::new(&path)),
    );
    assert_eq!(second.state(), &expected);
    assert!(
        !second
            .state()
            .overlay()
            .has_item(RoomId::Forest, ItemId::FeatherOfFreedom)
    );
}
