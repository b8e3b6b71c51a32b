//! Exit gating and room transitions.
//!
//! Each gated exit carries an ordered list of requirements. The first unmet
//! one produces the refusal, so conversation prerequisites are listed before
//! item prerequisites.

use hx_core::{Direction, Flag, GameState, ItemId, NpcId, RoomId};
use tracing::debug;

use crate::error::{FictionError, FictionResult};
use crate::result::CommandResult;

/// Outcome of checking an exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitCheck {
    /// The exit exists and every prerequisite holds.
    Allowed(RoomId),
    /// The room has no exit in that direction.
    NoExit,
    /// The exit exists but a prerequisite is unmet.
    Blocked(String),
}

enum Requirement {
    Flag(Flag, &'static str),
    Carrying(ItemId, &'static str),
    CaveCounsel,
}

const CAVE_COUNSEL: [NpcId; 3] = [NpcId::Prisoner, NpcId::Watcher, NpcId::Philosopher];

impl Requirement {
    fn refusal(&self, state: &GameState) -> Option<String> {
        match self {
            Requirement::Flag(flag, refusal) => {
                (!state.has_flag(*flag)).then(|| refusal.to_string())
            }
            Requirement::Carrying(item, refusal) => {
                (!state.has_item(*item)).then(|| refusal.to_string())
            }
            Requirement::CaveCounsel => {
                let missing: Vec<&str> = CAVE_COUNSEL
                    .into_iter()
                    .filter(|npc| !state.talked.cave().contains(npc))
                    .map(NpcId::name)
                    .collect();
                (!missing.is_empty()).then(|| {
                    format!(
                        "You cannot leave yet. Wisdom lies in understanding all perspectives.\n\
                         Seek counsel from those who remain: {}.\n\
                         (Type 'talk <NPC>' to learn their truth)",
                        missing.join(", ")
                    )
                })
            }
        }
    }
}

struct Gate {
    from: RoomId,
    direction: Direction,
    requires: &'static [Requirement],
}

static GATES: &[Gate] = &[
    Gate {
        from: RoomId::CourtyardStart,
        direction: Direction::West,
        requires: &[Requirement::Flag(
            Flag::GuideIntroDone,
            "You cannot leave yet. The figure in the center seems to be waiting for you.\n\
             This journey requires guidance. Seek wisdom from the one who holds the ancient scroll.\n\
             (Type 'talk guide' to begin your quest)",
        )],
    },
    Gate {
        from: RoomId::Cave,
        direction: Direction::South,
        requires: &[
            Requirement::CaveCounsel,
            Requirement::Carrying(
                ItemId::Bird,
                "You cannot leave yet. The guide spoke of a companion who shares your journey to freedom.\n\
                 Take the small one with you, and together you shall find the light.\n\
                 (Type 'take bird' to bring your companion)",
            ),
        ],
    },
    Gate {
        from: RoomId::Forest,
        direction: Direction::East,
        requires: &[
            Requirement::Flag(
                Flag::BirdReleased,
                "You cannot leave yet. Your companion from the cave awaits release in this place of freedom.\n\
                 Let her find her wings among the trees and sky.\n\
                 (Type 'release' to set her free)",
            ),
            Requirement::Flag(
                Flag::BirdEncouraged,
                "You cannot leave yet. The bird hesitates at the threshold of flight.\n\
                 Your words of encouragement may give her the courage to soar.\n\
                 (Type 'talk bird' to inspire her heart)",
            ),
            Requirement::Carrying(
                ItemId::FeatherOfFreedom,
                "You cannot leave yet. The bird has gifted you a token of her freedom.\n\
                 Take this feather; it carries the essence of courage and liberation.\n\
                 (Type 'take feather' to claim your reward)",
            ),
        ],
    },
    Gate {
        from: RoomId::Library,
        direction: Direction::North,
        requires: &[Requirement::Carrying(
            ItemId::ShieldOfWisdom,
            "The way forward is blocked. Without the Shield of Wisdom, you cannot withstand the trials beyond.\n\n\
             True wisdom comes from walking all paths of knowledge:\n\
             • Learning · Understanding (Type 'learn')\n\
             • Living · Experience (Type 'live')\n\
             • Dialogue · Communication (Type 'dialogue')\n\
             • Thinking · Reflection (Type 'reflect')\n\n\
             When all paths converge, the Shield of Wisdom shall be forged.\n\
             (Type 'take shield' when ready)",
        )],
    },
    Gate {
        from: RoomId::Theater,
        direction: Direction::North,
        requires: &[Requirement::Carrying(
            ItemId::OrbOfCreation,
            "Without the Orb of Creation, your vision cannot manifest beyond this stage.\n\n\
             In this theater of imagination, you must first:\n\
             • Speak with both visionaries to understand their wisdom\n  (Type 'talk einstein' and 'talk marx')\n\
             • Step onto the stage as the creator\n  (Type 'stage' to begin your creative journey)\n\
             • Bring your vision to life through creation\n  (Type 'create star', 'create tree', or 'create castle')\n\
             • Complete your artistic vision\n  (Type 'continue' until your creation is complete)\n\
             • Claim the crystal orb of your imagination\n  (Type 'take orb' to add the Orb of Creation to your inventory)\n\n\
             Only with the Orb of Creation can you face the trials of persistence ahead.",
        )],
    },
    Gate {
        from: RoomId::StoneCircle,
        direction: Direction::West,
        requires: &[Requirement::Carrying(
            ItemId::StoneOfGrit,
            "You cannot begin the next journey without the Stone Fragment of Grit.\n\n\
             This slope teaches that true strength comes from persistence in the face of impossibility.\n\
             The stone awaits your determination, but first you must prove your grit through trial.\n\
             (Type 'push stone' to begin the test of perseverance)",
        )],
    },
    Gate {
        from: RoomId::Garden,
        direction: Direction::South,
        requires: &[Requirement::Carrying(
            ItemId::SeedOfLove,
            "The exit is now open, but you're still missing something important.\n\n\
             In this garden of choices, love awaits your decision:\n\
             • Listen to each rose's heart (Type 'talk red', 'talk white', 'talk purple')\n\
             • Choose the one that calls to your soul (Type 'choose <color>')\n\
             • Accept the seed of love they offer (Type 'take seed')\n\n\
             Only with the Seed of Love can you return to the Courtyard of Light.",
        )],
    },
];

/// Check whether the player may leave the current room in `direction`.
pub fn can_exit(state: &GameState, direction: Direction) -> ExitCheck {
    let Some(target) = state.room.room().exit(direction) else {
        return ExitCheck::NoExit;
    };
    let refusal = GATES
        .iter()
        .filter(|gate| gate.from == state.room && gate.direction == direction)
        .flat_map(|gate| gate.requires)
        .find_map(|requirement| requirement.refusal(state));
    match refusal {
        Some(reason) => ExitCheck::Blocked(reason),
        None => ExitCheck::Allowed(target),
    }
}

/// Move the player through an exit, applying arrival effects.
pub fn go(state: &mut GameState, direction: Direction) -> FictionResult<CommandResult> {
    let target = match can_exit(state, direction) {
        ExitCheck::Allowed(target) => target,
        ExitCheck::NoExit => return Err(FictionError::NoExit),
        ExitCheck::Blocked(reason) => return Err(FictionError::Blocked(reason)),
    };
    debug!(from = %state.room, to = %target, "room transition");
    state.room = target;
    let message = arrive(state, direction);
    Ok(CommandResult::moved(target, message))
}

fn arrive(state: &mut GameState, direction: Direction) -> String {
    let room = state.room;
    let text = match room {
        RoomId::Cave => "You are in a dark, damp cave.",
        RoomId::Forest if kindle_flame(state) => {
            "The dazzling light blinds you for a moment, forcing your eyes shut.\n\
             But at last you understand: the real world is not upon the walls of the cave, but beneath the boundless sky.\n\
             From now on, your torch is no longer just a tool. It has become the very embodiment of the Flame of Courage."
        }
        RoomId::Library => "You step into a tall round hall.",
        RoomId::Theater => "You step into the theater.",
        RoomId::StoneCircle => "You arrive at a steep slope.",
        RoomId::Garden => "You step slowly into the garden's depths.",
        RoomId::CourtyardFinale => "You return once again to the Courtyard of Light!",
        _ => return format!("You move {direction}."),
    };
    text.to_string()
}

/// Turn a carried, lit torch into the flame of courage. Returns true if it
/// happened.
fn kindle_flame(state: &mut GameState) -> bool {
    if !state.has_flag(Flag::TorchLit) || !state.consume(ItemId::Torch) {
        return false;
    }
    state.grant(ItemId::FlameOfCourage);
    debug!("torch became the flame of courage");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_room(room: RoomId) -> GameState {
        let mut state = GameState::new();
        state.room = room;
        state
    }

    #[test]
    fn missing_exit_is_not_a_gate() {
        let state = GameState::new();
        assert_eq!(can_exit(&state, Direction::North), ExitCheck::NoExit);
        let finale = in_room(RoomId::CourtyardFinale);
        assert_eq!(can_exit(&finale, Direction::West), ExitCheck::NoExit);
    }

    #[test]
    fn guide_gates_the_courtyard() {
        let mut state = GameState::new();
        let ExitCheck::Blocked(reason) = can_exit(&state, Direction::West) else {
            panic!("expected a blocked exit");
        };
        assert!(reason.contains("Seek wisdom"));

        state.set_flag(Flag::GuideIntroDone);
        assert_eq!(
            can_exit(&state, Direction::West),
            ExitCheck::Allowed(RoomId::Cave)
        );
    }

    #[test]
    fn cave_names_missing_counsel_before_the_bird() {
        let mut state = in_room(RoomId::Cave);
        state.talked.mark_cave(NpcId::Watcher);
        let ExitCheck::Blocked(reason) = can_exit(&state, Direction::South) else {
            panic!("expected a blocked exit");
        };
        assert!(reason.contains("Prisoner in Chains, Guide at the Cave Entrance."));
        assert!(!reason.contains("Watcher of Shadows"));

        state.talked.mark_cave(NpcId::Prisoner);
        state.talked.mark_cave(NpcId::Philosopher);
        let ExitCheck::Blocked(reason) = can_exit(&state, Direction::South) else {
            panic!("expected a blocked exit");
        };
        assert!(reason.contains("take bird"));
    }

    #[test]
    fn forest_checks_release_then_encouragement_then_feather() {
        let mut state = in_room(RoomId::Forest);
        let reasons = |state: &GameState| match can_exit(state, Direction::East) {
            ExitCheck::Blocked(reason) => reason,
            other => panic!("unexpected {other:?}"),
        };
        assert!(reasons(&state).contains("'release'"));
        state.set_flag(Flag::BirdReleased);
        assert!(reasons(&state).contains("'talk bird'"));
        state.set_flag(Flag::BirdEncouraged);
        assert!(reasons(&state).contains("'take feather'"));
        state.grant(ItemId::FeatherOfFreedom);
        assert_eq!(
            can_exit(&state, Direction::East),
            ExitCheck::Allowed(RoomId::Library)
        );
    }

    #[test]
    fn blocked_move_keeps_room() {
        let mut state = in_room(RoomId::Library);
        let err = go(&mut state, Direction::North).unwrap_err();
        assert!(matches!(err, FictionError::Blocked(_)));
        assert_eq!(state.room, RoomId::Library);
    }

    #[test]
    fn entering_forest_with_torch_kindles_flame_once() {
        let mut state = in_room(RoomId::Cave);
        for npc in CAVE_COUNSEL {
            state.talked.mark_cave(npc);
        }
        assert!(state.take_from_room(ItemId::Torch));
        state.set_flag(Flag::TorchLit);
        state.grant(ItemId::Bird);

        let result = go(&mut state, Direction::South).unwrap();
        assert_eq!(result.room, Some(RoomId::Forest));
        assert!(result.message.contains("Flame of Courage"));
        assert!(state.has_item(ItemId::FlameOfCourage));
        assert!(!state.has_item(ItemId::Torch));
    }

    #[test]
    fn generic_move_message_without_torch() {
        let mut state = in_room(RoomId::Cave);
        for npc in CAVE_COUNSEL {
            state.talked.mark_cave(npc);
        }
        state.grant(ItemId::Bird);
        let result = go(&mut state, Direction::South).unwrap();
        assert_eq!(result.message, "You move south.");
        assert!(!state.has_item(ItemId::FlameOfCourage));
    }
}
