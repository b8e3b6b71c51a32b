//! Dialogue engine.
//!
//! `talk` resolves an NPC in the current room, picks the conversation topic,
//! applies entry effects and opens the conversation at turn 0. `respond`
//! walks the topic's reply table; giving the last reply applies the topic's
//! completion effect. Conversations stay open until `end` or the next
//! `talk`.

mod script;

use hx_core::{Conversation, Flag, GameState, ItemId, NpcId, RoomId, RoseColor, Topic};
use tracing::debug;

use crate::error::{FictionError, FictionResult};
use crate::parser::{npc_hint, resolve_npc};
use crate::result::CommandResult;

pub use script::replies;

/// Start (or restart) a conversation with an NPC in the current room.
pub fn talk(state: &mut GameState, name: &str) -> FictionResult<CommandResult> {
    let npc = resolve_npc(name)
        .filter(|npc| state.overlay().has_npc(state.room, *npc))
        .ok_or_else(|| FictionError::NoSuchPerson {
            hint: npc_hint(name, &state.npcs_here()),
        })?;

    let Some(topic) = topic_for(state, npc) else {
        state.dialogue = None;
        return Ok(CommandResult::success(script::WELCOME_BACK));
    };
    enter(state, topic);
    state.dialogue = Some(Conversation::start(topic));
    debug!(?topic, "conversation started");
    Ok(CommandResult::success(script::opening(topic, state)))
}

/// The conversation an NPC opens here, or `None` for a one-line greeting.
fn topic_for(state: &GameState, npc: NpcId) -> Option<Topic> {
    let topic = match npc {
        NpcId::Guide if state.room == RoomId::CourtyardFinale => return None,
        NpcId::Guide => Topic::GuideIntro,
        NpcId::Prisoner => Topic::Prisoner,
        NpcId::Watcher => Topic::Watcher,
        NpcId::Philosopher => Topic::Philosopher,
        NpcId::Bird => Topic::BirdForest,
        NpcId::Einstein => Topic::Einstein,
        NpcId::Marx => Topic::Marx,
        NpcId::Red => Topic::Rose(RoseColor::Red),
        NpcId::White => Topic::Rose(RoseColor::White),
        NpcId::Purple => Topic::Rose(RoseColor::Purple),
    };
    Some(topic)
}

fn enter(state: &mut GameState, topic: Topic) {
    match topic {
        Topic::Prisoner | Topic::Watcher | Topic::Philosopher => {
            state.talked.mark_cave(topic.npc());
        }
        Topic::Einstein | Topic::Marx => {
            state.talked.mark_theater(topic.npc());
        }
        Topic::Rose(rose) => {
            state.talked.mark_rose(rose);
        }
        Topic::GuideIntro | Topic::BirdForest => {}
    }
}

/// Give the next reply in the active conversation.
pub fn respond(state: &mut GameState) -> FictionResult<CommandResult> {
    let mut conversation = state.dialogue.ok_or(FictionError::NotInConversation)?;
    let lines = replies(conversation.topic);
    let reply = lines
        .get(usize::from(conversation.turn))
        .ok_or(FictionError::NothingMoreToSay)?;

    conversation.turn += 1;
    state.dialogue = Some(conversation);

    let mut result = CommandResult::success(*reply);
    if usize::from(conversation.turn) == lines.len() {
        if let Some(item) = complete(state, conversation.topic) {
            result = result.with_item(item);
        }
    }
    Ok(result)
}

/// Completion effect of a topic. Returns an item that appeared, if any.
fn complete(state: &mut GameState, topic: Topic) -> Option<ItemId> {
    debug!(?topic, "conversation completed");
    match topic {
        Topic::GuideIntro => {
            state.set_flag(Flag::GuideIntroDone);
        }
        Topic::BirdForest => {
            state.set_flag(Flag::BirdEncouraged);
            if state.spawn(RoomId::Forest, ItemId::FeatherOfFreedom) {
                state.set_flag(Flag::ShowFeatherDrop);
                return Some(ItemId::FeatherOfFreedom);
            }
        }
        _ => {}
    }
    None
}

/// Close the active conversation.
pub fn end(state: &mut GameState) -> FictionResult<CommandResult> {
    if state.dialogue.take().is_none() {
        return Err(FictionError::NotInConversation);
    }
    Ok(CommandResult::success(script::ENDED))
}
