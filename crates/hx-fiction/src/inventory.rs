//! Take, use, release and the inventory listing.

use hx_core::{Flag, GameState, ItemId, NpcId, RoomId};
use tracing::debug;

use crate::error::{FictionError, FictionResult};
use crate::parser::{item_hint, resolve_item};
use crate::result::CommandResult;

/// The readiness line the guide speaks once all six symbols are held.
pub const READY_TO_REPAIR: &str = "Guide: I believe you've gathered everything needed to restore the Hexagram! Try placing them onto the disk one by one and see what happens.\n(Type 'repair disk' to place your six tokens into the Hexagram.)";

/// Pick up an item lying in the current room.
pub fn take(state: &mut GameState, name: &str) -> FictionResult<CommandResult> {
    let resolved = resolve_item(name);
    if resolved.is_some_and(|item| state.has_item(item)) {
        return Err(FictionError::AlreadyHave);
    }
    let item = resolved
        .filter(|item| state.overlay().has_item(state.room, *item))
        .ok_or_else(|| FictionError::NoSuchItem {
            hint: item_hint(name, &state.items_here()),
        })?;
    let record = item.item();
    if !record.portable {
        return Err(FictionError::CannotTake(record.name));
    }
    if !state.take_from_room(item) {
        return Err(FictionError::NoSuchItem {
            hint: String::new(),
        });
    }
    debug!(%item, "item taken");

    let mut message = format!("You take the {}.", record.name);
    if let Some(extra) = take_prose(item) {
        message.push_str(extra);
    }
    Ok(CommandResult::success(message).with_item(item))
}

fn take_prose(item: ItemId) -> Option<&'static str> {
    let text = match item {
        ItemId::Torch => {
            " Maybe you can try to light it.\n(Type 'use <item>' to use an item. For example, 'use torch'.)"
        }
        ItemId::Bird => {
            "\n\nYou gently pick up the small bird. She looks at you with hope.\n\
             (Type 'look' to check the exit and type 'go <direction>' to go to the next room)\n\
             (Type 'inventory' to check the items in your inventory)"
        }
        ItemId::FeatherOfFreedom => {
            "\n\nYou have obtained the Feather of Freedom!\n\
             Do not be afraid to try. Not every door is locked, and not every window is closed. \
             There will always be new strength, warmth, support, and wonder waiting in places you have not yet seen. \
             They are outside the doors, in the wind, under the sun, waiting only for you to step out bravely. \
             Do not remain trapped in the past, nor in rigid beliefs. \
             When you push open the window, when you step out the door, freedom and hope will walk with you.\n\
             (Type 'look' to check the exit and type 'go <direction>' to go to the next room)"
        }
        ItemId::ShieldOfWisdom => {
            "\n\nYou have obtained the Shield of Wisdom!\n\
             Learning lets you begin, dialogue broadens your sight, experience gives depth, reflection guides growth. \
             You have gathered the four paths of wisdom, and obtained the Shield of Wisdom. \
             Whether in smooth or adverse times, you can respond calmly.\n\
             (Type 'look' to check the exit and type 'go <direction>' to go to the next room)"
        }
        ItemId::OrbOfCreation => {
            "\n\nYou have obtained the token: Crystal Ball. It carries vision and future, condensing infinite possibilities into your palm. \
             Listen to the truest voice in your heart, first create the vision of your own life. \
             The aid of the universe will follow your mind. The power of belief will make the impossible gradually possible.\n\
             (Type 'look' to check the exit and type 'go <direction>' to go to the next room)"
        }
        ItemId::StoneOfGrit => {
            "\n\nItem added to inventory: Stone Fragment of Grit.\n\n\
             Everyone is pushing their own stone: work, love, dreams… They may all roll down, yet we still must push again.\n\n\
             The hero who conquers inner despair is more precious than one who conquers the world.\n\n\
             Perhaps happiness is hidden in the intervals of repetition. In these moments, we think, order, and rebuild ourselves, \
             so that next time, or in some future facing of the stone, we may be a little more skillful, a little lighter, \
             with stronger inner strength.\n\n\
             (Type 'look' to check the exit and type 'go <direction>' to go to the next room)"
        }
        _ => return None,
    };
    Some(text)
}

/// Use a carried item. Only the torch does anything.
pub fn use_item(state: &mut GameState, name: &str) -> FictionResult<CommandResult> {
    let item = resolve_item(name)
        .filter(|item| state.has_item(*item))
        .ok_or(FictionError::NotCarrying)?;
    match item {
        ItemId::Torch => light_torch(state),
        _ => Err(FictionError::CannotUse),
    }
}

fn light_torch(state: &mut GameState) -> FictionResult<CommandResult> {
    if !state.set_flag(Flag::TorchLit) {
        return Ok(CommandResult::info("The torch is already lit."));
    }
    for npc in [NpcId::Prisoner, NpcId::Watcher, NpcId::Philosopher] {
        state.reveal_npc(RoomId::Cave, npc);
    }
    state.spawn(RoomId::Cave, ItemId::Bird);
    debug!("torch lit, cave revealed");
    Ok(CommandResult::success(
        "You light the torch. The cave is now illuminated!\n\
         The firelight reveals the truth: the shadows on the wall are merely puppets, the fire pile is artificial. \
         You realize you have been deceived by illusions. Now you can clearly see the cave: you find the Prisoner in Chains, \
         the Watcher of Shadows, and the Guide at the Cave Entrance. Go talk to them!\n\
         (Type 'look' to look around again and type 'talk <NPC>' to get more information)",
    ))
}

/// List the inventory.
pub fn list(state: &GameState) -> CommandResult {
    if state.inventory().is_empty() {
        return CommandResult::info("Inventory: (empty)");
    }
    let mut message = String::from("Inventory:");
    for item in state.inventory() {
        let record = item.item();
        message.push_str(&format!("\n- {}: {}", record.name, record.description));
    }
    if state.room == RoomId::CourtyardFinale && state.holds_all_symbols() {
        message.push_str("\n\n");
        message.push_str(READY_TO_REPAIR);
    }
    CommandResult::info(message)
}

/// Set the carried bird free in the forest.
pub fn release(state: &mut GameState) -> FictionResult<CommandResult> {
    if state.room != RoomId::Forest {
        return Err(FictionError::WrongPlace(
            "You can only release the bird in the forest.",
        ));
    }
    if state.has_flag(Flag::BirdReleased) {
        return Err(FictionError::AlreadyDone("You have already released the bird."));
    }
    if !state.consume(ItemId::Bird) {
        return Err(FictionError::NotYet("You don't have the bird."));
    }
    state.set_flag(Flag::BirdReleased);
    state.reveal_npc(RoomId::Forest, NpcId::Bird);
    debug!("bird released");
    Ok(CommandResult::success(
        "You gently open your hands. The little bird hesitates for a moment, then flutters its wings and lands on a nearby branch, \
         looking at you with curiosity and a hint of fear.\n\n(Type 'talk bird' to start a conversation with her.)",
    ))
}
