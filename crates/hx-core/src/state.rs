//! The mutable game state aggregate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{ItemId, NpcId, RoomId, SYMBOLS};
use crate::overlay::WorldOverlay;
use crate::progress::{GardenPlot, RoseColor, Stage, StoneTrial, Talked};

/// A progress flag. Flags are set once and never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// The torch has been lit.
    TorchLit,
    /// The opening conversation with the guide reached its last line.
    GuideIntroDone,
    /// The bird has been set free in the forest.
    BirdReleased,
    /// The bird has been talked into flying.
    BirdEncouraged,
    /// Presentation hint: show the feather falling.
    ShowFeatherDrop,
    /// All four library paths were walked and the shield appeared.
    ShieldReady,
    /// The stage creation finished and the orb appeared.
    OrbReady,
    /// The chosen rose bloomed and the seed can be taken.
    SeedReady,
    /// The Hexagram disk has been repaired.
    DiskRepaired,
}

/// Which conversation table governs `respond` for the active NPC.
///
/// The topic determines the NPC, so a conversation can never pair a table
/// with the wrong speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// The guide's welcome in the starting courtyard.
    GuideIntro,
    /// Prisoner in Chains.
    Prisoner,
    /// Watcher of Shadows.
    Watcher,
    /// Guide at the Cave Entrance.
    Philosopher,
    /// The released bird in the forest.
    BirdForest,
    /// Einstein in the theater.
    Einstein,
    /// Marx in the theater.
    Marx,
    /// One of the garden roses.
    Rose(RoseColor),
}

impl Topic {
    /// The NPC speaking in this conversation.
    pub fn npc(self) -> NpcId {
        match self {
            Topic::GuideIntro => NpcId::Guide,
            Topic::Prisoner => NpcId::Prisoner,
            Topic::Watcher => NpcId::Watcher,
            Topic::Philosopher => NpcId::Philosopher,
            Topic::BirdForest => NpcId::Bird,
            Topic::Einstein => NpcId::Einstein,
            Topic::Marx => NpcId::Marx,
            Topic::Rose(rose) => rose.npc(),
        }
    }
}

/// An active conversation: the topic and how many replies were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// The conversation table in use.
    pub topic: Topic,
    /// Number of `respond` turns taken so far.
    pub turn: u8,
}

impl Conversation {
    /// Start a conversation at turn 0.
    pub fn start(topic: Topic) -> Self {
        Self { topic, turn: 0 }
    }

    /// The NPC being talked to.
    pub fn npc(&self) -> NpcId {
        self.topic.npc()
    }
}

/// Where an item currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLocation {
    /// In the player's inventory.
    Inventory,
    /// Lying in a room.
    Room(RoomId),
    /// Not yet spawned, or consumed.
    Nowhere,
}

/// Everything that changes during play.
///
/// An item is held by at most one container (a room or the inventory). All
/// item movement goes through methods on this type so that invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The room the player is in.
    pub room: RoomId,
    inventory: BTreeSet<ItemId>,
    overlay: WorldOverlay,
    flags: BTreeSet<Flag>,
    /// Talked/visited sets.
    pub talked: Talked,
    /// Stone trial counter.
    pub stone: StoneTrial,
    /// Theater creation progress.
    pub stage: Stage,
    /// Garden tending progress.
    pub garden: GardenPlot,
    /// The active conversation, if any.
    pub dialogue: Option<Conversation>,
}

impl GameState {
    /// A new game in the starting courtyard.
    pub fn new() -> Self {
        Self {
            room: RoomId::CourtyardStart,
            inventory: BTreeSet::new(),
            overlay: WorldOverlay::initial(),
            flags: BTreeSet::new(),
            talked: Talked::default(),
            stone: StoneTrial::default(),
            stage: Stage::default(),
            garden: GardenPlot::default(),
            dialogue: None,
        }
    }

    /// Check if a flag is set.
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    /// Set a flag. Returns true if it was not set before.
    pub fn set_flag(&mut self, flag: Flag) -> bool {
        self.flags.insert(flag)
    }

    /// All flags currently set.
    pub fn flags(&self) -> &BTreeSet<Flag> {
        &self.flags
    }

    /// The room overlay.
    pub fn overlay(&self) -> &WorldOverlay {
        &self.overlay
    }

    /// Items present in the current room.
    pub fn items_here(&self) -> Vec<ItemId> {
        self.overlay.items_in(self.room)
    }

    /// NPCs present in the current room.
    pub fn npcs_here(&self) -> Vec<NpcId> {
        self.overlay.npcs_in(self.room)
    }

    /// Make an NPC present in a room.
    pub fn reveal_npc(&mut self, room: RoomId, npc: NpcId) -> bool {
        self.overlay.add_npc(room, npc)
    }

    /// The player's inventory.
    pub fn inventory(&self) -> &BTreeSet<ItemId> {
        &self.inventory
    }

    /// Check if the player carries an item.
    pub fn has_item(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// Locate an item.
    pub fn item_location(&self, item: ItemId) -> ItemLocation {
        if self.inventory.contains(&item) {
            ItemLocation::Inventory
        } else if let Some(room) = self.overlay.room_holding(item) {
            ItemLocation::Room(room)
        } else {
            ItemLocation::Nowhere
        }
    }

    /// Move an item from the current room into the inventory.
    ///
    /// Returns false (and changes nothing) unless the item lies here and is
    /// not already carried.
    pub fn take_from_room(&mut self, item: ItemId) -> bool {
        if self.inventory.contains(&item) || !self.overlay.has_item(self.room, item) {
            return false;
        }
        self.overlay.remove_item(self.room, item);
        self.inventory.insert(item);
        true
    }

    /// Place an item that does not exist yet into a room.
    ///
    /// Returns false if the item is already carried or lying anywhere.
    pub fn spawn(&mut self, room: RoomId, item: ItemId) -> bool {
        if self.item_location(item) != ItemLocation::Nowhere {
            return false;
        }
        self.overlay.add_item(room, item)
    }

    /// Give the player an item that does not exist yet.
    ///
    /// Returns false if the item is already carried or lying anywhere.
    pub fn grant(&mut self, item: ItemId) -> bool {
        if self.item_location(item) != ItemLocation::Nowhere {
            return false;
        }
        self.inventory.insert(item)
    }

    /// Remove an item from the inventory. Returns false if it was not carried.
    pub fn consume(&mut self, item: ItemId) -> bool {
        self.inventory.remove(&item)
    }

    /// Symbols the player still lacks, in canonical order.
    pub fn missing_symbols(&self) -> Vec<ItemId> {
        SYMBOLS
            .into_iter()
            .filter(|s| !self.inventory.contains(s))
            .collect()
    }

    /// The player carries all six symbols.
    pub fn holds_all_symbols(&self) -> bool {
        self.missing_symbols().is_empty()
    }

    /// The NPC in the active conversation, if any.
    pub fn active_npc(&self) -> Option<NpcId> {
        self.dialogue.map(|c| c.npc())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_in_courtyard() {
        let state = GameState::new();
        assert_eq!(state.room, RoomId::CourtyardStart);
        assert!(state.inventory().is_empty());
        assert!(state.flags().is_empty());
        assert!(state.dialogue.is_none());
        assert_eq!(state.npcs_here(), vec![NpcId::Guide]);
    }

    #[test]
    fn take_moves_item_atomically() {
        let mut state = GameState::new();
        state.room = RoomId::Cave;
        assert_eq!(state.item_location(ItemId::Torch), ItemLocation::Room(RoomId::Cave));

        assert!(state.take_from_room(ItemId::Torch));
        assert_eq!(state.item_location(ItemId::Torch), ItemLocation::Inventory);
        assert!(state.items_here().is_empty());

        // Second take is refused and changes nothing
        assert!(!state.take_from_room(ItemId::Torch));
        assert_eq!(state.inventory().len(), 1);
    }

    #[test]
    fn take_requires_item_in_current_room() {
        let mut state = GameState::new();
        assert!(!state.take_from_room(ItemId::Torch));
        assert_eq!(state.item_location(ItemId::Torch), ItemLocation::Room(RoomId::Cave));
    }

    #[test]
    fn spawn_refuses_items_that_exist() {
        let mut state = GameState::new();
        assert!(state.spawn(RoomId::Forest, ItemId::FeatherOfFreedom));
        assert!(!state.spawn(RoomId::Library, ItemId::FeatherOfFreedom));

        state.room = RoomId::Forest;
        assert!(state.take_from_room(ItemId::FeatherOfFreedom));
        assert!(!state.spawn(RoomId::Forest, ItemId::FeatherOfFreedom));
        assert!(!state.grant(ItemId::FeatherOfFreedom));
    }

    #[test]
    fn grant_and_consume() {
        let mut state = GameState::new();
        assert!(state.grant(ItemId::SeedOfLove));
        assert!(!state.grant(ItemId::SeedOfLove));
        assert!(state.consume(ItemId::SeedOfLove));
        assert!(!state.consume(ItemId::SeedOfLove));
    }

    #[test]
    fn symbol_tracking() {
        let mut state = GameState::new();
        assert_eq!(state.missing_symbols().len(), 6);
        for symbol in SYMBOLS {
            state.grant(symbol);
        }
        assert!(state.holds_all_symbols());
    }

    #[test]
    fn topic_determines_npc() {
        assert_eq!(Topic::GuideIntro.npc(), NpcId::Guide);
        assert_eq!(Topic::Rose(RoseColor::Purple).npc(), NpcId::Purple);
        let mut state = GameState::new();
        state.dialogue = Some(Conversation::start(Topic::Watcher));
        assert_eq!(state.active_npc(), Some(NpcId::Watcher));
    }

    #[test]
    fn flags_are_set_once() {
        let mut state = GameState::new();
        assert!(state.set_flag(Flag::TorchLit));
        assert!(!state.set_flag(Flag::TorchLit));
        assert!(state.has_flag(Flag::TorchLit));
    }
}
