//! Dynamic room contents layered over the static catalog.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{ItemId, NpcId, RoomId};

/// Items and NPCs currently present in one room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomContents {
    /// Items lying in the room.
    pub items: BTreeSet<ItemId>,
    /// NPCs present in the room.
    pub npcs: BTreeSet<NpcId>,
}

/// Mutable per-room contents, keyed by room id.
///
/// The catalog only provides the starting contents; every later change
/// (items taken, items spawned, NPCs revealed) is recorded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldOverlay {
    rooms: BTreeMap<RoomId, RoomContents>,
}

impl WorldOverlay {
    /// Build the overlay for a new game from the catalog.
    pub fn initial() -> Self {
        let rooms = RoomId::ALL
            .into_iter()
            .map(|id| {
                let room = id.room();
                let contents = RoomContents {
                    items: room.items.iter().copied().collect(),
                    npcs: room.npcs.iter().copied().collect(),
                };
                (id, contents)
            })
            .collect();
        Self { rooms }
    }

    /// Items present in a room, in catalog order.
    pub fn items_in(&self, room: RoomId) -> Vec<ItemId> {
        self.rooms
            .get(&room)
            .map(|c| c.items.iter().copied().collect())
            .unwrap_or_default()
    }

    /// NPCs present in a room, in catalog order.
    pub fn npcs_in(&self, room: RoomId) -> Vec<NpcId> {
        self.rooms
            .get(&room)
            .map(|c| c.npcs.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Check whether an item lies in a room.
    pub fn has_item(&self, room: RoomId, item: ItemId) -> bool {
        self.rooms
            .get(&room)
            .is_some_and(|c| c.items.contains(&item))
    }

    /// Check whether an NPC is present in a room.
    pub fn has_npc(&self, room: RoomId, npc: NpcId) -> bool {
        self.rooms.get(&room).is_some_and(|c| c.npcs.contains(&npc))
    }

    /// Find the room an item currently lies in.
    pub fn room_holding(&self, item: ItemId) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|(_, c)| c.items.contains(&item))
            .map(|(id, _)| *id)
    }

    /// Place an item in a room. Returns false if it was already there.
    ///
    /// Callers are responsible for the item not existing anywhere else;
    /// [`GameState::spawn`](crate::state::GameState::spawn) enforces that.
    pub(crate) fn add_item(&mut self, room: RoomId, item: ItemId) -> bool {
        self.rooms.entry(room).or_default().items.insert(item)
    }

    /// Remove an item from a room. Returns false if it was not there.
    pub(crate) fn remove_item(&mut self, room: RoomId, item: ItemId) -> bool {
        self.rooms
            .get_mut(&room)
            .is_some_and(|c| c.items.remove(&item))
    }

    /// Make an NPC present in a room. Returns false if it already was.
    pub fn add_npc(&mut self, room: RoomId, npc: NpcId) -> bool {
        self.rooms.entry(room).or_default().npcs.insert(npc)
    }
}

impl Default for WorldOverlay {
    fn default() -> Self {
        Self::initial()
    }
}
