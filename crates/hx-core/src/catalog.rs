//! The immutable world catalog: rooms, items, and NPCs.
//!
//! Catalog records never change during play. What a room currently contains
//! is tracked separately by [`WorldOverlay`](crate::overlay::WorldOverlay),
//! seeded from each room's initial `items` and `npcs`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Identifier of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    /// Courtyard of Light, where the journey begins.
    CourtyardStart,
    /// Cave of Shadows.
    Cave,
    /// Forest of Freedom.
    Forest,
    /// Library of Wisdom.
    Library,
    /// Theater of Creation.
    Theater,
    /// Slope of Persistence.
    StoneCircle,
    /// Garden of Choices.
    Garden,
    /// Courtyard of Light, revisited for the finale.
    CourtyardFinale,
}

/// Identifier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    /// Unlit torch found in the cave.
    Torch,
    /// The small bird carried out of the cave.
    Bird,
    /// Symbol of courage.
    FlameOfCourage,
    /// Symbol of freedom.
    FeatherOfFreedom,
    /// Symbol of wisdom.
    ShieldOfWisdom,
    /// Symbol of creation.
    OrbOfCreation,
    /// Symbol of grit.
    StoneOfGrit,
    /// Symbol of love.
    SeedOfLove,
    /// The broken disk in the starting courtyard.
    HexagramDisk,
    /// Theater stage (scenery).
    Stage,
    /// Boulder on the slope (scenery).
    BigStone,
    /// The three roses' flower bed (scenery).
    Flowers,
}

/// Identifier of a non-player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcId {
    /// The old guide in both courtyards.
    Guide,
    /// Prisoner in Chains.
    Prisoner,
    /// Watcher of Shadows.
    Watcher,
    /// Guide at the Cave Entrance.
    Philosopher,
    /// The bird, once released in the forest.
    Bird,
    /// Einstein, in the theater.
    Einstein,
    /// Marx, in the theater.
    Marx,
    /// Red Rose.
    Red,
    /// White Rose.
    White,
    /// Purple Rose.
    Purple,
}

/// The six Hexagram fragments. Holding all of them is the win condition.
pub const SYMBOLS: [ItemId; 6] = [
    ItemId::FlameOfCourage,
    ItemId::FeatherOfFreedom,
    ItemId::ShieldOfWisdom,
    ItemId::OrbOfCreation,
    ItemId::StoneOfGrit,
    ItemId::SeedOfLove,
];

/// A statically defined room.
#[derive(Debug)]
pub struct Room {
    /// Room identifier.
    pub id: RoomId,
    /// Display title.
    pub title: &'static str,
    /// Narrative description.
    pub description: &'static str,
    /// Backdrop color as RGB. Game logic never reads it.
    pub background: (u8, u8, u8),
    /// NPCs present when a new game starts.
    pub npcs: &'static [NpcId],
    /// Items present when a new game starts.
    pub items: &'static [ItemId],
    /// Exits keyed by direction.
    pub exits: &'static [(Direction, RoomId)],
}

impl Room {
    /// Look up the room an exit leads to.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(dir, _)| *dir == direction)
            .map(|(_, target)| *target)
    }
}

/// A catalog item.
#[derive(Debug)]
pub struct Item {
    /// Item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: &'static str,
    /// Description shown in the inventory.
    pub description: &'static str,
    /// Whether the item can be picked up. Scenery cannot.
    pub portable: bool,
}

/// A catalog NPC.
#[derive(Debug)]
pub struct Npc {
    /// NPC identifier.
    pub id: NpcId,
    /// Display name.
    pub name: &'static str,
    /// Opening flavor line.
    pub line: &'static str,
}

static ROOMS: [Room; 8] = [
    Room {
        id: RoomId::CourtyardStart,
        title: "Courtyard of Light",
        description: "At your feet lies a broken Hexagram Stone Disk, fragments scattered. In the center of the courtyard stands a warm figure, holding an ancient scroll in hand. Under the starry dome, light seeps faintly from the cracks of the disk, suggesting the beginning of the journey.",
        background: (0x1a, 0x1a, 0x2e),
        npcs: &[NpcId::Guide],
        items: &[ItemId::HexagramDisk],
        exits: &[(Direction::West, RoomId::Cave)],
    },
    Room {
        id: RoomId::Cave,
        title: "Cave of Shadows",
        description: "Cold stone walls, oppressive air. Firelight casts twisted shadows on the walls, as if living beings are swaying.",
        background: (0x1a, 0x1a, 0x1a),
        npcs: &[],
        items: &[ItemId::Torch],
        exits: &[(Direction::South, RoomId::Forest)],
    },
    Room {
        id: RoomId::Forest,
        title: "Forest of Freedom",
        description: "A sunlit forest clearing. The wind rustles, air is fresh, light and shadow dappled. The bird looks at its companions soaring in the sky.",
        background: (0x1a, 0x5f, 0x4a),
        npcs: &[],
        items: &[],
        exits: &[(Direction::East, RoomId::Library)],
    },
    Room {
        id: RoomId::Library,
        title: "Library of Wisdom",
        description: "A tall round hall, dome painted with stars, bookshelves like a maze. Candles flicker, pages turn on their own, and the air is filled with the fragrance of ink and dust.",
        background: (0x2d, 0x1b, 0x69),
        npcs: &[],
        items: &[],
        exits: &[(Direction::North, RoomId::Theater)],
    },
    Room {
        id: RoomId::Theater,
        title: "Theater of Creation",
        description: "The stage is shrouded in darkness, heavy red curtains hanging low. The air smells of wood and dust, and the silence is so deep you can hear only your own breath.",
        background: (0x8b, 0x00, 0x00),
        npcs: &[NpcId::Einstein, NpcId::Marx],
        items: &[ItemId::Stage],
        exits: &[(Direction::North, RoomId::StoneCircle)],
    },
    Room {
        id: RoomId::StoneCircle,
        title: "Slope of Persistence",
        description: "A massive boulder rests halfway up the incline. The air is heavy with oppression, pressing against your chest.",
        background: (0x2c, 0x2c, 0x2c),
        npcs: &[],
        items: &[ItemId::BigStone],
        exits: &[(Direction::West, RoomId::Garden)],
    },
    Room {
        id: RoomId::Garden,
        title: "Garden of Choices",
        description: "The air grows still, as if the world is holding its breath.\nAbove, the sky casts a gentle glow; petals glimmer in the soft light. Distant music hums faintly, like sacred chanting.",
        background: (0x2d, 0x5a, 0x27),
        npcs: &[NpcId::Red, NpcId::White, NpcId::Purple],
        items: &[ItemId::Flowers],
        exits: &[(Direction::South, RoomId::CourtyardFinale)],
    },
    Room {
        id: RoomId::CourtyardFinale,
        title: "Courtyard of Light - Finale",
        description: "On the ground still lies the broken Hexagram Stone Disk. The kind old man smiles warmly at you.",
        background: (0x16, 0x21, 0x3e),
        npcs: &[NpcId::Guide],
        items: &[],
        exits: &[],
    },
];

static ITEMS: [Item; 12] = [
    Item {
        id: ItemId::Torch,
        name: "Torch",
        description: "A torch. Maybe you can light it to see the truth.",
        portable: true,
    },
    Item {
        id: ItemId::Bird,
        name: "Bird",
        description: "A small bird with gray-white feathers, curled up in a crack in the stone.",
        portable: true,
    },
    Item {
        id: ItemId::FlameOfCourage,
        name: "Flame of Courage",
        description: "A flame that burns away illusions and lights the path of truth.",
        portable: true,
    },
    Item {
        id: ItemId::FeatherOfFreedom,
        name: "Feather of Freedom",
        description: "A feather that symbolizes the courage to break free and soar.",
        portable: true,
    },
    Item {
        id: ItemId::ShieldOfWisdom,
        name: "Shield of Wisdom",
        description: "A shield forged from understanding, experience, communication, and reflection.",
        portable: true,
    },
    Item {
        id: ItemId::OrbOfCreation,
        name: "Orb of Creation",
        description: "A crystal orb that holds the power of imagination and vision.",
        portable: true,
    },
    Item {
        id: ItemId::StoneOfGrit,
        name: "Stone of Grit",
        description: "A stone that embodies perseverance and inner strength.",
        portable: true,
    },
    Item {
        id: ItemId::SeedOfLove,
        name: "Seed of Love",
        description: "A shining seed that contains the essence of love and responsibility.",
        portable: true,
    },
    Item {
        id: ItemId::HexagramDisk,
        name: "Broken Hexagram Stone Disk",
        description: "Fragments of a once-whole disk, faintly glowing with cosmic energy.",
        portable: true,
    },
    Item {
        id: ItemId::Stage,
        name: "Stage",
        description: "A wooden stage waiting in the dark for its creator.",
        portable: false,
    },
    Item {
        id: ItemId::BigStone,
        name: "Big Stone",
        description: "A massive boulder resting halfway up the slope.",
        portable: false,
    },
    Item {
        id: ItemId::Flowers,
        name: "Three Flowers",
        description: "Three roses blooming together: red, white, and purple.",
        portable: false,
    },
];

static NPCS: [Npc; 10] = [
    Npc {
        id: NpcId::Guide,
        name: "The Final Guide",
        line: "Ah, you've finally arrived. Welcome… you are the chosen one, the destined savior.",
    },
    Npc {
        id: NpcId::Prisoner,
        name: "Prisoner in Chains",
        line: "Who are you? I've never seen you before.",
    },
    Npc {
        id: NpcId::Watcher,
        name: "Watcher of Shadows",
        line: "Greetings, outsider.",
    },
    Npc {
        id: NpcId::Philosopher,
        name: "Guide at the Cave Entrance",
        line: "Do you have the courage to go out? The light will sting your eyes, but it is the only road to freedom.",
    },
    Npc {
        id: NpcId::Bird,
        name: "Bird",
        line: "This place feels so unfamiliar… I'm a little scared.",
    },
    Npc {
        id: NpcId::Einstein,
        name: "Einstein",
        line: "Imagination is more important than knowledge. Knowledge is limited, but imagination encompasses everything in the world, drives progress, and is the source of knowledge's evolution.",
    },
    Npc {
        id: NpcId::Marx,
        name: "Marx",
        line: "The poorest architect is still, from the start, more skilled than the most expert bee. For the architect has already built the structure in thought, existing in the mind before it takes shape in reality.",
    },
    Npc {
        id: NpcId::Red,
        name: "Red Rose",
        line: "If you choose me, please guard my passion.",
    },
    Npc {
        id: NpcId::White,
        name: "White Rose",
        line: "If you choose me, please cherish my purity.",
    },
    Npc {
        id: NpcId::Purple,
        name: "Purple Rose",
        line: "If you choose me, please listen to my silence.",
    },
];

impl RoomId {
    /// Every room, in catalog order.
    pub const ALL: [RoomId; 8] = [
        RoomId::CourtyardStart,
        RoomId::Cave,
        RoomId::Forest,
        RoomId::Library,
        RoomId::Theater,
        RoomId::StoneCircle,
        RoomId::Garden,
        RoomId::CourtyardFinale,
    ];

    /// The catalog record for this room.
    pub fn room(self) -> &'static Room {
        &ROOMS[self as usize]
    }

    /// The stable string identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            RoomId::CourtyardStart => "courtyard_start",
            RoomId::Cave => "cave",
            RoomId::Forest => "forest",
            RoomId::Library => "library",
            RoomId::Theater => "theater",
            RoomId::StoneCircle => "stone_circle",
            RoomId::Garden => "garden",
            RoomId::CourtyardFinale => "courtyard_finale",
        }
    }
}

impl ItemId {
    /// Every item, in catalog order.
    pub const ALL: [ItemId; 12] = [
        ItemId::Torch,
        ItemId::Bird,
        ItemId::FlameOfCourage,
        ItemId::FeatherOfFreedom,
        ItemId::ShieldOfWisdom,
        ItemId::OrbOfCreation,
        ItemId::StoneOfGrit,
        ItemId::SeedOfLove,
        ItemId::HexagramDisk,
        ItemId::Stage,
        ItemId::BigStone,
        ItemId::Flowers,
    ];

    /// The catalog record for this item.
    pub fn item(self) -> &'static Item {
        &ITEMS[self as usize]
    }

    /// Display name from the catalog.
    pub fn name(self) -> &'static str {
        self.item().name
    }

    /// Whether this item is one of the six Hexagram fragments.
    pub fn is_symbol(self) -> bool {
        SYMBOLS.contains(&self)
    }

    /// The stable string identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemId::Torch => "torch",
            ItemId::Bird => "bird",
            ItemId::FlameOfCourage => "flame_of_courage",
            ItemId::FeatherOfFreedom => "feather_of_freedom",
            ItemId::ShieldOfWisdom => "shield_of_wisdom",
            ItemId::OrbOfCreation => "orb_of_creation",
            ItemId::StoneOfGrit => "stone_of_grit",
            ItemId::SeedOfLove => "seed_of_love",
            ItemId::HexagramDisk => "hexagram_disk",
            ItemId::Stage => "stage",
            ItemId::BigStone => "big_stone",
            ItemId::Flowers => "flowers",
        }
    }

    /// Look up an item by its string identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.as_str() == id)
    }
}

impl NpcId {
    /// Every NPC, in catalog order.
    pub const ALL: [NpcId; 10] = [
        NpcId::Guide,
        NpcId::Prisoner,
        NpcId::Watcher,
        NpcId::Philosopher,
        NpcId::Bird,
        NpcId::Einstein,
        NpcId::Marx,
        NpcId::Red,
        NpcId::White,
        NpcId::Purple,
    ];

    /// The catalog record for this NPC.
    pub fn npc(self) -> &'static Npc {
        &NPCS[self as usize]
    }

    /// Display name from the catalog.
    pub fn name(self) -> &'static str {
        self.npc().name
    }

    /// The stable string identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            NpcId::Guide => "guide",
            NpcId::Prisoner => "prisoner",
            NpcId::Watcher => "watcher",
            NpcId::Philosopher => "philosopher",
            NpcId::Bird => "bird",
            NpcId::Einstein => "einstein",
            NpcId::Marx => "marx",
            NpcId::Red => "red",
            NpcId::White => "white",
            NpcId::Purple => "purple",
        }
    }

    /// Look up an NPC by its string identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|npc| npc.as_str() == id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
