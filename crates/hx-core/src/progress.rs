//! Puzzle counters and talked/visited sets.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::NpcId;

/// One of the three garden roses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoseColor {
    /// Red Rose.
    Red,
    /// White Rose.
    White,
    /// Purple Rose.
    Purple,
}

impl RoseColor {
    /// All roses.
    pub const ALL: [RoseColor; 3] = [RoseColor::Red, RoseColor::White, RoseColor::Purple];

    /// Parse a rose color (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Some(Self::Red),
            "white" => Some(Self::White),
            "purple" => Some(Self::Purple),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::White => "white",
            Self::Purple => "purple",
        }
    }

    /// The NPC that speaks for this rose.
    pub fn npc(self) -> NpcId {
        match self {
            Self::Red => NpcId::Red,
            Self::White => NpcId::White,
            Self::Purple => NpcId::Purple,
        }
    }

    /// The rose an NPC speaks for, if it is one.
    pub fn from_npc(npc: NpcId) -> Option<Self> {
        match npc {
            NpcId::Red => Some(Self::Red),
            NpcId::White => Some(Self::White),
            NpcId::Purple => Some(Self::Purple),
            _ => None,
        }
    }
}

impl fmt::Display for RoseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the player creates on the theater stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Creation {
    /// A star that grows into a galaxy.
    Star,
    /// A seed that grows into a blooming tree.
    Tree,
    /// A castle raised stone by stone.
    Castle,
}

impl Creation {
    /// Parse a creation choice (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "star" => Some(Self::Star),
            "tree" => Some(Self::Tree),
            "castle" => Some(Self::Castle),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Tree => "tree",
            Self::Castle => "castle",
        }
    }
}

impl fmt::Display for Creation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four library paths of wisdom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WisdomPath {
    /// Learning and understanding.
    Learn,
    /// Living and experience.
    Live,
    /// Dialogue and communication.
    Dialogue,
    /// Thinking and reflection.
    Reflect,
}

impl WisdomPath {
    /// All paths.
    pub const ALL: [WisdomPath; 4] = [
        WisdomPath::Learn,
        WisdomPath::Live,
        WisdomPath::Dialogue,
        WisdomPath::Reflect,
    ];

    /// Parse a path verb.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "learn" => Some(Self::Learn),
            "live" => Some(Self::Live),
            "dialogue" => Some(Self::Dialogue),
            "reflect" => Some(Self::Reflect),
            _ => None,
        }
    }
}

/// Number of pushes that completes the stone trial.
pub const PUSHES_TO_FINISH: u8 = 5;

/// Progress of the stone-push trial on the slope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneTrial {
    /// Pushes made in the current attempt.
    pub pushes: u8,
    /// Set once the fifth push lands. Never cleared.
    pub finished: bool,
}

impl StoneTrial {
    /// An attempt has started and not yet finished.
    pub fn in_progress(&self) -> bool {
        !self.finished && self.pushes > 0
    }
}

/// Progress of the theater creation sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Creation mode is armed (the player stands on the stage).
    pub armed: bool,
    /// The locked creation choice, if any.
    pub choice: Option<Creation>,
    /// 0 = nothing chosen, 1..=3 = creation steps.
    pub step: u8,
}

/// Progress of the garden rose-tending sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenPlot {
    /// The rose chosen, once and for all.
    pub chosen: Option<RoseColor>,
    /// Tending steps completed, 0..=5.
    pub step: u8,
}

/// One action of the garden tending sequence, in required order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GardenStep {
    /// Water the soil.
    Water,
    /// Nourish the sprout.
    Fertilize,
    /// Clear away the weeds.
    Weed,
    /// Whisper a blessing.
    Wish,
    /// Watch it bloom.
    Wait,
}

impl GardenStep {
    /// The tending sequence.
    pub const ORDER: [GardenStep; 5] = [
        GardenStep::Water,
        GardenStep::Fertilize,
        GardenStep::Weed,
        GardenStep::Wish,
        GardenStep::Wait,
    ];

    /// Parse a tending verb.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|step| step.verb() == s.trim())
    }

    /// The command verb for this step.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Fertilize => "fertilize",
            Self::Weed => "weed",
            Self::Wish => "wish",
            Self::Wait => "wait",
        }
    }
}

impl fmt::Display for GardenStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl GardenPlot {
    /// The next tending action, or `None` once the rose has bloomed.
    pub fn next_step(&self) -> Option<GardenStep> {
        GardenStep::ORDER.get(usize::from(self.step)).copied()
    }
}

/// Talked/visited sets. Members can be added but never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talked {
    cave: BTreeSet<NpcId>,
    theater: BTreeSet<NpcId>,
    roses: BTreeSet<RoseColor>,
    paths: BTreeSet<WisdomPath>,
}

impl Talked {
    /// Record a conversation with a cave NPC. Returns true if new.
    pub fn mark_cave(&mut self, npc: NpcId) -> bool {
        self.cave.insert(npc)
    }

    /// Record a conversation with a theater NPC. Returns true if new.
    pub fn mark_theater(&mut self, npc: NpcId) -> bool {
        self.theater.insert(npc)
    }

    /// Record a conversation with a garden rose. Returns true if new.
    pub fn mark_rose(&mut self, rose: RoseColor) -> bool {
        self.roses.insert(rose)
    }

    /// Record a walked library path. Returns true if new.
    pub fn mark_path(&mut self, path: WisdomPath) -> bool {
        self.paths.insert(path)
    }

    /// Cave NPCs talked to.
    pub fn cave(&self) -> &BTreeSet<NpcId> {
        &self.cave
    }

    /// Theater NPCs talked to.
    pub fn theater(&self) -> &BTreeSet<NpcId> {
        &self.theater
    }

    /// Garden roses talked to.
    pub fn roses(&self) -> &BTreeSet<RoseColor> {
        &self.roses
    }

    /// Library paths walked.
    pub fn paths(&self) -> &BTreeSet<WisdomPath> {
        &self.paths
    }

    /// Total number of members across all sets.
    pub fn total(&self) -> usize {
        self.cave.len() + self.theater.len() + self.roses.len() + self.paths.len()
    }

    /// Every member of `earlier` is still a member of `self`.
    pub fn contains_all(&self, earlier: &Talked) -> bool {
        self.cave.is_superset(&earlier.cave)
            && self.theater.is_superset(&earlier.theater)
            && self.roses.is_superset(&earlier.roses)
            && self.paths.is_superset(&earlier.paths)
    }
}
