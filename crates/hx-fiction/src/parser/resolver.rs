//! Item and NPC name resolution.
//!
//! Names resolve through a fixed alias table first, then the catalog id
//! (with spaces standing in for underscores). When nothing here matches,
//! the hint helpers suggest the closest name present in the room.

use hx_core::{ItemId, NpcId};
use strsim::jaro_winkler;

/// Minimum similarity score for a "Did you mean" hint (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

const ITEM_ALIASES: &[(&str, ItemId)] = &[
    ("feather", ItemId::FeatherOfFreedom),
    ("stone", ItemId::StoneOfGrit),
    ("seed", ItemId::SeedOfLove),
    ("orb", ItemId::OrbOfCreation),
    ("shield", ItemId::ShieldOfWisdom),
    ("flame", ItemId::FlameOfCourage),
    ("torch", ItemId::Torch),
    ("bird", ItemId::Bird),
    ("disk", ItemId::HexagramDisk),
    ("hexagram", ItemId::HexagramDisk),
    ("boulder", ItemId::BigStone),
    ("flowers", ItemId::Flowers),
    ("roses", ItemId::Flowers),
];

const NPC_ALIASES: &[(&str, NpcId)] = &[("rose", NpcId::Red), ("roses", NpcId::Red)];

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Resolve an item name, alias, or id.
pub fn resolve_item(input: &str) -> Option<ItemId> {
    let name = normalize(input);
    ITEM_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, item)| *item)
        .or_else(|| ItemId::from_id(&name.replace(' ', "_")))
}

/// Resolve an NPC name, alias, or id.
pub fn resolve_npc(input: &str) -> Option<NpcId> {
    let name = normalize(input);
    NPC_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, npc)| *npc)
        .or_else(|| NpcId::from_id(&name.replace(' ', "_")))
}

/// The candidate most similar to `input`, if any reaches the threshold.
pub fn best_match<'a>(input: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let input = normalize(input);
    if input.is_empty() {
        return None;
    }
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let score = jaro_winkler(&input, candidate);
        if score >= FUZZY_THRESHOLD && best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(name, _)| name)
}

fn hint(suggestion: Option<&str>) -> String {
    suggestion
        .map(|name| format!(" Did you mean '{name}'?"))
        .unwrap_or_default()
}

/// A " Did you mean ...?" suffix naming the closest item in `present`.
pub fn item_hint(input: &str, present: &[ItemId]) -> String {
    let candidates = present.iter().flat_map(|item| {
        ITEM_ALIASES
            .iter()
            .filter(move |(_, aliased)| aliased == item)
            .map(|(alias, _)| *alias)
            .chain(std::iter::once(item.as_str()))
    });
    hint(best_match(input, candidates))
}

/// A " Did you mean ...?" suffix naming the closest NPC in `present`.
pub fn npc_hint(input: &str, present: &[NpcId]) -> String {
    hint(best_match(input, present.iter().map(|npc| npc.as_str())))
}
