//! Serializable snapshot of a game in progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HxError, HxResult};
use crate::state::GameState;

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The full game state plus save metadata.
///
/// Set-valued fields are written as ordered JSON lists and read back into
/// sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version.
    pub version: u32,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// The captured state.
    pub state: GameState,
}

impl Snapshot {
    /// Capture the given state now.
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            state: state.clone(),
        }
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> HxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON, rejecting snapshots from other format versions.
    pub fn from_json(json: &str) -> HxResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(HxError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }

    /// Consume the snapshot, yielding the state.
    pub fn into_state(self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ItemId, NpcId, RoomId};
    use crate::progress::WisdomPath;
    use crate::state::{Conversation, Flag, Topic};

    fn played_state() -> GameState {
        let mut state = GameState::new();
        state.room = RoomId::Cave;
        state.take_from_room(ItemId::Torch);
        state.set_flag(Flag::TorchLit);
        state.reveal_npc(RoomId::Cave, NpcId::Prisoner);
        state.talked.mark_cave(NpcId::Prisoner);
        state.talked.mark_path(WisdomPath::Live);
        state.dialogue = Some(Conversation {
            topic: Topic::Prisoner,
            turn: 1,
        });
        state
    }

    #[test]
    fn sets_are_written_as_lists() {
        let json = Snapshot::capture(&played_state()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let state = &value["state"];
        assert_eq!(state["inventory"], serde_json::json!(["torch"]));
        assert_eq!(state["talked"]["cave"], serde_json::json!(["prisoner"]));
        assert_eq!(state["flags"], serde_json::json!(["torch_lit"]));
    }

    #[test]
    fn restored_state_matches_captured_state() {
        let state = played_state();
        let json = Snapshot::capture(&state).to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap().into_state();
        assert_eq!(restored, state);
        assert!(restored.overlay().has_npc(RoomId::Cave, NpcId::Prisoner));
    }

    #[test]
    fn other_versions_are_rejected() {
        let mut snapshot = Snapshot::capture(&GameState::new());
        snapshot.version = 99;
        let json = serde_json::to_string(&snapshot).unwrap();
        let err = Snapshot::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            HxError::UnsupportedVersion { found: 99, .. }
        ));
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(
            Snapshot::from_json("{not json"),
            Err(HxError::Json(_))
        ));
    }
}
