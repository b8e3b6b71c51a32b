//! Uniform command results.

use hx_core::{ItemId, RoomId};
use serde::Serialize;

/// The kind of a command result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// The command was refused. State is unchanged.
    Error,
    /// A read-only or no-op notice.
    Info,
    /// The command succeeded.
    Success,
    /// The player changed rooms.
    Move,
    /// A room description.
    Look,
}

/// What a command produced, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    /// Result kind.
    pub kind: ResultKind,
    /// Narrative text with embedded command hints.
    pub message: String,
    /// Room the result refers to (moves and looks).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomId>,
    /// Item the result refers to (takes and spawns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemId>,
    /// Set once the Hexagram is restored.
    pub game_complete: bool,
}

impl CommandResult {
    fn new(kind: ResultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            room: None,
            item: None,
            game_complete: false,
        }
    }

    /// A refusal.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ResultKind::Error, message)
    }

    /// A notice that changes nothing.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ResultKind::Info, message)
    }

    /// A successful action.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ResultKind::Success, message)
    }

    /// A room transition.
    pub fn moved(room: RoomId, message: impl Into<String>) -> Self {
        Self {
            room: Some(room),
            ..Self::new(ResultKind::Move, message)
        }
    }

    /// A room description.
    pub fn look(room: RoomId, message: impl Into<String>) -> Self {
        Self {
            room: Some(room),
            ..Self::new(ResultKind::Look, message)
        }
    }

    /// Attach the affected item.
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    /// Mark the game as complete.
    pub fn completing(mut self) -> Self {
        self.game_complete = true;
        self
    }

    /// Whether this result is a refusal.
    pub fn is_error(&self) -> bool {
        self.kind == ResultKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_for_presentation() {
        let result = CommandResult::success("You take the Torch.").with_item(ItemId::Torch);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["kind"], "success");
        assert_eq!(value["item"], "torch");
        assert_eq!(value["gameComplete"], false);
        assert!(value.get("room").is_none());
    }

    #[test]
    fn builders() {
        let result = CommandResult::moved(RoomId::Cave, "You are in a dark, damp cave.");
        assert_eq!(result.kind, ResultKind::Move);
        assert_eq!(result.room, Some(RoomId::Cave));
        assert!(!result.is_error());
        assert!(CommandResult::info("done").completing().game_complete);
        assert!(CommandResult::error("no").is_error());
    }
}
