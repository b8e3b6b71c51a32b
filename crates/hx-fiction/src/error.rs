//! Error types for the fiction engine.
//!
//! Every [`FictionError`] is a user error: its Display text is the message
//! shown to the player, and the command that raised it leaves the game state
//! untouched.

use thiserror::Error;

/// Result type for command handlers.
pub type FictionResult<T> = Result<T, FictionError>;

/// Result type for save storage.
pub type StoreResult<T> = Result<T, StoreError>;

/// Refusals produced while handling a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FictionError {
    /// The verb is not recognized.
    #[error("Unknown command. Type 'help' for available commands.")]
    UnknownCommand,

    /// The current room has no exit that way.
    #[error("You can't go that way.")]
    NoExit,

    /// An exit exists but a prerequisite is unmet.
    #[error("{0}")]
    Blocked(String),

    /// The named item is not in the room.
    #[error("There is no such item here.{hint}")]
    NoSuchItem {
        /// Optional " Did you mean ...?" suffix.
        hint: String,
    },

    /// The named NPC is not in the room.
    #[error("There is no such person here.{hint}")]
    NoSuchPerson {
        /// Optional " Did you mean ...?" suffix.
        hint: String,
    },

    /// The item is already in the inventory.
    #[error("You already have that item.")]
    AlreadyHave,

    /// The item is not in the inventory.
    #[error("You don't have that item.")]
    NotCarrying,

    /// The item is scenery.
    #[error("You can't take the {0}.")]
    CannotTake(&'static str),

    /// The item has no use.
    #[error("You can't use that right now.")]
    CannotUse,

    /// `respond` or `end` without an active conversation.
    #[error("You're not in a conversation.")]
    NotInConversation,

    /// The active conversation has no replies left.
    #[error("Nothing more to say.")]
    NothingMoreToSay,

    /// The command only works in another room.
    #[error("{0}")]
    WrongPlace(&'static str),

    /// A prerequisite of the command is unmet.
    #[error("{0}")]
    NotYet(&'static str),

    /// The action was already completed.
    #[error("{0}")]
    AlreadyDone(&'static str),

    /// The argument is not one of the accepted choices.
    #[error("{0}")]
    InvalidChoice(&'static str),

    /// A garden step was attempted out of order.
    #[error("You should {expected} next.")]
    OutOfOrder {
        /// The step that must come next.
        expected: &'static str,
    },

    /// Disk repair attempted without all six symbols.
    #[error("You don't have all the required symbols to repair the disk. Still missing: {0}.")]
    MissingSymbols(String),
}

/// Failures of a save store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the save failed.
    #[error("save file error: {0}")]
    Io(#[from] std::io::Error),

    /// The save could not be encoded or decoded.
    #[error(transparent)]
    Codec(#[from] hx_core::HxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_player_facing() {
        assert_eq!(
            FictionError::OutOfOrder { expected: "water" }.to_string(),
            "You should water next."
        );
        assert_eq!(
            FictionError::NoSuchItem {
                hint: " Did you mean 'torch'?".to_string()
            }
            .to_string(),
            "There is no such item here. Did you mean 'torch'?"
        );
        assert_eq!(
            FictionError::CannotTake("Big Stone").to_string(),
            "You can't take the Big Stone."
        );
    }

    #[test]
    fn store_error_wraps_io() {
        let err: StoreError = std::io::Error::other("disk full").into();
        assert_eq!(err.to_string(), "save file error: disk full");
    }
}
