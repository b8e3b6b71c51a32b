//! The stone-push trial.

use hx_core::{GameState, ItemId, RoomId, progress::PUSHES_TO_FINISH};
use tracing::info;

use crate::error::{FictionError, FictionResult};
use crate::result::CommandResult;

const STRAIN: [&str; 4] = [
    "You push with all your might, but the stone immediately rolls back down.",
    "You feel a wave of fatigue coursing through your body.",
    "The stone shifts upward slightly, but it remains unbearably heavy.",
    "The stone slips again and crashes downward, as if mocking your persistence.",
];

/// Push the boulder once.
pub fn push(state: &mut GameState) -> FictionResult<CommandResult> {
    if state.room != RoomId::StoneCircle {
        return Err(FictionError::WrongPlace("There is no stone to push here."));
    }
    if state.stone.finished {
        return Ok(CommandResult::info(
            "The boulder rests at the top of the slope. Your trial is already complete.",
        ));
    }

    state.stone.pushes += 1;
    if state.stone.pushes < PUSHES_TO_FINISH {
        let strain = STRAIN[usize::from(state.stone.pushes) - 1];
        return Ok(CommandResult::success(format!(
            "{strain}\n(Type 'push stone' to continue, or 'leave' to walk away.)"
        )));
    }

    state.stone.finished = true;
    state.spawn(RoomId::StoneCircle, ItemId::StoneOfGrit);
    info!("stone trial finished");
    Ok(CommandResult::success(
        "With one last effort the boulder crests the slope and settles. A fragment breaks away and rolls to your feet.\n\
         You have obtained the token: Stone Fragment of Grit. Please put it away.\n\
         (Type 'take stone' to add it to your inventory.)",
    )
    .with_item(ItemId::StoneOfGrit))
}

/// Walk away from an unfinished trial, losing all progress.
pub fn leave(state: &mut GameState) -> FictionResult<CommandResult> {
    if state.room != RoomId::StoneCircle || !state.stone.in_progress() {
        return Err(FictionError::NotYet("You can't leave now."));
    }
    state.stone.pushes = 0;
    Ok(CommandResult::success(
        "The trial is unfinished. Without persistence, the stone grants you nothing.",
    ))
}
