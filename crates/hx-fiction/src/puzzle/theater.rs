//! The theater stage: arm, choose a creation, grow it in three steps.

use hx_core::{Creation, Flag, GameState, ItemId, RoomId, Stage};
use tracing::info;

use crate::error::{FictionError, FictionResult};
use crate::result::CommandResult;

const PROCEED_HINT: &str = "(Type 'continue' to proceed or 'cancel' to choose again)";

fn growth(choice: Creation, step: u8) -> &'static str {
    match (choice, step) {
        (Creation::Star, 1) => "A lonely speck of light appears on the dome, faint yet stubbornly shining.",
        (Creation::Star, 2) => "The speck expands into a nebula; stars breathe, lighting up the surroundings.",
        (Creation::Star, _) => {
            "A vast galaxy spans the stage; the theater becomes endless cosmos.\n(Symbol: Infinity · Exploration · Imagination)"
        }
        (Creation::Tree, 1) => "A tiny seed sprouts at your feet, growing into a sapling, then a towering tree.",
        (Creation::Tree, 2) => "The tree's branches stretch, leaves unfurl, roots dig deep into the stage.",
        (Creation::Tree, _) => {
            "The tree bursts into bloom, fruits shining like jewels; the theater is filled with life.\n(Symbol: Growth · Vitality · Hope)"
        }
        (Creation::Castle, 1) => "A faint outline of a castle emerges, stone by stone, reaching for the sky.",
        (Creation::Castle, 2) => "The castle walls rise, towers spiral upward, banners flutter in unseen wind.",
        (Creation::Castle, _) => {
            "The castle stands complete, a beacon of protection and dreams.\n(Symbol: Shelter · Aspiration · Creation)"
        }
    }
}

/// Step onto the stage and arm creation mode.
pub fn stage(state: &mut GameState) -> FictionResult<CommandResult> {
    if state.room != RoomId::Theater {
        return Err(FictionError::WrongPlace("You are not on the stage."));
    }
    if state.talked.theater().len() < 2 {
        return Err(FictionError::NotYet(
            "You should talk to both Einstein and Marx before stepping onto the stage.",
        ));
    }
    if state.has_flag(Flag::OrbReady) {
        return Err(FictionError::AlreadyDone(
            "Your creation is complete. The stage has nothing more to ask of you.",
        ));
    }
    state.stage = Stage {
        armed: true,
        choice: None,
        step: 0,
    };
    Ok(CommandResult::success(
        "As you set foot upon the stage, the spotlight snaps on. In this moment, you are the creator.\n\
         Choose the symbol you wish to create on stage.\n\
         (Type 'create star', 'create tree', or 'create castle')",
    ))
}

/// Lock a creation choice and begin growing it.
pub fn create(state: &mut GameState, choice: &str) -> FictionResult<CommandResult> {
    if !state.stage.armed {
        return Err(FictionError::NotYet("You are not on the stage."));
    }
    if state.stage.choice.is_some() {
        return Err(FictionError::AlreadyDone(
            "Your creation has already begun. (Type 'continue' to proceed or 'cancel' to choose again)",
        ));
    }
    let choice = Creation::parse(choice).ok_or(FictionError::InvalidChoice(
        "You can only create: star, tree, or castle.",
    ))?;
    state.stage.choice = Some(choice);
    state.stage.step = 1;
    Ok(CommandResult::success(format!(
        "{}\n{PROCEED_HINT}",
        growth(choice, 1)
    )))
}

/// Advance the creation. The third step produces the orb and ends creation
/// mode for good.
pub fn proceed(state: &mut GameState) -> FictionResult<CommandResult> {
    let choice = state
        .stage
        .choice
        .filter(|_| state.stage.armed)
        .ok_or(FictionError::NotYet("Nothing to continue."))?;

    state.stage.step += 1;
    let text = growth(choice, state.stage.step);
    if state.stage.step < 3 {
        return Ok(CommandResult::success(format!("{text}\n{PROCEED_HINT}")));
    }

    state.stage.armed = false;
    state.set_flag(Flag::OrbReady);
    state.spawn(RoomId::Theater, ItemId::OrbOfCreation);
    info!(%choice, "stage creation complete");
    Ok(CommandResult::success(format!(
        "{text}\n\nThe stage light converges at your feet. Your vision crystallizes into a radiant orb.\n\
         (Type 'take orb' to claim your reward.)"
    ))
    .with_item(ItemId::OrbOfCreation))
}

/// Discard the current choice without leaving the stage.
pub fn cancel(state: &mut GameState) -> FictionResult<CommandResult> {
    if !state.stage.armed {
        return Err(FictionError::NotYet("Nothing to cancel."));
    }
    state.stage.choice = None;
    state.stage.step = 0;
    Ok(CommandResult::success(
        "You step back. Choose again: (Type 'create star', 'create tree', or 'create castle')",
    ))
}
