//! Restoring the Hexagram disk, the single win condition.

use hx_core::{Flag, GameState, ItemId, RoomId};
use tracing::info;

use crate::error::{FictionError, FictionResult};
use crate::result::CommandResult;

const RESTORED: &str = "The six tokens rise from your hands and orbit above the disk.
Streams of light converge, fusing into the fractured stone.
The Hexagram ascends, suspended in the sky, radiant and whole.
The courtyard floods with light, shadows dispelled, the path ahead revealed.

Final Guide:
\"Congratulations, traveler. You have walked through trials of courage, freedom, wisdom, creation, grit, and love,
and from each, you have gained more than symbols: you have gained yourself.

Remember, these six powers are not the end, but companions for your road ahead.
True completeness lies not in collecting, but in living them every day.
May the light you have kindled here guide your journey,
and may every step beyond this courtyard bring you strength, wonder, and joy.\"";

/// Place the six symbols into the disk.
///
/// Repeating the repair after success changes nothing and reports the game
/// as complete again.
pub fn repair(state: &mut GameState) -> FictionResult<CommandResult> {
    if state.room != RoomId::CourtyardFinale {
        return Err(FictionError::WrongPlace("You can't repair the disk now."));
    }
    if state.has_flag(Flag::DiskRepaired) {
        return Ok(CommandResult::info(
            "The Hexagram already hangs whole above the courtyard. Your journey is complete.",
        )
        .completing());
    }
    let missing = state.missing_symbols();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.into_iter().map(ItemId::name).collect();
        return Err(FictionError::MissingSymbols(names.join(", ")));
    }
    state.set_flag(Flag::DiskRepaired);
    info!("hexagram restored");
    Ok(CommandResult::success(RESTORED).completing())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_core::SYMBOLS;

    fn in_finale() -> GameState {
        let mut state = GameState::new();
        state.room = RoomId::CourtyardFinale;
        state
    }

    #[test]
    fn repair_names_missing_symbols() {
        let mut state = in_finale();
        for symbol in &SYMBOLS[..4] {
            state.grant(*symbol);
        }
        let err = repair(&mut state).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You don't have all the required symbols to repair the disk. Still missing: Stone of Grit, Seed of Love."
        );
        assert!(!state.has_flag(Flag::DiskRepaired));
    }

    #[test]
    fn repair_completes_the_game_idempotently() {
        let mut state = in_finale();
        for symbol in SYMBOLS {
            state.grant(symbol);
        }
        let done = repair(&mut state).unwrap();
        assert!(done.game_complete);
        assert!(state.has_flag(Flag::DiskRepaired));

        let before = state.clone();
        let again = repair(&mut state).unwrap();
        assert!(again.game_complete);
        assert_eq!(again.kind, crate::ResultKind::Info);
        assert_eq!(state, before);
    }

    #[test]
    fn repair_only_in_finale() {
        let mut state = GameState::new();
        assert!(matches!(repair(&mut state), Err(FictionError::WrongPlace(_))));
    }
}
