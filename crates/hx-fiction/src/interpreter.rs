//! Command dispatch as a pure state transition.
//!
//! [`interpret`] never mutates its input. Handlers work on a copy of the
//! state; the copy is adopted only when the handler succeeds, so a refused
//! command leaves the game exactly as it was.

use hx_core::GameState;
use tracing::{debug, info};

use crate::error::{FictionError, FictionResult};
use crate::parser::Command;
use crate::puzzle::{garden, library, stone, theater};
use crate::result::CommandResult;
use crate::{dialogue, finale, inventory, movement, narrator};

/// The next state and the result that explains it.
#[derive(Debug, Clone)]
pub struct Transition {
    /// The state after the command.
    pub state: GameState,
    /// What the command produced.
    pub result: CommandResult,
}

/// Apply a command to a state.
pub fn interpret(state: &GameState, command: &Command) -> Transition {
    let mut next = state.clone();
    match dispatch(&mut next, command) {
        Ok(result) => Transition {
            state: next,
            result,
        },
        Err(err) => {
            debug!(?command, %err, "command refused");
            Transition {
                state: state.clone(),
                result: CommandResult::error(err.to_string()),
            }
        }
    }
}

fn dispatch(state: &mut GameState, command: &Command) -> FictionResult<CommandResult> {
    debug!(?command, room = %state.room, "dispatch");
    match command {
        Command::Reset => {
            *state = GameState::new();
            info!("game reset");
            Ok(CommandResult::success("Game has been reset to the beginning."))
        }
        Command::Look => Ok(narrator::look(state)),
        Command::Move { direction } => movement::go(state, *direction),
        Command::GoNowhere => Err(FictionError::NoExit),
        Command::Take { item } => inventory::take(state, item),
        Command::TakeSeed => garden::take_seed(state),
        Command::Use { item } => inventory::use_item(state, item),
        Command::Talk { character } => dialogue::talk(state, character),
        Command::Inventory => Ok(inventory::list(state)),
        Command::Respond => dialogue::respond(state),
        Command::End => dialogue::end(state),
        Command::Release => inventory::release(state),
        Command::Path { path } => library::walk(state, *path),
        Command::Stage => theater::stage(state),
        Command::Create { choice } => theater::create(state, choice),
        Command::Continue => theater::proceed(state),
        Command::Cancel => theater::cancel(state),
        Command::PushStone => stone::push(state),
        Command::Leave => stone::leave(state),
        Command::Choose { rose } => garden::choose(state, rose),
        Command::Tend { step } => garden::tend(state, *step),
        Command::RepairDisk => finale::repair(state),
        Command::Help => Ok(narrator::help()),
        Command::Unknown { .. } => Err(FictionError::UnknownCommand),
    }
}
