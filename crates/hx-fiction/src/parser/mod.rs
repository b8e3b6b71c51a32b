//! Command parsing and name resolution.

mod command;
mod resolver;

pub use command::{Command, parse_command};
pub use resolver::{best_match, item_hint, npc_hint, resolve_item, resolve_npc};
