pub mod play;
pub mod reset;
pub mod status;
