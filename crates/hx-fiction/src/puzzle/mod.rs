//! Puzzle sub-engines. Each is a small counter or step machine over a part
//! of [`GameState`](hx_core::GameState) that ends by dropping a symbol.

/// Garden rose choice and tending sequence.
pub mod garden;
/// Library paths of wisdom.
pub mod library;
/// Boulder pushing on the slope.
pub mod stone;
/// Stage creation in the theater.
pub mod theater;
