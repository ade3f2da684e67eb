//! Core two-stack machine types.
//!
//! This module contains everything the machine itself needs:
//! - The closed move vocabulary via [`Move`]
//! - A single integer [`Stack`] with no-op-safe primitives
//! - The append-only [`MoveLog`]
//! - The [`PushSwap`] machine tying them together
//!
//! Nothing in this module performs I/O or returns errors; every primitive is
//! total over any machine state.

mod history;
mod machine;
mod moves;
mod stack;

pub use history::{MoveLog, INITIAL_MOVES_CAPACITY};
pub use machine::PushSwap;
pub use moves::{Move, ParseMoveError};
pub use stack::{is_ordered, Stack};
