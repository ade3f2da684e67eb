//! Pushswap: a deterministic two-stack machine
//!
//! Pushswap models the classic "sort two stacks with a fixed move vocabulary"
//! exercise. The machine owns stacks A and B, executes the eleven primitives
//! with exact edge-case behavior, and records every move so a solution can be
//! counted, replayed, or verified.
//!
//! The crate does not decide how to sort. Solvers live outside it and drive
//! the machine through its public operations.
//!
//! # Modules
//!
//! - [`core`]: the machine, its stacks, moves and move log
//! - [`script`]: parsing move scripts and checking them against an input
//! - [`checkpoint`]: serializable snapshots of a machine
//!
//! # Example
//!
//! ```rust
//! use pushswap::core::{Move, PushSwap};
//!
//! let mut machine = PushSwap::new(&[2, 1, 3]);
//! machine.sa();
//!
//! assert!(machine.is_solved());
//! assert_eq!(machine.moves(), vec![Move::Sa]);
//! assert_eq!(machine.log().render(), "sa\n");
//! ```

pub mod checkpoint;
pub mod core;
pub mod script;

// Re-export commonly used types
pub use crate::core::{Move, MoveLog, PushSwap};
pub use crate::script::{verify, Verdict};
