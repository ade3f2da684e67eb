//! Move log tracking.
//!
//! The log is the cost metric external solvers optimize against, so it is
//! append-only: entries are never removed or reordered.

use super::moves::Move;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Initial capacity reserved for a fresh log.
pub const INITIAL_MOVES_CAPACITY: usize = 128;

/// Chronological record of every primitive invoked on a machine.
///
/// # Example
///
/// ```rust
/// use pushswap::core::{Move, MoveLog};
///
/// let mut log = MoveLog::new();
/// log.record(Move::Pb);
/// log.record(Move::Ra);
/// log.record(Move::Pa);
///
/// assert_eq!(log.len(), 3);
/// assert_eq!(log.last(), Some(Move::Pa));
/// assert_eq!(log.render(), "pb\nra\npa\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl Default for MoveLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveLog {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(INITIAL_MOVES_CAPACITY),
        }
    }

    /// Append a move to the end of the log.
    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// All recorded moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Number of times `mv` was recorded.
    pub fn count(&self, mv: Move) -> usize {
        self.moves.iter().filter(|&&m| m == mv).count()
    }

    /// Occurrences of each move that appears at least once.
    pub fn tally(&self) -> BTreeMap<Move, usize> {
        let mut tally = BTreeMap::new();
        for &mv in &self.moves {
            *tally.entry(mv).or_insert(0) += 1;
        }
        tally
    }

    /// One token per line, each line newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.moves.len() * 4);
        for mv in &self.moves {
            out.push_str(mv.token());
            out.push('\n');
        }
        out
    }
}

impl From<Vec<Move>> for MoveLog {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}
